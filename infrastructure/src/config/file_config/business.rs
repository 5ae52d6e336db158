//! Business profile from TOML (`[business]` and `[[responses]]` sections)

use autoreply_domain::CommonResponse;
use serde::{Deserialize, Serialize};

/// Raw business profile
///
/// # Example
///
/// ```toml
/// [business]
/// name = "Acme Plumbing"
/// hours = "8:00 AM - 6:00 PM"
/// categories = ["General", "Sales", "Emergency"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBusinessConfig {
    pub name: Option<String>,
    pub hours: Option<String>,
    pub categories: Option<Vec<String>>,
}

/// One canned response (`[[responses]]` entry)
///
/// ```toml
/// [[responses]]
/// trigger = "pricing"
/// response = "Our pricing starts at $99/month."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCommonResponse {
    pub trigger: String,
    pub response: String,
}

impl FileCommonResponse {
    /// Convert to the domain type; ids are 1-based positions in the file
    pub fn to_common_responses(entries: &[FileCommonResponse]) -> Vec<CommonResponse> {
        entries
            .iter()
            .enumerate()
            .map(|(i, r)| CommonResponse::new(i as u32 + 1, r.trigger.clone(), r.response.clone()))
            .collect()
    }
}
