//! Read-side message filtering
//!
//! [`MessageFilter`] combines a status, category and date-range constraint.
//! It never mutates messages; date ranges are evaluated against a caller
//! supplied "now" so results are deterministic.

use super::entities::{Message, MessageStatus};
use crate::core::error::DomainError;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Status constraint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    Any,
    Pending,
    Answered,
}

impl StatusFilter {
    pub fn matches(&self, status: MessageStatus) -> bool {
        match self {
            StatusFilter::Any => true,
            StatusFilter::Pending => status == MessageStatus::Pending,
            StatusFilter::Answered => status == MessageStatus::Answered,
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "any" => Ok(StatusFilter::Any),
            "pending" => Ok(StatusFilter::Pending),
            "answered" => Ok(StatusFilter::Answered),
            other => Err(DomainError::InvalidFilter(format!("status '{other}'"))),
        }
    }
}

/// Category constraint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    Any,
    Named(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Named(name) => name.eq_ignore_ascii_case(category),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::InvalidFilter("empty category".to_string()));
        }
        if s.eq_ignore_ascii_case("all") || s.eq_ignore_ascii_case("any") {
            Ok(CategoryFilter::Any)
        } else {
            Ok(CategoryFilter::Named(s.to_string()))
        }
    }
}

/// Date-range constraint, relative to "now"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRange {
    #[default]
    Any,
    /// Same calendar day
    Today,
    /// Same ISO week
    ThisWeek,
    /// Same calendar month
    ThisMonth,
}

impl DateRange {
    pub fn contains(&self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let (ts, now) = (timestamp.date_naive(), now.date_naive());
        match self {
            DateRange::Any => true,
            DateRange::Today => ts == now,
            DateRange::ThisWeek => ts.iso_week() == now.iso_week(),
            DateRange::ThisMonth => ts.year() == now.year() && ts.month() == now.month(),
        }
    }
}

impl std::str::FromStr for DateRange {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "any" => Ok(DateRange::Any),
            "today" => Ok(DateRange::Today),
            "week" | "this_week" => Ok(DateRange::ThisWeek),
            "month" | "this_month" => Ok(DateRange::ThisMonth),
            other => Err(DomainError::InvalidFilter(format!("date range '{other}'"))),
        }
    }
}

/// Combined message filter (Value Object)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageFilter {
    pub status: StatusFilter,
    pub category: CategoryFilter,
    pub date_range: DateRange,
}

impl MessageFilter {
    /// A filter that matches every message
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    pub fn matches(&self, message: &Message, now: DateTime<Utc>) -> bool {
        self.status.matches(message.status())
            && self.category.matches(message.category())
            && self.date_range.contains(message.timestamp(), now)
    }
}
