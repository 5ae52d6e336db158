//! Dashboard session domain.
//!
//! - [`entities::SessionState`]: anonymous or authenticated
//! - [`entities::User`]: the logged-in operator

pub mod entities;
