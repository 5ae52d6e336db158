//! Customer message domain.
//!
//! - [`entities::Message`]: a customer inquiry and its reply
//! - [`filter::MessageFilter`]: read-side status/category/date predicate

pub mod entities;
pub mod filter;
