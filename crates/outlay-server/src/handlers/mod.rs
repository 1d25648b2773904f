//! HTTP request handlers organized by domain

pub mod categories;
pub mod expenses;
pub mod reports;

// Re-export all handlers for use in router
pub use categories::*;
pub use expenses::*;
pub use reports::*;
