//! Outlay Core Library
//!
//! Shared functionality for the Outlay expense tracker:
//! - Date normalization across ISO, US, and European input formats
//! - Report aggregation (category, month-over-month, year-over-year)
//! - Expense and category stores with a local JSON-file tier and an
//!   optional remote REST tier with transparent fallback

pub mod dates;
pub mod error;
pub mod models;
pub mod reports;
pub mod store;

pub use error::{Error, Result};
pub use models::{
    Expense, NewExpense, ReportKind, ReportRequest, ReportResult, DEFAULT_CATEGORIES,
};
pub use store::{LocalStore, RemoteStore, Store};
