//! Domain models for Outlay

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::error::{Error, Result};

/// Categories seeded when no data exists anywhere.
pub const DEFAULT_CATEGORIES: [&str; 6] =
    ["Food", "Clothing", "Transport", "Rent", "Other", "Cosmetic"];

/// A stored expense. The date always carries the canonical calendar
/// components; display formatting is derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
}

/// An expense as submitted by the user, before validation. The date is
/// still raw text and may be in any supported format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpense {
    pub category: String,
    pub amount: f64,
    pub date: String,
}

impl NewExpense {
    /// Validate the submission and return the parsed date.
    ///
    /// Validation runs before any store mutation: a non-positive amount,
    /// empty category, or unparseable date never reaches the store.
    pub fn validate(&self) -> Result<NaiveDate> {
        if !(self.amount > 0.0) {
            return Err(Error::Validation("Amount must be a positive number".into()));
        }
        if self.category.trim().is_empty() {
            return Err(Error::Validation("Please select a category".into()));
        }
        if self.date.trim().is_empty() {
            return Err(Error::Validation("Please select a date".into()));
        }
        dates::parse(&self.date)
    }
}

/// Report kinds, determining the aggregation grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    Category,
    MonthComparison,
    YearComparison,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::MonthComparison => "month-comparison",
            Self::YearComparison => "year-comparison",
        }
    }
}

impl std::str::FromStr for ReportKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "category" => Ok(Self::Category),
            "month-comparison" => Ok(Self::MonthComparison),
            "year-comparison" => Ok(Self::YearComparison),
            other => Err(Error::InvalidReportKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A report request as it crosses the wire.
///
/// `category` of `"all"` (or absent) means no category filter. Dates are
/// raw text and normalized by the aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    #[serde(rename = "type")]
    pub kind: ReportKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl ReportRequest {
    pub fn category_report(category: &str, start_date: &str, end_date: &str) -> Self {
        Self {
            kind: ReportKind::Category,
            category: Some(category.to_string()),
            start_date: Some(start_date.to_string()),
            end_date: Some(end_date.to_string()),
        }
    }

    pub fn comparison(kind: ReportKind) -> Self {
        Self {
            kind,
            category: None,
            start_date: None,
            end_date: None,
        }
    }
}

/// The single result shape shared by all three report kinds, so one
/// rendering path can consume any of them. `labels` and `values` are
/// always parallel and equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResult {
    #[serde(rename = "type")]
    pub kind: ReportKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    /// Human-readable name of the current period ("September 2023", "2023").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difference: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_change: Option<f64>,
}
