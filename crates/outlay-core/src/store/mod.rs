//! Expense and category stores
//!
//! Two tiers behind one front:
//!
//! - [`LocalStore`] persists to a JSON file and is always present; it is
//!   the system of record whenever the remote is unavailable.
//! - [`RemoteStore`] talks to the REST API.
//! - [`Store`] composes the two, decided once at construction: every
//!   operation tries the remote first and transparently falls back to the
//!   local cache on failure. Successful remote reads refresh the cache.

use chrono::NaiveDate;
use tracing::warn;

mod local;
mod remote;

pub use local::LocalStore;
pub use remote::RemoteStore;

use crate::error::Result;
use crate::models::{Expense, NewExpense, ReportRequest, ReportResult};

/// Two-tier store front: optional remote tier over the local cache.
pub struct Store {
    remote: Option<RemoteStore>,
    local: LocalStore,
}

impl Store {
    /// Local-only store.
    pub fn local(local: LocalStore) -> Self {
        Self {
            remote: None,
            local,
        }
    }

    /// Remote-backed store with the given local cache.
    pub fn with_remote(remote: RemoteStore, local: LocalStore) -> Self {
        Self {
            remote: Some(remote),
            local,
        }
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// List all expenses. A successful remote read refreshes the local
    /// cache so it stays usable offline.
    pub async fn expenses(&mut self) -> Result<Vec<Expense>> {
        if let Some(remote) = &self.remote {
            match remote.list_expenses().await {
                Ok(expenses) => {
                    self.local.replace_expenses(expenses.clone())?;
                    return Ok(expenses);
                }
                Err(e) => warn!(error = %e, "remote expense fetch failed, using local cache"),
            }
        }
        Ok(self.local.expenses().to_vec())
    }

    /// Add an expense. Validation happens before either tier is touched.
    pub async fn add_expense(&mut self, new: NewExpense) -> Result<Expense> {
        new.validate()?;

        if let Some(remote) = &self.remote {
            match remote.add_expense(&new).await {
                Ok(expense) => {
                    // Mirror into the cache; a cache miss here is not fatal.
                    if let Err(e) = self.local.add_expense(new) {
                        warn!(error = %e, "failed to mirror expense into local cache");
                    }
                    return Ok(expense);
                }
                Err(e) => warn!(error = %e, "remote add failed, storing expense locally"),
            }
        }
        self.local.add_expense(new)
    }

    pub async fn delete_expense(&mut self, id: i64) -> Result<()> {
        if let Some(remote) = &self.remote {
            match remote.delete_expense(id).await {
                Ok(()) => {
                    if let Err(e) = self.local.delete_expense(id) {
                        warn!(error = %e, "failed to mirror deletion into local cache");
                    }
                    return Ok(());
                }
                Err(e) => warn!(error = %e, "remote delete failed, deleting locally"),
            }
        }
        self.local.delete_expense(id)
    }

    pub async fn categories(&mut self) -> Result<Vec<String>> {
        if let Some(remote) = &self.remote {
            match remote.list_categories().await {
                Ok(categories) if !categories.is_empty() => {
                    self.local.replace_categories(categories.clone())?;
                    return Ok(categories);
                }
                Ok(_) => warn!("remote returned no categories, using local defaults"),
                Err(e) => warn!(error = %e, "remote category fetch failed, using local cache"),
            }
        }
        Ok(self.local.categories().to_vec())
    }

    pub async fn add_category(&mut self, name: &str) -> Result<()> {
        if let Some(remote) = &self.remote {
            match remote.add_category(name).await {
                Ok(()) => {
                    if let Err(e) = self.local.add_category(name) {
                        warn!(error = %e, "failed to mirror category into local cache");
                    }
                    return Ok(());
                }
                Err(e) => warn!(error = %e, "remote add failed, storing category locally"),
            }
        }
        self.local.add_category(name)
    }

    pub async fn delete_category(&mut self, name: &str) -> Result<()> {
        if let Some(remote) = &self.remote {
            match remote.delete_category(name).await {
                Ok(()) => {
                    if let Err(e) = self.local.delete_category(name) {
                        warn!(error = %e, "failed to mirror deletion into local cache");
                    }
                    return Ok(());
                }
                Err(e) => warn!(error = %e, "remote delete failed, deleting locally"),
            }
        }
        self.local.delete_category(name)
    }

    /// Generate a report, preferring the remote report endpoint and
    /// falling back to local aggregation. Request validation errors
    /// (missing date range, unknown kind) are never swallowed by the
    /// fallback; they surface from the local path as well.
    pub async fn generate_report(
        &mut self,
        request: &ReportRequest,
        today: NaiveDate,
    ) -> Result<ReportResult> {
        if let Some(remote) = &self.remote {
            match remote.generate_report(request, today).await {
                Ok(result) => return Ok(result),
                Err(e) => warn!(error = %e, "remote report failed, aggregating locally"),
            }
        }
        self.local.generate_report(request, today)
    }
}
