//! Local JSON-file store

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{Expense, NewExpense, ReportRequest, ReportResult, DEFAULT_CATEGORIES};
use crate::reports;

/// On-disk shape of the store file. Ids are never reused, even after
/// deletion, so `next_id` is persisted alongside the data.
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    expenses: Vec<Expense>,
    categories: Vec<String>,
    next_id: i64,
}

impl Default for StoreFile {
    fn default() -> Self {
        Self {
            expenses: Vec::new(),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            next_id: 1,
        }
    }
}

/// File-backed expense store. Every mutation is written through to disk
/// before it returns, so a crash never loses an acknowledged write.
pub struct LocalStore {
    path: Option<PathBuf>,
    data: StoreFile,
}

impl LocalStore {
    /// Open the store at `path`, creating it (with the default category
    /// set and no expenses) when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let data = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            StoreFile::default()
        };
        debug!(path = %path.display(), expenses = data.expenses.len(), "opened local store");
        let mut store = Self {
            path: Some(path),
            data,
        };
        // First open writes the seeded defaults out immediately.
        store.save()?;
        Ok(store)
    }

    /// In-memory store, never touching disk. Used by tests and as the
    /// cache tier when no data path is configured.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: StoreFile::default(),
        }
    }

    /// Default store location under the platform data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("outlay")
            .join("outlay.json")
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn save(&mut self) -> Result<()> {
        if let Some(path) = &self.path {
            let raw = serde_json::to_string_pretty(&self.data)?;
            fs::write(path, raw)?;
        }
        Ok(())
    }

    /// All expenses, in insertion order.
    pub fn expenses(&self) -> &[Expense] {
        &self.data.expenses
    }

    /// Validate and store a new expense, assigning the next id.
    pub fn add_expense(&mut self, new: NewExpense) -> Result<Expense> {
        let date = new.validate()?;
        let expense = Expense {
            id: self.data.next_id,
            category: new.category.trim().to_string(),
            amount: new.amount,
            date,
        };
        self.data.next_id += 1;
        self.data.expenses.push(expense.clone());
        self.save()?;
        info!(id = expense.id, category = %expense.category, "added expense");
        Ok(expense)
    }

    pub fn delete_expense(&mut self, id: i64) -> Result<()> {
        let before = self.data.expenses.len();
        self.data.expenses.retain(|e| e.id != id);
        if self.data.expenses.len() == before {
            return Err(Error::NotFound(format!("expense {id}")));
        }
        self.save()?;
        info!(id, "deleted expense");
        Ok(())
    }

    /// Replace the expense collection wholesale, used when a remote read
    /// refreshes the cache. The id counter advances past the highest
    /// incoming id so later local inserts cannot collide.
    pub fn replace_expenses(&mut self, expenses: Vec<Expense>) -> Result<()> {
        let max_id = expenses.iter().map(|e| e.id).max().unwrap_or(0);
        self.data.next_id = self.data.next_id.max(max_id + 1);
        self.data.expenses = expenses;
        self.save()
    }

    pub fn categories(&self) -> &[String] {
        &self.data.categories
    }

    /// Add a category. Uniqueness is exact match, case-sensitive, so
    /// "food" and "Food" are distinct categories.
    pub fn add_category(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation("Category name cannot be empty".into()));
        }
        if self.data.categories.iter().any(|c| c == name) {
            return Err(Error::DuplicateCategory(name.to_string()));
        }
        self.data.categories.push(name.to_string());
        self.save()?;
        info!(category = name, "added category");
        Ok(())
    }

    /// Remove a category. Existing expenses in that category are left
    /// untouched; deletion never cascades.
    pub fn delete_category(&mut self, name: &str) -> Result<()> {
        let before = self.data.categories.len();
        self.data.categories.retain(|c| c != name);
        if self.data.categories.len() == before {
            return Err(Error::NotFound(format!("category {name}")));
        }
        self.save()?;
        info!(category = name, "deleted category");
        Ok(())
    }

    pub fn replace_categories(&mut self, categories: Vec<String>) -> Result<()> {
        self.data.categories = categories;
        self.save()
    }

    pub fn generate_report(
        &self,
        request: &ReportRequest,
        today: NaiveDate,
    ) -> Result<ReportResult> {
        reports::generate(&self.data.expenses, request, today)
    }
}
