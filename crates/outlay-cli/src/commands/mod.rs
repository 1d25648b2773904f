//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `expenses` - Expense commands (add, list, delete)
//! - `categories` - Category management commands
//! - `reports` - Report generation commands
//! - `serve` - Web server command

pub mod categories;
pub mod expenses;
pub mod reports;
pub mod serve;

// Re-export command functions for main.rs
pub use categories::*;
pub use expenses::*;
pub use reports::*;
pub use serve::*;

use std::path::Path;

use anyhow::Result;
use outlay_core::{LocalStore, RemoteStore, Store};
use tracing::debug;

/// Open the store the global flags describe: the local data file, with
/// a remote tier layered on top when --api is set.
pub fn open_store(data: Option<&Path>, api: Option<&str>) -> Result<Store> {
    let path = data
        .map(|p| p.to_path_buf())
        .unwrap_or_else(LocalStore::default_path);
    debug!(path = %path.display(), remote = api.is_some(), "opening store");
    let local = LocalStore::open(path)?;

    Ok(match api {
        Some(base_url) => Store::with_remote(RemoteStore::new(base_url), local),
        None => Store::local(local),
    })
}

/// Truncate a string for table display.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
