//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Outlay - Track expenses and see where the money goes
#[derive(Parser)]
#[command(name = "outlay")]
#[command(about = "Expense tracker with category and trend reports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data file path (defaults to the platform data directory)
    #[arg(long, global = true, env = "OUTLAY_DATA")]
    pub data: Option<PathBuf>,

    /// Remote API base URL; when set, commands go through the API and
    /// fall back to the local data file if it is unreachable
    #[arg(long, global = true, env = "OUTLAY_API_URL")]
    pub api: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an expense
    Add {
        /// Expense category
        #[arg(short, long)]
        category: String,

        /// Amount spent
        #[arg(short, long)]
        amount: f64,

        /// Date (YYYY-MM-DD, MM/DD/YYYY, or DD.MM.YYYY; defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses, newest first
    List {
        /// Maximum number of expenses to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Delete an expense by id
    Delete {
        /// Expense id
        id: i64,
    },

    /// Manage categories
    Categories {
        #[command(subcommand)]
        action: Option<CategoriesAction>,
    },

    /// Generate a report
    Report {
        #[command(subcommand)]
        kind: ReportCommand,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Allowed CORS origin (repeatable)
        #[arg(long = "cors-origin")]
        cors_origins: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum CategoriesAction {
    /// Add a category
    Add {
        /// Category name
        name: String,
    },

    /// Remove a category (existing expenses are kept)
    Remove {
        /// Category name
        name: String,
    },
}

#[derive(Subcommand)]
pub enum ReportCommand {
    /// Spending by month for one category (or all) within a date range
    Category {
        /// Category to report on, or "all"
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Range start date
        #[arg(long)]
        from: String,

        /// Range end date
        #[arg(long)]
        to: String,
    },

    /// Compare this month against last month
    Month,

    /// Compare this year against last year
    Year,
}
