//! Outlay CLI - Expense tracker
//!
//! Usage:
//!   outlay add -c Food -a 12.50 -d 2023-09-10   Record an expense
//!   outlay list                                  Show recent expenses
//!   outlay report category --from ... --to ...   Spending by month
//!   outlay serve --port 3000                     Start web server

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Add {
            category,
            amount,
            date,
        } => {
            let mut store = commands::open_store(cli.data.as_deref(), cli.api.as_deref())?;
            commands::cmd_add(&mut store, &category, amount, date.as_deref()).await
        }
        Commands::List { limit } => {
            let mut store = commands::open_store(cli.data.as_deref(), cli.api.as_deref())?;
            commands::cmd_list(&mut store, limit).await
        }
        Commands::Delete { id } => {
            let mut store = commands::open_store(cli.data.as_deref(), cli.api.as_deref())?;
            commands::cmd_delete(&mut store, id).await
        }
        Commands::Categories { action } => {
            let mut store = commands::open_store(cli.data.as_deref(), cli.api.as_deref())?;
            match action {
                None => commands::cmd_categories_list(&mut store).await,
                Some(CategoriesAction::Add { name }) => {
                    commands::cmd_categories_add(&mut store, &name).await
                }
                Some(CategoriesAction::Remove { name }) => {
                    commands::cmd_categories_remove(&mut store, &name).await
                }
            }
        }
        Commands::Report { kind } => {
            let mut store = commands::open_store(cli.data.as_deref(), cli.api.as_deref())?;
            match kind {
                ReportCommand::Category { category, from, to } => {
                    commands::cmd_report_category(&mut store, &category, &from, &to).await
                }
                ReportCommand::Month => commands::cmd_report_month(&mut store).await,
                ReportCommand::Year => commands::cmd_report_year(&mut store).await,
            }
        }
        Commands::Serve {
            port,
            host,
            cors_origins,
        } => commands::cmd_serve(cli.data.as_deref(), &host, port, cors_origins).await,
    }
}
