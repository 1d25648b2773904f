//! Report command implementations

use anyhow::Result;
use chrono::Utc;
use outlay_core::{ReportKind, ReportRequest, ReportResult, Store};

pub async fn cmd_report_category(
    store: &mut Store,
    category: &str,
    from: &str,
    to: &str,
) -> Result<()> {
    let request = ReportRequest::category_report(category, from, to);
    let today = Utc::now().date_naive();
    let result = store.generate_report(&request, today).await?;

    println!();
    if category == "all" {
        println!("📊 Spending by month, all categories");
    } else {
        println!("📊 Spending by month: {}", category);
    }
    println!("   {} to {}", from, to);
    println!("   ──────────────────────");

    if result.labels.is_empty() {
        println!("   No matching expenses.");
    }
    for (label, value) in result.labels.iter().zip(&result.values) {
        println!("   {:<4} │ {:>10}", label, format!("${:.2}", value));
    }

    println!("   ──────────────────────");
    println!("   Total: ${:.2}", result.total.unwrap_or(0.0));
    println!();

    Ok(())
}

pub async fn cmd_report_month(store: &mut Store) -> Result<()> {
    let request = ReportRequest::comparison(ReportKind::MonthComparison);
    let today = Utc::now().date_naive();
    let result = store.generate_report(&request, today).await?;
    print_comparison("📅 Month-over-month", &result);
    Ok(())
}

pub async fn cmd_report_year(store: &mut Store) -> Result<()> {
    let request = ReportRequest::comparison(ReportKind::YearComparison);
    let today = Utc::now().date_naive();
    let result = store.generate_report(&request, today).await?;
    print_comparison("📅 Year-over-year", &result);
    Ok(())
}

fn print_comparison(title: &str, result: &ReportResult) {
    let current = result.current_total.unwrap_or(0.0);
    let previous = result.previous_total.unwrap_or(0.0);
    let difference = result.difference.unwrap_or(0.0);
    let change = result.percentage_change.unwrap_or(0.0);

    println!();
    println!("{}", title);
    println!("   ──────────────────────────────");
    println!(
        "   {:<16} │ {:>10}",
        result.current_label.as_deref().unwrap_or("Current"),
        format!("${:.2}", current)
    );
    println!(
        "   {:<16} │ {:>10}",
        result.previous_label.as_deref().unwrap_or("Previous"),
        format!("${:.2}", previous)
    );
    println!("   ──────────────────────────────");

    let arrow = if difference > 0.0 {
        "▲"
    } else if difference < 0.0 {
        "▼"
    } else {
        "─"
    };
    println!(
        "   {} ${:.2} ({:+.1}%)",
        arrow,
        difference.abs(),
        change
    );
    println!();
}
