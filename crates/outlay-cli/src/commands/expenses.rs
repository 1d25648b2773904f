//! Expense command implementations

use anyhow::Result;
use chrono::Utc;
use outlay_core::{dates, NewExpense, Store};

use super::truncate;

pub async fn cmd_add(
    store: &mut Store,
    category: &str,
    amount: f64,
    date: Option<&str>,
) -> Result<()> {
    let date = match date {
        Some(d) => d.to_string(),
        None => Utc::now().date_naive().format("%Y-%m-%d").to_string(),
    };

    let expense = store
        .add_expense(NewExpense {
            category: category.to_string(),
            amount,
            date,
        })
        .await?;

    println!(
        "✅ Added expense {}: ${:.2} on {} ({})",
        expense.id,
        expense.amount,
        dates::format_display(expense.date),
        expense.category
    );

    Ok(())
}

pub async fn cmd_list(store: &mut Store, limit: usize) -> Result<()> {
    let mut expenses = store.expenses().await?;

    if expenses.is_empty() {
        println!("No expenses found. Add some with:");
        println!("  outlay add --category Food --amount 12.50");
        return Ok(());
    }

    // Newest first; unparseable remote dates carry the sentinel and land last
    expenses.sort_by(|a, b| b.date.cmp(&a.date));
    let total_count = expenses.len();
    expenses.truncate(limit);

    println!();
    println!("💸 Expenses ({} total)", total_count);
    println!("   ─────────────────────────────────────────────");

    for expense in &expenses {
        println!(
            "   {:>4} │ {} │ {:>9} │ {}",
            expense.id,
            expense.date,
            format!("${:.2}", expense.amount),
            truncate(&expense.category, 20)
        );
    }

    println!();

    Ok(())
}

pub async fn cmd_delete(store: &mut Store, id: i64) -> Result<()> {
    store.delete_expense(id).await?;
    println!("✅ Deleted expense {}", id);
    Ok(())
}
