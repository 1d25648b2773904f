//! Category management commands

use anyhow::Result;
use outlay_core::Store;

pub async fn cmd_categories_list(store: &mut Store) -> Result<()> {
    let categories = store.categories().await?;

    println!();
    println!("🏷️  Categories ({})", categories.len());
    println!("   ──────────────────────");
    for category in &categories {
        println!("   {}", category);
    }
    println!();

    Ok(())
}

pub async fn cmd_categories_add(store: &mut Store, name: &str) -> Result<()> {
    store.add_category(name).await?;
    println!("✅ Added category '{}'", name);
    Ok(())
}

pub async fn cmd_categories_remove(store: &mut Store, name: &str) -> Result<()> {
    store.delete_category(name).await?;
    println!("✅ Removed category '{}' (existing expenses kept)", name);
    Ok(())
}
