use crate::api::CategoryStore;
use crate::core::storage::AppCtx;
use console::style;

/// List all categories in insertion order.
pub fn run(ctx: &AppCtx) -> Result<(), String> {
    let store = CategoryStore::new(ctx.clone());
    let categories = store.list().map_err(|e| e.to_string())?;

    println!("{}", style("Categories:").green().bold());
    for category in categories {
        println!("  {} {}", style("•").green(), category);
    }
    Ok(())
}
