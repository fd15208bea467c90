use crate::api::CategoryStore;
use crate::core::storage::AppCtx;
use console::style;

/// Add a category unless a case-insensitive match already exists.
pub fn run(ctx: &AppCtx, name: &str) -> Result<(), String> {
    let store = CategoryStore::new(ctx.clone());
    let outcome = store.add_if_absent(name).map_err(|e| e.to_string())?;

    if outcome.added {
        println!(
            "{} category '{}' added ({} total)",
            style("•").green().bold(),
            name,
            outcome.categories.len()
        );
    } else {
        println!(
            "{} category '{}' already exists",
            style("•").yellow().bold(),
            name
        );
    }
    Ok(())
}
