use crate::api::PromptStore;
use crate::core::storage::AppCtx;
use console::style;

/// Delete a prompt.
pub fn run(ctx: &AppCtx, id: &str) -> Result<(), String> {
    let store = PromptStore::new(ctx.clone());
    // get() first so an unknown id fails instead of silently writing.
    store.get(id).map_err(|e| e.to_string())?;
    store.delete(id).map_err(|e| e.to_string())?;
    println!("{} prompt {} deleted", style("•").green().bold(), id);
    Ok(())
}
