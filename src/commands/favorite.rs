use crate::api::PromptStore;
use crate::core::storage::AppCtx;
use console::style;

/// Toggle a prompt's favorite flag.
pub fn run(ctx: &AppCtx, id: &str) -> Result<(), String> {
    let store = PromptStore::new(ctx.clone());
    let prompt = store.toggle_favorite(id).map_err(|e| e.to_string())?;

    if prompt.is_favorite {
        println!(
            "{} '{}' marked as favorite",
            style("★").yellow().bold(),
            prompt.title
        );
    } else {
        println!(
            "{} '{}' removed from favorites",
            style("•").green().bold(),
            prompt.title
        );
    }
    Ok(())
}
