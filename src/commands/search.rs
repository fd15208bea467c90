use crate::api::{filter_prompts, PromptFilter, PromptStore};
use crate::core::storage::AppCtx;
use console::style;

/// Search prompts by title or tag text, with the same optional filters as
/// `list`.
pub fn run(
    ctx: &AppCtx,
    query: &str,
    category: Option<&str>,
    favorites: bool,
    tag: Option<&str>,
) -> Result<(), String> {
    let store = PromptStore::new(ctx.clone());
    let prompts = store.list().map_err(|e| e.to_string())?;

    let filter = PromptFilter {
        query: query.to_string(),
        category: category.map(|s| s.to_string()),
        favorites_only: favorites,
        tag: tag.map(|s| s.to_string()),
    };
    let hits = filter_prompts(&prompts, &filter);

    if hits.is_empty() {
        println!("{}", style("No match").yellow());
    } else {
        println!("{}", style("Matches:").green().bold());
        for prompt in hits {
            println!(
                "  {} {} - {}",
                style("•").green(),
                style(&prompt.id).yellow(),
                prompt.title
            );
        }
    }
    Ok(())
}
