use crate::api::{filter_prompts, PromptFilter, PromptStore};
use crate::core::storage::AppCtx;
use console::style;

/// List every saved prompt, newest first, honoring the optional filters.
pub fn run(
    ctx: &AppCtx,
    category: Option<&str>,
    favorites: bool,
    tag: Option<&str>,
) -> Result<(), String> {
    let store = PromptStore::new(ctx.clone());
    let prompts = store.list().map_err(|e| e.to_string())?;

    let filter = PromptFilter {
        query: String::new(),
        category: category.map(|s| s.to_string()),
        favorites_only: favorites,
        tag: tag.map(|s| s.to_string()),
    };
    let shown = filter_prompts(&prompts, &filter);

    if shown.is_empty() {
        println!("{}", style("No saved prompts").green().bold());
        return Ok(());
    }

    println!("{}", style("Saved Prompts:").green().bold());
    for prompt in shown {
        let star = if prompt.is_favorite { "★ " } else { "" };
        println!(
            "  {} {} - {}{} [{}]{}",
            style("•").green(),
            style(&prompt.id).yellow(),
            star,
            prompt.title,
            prompt.category,
            if prompt.tags.is_empty() {
                String::new()
            } else {
                format!(" {}", style(prompt.tags.join(", ")).dim())
            }
        );
    }
    Ok(())
}
