use crate::api::PromptStore;
use crate::core::storage::AppCtx;
use console::style;

/// Show a single prompt in full.
pub fn run(ctx: &AppCtx, id: &str) -> Result<(), String> {
    let store = PromptStore::new(ctx.clone());
    let prompt = store.get(id).map_err(|e| e.to_string())?;

    println!(
        "{} {}{}",
        style(&prompt.id).yellow(),
        prompt.title,
        if prompt.is_favorite { " ★" } else { "" }
    );
    println!("{} {}", style("Category:").dim(), prompt.category);
    if !prompt.tags.is_empty() {
        println!("{} {}", style("Tags:").dim(), prompt.tags.join(", "));
    }
    println!(
        "{} {}",
        style("Modified:").dim(),
        prompt.last_modified.to_rfc3339()
    );
    println!("\n{}", prompt.content);
    Ok(())
}
