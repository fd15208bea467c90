use crate::api::PromptStore;
use crate::core::storage::AppCtx;
use console::style;
use copypasta::{ClipboardContext, ClipboardProvider};

/// Copy prompt content to clipboard.
pub fn run(ctx: &AppCtx, id: &str) -> Result<(), String> {
    let store = PromptStore::new(ctx.clone());
    let prompt = store.get(id).map_err(|e| e.to_string())?;

    let mut ctx_clip = ClipboardContext::new().map_err(|e| format!("Clipboard error: {}", e))?;
    ctx_clip
        .set_contents(prompt.content)
        .map_err(|e| format!("Clipboard set error: {}", e))?;

    println!("{} copied to clipboard", style("•").green().bold());
    Ok(())
}
