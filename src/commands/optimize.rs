use crate::api::{Optimizer, PromptStore};
use crate::core::config::load_optimizer_config;
use crate::core::storage::AppCtx;
use console::style;
use spinners::{Spinner, Spinners};

/// Rewrite a prompt's content with the configured AI backend.
///
/// The rewrite replaces the stored content unless `--dry-run` is given; the
/// previous text is printed so it is not lost when the result disappoints.
pub async fn run(ctx: &AppCtx, id: &str, dry_run: bool) -> Result<(), String> {
    let store = PromptStore::new(ctx.clone());
    let prompt = store.get(id).map_err(|e| e.to_string())?;

    let config = load_optimizer_config(&ctx.config_path)?;
    let optimizer = Optimizer::from_config(&config).map_err(|e| e.to_string())?;

    let mut sp = Spinner::new(Spinners::Dots9, "Optimizing prompt...".into());
    let result = optimizer.optimize(&prompt.content).await;
    match result {
        Ok(optimized) => {
            sp.stop_with_message("✔ Prompt optimized.".into());

            if dry_run {
                println!("\n{}", optimized);
                return Ok(());
            }

            store
                .replace_content(id, optimized.clone())
                .map_err(|e| e.to_string())?;
            println!("\n{}", style("Previous content:").dim());
            println!("{}", style(&prompt.content).dim());
            println!("\n{}", style("Optimized content:").green().bold());
            println!("{}", optimized);
            Ok(())
        }
        Err(e) => {
            sp.stop_with_message("✖ Optimization failed.".into());
            Err(e.to_string())
        }
    }
}
