use crate::api::{CategoryStore, PromptStore};
use crate::core::storage::AppCtx;
use console::style;
use std::collections::HashMap;

/// Display statistics about the prompt library.
pub fn run(ctx: &AppCtx) -> Result<(), String> {
    let store = PromptStore::new(ctx.clone());
    let prompts = store.list().map_err(|e| e.to_string())?;
    let categories = CategoryStore::new(ctx.clone())
        .list()
        .map_err(|e| e.to_string())?;

    let favorites = prompts.iter().filter(|p| p.is_favorite).count();
    let mut category_counts: HashMap<&str, usize> = HashMap::new();
    let mut tag_counts: HashMap<&str, usize> = HashMap::new();
    for prompt in &prompts {
        *category_counts.entry(prompt.category.as_str()).or_insert(0) += 1;
        for tag in &prompt.tags {
            *tag_counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    println!("{}", style("Prompt Library Statistics").bold().underlined());
    println!(
        "{}: {}",
        style("Total Prompts").cyan(),
        style(prompts.len()).yellow()
    );
    println!(
        "{}: {}",
        style("Favorites").cyan(),
        style(favorites).yellow()
    );
    println!(
        "{}: {}",
        style("Registered Categories").cyan(),
        style(categories.len()).yellow()
    );

    if !category_counts.is_empty() {
        let mut sorted: Vec<_> = category_counts.into_iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        println!("\n{}", style("Prompts per category:").cyan());
        for (category, count) in sorted {
            let orphan = if categories.iter().any(|c| c == category) {
                ""
            } else {
                " (unregistered)"
            };
            println!("  {} {}: {}{}", style("•").green(), category, count, orphan);
        }
    }

    if !tag_counts.is_empty() {
        let mut sorted: Vec<_> = tag_counts.into_iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        println!("\n{}", style("Most used tags:").cyan());
        for (tag, count) in sorted.into_iter().take(10) {
            println!("  {} {}: {}", style("•").green(), tag, count);
        }
    }

    Ok(())
}
