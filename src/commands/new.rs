use crate::api::{CategoryStore, PromptStore};
use crate::core::storage::{AppCtx, PromptDraft};
use console::style;
use dialoguer::{theme::ColorfulTheme, Editor, Input, Select};

/// Create a new prompt interactively.
pub fn run(ctx: &AppCtx) -> Result<(), String> {
    let theme = ColorfulTheme::default();

    let title: String = Input::with_theme(&theme)
        .with_prompt("Title")
        .interact_text()
        .map_err(|e| format!("Title error: {}", e))?;
    if title.trim().chars().count() < 2 {
        return Err("Title must be at least 2 characters".to_string());
    }

    let category_store = CategoryStore::new(ctx.clone());
    let mut categories = category_store.list().map_err(|e| e.to_string())?;
    categories.push("New category…".to_string());
    let selection = Select::with_theme(&theme)
        .with_prompt("Category")
        .default(0)
        .items(&categories)
        .interact()
        .map_err(|e| format!("Category error: {}", e))?;

    let category = if selection == categories.len() - 1 {
        let name: String = Input::with_theme(&theme)
            .with_prompt("New category name")
            .interact_text()
            .map_err(|e| format!("Category error: {}", e))?;
        let outcome = category_store
            .add_if_absent(&name)
            .map_err(|e| e.to_string())?;
        if !outcome.added {
            println!("{}", style("Category already exists, reusing it.").yellow());
        }
        name
    } else {
        categories[selection].clone()
    };

    let tags_line: String = Input::with_theme(&theme)
        .with_prompt("Tags (comma‑separated, optional)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| format!("Tags error: {}", e))?;
    let tags: Vec<String> = tags_line
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let content = Editor::new()
        .edit("Enter your prompt content here.")
        .map_err(|e| format!("Editor error: {}", e))?
        .unwrap_or_default();
    if content.trim().chars().count() < 10 {
        return Err("Content must be at least 10 characters".to_string());
    }

    let store = PromptStore::new(ctx.clone());
    let prompt = store
        .create(PromptDraft {
            title: title.clone(),
            content,
            category,
            tags,
        })
        .map_err(|e| e.to_string())?;

    println!(
        "{} Prompt saved with ID {} and title '{}'",
        style("•").green().bold(),
        style(&prompt.id).yellow(),
        title
    );
    Ok(())
}
