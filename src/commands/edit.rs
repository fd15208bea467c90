use crate::api::PromptStore;
use crate::core::storage::{AppCtx, PromptDraft};
use console::style;
use dialoguer::{theme::ColorfulTheme, Editor, Input, Select};

/// Edit a prompt's fields interactively, saving once on exit.
pub fn run(ctx: &AppCtx, id: &str) -> Result<(), String> {
    let store = PromptStore::new(ctx.clone());
    let original = store.get(id).map_err(|e| e.to_string())?;
    let mut draft = PromptDraft {
        title: original.title.clone(),
        content: original.content.clone(),
        category: original.category.clone(),
        tags: original.tags.clone(),
    };
    let theme = ColorfulTheme::default();

    loop {
        let selections = &[
            "Edit Title",
            "Edit Content",
            "Edit Category",
            "Edit Tags",
            "Finish Editing",
        ];
        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .default(0)
            .items(&selections[..])
            .interact()
            .map_err(|e| e.to_string())?;

        match selection {
            0 => {
                let title: String = Input::with_theme(&theme)
                    .with_prompt("Title")
                    .with_initial_text(draft.title.clone())
                    .interact_text()
                    .map_err(|e| format!("Title error: {}", e))?;
                if title.trim().chars().count() < 2 {
                    println!("{}", style("Title must be at least 2 characters").yellow());
                } else {
                    draft.title = title;
                    println!("{}", style("Title updated.").green());
                }
            }
            1 => {
                let edited = Editor::new()
                    .edit(&draft.content)
                    .map_err(|e| format!("Editor error: {}", e))?
                    .unwrap_or_default();
                if edited.trim().chars().count() < 10 {
                    println!(
                        "{}",
                        style("Content must be at least 10 characters").yellow()
                    );
                } else {
                    draft.content = edited;
                    println!("{}", style("Content updated.").green());
                }
            }
            2 => {
                let category: String = Input::with_theme(&theme)
                    .with_prompt("Category")
                    .with_initial_text(draft.category.clone())
                    .interact_text()
                    .map_err(|e| format!("Category error: {}", e))?;
                draft.category = category;
                println!("{}", style("Category updated.").green());
            }
            3 => {
                let tags_line: String = Input::with_theme(&theme)
                    .with_prompt("Tags (comma‑separated)")
                    .with_initial_text(draft.tags.join(", "))
                    .allow_empty(true)
                    .interact_text()
                    .map_err(|e| format!("Tags error: {}", e))?;
                draft.tags = tags_line
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                println!("{}", style("Tags updated.").green());
            }
            _ => break,
        }
    }

    let unchanged = draft.title == original.title
        && draft.content == original.content
        && draft.category == original.category
        && draft.tags == original.tags;
    if unchanged {
        println!(
            "{}",
            style("No changes detected. Nothing to save.").yellow()
        );
        return Ok(());
    }

    store.update(id, draft).map_err(|e| e.to_string())?;
    println!("{} prompt {} updated", style("•").green().bold(), id);
    Ok(())
}
