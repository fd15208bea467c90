//! Defines the command-line interface structure using clap.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "prompt-library", version, about = "Personal prompt library manager")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// List stored prompts, optionally filtered
    List {
        #[arg(long, help = "Only prompts in this exact category")]
        category: Option<String>,
        #[arg(long, help = "Only favorite prompts")]
        favorites: bool,
        #[arg(long, help = "Only prompts carrying this tag")]
        tag: Option<String>,
    },
    /// Create a new prompt
    New,
    /// Show a prompt by ID
    Get { id: String },
    /// Edit an existing prompt
    Edit { id: String },
    /// Delete a prompt by ID
    Delete { id: String },
    /// Toggle a prompt's favorite flag
    Favorite { id: String },
    /// Search prompts by title or tag text
    Search {
        query: String,
        #[arg(long, help = "Only prompts in this exact category")]
        category: Option<String>,
        #[arg(long, help = "Only favorite prompts")]
        favorites: bool,
        #[arg(long, help = "Only prompts carrying this tag")]
        tag: Option<String>,
    },
    /// Copy a prompt's content to the clipboard
    Copy { id: String },
    /// Rewrite a prompt's content with the configured AI backend
    Optimize {
        id: String,
        #[arg(long, help = "Print the rewrite without saving it")]
        dry_run: bool,
    },
    /// Manage the category list
    #[command(subcommand)]
    Category(CategoryCmd),
    /// Show library statistics
    Stats,
}

#[derive(Subcommand)]
pub enum CategoryCmd {
    /// List all categories in insertion order
    List,
    /// Add a category unless it already exists (case-insensitive)
    Add { name: String },
}
