use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use super::utils::ensure_dir;

/// A single stored prompt record.
///
/// Field names serialize in camelCase (`lastModified`, `isFavorite`) so the
/// on-disk JSON keeps the layout users already have in their `prompts.json`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Free-form label. Not validated against the category list; a prompt may
    /// reference a category that was never registered.
    pub category: String,
    pub tags: Vec<String>,
    pub last_modified: DateTime<Utc>,
    #[serde(default)]
    pub is_favorite: bool,
}

/// Caller-supplied fields for a new prompt. The store owns id generation,
/// timestamping and the favorite default.
#[derive(Clone, Debug)]
pub struct PromptDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
}

/// Runtime context holding the paths of the backing JSON files.
#[derive(Clone, Debug)]
pub struct AppCtx {
    pub base_dir: PathBuf,
    pub prompts_path: PathBuf,
    pub categories_path: PathBuf,
    pub config_path: PathBuf,
}

impl AppCtx {
    /// Locates `~/.prompt-library` (or `$PROMPT_LIBRARY_HOME` when set) and
    /// makes sure the directory exists.
    pub fn init() -> Result<Self, String> {
        let base_dir = match env::var("PROMPT_LIBRARY_HOME") {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => {
                let home = env::var("HOME")
                    .map_err(|_| "Unable to determine HOME directory".to_string())?;
                PathBuf::from(home).join(".prompt-library")
            }
        };
        Self::init_at(base_dir)
    }

    /// Initializes the context rooted at an explicit directory. Used by tests
    /// and embedders that should not touch the user's home.
    pub fn init_at(base_dir: impl Into<PathBuf>) -> Result<Self, String> {
        let base_dir = base_dir.into();
        ensure_dir(&base_dir)?;

        Ok(Self {
            prompts_path: base_dir.join("prompts.json"),
            categories_path: base_dir.join("categories.json"),
            config_path: base_dir.join("config.toml"),
            base_dir,
        })
    }
}
