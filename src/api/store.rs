//! The main entry point for interacting with the prompt library.

use chrono::Utc;
use std::fs;
use std::path::Path;

use super::error::StoreError;
use crate::core::storage::{AppCtx, Prompt, PromptDraft};
use crate::core::utils::random_id;

/// Categories returned on first run, before `categories.json` exists.
pub const DEFAULT_CATEGORIES: &[&str] = &["Général", "Coding", "Writing"];

/// Durable, ordered list of [`Prompt`] records backed by a single JSON file.
///
/// The only write primitive is a whole-collection overwrite: there is no
/// version check and no merge, so with two concurrent writers the last
/// completed write defines the final state. The library targets a single
/// user on a single machine; this is a permanent constraint of the flat-file
/// layout, not a race to be fixed here.
pub struct PromptStore {
    pub(crate) ctx: AppCtx,
}

impl PromptStore {
    /// Opens the store under `~/.prompt-library` (or `$PROMPT_LIBRARY_HOME`).
    pub fn init() -> Result<Self, StoreError> {
        Ok(Self {
            ctx: AppCtx::init().map_err(StoreError::Init)?,
        })
    }

    /// Opens the store rooted at an explicit directory.
    pub fn init_at(base_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        Ok(Self {
            ctx: AppCtx::init_at(base_dir.as_ref()).map_err(StoreError::Init)?,
        })
    }

    /// Wraps an already-initialized context.
    pub fn new(ctx: AppCtx) -> Self {
        Self { ctx }
    }

    /// Returns all stored prompts in persisted order.
    ///
    /// An absent backing file resolves to an empty list. A file that exists
    /// but cannot be read or parsed is an error; corrupted storage is never
    /// silently reported as "no data".
    pub fn list(&self) -> Result<Vec<Prompt>, StoreError> {
        if !self.ctx.prompts_path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.ctx.prompts_path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Overwrites the entire persisted collection with exactly `prompts`,
    /// serialized as 2-space-indented JSON.
    ///
    /// No validation of ids, timestamps or field contents is performed; the
    /// caller must supply a well-formed, complete list. Last write wins.
    pub fn replace_all(&self, prompts: &[Prompt]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(prompts)?;
        fs::write(&self.ctx.prompts_path, json)?;
        Ok(())
    }

    /// Creates a new prompt from `draft` and persists it at the head of the
    /// list, so a plain `list()` shows newest first.
    ///
    /// The store owns identity: the id is a random token re-drawn until it
    /// collides with no stored id, and is immutable afterwards.
    pub fn create(&self, draft: PromptDraft) -> Result<Prompt, StoreError> {
        let mut prompts = self.list()?;
        let id = loop {
            let candidate = random_id();
            if !prompts.iter().any(|p| p.id == candidate) {
                break candidate;
            }
        };

        let prompt = Prompt {
            id,
            title: draft.title,
            content: draft.content,
            category: draft.category,
            tags: draft.tags,
            last_modified: Utc::now(),
            is_favorite: false,
        };
        prompts.insert(0, prompt.clone());
        self.replace_all(&prompts)?;
        Ok(prompt)
    }

    /// Returns the prompt with the given id.
    pub fn get(&self, id: &str) -> Result<Prompt, StoreError> {
        self.list()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Replaces the editable fields of an existing prompt and bumps its
    /// `last_modified` timestamp. Position in the list and the favorite flag
    /// are preserved.
    pub fn update(&self, id: &str, draft: PromptDraft) -> Result<Prompt, StoreError> {
        let mut prompts = self.list()?;
        let slot = prompts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        slot.title = draft.title;
        slot.content = draft.content;
        slot.category = draft.category;
        slot.tags = draft.tags;
        slot.last_modified = Utc::now();
        let updated = slot.clone();

        self.replace_all(&prompts)?;
        Ok(updated)
    }

    /// Deletes a prompt by submitting the list without it (destruction by
    /// omission, same overwrite primitive as every other mutation).
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let prompts = self.list()?;
        let remaining: Vec<Prompt> = prompts.into_iter().filter(|p| p.id != id).collect();
        self.replace_all(&remaining)
    }

    /// Flips the favorite flag of an existing prompt. The timestamp is left
    /// alone: favoriting is a view preference, not an edit.
    pub fn toggle_favorite(&self, id: &str) -> Result<Prompt, StoreError> {
        let mut prompts = self.list()?;
        let slot = prompts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        slot.is_favorite = !slot.is_favorite;
        let updated = slot.clone();

        self.replace_all(&prompts)?;
        Ok(updated)
    }

    /// Rewrites a prompt's content in place (used by the optimizer) and
    /// bumps `last_modified`.
    pub fn replace_content(&self, id: &str, content: String) -> Result<Prompt, StoreError> {
        let mut prompts = self.list()?;
        let slot = prompts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        slot.content = content;
        slot.last_modified = Utc::now();
        let updated = slot.clone();

        self.replace_all(&prompts)?;
        Ok(updated)
    }
}

/// Result of [`CategoryStore::add_if_absent`]: whether anything was written,
/// plus the full resulting list so callers can refresh their view without a
/// second read.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAddOutcome {
    pub added: bool,
    pub categories: Vec<String>,
}

/// Durable, order-preserving set of category names, unique case-insensitively.
///
/// Prompts reference categories by plain string; nothing checks that a
/// prompt's category exists here, and deleting is not supported. Orphan
/// categories on prompts are allowed and expected.
pub struct CategoryStore {
    pub(crate) ctx: AppCtx,
}

impl CategoryStore {
    /// Opens the store under `~/.prompt-library` (or `$PROMPT_LIBRARY_HOME`).
    pub fn init() -> Result<Self, StoreError> {
        Ok(Self {
            ctx: AppCtx::init().map_err(StoreError::Init)?,
        })
    }

    /// Opens the store rooted at an explicit directory.
    pub fn init_at(base_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        Ok(Self {
            ctx: AppCtx::init_at(base_dir.as_ref()).map_err(StoreError::Init)?,
        })
    }

    /// Wraps an already-initialized context.
    pub fn new(ctx: AppCtx) -> Self {
        Self { ctx }
    }

    /// Returns all category names in insertion order.
    ///
    /// An absent backing file resolves to [`DEFAULT_CATEGORIES`], a first-run
    /// seed rather than an error or an empty list.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        if !self.ctx.categories_path.exists() {
            return Ok(DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect());
        }
        let data = fs::read_to_string(&self.ctx.categories_path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Appends `name` if no case-insensitive match exists, persisting the
    /// full updated list; otherwise leaves storage untouched. The casing of
    /// first insertion is the one that sticks.
    pub fn add_if_absent(&self, name: &str) -> Result<CategoryAddOutcome, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::Validation(
                "Category name cannot be empty".to_string(),
            ));
        }

        let mut categories = self.list()?;
        let lowered = name.to_lowercase();
        if categories.iter().any(|c| c.to_lowercase() == lowered) {
            return Ok(CategoryAddOutcome {
                added: false,
                categories,
            });
        }

        categories.push(name.to_string());
        let json = serde_json::to_string_pretty(&categories)?;
        fs::write(&self.ctx.categories_path, json)?;
        Ok(CategoryAddOutcome {
            added: true,
            categories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn draft(title: &str) -> PromptDraft {
        PromptDraft {
            title: title.to_string(),
            content: "You are a helpful assistant.".to_string(),
            category: "Général".to_string(),
            tags: vec!["test".to_string()],
        }
    }

    #[test]
    fn list_on_missing_file_is_empty_not_an_error() {
        let dir = TempDir::new().unwrap();
        let store = PromptStore::init_at(dir.path()).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn list_on_corrupted_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = PromptStore::init_at(dir.path()).unwrap();
        fs::write(&store.ctx.prompts_path, "{not json").unwrap();
        assert!(matches!(store.list(), Err(StoreError::Json(_))));
    }

    #[test]
    fn replace_all_then_list_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = PromptStore::init_at(dir.path()).unwrap();

        let a = store.create(draft("First")).unwrap();
        let b = store.create(draft("Second")).unwrap();
        let listed = store.list().unwrap();
        assert_eq!(listed, vec![b, a]);

        store.replace_all(&listed).unwrap();
        assert_eq!(store.list().unwrap(), listed);
    }

    #[test]
    fn create_generates_unique_ids_and_prepends() {
        let dir = TempDir::new().unwrap();
        let store = PromptStore::init_at(dir.path()).unwrap();

        let first = store.create(draft("Old")).unwrap();
        let second = store.create(draft("New")).unwrap();
        assert_ne!(first.id, second.id);
        assert!(!second.is_favorite);

        let listed = store.list().unwrap();
        assert_eq!(listed[0].title, "New");
        assert_eq!(listed[1].title, "Old");
    }

    #[test]
    fn update_preserves_id_favorite_and_position() {
        let dir = TempDir::new().unwrap();
        let store = PromptStore::init_at(dir.path()).unwrap();

        store.create(draft("Other")).unwrap();
        let target = store.create(draft("Target")).unwrap();
        store.toggle_favorite(&target.id).unwrap();

        let updated = store.update(&target.id, draft("Renamed")).unwrap();
        assert_eq!(updated.id, target.id);
        assert!(updated.is_favorite);
        assert!(updated.last_modified >= target.last_modified);
        assert_eq!(store.list().unwrap()[0].title, "Renamed");
    }

    #[test]
    fn delete_is_destruction_by_omission() {
        let dir = TempDir::new().unwrap();
        let store = PromptStore::init_at(dir.path()).unwrap();

        let keep = store.create(draft("Keep")).unwrap();
        let gone = store.create(draft("Gone")).unwrap();
        store.delete(&gone.id).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, keep.id);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = PromptStore::init_at(dir.path()).unwrap();
        assert!(matches!(
            store.get("missing12"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn back_to_back_replace_all_is_last_write_wins() {
        let dir = TempDir::new().unwrap();
        let store = PromptStore::init_at(dir.path()).unwrap();
        let base = store.create(draft("Base")).unwrap();

        // Two writers start from the same base list and make disjoint edits.
        let mut edit_a = vec![base.clone()];
        edit_a[0].title = "Edited by A".to_string();
        let mut edit_b = vec![base.clone()];
        edit_b[0].tags = vec!["from-b".to_string()];

        store.replace_all(&edit_a).unwrap();
        store.replace_all(&edit_b).unwrap();

        // The later write defines the final state; A's edit is lost.
        let listed = store.list().unwrap();
        assert_eq!(listed[0].title, "Base");
        assert_eq!(listed[0].tags, vec!["from-b".to_string()]);
    }

    #[test]
    fn categories_default_on_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = CategoryStore::init_at(dir.path()).unwrap();
        assert_eq!(
            store.list().unwrap(),
            vec!["Général", "Coding", "Writing"]
        );
    }

    #[test]
    fn add_if_absent_is_case_insensitive_and_keeps_first_casing() {
        let dir = TempDir::new().unwrap();
        let store = CategoryStore::init_at(dir.path()).unwrap();

        let first = store.add_if_absent("Marketing").unwrap();
        assert!(first.added);
        assert_eq!(
            first.categories,
            vec!["Général", "Coding", "Writing", "Marketing"]
        );

        let second = store.add_if_absent("MARKETING").unwrap();
        assert!(!second.added);
        assert_eq!(second.categories, first.categories);
        assert_eq!(store.list().unwrap(), first.categories);
    }

    #[test]
    fn add_if_absent_rejects_blank_names_before_io() {
        let dir = TempDir::new().unwrap();
        let store = CategoryStore::init_at(dir.path()).unwrap();
        assert!(matches!(
            store.add_if_absent("   "),
            Err(StoreError::Validation(_))
        ));
        // Nothing was persisted, the bootstrap default still applies.
        assert!(!store.ctx.categories_path.exists());
    }
}
