pub mod api;
pub mod cli;
pub mod commands;
pub mod core;

pub use api::{
    filter_prompts, CategoryAddOutcome, CategoryStore, OptimizeError, Optimizer, PromptFilter,
    PromptStore, StoreError, DEFAULT_CATEGORIES,
};
pub use crate::core::storage::{Prompt, PromptDraft};
