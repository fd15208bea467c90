//! Library API: stores, filtering and the optimizer.

mod error;
mod optimizer;
mod query;
mod store;

pub use error::{OptimizeError, StoreError};
pub use optimizer::Optimizer;
pub use query::{filter_prompts, PromptFilter};
pub use store::{CategoryAddOutcome, CategoryStore, PromptStore, DEFAULT_CATEGORIES};
