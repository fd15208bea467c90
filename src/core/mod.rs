//! Storage context, configuration and small helpers.

pub mod config;
pub mod storage;
pub mod utils;
