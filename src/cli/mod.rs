//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;

pub use expense::{handle_add, handle_categories, handle_list};
pub use export::handle_export;
