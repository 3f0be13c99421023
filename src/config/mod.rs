//! Configuration for expense-cli
//!
//! Path resolution and user settings.

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
