// Shared kernel: ids, errors, config, persistence and logging used by every module

pub mod config;
pub mod domain;
pub mod errors;
pub mod infrastructure;
pub mod utils;

pub use config::AppConfig;
pub use infrastructure::database::Database;
