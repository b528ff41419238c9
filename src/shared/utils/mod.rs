pub mod logger;
pub mod serde_fields;

pub use logger::{init_logger, LogContext, TimedOperation};
