//! Core utilities: configuration, errors, logging, shared helpers

pub mod config;
pub mod error;
pub mod logging;
pub mod utils;

pub use self::error::{AppError, AppResult};
pub use self::logging::{init_logger, log_startup_configuration};
pub use self::utils::format_iso8601_duration;
