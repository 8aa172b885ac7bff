//! Shared utilities for the consolidation tooling.

pub mod logging;
pub mod time;

pub use logging::{init_logging, LogFormat};
pub use time::format_elapsed;
