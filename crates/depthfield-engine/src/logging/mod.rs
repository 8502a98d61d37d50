//! Logging utilities.
//!
//! The library itself only emits through the `log` facade. Hosts that have no
//! logger of their own can install the `env_logger` backend here.

mod init;

pub use init::{init_logging, LoggingConfig};
