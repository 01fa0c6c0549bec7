//! Common utilities shared across the harness

pub mod config;
pub mod error;
pub mod logging;

pub use config::HarnessConfig;
pub use error::{Error, Result};
