//! Career Assistant API smoke-test harness
//!
//! A sequential HTTP client that exercises the Career Assistant backend
//! end to end: registration, login, resume analysis, job matching, admin
//! statistics, and PDF report generation. Each case reports a classified
//! outcome; the runner prints a colored report and the process exit code
//! reflects overall success.

pub mod api;
pub mod cli;
pub mod commands;
pub mod common;
pub mod suite;

// Re-export commonly used types for tests
pub use common::{Error, HarnessConfig, Result};
pub use suite::{CaseStatus, SuiteReport};
