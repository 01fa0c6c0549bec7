//! Smoke-test suite
//!
//! The fixed nine-case sequence, the shared run context threaded through
//! it, and the sequential runner that reports results. Cases return a
//! classified [`CaseOutcome`] so the runner branches on a typed result
//! rather than matching error text.

mod cases;
mod context;
mod fixtures;
mod outcome;
mod runner;

pub use context::{RunContext, SENTINEL_RESUME_ID};
pub use outcome::{CaseOutcome, CaseReport, CaseStatus, SuiteReport};
pub use runner::{print_case_list, run_suite, Case};
