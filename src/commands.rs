//! CLI command definitions
//!
//! Defines the clap commands for the smoke-test harness.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full test sequence against the backend
    Run {
        /// Backend base URL (overrides BACKEND_URL and the env file)
        #[arg(long)]
        base_url: Option<String>,

        /// Frontend env file carrying REACT_APP_BACKEND_URL
        /// (default: frontend/.env)
        #[arg(long)]
        env_file: Option<PathBuf>,

        /// Per-request timeout in seconds (default: 30)
        #[arg(long)]
        timeout: Option<u64>,

        /// Print response payload summaries per case
        #[arg(long, short)]
        verbose: bool,
    },

    /// List the test cases in execution order
    List,
}
