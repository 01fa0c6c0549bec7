//! CLI command handling
//!
//! Resolves configuration and dispatches commands to the suite runner.

use crate::commands::Commands;
use crate::common::{HarnessConfig, Result};
use crate::suite;

/// Dispatch a CLI command. Returns whether the process should exit
/// successfully: `run` maps directly to "no case failed".
pub async fn dispatch(command: Commands) -> Result<bool> {
    match command {
        Commands::Run {
            base_url,
            env_file,
            timeout,
            verbose,
        } => {
            let config = HarnessConfig::resolve(base_url, env_file, timeout, verbose)?;
            let report = suite::run_suite(&config).await?;
            Ok(report.all_passed())
        }

        Commands::List => {
            suite::print_case_list();
            Ok(true)
        }
    }
}
