//! career-smoke - end-to-end smoke tests for the Career Assistant API
//!
//! Runs a fixed, ordered sequence of HTTP test cases against the backend
//! and exits 0 iff every case passed.

use career_smoke::{cli, commands::Commands, common};
use clap::Parser;

#[derive(Parser)]
#[command(name = "career-smoke", about = "Career Assistant API smoke-test harness")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    common::logging::init_cli();

    let cli = Cli::parse();

    match cli::dispatch(cli.command).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
