//! Sequential runner and console reporter
//!
//! Runs the fixed case sequence in order, one outstanding request at a
//! time. Failures are captured, never fatal: the sequence always runs to
//! the last case and the aggregate counters decide the exit code.

use std::time::Instant;

use colored::Colorize;
use serde_json::Value;

use crate::api::ApiClient;
use crate::common::{Error, HarnessConfig, Result};

use super::cases;
use super::context::RunContext;
use super::outcome::{CaseOutcome, CaseReport, CaseStatus, SuiteReport};

/// The fixed test sequence, in dependency order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    HealthCheck,
    UserRegistration,
    UserLogin,
    ResumeTextAnalysis,
    JobMatching,
    AdminStats,
    GetUserResumes,
    GetJobMatches,
    PdfReportGeneration,
}

impl Case {
    /// Execution order. Leaves first: later cases consume state
    /// established by earlier ones.
    pub const SEQUENCE: [Case; 9] = [
        Case::HealthCheck,
        Case::UserRegistration,
        Case::UserLogin,
        Case::ResumeTextAnalysis,
        Case::JobMatching,
        Case::AdminStats,
        Case::GetUserResumes,
        Case::GetJobMatches,
        Case::PdfReportGeneration,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Case::HealthCheck => "Health Check",
            Case::UserRegistration => "User Registration",
            Case::UserLogin => "User Login",
            Case::ResumeTextAnalysis => "Resume Text Analysis",
            Case::JobMatching => "Job Matching",
            Case::AdminStats => "Admin Dashboard Stats",
            Case::GetUserResumes => "Get User Resumes",
            Case::GetJobMatches => "Get Job Matches",
            Case::PdfReportGeneration => "PDF Report Generation",
        }
    }

    async fn execute(self, ctx: &mut RunContext) -> Result<CaseOutcome> {
        match self {
            Case::HealthCheck => cases::health_check(ctx).await,
            Case::UserRegistration => cases::user_registration(ctx).await,
            Case::UserLogin => cases::user_login(ctx).await,
            Case::ResumeTextAnalysis => cases::resume_text_analysis(ctx).await,
            Case::JobMatching => cases::job_matching(ctx).await,
            Case::AdminStats => cases::admin_stats(ctx).await,
            Case::GetUserResumes => cases::get_user_resumes(ctx).await,
            Case::GetJobMatches => cases::get_job_matches(ctx).await,
            Case::PdfReportGeneration => cases::pdf_report_generation(ctx).await,
        }
    }
}

/// Run the full sequence against the configured backend
pub async fn run_suite(config: &HarnessConfig) -> Result<SuiteReport> {
    let client = ApiClient::new(&config.api_root, config.timeout)?;
    let mut ctx = RunContext::new(client, config.verbose);

    println!(
        "Testing backend API at: {}",
        ctx.client.api_root().white().bold()
    );

    let mut report = SuiteReport::default();

    for case in Case::SEQUENCE {
        println!("\n{}", "=".repeat(80));
        println!("{} {}", "Testing:".blue().bold(), case.name().white().bold());
        println!("{}", "=".repeat(80));

        let start = Instant::now();
        let result = case.execute(&mut ctx).await;
        let duration = start.elapsed();

        let (status, detail, data) = classify(result);

        println!("{} in {}", status.label(), format_duration(duration).dimmed());
        match status {
            CaseStatus::Tolerated => {
                if let Some(note) = &detail {
                    println!("Note: {}", note.yellow());
                }
            }
            CaseStatus::Failed | CaseStatus::FailedException => {
                println!(
                    "Error: {}",
                    detail.as_deref().unwrap_or("Unknown error").red()
                );
            }
            CaseStatus::Passed => {}
        }

        if ctx.verbose {
            if let Some(data) = &data {
                println!("{}", summarize_payload(data).dimmed());
            }
        }

        report.record(CaseReport {
            name: case.name(),
            status,
            duration,
            detail,
        });
    }

    print_summary(&report);

    Ok(report)
}

/// Print the case names in execution order
pub fn print_case_list() {
    for (i, case) in Case::SEQUENCE.iter().enumerate() {
        println!("{}. {}", i + 1, case.name());
    }
}

/// Classify a case result into a report status, detail message, and any
/// payload kept for verbose output.
///
/// Transport-level errors and unexpected statuses are ordinary failures;
/// anything else escaping a case is an exception the case did not handle.
fn classify(result: Result<CaseOutcome>) -> (CaseStatus, Option<String>, Option<Value>) {
    match result {
        Ok(CaseOutcome::Passed { data }) => (CaseStatus::Passed, None, data),
        Ok(CaseOutcome::Tolerated { note }) => (CaseStatus::Tolerated, Some(note), None),
        Ok(CaseOutcome::Failed { error, data }) => (CaseStatus::Failed, Some(error), data),
        Err(e @ (Error::Http(_) | Error::UnexpectedStatus { .. })) => {
            (CaseStatus::Failed, Some(e.to_string()), None)
        }
        Err(e) => (CaseStatus::FailedException, Some(e.to_string()), None),
    }
}

fn print_summary(report: &SuiteReport) {
    println!("\n{}", "=".repeat(80));
    let counts = format!("{} passed, {} failed", report.passed, report.failed);
    let counts = if report.all_passed() {
        counts.green().bold()
    } else {
        counts.red().bold()
    };
    println!("{} {}", "SUMMARY:".bold(), counts);
    println!("{}", "=".repeat(80));

    for case in &report.cases {
        println!(
            "{} - {} ({})",
            case.status.label(),
            case.name,
            format_duration(case.duration)
        );
    }
}

fn format_duration(duration: std::time::Duration) -> String {
    format!("{:.2}s", duration.as_secs_f64())
}

/// One-line payload summary for verbose mode, truncated for CI logs
fn summarize_payload(data: &Value) -> String {
    let rendered = data.to_string();
    if rendered.chars().count() > 400 {
        format!("{}...", rendered.chars().take(400).collect::<String>())
    } else {
        rendered
    }
}
