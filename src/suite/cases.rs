//! The ordered test cases
//!
//! Each case performs its HTTP calls through the context's [`ApiClient`],
//! validates the response shape, and reports a classified [`CaseOutcome`].
//! Anticipated conditions (missing preconditions, provider quota
//! exhaustion, wrong response shapes) never surface as `Err`; transport
//! failures and non-2xx statuses propagate as typed errors for the runner
//! to classify.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;
use serde_json::{json, Value};

use crate::common::Result;

use super::context::{RunContext, SENTINEL_RESUME_ID};
use super::fixtures::{SAMPLE_JOB_DESCRIPTION, SAMPLE_RESUME_TEXT};
use super::outcome::CaseOutcome;

/// Readiness phrase the health endpoint must include
const READINESS_PHRASE: &str = "Career Assistant API is running";

/// Password used for all throwaway accounts
const TEST_PASSWORD: &str = "SecurePassword123!";

/// Body for `/auth/register`
#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Body for `/auth/login`
#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Body for `/resume/analyze-text`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeTextRequest<'a> {
    resume_text: &'a str,
    user_id: &'a str,
}

/// Body for `/job/match`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JobMatchRequest<'a> {
    resume_id: &'a str,
    job_description: &'a str,
}

/// Body for `/report/generate`; a missing match id serializes as null
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportRequest<'a> {
    resume_id: &'a str,
    match_id: Option<&'a str>,
}

/// GET `/` and check for the readiness phrase
pub async fn health_check(ctx: &mut RunContext) -> Result<CaseOutcome> {
    let resp = ctx.client.get("/").await?;
    let data = resp.success_json()?;

    let message = data.get("message").and_then(Value::as_str).unwrap_or("");
    if message.contains(READINESS_PHRASE) {
        Ok(CaseOutcome::passed(data))
    } else {
        Ok(CaseOutcome::failed_with_data("Unexpected response", data))
    }
}

/// Register a fresh user and store its token and id in the context
pub async fn user_registration(ctx: &mut RunContext) -> Result<CaseOutcome> {
    let email = unique_email("testuser");
    let body = RegisterRequest {
        name: "Test User",
        email: &email,
        password: TEST_PASSWORD,
    };

    let resp = ctx.client.post_json("auth/register", &body).await?;
    let data = resp.success_json()?;

    let token = data.get("token").and_then(value_as_id);
    let user_id = data
        .get("user")
        .and_then(|u| u.get("id"))
        .and_then(value_as_id);

    match (token, user_id) {
        (Some(token), Some(user_id)) => {
            ctx.auth_token = Some(token);
            ctx.user_id = Some(user_id);
            Ok(CaseOutcome::passed(data))
        }
        _ => Ok(CaseOutcome::failed_with_data(
            "Registration didn't return token or user data",
            data,
        )),
    }
}

/// Register a throwaway user, then log in with its credentials.
/// Does not touch the context slots written by registration.
pub async fn user_login(ctx: &mut RunContext) -> Result<CaseOutcome> {
    let email = unique_email("logintest");
    let register_body = RegisterRequest {
        name: "Login Test User",
        email: &email,
        password: TEST_PASSWORD,
    };

    let resp = ctx.client.post_json("auth/register", &register_body).await?;
    resp.success_json()?;

    let login_body = LoginRequest {
        email: &email,
        password: TEST_PASSWORD,
    };

    let resp = ctx.client.post_json("auth/login", &login_body).await?;
    let data = resp.success_json()?;

    if data.get("token").is_some() && data.get("user").is_some() {
        Ok(CaseOutcome::passed(data))
    } else {
        Ok(CaseOutcome::failed_with_data(
            "Login didn't return token or user data",
            data,
        ))
    }
}

/// Submit the sample resume for analysis and store the resume id.
///
/// The backend delegates analysis to a language-model provider whose quota
/// is routinely exhausted in test environments. A 5xx here is treated as a
/// known environmental condition: the sentinel resume id is substituted so
/// dependent cases can short-circuit.
pub async fn resume_text_analysis(ctx: &mut RunContext) -> Result<CaseOutcome> {
    let user_id = ctx.user_id.clone().unwrap_or_else(|| "anonymous".to_string());
    let body = AnalyzeTextRequest {
        resume_text: SAMPLE_RESUME_TEXT,
        user_id: &user_id,
    };

    let resp = ctx.client.post_json("resume/analyze-text", &body).await?;

    if resp.status.is_server_error() {
        let note = if is_quota_error(&resp.body_text()) {
            "Language-model provider quota exceeded, using mock resume id"
        } else {
            "Server error during analysis, using mock resume id"
        };
        ctx.resume_id = Some(SENTINEL_RESUME_ID.to_string());
        return Ok(CaseOutcome::tolerated(note));
    }

    let data = resp.success_json()?;
    match missing_fields(&data, &["resumeId", "parsedData", "analysis"]) {
        missing if missing.is_empty() => {
            ctx.resume_id = data.get("resumeId").and_then(value_as_id);
            Ok(CaseOutcome::passed(data))
        }
        missing => Ok(CaseOutcome::failed_with_data(
            format!("Missing required fields in response: {}", missing.join(", ")),
            data,
        )),
    }
}

/// Match the analyzed resume against the sample job description
pub async fn job_matching(ctx: &mut RunContext) -> Result<CaseOutcome> {
    let Some(resume_id) = ctx.resume_id.clone() else {
        return Ok(CaseOutcome::failed(
            "No resume ID available. Resume analysis test must run first.",
        ));
    };
    if ctx.has_sentinel_resume() {
        return Ok(CaseOutcome::tolerated(
            "Job matching skipped due to mock resume id",
        ));
    }

    let body = JobMatchRequest {
        resume_id: &resume_id,
        job_description: SAMPLE_JOB_DESCRIPTION,
    };

    let resp = ctx.client.post_json("job/match", &body).await?;
    let data = resp.success_json()?;

    match missing_fields(&data, &["matchId", "matchScore", "matchDetails", "coverLetter"]) {
        missing if missing.is_empty() => {
            ctx.match_id = data.get("matchId").and_then(value_as_id);
            Ok(CaseOutcome::passed(data))
        }
        missing => Ok(CaseOutcome::failed_with_data(
            format!("Missing required fields in response: {}", missing.join(", ")),
            data,
        )),
    }
}

/// GET the admin dashboard statistics
pub async fn admin_stats(ctx: &mut RunContext) -> Result<CaseOutcome> {
    let resp = ctx.client.get("admin/stats").await?;
    let data = resp.success_json()?;

    match missing_fields(&data, &["stats", "recentActivity"]) {
        missing if missing.is_empty() => Ok(CaseOutcome::passed(data)),
        missing => Ok(CaseOutcome::failed_with_data(
            format!("Missing required fields in response: {}", missing.join(", ")),
            data,
        )),
    }
}

/// List the registered user's resumes; the result must be an array
pub async fn get_user_resumes(ctx: &mut RunContext) -> Result<CaseOutcome> {
    let user_id = match &ctx.user_id {
        Some(id) => id.clone(),
        None => {
            return Ok(CaseOutcome::failed(
                "No user ID available. User registration test must run first.",
            ))
        }
    };

    let resp = ctx.client.get(&format!("resumes/{user_id}")).await?;
    let data = resp.success_json()?;

    if data.is_array() {
        Ok(CaseOutcome::passed(data))
    } else {
        Ok(CaseOutcome::failed_with_data(
            "Expected an array of resumes",
            data,
        ))
    }
}

/// List job matches for the analyzed resume; the result must be an array
pub async fn get_job_matches(ctx: &mut RunContext) -> Result<CaseOutcome> {
    let Some(resume_id) = ctx.resume_id.clone() else {
        return Ok(CaseOutcome::failed(
            "No resume ID available. Resume analysis test must run first.",
        ));
    };
    if ctx.has_sentinel_resume() {
        return Ok(CaseOutcome::tolerated(
            "No matches expected for mock resume id",
        ));
    }

    let resp = ctx.client.get(&format!("matches/{resume_id}")).await?;
    let data = resp.success_json()?;

    if data.is_array() {
        Ok(CaseOutcome::passed(data))
    } else {
        Ok(CaseOutcome::failed_with_data(
            "Expected an array of job matches",
            data,
        ))
    }
}

/// Generate a PDF report for the analyzed resume.
///
/// Only the status and content type are validated; the first 100 body
/// bytes are captured base64-encoded as evidence. Full PDF structure is
/// the backend's concern.
pub async fn pdf_report_generation(ctx: &mut RunContext) -> Result<CaseOutcome> {
    let Some(resume_id) = ctx.resume_id.clone() else {
        return Ok(CaseOutcome::failed(
            "No resume ID available. Resume analysis test must run first.",
        ));
    };
    if ctx.has_sentinel_resume() {
        return Ok(CaseOutcome::tolerated(
            "PDF report generation skipped due to mock resume id",
        ));
    }

    let body = ReportRequest {
        resume_id: &resume_id,
        match_id: ctx.match_id.as_deref(),
    };

    let resp = ctx.client.post_json("report/generate", &body).await?;

    let is_pdf = resp
        .content_type
        .as_deref()
        .map(|ct| ct.starts_with("application/pdf"))
        .unwrap_or(false);

    if resp.status.as_u16() == 200 && is_pdf {
        let sample_len = resp.body.len().min(100);
        let pdf_sample = BASE64.encode(&resp.body[..sample_len]);
        Ok(CaseOutcome::passed(json!({ "pdf_sample": pdf_sample })))
    } else {
        Ok(CaseOutcome::failed(format!(
            "Failed to generate PDF report (status {}): {}",
            resp.status,
            resp.body_text()
        )))
    }
}

/// Build a unique email from the current unix time so that runs separated
/// by at least a second never collide on registration
fn unique_email(prefix: &str) -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{prefix}{timestamp}@example.com")
}

/// Whether a 5xx body points at language-model provider quota exhaustion
fn is_quota_error(body: &str) -> bool {
    body.contains("insufficient_quota") || body.to_lowercase().contains("rate limit")
}

/// Names of required top-level fields absent from a JSON object
fn missing_fields<'a>(data: &Value, fields: &[&'a str]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|f| data.get(**f).is_none())
        .copied()
        .collect()
}

/// Extract an identifier as a string; numeric ids are stringified
fn value_as_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
