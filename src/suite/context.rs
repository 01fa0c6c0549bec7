//! Shared run state threaded through the case sequence
//!
//! Early cases establish identifiers that later cases depend on. The state
//! lives in one context passed `&mut` into each case; a case that needs a
//! slot that was never filled reports a precondition failure instead of
//! making the HTTP call.

use crate::api::ApiClient;

/// Placeholder resume id substituted when real analysis cannot complete
/// because the backend's language-model provider is out of quota. Dependent
/// cases detect it and short-circuit instead of calling the backend.
pub const SENTINEL_RESUME_ID: &str = "mock-resume-id-for-testing";

/// Context shared by all cases in one run of the sequence
#[derive(Debug)]
pub struct RunContext {
    pub client: ApiClient,
    pub verbose: bool,

    /// Set by User Registration
    pub auth_token: Option<String>,
    /// Set by User Registration
    pub user_id: Option<String>,
    /// Set by Resume Text Analysis (real id or [`SENTINEL_RESUME_ID`])
    pub resume_id: Option<String>,
    /// Set by Job Matching when a real match was created
    pub match_id: Option<String>,
}

impl RunContext {
    pub fn new(client: ApiClient, verbose: bool) -> Self {
        Self {
            client,
            verbose,
            auth_token: None,
            user_id: None,
            resume_id: None,
            match_id: None,
        }
    }

    /// Whether the resume id slot holds the quota-degradation sentinel
    pub fn has_sentinel_resume(&self) -> bool {
        self.resume_id.as_deref() == Some(SENTINEL_RESUME_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn context() -> RunContext {
        let client = ApiClient::new("http://127.0.0.1:1/api", Duration::from_secs(1)).unwrap();
        RunContext::new(client, false)
    }

    #[test]
    fn test_fresh_context_has_no_state() {
        let ctx = context();
        assert!(ctx.auth_token.is_none());
        assert!(ctx.user_id.is_none());
        assert!(ctx.resume_id.is_none());
        assert!(ctx.match_id.is_none());
        assert!(!ctx.has_sentinel_resume());
    }

    #[test]
    fn test_sentinel_detection() {
        let mut ctx = context();
        ctx.resume_id = Some("real-id".to_string());
        assert!(!ctx.has_sentinel_resume());
        ctx.resume_id = Some(SENTINEL_RESUME_ID.to_string());
        assert!(ctx.has_sentinel_resume());
    }
}
