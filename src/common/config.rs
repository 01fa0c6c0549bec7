//! Backend URL resolution and harness settings
//!
//! The backend under test advertises its address through the frontend's
//! `.env` artifact. Resolution happens once at startup and the result is
//! immutable for the rest of the run.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::{Error, Result};

/// Env file key that carries the backend base URL
pub const BACKEND_URL_KEY: &str = "REACT_APP_BACKEND_URL";

/// Environment variable override for the backend base URL
pub const BACKEND_URL_ENV: &str = "BACKEND_URL";

/// Default location of the frontend env artifact
pub const DEFAULT_ENV_FILE: &str = "frontend/.env";

/// Path segment appended to the base URL to reach the API root
const API_SEGMENT: &str = "/api";

fn default_timeout_secs() -> u64 {
    30
}

/// Resolved harness configuration, fixed for the duration of a run
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Fully derived API root, e.g. `https://backend.example.com/api`
    pub api_root: String,

    /// Per-request timeout applied to the HTTP client
    pub timeout: Duration,

    /// Print response payload summaries per case
    pub verbose: bool,
}

impl HarnessConfig {
    /// Resolve the configuration from CLI arguments and the environment.
    ///
    /// Base URL resolution order, first hit wins:
    /// 1. `--base-url` flag
    /// 2. `BACKEND_URL` environment variable
    /// 3. `REACT_APP_BACKEND_URL` key in the env file
    pub fn resolve(
        base_url: Option<String>,
        env_file: Option<PathBuf>,
        timeout_secs: Option<u64>,
        verbose: bool,
    ) -> Result<Self> {
        let env_path = env_file.unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE));

        let raw = match base_url {
            Some(url) => url,
            None => match std::env::var(BACKEND_URL_ENV) {
                Ok(url) if !url.trim().is_empty() => url,
                _ => read_backend_url(&env_path)?,
            },
        };

        let api_root = derive_api_root(&raw);
        if api_root == API_SEGMENT {
            return Err(Error::Config(format!(
                "Resolved backend URL is empty (raw value: '{raw}')"
            )));
        }

        let timeout = Duration::from_secs(timeout_secs.unwrap_or_else(default_timeout_secs));

        Ok(Self {
            api_root,
            timeout,
            verbose,
        })
    }
}

/// Read the backend base URL from a frontend env file
fn read_backend_url(path: &Path) -> Result<String> {
    let iter = dotenvy::from_path_iter(path).map_err(|e| Error::EnvFileRead {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    for item in iter {
        let (key, value) = item.map_err(|e| Error::EnvFileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        if key == BACKEND_URL_KEY {
            return Ok(strip_quotes(&value).to_string());
        }
    }

    Err(Error::backend_url_not_found(
        BACKEND_URL_KEY,
        &path.display().to_string(),
    ))
}

/// Strip one layer of wrapping single or double quotes
fn strip_quotes(value: &str) -> &str {
    let value = value.trim();
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| {
            value
                .strip_prefix('\'')
                .and_then(|v| v.strip_suffix('\''))
        })
        .unwrap_or(value)
}

/// Derive the API root from a base URL: trim trailing slashes, append `/api`
fn derive_api_root(base_url: &str) -> String {
    let trimmed = strip_quotes(base_url).trim_end_matches('/');
    format!("{trimmed}{API_SEGMENT}")
}
