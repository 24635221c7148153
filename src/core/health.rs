//! Backend API health check.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{error::WatchlistError, Result, API_BASE_ENV_VAR};

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Body returned by `/api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Pick the API base URL: explicit value, then `FPL_API_BASE`, then the
/// local default.
/// Blank values at either level are skipped.
pub fn resolve_api_base(explicit: Option<String>) -> String {
    let not_blank = |s: &String| !s.trim().is_empty();
    explicit
        .filter(not_blank)
        .or_else(|| std::env::var(API_BASE_ENV_VAR).ok().filter(not_blank))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

pub fn health_url(base: &str) -> String {
    format!("{}/api/health", base.trim_end_matches('/'))
}

pub async fn get_health(client: &Client, base: &str) -> Result<HealthStatus> {
    let url = health_url(base);
    debug!(%url, "checking API health");

    let res = client.get(&url).send().await?;
    if !res.status().is_success() {
        return Err(WatchlistError::HealthCheck {
            status: res.status().as_u16(),
        });
    }

    Ok(res.json::<HealthStatus>().await?)
}
