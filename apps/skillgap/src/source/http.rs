//! HTTP-backed skill source.
//!
//! Queries a JSON endpoint `GET {base}/skills?role=...&location=...` and maps
//! every transport, status, and decode failure to
//! `AnalyzerError::SourceUnavailable`. One request per query, no retries,
//! bounded timeout.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::AnalyzerError;
use crate::source::{RoleSkills, SkillObservation, SkillSource, Trend};

const DEFAULT_LOCATION: &str = "remote";

/// Default per-request timeout. The underlying call would otherwise hang
/// indefinitely on an unresponsive source.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Wire shape of one observation. `skill` is optional so a malformed entry
/// can be skipped instead of failing the whole payload.
#[derive(Debug, Deserialize)]
struct WireObservation {
    skill: Option<String>,
    #[serde(default)]
    frequency: u32,
    #[serde(default)]
    trend: Trend,
}

#[derive(Debug, Deserialize)]
struct WireRoleSkills {
    #[serde(default)]
    skills: Vec<WireObservation>,
    #[serde(default)]
    total_jobs: u32,
}

/// Skill source backed by a JSON HTTP endpoint.
pub struct HttpSkillSource {
    client: Client,
    base_url: String,
    location: String,
}

impl HttpSkillSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
            location: DEFAULT_LOCATION.to_string(),
        }
    }

    /// Narrows the query to a location other than the default "remote".
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

#[async_trait]
impl SkillSource for HttpSkillSource {
    async fn skills_for_role(&self, role: &str) -> Result<RoleSkills, AnalyzerError> {
        let url = format!("{}/skills", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .query(&[("role", role), ("location", self.location.as_str())])
            .send()
            .await
            .map_err(|e| AnalyzerError::SourceUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalyzerError::SourceUnavailable(format!(
                "skill source returned {status}: {body}"
            )));
        }

        let payload: WireRoleSkills = response
            .json()
            .await
            .map_err(|e| AnalyzerError::SourceUnavailable(format!("invalid payload: {e}")))?;

        Ok(sanitize(payload))
    }
}

/// Drops observations without a skill name. One malformed entry must not fail
/// the whole analysis.
fn sanitize(payload: WireRoleSkills) -> RoleSkills {
    let mut skills = Vec::with_capacity(payload.skills.len());
    for obs in payload.skills {
        match obs.skill {
            Some(name) if !name.trim().is_empty() => skills.push(SkillObservation {
                skill: name,
                frequency: obs.frequency,
                trend: obs.trend,
            }),
            _ => warn!("Skipping skill observation without a skill name"),
        }
    }
    debug!("Skill source returned {} usable observations", skills.len());
    RoleSkills {
        skills,
        total_jobs: payload.total_jobs,
    }
}
