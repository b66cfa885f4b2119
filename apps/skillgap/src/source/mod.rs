//! Job-Skill Source — the collaborator reporting which skills the market asks
//! for in a given role.
//!
//! The analyzer carries an `Arc<dyn SkillSource>`, swapped at startup:
//! `HttpSkillSource` in production, `StaticSkillSource` for tests and
//! offline runs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AnalyzerError;

pub mod http;

/// Market trend of a skill across recent job postings.
///
/// Trend labels the source invents that we do not recognize collapse to
/// `Stable`, which carries the neutral priority multiplier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    #[default]
    #[serde(other)]
    Stable,
}

/// A single skill's measured frequency and trend within one batch of job
/// postings for a role. Unique per skill name within one query result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillObservation {
    pub skill: String,
    pub frequency: u32,
    pub trend: Trend,
}

/// Full source response for one role query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleSkills {
    pub skills: Vec<SkillObservation>,
    pub total_jobs: u32,
}

/// The job-skill source trait. Implement this to swap backends without
/// touching the analyzer or its callers.
///
/// The implementation owns all network, API-key, and auth concerns; callers
/// see either a valid observation set or an `AnalyzerError`.
#[async_trait]
pub trait SkillSource: Send + Sync {
    async fn skills_for_role(&self, role: &str) -> Result<RoleSkills, AnalyzerError>;
}

/// In-memory source returning the same observation set for every role.
///
/// An injected alternative to the HTTP source for tests and `--offline` runs,
/// never a fallback: a failing HTTP call stays a failure.
pub struct StaticSkillSource {
    data: RoleSkills,
}

impl StaticSkillSource {
    pub fn new(data: RoleSkills) -> Self {
        Self { data }
    }
}

impl Default for StaticSkillSource {
    /// Three mainstream skills over a 50-posting window.
    fn default() -> Self {
        Self::new(RoleSkills {
            skills: vec![
                SkillObservation {
                    skill: "JavaScript".to_string(),
                    frequency: 85,
                    trend: Trend::Increasing,
                },
                SkillObservation {
                    skill: "Python".to_string(),
                    frequency: 90,
                    trend: Trend::Increasing,
                },
                SkillObservation {
                    skill: "React".to_string(),
                    frequency: 80,
                    trend: Trend::Stable,
                },
            ],
            total_jobs: 50,
        })
    }
}

#[async_trait]
impl SkillSource for StaticSkillSource {
    async fn skills_for_role(&self, _role: &str) -> Result<RoleSkills, AnalyzerError> {
        Ok(self.data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_serde_increasing() {
        let trend: Trend = serde_json::from_str(r#""increasing""#).unwrap();
        assert_eq!(trend, Trend::Increasing);
    }

    #[test]
    fn test_trend_serde_decreasing() {
        let trend: Trend = serde_json::from_str(r#""decreasing""#).unwrap();
        assert_eq!(trend, Trend::Decreasing);
    }

    #[test]
    fn test_trend_serde_stable() {
        let trend: Trend = serde_json::from_str(r#""stable""#).unwrap();
        assert_eq!(trend, Trend::Stable);
    }

    #[test]
    fn test_trend_unknown_label_collapses_to_stable() {
        let trend: Trend = serde_json::from_str(r#""exploding""#).unwrap();
        assert_eq!(trend, Trend::Stable);
    }

    #[test]
    fn test_trend_serializes_lowercase() {
        let json = serde_json::to_string(&Trend::Increasing).unwrap();
        assert_eq!(json, r#""increasing""#);
    }

    #[test]
    fn test_role_skills_deserializes_from_source_payload() {
        let json = r#"{
            "skills": [
                {"skill": "Rust", "frequency": 12, "trend": "increasing"},
                {"skill": "Java", "frequency": 4, "trend": "decreasing"}
            ],
            "total_jobs": 50
        }"#;

        let role_skills: RoleSkills = serde_json::from_str(json).unwrap();
        assert_eq!(role_skills.total_jobs, 50);
        assert_eq!(role_skills.skills.len(), 2);
        assert_eq!(role_skills.skills[0].skill, "Rust");
        assert_eq!(role_skills.skills[0].trend, Trend::Increasing);
    }

    #[tokio::test]
    async fn test_static_source_ignores_role() {
        let source = StaticSkillSource::default();
        let a = source.skills_for_role("backend engineer").await.unwrap();
        let b = source.skills_for_role("data scientist").await.unwrap();
        assert_eq!(a.skills.len(), b.skills.len());
        assert_eq!(a.total_jobs, 50);
    }
}
