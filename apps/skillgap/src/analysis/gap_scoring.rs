//! Gap Scoring — estimates per-skill proficiency from resume text, scores the
//! gap against a fixed required level, and ranks skills by market priority.
//!
//! The whole pass is pure and recomputed wholesale on every call; the only
//! suspension point in an analysis is the single `SkillSource` query.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::recommendations::RecommendationCatalog;
use crate::errors::AnalyzerError;
use crate::source::{RoleSkills, SkillObservation, SkillSource, Trend};

/// Required proficiency for every tracked skill. Constant policy: every skill
/// the source reports is treated as needing expert-level proficiency.
pub const REQUIRED_LEVEL: u8 = 5;

/// Proficiency qualifiers recognized in resume text, strongest first.
const QUALIFIER_LEVELS: [(&str, u8); 5] = [
    ("expert", 5),
    ("senior", 5),
    ("advanced", 4),
    ("intermediate", 3),
    ("basic", 2),
];

/// Level assigned when a skill is mentioned without any qualifier.
const DEFAULT_MENTIONED_LEVEL: u8 = 3;

/// Priority multipliers per market trend. A named, overridable table rather
/// than inline literals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendWeights {
    pub increasing: f64,
    pub decreasing: f64,
    pub stable: f64,
}

impl Default for TrendWeights {
    fn default() -> Self {
        Self {
            increasing: 1.5,
            decreasing: 0.5,
            stable: 1.0,
        }
    }
}

impl TrendWeights {
    pub fn multiplier(&self, trend: Trend) -> f64 {
        match trend {
            Trend::Increasing => self.increasing,
            Trend::Decreasing => self.decreasing,
            Trend::Stable => self.stable,
        }
    }
}

/// One skill's scored gap between estimated and required proficiency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub current_level: u8,
    pub required_level: u8,
    pub gap: u8,
    pub recommendations: Vec<String>,
    pub market_trend: Trend,
    pub priority: f64,
}

/// Full analysis returned to callers. `skill_gaps` is sorted by descending
/// priority with ties keeping source order; `market_demand` echoes the raw
/// source observations. Transient — nothing is persisted across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub skill_gaps: Vec<SkillGap>,
    pub market_demand: Vec<SkillObservation>,
    pub total_jobs: u32,
}

/// The skill-gap analyzer. Holds the source as `Arc<dyn SkillSource>` so
/// backends can be swapped at startup; stateless across calls and reentrant.
pub struct SkillGapAnalyzer {
    source: Arc<dyn SkillSource>,
    catalog: RecommendationCatalog,
    weights: TrendWeights,
}

impl SkillGapAnalyzer {
    pub fn new(source: Arc<dyn SkillSource>) -> Self {
        Self {
            source,
            catalog: RecommendationCatalog::default(),
            weights: TrendWeights::default(),
        }
    }

    pub fn with_catalog(mut self, catalog: RecommendationCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_weights(mut self, weights: TrendWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Runs one full analysis: a single awaited source call, then a pure
    /// scoring pass. A source failure fails the whole analysis — no retry,
    /// no partial result.
    pub async fn analyze(
        &self,
        resume_text: &str,
        target_role: &str,
    ) -> Result<AnalysisResult, AnalyzerError> {
        let role_skills = self.source.skills_for_role(target_role).await?;
        debug!(
            "Scoring {} observations for role '{target_role}'",
            role_skills.skills.len()
        );
        Ok(score_observations(
            resume_text,
            role_skills,
            &self.catalog,
            &self.weights,
        ))
    }
}

/// Pure scoring pass over one source response. Split out of `analyze` so the
/// pipeline is testable without a source.
fn score_observations(
    resume_text: &str,
    role_skills: RoleSkills,
    catalog: &RecommendationCatalog,
    weights: &TrendWeights,
) -> AnalysisResult {
    let mut skill_gaps: Vec<SkillGap> = role_skills
        .skills
        .iter()
        .map(|obs| {
            let current_level = estimate_current_level(resume_text, &obs.skill);
            let gap = REQUIRED_LEVEL.saturating_sub(current_level);
            SkillGap {
                skill: obs.skill.clone(),
                current_level,
                required_level: REQUIRED_LEVEL,
                gap,
                recommendations: catalog.for_skill(&obs.skill),
                market_trend: obs.trend,
                priority: f64::from(gap) * weights.multiplier(obs.trend),
            }
        })
        .collect();

    // Vec::sort_by is stable, so equal priorities keep source order.
    skill_gaps.sort_by(|a, b| b.priority.total_cmp(&a.priority));

    AnalysisResult {
        skill_gaps,
        market_demand: role_skills.skills,
        total_jobs: role_skills.total_jobs,
    }
}

/// Estimates current proficiency (0–5) from a case-insensitive keyword scan
/// of the resume.
///
/// A skill never mentioned scores 0. A mentioned skill takes its level from
/// the strongest qualifier ("expert"/"senior" → 5, "advanced" → 4,
/// "intermediate" → 3, "basic" → 2) found in a clause that mentions the
/// skill, and defaults to 3 when no mentioning clause carries a qualifier.
/// Clauses are split on sentence and list punctuation, so "Expert in
/// JavaScript, basic Python" rates JavaScript 5 and Python 2. A skill name
/// that itself spans a delimiter ("Node.js") can never sit inside one
/// clause; for those the qualifier scan covers the whole resume.
///
/// This is a keyword heuristic, not an NLP model: any qualifier sharing a
/// clause with the skill name counts, whether or not it grammatically
/// modifies that skill.
pub fn estimate_current_level(resume_text: &str, skill: &str) -> u8 {
    let resume = resume_text.to_lowercase();
    let skill = skill.to_lowercase();
    if skill.is_empty() || !resume.contains(&skill) {
        return 0;
    }

    let mut mentioned_in_clause = false;
    let mut qualified: Option<u8> = None;
    for clause in resume.split(['.', ',', ';', '\n']) {
        if !clause.contains(&skill) {
            continue;
        }
        mentioned_in_clause = true;
        let level = QUALIFIER_LEVELS
            .iter()
            .find(|(keyword, _)| clause.contains(keyword))
            .map(|&(_, level)| level);
        if let Some(level) = level {
            qualified = Some(qualified.map_or(level, |best| best.max(level)));
        }
    }

    // The resume mentions the skill, but no single clause does: the name
    // spans a delimiter. Scan the whole resume for qualifiers instead.
    if !mentioned_in_clause {
        qualified = QUALIFIER_LEVELS
            .iter()
            .find(|(keyword, _)| resume.contains(keyword))
            .map(|&(_, level)| level);
    }

    qualified.unwrap_or(DEFAULT_MENTIONED_LEVEL)
}
