//! Skill-gap analysis for JobQuest Navigator.
//!
//! The presentation layer calls `SkillGapAnalyzer::analyze` and renders the
//! ranked result; the binary in main.rs is a thin CLI stand-in for it.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod source;

pub use analysis::gap_scoring::{
    AnalysisResult, SkillGap, SkillGapAnalyzer, TrendWeights, REQUIRED_LEVEL,
};
pub use analysis::recommendations::RecommendationCatalog;
pub use errors::AnalyzerError;
pub use source::{RoleSkills, SkillObservation, SkillSource, StaticSkillSource, Trend};
