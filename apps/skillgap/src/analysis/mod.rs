//! Skill-gap analysis pipeline.
//!
//! Implements: proficiency estimation, gap/priority scoring, recommendation
//! lookup, posting-text extraction. The single outbound call goes through the
//! `SkillSource` trait — no module here talks to the network directly.

pub mod extraction;
pub mod gap_scoring;
pub mod recommendations;
