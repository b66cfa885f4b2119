//! Posting-text extraction — turns raw job-posting texts into skill
//! observations.
//!
//! Counts how many postings mention each known skill (case-insensitive
//! substring match) and classifies the trend from the share of postings that
//! do. Pure functions, no network: fetching the postings is the caller's
//! concern.

use crate::source::{SkillObservation, Trend};

/// Share of postings (percent) above which a skill counts as increasing.
pub const INCREASING_SHARE: f64 = 70.0;
/// Share of postings (percent) below which a skill counts as decreasing.
pub const DECREASING_SHARE: f64 = 30.0;

/// Skills recognized out of the box when no custom vocabulary is supplied.
pub const COMMON_SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "React",
    "Node.js",
    "SQL",
    "AWS",
    "Docker",
    "Kubernetes",
    "TypeScript",
    "Angular",
    "Vue.js",
    "C#",
    "C++",
    "Ruby",
    "PHP",
    "Go",
    "Rust",
    "Swift",
    "Kotlin",
    "HTML",
    "CSS",
    "Git",
    "Linux",
    "Agile",
    "Scrum",
    "DevOps",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "GraphQL",
    "REST",
    "CI/CD",
    "Jenkins",
    "Terraform",
    "Ansible",
    "Cloud",
    "Azure",
    "GCP",
    "Firebase",
    "Machine Learning",
    "AI",
    "Data Science",
];

/// Classifies a skill's market trend from its posting count.
pub fn classify_trend(frequency: u32, total_postings: u32) -> Trend {
    if total_postings == 0 {
        return Trend::Stable;
    }
    let share = f64::from(frequency) / f64::from(total_postings) * 100.0;
    if share > INCREASING_SHARE {
        Trend::Increasing
    } else if share < DECREASING_SHARE {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}

/// Builds observations from posting texts: each posting counts at most once
/// per skill. Skills mentioned nowhere are omitted; the result is sorted by
/// descending frequency, with ties keeping vocabulary order.
pub fn observations_from_postings<S: AsRef<str>>(
    postings: &[S],
    known_skills: &[&str],
) -> Vec<SkillObservation> {
    let lowered: Vec<String> = postings.iter().map(|p| p.as_ref().to_lowercase()).collect();
    let total = postings.len() as u32;

    let mut observations: Vec<SkillObservation> = known_skills
        .iter()
        .filter_map(|skill| {
            let needle = skill.to_lowercase();
            let frequency = lowered.iter().filter(|p| p.contains(&needle)).count() as u32;
            (frequency > 0).then(|| SkillObservation {
                skill: (*skill).to_string(),
                frequency,
                trend: classify_trend(frequency, total),
            })
        })
        .collect();

    observations.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    observations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_thresholds() {
        assert_eq!(classify_trend(8, 10), Trend::Increasing); // 80%
        assert_eq!(classify_trend(2, 10), Trend::Decreasing); // 20%
        assert_eq!(classify_trend(5, 10), Trend::Stable); // 50%
    }

    #[test]
    fn test_trend_boundaries_are_exclusive() {
        assert_eq!(classify_trend(7, 10), Trend::Stable); // exactly 70%
        assert_eq!(classify_trend(3, 10), Trend::Stable); // exactly 30%
    }

    #[test]
    fn test_zero_postings_is_stable() {
        assert_eq!(classify_trend(0, 0), Trend::Stable);
    }

    #[test]
    fn test_counts_each_posting_once_per_skill() {
        let postings = [
            "Rust Rust Rust everywhere",
            "We want Rust and Go engineers",
            "Pure Go shop",
        ];
        let observations = observations_from_postings(&postings, &["Rust", "Go"]);

        let rust = observations.iter().find(|o| o.skill == "Rust").unwrap();
        assert_eq!(rust.frequency, 2);
        let go = observations.iter().find(|o| o.skill == "Go").unwrap();
        assert_eq!(go.frequency, 2);
    }

    #[test]
    fn test_unmentioned_skills_are_omitted() {
        let postings = ["We want Rust engineers"];
        let observations = observations_from_postings(&postings, &["Rust", "COBOL"]);
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].skill, "Rust");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let postings = ["looking for RUST and typescript people"];
        let observations = observations_from_postings(&postings, &["Rust", "TypeScript"]);
        assert_eq!(observations.len(), 2);
    }

    #[test]
    fn test_sorted_by_descending_frequency() {
        let postings = [
            "Python and Rust",
            "Python only",
            "Python again",
            "Rust here",
        ];
        let observations = observations_from_postings(&postings, &["Rust", "Python"]);
        assert_eq!(observations[0].skill, "Python");
        assert_eq!(observations[0].frequency, 3);
        assert_eq!(observations[1].frequency, 2);
    }

    #[test]
    fn test_trends_reflect_posting_share() {
        let postings = [
            "Python", "Python", "Python", "Python", "Python, Perl", "Python", "Python", "Python",
            "Python", "Python",
        ];
        let observations = observations_from_postings(&postings, &["Python", "Perl"]);
        assert_eq!(observations[0].trend, Trend::Increasing); // 100%
        assert_eq!(observations[1].trend, Trend::Decreasing); // 10%
    }
}
