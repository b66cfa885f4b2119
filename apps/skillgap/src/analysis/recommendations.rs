//! Recommendation catalog — fixed study suggestions looked up by skill name.
//!
//! Injected into the analyzer as an immutable map rather than living as
//! module-level state, so alternate tables can be swapped in for testing.

use std::collections::HashMap;

/// Immutable skill → recommendations table. Lookup is case-insensitive;
/// skills absent from the table get a generic three-step fallback.
#[derive(Debug, Clone)]
pub struct RecommendationCatalog {
    entries: HashMap<String, Vec<String>>,
    fallback: Vec<String>,
}

impl RecommendationCatalog {
    pub fn new(entries: HashMap<String, Vec<String>>, fallback: Vec<String>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(skill, recs)| (skill.to_lowercase(), recs))
            .collect();
        Self { entries, fallback }
    }

    pub fn for_skill(&self, skill: &str) -> Vec<String> {
        self.entries
            .get(&skill.to_lowercase())
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

impl Default for RecommendationCatalog {
    fn default() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            "JavaScript".to_string(),
            owned(&[
                "Complete Advanced JavaScript course on Udemy",
                "Build a full-stack application using Node.js",
                "Practice with React and TypeScript",
            ]),
        );
        entries.insert(
            "Python".to_string(),
            owned(&[
                "Take Python for Data Science course",
                "Complete 3 Python projects on GitHub",
                "Learn Django framework",
            ]),
        );
        entries.insert(
            "React".to_string(),
            owned(&[
                "Build a complex React application",
                "Learn Redux state management",
                "Practice with React hooks",
            ]),
        );
        entries.insert(
            "AWS".to_string(),
            owned(&[
                "Complete AWS Solutions Architect certification",
                "Build a cloud-based application",
                "Practice with AWS services",
            ]),
        );
        entries.insert(
            "Docker".to_string(),
            owned(&[
                "Learn Docker basics on Docker's official website",
                "Containerize a web application",
                "Practice with Docker Compose",
            ]),
        );

        let fallback = owned(&[
            "Take an online course in this skill",
            "Build a project using this technology",
            "Practice with real-world examples",
        ]);

        Self::new(entries, fallback)
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
