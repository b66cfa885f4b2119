use anyhow::{Context, Result};

/// Skill-source configuration loaded from environment variables. Only the
/// HTTP source needs it; offline analyses and extraction never load it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Job-Skill Source. Optional: callers passing
    /// `--source-url` do not need it.
    pub skill_source_url: Option<String>,
    /// Upper bound on one source request, in seconds. The source call is the
    /// only suspension point in an analysis, so this bounds the whole call.
    pub source_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            skill_source_url: std::env::var("SKILL_SOURCE_URL").ok(),
            source_timeout_secs: std::env::var("SOURCE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u64>()
                .context("SOURCE_TIMEOUT_SECS must be a whole number of seconds")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_defaults_to_ten_seconds() {
        std::env::remove_var("SOURCE_TIMEOUT_SECS");
        let config = Config::from_env().unwrap();
        assert_eq!(config.source_timeout_secs, 10);
    }
}
