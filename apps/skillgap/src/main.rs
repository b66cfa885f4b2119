use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skillgap::analysis::extraction::{observations_from_postings, COMMON_SKILLS};
use skillgap::config::Config;
use skillgap::source::http::HttpSkillSource;
use skillgap::{SkillGapAnalyzer, SkillSource, StaticSkillSource};

#[derive(Parser)]
#[command(
    name = "skillgap",
    about = "Skill-gap analysis against live job-market demand"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a resume against the market demand for a target role.
    Analyze {
        /// Path to the resume as plain text.
        resume: PathBuf,
        /// Target role to query the skill source for.
        role: String,
        /// Skill source base URL (overrides SKILL_SOURCE_URL).
        #[arg(long)]
        source_url: Option<String>,
        /// Location filter passed to the skill source.
        #[arg(long, default_value = "remote")]
        location: String,
        /// Use the built-in static dataset instead of the HTTP source.
        #[arg(long)]
        offline: bool,
    },
    /// Build skill observations from job-posting text files.
    Extract {
        /// Plain-text posting files, one posting per file.
        #[arg(required = true)]
        postings: Vec<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok(); // load .env if present; ignore if missing

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}=info", env!("CARGO_PKG_NAME")))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Command::Analyze {
            resume,
            role,
            source_url,
            location,
            offline,
        } => {
            let resume_text = std::fs::read_to_string(&resume)
                .with_context(|| format!("Failed to read resume file {}", resume.display()))?;

            let source: Arc<dyn SkillSource> = if offline {
                info!("Using the built-in static skill dataset");
                Arc::new(StaticSkillSource::default())
            } else {
                // Only the HTTP source needs the environment config.
                let config = Config::from_env()?;
                let base_url = source_url
                    .or(config.skill_source_url)
                    .context("Set SKILL_SOURCE_URL or pass --source-url (or run with --offline)")?;
                Arc::new(
                    HttpSkillSource::new(
                        base_url,
                        Duration::from_secs(config.source_timeout_secs),
                    )
                    .with_location(location),
                )
            };

            let analyzer = SkillGapAnalyzer::new(source);
            info!("Analyzing resume against role '{role}'");
            let result = analyzer.analyze(&resume_text, &role).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Extract { postings } => {
            let mut texts = Vec::with_capacity(postings.len());
            for path in &postings {
                texts.push(
                    std::fs::read_to_string(path)
                        .with_context(|| format!("Failed to read posting file {}", path.display()))?,
                );
            }
            let observations = observations_from_postings(&texts, COMMON_SKILLS);
            info!(
                "Extracted {} skills from {} postings",
                observations.len(),
                texts.len()
            );
            println!("{}", serde_json::to_string_pretty(&observations)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_offline_analyze_parses_without_source_settings() {
        let cli =
            Cli::try_parse_from(["skillgap", "analyze", "resume.txt", "backend", "--offline"])
                .unwrap();
        match cli.command {
            Command::Analyze {
                offline,
                source_url,
                ..
            } => {
                assert!(offline);
                assert!(source_url.is_none());
            }
            _ => panic!("expected the analyze command"),
        }
    }

    #[test]
    fn test_extract_requires_at_least_one_posting() {
        assert!(Cli::try_parse_from(["skillgap", "extract"]).is_err());
    }
}
