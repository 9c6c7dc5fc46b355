//! Command line and settings.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use url::Url;

use crate::error::ConfigError;
use crate::models::CorrectAnswer;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_LOG_FILE: &str = "quiz-author.log";

#[derive(Parser, Debug)]
#[command(version, about = "Author quiz questions against a /api/questions server", long_about = None)]
pub struct Cli {
    /// Base URL of the server exposing /api/questions
    #[arg(long, env = "QUIZ_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, env = "QUIZ_API_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// File the terminal UI writes its logs to
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive terminal UI (default)
    Tui,
    /// Print every question
    List,
    /// Create a question
    Add {
        #[arg(short, long)]
        prompt: String,
        #[arg(long)]
        answer1: String,
        #[arg(long)]
        answer2: String,
        /// Which answer is correct: 1 or 2
        #[arg(short, long, default_value = "1")]
        correct: CorrectAnswer,
    },
    /// Delete a question by id, as printed by `list`
    Delete { id: String },
}

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base: Url,
    pub timeout: Option<Duration>,
    pub log_file: PathBuf,
}

impl Cli {
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let api_base = Url::parse(&self.api_url).map_err(|e| ConfigError::InvalidApiUrl {
            url: self.api_url.clone(),
            reason: e.to_string(),
        })?;
        if api_base.cannot_be_a_base() {
            return Err(ConfigError::InvalidApiUrl {
                url: self.api_url.clone(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        Ok(Settings {
            api_base,
            timeout: self.timeout_secs.map(Duration::from_secs),
            log_file: self.log_file.clone(),
        })
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Tui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_tui() {
        let cli = Cli::try_parse_from(["quiz-author"]).unwrap();
        assert_eq!(cli.command(), Command::Tui);
        let settings = cli.settings().unwrap();
        assert_eq!(settings.api_base.as_str(), "http://127.0.0.1:3000/");
        assert_eq!(settings.timeout, None);
        assert_eq!(settings.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_parses_add() {
        let cli = Cli::try_parse_from([
            "quiz-author",
            "--api-url",
            "http://quiz.local:8080/",
            "--timeout-secs",
            "5",
            "add",
            "--prompt",
            "2+2?",
            "--answer1",
            "3",
            "--answer2",
            "4",
            "--correct",
            "2",
        ])
        .unwrap();
        assert_eq!(
            cli.command(),
            Command::Add {
                prompt: "2+2?".to_string(),
                answer1: "3".to_string(),
                answer2: "4".to_string(),
                correct: CorrectAnswer::Two,
            }
        );
        assert_eq!(cli.settings().unwrap().timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_rejects_bad_correct_answer() {
        let result = Cli::try_parse_from([
            "quiz-author", "add", "-p", "q", "--answer1", "a", "--answer2", "b", "-c", "3",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_keeps_raw_id() {
        for raw in ["65a1f", "7"] {
            let cli = Cli::try_parse_from(["quiz-author", "delete", raw]).unwrap();
            assert_eq!(
                cli.command(),
                Command::Delete {
                    id: raw.to_string()
                }
            );
        }
    }

    #[test]
    fn test_rejects_invalid_url() {
        let cli = Cli::try_parse_from(["quiz-author", "--api-url", "not a url"]).unwrap();
        assert!(matches!(
            cli.settings(),
            Err(ConfigError::InvalidApiUrl { .. })
        ));
    }
}
