// src/config.rs
use crate::constants::DEFAULT_POSTS_DIR;
use crate::error::AppError;
use crate::types::{ApiKey, DatabaseId};
use clap::Parser;
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Directory to write generated posts into
    #[arg(short = 'o', long, default_value = DEFAULT_POSTS_DIR)]
    pub posts_dir: String,

    /// Emit a `math: true` front-matter line in every post
    #[arg(long, default_value_t = false)]
    pub math: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Database to sync: ID or notion.so URL (defaults to NOTION_DATABASE_ID)
    #[arg(long)]
    pub database: Option<String>,
}

/// Resolved sync configuration — validated and ready to drive the run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub api_key: ApiKey,
    pub database_id: DatabaseId,
    pub posts_dir: PathBuf,
    pub math: bool,
    #[allow(dead_code)] // Used by bin crate
    pub verbose: bool,
}

impl SyncConfig {
    /// Resolves a complete configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let api_key_str = std::env::var("NOTION_API_KEY").map_err(|_| {
            AppError::MissingConfiguration(
                "NOTION_API_KEY environment variable not set".to_string(),
            )
        })?;
        let api_key = ApiKey::new(api_key_str)?;

        let database_input = match cli.database {
            Some(database) => database,
            None => std::env::var("NOTION_DATABASE_ID").map_err(|_| {
                AppError::MissingConfiguration(
                    "NOTION_DATABASE_ID environment variable not set".to_string(),
                )
            })?,
        };
        let database_id = DatabaseId::parse(&database_input)?;

        Ok(SyncConfig {
            api_key,
            database_id,
            posts_dir: PathBuf::from(cli.posts_dir),
            math: cli.math,
            verbose: cli.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_target_the_posts_dir() {
        let cli = CommandLineInput::parse_from(["notion2chirpy"]);
        assert_eq!(cli.posts_dir, "_posts");
        assert!(!cli.math);
        assert!(!cli.verbose);
        assert!(cli.database.is_none());
    }

    #[test]
    fn cli_accepts_overrides() {
        let cli = CommandLineInput::parse_from([
            "notion2chirpy",
            "--posts-dir",
            "out",
            "--math",
            "--database",
            "550e8400e29b41d4a716446655440000",
        ]);
        assert_eq!(cli.posts_dir, "out");
        assert!(cli.math);
        assert_eq!(
            cli.database.as_deref(),
            Some("550e8400e29b41d4a716446655440000")
        );
    }
}
