use crate::config::{OutputFormat, SessionSettings};
use crate::core::session::SessionPlan;
use crate::domain::model::CINEMA_CAPACITY;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, Validate,
};
use clap::Parser;

pub const DEFAULT_CINEMA_NAME: &str = "Nile Cinema";

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "cinema-ticketing")]
#[command(about = "Issue, register and print cinema tickets")]
pub struct CliConfig {
    /// Path to a TOML session file; without it the built-in demo session runs
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub cinema_name: Option<String>,

    #[arg(long)]
    pub capacity: Option<usize>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Validate and list the ticket orders without running the session")]
    pub dry_run: bool,
}

impl SessionSettings for CliConfig {
    fn cinema_name(&self) -> &str {
        self.cinema_name.as_deref().unwrap_or(DEFAULT_CINEMA_NAME)
    }

    fn capacity(&self) -> usize {
        self.capacity.unwrap_or(CINEMA_CAPACITY)
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    fn plan(&self) -> SessionPlan {
        SessionPlan::demo()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("cinema_name", self.cinema_name())?;
        validate_positive_number("capacity", self.capacity(), 1)?;
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["cinema-ticketing"]);
        assert_eq!(config.cinema_name(), "Nile Cinema");
        assert_eq!(config.capacity(), 20);
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert_eq!(config.plan(), SessionPlan::demo());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::parse_from([
            "cinema-ticketing",
            "--cinema-name",
            "Cairo Screens",
            "--capacity",
            "2",
            "--format",
            "csv",
            "-v",
        ]);
        assert_eq!(config.cinema_name(), "Cairo Screens");
        assert_eq!(config.capacity(), 2);
        assert_eq!(config.output_format(), OutputFormat::Csv);
        assert!(config.verbose);
    }

    #[test]
    fn test_output_path_flag_is_rejected() {
        // 報表只寫到 stdout
        let result = CliConfig::try_parse_from(["cinema-ticketing", "--output-path", "tickets.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_zero_capacity() {
        let config = CliConfig {
            capacity: Some(0),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CliConfig {
            cinema_name: Some("  ".to_string()),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
