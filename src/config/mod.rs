#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::session::SessionPlan;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Where a session's settings come from (command line or TOML file).
pub trait SessionSettings {
    fn cinema_name(&self) -> &str;
    fn capacity(&self) -> usize;
    fn output_format(&self) -> OutputFormat;
    fn plan(&self) -> SessionPlan;
}
