use crate::config::{OutputFormat, SessionSettings};
use crate::core::session::SessionPlan;
use crate::domain::model::{TicketKind, TicketOrder, CINEMA_CAPACITY};
use crate::utils::error::{Result, TicketingError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_required_field, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub cinema: CinemaConfig,
    pub output: Option<OutputConfig>,
    #[serde(default)]
    pub tickets: Vec<TicketOrder>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CinemaConfig {
    pub name: String,
    pub capacity: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TicketingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TicketingError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CINEMA_NAME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TicketingError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("cinema.name", &self.cinema.name)?;
        validate_positive_number("cinema.capacity", self.capacity(), 1)?;

        // 各票種的必要欄位；價格留到開票時驗證
        for (i, order) in self.tickets.iter().enumerate() {
            validate_non_empty_string(&format!("tickets[{}].movie", i), &order.movie)?;
            match order.kind {
                TicketKind::Standard => {
                    validate_required_field(&format!("tickets[{}].seat", i), &order.seat)?;
                }
                TicketKind::Vip => {
                    validate_required_field(&format!("tickets[{}].lounge", i), &order.lounge)?;
                }
                TicketKind::Imax => {
                    validate_required_field(&format!("tickets[{}].is_3d", i), &order.is_3d)?;
                }
            }
        }

        if self.tickets.len() > self.capacity() {
            tracing::warn!(
                "⚠️ {} ticket orders exceed the capacity of {} ({} slots)",
                self.tickets.len(),
                self.cinema.name,
                self.capacity()
            );
        }

        Ok(())
    }

    /// 命令列參數優先於檔案設定
    #[cfg(feature = "cli")]
    pub fn apply_overrides(&mut self, cli: &crate::config::cli::CliConfig) {
        if let Some(name) = &cli.cinema_name {
            self.cinema.name = name.clone();
        }
        if let Some(capacity) = cli.capacity {
            self.cinema.capacity = Some(capacity);
        }
        if let Some(format) = cli.format {
            self.output.get_or_insert_with(OutputConfig::default).format = Some(format);
        }
    }
}

impl SessionSettings for TomlConfig {
    fn cinema_name(&self) -> &str {
        &self.cinema.name
    }

    fn capacity(&self) -> usize {
        self.cinema.capacity.unwrap_or(CINEMA_CAPACITY)
    }

    fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }

    fn plan(&self) -> SessionPlan {
        SessionPlan::new(self.tickets.clone())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
