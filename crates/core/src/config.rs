use crate::error::{CampaignError, CampaignResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// File looked up in the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "campaign-analyzer";

/// Root application configuration. Loaded from an optional TOML file and
/// environment variables with the prefix `CAMPAIGN_ANALYZER__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Half-open `[min, max)` integer range a raw counter is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: u64,
    pub max: u64,
}

impl ValueRange {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u64) -> bool {
        value >= self.min && value < self.max
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_channels")]
    pub channels: Vec<String>,
    #[serde(default = "default_impressions")]
    pub impressions: ValueRange,
    #[serde(default = "default_clicks")]
    pub clicks: ValueRange,
    #[serde(default = "default_conversions")]
    pub conversions: ValueRange,
    #[serde(default = "default_cost")]
    pub cost: ValueRange,
    #[serde(default = "default_revenue")]
    pub revenue: ValueRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: OutputFormat,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

// Default functions
fn default_seed() -> u64 {
    42
}
fn default_channels() -> Vec<String> {
    ["Google Ads", "Facebook", "Instagram", "LinkedIn", "Email"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}
fn default_impressions() -> ValueRange {
    ValueRange::new(5_000, 20_000)
}
fn default_clicks() -> ValueRange {
    ValueRange::new(500, 5_000)
}
fn default_conversions() -> ValueRange {
    ValueRange::new(50, 500)
}
fn default_cost() -> ValueRange {
    ValueRange::new(10_000, 50_000)
}
fn default_revenue() -> ValueRange {
    ValueRange::new(20_000, 100_000)
}
fn default_format() -> OutputFormat {
    OutputFormat::Table
}
fn default_currency_symbol() -> String {
    "₹".to_string()
}
fn default_decimals() -> usize {
    2
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            channels: default_channels(),
            impressions: default_impressions(),
            clicks: default_clicks(),
            conversions: default_conversions(),
            cost: default_cost(),
            revenue: default_revenue(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            currency_symbol: default_currency_symbol(),
            decimals: default_decimals(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            generator: GeneratorConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Ranges feeding a ratio denominator must exclude zero, every range must
    /// be non-empty and channels must be unique.
    pub fn validate(&self) -> CampaignResult<()> {
        if self.channels.is_empty() {
            return Err(CampaignError::Config("channel list is empty".into()));
        }
        let mut seen = HashSet::new();
        for channel in &self.channels {
            if !seen.insert(channel.as_str()) {
                return Err(CampaignError::Config(format!(
                    "duplicate channel '{channel}'"
                )));
            }
        }

        for (name, range) in self.ranges() {
            let denominator = matches!(name, "impressions" | "clicks" | "cost");
            if range.min >= range.max {
                return Err(CampaignError::Config(format!(
                    "{name} range [{}, {}) is empty",
                    range.min, range.max
                )));
            }
            if denominator && range.min == 0 {
                return Err(CampaignError::Config(format!(
                    "{name} range must start above zero"
                )));
            }
        }
        Ok(())
    }

    pub fn ranges(&self) -> [(&'static str, ValueRange); 5] {
        [
            ("impressions", self.impressions),
            ("clicks", self.clicks),
            ("conversions", self.conversions),
            ("cost", self.cost),
            ("revenue", self.revenue),
        ]
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => f.write_str("table"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl AppConfig {
    /// Load from `campaign-analyzer.toml` (if present) and the environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load with an explicit config file, which must then exist.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading config file");
                config::File::from(path).required(true)
            }
            None => {
                debug!(name = DEFAULT_CONFIG_FILE, "Looking for optional config file");
                config::File::with_name(DEFAULT_CONFIG_FILE).required(false)
            }
        };

        let builder = Self::builder()?.add_source(file).add_source(
            config::Environment::with_prefix("CAMPAIGN_ANALYZER")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("generator.channels"),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        Self::builder()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    // Range bounds are seeded individually so a source may override just one
    // of `min`/`max`.
    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError>
    {
        let mut builder = config::Config::builder();
        for (name, range) in GeneratorConfig::default().ranges() {
            builder = builder
                .set_default(format!("generator.{name}.min"), range.min)?
                .set_default(format!("generator.{name}.max"), range.max)?;
        }
        Ok(builder)
    }
}
