pub mod config;
pub mod error;
pub mod types;

pub use crate::config::{AppConfig, GeneratorConfig, OutputConfig, OutputFormat, ValueRange};
pub use crate::error::{CampaignError, CampaignResult};
pub use crate::types::{AnalyzedCampaign, CampaignRow, ChannelExtremes, ChannelMetrics};
