//! Campaign performance reporting: synthetic channel data, derived ratio
//! metrics and per-run best/worst channel selection.

pub mod analyzer;
pub mod generator;
pub mod metrics;

pub use crate::analyzer::{CampaignAnalyzer, CampaignReport};
pub use crate::generator::CampaignDataSource;
pub use crate::metrics::{analyze, best_and_worst};
