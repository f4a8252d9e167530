use crate::error::{CampaignError, CampaignResult};
use serde::{Deserialize, Serialize};

/// Raw per-channel counters for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRow {
    pub channel: String,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    /// Spend, in whole currency units.
    pub cost: u64,
    /// Attributed revenue, in whole currency units.
    pub revenue: u64,
}

impl CampaignRow {
    pub fn metrics(&self) -> CampaignResult<ChannelMetrics> {
        ChannelMetrics::compute(self)
    }
}

/// Ratios derived from a [`CampaignRow`], all expressed as percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelMetrics {
    pub ctr: f64,
    pub conversion_rate: f64,
    pub roi: f64,
}

impl ChannelMetrics {
    /// Fails instead of yielding `inf`/`NaN` when `impressions`, `clicks`
    /// or `cost` is zero.
    pub fn compute(row: &CampaignRow) -> CampaignResult<Self> {
        let ctr = percentage(row.clicks as f64, row.impressions, "ctr", row)?;
        let conversion_rate =
            percentage(row.conversions as f64, row.clicks, "conversion_rate", row)?;
        let roi = percentage(
            row.revenue as f64 - row.cost as f64,
            row.cost,
            "roi",
            row,
        )?;

        Ok(Self {
            ctr,
            conversion_rate,
            roi,
        })
    }
}

fn percentage(
    numerator: f64,
    denominator: u64,
    metric: &'static str,
    row: &CampaignRow,
) -> CampaignResult<f64> {
    if denominator == 0 {
        return Err(CampaignError::ZeroDenominator {
            metric,
            channel: row.channel.clone(),
        });
    }
    Ok(numerator / denominator as f64 * 100.0)
}

/// A campaign row with its derived columns attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedCampaign {
    #[serde(flatten)]
    pub row: CampaignRow,
    #[serde(flatten)]
    pub metrics: ChannelMetrics,
}

impl AnalyzedCampaign {
    pub fn channel(&self) -> &str {
        &self.row.channel
    }

    pub fn roi(&self) -> f64 {
        self.metrics.roi
    }
}

/// Highest and lowest ROI channels of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelExtremes {
    pub best: String,
    pub worst: String,
}
