//! Analysis runs — generate, analyze and select extremes in one step.

use crate::generator::CampaignDataSource;
use crate::metrics::{analyze, best_and_worst};
use campaign_core::{AnalyzedCampaign, CampaignResult, ChannelExtremes};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Output of a single analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignReport {
    /// 1-based index of the run within this analyzer.
    pub run: u64,
    pub rows: Vec<AnalyzedCampaign>,
    pub extremes: Option<ChannelExtremes>,
    pub generated_at: DateTime<Utc>,
}

pub struct CampaignAnalyzer<R> {
    source: CampaignDataSource<R>,
    runs: u64,
}

impl<R: Rng> CampaignAnalyzer<R> {
    pub fn new(source: CampaignDataSource<R>) -> Self {
        Self { source, runs: 0 }
    }

    pub fn runs_completed(&self) -> u64 {
        self.runs
    }

    pub fn run(&mut self) -> CampaignResult<CampaignReport> {
        let raw = self.source.generate_rows();
        let rows = analyze(&raw)?;
        let extremes = best_and_worst(&rows);
        self.runs += 1;

        ::metrics::counter!("campaign_analysis_runs_total").increment(1);

        if let Some(ext) = &extremes {
            info!(
                run = self.runs,
                channels = rows.len(),
                best = %ext.best,
                worst = %ext.worst,
                "Campaign analysis complete"
            );
        }

        Ok(CampaignReport {
            run: self.runs,
            rows,
            extremes,
            generated_at: Utc::now(),
        })
    }

    pub fn run_many(&mut self, n: usize) -> CampaignResult<Vec<CampaignReport>> {
        (0..n).map(|_| self.run()).collect()
    }
}
