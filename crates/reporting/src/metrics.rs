//! Derived campaign ratios and best/worst channel selection.

use campaign_core::{AnalyzedCampaign, CampaignResult, CampaignRow, ChannelExtremes};

/// Attaches CTR, conversion rate and ROI to every row, preserving order.
pub fn analyze(rows: &[CampaignRow]) -> CampaignResult<Vec<AnalyzedCampaign>> {
    rows.iter()
        .map(|row| {
            Ok(AnalyzedCampaign {
                metrics: row.metrics()?,
                row: row.clone(),
            })
        })
        .collect()
}

/// Channels with the highest and lowest ROI. The first of several equal
/// values wins, for each direction independently.
pub fn best_and_worst(rows: &[AnalyzedCampaign]) -> Option<ChannelExtremes> {
    let (first, rest) = rows.split_first()?;
    let mut best = first;
    let mut worst = first;

    for row in rest {
        if row.roi() > best.roi() {
            best = row;
        }
        if row.roi() < worst.roi() {
            worst = row;
        }
    }

    Some(ChannelExtremes {
        best: best.channel().to_string(),
        worst: worst.channel().to_string(),
    })
}
