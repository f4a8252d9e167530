//! Terminal and JSON rendering of analysis reports.

use campaign_core::{ChannelExtremes, OutputConfig};
use campaign_reporting::CampaignReport;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

pub const TITLE: &str = "📊 Marketing Campaign Performance Analyzer";

pub fn format_currency(symbol: &str, amount: u64) -> String {
    format!("{symbol}{amount}")
}

pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

pub fn headers(currency_symbol: &str) -> Vec<String> {
    vec![
        "Channel".to_string(),
        "Impressions".to_string(),
        "Clicks".to_string(),
        "Conversions".to_string(),
        format!("Cost ({currency_symbol})"),
        format!("Revenue ({currency_symbol})"),
        "CTR (%)".to_string(),
        "Conversion Rate (%)".to_string(),
        "ROI (%)".to_string(),
    ]
}

/// One display row per channel, in report order.
pub fn table_rows(report: &CampaignReport, output: &OutputConfig) -> Vec<Vec<String>> {
    report
        .rows
        .iter()
        .map(|r| {
            vec![
                r.row.channel.clone(),
                r.row.impressions.to_string(),
                r.row.clicks.to_string(),
                r.row.conversions.to_string(),
                format_currency(&output.currency_symbol, r.row.cost),
                format_currency(&output.currency_symbol, r.row.revenue),
                format_percent(r.metrics.ctr, output.decimals),
                format_percent(r.metrics.conversion_rate, output.decimals),
                format_percent(r.metrics.roi, output.decimals),
            ]
        })
        .collect()
}

pub fn render_table(report: &CampaignReport, output: &OutputConfig) -> Table {
    let centered = |text: String| Cell::new(text).set_alignment(CellAlignment::Center);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers(&output.currency_symbol).into_iter().map(centered));

    for row in table_rows(report, output) {
        table.add_row(row.into_iter().map(centered));
    }
    table
}

pub fn render_summary(extremes: Option<&ChannelExtremes>) -> String {
    match extremes {
        Some(ext) => format!(
            "✅ Best Channel: {}   |   ❌ Worst Channel: {}",
            ext.best, ext.worst
        ),
        None => "No channels analyzed".to_string(),
    }
}

pub fn render_json(reports: &[CampaignReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}
