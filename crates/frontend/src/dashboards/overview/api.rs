use contracts::reports::{EfficiencyRow, ReportSummary, SourceStat};

use crate::shared::http;

pub async fn fetch_summary() -> Result<ReportSummary, String> {
    http::get("/report/summary").await
}

pub async fn fetch_source_stats() -> Result<Vec<SourceStat>, String> {
    http::get("/report/source_stats").await
}

/// Lifecycle timestamps for the 50 most recent leads.
pub async fn fetch_efficiency() -> Result<Vec<EfficiencyRow>, String> {
    http::get("/report/efficiency").await
}
