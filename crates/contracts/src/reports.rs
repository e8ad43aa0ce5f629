use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Dashboard headline figures (`GET /report/summary`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_customer: i64,
    pub total_deal: i64,
    pub today_new: i64,
    pub conversion_rate: f64,
}

/// Per-source lead conversion (`GET /report/source_stats`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceStat {
    pub name: String,
    pub total: i64,
    pub deal_count: i64,
    pub rate: f64,
}

/// One customer's lifecycle timestamps (`GET /report/efficiency`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EfficiencyRow {
    pub customer_name: String,
    pub owner_name: String,
    pub time_enter: NaiveDateTime,
    pub time_assign: NaiveDateTime,
    pub time_first_follow: Option<NaiveDateTime>,
    pub time_deal: Option<NaiveDateTime>,
    pub response_hours: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_deserializes_backend_shape() {
        let json = r#"{
            "total_customer": 120,
            "total_deal": 18,
            "today_new": 4,
            "conversion_rate": 15.0
        }"#;
        let s: ReportSummary = serde_json::from_str(json).unwrap();
        assert_eq!(s.today_new, 4);
        assert!((s.conversion_rate - 15.0).abs() < f64::EPSILON);
    }
}
