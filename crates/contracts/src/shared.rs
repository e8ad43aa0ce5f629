use serde::{Deserialize, Serialize};

/// Outcome of every `/import` endpoint (multipart Excel upload).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResult {
    pub total: i64,
    pub success: i64,
    pub failed: i64,
    #[serde(default)]
    pub skipped: i64,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Plain acknowledgement body (`{"msg": "..."}`) returned by delete and
/// status-toggle endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Msg {
    pub msg: String,
}

/// Query-string body of the `/{id}/status` toggles. 1 enables, 0
/// disables.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusQuery {
    pub status: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_result_tolerates_missing_skipped() {
        let json = r#"{"total": 10, "success": 8, "failed": 2, "errors": ["row 4: no phone"]}"#;
        let r: ImportResult = serde_json::from_str(json).unwrap();
        assert_eq!(r.skipped, 0);
        assert_eq!(r.errors.len(), 1);
    }
}
