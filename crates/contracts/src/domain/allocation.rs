use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Region-based lead allocation rule. Province/city columns exist per
/// acquisition platform; matching itself runs server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationRule {
    pub id: i64,
    pub tiantao_province: Option<String>,
    pub tiantao_city: Option<String>,
    pub douyin_province: Option<String>,
    pub douyin_city: Option<String>,
    pub douyin_province_city: Option<String>,
    pub target_dept_id: i64,
    pub target_leader_id: Option<i64>,
    pub create_time: NaiveDateTime,
    pub dept_name: Option<String>,
    pub leader_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationPayload {
    pub tiantao_province: Option<String>,
    pub tiantao_city: Option<String>,
    pub douyin_province: Option<String>,
    pub douyin_city: Option<String>,
    pub douyin_province_city: Option<String>,
    pub target_dept_id: i64,
    pub target_leader_id: Option<i64>,
}

/// Batch re-target of several rules. Unset optionals are omitted from
/// the body so server-side values survive untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationBatchUpdate {
    pub ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_dept_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_leader_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_update_omits_unset_targets() {
        let update = AllocationBatchUpdate {
            ids: vec![4, 8],
            target_dept_id: None,
            target_leader_id: None,
        };
        let json = serde_json::to_value(&update).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert!(obj.contains_key("ids"));
    }

    #[test]
    fn batch_update_keeps_explicitly_set_targets() {
        let update = AllocationBatchUpdate {
            ids: vec![4],
            target_dept_id: Some(2),
            target_leader_id: None,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["target_dept_id"], 2);
        assert!(json.get("target_leader_id").is_none());
    }
}
