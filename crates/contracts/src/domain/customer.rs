use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A customer lead card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub customer_name: String,
    pub phone: String,
    pub source: Option<String>,
    pub address: Option<String>,
    pub dept_id: Option<i64>,
    pub owner_id: Option<i64>,
    pub wechat: Option<String>,
    pub age: Option<i32>,
    pub decision_maker: Option<String>,
    pub community: Option<String>,
    pub house_area: Option<String>,
    pub decoration_progress: Option<String>,
    pub intent_product_id: Option<i64>,
    pub competitor: Option<String>,
    pub visit_date: Option<NaiveDateTime>,
    pub platform_id: Option<String>,
    /// 1 once an order has been recorded
    pub is_deal: i32,
    pub follow_status: Option<String>,
    pub deal_time: Option<NaiveDateTime>,
    pub create_time: NaiveDateTime,
    #[serde(default)]
    pub follow_count: i32,
    pub last_follow_time: Option<NaiveDateTime>,
    pub dept_name: Option<String>,
    pub owner_name: Option<String>,
    pub intent_product_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerPayload {
    pub customer_name: String,
    pub phone: String,
    pub source: Option<String>,
    pub address: Option<String>,
    pub dept_id: Option<i64>,
    pub owner_id: Option<i64>,
    pub wechat: Option<String>,
    pub age: Option<i32>,
    pub decision_maker: Option<String>,
    pub community: Option<String>,
    pub house_area: Option<String>,
    pub decoration_progress: Option<String>,
    pub intent_product_id: Option<i64>,
    pub competitor: Option<String>,
    pub visit_date: Option<NaiveDateTime>,
    pub platform_id: Option<String>,
}

/// Partial update; absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wechat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_maker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoration_progress: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent_product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deal: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerTransfer {
    pub customer_ids: Vec<i64>,
    pub new_owner_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_dept_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowRecord {
    pub id: i64,
    pub customer_id: i64,
    pub follow_detail: String,
    pub follow_tag: Option<String>,
    pub next_follow_time: Option<NaiveDate>,
    pub create_time: NaiveDateTime,
    pub follower_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowPayload {
    pub customer_id: i64,
    pub follow_detail: String,
    pub follow_tag: Option<String>,
    pub next_follow_time: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationLog {
    pub id: i64,
    pub operator_name: String,
    pub action_type: String,
    pub content: String,
    pub create_time: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_deserializes_backend_shape() {
        let json = r#"{
            "id": 42,
            "customer_name": "Li Wei",
            "phone": "13912345678",
            "source": "douyin",
            "address": "Hangzhou, Xihu district",
            "dept_id": 1,
            "owner_id": 7,
            "wechat": null,
            "age": 34,
            "decision_maker": "self",
            "community": "Riverside Garden",
            "house_area": "120",
            "decoration_progress": "hard finish",
            "intent_product_id": 5,
            "competitor": null,
            "visit_date": "2026-08-20T10:00:00",
            "platform_id": "dy-991",
            "is_deal": 0,
            "follow_status": "following",
            "deal_time": null,
            "create_time": "2026-08-18T08:15:30",
            "follow_count": 2,
            "last_follow_time": "2026-08-21T17:45:00",
            "dept_name": "Downtown store",
            "owner_name": "manager01",
            "intent_product_name": "Sofa set A"
        }"#;
        let c: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, 42);
        assert_eq!(c.follow_count, 2);
        assert_eq!(c.visit_date.unwrap().to_string(), "2026-08-20 10:00:00");
    }

    #[test]
    fn partial_update_serializes_only_set_fields() {
        let update = CustomerUpdate {
            follow_status: Some("deal closed".into()),
            is_deal: Some(1),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["is_deal"], 1);
    }

    #[test]
    fn transfer_without_dept_omits_the_field() {
        let transfer = CustomerTransfer {
            customer_ids: vec![1, 2, 3],
            new_owner_id: 9,
            new_dept_id: None,
        };
        let json = serde_json::to_value(&transfer).unwrap();
        assert!(json.get("new_dept_id").is_none());
        assert_eq!(json["customer_ids"], serde_json::json!([1, 2, 3]));
    }
}
