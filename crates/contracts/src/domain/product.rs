use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub product_name: String,
    pub product_code: Option<String>,
    pub status: i32,
    pub create_time: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPayload {
    pub product_name: String,
    pub product_code: Option<String>,
    pub status: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
