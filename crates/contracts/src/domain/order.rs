use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// An order always belongs to a customer; recording one marks the
/// customer as dealt on the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub product_id: i64,
    pub order_no: String,
    pub amount: f64,
    pub order_image_url: Option<String>,
    pub transaction_type: Option<String>,
    #[serde(default)]
    pub is_cash_back: i32,
    #[serde(default)]
    pub cash_back_amount: f64,
    pub delivery_remark: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_trade_in: i32,
    pub trade_in_no: Option<String>,
    pub maker_id: Option<i64>,
    pub create_time: NaiveDateTime,
    pub product_name: Option<String>,
    pub maker_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderPayload {
    pub customer_id: i64,
    pub product_id: i64,
    pub order_no: String,
    pub amount: f64,
    pub order_image_url: Option<String>,
    pub transaction_type: Option<String>,
    pub is_cash_back: i32,
    pub cash_back_amount: f64,
    pub delivery_remark: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub is_trade_in: i32,
    pub trade_in_no: Option<String>,
    pub maker_id: Option<i64>,
}

/// Orders are listed per customer; `customer_id` is mandatory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderListQuery {
    pub customer_id: i64,
}
