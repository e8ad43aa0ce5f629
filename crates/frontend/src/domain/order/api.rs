use contracts::domain::order::{Order, OrderListQuery, OrderPayload};
use contracts::shared::Msg;

use crate::shared::http;

pub async fn fetch_orders(customer_id: i64) -> Result<Vec<Order>, String> {
    http::get_query("/orders/", &OrderListQuery { customer_id }).await
}

pub async fn create_order(payload: &OrderPayload) -> Result<Order, String> {
    http::post("/orders/", payload).await
}

pub async fn delete_order(id: i64) -> Result<Msg, String> {
    http::delete(&format!("/orders/{}", id)).await
}
