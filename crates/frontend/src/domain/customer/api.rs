use contracts::domain::customer::{
    Customer, CustomerListQuery, CustomerPayload, CustomerTransfer, CustomerUpdate, FollowPayload,
    FollowRecord, OperationLog,
};
use contracts::shared::Msg;

use crate::shared::http;

pub async fn fetch_customers(query: &CustomerListQuery) -> Result<Vec<Customer>, String> {
    http::get_query("/customers/", query).await
}

pub async fn create_customer(payload: &CustomerPayload) -> Result<Customer, String> {
    http::post("/customers/", payload).await
}

pub async fn update_customer(id: i64, payload: &CustomerUpdate) -> Result<Customer, String> {
    http::put(&format!("/customers/{}", id), payload).await
}

/// Reassigns a batch of leads to a new owner (and optionally a new
/// store) in one call.
pub async fn transfer_customers(payload: &CustomerTransfer) -> Result<Msg, String> {
    http::post("/customers/transfer", payload).await
}

pub async fn fetch_follows(customer_id: i64) -> Result<Vec<FollowRecord>, String> {
    http::get(&format!("/customers/{}/follows", customer_id)).await
}

pub async fn create_follow(payload: &FollowPayload) -> Result<FollowRecord, String> {
    http::post(
        &format!("/customers/{}/follows", payload.customer_id),
        payload,
    )
    .await
}

pub async fn fetch_logs(customer_id: i64) -> Result<Vec<OperationLog>, String> {
    http::get(&format!("/customers/{}/logs", customer_id)).await
}