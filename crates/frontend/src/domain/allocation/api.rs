use contracts::domain::allocation::{
    AllocationBatchUpdate, AllocationListQuery, AllocationPayload, AllocationRule,
};
use contracts::shared::Msg;

use crate::shared::http;

pub async fn fetch_allocations(query: &AllocationListQuery) -> Result<Vec<AllocationRule>, String> {
    http::get_query("/allocations/", query).await
}

pub async fn create_allocation(payload: &AllocationPayload) -> Result<AllocationRule, String> {
    http::post("/allocations/", payload).await
}

pub async fn update_allocation(
    id: i64,
    payload: &AllocationPayload,
) -> Result<AllocationRule, String> {
    http::put(&format!("/allocations/{}", id), payload).await
}

pub async fn delete_allocation(id: i64) -> Result<Msg, String> {
    http::delete(&format!("/allocations/{}", id)).await
}

pub async fn batch_update_allocations(payload: &AllocationBatchUpdate) -> Result<Msg, String> {
    http::put("/allocations/batch/update", payload).await
}