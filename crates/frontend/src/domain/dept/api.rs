use contracts::domain::dept::{Dept, DeptListQuery, DeptPayload};
use contracts::shared::{Msg, StatusQuery};

use crate::shared::http;

pub async fn fetch_depts(query: &DeptListQuery) -> Result<Vec<Dept>, String> {
    http::get_query("/depts/", query).await
}

pub async fn create_dept(payload: &DeptPayload) -> Result<Dept, String> {
    http::post("/depts/", payload).await
}

pub async fn update_dept(id: i64, payload: &DeptPayload) -> Result<Dept, String> {
    http::put(&format!("/depts/{}", id), payload).await
}

pub async fn delete_dept(id: i64) -> Result<Msg, String> {
    http::delete(&format!("/depts/{}", id)).await
}

pub async fn update_dept_status(id: i64, status: i32) -> Result<Msg, String> {
    http::put_query(&format!("/depts/{}/status", id), &StatusQuery { status }).await
}