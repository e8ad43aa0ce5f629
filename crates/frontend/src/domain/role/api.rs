use contracts::domain::role::{Role, RoleListQuery, RolePayload};
use contracts::shared::{Msg, StatusQuery};

use crate::shared::http;

pub async fn fetch_roles(query: &RoleListQuery) -> Result<Vec<Role>, String> {
    http::get_query("/roles/", query).await
}

pub async fn create_role(payload: &RolePayload) -> Result<Role, String> {
    http::post("/roles/", payload).await
}

pub async fn update_role(id: i64, payload: &RolePayload) -> Result<Role, String> {
    http::put(&format!("/roles/{}", id), payload).await
}

pub async fn delete_role(id: i64) -> Result<Msg, String> {
    http::delete(&format!("/roles/{}", id)).await
}

pub async fn update_role_status(id: i64, status: i32) -> Result<Msg, String> {
    http::put_query(&format!("/roles/{}/status", id), &StatusQuery { status }).await
}
