use contracts::shared::{Msg, StatusQuery};
use contracts::system::users::{PasswordReset, User, UserCreate, UserListQuery, UserUpdate};

use crate::shared::http;

pub async fn fetch_users(query: &UserListQuery) -> Result<Vec<User>, String> {
    http::get_query("/users/", query).await
}

pub async fn create_user(payload: &UserCreate) -> Result<User, String> {
    http::post("/users/", payload).await
}

pub async fn update_user(id: i64, payload: &UserUpdate) -> Result<User, String> {
    http::put(&format!("/users/{}", id), payload).await
}

pub async fn delete_user(id: i64) -> Result<Msg, String> {
    http::delete(&format!("/users/{}", id)).await
}

pub async fn update_user_status(id: i64, status: i32) -> Result<Msg, String> {
    http::put_query(&format!("/users/{}/status", id), &StatusQuery { status }).await
}

pub async fn reset_password(id: i64, new_password: String) -> Result<Msg, String> {
    http::put(&format!("/users/{}/password", id), &PasswordReset { new_password }).await
}
