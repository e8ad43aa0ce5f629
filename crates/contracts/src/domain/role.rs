use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// `permissions` holds ids from the static permission tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub role_code: String,
    pub role_name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub status: i32,
    pub create_time: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolePayload {
    pub role_name: String,
    pub permissions: Vec<String>,
    pub status: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
