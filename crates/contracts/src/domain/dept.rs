use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A store ("dept" in the API) of the chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dept {
    pub id: i64,
    pub dept_code: String,
    pub dept_name: String,
    pub leader_id: Option<i64>,
    pub status: i32,
    pub create_time: NaiveDateTime,
    pub leader_name: Option<String>,
}

/// Body of create and update; `dept_code` is assigned server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeptPayload {
    pub dept_name: String,
    pub leader_id: Option<i64>,
    pub status: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeptListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
