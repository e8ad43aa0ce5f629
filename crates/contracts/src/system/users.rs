use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub phone: Option<String>,
    pub role_id: Option<i64>,
    pub dept_id: Option<i64>,
    pub post: Option<String>,
    pub status: i32,
    pub create_time: NaiveDateTime,
    // Joined display names, filled in by the backend
    pub dept_name: Option<String>,
    pub role_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
    pub phone: Option<String>,
    pub role_id: Option<i64>,
    pub dept_id: Option<i64>,
    pub post: Option<String>,
    pub status: i32,
}

/// `password: Some(_)` changes the password, `None` leaves it untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub phone: Option<String>,
    pub role_id: Option<i64>,
    pub dept_id: Option<i64>,
    pub post: Option<String>,
    pub status: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordReset {
    pub new_password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_backend_shape() {
        let json = r#"{
            "id": 3,
            "username": "manager01",
            "phone": "13800000000",
            "role_id": 2,
            "dept_id": 1,
            "post": "store manager",
            "status": 1,
            "create_time": "2026-08-01T09:30:00",
            "dept_name": "Downtown store",
            "role_name": "Manager"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.dept_name.as_deref(), Some("Downtown store"));
    }

    #[test]
    fn update_without_password_omits_the_field() {
        let update = UserUpdate {
            username: "manager01".into(),
            password: None,
            phone: None,
            role_id: Some(2),
            dept_id: None,
            post: None,
            status: 1,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("password").is_none());
        // Other optionals stay explicit nulls: the backend replaces them.
        assert!(json.get("phone").unwrap().is_null());
    }
}
