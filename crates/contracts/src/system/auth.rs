use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Issued by `POST /auth/login`. The permission ids refer to nodes of
/// [`crate::system::permissions::PERMISSION_TREE`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub username: String,
    pub role_name: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_without_permissions_defaults_to_empty() {
        let json = r#"{
            "access_token": "abc.def.ghi",
            "token_type": "bearer",
            "username": "admin",
            "role_name": null
        }"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token, "abc.def.ghi");
        assert!(resp.role_name.is_none());
        assert!(resp.permissions.is_empty());
    }
}
