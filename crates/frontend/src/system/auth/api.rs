use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::http;

/// `POST /auth/login`. Wrong credentials and disabled accounts come
/// back as `detail` messages through the shared error path.
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    http::post("/auth/login", &LoginRequest { username, password }).await
}
