use serde::{Deserialize, Serialize};

/// `POST /ai/generate` — backend-proxied talk-track generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub result: String,
}
