use contracts::ai::{GenerateRequest, GenerateResponse};

use crate::shared::http;

/// Talk-track generation proxied through the backend; the model key
/// never reaches the browser.
pub async fn generate(prompt: String) -> Result<GenerateResponse, String> {
    http::post("/ai/generate", &GenerateRequest { prompt }).await
}
