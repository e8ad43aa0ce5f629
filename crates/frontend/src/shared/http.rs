//! Shared HTTP client layer.
//!
//! Every resource wrapper delegates here. The layer injects the bearer
//! token when a session exists, enforces the fixed 10-second deadline,
//! and surfaces failures once through the notification center before
//! propagating them to the caller.

use gloo_net::http::{Method, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::AbortController;

use crate::shared::api_utils::api_url;
use crate::shared::notify;
use crate::system::auth::storage;

/// One deadline for everything; timeouts are not distinguished from
/// other network failures.
const TIMEOUT_MS: u32 = 10_000;

const FALLBACK_MESSAGE: &str = "Request failed";

/// `Authorization` header value for a session token.
fn authorization(token: Option<&str>) -> Option<String> {
    token.map(|token| format!("Bearer {}", token))
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    let token = storage::get_token();
    match authorization(token.as_deref()) {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

/// User-facing message for a non-2xx body: the `detail` string field if
/// the body carries one, the fixed fallback otherwise.
fn error_message(body: Option<&str>) -> String {
    body.and_then(|text| serde_json::from_str::<serde_json::Value>(text).ok())
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
}

/// Append a typed query struct to a path. `None` fields are omitted, not
/// serialized as empty values.
fn query_url<Q: Serialize>(path: &str, query: &Q) -> Result<String, String> {
    let encoded =
        serde_qs::to_string(query).map_err(|e| format!("Failed to encode query: {}", e))?;
    if encoded.is_empty() {
        Ok(api_url(path))
    } else {
        Ok(format!("{}?{}", api_url(path), encoded))
    }
}

fn prepare(method: Method, url: &str) -> (RequestBuilder, Option<AbortController>) {
    let controller = AbortController::new().ok();
    let mut builder = RequestBuilder::new(url).method(method);
    if let Some(controller) = &controller {
        builder = builder.abort_signal(Some(&controller.signal()));
    }
    (with_auth(builder), controller)
}

async fn send<T: DeserializeOwned>(
    request: gloo_net::http::Request,
    controller: Option<AbortController>,
) -> Result<T, String> {
    // The deadline covers the whole exchange, body included; a response
    // whose headers arrive in time but whose body stalls is still
    // aborted. Dropping the handle cancels the pending abort.
    let deadline = controller.map(|c| Timeout::new(TIMEOUT_MS, move || c.abort()));
    let response = match request.send().await {
        Ok(response) => response,
        Err(_) => {
            let msg = FALLBACK_MESSAGE.to_string();
            notify::error(&msg);
            return Err(msg);
        }
    };
    let result = read_json(response).await;
    drop(deadline);
    result
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let body = response.text().await.ok();
        let msg = error_message(body.as_deref());
        notify::error(&msg);
        return Err(msg);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let (builder, controller) = prepare(Method::GET, &api_url(path));
    let request = builder
        .build()
        .map_err(|e| format!("Failed to build request: {}", e))?;
    send(request, controller).await
}

pub async fn get_query<Q: Serialize, T: DeserializeOwned>(
    path: &str,
    query: &Q,
) -> Result<T, String> {
    let url = query_url(path, query)?;
    let (builder, controller) = prepare(Method::GET, &url);
    let request = builder
        .build()
        .map_err(|e| format!("Failed to build request: {}", e))?;
    send(request, controller).await
}

pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let (builder, controller) = prepare(Method::POST, &api_url(path));
    let request = builder
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;
    send(request, controller).await
}

pub async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let (builder, controller) = prepare(Method::PUT, &api_url(path));
    let request = builder
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;
    send(request, controller).await
}

/// `PUT` with an empty body and query-string parameters; the shape of
/// the `/{id}/status` toggles.
pub async fn put_query<Q: Serialize, T: DeserializeOwned>(
    path: &str,
    query: &Q,
) -> Result<T, String> {
    let url = query_url(path, query)?;
    let (builder, controller) = prepare(Method::PUT, &url);
    let request = builder
        .build()
        .map_err(|e| format!("Failed to build request: {}", e))?;
    send(request, controller).await
}

pub async fn delete<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let (builder, controller) = prepare(Method::DELETE, &api_url(path));
    let request = builder
        .build()
        .map_err(|e| format!("Failed to build request: {}", e))?;
    send(request, controller).await
}

/// Multipart upload used by the import endpoints. The field name is
/// fixed to `file` regardless of the picked file's own name.
pub async fn post_file<T: DeserializeOwned>(
    path: &str,
    file: &web_sys::File,
) -> Result<T, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_blob("file", file)
        .map_err(|e| format!("{e:?}"))?;

    let (builder, controller) = prepare(Method::POST, &api_url(path));
    let request = builder
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?;
    send(request, controller).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::customer::CustomerListQuery;
    use contracts::shared::StatusQuery;

    #[test]
    fn bearer_header_only_with_token() {
        assert_eq!(
            authorization(Some("tok123")).as_deref(),
            Some("Bearer tok123")
        );
        assert_eq!(authorization(None), None);
    }

    #[test]
    fn detail_field_wins_over_fallback() {
        assert_eq!(
            error_message(Some(r#"{"detail": "Username already exists"}"#)),
            "Username already exists"
        );
    }

    #[test]
    fn fallback_when_detail_is_missing_or_not_a_string() {
        assert_eq!(error_message(None), FALLBACK_MESSAGE);
        assert_eq!(error_message(Some("<html>bad gateway</html>")), FALLBACK_MESSAGE);
        // FastAPI validation errors put an array under `detail`
        assert_eq!(
            error_message(Some(r#"{"detail": [{"msg": "field required"}]}"#)),
            FALLBACK_MESSAGE
        );
    }

    #[test]
    fn query_url_omits_unset_filters() {
        let query = CustomerListQuery {
            name: Some("li".into()),
            phone: None,
            status: None,
        };
        assert_eq!(
            query_url("/customers/", &query).unwrap(),
            "/api/customers/?name=li"
        );

        let empty = CustomerListQuery::default();
        assert_eq!(query_url("/customers/", &empty).unwrap(), "/api/customers/");
    }

    #[test]
    fn status_toggle_is_a_query_parameter() {
        let url = query_url("/depts/7/status", &StatusQuery { status: 0 }).unwrap();
        assert_eq!(url, "/api/depts/7/status?status=0");
    }
}
