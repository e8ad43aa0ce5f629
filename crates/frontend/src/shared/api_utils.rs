//! API URL construction.
//!
//! Every request goes same-origin to `/api`, which the reverse proxy in
//! front of the console forwards to the backend.

/// Build a full API URL from a resource path.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// assert_eq!(api_url("/customers/"), "/api/customers/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("/api{}", path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_the_proxy_mount() {
        assert_eq!(api_url("/customers/"), "/api/customers/");
        assert_eq!(api_url("/depts/3/status"), "/api/depts/3/status");
        assert_eq!(api_url("/report/summary"), "/api/report/summary");
    }
}
