//! `reqwest`-backed implementation of the bridge API port.

use std::future::Future;

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use url::Url;

use salute_console_app::ports::DeviceApi;
use salute_console_domain::device::DeviceRecord;
use salute_console_domain::endpoint::Endpoint;
use salute_console_domain::error::ApiError;

use crate::config::HttpConfig;
use crate::error::HttpError;

const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Bridge API client.
#[derive(Debug, Clone)]
pub struct HttpDeviceApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpDeviceApi {
    /// Build a client for the bridge described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the base URL is invalid or the underlying
    /// client cannot be constructed.
    pub fn new(config: &HttpConfig) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(HttpError::Client)?;
        Ok(Self {
            client,
            base_url: normalize_base_url(&config.base_url)?,
        })
    }

    /// Base URL every endpoint is resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of `endpoint`, keeping any path prefix of the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] if the joined URL is invalid.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, url::ParseError> {
        self.base_url.join(endpoint.path().trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: &str) -> Result<Url, HttpError> {
    let mut url = Url::parse(raw)?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(HttpError::UnsupportedBaseUrl);
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn status_error(status: StatusCode) -> ApiError {
    ApiError::Status {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
    }
}

impl DeviceApi for HttpDeviceApi {
    fn fetch_devices(&self) -> impl Future<Output = Result<Vec<DeviceRecord>, ApiError>> + Send {
        async move {
            let url = self
                .endpoint_url(Endpoint::Devices)
                .map_err(ApiError::transport)?;
            tracing::debug!(%url, "fetching device list");

            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(ApiError::transport)?;
            let status = response.status();
            if status != StatusCode::OK {
                return Err(status_error(status));
            }

            let body = response.bytes().await.map_err(ApiError::transport)?;
            tracing::debug!(bytes = body.len(), "device list received");
            let devices = serde_json::from_slice(&body)?;
            Ok(devices)
        }
    }

    fn send(
        &self,
        payload: serde_json::Value,
        endpoint: Endpoint,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        async move {
            let url = self.endpoint_url(endpoint).map_err(ApiError::transport)?;
            let body = serde_json::to_vec(&payload).map_err(ApiError::Encode)?;
            tracing::debug!(%url, bytes = body.len(), "posting payload");

            let response = self
                .client
                .post(url)
                .header(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))
                .body(body)
                .send()
                .await
                .map_err(ApiError::transport)?;
            let status = response.status();
            tracing::debug!(status = status.as_u16(), "bridge answered");
            if !status.is_success() {
                return Err(status_error(status));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::Router;
    use axum::extract::State;
    use axum::http::{HeaderMap, Uri};
    use axum::routing::{get, post};

    #[derive(Debug, Clone)]
    struct Recorded {
        path: String,
        content_type: String,
        body: serde_json::Value,
    }

    #[derive(Clone, Default)]
    struct StubBridge {
        posts: Arc<Mutex<Vec<Recorded>>>,
    }

    impl StubBridge {
        fn posts(&self) -> Vec<Recorded> {
            self.posts.lock().unwrap().clone()
        }

        fn router(&self) -> Router {
            Router::new()
                .route("/api/v2/devices", get(list_devices).post(record))
                .route("/api/v2/command", post(record))
                .route("/api/v2/device/features", post(record))
                .with_state(self.clone())
        }
    }

    async fn list_devices() -> &'static str {
        r#"[{"entity_id":"lamp1","category":"light","enabled":false,"name":"Lamp",
             "state":"off","model":"light","attributes":null,"features":null}]"#
    }

    async fn record(
        State(bridge): State<StubBridge>,
        uri: Uri,
        headers: HeaderMap,
        body: String,
    ) -> &'static str {
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        bridge.posts.lock().unwrap().push(Recorded {
            path: uri.path().to_string(),
            content_type,
            body: serde_json::from_str(&body).unwrap(),
        });
        "null"
    }

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        format!("http://{addr}")
    }

    fn client(base_url: &str) -> HttpDeviceApi {
        HttpDeviceApi::new(&HttpConfig {
            base_url: base_url.to_string(),
            ..HttpConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn should_append_trailing_slash_to_base_path() {
        let api = client("http://bridge.local:8080/ingress/abc");
        assert_eq!(api.base_url().as_str(), "http://bridge.local:8080/ingress/abc/");
        assert_eq!(
            api.endpoint_url(Endpoint::DeviceFeatures).unwrap().as_str(),
            "http://bridge.local:8080/ingress/abc/api/v2/device/features"
        );
    }

    #[test]
    fn should_resolve_endpoints_at_root() {
        let api = client("http://127.0.0.1:8080");
        assert_eq!(
            api.endpoint_url(Endpoint::Devices).unwrap().as_str(),
            "http://127.0.0.1:8080/api/v2/devices"
        );
    }

    #[test]
    fn should_reject_non_http_base_url() {
        let result = HttpDeviceApi::new(&HttpConfig {
            base_url: "mailto:ops@example.com".to_string(),
            ..HttpConfig::default()
        });
        assert!(matches!(result, Err(HttpError::UnsupportedBaseUrl)));
    }

    #[tokio::test]
    async fn should_decode_device_list() {
        let bridge = StubBridge::default();
        let api = client(&serve(bridge.router()).await);

        let devices = api.fetch_devices().await.unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].display_id(), "light.lamp1");
    }

    #[tokio::test]
    async fn should_report_status_when_device_list_is_missing() {
        let api = client(&serve(Router::new()).await);

        let result = api.fetch_devices().await;
        assert!(matches!(
            result,
            Err(ApiError::Status { status: 404, ref reason }) if reason == "Not Found"
        ));
    }

    #[tokio::test]
    async fn should_report_decode_error_for_malformed_body() {
        let router = Router::new().route("/api/v2/devices", get(|| async { "not json" }));
        let api = client(&serve(router).await);

        let result = api.fetch_devices().await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn should_report_transport_error_when_bridge_is_down() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let api = client(&format!("http://{addr}"));

        let result = api.fetch_devices().await;
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }

    #[tokio::test]
    async fn should_post_json_with_utf8_content_type() {
        let bridge = StubBridge::default();
        let api = client(&serve(bridge.router()).await);

        api.send(
            serde_json::json!({"devices": [{"0": {"enabled": true}}]}),
            Endpoint::Devices,
        )
        .await
        .unwrap();

        let posts = bridge.posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].path, "/api/v2/devices");
        assert_eq!(posts[0].content_type, "application/json; charset=utf-8");
        assert_eq!(
            posts[0].body,
            serde_json::json!({"devices": [{"0": {"enabled": true}}]})
        );
    }

    #[tokio::test]
    async fn should_post_to_prefixed_endpoint() {
        let bridge = StubBridge::default();
        let base = serve(Router::new().nest("/ui", bridge.router())).await;
        let api = client(&format!("{base}/ui"));

        api.send(serde_json::json!({"command": "exit"}), Endpoint::Command)
            .await
            .unwrap();

        let posts = bridge.posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].body, serde_json::json!({"command": "exit"}));
    }

    #[tokio::test]
    async fn should_report_rejected_post() {
        let api = client(&serve(Router::new()).await);

        let result = api
            .send(serde_json::json!({"command": "exit"}), Endpoint::Command)
            .await;
        assert!(matches!(result, Err(ApiError::Status { status: 404, .. })));
    }
}
