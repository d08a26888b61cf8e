//! Bridge connection configuration.

use serde::Deserialize;

/// Where the bridge's HTTP API lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Base URL of the bridge web UI, e.g. `http://127.0.0.1:8080/`.
    ///
    /// A path prefix (reverse proxy, add-on ingress) is kept; endpoint paths
    /// are appended to it.
    pub base_url: String,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080/".to_string(),
            user_agent: concat!("salute-console/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
