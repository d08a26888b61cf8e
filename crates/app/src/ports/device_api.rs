//! Bridge API port: the HTTP surface the console consumes.

use std::future::Future;

use salute_console_domain::device::DeviceRecord;
use salute_console_domain::endpoint::Endpoint;
use salute_console_domain::error::ApiError;

/// Client for the bridge's local HTTP API.
pub trait DeviceApi {
    /// `GET /api/v2/devices`, decoded into typed records.
    ///
    /// Anything but HTTP 200 is reported as [`ApiError::Status`].
    fn fetch_devices(&self) -> impl Future<Output = Result<Vec<DeviceRecord>, ApiError>> + Send;

    /// `POST` a JSON `payload` to `endpoint`.
    ///
    /// The response body is ignored; only the status code is inspected.
    fn send(
        &self,
        payload: serde_json::Value,
        endpoint: Endpoint,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}

impl<T: DeviceApi + Send + Sync> DeviceApi for std::sync::Arc<T> {
    fn fetch_devices(&self) -> impl Future<Output = Result<Vec<DeviceRecord>, ApiError>> + Send {
        (**self).fetch_devices()
    }

    fn send(
        &self,
        payload: serde_json::Value,
        endpoint: Endpoint,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        (**self).send(payload, endpoint)
    }
}
