//! HTTP API client wrapping `gloo-net` for calls to `/api/v2/*`.
//!
//! Failures use the domain error types; [`describe`] is the only place they
//! are turned into operator-facing text.

use gloo_net::http::{Request, Response};
use salute_console_domain::device::{DeviceRecord, validate_snapshot};
use salute_console_domain::endpoint::Endpoint;
use salute_console_domain::error::{ApiError, ConsoleError};
use salute_console_domain::request::Payload;

const JSON_UTF8: &str = "application/json; charset=utf-8";

/// A serialized request body bound for one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outgoing {
    pub endpoint: Endpoint,
    pub body: String,
}

impl Outgoing {
    /// Serialize `payload` for its own endpoint.
    pub fn of<P: Payload>(payload: &P) -> Result<Self, ApiError> {
        Ok(Self {
            endpoint: P::ENDPOINT,
            body: serde_json::to_string(payload).map_err(ApiError::Encode)?,
        })
    }
}

/// Operator-facing diagnostic, e.g. `Ошибка 404: Not Found`.
pub fn describe(err: &ConsoleError) -> String {
    match err {
        ConsoleError::Api(ApiError::Status { status, reason }) => {
            format!("Ошибка {status}: {reason}")
        }
        ConsoleError::Api(ApiError::Transport(source)) => format!("Запрос не удался: {source}"),
        ConsoleError::Api(ApiError::Decode(source)) => format!("Некорректный ответ: {source}"),
        ConsoleError::Api(ApiError::Encode(source)) => {
            format!("Не удалось сформировать запрос: {source}")
        }
        ConsoleError::Validation(source) => format!("Некорректные данные устройства: {source}"),
        ConsoleError::View(source) => format!("Не удалось показать таблицу: {source}"),
    }
}

fn status_error(resp: &Response) -> ApiError {
    ApiError::Status {
        status: resp.status(),
        reason: resp.status_text(),
    }
}

/// Send a request, logging transport failures.
async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|err| {
        leptos::logging::error!("запрос не удался: {err}");
        ApiError::transport(err)
    })
}

/// Fetch the device list.
///
/// Only HTTP 200 is accepted. The body is decoded into typed records and
/// validated before anything is rendered.
pub async fn fetch_devices() -> Result<Vec<DeviceRecord>, ConsoleError> {
    let request = Request::get(Endpoint::Devices.path())
        .build()
        .map_err(ApiError::transport)?;
    let resp = send_request(request).await?;
    if resp.status() != 200 {
        let err = ConsoleError::from(status_error(&resp));
        leptos::logging::warn!("{}", describe(&err));
        return Err(err);
    }
    let body = resp.binary().await.map_err(ApiError::transport)?;
    let devices: Vec<DeviceRecord> = serde_json::from_slice(&body).map_err(ApiError::Decode)?;
    validate_snapshot(&devices)?;
    leptos::logging::log!("получено устройств: {}", devices.len());
    Ok(devices)
}

/// Post `request` to its endpoint. The response body is ignored.
pub async fn post(request: Outgoing) -> Result<(), ApiError> {
    let Outgoing { endpoint, body } = request;
    let request = Request::post(endpoint.path())
        .header("Content-Type", JSON_UTF8)
        .body(body)
        .map_err(ApiError::transport)?;
    let resp = send_request(request).await?;
    leptos::logging::log!("{endpoint} -> {}", resp.status());
    if !resp.ok() {
        return Err(status_error(&resp));
    }
    Ok(())
}
