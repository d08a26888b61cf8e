//! # salute-console-adapter-http-reqwest
//!
//! Implements the [`DeviceApi`](salute_console_app::ports::DeviceApi) port over
//! HTTP with `reqwest`.
//!
//! ## Responsibilities
//! - Resolve the bridge endpoints against a configurable base URL
//! - `GET /api/v2/devices` and decode the body into typed device records
//! - `POST` JSON payloads with `Content-Type: application/json; charset=utf-8`
//! - Translate transport failures and non-success statuses into
//!   [`ApiError`](salute_console_domain::error::ApiError)
//!
//! No retries, no timeouts, no request de-duplication.

pub mod client;
pub mod config;
pub mod error;

pub use client::HttpDeviceApi;
pub use config::HttpConfig;
pub use error::HttpError;
