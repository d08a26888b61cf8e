//! # salute-console-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `DeviceApi`: talk to the bridge's HTTP API
//!   - `TableView`: the container the device table is mounted into
//! - Define the **use-cases** of the console in `ConsoleService`:
//!   load the device table, toggle enablement and features, run commands,
//!   and dispatch any of those as detached tasks
//!
//! ## Dependency rule
//! Depends on `salute-console-domain` only (plus `tokio` for task spawning).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
