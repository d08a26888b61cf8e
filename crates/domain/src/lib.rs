//! # salute-console-domain
//!
//! Pure domain model for the salute bridge administrative console.
//!
//! ## Responsibilities
//! - Define **Device records** as reported by the bridge (`GET /api/v2/devices`)
//! - Define **Features** (optional device capabilities such as brightness)
//! - Define **Commands** (stateless administrative actions such as `DB_delete`)
//! - Define the **request payloads** the console posts back to the bridge
//! - Define the **device table model**: header labels and per-row cells,
//!   independent of whether it ends up in a browser or a terminal
//! - Contain all invariant enforcement (record validation at the API boundary)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod command;
pub mod device;
pub mod endpoint;
pub mod feature;
pub mod request;
pub mod table;
