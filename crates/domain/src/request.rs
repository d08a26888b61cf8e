//! Request payloads posted to the bridge.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::endpoint::Endpoint;
use crate::feature::Feature;

/// A JSON body together with the endpoint it is meant for.
pub trait Payload: Serialize {
    /// Endpoint this payload is posted to.
    const ENDPOINT: Endpoint;
}

/// `POST /api/v2/command`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    pub command: Command,
}

impl CommandRequest {
    #[must_use]
    pub fn new(command: Command) -> Self {
        Self { command }
    }
}

impl Payload for CommandRequest {
    const ENDPOINT: Endpoint = Endpoint::Command;
}

/// Partial device record carried by a [`DeviceUpdateRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevicePatch {
    pub enabled: bool,
}

/// `POST /api/v2/devices`
///
/// Each map in `devices` is keyed by the device's position in the table the
/// operator was looking at, not by `entity_id`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeviceUpdateRequest {
    pub devices: Vec<BTreeMap<String, DevicePatch>>,
}

impl DeviceUpdateRequest {
    /// Update the enablement of the device shown at `row`.
    #[must_use]
    pub fn for_row(row: usize, enabled: bool) -> Self {
        let mut patch = BTreeMap::new();
        patch.insert(row.to_string(), DevicePatch { enabled });
        Self {
            devices: vec![patch],
        }
    }
}

impl Payload for DeviceUpdateRequest {
    const ENDPOINT: Endpoint = Endpoint::Devices;
}

/// `POST /api/v2/device/features`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureUpdateRequest {
    pub entity_id: String,
    pub feature: Feature,
    pub state: bool,
}

impl FeatureUpdateRequest {
    #[must_use]
    pub fn new(entity_id: impl Into<String>, feature: Feature, state: bool) -> Self {
        Self {
            entity_id: entity_id.into(),
            feature,
            state,
        }
    }
}

impl Payload for FeatureUpdateRequest {
    const ENDPOINT: Endpoint = Endpoint::DeviceFeatures;
}
