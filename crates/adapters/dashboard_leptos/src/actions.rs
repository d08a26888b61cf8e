//! Checkbox toggles in the device table and the request each one posts.

use salute_console_domain::endpoint::Endpoint;
use salute_console_domain::error::ApiError;
use salute_console_domain::feature::Feature;
use salute_console_domain::request::{DeviceUpdateRequest, FeatureUpdateRequest, Payload};
use salute_console_domain::table::DeviceTable;

use crate::api::Outgoing;

/// A checkbox the operator flipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    /// The enablement checkbox of the device at `row`.
    Enabled { row: usize, checked: bool },
    /// A feature checkbox of the device at `row`.
    Feature {
        row: usize,
        entity_id: String,
        feature: Feature,
        checked: bool,
    },
}

impl Toggle {
    /// Endpoint the toggle is reported to.
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Enabled { .. } => DeviceUpdateRequest::ENDPOINT,
            Self::Feature { .. } => FeatureUpdateRequest::ENDPOINT,
        }
    }

    /// Show the new state in `table`, then build the one request that
    /// reports it to the bridge.
    ///
    /// The request is built even when `table` has no matching checkbox.
    pub fn apply(&self, table: &mut DeviceTable) -> Result<Outgoing, ApiError> {
        match self {
            Self::Enabled { row, checked } => {
                table.set_enabled(*row, *checked);
                Outgoing::of(&DeviceUpdateRequest::for_row(*row, *checked))
            }
            Self::Feature {
                row,
                entity_id,
                feature,
                checked,
            } => {
                table.set_feature(*row, feature, *checked);
                Outgoing::of(&FeatureUpdateRequest::new(
                    entity_id.clone(),
                    feature.clone(),
                    *checked,
                ))
            }
        }
    }
}
