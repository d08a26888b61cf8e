//! Device record: the bridge's view of one smart-home entity.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::feature::Feature;

/// Model name the bridge uses for lights; only lights expose feature toggles.
pub const LIGHT_MODEL: &str = "light";

/// Server-reported state of one smart-home entity.
///
/// Records are created by the bridge; the console only reads snapshots of
/// them and posts partial updates back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub entity_id: String,
    pub category: String,
    #[serde(default)]
    pub enabled: Option<bool>,
    pub name: String,
    pub state: String,
    pub model: String,
    #[serde(default)]
    pub attributes: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

impl DeviceRecord {
    /// Create a builder for constructing a [`DeviceRecord`].
    #[must_use]
    pub fn builder() -> DeviceRecordBuilder {
        DeviceRecordBuilder::default()
    }

    /// Composite identifier shown to the operator: `category.entity_id`.
    #[must_use]
    pub fn display_id(&self) -> String {
        format!("{}.{}", self.category, self.entity_id)
    }

    /// `true` only when the bridge explicitly reports the device as enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    #[must_use]
    pub fn is_light(&self) -> bool {
        self.model == LIGHT_MODEL
    }

    /// Feature names, with a missing list treated as empty.
    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        self.features.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn has_feature(&self, feature: &Feature) -> bool {
        self.feature_names()
            .iter()
            .any(|name| name == feature.as_str())
    }

    /// Compact JSON form of the attribute map, if any.
    #[must_use]
    pub fn attributes_json(&self) -> Option<String> {
        self.attributes
            .as_ref()
            .map(|attrs| serde_json::Value::Object(attrs.clone()).to_string())
    }

    /// Check domain invariants for the record found at `row` of a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyEntityId`] or
    /// [`ValidationError::EmptyCategory`] when the identifying fields are blank.
    pub fn validate(&self, row: usize) -> Result<(), ValidationError> {
        if self.entity_id.trim().is_empty() {
            return Err(ValidationError::EmptyEntityId { row });
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory { row });
        }
        Ok(())
    }
}

/// Validate every record of a snapshot, stopping at the first violation.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered, in row order.
pub fn validate_snapshot(records: &[DeviceRecord]) -> Result<(), ValidationError> {
    records
        .iter()
        .enumerate()
        .try_for_each(|(row, record)| record.validate(row))
}

/// Step-by-step builder for [`DeviceRecord`].
#[derive(Debug, Default)]
pub struct DeviceRecordBuilder {
    entity_id: Option<String>,
    category: Option<String>,
    enabled: Option<bool>,
    name: Option<String>,
    state: Option<String>,
    model: Option<String>,
    attributes: Option<serde_json::Map<String, serde_json::Value>>,
    features: Option<Vec<String>>,
    home: Option<String>,
    room: Option<String>,
}

impl DeviceRecordBuilder {
    #[must_use]
    pub fn entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes
            .get_or_insert_with(serde_json::Map::new)
            .insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn feature(mut self, feature: impl Into<String>) -> Self {
        self.features.get_or_insert_with(Vec::new).push(feature.into());
        self
    }

    #[must_use]
    pub fn home(mut self, home: impl Into<String>) -> Self {
        self.home = Some(home.into());
        self
    }

    #[must_use]
    pub fn room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Build the record. Fields that were never set default to empty
    /// strings / `None`; call [`DeviceRecord::validate`] to enforce invariants.
    #[must_use]
    pub fn build(self) -> DeviceRecord {
        DeviceRecord {
            entity_id: self.entity_id.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            enabled: self.enabled,
            name: self.name.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            model: self.model.unwrap_or_default(),
            attributes: self.attributes,
            features: self.features,
            home: self.home,
            room: self.room,
        }
    }
}
