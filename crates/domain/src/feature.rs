//! Feature: a named optional capability of a device.

use serde::{Deserialize, Serialize};

/// A capability the operator can switch on or off per device.
///
/// Serialized as its bare name. Names the console does not know are kept
/// verbatim so they survive a round trip through the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Feature {
    /// Dimmable light.
    Brightness,
    Other(String),
}

impl Feature {
    /// Wire name of the feature.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Brightness => "brightness",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Feature {
    fn from(value: &str) -> Self {
        match value {
            "brightness" => Self::Brightness,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Feature {
    fn from(value: String) -> Self {
        match value.as_str() {
            "brightness" => Self::Brightness,
            _ => Self::Other(value),
        }
    }
}

impl From<Feature> for String {
    fn from(value: Feature) -> Self {
        match value {
            Feature::Brightness => "brightness".to_string(),
            Feature::Other(name) => name,
        }
    }
}

impl std::str::FromStr for Feature {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
