//! Bridge HTTP API endpoints used by the console.

/// A fixed path on the bridge's local HTTP API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endpoint {
    /// `GET` the device list, `POST` device enablement updates.
    #[default]
    Devices,
    /// `POST` administrative commands.
    Command,
    /// `POST` per-device feature flags.
    DeviceFeatures,
}

impl Endpoint {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Devices => "/api/v2/devices",
            Self::Command => "/api/v2/command",
            Self::DeviceFeatures => "/api/v2/device/features",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
