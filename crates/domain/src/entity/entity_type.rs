//! Entity type: the closed set of device categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Category of a tracked device.
///
/// Declaration order is significant: it is the order used when listing the
/// permitted values in validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Sensor,
    Light,
    Switch,
    Multimedia,
    AirConditioner,
}

impl EntityType {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Sensor,
        Self::Light,
        Self::Switch,
        Self::Multimedia,
        Self::AirConditioner,
    ];

    /// Wire tokens of [`ALL`](Self::ALL), same order.
    pub const TOKENS: &'static [&'static str] =
        &["sensor", "light", "switch", "multimedia", "air_conditioner"];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sensor => "sensor",
            Self::Light => "light",
            Self::Switch => "switch",
            Self::Multimedia => "multimedia",
            Self::AirConditioner => "air_conditioner",
        }
    }

    /// Whether `token` is exactly one of [`TOKENS`](Self::TOKENS).
    #[must_use]
    pub fn is_member(token: &str) -> bool {
        Self::TOKENS.contains(&token)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or(ValidationError::NotOneOf {
                choices: Self::TOKENS,
            })
    }
}
