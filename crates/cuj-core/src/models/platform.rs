//! Target platform of a journey.

use std::{fmt, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CujError;

/// Mobile platform a journey is written for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum Platform {
    #[default]
    #[serde(rename = "iOS")]
    Ios,
    Android,
    Both,
}

impl Platform {
    /// Every platform, in the order choices are offered to users.
    pub const ALL: [Platform; 3] = [Platform::Ios, Platform::Android, Platform::Both];

    /// Label used in exported documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Android => "Android",
            Platform::Both => "Both",
        }
    }
}

impl FromStr for Platform {
    type Err = CujError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            "both" => Ok(Platform::Both),
            _ => Err(CujError::invalid_input("platform")
                .with_reason(format!("'{s}' is not one of iOS, Android, Both"))),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
