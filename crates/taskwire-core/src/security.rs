//! Security risk classification carried by actions.
//!
//! The scale is owned here so that action records can carry a value without
//! interpreting it. Policy layers decide what each level means.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TaskwireError;

/// Severity attached to an action for policy evaluation.
///
/// Serialized as an integer on the scale `-1..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
#[repr(i8)]
pub enum SecurityRisk {
    Unknown = -1,
    Low = 0,
    Medium = 1,
    High = 2,
}

impl SecurityRisk {
    pub const ALL: [SecurityRisk; 4] = [
        SecurityRisk::Unknown,
        SecurityRisk::Low,
        SecurityRisk::Medium,
        SecurityRisk::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityRisk::Unknown => "unknown",
            SecurityRisk::Low => "low",
            SecurityRisk::Medium => "medium",
            SecurityRisk::High => "high",
        }
    }
}

impl fmt::Display for SecurityRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SecurityRisk {
    type Err = TaskwireError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unknown" => Ok(SecurityRisk::Unknown),
            "low" => Ok(SecurityRisk::Low),
            "medium" => Ok(SecurityRisk::Medium),
            "high" => Ok(SecurityRisk::High),
            _ => Err(TaskwireError::InvalidSecurityRisk(s.to_string())),
        }
    }
}

impl TryFrom<i8> for SecurityRisk {
    type Error = TaskwireError;
    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(SecurityRisk::Unknown),
            0 => Ok(SecurityRisk::Low),
            1 => Ok(SecurityRisk::Medium),
            2 => Ok(SecurityRisk::High),
            other => Err(TaskwireError::InvalidSecurityRisk(other.to_string())),
        }
    }
}

impl From<SecurityRisk> for i8 {
    fn from(risk: SecurityRisk) -> Self {
        risk as i8
    }
}
