//! Common types used across the platform

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stakeholder roles on the platform
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Farmer,
    Producer,
    Consumer,
    Researcher,
    Vet,
    Transporter,
    Entrepreneur,
    Gov,
}

/// Error returned when parsing an unknown role string
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

impl Role {
    /// All roles, in registration-form order
    pub const ALL: [Role; 8] = [
        Role::Farmer,
        Role::Producer,
        Role::Consumer,
        Role::Researcher,
        Role::Vet,
        Role::Transporter,
        Role::Entrepreneur,
        Role::Gov,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Farmer => "farmer",
            Role::Producer => "producer",
            Role::Consumer => "consumer",
            Role::Researcher => "researcher",
            Role::Vet => "vet",
            Role::Transporter => "transporter",
            Role::Entrepreneur => "entrepreneur",
            Role::Gov => "gov",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "farmer" => Ok(Role::Farmer),
            "producer" => Ok(Role::Producer),
            "consumer" => Ok(Role::Consumer),
            "researcher" => Ok(Role::Researcher),
            "vet" => Ok(Role::Vet),
            "transporter" => Ok(Role::Transporter),
            "entrepreneur" => Ok(Role::Entrepreneur),
            "gov" => Ok(Role::Gov),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!("admin".parse::<Role>().is_err());
        assert!("Farmer".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serializes_as_lowercase_string() {
        let json = serde_json::to_string(&Role::Vet).unwrap();
        assert_eq!(json, "\"vet\"");
        let json = serde_json::to_string(&Role::Gov).unwrap();
        assert_eq!(json, "\"gov\"");
    }
}
