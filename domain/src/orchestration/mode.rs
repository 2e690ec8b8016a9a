//! Request mode definitions.
//!
//! [`Mode`] decides which connector pools participate in a request:
//! - General: core pool only
//! - Development: core pool followed by the extended pool
//! - VoipAnalysis: domain tag for telephony diagnostics, core pool only

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a request — the closed set of recognised modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Core connectors only
    #[default]
    General,
    /// Core and extended (development-oriented) connectors
    Development,
    /// SIP/VoIP log analysis
    VoipAnalysis,
}

impl Mode {
    /// All recognised modes, in declaration order
    pub const ALL: [Mode; 3] = [Mode::General, Mode::Development, Mode::VoipAnalysis];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::General => "general",
            Mode::Development => "development",
            Mode::VoipAnalysis => "voip_analysis",
        }
    }

    /// Whether the extended pool joins the core pool for this mode
    pub fn includes_extended(&self) -> bool {
        matches!(self, Mode::Development)
    }

    /// Get a human-readable description of this mode
    pub fn description(&self) -> &'static str {
        match self {
            Mode::General => "General: core connectors only",
            Mode::Development => "Development: core and extended connectors",
            Mode::VoipAnalysis => "VoIP analysis: core connectors, telephony diagnostics",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(Mode::General),
            "development" | "dev" => Ok(Mode::Development),
            "voip_analysis" | "voip" | "sip" => Ok(Mode::VoipAnalysis),
            _ => Err(DomainError::InvalidMode(s.to_string())),
        }
    }
}
