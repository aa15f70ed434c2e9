//! User type discriminant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of user registering in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UserType {
    /// Individual client browsing services.
    #[serde(rename = "CLIENTE")]
    Cliente,
    /// Registered business offering services.
    #[serde(rename = "EMPRESA")]
    Empresa,
}

impl UserType {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cliente => "CLIENTE",
            Self::Empresa => "EMPRESA",
        }
    }

    /// Returns the document-store collection records of this type are written to.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Cliente => "clients",
            Self::Empresa => "companies",
        }
    }

    /// Returns the label shown on the selection screen.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cliente => "Como Cliente",
            Self::Empresa => "Como Empresa",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CLIENTE" => Ok(Self::Cliente),
            "EMPRESA" => Ok(Self::Empresa),
            other => Err(format!("unknown user type: {other}")),
        }
    }
}
