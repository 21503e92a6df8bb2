use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Correctness policy applied when a learner checks their arrangement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckMode {
    /// Order, indentation and column must all match
    #[default]
    Strict,
    /// Only the relative order of statements matters
    OrderOnly,
    /// Only each statement's indentation matters
    IndentOnly,
}

impl CheckMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckMode::Strict => "strict",
            CheckMode::OrderOnly => "order-only",
            CheckMode::IndentOnly => "indent-only",
        }
    }
}

impl fmt::Display for CheckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported check mode: {0}")]
pub struct UnknownCheckMode(pub String);

impl FromStr for CheckMode {
    type Err = UnknownCheckMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(CheckMode::Strict),
            "order-only" => Ok(CheckMode::OrderOnly),
            "indent-only" => Ok(CheckMode::IndentOnly),
            _ => Err(UnknownCheckMode(s.to_string())),
        }
    }
}
