use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Confidence tier for a single displayed metric. Derived on demand from a
/// metric value and its threshold table, never stored on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Favorable,
    Warning,
    Unfavorable,
    Indeterminate,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Favorable => write!(f, "favorable"),
            Tier::Warning => write!(f, "warning"),
            Tier::Unfavorable => write!(f, "unfavorable"),
            Tier::Indeterminate => write!(f, "indeterminate"),
        }
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "favorable" => Ok(Tier::Favorable),
            "warning" => Ok(Tier::Warning),
            "unfavorable" => Ok(Tier::Unfavorable),
            "indeterminate" => Ok(Tier::Indeterminate),
            _ => Err(format!("Unknown tier: {s}")),
        }
    }
}
