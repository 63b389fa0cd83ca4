use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::errors::LockSnitchError;

/// Encoding of the lock-status query value.
///
/// Persisted as `"Boolean"` or `"Number"`; anything else reads back as
/// [`ValueFormat::Boolean`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValueFormat {
    #[default]
    #[serde(rename = "Boolean")]
    Boolean,
    #[serde(rename = "Number")]
    Numeric,
}

impl ValueFormat {
    pub const ALL: [ValueFormat; 2] = [ValueFormat::Boolean, ValueFormat::Numeric];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueFormat::Boolean => "Boolean",
            ValueFormat::Numeric => "Number",
        }
    }

    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(|raw| raw.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for ValueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ValueFormat {
    type Err = LockSnitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Boolean" => Ok(ValueFormat::Boolean),
            "Number" => Ok(ValueFormat::Numeric),
            other => Err(LockSnitchError::validation_error(
                "lockStatusType",
                other,
                "one of Boolean, Number",
                Some("Use 'Boolean' for true/false or 'Number' for 1/0"),
            )),
        }
    }
}
