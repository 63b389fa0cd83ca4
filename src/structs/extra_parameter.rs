use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-defined query pair sent with every webhook request.
///
/// `id` survives edits to `key` and `value` and is what removal matches on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraParameter {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl ExtraParameter {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    pub fn is_sendable(&self) -> bool {
        !self.key.is_empty()
    }

    pub fn as_pair(&self) -> (&str, &str) {
        (&self.key, &self.value)
    }
}

impl Default for ExtraParameter {
    fn default() -> Self {
        Self::new("", "")
    }
}
