use serde::{Deserialize, Serialize};

/// A generic key-path/text record, e.g. `Weapon Info|1|Type = "clip"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Value {
    pub id: String,
    pub text: String,
}

impl Value {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// An in-game string, e.g. `GOTARMOR = "Picked up the armor."`.
///
/// Newlines are stored escaped as the two characters `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Text {
    pub id: String,
    pub text: String,
}

impl Text {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}
