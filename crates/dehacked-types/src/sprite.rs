use serde::{Deserialize, Serialize};

/// Number of sprites in the original DOOM executable (`NUMSPRITES`).
pub const NUMSPRITES: usize = 138;

/// A sprite id record: the four character sprite name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteId {
    pub id: String,
}

impl SpriteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
