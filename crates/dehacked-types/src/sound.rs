use serde::{Deserialize, Serialize};

/// A sound effect definition, the engine's `ded_sound_t`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sound {
    pub id: String,
    /// Lump the samples are loaded from, e.g. `DSPISTOL`.
    pub lump_name: String,
    pub priority: i32,
    /// Exclusion group ("singularity").
    pub group: i32,
    /// Id of the sound this one is linked to.
    pub link: String,
    pub link_pitch: i32,
    pub link_volume: i32,
}

impl Sound {
    pub fn new(id: impl Into<String>, lump_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            lump_name: lump_name.into(),
            ..Self::default()
        }
    }
}

/// A music definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Music {
    pub id: String,
    /// Lump the song is loaded from, e.g. `D_E1M1`.
    pub lump_name: String,
}

impl Music {
    pub fn new(id: impl Into<String>, lump_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            lump_name: lump_name.into(),
        }
    }
}
