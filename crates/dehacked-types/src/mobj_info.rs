use serde::{Deserialize, Serialize};
use strum::EnumCount;

use crate::state_name::{SoundName, StateName};

/// Number of flag words carried by each thing type.
pub const NUM_MOBJ_FLAGS: usize = 3;

/// Number of thing types in the original DOOM executable (`NUMMOBJTYPES`).
pub const NUMMOBJTYPES: usize = 137;

/// A thing (map object) type definition, the engine's `ded_mobj_t`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobjInfo {
    pub id: String,
    pub doom_ed_num: i32,
    pub spawn_health: i32,
    pub reaction_time: i32,
    pub pain_chance: i32,
    pub speed: f32,
    pub radius: f32,
    pub height: f32,
    pub mass: i32,
    pub damage: i32,
    pub flags: [i32; NUM_MOBJ_FLAGS],
    /// State ids indexed by [`StateName`].
    pub states: [String; StateName::COUNT],
    /// Sound ids indexed by [`SoundName`].
    pub sounds: [String; SoundName::COUNT],
}

impl MobjInfo {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn state(&self, name: StateName) -> &str {
        &self.states[name as usize]
    }

    pub fn sound(&self, name: SoundName) -> &str {
        &self.sounds[name as usize]
    }
}
