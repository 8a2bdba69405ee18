use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Number of general purpose "misc" slots per state.
pub const NUM_STATE_MISC: usize = 3;

/// Number of states in the original DOOM executable (`NUMSTATES`).
pub const NUMSTATES: usize = 967;

bitflags! {
    /// State flags (`STF_*`).
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct StateFlags: u32 {
        const FULLBRIGHT = 0x0000_0001;
        const NOAUTOLIGHT = 0x0000_0002;
    }
}

/// One frame of an actor's state machine, the engine's `ded_state_t`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    pub id: String,
    /// Sprite id.
    pub sprite: String,
    pub frame: i32,
    pub flags: StateFlags,
    pub tics: i32,
    /// Action function name; `"NULL"` or empty when the state has none.
    pub action: String,
    pub next_state: String,
    pub misc: [i32; NUM_STATE_MISC],
}

impl State {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn has_action(&self) -> bool {
        !self.action.is_empty() && !self.action.eq_ignore_ascii_case("NULL")
    }
}
