pub mod ammo_type;
pub mod definitions;
pub mod map_info;
pub mod mobj_flags;
pub mod mobj_info;
pub mod sound;
pub mod sprite;
pub mod state;
pub mod state_name;
pub mod value;

pub use ammo_type::AmmoType;
pub use definitions::Definitions;
pub use map_info::{MapInfo, compose_map_uri};
pub use mobj_flags::MobjFlags;
pub use mobj_info::{MobjInfo, NUM_MOBJ_FLAGS, NUMMOBJTYPES};
pub use sound::{Music, Sound};
pub use sprite::{NUMSPRITES, SpriteId};
pub use state::{NUM_STATE_MISC, NUMSTATES, State, StateFlags};
pub use state_name::{SoundName, StateName, WeaponStateName};
pub use value::{Text, Value};
