//! Legacy DeHackEd vocabulary and what it maps onto in the definition
//! database.
//!
//! Labels are the spellings the original DOOM executable's tables were
//! known by in DeHackEd; patches are written against them, so they must
//! not change. All lookups are case-insensitive and return the first match.

use dehacked_types::{SoundName, StateName, WeaponStateName};

pub trait Labeled {
    fn label(&self) -> &str;
}

/// Find the first entry whose label matches, with its table index.
pub fn lookup<'t, T: Labeled>(table: &'t [T], label: &str) -> Option<(usize, &'t T)> {
    table
        .iter()
        .enumerate()
        .find(|(_, entry)| entry.label().eq_ignore_ascii_case(label))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateMapping {
    pub label: &'static str,
    pub id: StateName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundMapping {
    pub label: &'static str,
    pub id: SoundName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponStateMapping {
    pub label: &'static str,
    pub id: WeaponStateName,
}

/// A mobj flag mnemonic. `bit` packs an optional secondary bit position in
/// the high byte and the primary bit position in the low byte; `group` is
/// the flag word it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagMapping {
    pub label: &'static str,
    pub bit: u16,
    pub group: usize,
}

impl FlagMapping {
    /// The bits this mnemonic sets in its flag word.
    pub fn mask(&self) -> i32 {
        let mut value = 0u32;
        if self.bit & 0xff00 != 0 {
            value |= 1 << (self.bit >> 8);
        }
        value |= 1 << (self.bit & 0xff);
        value as i32
    }
}

/// A `Misc` section label and the value key-path it writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueMapping {
    pub label: &'static str,
    pub path: &'static str,
}

macro_rules! labeled {
    ($($ty:ty),*) => {
        $(impl Labeled for $ty {
            fn label(&self) -> &str {
                self.label
            }
        })*
    };
}

labeled!(
    StateMapping,
    SoundMapping,
    WeaponStateMapping,
    FlagMapping,
    ValueMapping
);

pub static STATE_MAPPINGS: &[StateMapping] = &[
    StateMapping { label: "Initial", id: StateName::Spawn },
    StateMapping { label: "First moving", id: StateName::See },
    StateMapping { label: "Injury", id: StateName::Pain },
    StateMapping { label: "Close attack", id: StateName::Melee },
    StateMapping { label: "Far attack", id: StateName::Missile },
    StateMapping { label: "Death", id: StateName::Death },
    StateMapping { label: "Exploding", id: StateName::XDeath },
    StateMapping { label: "Respawn", id: StateName::Raise },
];

pub static SOUND_MAPPINGS: &[SoundMapping] = &[
    SoundMapping { label: "Alert", id: SoundName::See },
    SoundMapping { label: "Attack", id: SoundName::Attack },
    SoundMapping { label: "Pain", id: SoundName::Pain },
    SoundMapping { label: "Death", id: SoundName::Death },
    SoundMapping { label: "Action", id: SoundName::Active },
];

pub static WEAPON_STATE_MAPPINGS: &[WeaponStateMapping] = &[
    WeaponStateMapping { label: "Select", id: WeaponStateName::Up },
    WeaponStateMapping { label: "Deselect", id: WeaponStateName::Down },
    WeaponStateMapping { label: "Bobbing", id: WeaponStateName::Ready },
    WeaponStateMapping { label: "Shooting", id: WeaponStateName::Attack },
    WeaponStateMapping { label: "Firing", id: WeaponStateName::Flash },
];

const fn flag(label: &'static str, bit: u16, group: usize) -> FlagMapping {
    FlagMapping { label, bit, group }
}

pub static FLAG_MAPPINGS: &[FlagMapping] = &[
    flag("SPECIAL", 0, 0),
    flag("SOLID", 1, 0),
    flag("SHOOTABLE", 2, 0),
    flag("NOSECTOR", 3, 0),
    flag("NOBLOCKMAP", 4, 0),
    flag("AMBUSH", 5, 0),
    flag("JUSTHIT", 6, 0),
    flag("JUSTATTACKED", 7, 0),
    flag("SPAWNCEILING", 8, 0),
    flag("NOGRAVITY", 9, 0),
    flag("DROPOFF", 10, 0),
    flag("PICKUP", 11, 0),
    flag("NOCLIP", 12, 0),
    flag("SLIDE", 13, 0),
    flag("FLOAT", 14, 0),
    flag("TELEPORT", 15, 0),
    flag("MISSILE", 16, 0),
    flag("DROPPED", 17, 0),
    flag("SHADOW", 18, 0),
    flag("NOBLOOD", 19, 0),
    flag("CORPSE", 20, 0),
    flag("INFLOAT", 21, 0),
    flag("COUNTKILL", 22, 0),
    flag("COUNTITEM", 23, 0),
    flag("SKULLFLY", 24, 0),
    flag("NOTDMATCH", 25, 0),
    flag("TRANSLATION", 0x1a1b, 0),
    flag("TRANSLATION1", 26, 0),
    flag("TRANSLATION2", 27, 0),
    flag("TRANSLUCENT", 29, 0),
    flag("LOGRAV", 0, 1),
    flag("FLOORBOUNCE", 2, 1),
    flag("BOUNCES", 2, 1),
    flag("NOTELEPORT", 7, 1),
    flag("RIP", 8, 1),
    flag("PUSHABLE", 9, 1),
];

pub static VALUE_MAPPINGS: &[ValueMapping] = &[
    ValueMapping { label: "Initial Health", path: "Player|Health" },
    ValueMapping { label: "Initial Bullets", path: "Player|Init ammo|Clip" },
    ValueMapping { label: "Max Health", path: "Player|Health Limit" },
    ValueMapping { label: "Max Armor", path: "Player|Blue Armor" },
    ValueMapping { label: "Green Armor Class", path: "Player|Green Armor Class" },
    ValueMapping { label: "Blue Armor Class", path: "Player|Blue Armor Class" },
    ValueMapping { label: "Max Soulsphere", path: "SoulSphere|Give|Health Limit" },
    ValueMapping { label: "Soulsphere Health", path: "SoulSphere|Give|Health" },
    ValueMapping { label: "Megasphere Health", path: "MegaSphere|Give|Health" },
    ValueMapping { label: "God Mode Health", path: "Player|God Health" },
    ValueMapping { label: "IDFA Armor", path: "Player|IDFA Armor" },
    ValueMapping { label: "IDFA Armor Class", path: "Player|IDFA Armor Class" },
    ValueMapping { label: "IDKFA Armor", path: "Player|IDKFA Armor" },
    ValueMapping { label: "IDKFA Armor Class", path: "Player|IDKFA Armor Class" },
    ValueMapping { label: "BFG Cells/Shot", path: "Weapon Info|6|Per shot" },
    ValueMapping { label: "Monsters Infight", path: "AI|Infight" },
];

pub fn find_state_mapping(label: &str) -> Option<&'static StateMapping> {
    lookup(STATE_MAPPINGS, label).map(|(_, m)| m)
}

pub fn find_sound_mapping(label: &str) -> Option<&'static SoundMapping> {
    lookup(SOUND_MAPPINGS, label).map(|(_, m)| m)
}

pub fn find_weapon_state_mapping(label: &str) -> Option<&'static WeaponStateMapping> {
    lookup(WEAPON_STATE_MAPPINGS, label).map(|(_, m)| m)
}

pub fn find_flag_mapping(label: &str) -> Option<&'static FlagMapping> {
    lookup(FLAG_MAPPINGS, label).map(|(_, m)| m)
}

pub fn find_value_mapping(label: &str) -> Option<&'static ValueMapping> {
    lookup(VALUE_MAPPINGS, label).map(|(_, m)| m)
}
