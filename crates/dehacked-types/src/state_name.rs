use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, FromRepr};

/// Per-thing state slots (`SN_*`), in the engine's storage order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumCount, FromRepr,
)]
#[repr(u8)]
pub enum StateName {
    Spawn = 0,
    See = 1,
    Pain = 2,
    Melee = 3,
    Missile = 4,
    Crash = 5,
    Death = 6,
    XDeath = 7,
    Raise = 8,
}

impl StateName {
    /// Name used in definition files and log output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Spawn => "Spawn",
            Self::See => "See",
            Self::Pain => "Pain",
            Self::Melee => "Melee",
            Self::Missile => "Missile",
            Self::Crash => "Crash",
            Self::Death => "Death",
            Self::XDeath => "XDeath",
            Self::Raise => "Raise",
        }
    }
}

/// Per-thing sound slots (`SDN_*`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumCount, FromRepr,
)]
#[repr(u8)]
pub enum SoundName {
    Pain = 0,
    Death = 1,
    Active = 2,
    Attack = 3,
    See = 4,
}

impl SoundName {
    pub fn name(self) -> &'static str {
        match self {
            Self::Pain => "Pain",
            Self::Death => "Death",
            Self::Active => "Active",
            Self::Attack => "Attack",
            Self::See => "See",
        }
    }
}

/// Player weapon state slots (`WSN_*`). The name is the key-path component
/// used under `Weapon Info|<n>|...`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumCount, FromRepr,
)]
#[repr(u8)]
pub enum WeaponStateName {
    Up = 0,
    Down = 1,
    Ready = 2,
    Attack = 3,
    Flash = 4,
}

impl WeaponStateName {
    pub fn name(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Ready => "Ready",
            Self::Attack => "Attack",
            Self::Flash => "Flash",
        }
    }
}
