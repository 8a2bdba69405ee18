use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, FromRepr};

/// The four player ammo types of DOOM (`am_*`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumCount, FromRepr,
)]
#[repr(u8)]
pub enum AmmoType {
    Clip = 0,
    Shell = 1,
    Cell = 2,
    Misl = 3,
}

impl AmmoType {
    /// Key-path component, e.g. `Player|Max ammo|Clip`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Clip => "Clip",
            Self::Shell => "Shell",
            Self::Cell => "Cell",
            Self::Misl => "Misl",
        }
    }
}
