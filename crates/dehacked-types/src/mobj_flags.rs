use bitflags::bitflags;
use serde::Serialize;

bitflags! {
    /// Thing flag word 0, the original DOOM `MF_*` constants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub struct MobjFlags: u32 {
        const SPECIAL      = 0x0000_0001;
        const SOLID        = 0x0000_0002;
        const SHOOTABLE    = 0x0000_0004;
        const NOSECTOR     = 0x0000_0008;
        const NOBLOCKMAP   = 0x0000_0010;
        const AMBUSH       = 0x0000_0020;
        const JUSTHIT      = 0x0000_0040;
        const JUSTATTACKED = 0x0000_0080;
        const SPAWNCEILING = 0x0000_0100;
        const NOGRAVITY    = 0x0000_0200;
        const DROPOFF      = 0x0000_0400;
        const PICKUP       = 0x0000_0800;
        const NOCLIP       = 0x0000_1000;
        const SLIDE        = 0x0000_2000;
        const FLOAT        = 0x0000_4000;
        const TELEPORT     = 0x0000_8000;
        const MISSILE      = 0x0001_0000;
        const DROPPED      = 0x0002_0000;
        const SHADOW       = 0x0004_0000;
        const NOBLOOD      = 0x0008_0000;
        const CORPSE       = 0x0010_0000;
        const INFLOAT      = 0x0020_0000;
        const COUNTKILL    = 0x0040_0000;
        const COUNTITEM    = 0x0080_0000;
        const SKULLFLY     = 0x0100_0000;
        const NOTDMATCH    = 0x0200_0000;
        const TRANSLATION  = 0x0C00_0000;
        // The engine keeps its own meanings in the top four bits.
        const VIEWALIGN    = 0x1000_0000;
        const BRIGHTSHADOW = 0x2000_0000;
        const BRIGHTEXPLODE = 0x4000_0000;
    }
}

impl MobjFlags {
    /// Bits a raw numeric `Bits` value may touch.
    pub const DEHACKED_MASK: u32 = 0x0fff_ffff;

    pub fn from_word(word: i32) -> Self {
        Self::from_bits_retain(word as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_covers_both_bits() {
        assert_eq!(MobjFlags::TRANSLATION.bits(), (1 << 26) | (1 << 27));
    }

    #[test]
    fn engine_bits_outside_mask() {
        let engine = MobjFlags::VIEWALIGN | MobjFlags::BRIGHTSHADOW | MobjFlags::BRIGHTEXPLODE;
        assert_eq!(engine.bits() & MobjFlags::DEHACKED_MASK, 0);
        assert_eq!(
            MobjFlags::NOTDMATCH.bits() & MobjFlags::DEHACKED_MASK,
            MobjFlags::NOTDMATCH.bits()
        );
    }

    #[test]
    fn from_word_keeps_unknown_bits() {
        let flags = MobjFlags::from_word(-1);
        assert!(flags.contains(MobjFlags::SPAWNCEILING));
        assert_eq!(flags.bits(), u32::MAX);
    }
}
