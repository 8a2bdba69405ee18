//! Strings of the original executable that `Text` patches may replace, and
//! the text record each one corresponds to.
//!
//! An empty id marks a string the engine does not let patches replace.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMapping {
    pub id: &'static str,
    pub text: &'static str,
}

impl TextMapping {
    pub fn is_disallowed(&self) -> bool {
        self.id.is_empty()
    }
}

const fn text(id: &'static str, text: &'static str) -> TextMapping {
    TextMapping { id, text }
}

pub static TEXT_MAPPINGS: &[TextMapping] = &[
    text("", "Development mode ON."),
    text("", "CD-ROM Version: default.cfg from c:\\doomdata"),
    text("QUITMSG", "are you sure you want to\nquit this great game?"),
    text("GOTARMOR", "Picked up the armor."),
    text("GOTMEGA", "Picked up the MegaArmor!"),
    text("GOTHTHBONUS", "Picked up a health bonus."),
    text("GOTARMBONUS", "Picked up an armor bonus."),
    text("GOTSTIM", "Picked up a stimpack."),
    text("GOTMEDINEED", "Picked up a medikit that you REALLY need!"),
    text("GOTMEDIKIT", "Picked up a medikit."),
    text("GOTSUPER", "Supercharge!"),
    text("GOTBLUECARD", "Picked up a blue keycard."),
    text("GOTYELWCARD", "Picked up a yellow keycard."),
    text("GOTREDCARD", "Picked up a red keycard."),
    text("GOTBLUESKUL", "Picked up a blue skull key."),
    text("GOTYELWSKUL", "Picked up a yellow skull key."),
    text("GOTREDSKULL", "Picked up a red skull key."),
    text("GOTINVUL", "Invulnerability!"),
    text("GOTBERSERK", "Berserk!"),
    text("GOTINVIS", "Partial Invisibility"),
    text("GOTSUIT", "Radiation Shielding Suit"),
    text("GOTMAP", "Computer Area Map"),
    text("GOTVISOR", "Light Amplification Visor"),
    text("GOTMSPHERE", "MegaSphere!"),
    text("GOTCLIP", "Picked up a clip."),
    text("GOTCLIPBOX", "Picked up a box of bullets."),
    text("GOTROCKET", "Picked up a rocket."),
    text("GOTROCKBOX", "Picked up a box of rockets."),
    text("GOTCELL", "Picked up an energy cell."),
    text("GOTCELLBOX", "Picked up an energy cell pack."),
    text("GOTSHELLS", "Picked up 4 shotgun shells."),
    text("GOTSHELLBOX", "Picked up a box of shotgun shells."),
    text("GOTBACKPACK", "Picked up a backpack full of ammo!"),
    text("GOTBFG9000", "You got the BFG9000!  Oh, yes."),
    text("GOTCHAINGUN", "You got the chaingun!"),
    text("GOTCHAINSAW", "A chainsaw!  Find some meat!"),
    text("GOTLAUNCHER", "You got the rocket launcher!"),
    text("GOTPLASMA", "You got the plasma gun!"),
    text("GOTSHOTGUN", "You got the shotgun!"),
    text("GOTSHOTGUN2", "You got the super shotgun!"),
    text("PD_BLUEO", "You need a blue key to activate this object"),
    text("PD_REDO", "You need a red key to activate this object"),
    text("PD_YELLOWO", "You need a yellow key to activate this object"),
    text("PD_BLUEK", "You need a blue key to open this door"),
    text("PD_REDK", "You need a red key to open this door"),
    text("PD_YELLOWK", "You need a yellow key to open this door"),
    text("STSTR_DQDON", "Degreelessness Mode On"),
    text("STSTR_DQDOFF", "Degreelessness Mode Off"),
    text("STSTR_KFAADDED", "Very Happy Ammo Added"),
    text("STSTR_FAADDED", "Ammo (no keys) Added"),
    text("STSTR_NCON", "No Clipping Mode ON"),
    text("STSTR_NCOFF", "No Clipping Mode OFF"),
    text("STSTR_CHOPPERS", "... doesn't suck - GM"),
    text("STSTR_MUS", "Music Change"),
    text("HUSTR_E1M1", "E1M1: Hangar"),
    text("HUSTR_E1M2", "E1M2: Nuclear Plant"),
    text("HUSTR_E1M3", "E1M3: Toxin Refinery"),
    text("HUSTR_E1M4", "E1M4: Command Control"),
    text("HUSTR_E1M5", "E1M5: Phobos Lab"),
    text("HUSTR_E1M6", "E1M6: Central Processing"),
    text("HUSTR_E1M7", "E1M7: Computer Station"),
    text("HUSTR_E1M8", "E1M8: Phobos Anomaly"),
    text("HUSTR_E1M9", "E1M9: Military Base"),
    text("HUSTR_E2M1", "E2M1: Deimos Anomaly"),
    text("HUSTR_E2M2", "E2M2: Containment Area"),
    text("HUSTR_E2M3", "E2M3: Refinery"),
    text("HUSTR_E2M4", "E2M4: Deimos Lab"),
    text("HUSTR_E2M5", "E2M5: Command Center"),
    text("HUSTR_E2M6", "E2M6: Halls of the Damned"),
    text("HUSTR_E2M7", "E2M7: Spawning Vats"),
    text("HUSTR_E2M8", "E2M8: Tower of Babel"),
    text("HUSTR_E2M9", "E2M9: Fortress of Mystery"),
    text("HUSTR_E3M1", "E3M1: Hell Keep"),
    text("HUSTR_E3M2", "E3M2: Slough of Despair"),
    text("HUSTR_E3M3", "E3M3: Pandemonium"),
    text("HUSTR_E3M4", "E3M4: House of Pain"),
    text("HUSTR_E3M5", "E3M5: Unholy Cathedral"),
    text("HUSTR_E3M6", "E3M6: Mt. Erebus"),
    text("HUSTR_E3M7", "E3M7: Limbo"),
    text("HUSTR_E3M8", "E3M8: Dis"),
    text("HUSTR_E3M9", "E3M9: Warrens"),
    text("HUSTR_1", "level 1: entryway"),
    text("HUSTR_2", "level 2: underhalls"),
    text("HUSTR_3", "level 3: the gantlet"),
    text("HUSTR_4", "level 4: the focus"),
    text("HUSTR_5", "level 5: the waste tunnels"),
    text("HUSTR_6", "level 6: the crusher"),
    text("HUSTR_7", "level 7: dead simple"),
    text("HUSTR_8", "level 8: tricks and traps"),
    text("HUSTR_9", "level 9: the pit"),
    text("HUSTR_10", "level 10: refueling base"),
    text("HUSTR_11", "level 11: 'o' of destruction!"),
    text("HUSTR_12", "level 12: the factory"),
];

/// Find the mapping whose original string is exactly `text`.
pub fn find_text_mapping(text: &str) -> Option<&'static TextMapping> {
    TEXT_MAPPINGS.iter().find(|m| m.text == text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match() {
        assert_eq!(find_text_mapping("Picked up the armor.").unwrap().id, "GOTARMOR");
        assert!(find_text_mapping("picked up the armor.").is_none());
    }

    #[test]
    fn multi_line_entry() {
        let quit = find_text_mapping("are you sure you want to\nquit this great game?");
        assert_eq!(quit.unwrap().id, "QUITMSG");
    }

    #[test]
    fn disallowed_entries() {
        assert!(find_text_mapping("Development mode ON.").unwrap().is_disallowed());
        assert!(!find_text_mapping("Berserk!").unwrap().is_disallowed());
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = TEXT_MAPPINGS.iter().map(|m| m.id).filter(|id| !id.is_empty()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
