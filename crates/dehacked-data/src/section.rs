//! Section header classification.

use crate::util::starts_with_ignore_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Thing,
    Frame,
    Pointer,
    Sprite,
    Ammo,
    Weapon,
    Sound,
    Text,
    Misc,
    Cheat,
    Include,
    CodePointers,
    Pars,
    Strings,
    Helper,
    Sprites,
    Sounds,
    Music,
}

/// Header keywords in match order. The first prefix that matches wins.
static KEYWORDS: &[(&str, SectionKind)] = &[
    ("Thing", SectionKind::Thing),
    ("Frame", SectionKind::Frame),
    ("Pointer", SectionKind::Pointer),
    ("Sprite", SectionKind::Sprite),
    ("Ammo", SectionKind::Ammo),
    ("Weapon", SectionKind::Weapon),
    ("Sound", SectionKind::Sound),
    ("Text", SectionKind::Text),
    ("Misc", SectionKind::Misc),
    ("Cheat", SectionKind::Cheat),
    ("include", SectionKind::Include),
    ("[CODEPTR]", SectionKind::CodePointers),
    ("[PARS]", SectionKind::Pars),
    ("[STRINGS]", SectionKind::Strings),
    ("[HELPER]", SectionKind::Helper),
    ("[SPRITES]", SectionKind::Sprites),
    ("[SOUNDS]", SectionKind::Sounds),
    ("[MUSIC]", SectionKind::Music),
];

impl SectionKind {
    pub fn keyword(self) -> &'static str {
        KEYWORDS
            .iter()
            .find(|(_, kind)| *kind == self)
            .map_or("", |(keyword, _)| keyword)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section<'a> {
    /// A recognized header and the rest of the line after the keyword,
    /// with leading whitespace removed.
    Known(SectionKind, &'a str),
    Unknown(&'a str),
}

impl<'a> Section<'a> {
    pub fn classify(line: &'a str) -> Self {
        KEYWORDS
            .iter()
            .find(|(keyword, _)| starts_with_ignore_case(line, keyword))
            .map_or(Self::Unknown(line), |&(keyword, kind)| {
                Self::Known(kind, line[keyword.len()..].trim_start())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_with_argument() {
        assert_eq!(
            Section::classify("Thing 1 (Zombieman)"),
            Section::Known(SectionKind::Thing, "1 (Zombieman)")
        );
        assert_eq!(
            Section::classify("text 4 4"),
            Section::Known(SectionKind::Text, "4 4")
        );
        assert_eq!(
            Section::classify("INCLUDE notext other.deh"),
            Section::Known(SectionKind::Include, "notext other.deh")
        );
    }

    #[test]
    fn bracketed_sections() {
        assert_eq!(
            Section::classify("[pars]"),
            Section::Known(SectionKind::Pars, "")
        );
        assert_eq!(
            Section::classify("[SOUNDS]"),
            Section::Known(SectionKind::Sounds, "")
        );
    }

    #[test]
    fn prefix_order_is_significant() {
        // "Sprites" is not bracketed, so it is a Sprite header.
        assert_eq!(
            Section::classify("Sprites 3"),
            Section::Known(SectionKind::Sprite, "s 3")
        );
    }

    #[test]
    fn unknown_header() {
        assert_eq!(Section::classify("Frobnicate 7"), Section::Unknown("Frobnicate 7"));
        assert_eq!(Section::classify("[PARTS]"), Section::Unknown("[PARTS]"));
    }

    #[test]
    fn keyword_round_trip() {
        assert_eq!(SectionKind::CodePointers.keyword(), "[CODEPTR]");
        assert_eq!(SectionKind::Include.keyword(), "include");
    }
}
