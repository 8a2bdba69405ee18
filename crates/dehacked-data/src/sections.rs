//! Appliers for the classic DeHackEd `key = value` sections.
//!
//! A section header resolves to a [`Target`]. An out-of-range index
//! resolves to [`Target::Discard`]: the body is still parsed and
//! syntax-checked, but its writes are dropped.

use std::fmt;

use dehacked_types::{
    AmmoType, MobjFlags, NUM_MOBJ_FLAGS, NUM_STATE_MISC, NUMSPRITES, NUMSTATES, StateFlags,
};

use crate::error::DehError;
use crate::mappings::{
    find_flag_mapping, find_sound_mapping, find_state_mapping, find_value_mapping,
    find_weapon_state_mapping,
};
use crate::reader::DehReader;
use crate::util::{
    Trailing, atoi, parse_int, strip_prefix_ignore_case, strip_suffix_ignore_case,
};

/// Sprite name table offset in each original executable, by normalized
/// doom version.
const SPRITE_NAME_TABLE_OFFSETS: [i32; 5] = [129044, 129044, 129044, 129284, 129380];

/// Distance from the table offset to the first sprite name pointer.
const SPRITE_NAME_POINTER_BASE: i32 = 22044;

/// Legacy `Sprite subnumber` bit for a fullbright frame.
const FULLBRIGHT_BIT: i32 = 0x8000;

/// Weapon `Ammo type` values.
static AMMO_TYPE_NAMES: [&str; 6] = ["clip", "shell", "cell", "misl", "-", "noammo"];

/// Monsters Infight value that turns infighting on.
const INFIGHT_ON: i32 = 221;

/// Separators between `Bits` mnemonics.
const FLAG_SEPARATORS: &[char] = &[',', '+', '|', ' ', '\t', '\x0c', '\r'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Real(usize),
    Discard,
}

impl Target {
    /// `Real(index)` when `index` addresses one of `len` records.
    pub fn resolve(index: i32, len: usize) -> Self {
        usize::try_from(index)
            .ok()
            .filter(|&idx| idx < len)
            .map_or(Self::Discard, Self::Real)
    }

    pub fn index(self) -> Option<usize> {
        match self {
            Self::Real(idx) => Some(idx),
            Self::Discard => None,
        }
    }

    /// Run `write` on the targeted record. A discarded target absorbs it.
    pub fn with<T, R>(self, records: &mut [T], write: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.index()
            .and_then(|idx| records.get_mut(idx))
            .map(write)
    }
}

/// Write one field of a targeted record and trace it.
fn write_field<T, V: fmt::Display>(
    records: &mut [T],
    target: Target,
    what: &str,
    field: &str,
    value: V,
    write: impl FnOnce(&mut T, &V),
) {
    if target.with(records, |record| write(record, &value)).is_some() {
        if let Some(idx) = target.index() {
            log::debug!("{what} #{idx} \"{field}\" => {value}");
        }
    }
}

impl DehReader<'_> {
    pub(crate) fn resolve_thing(&self, arg: &str) -> Target {
        let num = atoi(arg);
        let target = Target::resolve(num.saturating_sub(1), self.defs.things.len());
        if target == Target::Discard {
            log::warn!("Thing #{num} out of range, ignoring. (Create more Thing defs.)");
        }
        target
    }

    pub(crate) fn resolve_frame(&self, arg: &str) -> Target {
        let num = atoi(arg);
        let target = Target::resolve(num, self.defs.states.len());
        if target == Target::Discard {
            log::warn!("Frame #{num} out of range, ignoring. (Create more State defs.)");
        }
        target
    }

    /// `Pointer N` counts only states that originally had an action.
    pub(crate) fn resolve_pointer(&self, arg: &str) -> Target {
        let offset = atoi(arg);
        let state = usize::try_from(offset)
            .ok()
            .and_then(|o| self.ctx.original.state_for_action_offset(o))
            .filter(|&idx| idx < self.defs.states.len());
        match state {
            Some(idx) => Target::Real(idx),
            None => {
                log::warn!("Pointer #{offset} out of range, ignoring. (Create more State defs.)");
                Target::Discard
            }
        }
    }

    pub(crate) fn resolve_sprite(&self, arg: &str) -> Target {
        let num = atoi(arg);
        let target = Target::resolve(num, NUMSPRITES.min(self.defs.sprites.len()));
        if target == Target::Discard {
            log::warn!("Sprite #{num} out of range, ignoring. (Create more Sprite defs.)");
        }
        target
    }

    pub(crate) fn resolve_sound(&self, arg: &str) -> Target {
        let num = atoi(arg);
        let target = Target::resolve(num, self.defs.sounds.len());
        if target == Target::Discard {
            log::warn!("Sound #{num} out of range, ignoring. (Create more Sound defs.)");
        }
        target
    }

    pub(crate) fn resolve_ammo(&self, arg: &str) -> Option<AmmoType> {
        let num = atoi(arg);
        let ammo = u8::try_from(num).ok().and_then(AmmoType::from_repr);
        if ammo.is_none() {
            log::warn!("Ammo #{num} out of range, ignoring.");
        }
        ammo
    }

    /// Weapons live in the value store, so any non-negative number is a
    /// valid target.
    pub(crate) fn resolve_weapon(&self, arg: &str) -> Target {
        let num = atoi(arg);
        let target = Target::resolve(num, usize::MAX);
        if target == Target::Discard {
            log::warn!("Weapon #{num} out of range, ignoring.");
        }
        target
    }

    pub(crate) fn parse_thing(&mut self, target: Target) -> Result<(), DehError> {
        let mut had_height = false;
        let mut spawn_ceiling_set = false;

        while let Some(line) = self.section_line() {
            let (var, expr) = self.parse_assignment(&line)?;

            if let Some(label) = strip_suffix_ignore_case(var, " frame") {
                self.thing_state(target, var, label, expr);
            } else if let Some(label) = strip_suffix_ignore_case(var, " sound") {
                self.thing_sound(target, var, label, expr);
            } else {
                let value = atoi(expr);
                let things = &mut self.defs.things;
                match var.to_ascii_lowercase().as_str() {
                    "bits" => spawn_ceiling_set |= self.thing_bits(target, expr),
                    "bits2" | "bits3" | "blood color" | "translucency" => self.unsupported(var),
                    "height" => {
                        had_height = true;
                        let height = value as f32 / 65536.0;
                        write_field(things, target, "Type", "Height", height, |t, v| {
                            t.height = *v
                        });
                    }
                    "hit points" => write_field(things, target, "Type", "Hit points", value, |t, v| {
                        t.spawn_health = *v
                    }),
                    "id #" => write_field(things, target, "Type", "ID #", value, |t, v| {
                        t.doom_ed_num = *v
                    }),
                    "mass" => write_field(things, target, "Type", "Mass", value, |t, v| t.mass = *v),
                    "missile damage" => {
                        write_field(things, target, "Type", "Missile damage", value, |t, v| {
                            t.damage = *v
                        })
                    }
                    "pain chance" => write_field(things, target, "Type", "Pain chance", value, |t, v| {
                        t.pain_chance = *v
                    }),
                    "reaction time" => {
                        write_field(things, target, "Type", "Reaction time", value, |t, v| {
                            t.reaction_time = *v
                        })
                    }
                    "speed" => {
                        // Monster speeds are plain integers, missile speeds 16.16 fixed point.
                        let speed = if value.unsigned_abs() < 256 {
                            value as f32
                        } else {
                            value as f32 / 65536.0
                        };
                        write_field(things, target, "Type", "Speed", speed, |t, v| t.speed = *v);
                    }
                    "width" => {
                        let radius = value as f32 / 65536.0;
                        write_field(things, target, "Type", "Width", radius, |t, v| t.radius = *v);
                    }
                    _ => self.unexpected_symbol(var),
                }
            }
            self.skip_to_next_line();
        }

        // Bits setting SPAWNCEILING brings back the original height unless
        // this section also set one.
        if spawn_ceiling_set && !had_height {
            if let Some(idx) = target.index() {
                let original = self.ctx.original.thing_heights.get(idx).copied();
                if let (Some(thing), Some(height)) = (self.defs.things.get_mut(idx), original) {
                    if thing.height != height {
                        log::debug!("Type #{idx} \"Height\" restored to {height}");
                        thing.height = height;
                    }
                }
            }
        }
        Ok(())
    }

    fn thing_state(&mut self, target: Target, var: &str, label: &str, expr: &str) {
        let Some(mapping) = find_state_mapping(label) else {
            self.unexpected_symbol(var);
            return;
        };
        let value = atoi(expr);
        match Target::resolve(value, self.defs.states.len()) {
            Target::Real(state) => {
                let state_id = self.defs.states[state].id.clone();
                let slot = mapping.id as usize;
                write_field(
                    &mut self.defs.things,
                    target,
                    "Type",
                    mapping.id.name(),
                    state_id,
                    |t, v| t.states[slot] = v.clone(),
                );
            }
            Target::Discard => {
                log::warn!("Frame #{value} out of range, ignoring. (Create more State defs.)")
            }
        }
    }

    fn thing_sound(&mut self, target: Target, var: &str, label: &str, expr: &str) {
        let Some(mapping) = find_sound_mapping(label) else {
            self.unexpected_symbol(var);
            return;
        };
        let value = atoi(expr);
        match Target::resolve(value, self.defs.sounds.len()) {
            Target::Real(sound) => {
                let sound_id = self.defs.sounds[sound].id.clone();
                let slot = mapping.id as usize;
                write_field(
                    &mut self.defs.things,
                    target,
                    "Type",
                    mapping.id.name(),
                    sound_id,
                    |t, v| t.sounds[slot] = v.clone(),
                );
            }
            Target::Discard => {
                log::warn!("Sound #{value} out of range, ignoring. (Create more Sound defs.)")
            }
        }
    }

    /// Apply a `Bits` line; true when it sets SPAWNCEILING.
    fn thing_bits(&mut self, target: Target, expr: &str) -> bool {
        let (flags, changed) = self.parse_mobj_flags(expr);
        let spawn_ceiling = changed & 1 != 0
            && MobjFlags::from_word(flags[0]).contains(MobjFlags::SPAWNCEILING);
        for (group, word) in flags.into_iter().enumerate() {
            if changed & (1 << group) != 0 {
                write_field(
                    &mut self.defs.things,
                    target,
                    "Type",
                    &format!("flags[{group}]"),
                    word,
                    |t, v| t.flags[group] = *v,
                );
            }
        }
        spawn_ceiling
    }

    /// Decode a `Bits` value into flag words, returning the words and a
    /// mask of the groups it touched.
    pub(crate) fn parse_mobj_flags(&self, expr: &str) -> ([i32; NUM_MOBJ_FLAGS], u32) {
        let mut flags = [0i32; NUM_MOBJ_FLAGS];
        let mut changed = 0u32;

        for token in expr.split(FLAG_SEPARATORS).filter(|t| !t.is_empty()) {
            if let Some(value) = parse_int(token, 10, Trailing::Reject) {
                // The top four bits are the engine's; they need mnemonics.
                flags[0] |= value & MobjFlags::DEHACKED_MASK as i32;
                changed |= 1;
                continue;
            }
            match find_flag_mapping(token) {
                Some(flag) => {
                    flags[flag.group] |= flag.mask();
                    changed |= 1 << flag.group;
                }
                None => log::warn!(
                    "Unknown flag mnemonic \"{token}\" on line #{}, ignoring",
                    self.line_number()
                ),
            }
        }
        (flags, changed)
    }

    pub(crate) fn parse_frame(&mut self, target: Target) -> Result<(), DehError> {
        while let Some(line) = self.section_line() {
            let (var, expr) = self.parse_assignment(&line)?;
            let value = atoi(expr);
            let key = var.to_ascii_lowercase();

            if let Some(slot) = strip_prefix_ignore_case(var, "Unknown ") {
                let slot = atoi(slot);
                match usize::try_from(slot).ok().filter(|&s| s < NUM_STATE_MISC) {
                    Some(slot) => write_field(
                        &mut self.defs.states,
                        target,
                        "State",
                        var,
                        value,
                        |s, v| s.misc[slot] = *v,
                    ),
                    None => log::warn!(
                        "Misc slot #{slot} out of range on line #{}, ignoring",
                        self.line_number()
                    ),
                }
            } else if key.starts_with("args") {
                self.unsupported(var);
            } else {
                match key.as_str() {
                    "action pointer" | "particle event" => self.unsupported(var),
                    "duration" => write_field(
                        &mut self.defs.states,
                        target,
                        "State",
                        "Duration",
                        value,
                        |s, v| s.tics = *v,
                    ),
                    "next frame" => match Target::resolve(value, self.defs.states.len()) {
                        Target::Real(next) => {
                            let next_id = self.defs.states[next].id.clone();
                            write_field(
                                &mut self.defs.states,
                                target,
                                "State",
                                "Next frame",
                                next_id,
                                |s, v| s.next_state = v.clone(),
                            );
                        }
                        Target::Discard => log::warn!(
                            "Frame #{value} out of range, ignoring. (Create more State defs.)"
                        ),
                    },
                    "sprite number" => match Target::resolve(value, self.defs.sprites.len()) {
                        Target::Real(sprite) => {
                            let sprite_id = self.defs.sprites[sprite].id.clone();
                            write_field(
                                &mut self.defs.states,
                                target,
                                "State",
                                "Sprite number",
                                sprite_id,
                                |s, v| s.sprite = v.clone(),
                            );
                        }
                        Target::Discard => log::warn!(
                            "Sprite #{value} out of range, ignoring. (Create more Sprite defs.)"
                        ),
                    },
                    "sprite subnumber" => {
                        let frame = value & !FULLBRIGHT_BIT;
                        let bright = value & FULLBRIGHT_BIT != 0;
                        write_field(
                            &mut self.defs.states,
                            target,
                            "State",
                            "Sprite subnumber",
                            frame,
                            |s, v| {
                                s.frame = *v;
                                s.flags.set(StateFlags::FULLBRIGHT, bright);
                            },
                        );
                    }
                    _ => self.unexpected_symbol(var),
                }
            }
            self.skip_to_next_line();
        }
        Ok(())
    }

    pub(crate) fn parse_pointer(&mut self, target: Target) -> Result<(), DehError> {
        while let Some(line) = self.section_line() {
            let (var, expr) = self.parse_assignment(&line)?;
            if var.eq_ignore_ascii_case("Codep Frame") {
                let value = atoi(expr);
                let action = usize::try_from(value)
                    .ok()
                    .filter(|&idx| idx < NUMSTATES)
                    .and_then(|idx| self.ctx.original.action_names.get(idx))
                    .cloned();
                match action {
                    Some(action) => write_field(
                        &mut self.defs.states,
                        target,
                        "State",
                        "Action",
                        action,
                        |s, v| s.action = v.clone(),
                    ),
                    None => log::warn!("Codep frame #{value} out of range, ignoring."),
                }
            } else {
                self.unexpected_symbol(var);
            }
            self.skip_to_next_line();
        }
        Ok(())
    }

    pub(crate) fn parse_sprite(&mut self, target: Target) -> Result<(), DehError> {
        while let Some(line) = self.section_line() {
            let (var, expr) = self.parse_assignment(&line)?;
            if var.eq_ignore_ascii_case("Offset") {
                let value = atoi(expr);
                let table = usize::try_from(self.doom_version)
                    .ok()
                    .and_then(|v| SPRITE_NAME_TABLE_OFFSETS.get(v))
                    .copied()
                    .unwrap_or(SPRITE_NAME_TABLE_OFFSETS[3]);
                let sprite = (i64::from(value) - i64::from(table)
                    - i64::from(SPRITE_NAME_POINTER_BASE))
                    / 8;
                let name = usize::try_from(sprite)
                    .ok()
                    .filter(|&idx| idx < NUMSPRITES)
                    .and_then(|idx| self.ctx.original.sprite_names.get(idx))
                    .cloned();
                match name {
                    Some(name) => write_field(
                        &mut self.defs.sprites,
                        target,
                        "Sprite",
                        "Offset",
                        name,
                        |s, v| s.id = v.clone(),
                    ),
                    None => log::warn!("Sprite offset #{value} out of range, ignoring."),
                }
            } else {
                self.unexpected_symbol(var);
            }
            self.skip_to_next_line();
        }
        Ok(())
    }

    pub(crate) fn parse_sound(&mut self, target: Target) -> Result<(), DehError> {
        while let Some(line) = self.section_line() {
            let (var, expr) = self.parse_assignment(&line)?;
            let value = atoi(expr);
            let sounds = &mut self.defs.sounds;
            match var.to_ascii_lowercase().as_str() {
                "offset" => self.unsupported(var),
                "zero/one" => write_field(sounds, target, "Sound", "Zero/One", value, |s, v| {
                    s.group = *v
                }),
                "value" => write_field(sounds, target, "Sound", "Value", value, |s, v| {
                    s.priority = *v
                }),
                // 0 means "no link"; otherwise the linked sound is N-1.
                "zero 1" if value == 0 => {
                    write_field(sounds, target, "Sound", "Zero 1", "", |s, _| s.link.clear())
                }
                "zero 1" => match Target::resolve(value.saturating_sub(1), sounds.len()) {
                    Target::Real(link) => {
                        let link_id = sounds[link].id.clone();
                        write_field(sounds, target, "Sound", "Zero 1", link_id, |s, v| {
                            s.link = v.clone()
                        });
                    }
                    Target::Discard => log::warn!(
                        "Sound #{value} out of range, ignoring. (Create more Sound defs.)"
                    ),
                },
                "zero 2" => write_field(sounds, target, "Sound", "Zero 2", value, |s, v| {
                    s.link_pitch = *v
                }),
                "zero 3" => write_field(sounds, target, "Sound", "Zero 3", value, |s, v| {
                    s.link_volume = *v
                }),
                // Pointers into the original executable; nothing to apply.
                "zero 4" | "neg. one 1" | "neg. one 2" => {}
                _ => self.unexpected_symbol(var),
            }
            self.skip_to_next_line();
        }
        Ok(())
    }

    pub(crate) fn parse_ammo(&mut self, target: Option<AmmoType>) -> Result<(), DehError> {
        while let Some(line) = self.section_line() {
            let (var, expr) = self.parse_assignment(&line)?;
            let value = atoi(expr);
            let field = match var.to_ascii_lowercase().as_str() {
                "max ammo" => Some("Max ammo"),
                "per ammo" => Some("Clip ammo"),
                _ => None,
            };
            match (field, target) {
                (Some(field), Some(ammo)) => {
                    self.write_value(&format!("Player|{field}|{}", ammo.name()), value)
                }
                (Some(_), None) => {}
                (None, _) => self.unexpected_symbol(var),
            }
            self.skip_to_next_line();
        }
        Ok(())
    }

    pub(crate) fn parse_weapon(&mut self, target: Target) -> Result<(), DehError> {
        while let Some(line) = self.section_line() {
            let (var, expr) = self.parse_assignment(&line)?;
            let value = atoi(expr);

            if let Some(label) = strip_suffix_ignore_case(var, " frame") {
                match find_weapon_state_mapping(label) {
                    Some(mapping) => match Target::resolve(value, self.defs.states.len()) {
                        Target::Real(state) => {
                            if let Some(weapon) = target.index() {
                                let state_id = self.defs.states[state].id.clone();
                                let path = format!("Weapon Info|{weapon}|{}", mapping.id.name());
                                self.write_value(&path, state_id);
                            }
                        }
                        Target::Discard => log::warn!(
                            "Frame #{value} out of range, ignoring. (Create more State defs.)"
                        ),
                    },
                    None => self.unexpected_symbol(var),
                }
            } else {
                match var.to_ascii_lowercase().as_str() {
                    "ammo type" => match usize::try_from(value)
                        .ok()
                        .and_then(|idx| AMMO_TYPE_NAMES.get(idx))
                    {
                        Some(ammo) => {
                            if let Some(weapon) = target.index() {
                                self.write_value(&format!("Weapon Info|{weapon}|Type"), ammo);
                            }
                        }
                        None => log::warn!("Unknown ammo type #{value}, ignoring."),
                    },
                    "ammo per shot" => {
                        if let Some(weapon) = target.index() {
                            self.write_value(&format!("Weapon Info|{weapon}|Per shot"), value);
                        }
                    }
                    _ => self.unexpected_symbol(var),
                }
            }
            self.skip_to_next_line();
        }
        Ok(())
    }

    pub(crate) fn parse_misc(&mut self) -> Result<(), DehError> {
        while let Some(line) = self.section_line() {
            let (var, expr) = self.parse_assignment(&line)?;
            match find_value_mapping(var) {
                Some(mapping) => {
                    let mut value = atoi(expr);
                    if mapping.path == "AI|Infight" {
                        value = i32::from(value == INFIGHT_ON);
                    }
                    self.write_value(mapping.path, value);
                }
                None => log::warn!(
                    "Unknown value \"{var}\" on line #{}, ignoring",
                    self.line_number()
                ),
            }
            self.skip_to_next_line();
        }
        Ok(())
    }

    pub(crate) fn write_value(&mut self, path: &str, value: impl fmt::Display) {
        let text = value.to_string();
        log::debug!("Value \"{path}\" => \"{text}\"");
        self.defs.set_value(path, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_bounds() {
        assert_eq!(Target::resolve(0, 3), Target::Real(0));
        assert_eq!(Target::resolve(2, 3), Target::Real(2));
        assert_eq!(Target::resolve(3, 3), Target::Discard);
        assert_eq!(Target::resolve(-1, 3), Target::Discard);
        assert_eq!(Target::resolve(0, 0), Target::Discard);
    }

    #[test]
    fn discard_absorbs_writes() {
        let mut records = vec![1, 2, 3];
        assert_eq!(Target::Discard.with(&mut records, |r| *r = 9), None);
        assert_eq!(records, vec![1, 2, 3]);
        assert_eq!(Target::Real(1).with(&mut records, |r| *r = 9), Some(()));
        assert_eq!(records, vec![1, 9, 3]);
    }
}
