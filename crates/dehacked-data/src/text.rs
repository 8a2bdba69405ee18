//! `Text` sections: replace an original string with a new one.
//!
//! The old string identifies what is being replaced. It is tried against
//! each kind of replaceable name in turn and the first that recognizes it
//! wins.

use crate::names::{MUSIC_NAMES, SOUND_NAMES, find_finale_background, find_name};
use crate::reader::{DehReader, ReaderFlags};
use crate::text_mappings::find_text_mapping;
use crate::util::escape_newlines;

impl DehReader<'_> {
    /// Read the two blobs following a `Text` header and apply them.
    pub(crate) fn parse_text(&mut self, old_size: usize, new_size: usize) {
        let old = self.source.read_text_blob(old_size);
        let new = self.source.read_text_blob(new_size);

        if !self.flags.contains(ReaderFlags::NO_TEXT) {
            let applied = self.patch_finale_background_names(&old, &new)
                || self.patch_music_lump_names(&old, &new)
                || self.patch_sprite_names(&old, &new)
                || self.patch_sound_lump_names(&old, &new)
                || self.patch_text(&old, &new);
            if !applied {
                log::warn!(
                    "Failed to determine source for:\nText {old_size} {new_size}\n{old:?}\n{new:?}"
                );
            }
        }

        self.skip_to_next_line();
    }

    pub(crate) fn patch_finale_background_names(&mut self, old: &str, new: &str) -> bool {
        let Some(id) = find_finale_background(old) else {
            return false;
        };
        let Some(idx) = self.defs.value_index(id) else {
            return false;
        };
        log::debug!("Value \"{id}\" (finale background) => \"{new}\"");
        self.defs.values[idx].text = new.to_string();
        true
    }

    /// Rename the `D_` lump of every music that uses `old`.
    pub(crate) fn patch_music_lump_names(&mut self, old: &str, new: &str) -> bool {
        // Only the original executable's names can be patched.
        if find_name(MUSIC_NAMES, old).is_none() {
            return false;
        }
        let old_lump = format!("D_{old}");
        let new_lump = format!("D_{new}");
        if !self.ctx.resources.lump_exists(&new_lump) {
            log::warn!("Failed locating music lump \"{new_lump}\", ignoring");
            return false;
        }

        let mut patched = 0;
        for music in self
            .defs
            .musics
            .iter_mut()
            .filter(|m| m.lump_name.eq_ignore_ascii_case(&old_lump))
        {
            log::debug!("Music \"{}\" lump \"{}\" => \"{new_lump}\"", music.id, music.lump_name);
            music.lump_name.clone_from(&new_lump);
            patched += 1;
        }
        patched > 0
    }

    /// Sprite names are recognized but remapping them is not supported.
    pub(crate) fn patch_sprite_names(&self, old: &str, new: &str) -> bool {
        if old.len() != 4 || new.len() != 4 || !self.ctx.original.is_sprite_name(old) {
            return false;
        }
        log::warn!("Sprite name table remapping is not supported, \"{old}\" => \"{new}\" ignored");
        true
    }

    /// Rename the `DS` lump of every sound that uses `old`.
    pub(crate) fn patch_sound_lump_names(&mut self, old: &str, new: &str) -> bool {
        if find_name(SOUND_NAMES, old).is_none() {
            return false;
        }
        let old_lump = format!("DS{old}");
        let new_lump = format!("DS{new}");
        if !self.ctx.resources.lump_exists(&new_lump) {
            log::warn!("Failed locating sound lump \"{new_lump}\", ignoring");
            return false;
        }

        let mut patched = 0;
        for sound in self
            .defs
            .sounds
            .iter_mut()
            .filter(|s| s.lump_name.eq_ignore_ascii_case(&old_lump))
        {
            log::debug!("Sound \"{}\" lump \"{}\" => \"{new_lump}\"", sound.id, sound.lump_name);
            sound.lump_name.clone_from(&new_lump);
            patched += 1;
        }
        patched > 0
    }

    pub(crate) fn patch_text(&mut self, old: &str, new: &str) -> bool {
        let Some(mapping) = find_text_mapping(old) else {
            return false;
        };
        if mapping.is_disallowed() {
            log::debug!("Patching of {old:?} is not allowed, ignoring");
            return true;
        }
        let Some(idx) = self.defs.text_index(mapping.id) else {
            return false;
        };
        let text = escape_newlines(new);
        log::debug!("Text \"{}\" => \"{text}\"", mapping.id);
        self.defs.texts[idx].text = text;
        true
    }
}
