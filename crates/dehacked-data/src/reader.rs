//! The patch reader: signature block, section dispatch and includes.
//!
//! A reader walks one patch buffer line by line. `self.line` always holds
//! the line under consideration, or `None` once the patch is exhausted;
//! each section parser leaves it on the first line that does not belong to
//! the section, which is then dispatched as the next header.

use bitflags::bitflags;
use dehacked_types::Definitions;

use crate::context::PatchContext;
use crate::error::DehError;
use crate::section::{Section, SectionKind};
use crate::source::PatchSource;
use crate::util::{
    Trailing, parse_int, split_max, starts_with_ignore_case, strip_prefix_ignore_case,
};

bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct ReaderFlags: u32 {
        /// Ignore `include` directives.
        const NO_INCLUDE = 0x1;
        /// Consume `Text` sections without applying them.
        const NO_TEXT = 0x2;
        /// NUL bytes are ordinary data rather than an end-of-file marker.
        const IGNORE_EOF = 0x4;
    }
}

const SIGNATURE: &str = "Patch File for DeHackEd v";

/// Assumed when a patch has no signature block.
const BEX_DOOM_VERSION: i32 = 19;
const BEX_PATCH_FORMAT: i32 = 6;

/// Normalized doom version used when the declared one is unknown (v1.9).
const DEFAULT_NORMALIZED_VERSION: i32 = 3;

/// Map a declared `Doom version` onto the index of the matching original
/// executable, or `None` when the version is not one DeHackEd knew.
pub fn normalize_doom_version(version: i32) -> Option<i32> {
    match version {
        16 => Some(0),
        17 => Some(2),
        19 => Some(3),
        20 => Some(1),
        21 => Some(4),
        _ => None,
    }
}

pub struct DehReader<'a> {
    pub(crate) defs: &'a mut Definitions,
    pub(crate) ctx: &'a mut PatchContext,
    pub(crate) source: PatchSource<'a>,
    pub(crate) flags: ReaderFlags,
    pub(crate) is_custom: bool,
    patch_version: i32,
    pub(crate) doom_version: i32,
    pub(crate) line: Option<String>,
}

impl<'a> DehReader<'a> {
    /// `is_custom` is false for patches bundled with the engine itself.
    pub fn new(
        defs: &'a mut Definitions,
        ctx: &'a mut PatchContext,
        patch: &'a [u8],
        is_custom: bool,
        flags: ReaderFlags,
    ) -> Self {
        ctx.depth += 1;
        Self {
            defs,
            ctx,
            source: PatchSource::new(patch, flags.contains(ReaderFlags::IGNORE_EOF)),
            flags,
            is_custom,
            patch_version: -1,
            doom_version: -1,
            line: None,
        }
    }

    /// Normalized doom version (0..=4) once the signature has been read.
    pub fn doom_version(&self) -> i32 {
        self.doom_version
    }

    pub fn patch_version(&self) -> i32 {
        self.patch_version
    }

    /// Parse the whole patch, applying it to the definitions as it goes.
    /// A syntax error abandons the rest of the patch; everything applied
    /// before it stays applied.
    pub fn parse(&mut self) -> Result<(), DehError> {
        self.skip_to_next_line();

        if self
            .line
            .as_deref()
            .is_some_and(|line| starts_with_ignore_case(line, SIGNATURE))
        {
            self.skip_to_next_line();
            self.parse_signature()?;
        } else {
            log::warn!("Patch is missing a signature, assuming BEX");
            self.doom_version = BEX_DOOM_VERSION;
            self.patch_version = BEX_PATCH_FORMAT;
        }

        self.doom_version = normalize_doom_version(self.doom_version).unwrap_or_else(|| {
            log::warn!(
                "Doom version {} unknown, assuming v1.9",
                self.doom_version
            );
            DEFAULT_NORMALIZED_VERSION
        });

        if self.patch_version != BEX_PATCH_FORMAT {
            log::warn!(
                "Unknown patch format {}, unexpected results may occur",
                self.patch_version
            );
        }

        log::info!(
            "Patch version: {} doom version index: {}{}",
            self.patch_version,
            self.doom_version,
            if self.flags.contains(ReaderFlags::NO_TEXT) {
                " (text patches disabled)"
            } else {
                ""
            }
        );

        while let Some(line) = self.line.clone() {
            match Section::classify(&line) {
                Section::Known(kind, arg) => self.parse_section(kind, arg)?,
                Section::Unknown(text) => {
                    log::warn!(
                        "Unknown section \"{text}\" encountered on line #{}, skipping",
                        self.line_number()
                    );
                    self.skip_to_next_section();
                }
            }
        }
        Ok(())
    }

    fn parse_signature(&mut self) -> Result<(), DehError> {
        while let Some(line) = self.section_line() {
            let (var, expr) = self.parse_assignment(&line)?;
            match var.to_ascii_lowercase().as_str() {
                "doom version" => {
                    self.doom_version = self.signature_number(expr, "version")?;
                }
                "patch format" => {
                    self.patch_version = self.signature_number(expr, "format")?;
                }
                // Written by WhackEd; nothing to apply.
                "engine config" | "iwad" => {}
                _ => self.unexpected_symbol(var),
            }
            self.skip_to_next_line();
        }
        Ok(())
    }

    fn signature_number(&self, expr: &str, what: &str) -> Result<i32, DehError> {
        parse_int(expr, 10, Trailing::Allow).ok_or_else(|| {
            self.syntax_error(format!("Expected {what} number but encountered \"{expr}\""))
        })
    }

    fn parse_section(&mut self, kind: SectionKind, arg: &str) -> Result<(), DehError> {
        match kind {
            SectionKind::Thing => {
                let target = self.resolve_thing(arg);
                self.skip_to_next_line();
                self.parse_thing(target)
            }
            SectionKind::Frame => {
                let target = self.resolve_frame(arg);
                self.skip_to_next_line();
                self.parse_frame(target)
            }
            SectionKind::Pointer => {
                let target = self.resolve_pointer(arg);
                self.skip_to_next_line();
                self.parse_pointer(target)
            }
            SectionKind::Sprite => {
                let target = self.resolve_sprite(arg);
                self.skip_to_next_line();
                self.parse_sprite(target)
            }
            SectionKind::Ammo => {
                let target = self.resolve_ammo(arg);
                self.skip_to_next_line();
                self.parse_ammo(target)
            }
            SectionKind::Weapon => {
                let target = self.resolve_weapon(arg);
                self.skip_to_next_line();
                self.parse_weapon(target)
            }
            SectionKind::Sound => {
                let target = self.resolve_sound(arg);
                self.skip_to_next_line();
                self.parse_sound(target)
            }
            SectionKind::Text => {
                let (old_size, new_size) = self.text_sizes(arg)?;
                self.parse_text(old_size, new_size);
                Ok(())
            }
            SectionKind::Misc => {
                self.skip_to_next_line();
                self.parse_misc()
            }
            SectionKind::Cheat => {
                // Chex Quest ships its own cheat patch; don't nag about it.
                let bundled_chex = !self.is_custom && self.ctx.game_id.eq_ignore_ascii_case("chex");
                if !bundled_chex {
                    log::warn!("[Cheat] patches are not supported");
                }
                self.skip_to_next_section();
                Ok(())
            }
            SectionKind::Include => {
                self.parse_include(arg);
                self.skip_to_next_line();
                Ok(())
            }
            SectionKind::CodePointers => {
                self.read_line();
                self.parse_code_pointers()
            }
            SectionKind::Pars => {
                self.read_line();
                self.parse_pars();
                Ok(())
            }
            SectionKind::Strings => {
                self.read_line();
                self.parse_strings()
            }
            SectionKind::Helper | SectionKind::Sprites => {
                log::warn!("{} patches are not supported", kind.keyword());
                self.skip_to_next_section();
                Ok(())
            }
            SectionKind::Sounds => {
                self.read_line();
                self.parse_sound_remaps();
                Ok(())
            }
            SectionKind::Music => {
                self.read_line();
                self.parse_music_remaps();
                Ok(())
            }
        }
    }

    fn text_sizes(&self, arg: &str) -> Result<(usize, usize), DehError> {
        let args = split_max(arg, ' ', 2);
        let old_size = args
            .first()
            .and_then(|s| parse_int(s, 10, Trailing::Allow))
            .ok_or_else(|| self.syntax_error("Expected old text size"))?;
        let new_size = args
            .get(1)
            .and_then(|s| parse_int(s, 10, Trailing::Allow))
            .ok_or_else(|| self.syntax_error("Expected new text size"))?;
        Ok((
            usize::try_from(old_size).unwrap_or(0),
            usize::try_from(new_size).unwrap_or(0),
        ))
    }

    fn parse_include(&mut self, arg: &str) {
        if self.flags.contains(ReaderFlags::NO_INCLUDE) {
            log::debug!("Skipping include \"{arg}\", includes are disabled");
            return;
        }

        let max = self.ctx.max_include_depth;
        if self.ctx.depth > max {
            if max == 0 {
                log::warn!("Sorry, DeHackEd include directives are not supported, ignoring");
            } else {
                log::warn!(
                    "Sorry, there is a limit of {max} nested includes, include directive on line #{} ignored",
                    self.line_number()
                );
            }
            return;
        }

        // Only the end-of-file handling carries over into the included file.
        let mut child_flags = self.flags & ReaderFlags::IGNORE_EOF;
        let mut file = arg;
        if let Some(rest) = strip_prefix_ignore_case(file, "notext ") {
            child_flags |= ReaderFlags::NO_TEXT;
            file = rest.trim_start();
        }
        let file = file.trim_end();
        if file.is_empty() {
            log::warn!(
                "Include directive missing filename on line #{}",
                self.line_number()
            );
            return;
        }

        let mut patch = match self.ctx.resources.read_include(file) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::warn!("Failed opening \"{file}\" for read, aborting include: {err}");
                return;
            }
        };
        patch.push(0);

        log::info!("Including \"{file}\"...");
        let mut child = DehReader::new(
            &mut *self.defs,
            &mut *self.ctx,
            &patch,
            self.is_custom,
            child_flags,
        );
        if let Err(err) = child.parse() {
            log::warn!("Include \"{file}\": {err}");
        }
    }

    pub(crate) fn line_number(&self) -> usize {
        self.source.line_number()
    }

    pub(crate) fn read_line(&mut self) {
        self.line = self.source.read_line();
    }

    pub(crate) fn skip_to_next_line(&mut self) {
        self.line = self.source.skip_to_next_line();
    }

    /// The current line if it is still part of a `key = value` section.
    pub(crate) fn section_line(&self) -> Option<String> {
        self.line.clone().filter(|line| line.contains('='))
    }

    /// The current line if it is still part of a blank-terminated BEX
    /// section.
    pub(crate) fn bex_line(&self) -> Option<String> {
        self.line.clone().filter(|line| !line.trim().is_empty())
    }

    pub(crate) fn skip_to_next_section(&mut self) {
        loop {
            self.skip_to_next_line();
            if self.section_line().is_none() {
                break;
            }
        }
    }

    /// Split `var = expr`, both sides trimmed and non-empty.
    pub(crate) fn parse_assignment<'l>(
        &self,
        line: &'l str,
    ) -> Result<(&'l str, &'l str), DehError> {
        let (var, expr) = line.split_once('=').ok_or_else(|| {
            self.syntax_error(format!("Expected assignment statement but encountered \"{line}\""))
        })?;
        let var = var.trim();
        if var.is_empty() {
            return Err(self.syntax_error("Expected identifier to the left of '='"));
        }
        let expr = expr.trim();
        if expr.is_empty() {
            return Err(self.syntax_error("Expected value to the right of '='"));
        }
        Ok((var, expr))
    }

    pub(crate) fn syntax_error(&self, msg: impl Into<String>) -> DehError {
        DehError::syntax(self.line_number(), msg)
    }

    pub(crate) fn unexpected_symbol(&self, var: &str) {
        log::warn!(
            "Unexpected symbol \"{var}\" encountered on line #{}, ignoring",
            self.line_number()
        );
    }

    pub(crate) fn unsupported(&self, var: &str) {
        log::warn!(
            "DeHackEd \"{var}\" is not supported, ignoring (line #{})",
            self.line_number()
        );
    }
}

impl Drop for DehReader<'_> {
    fn drop(&mut self) {
        self.ctx.depth = self.ctx.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_table() {
        assert_eq!(normalize_doom_version(16), Some(0));
        assert_eq!(normalize_doom_version(17), Some(2));
        assert_eq!(normalize_doom_version(19), Some(3));
        assert_eq!(normalize_doom_version(20), Some(1));
        assert_eq!(normalize_doom_version(21), Some(4));
    }

    #[test]
    fn unknown_versions_rejected() {
        for v in [-1, 0, 15, 18, 22, 190] {
            assert_eq!(normalize_doom_version(v), None, "version {v}");
        }
    }

    #[test]
    fn flags_are_distinct() {
        let all = ReaderFlags::NO_INCLUDE | ReaderFlags::NO_TEXT | ReaderFlags::IGNORE_EOF;
        assert_eq!(all.bits().count_ones(), 3);
    }
}
