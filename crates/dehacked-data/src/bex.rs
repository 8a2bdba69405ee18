//! BEX bracketed sections.
//!
//! Unlike the classic sections these run until a blank line rather than
//! until the first line without `=`, and whole-line `#` comments are
//! skipped inside them.

use dehacked_types::compose_map_uri;

use crate::error::DehError;
use crate::names::is_finale_background_id;
use crate::reader::DehReader;
use crate::sections::Target;
use crate::util::{
    Trailing, parse_int, split_max, starts_with_ignore_case, strip_prefix_ignore_case,
};

/// Longest action function name a `[CODEPTR]` entry may give.
const MAX_ACTION_NAME_LEN: usize = 32;

impl DehReader<'_> {
    /// `[CODEPTR]`: `Frame N = ActionName` lines.
    pub(crate) fn parse_code_pointers(&mut self) -> Result<(), DehError> {
        while let Some(line) = self.bex_line() {
            if !line.starts_with('#') {
                let (var, expr) = self.parse_assignment(&line)?;
                match strip_prefix_ignore_case(var, "Frame ") {
                    Some(num) => {
                        let state_num = parse_int(num, 10, Trailing::Allow).unwrap_or(-1);
                        self.set_code_pointer(state_num, expr);
                    }
                    None => self.unexpected_symbol(var),
                }
            }
            self.read_line();
        }
        self.skip_to_next_section();
        Ok(())
    }

    fn set_code_pointer(&mut self, state_num: i32, name: &str) {
        let Target::Real(state) = Target::resolve(state_num, self.defs.states.len()) else {
            log::warn!("Frame #{state_num} out of range, ignoring. (Create more State defs.)");
            return;
        };

        let mut action: String = if starts_with_ignore_case(name, "A_") {
            name.to_string()
        } else {
            format!("A_{name}")
        };
        if let Some((cut, _)) = action.char_indices().nth(MAX_ACTION_NAME_LEN) {
            action.truncate(cut);
        }

        let action = if action.eq_ignore_ascii_case("A_NULL") {
            "NULL".to_string()
        } else {
            match self.defs.action(&action) {
                Some(known) => known.to_string(),
                None => {
                    log::warn!(
                        "Unknown action function \"{action}\" on line #{}, ignoring",
                        self.line_number()
                    );
                    return;
                }
            }
        };

        let record = &mut self.defs.states[state];
        log::debug!("State #{state} \"{}\" action => {action}", record.id);
        record.action = action;
    }

    /// `[PARS]`: `par [episode] map seconds` lines. A bad line is reported
    /// and skipped.
    pub(crate) fn parse_pars(&mut self) {
        while let Some(line) = self.bex_line() {
            if !line.starts_with('#') {
                if let Err(err) = self.parse_par(&line) {
                    log::warn!("{err}");
                }
            }
            self.read_line();
        }
        self.skip_to_next_section();
    }

    fn parse_par(&mut self, line: &str) -> Result<(), DehError> {
        let Some(rest) = strip_prefix_ignore_case(line, "par") else {
            self.unexpected_symbol(line);
            return Ok(());
        };
        let rest = rest.trim_start();
        if rest.is_empty() {
            return Err(self.syntax_error("Expected format: par [episode] [map] [parTime]"));
        }

        let args = split_max(rest, ' ', 3);
        if args.len() < 2 {
            return Err(self.syntax_error(format!("Invalid par \"{rest}\"")));
        }

        let number = |text: &str| {
            parse_int(text, 10, Trailing::Allow).ok_or_else(|| {
                self.syntax_error(format!("Expected number but encountered \"{text}\""))
            })
        };
        // With three arguments the first is the episode.
        let (episode, map, seconds) = if args.len() == 3 {
            (number(args[0])?, number(args[1])?, number(args[2])?)
        } else {
            (0, number(args[0])?, number(args[1])?)
        };

        let uri = compose_map_uri(episode, map);
        match self.defs.map_info_index(&uri) {
            Some(idx) => {
                log::debug!("MapInfo \"{uri}\" par time => {seconds}");
                self.defs.map_infos[idx].par_time = seconds as f32;
            }
            None => log::warn!("Failed locating MapInfo for \"{uri}\" (invalid map), ignoring"),
        }
        Ok(())
    }

    /// `[STRINGS]`: `NAME = value` lines, where a value ending in `\`
    /// continues on the next line.
    pub(crate) fn parse_strings(&mut self) -> Result<(), DehError> {
        let mut pending: Option<(String, String)> = None;

        while let Some(line) = self.bex_line() {
            if !line.starts_with('#') {
                let (var, mut value) = match pending.take() {
                    Some((var, mut value)) => {
                        value.push_str(line.trim());
                        (var, value)
                    }
                    None => {
                        let (var, expr) = self.parse_assignment(&line)?;
                        (var.to_string(), expr.to_string())
                    }
                };
                if value.ends_with('\\') {
                    value.pop();
                    pending = Some((var, value));
                } else {
                    self.set_string(&var, &value);
                }
            }
            self.read_line();
        }
        if let Some((var, value)) = pending {
            self.set_string(&var, &value);
        }

        self.skip_to_next_section();
        Ok(())
    }

    fn set_string(&mut self, name: &str, value: &str) {
        if let Some(idx) = self.defs.text_index(name) {
            let text = &mut self.defs.texts[idx];
            log::debug!("Text \"{}\" => \"{value}\"", text.id);
            text.text = value.to_string();
        } else if is_finale_background_id(name) {
            self.write_value(&name.to_ascii_uppercase(), value);
        } else {
            log::warn!(
                "Failed to determine source for text \"{name}\" on line #{}, ignoring",
                self.line_number()
            );
        }
    }

    /// `[SOUNDS]`: `old = new` sound lump remaps.
    pub(crate) fn parse_sound_remaps(&mut self) {
        self.parse_lump_remaps("sound", Self::patch_sound_lump_names);
    }

    /// `[MUSIC]`: `old = new` music lump remaps.
    pub(crate) fn parse_music_remaps(&mut self) {
        self.parse_lump_remaps("music", Self::patch_music_lump_names);
    }

    fn parse_lump_remaps(&mut self, what: &str, remap: fn(&mut Self, &str, &str) -> bool) {
        while let Some(line) = self.bex_line() {
            if !line.starts_with('#') {
                match self.parse_assignment(&line) {
                    Ok((old, new)) => {
                        if !remap(self, old, new) {
                            log::warn!(
                                "Failed remapping {what} \"{old}\" to \"{new}\" on line #{}",
                                self.line_number()
                            );
                        }
                    }
                    Err(err) => log::warn!("{err}"),
                }
            }
            self.read_line();
        }
        self.skip_to_next_section();
    }
}
