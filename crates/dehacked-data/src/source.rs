//! Line reader over a raw patch buffer.
//!
//! Patches are Latin-1 text. A NUL byte marks a logical end of file unless
//! the reader tolerates embedded NULs (`ignore_eof`), in which case they are
//! stripped from every line.

/// Cursor over the bytes of one patch.
pub struct PatchSource<'a> {
    data: &'a [u8],
    pos: usize,
    line_number: usize,
    ignore_eof: bool,
}

impl<'a> PatchSource<'a> {
    pub fn new(data: &'a [u8], ignore_eof: bool) -> Self {
        Self {
            data,
            pos: 0,
            line_number: 0,
            ignore_eof,
        }
    }

    /// Number of line breaks consumed so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    fn at_real_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    pub fn at_end(&self) -> bool {
        if self.at_real_end() {
            return true;
        }
        !self.ignore_eof && self.data[self.pos] == 0
    }

    fn current_char(&self) -> char {
        self.data.get(self.pos).map_or('\0', |&b| b as char)
    }

    pub fn advance(&mut self) {
        if self.at_end() {
            return;
        }
        match self.data[self.pos] {
            0 if self.pos != self.data.len() - 1 => {
                log::warn!("Unexpected EOF encountered on line #{}", self.line_number);
            }
            b'\n' => self.line_number += 1,
            _ => {}
        }
        self.pos += 1;
    }

    fn skip_to_eol(&mut self) {
        while !self.at_end() && self.current_char() != '\n' {
            self.advance();
        }
    }

    /// Read the next physical line, without its terminator. Returns `None`
    /// when called at the end of the patch.
    pub fn read_line(&mut self) -> Option<String> {
        if self.at_end() {
            return None;
        }
        let start = self.pos;
        self.skip_to_eol();

        let mut end = self.pos;
        if end > start && self.data[end - 1] == b'\r' {
            end -= 1;
        }
        let raw = &self.data[start..end];
        let line = if self.ignore_eof {
            raw.iter().filter(|&&b| b != 0).map(|&b| b as char).collect()
        } else {
            raw.iter().map(|&b| b as char).collect()
        };

        if self.current_char() == '\n' {
            self.advance();
        }
        Some(line)
    }

    /// Read lines until one is neither blank nor a whole-line `#` comment.
    pub fn skip_to_next_line(&mut self) -> Option<String> {
        loop {
            let line = self.read_line()?;
            if !line.trim().is_empty() && !line.starts_with('#') {
                return Some(line);
            }
        }
    }

    /// Read `len` characters verbatim for a `Text` replacement. Carriage
    /// returns are dropped but each one extends the read by a byte, so the
    /// declared length counts logical characters.
    pub fn read_text_blob(&mut self, len: usize) -> String {
        let mut result = String::new();
        let mut remaining = len;
        while remaining > 0 && !self.at_end() {
            let c = self.current_char();
            if c == '\r' {
                remaining += 1;
            } else {
                result.push(c);
            }
            self.advance();
            remaining -= 1;
        }
        result.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lines_and_counts() {
        let mut src = PatchSource::new(b"one\r\ntwo\nthree", false);
        assert_eq!(src.read_line().as_deref(), Some("one"));
        assert_eq!(src.line_number(), 1);
        assert_eq!(src.read_line().as_deref(), Some("two"));
        assert_eq!(src.read_line().as_deref(), Some("three"));
        assert_eq!(src.read_line(), None);
    }

    #[test]
    fn nul_is_logical_eof() {
        let mut src = PatchSource::new(b"one\n\0garbage\n", false);
        assert_eq!(src.read_line().as_deref(), Some("one"));
        assert!(src.at_end());
        assert_eq!(src.read_line(), None);
    }

    #[test]
    fn ignore_eof_strips_nul() {
        let mut src = PatchSource::new(b"o\0ne\n\0two\n", true);
        assert_eq!(src.read_line().as_deref(), Some("one"));
        assert_eq!(src.read_line().as_deref(), Some("two"));
        assert_eq!(src.read_line(), None);
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let mut src = PatchSource::new(b"\n   \n# comment\n  # indented\n", false);
        // Only a '#' in the first column marks a comment.
        assert_eq!(src.skip_to_next_line().as_deref(), Some("  # indented"));
        assert_eq!(src.skip_to_next_line(), None);
    }

    #[test]
    fn blob_of_zero_consumes_nothing() {
        let mut src = PatchSource::new(b"abc", false);
        assert_eq!(src.read_text_blob(0), "");
        assert_eq!(src.position(), 0);
    }

    #[test]
    fn blob_compensates_for_carriage_returns() {
        let data = b"ab\r\ncd\r\nef";
        let mut src = PatchSource::new(data, false);
        // 6 logical characters: a b \n c d \n, plus two CRs.
        let blob = src.read_text_blob(6);
        assert_eq!(blob, "ab\ncd");
        assert_eq!(src.position(), 8);
        assert!(!blob.contains('\r'));
    }

    #[test]
    fn blob_is_trimmed() {
        let mut src = PatchSource::new(b"  PISG\n", false);
        assert_eq!(src.read_text_blob(7), "PISG");
    }

    #[test]
    fn blob_stops_at_eof() {
        let mut src = PatchSource::new(b"ab", false);
        assert_eq!(src.read_text_blob(10), "ab");
        assert!(src.at_end());
    }
}
