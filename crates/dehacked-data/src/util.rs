//! Numeric and token helpers shared by the section parsers.

use winnow::Parser;
use winnow::combinator::{alt, opt};
use winnow::error::ModalResult;
use winnow::token::{one_of, take_while};

/// What to do with characters left over after the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trailing {
    /// Anything but whitespace after the number is a failure.
    Reject,
    /// Trailing garbage is ignored, as C's `atoi` does.
    Allow,
}

/// Parse a leading integer in `base`. Base 0 picks the radix from the C
/// prefix convention (`0x` hex, leading `0` octal, otherwise decimal).
///
/// Returns `None` when no digits are present, when the value does not fit
/// an `i32`, or when `trailing` is [`Trailing::Reject`] and something other
/// than whitespace follows the number.
pub fn parse_int(text: &str, base: u32, trailing: Trailing) -> Option<i32> {
    let mut input = text.trim_start();
    let (negative, radix, digits) = signed_number(&mut input, base).ok()?;
    if trailing == Trailing::Reject && !input.trim().is_empty() {
        return None;
    }
    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    i32::try_from(if negative { -magnitude } else { magnitude }).ok()
}

/// Decimal integer with trailing garbage ignored; unparseable text is zero.
pub fn atoi(text: &str) -> i32 {
    parse_int(text, 10, Trailing::Allow).unwrap_or(0)
}

fn signed_number<'i>(input: &mut &'i str, base: u32) -> ModalResult<(bool, u32, &'i str)> {
    let sign = opt(one_of(['+', '-'])).parse_next(input)?;
    let radix = match base {
        0 => radix_prefix(input)?,
        16 => {
            opt(alt(("0x", "0X"))).parse_next(input)?;
            16
        }
        b => b,
    };
    let digits = take_while(1.., move |c: char| c.is_digit(radix)).parse_next(input)?;
    Ok((sign == Some('-'), radix, digits))
}

fn radix_prefix(input: &mut &str) -> ModalResult<u32> {
    if opt(alt(("0x", "0X"))).parse_next(input)?.is_some() {
        return Ok(16);
    }
    // The leading zero of an octal number stays in the digits.
    Ok(if input.starts_with('0') { 8 } else { 10 })
}

/// Split `s` on runs of `sep` into at most `max` tokens. When the limit is
/// reached the last token is the unsplit remainder of the string.
///
/// `max < 0` splits without limit, `max == 0` yields nothing and
/// `max == 1` yields `s` itself.
pub fn split_max(s: &str, sep: char, max: i32) -> Vec<&str> {
    match max {
        0 => return Vec::new(),
        1 => return vec![s],
        _ => {}
    }
    let limit = usize::try_from(max).ok();
    let mut tokens = Vec::new();
    let mut rest = s;
    loop {
        rest = rest.trim_start_matches(sep);
        if rest.is_empty() {
            break;
        }
        if limit.is_some_and(|l| tokens.len() + 1 == l) {
            tokens.push(rest);
            break;
        }
        match rest.find(sep) {
            Some(end) => {
                tokens.push(&rest[..end]);
                rest = &rest[end..];
            }
            None => {
                tokens.push(rest);
                break;
            }
        }
    }
    tokens
}

/// Case-insensitive ASCII prefix test.
pub fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Strip a case-insensitive ASCII prefix.
pub fn strip_prefix_ignore_case<'s>(s: &'s str, prefix: &str) -> Option<&'s str> {
    starts_with_ignore_case(s, prefix).then(|| &s[prefix.len()..])
}

/// Strip a case-insensitive ASCII suffix.
pub fn strip_suffix_ignore_case<'s>(s: &'s str, suffix: &str) -> Option<&'s str> {
    let split = s.len().checked_sub(suffix.len())?;
    (s.is_char_boundary(split) && s[split..].eq_ignore_ascii_case(suffix)).then(|| &s[..split])
}

/// Escape embedded newlines as the two characters `\n`.
pub fn escape_newlines(s: &str) -> String {
    s.replace('\n', "\\n")
}
