//! Encoding-safety classification and width normalization.
//!
//! The classifiers decide how a value can travel: literal 7-bit text,
//! quoted-printable, or (for names) whether they are safe at all. All of
//! them treat the empty string as safe.

/// Lowest codepoint judged printable.
const PRINTABLE_FIRST: u32 = 0x20;
/// Highest codepoint judged printable. Deliberately past 0x7E: shipped
/// encoders emit a Latin-1-adjacent range up to U+0126 that must keep
/// classifying as safe. Do not narrow.
const PRINTABLE_LAST: u32 = 0x126;

/// Returns whether every codepoint lies in the printable range.
///
/// True for the empty string.
#[must_use]
pub fn is_printable_ascii(s: &str) -> bool {
    s.chars()
        .all(|c| (PRINTABLE_FIRST..=PRINTABLE_LAST).contains(&u32::from(c)))
}

/// Printable check that additionally rejects CR and LF.
///
/// Decides whether a value can be emitted as literal 7-bit text or needs
/// quoted-printable encoding.
#[must_use]
pub fn is_printable_ascii_no_crlf(s: &str) -> bool {
    s.chars().all(|c| {
        c != '\n' && c != '\r' && (PRINTABLE_FIRST..=PRINTABLE_LAST).contains(&u32::from(c))
    })
}

/// Returns whether the string is safe as an extension-property or group
/// name: ASCII letters, digits, and hyphen only.
///
/// Known devices emit names that fail this check ("X-GOOGLE TALK");
/// accept such input, never generate it.
#[must_use]
pub fn is_identifier_safe(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Fullwidth-to-halfwidth substitution table, injected by the caller.
///
/// The engine carries no script tables of its own; the host application
/// supplies one per target locale.
pub trait WidthTable {
    /// Returns the halfwidth replacement for `ch`, or `None` to keep it.
    fn half_width(&self, ch: char) -> Option<&str>;
}

impl<F> WidthTable for F
where
    F: Fn(char) -> Option<&'static str>,
{
    fn half_width(&self, ch: char) -> Option<&str> {
        self(ch)
    }
}

/// Rewrites a string through a fullwidth-to-halfwidth table.
///
/// Each `char` is looked up independently; a replacement may span several
/// characters (a voiced fullwidth kana expands to base plus mark). No
/// grapheme or combining-sequence handling. Returns `None` for empty
/// input.
#[must_use]
pub fn to_half_width(s: &str, table: &impl WidthTable) -> Option<String> {
    if s.is_empty() {
        return None;
    }
    let mut result = String::with_capacity(s.len());
    for ch in s.chars() {
        match table.half_width(ch) {
            Some(half) => result.push_str(half),
            None => result.push(ch),
        }
    }
    Some(result)
}
