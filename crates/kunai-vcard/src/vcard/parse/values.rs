//! Escaped-value decoding.

use crate::vcard::core::VCardVersion;

/// Resolves a backslash escape for the given format revision.
///
/// Returns the literal the escape stands for, or `None` when the pair is
/// not a recognized escape (the caller keeps the backslash).
///
/// vCard 2.1 recognizes the minimal set `\\`, `\;`, `\:`, `\,`. vCard 3.0
/// maps `\n`/`\N` to a newline and any other escaped character to itself.
#[must_use]
pub fn unescape_char(version: VCardVersion, c: char) -> Option<char> {
    match version {
        VCardVersion::V21 => match c {
            '\\' | ';' | ':' | ',' => Some(c),
            _ => None,
        },
        VCardVersion::V30 => match c {
            'n' | 'N' => Some('\n'),
            other => Some(other),
        },
    }
}

/// Splits an escaped, semicolon-delimited value into unescaped parts.
///
/// An unescaped `;` separates parts and the final part is always emitted,
/// so `"a;;b"` yields `["a", "", "b"]` and a value with no `;` yields a
/// single part. Unrecognized escapes keep their backslash; the function
/// never fails.
#[must_use]
pub fn split_escaped_list(raw: &str, version: VCardVersion) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek().and_then(|&next| unescape_char(version, next)) {
                Some(unescaped) => {
                    chars.next();
                    current.push(unescaped);
                }
                None => current.push(c),
            }
        } else if c == ';' {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}
