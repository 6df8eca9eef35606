//! Escaped-value encoding.

use crate::vcard::core::VCardVersion;

/// Escapes a single part for embedding in a delimited value.
///
/// Generation is minimal per revision: 2.1 escapes backslash and
/// semicolon; 3.0 additionally escapes comma and rewrites line breaks
/// (LF, CR, CRLF) to the `\n` escape. The splitter accepts more than
/// this function ever emits.
#[must_use]
pub fn escape_text(s: &str, version: VCardVersion) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => result.push_str(r"\\"),
            ';' => result.push_str(r"\;"),
            ',' if version == VCardVersion::V30 => result.push_str(r"\,"),
            '\n' if version == VCardVersion::V30 => result.push_str(r"\n"),
            '\r' if version == VCardVersion::V30 => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                result.push_str(r"\n");
            }
            other => result.push(other),
        }
    }

    result
}

/// Joins parts into one delimited value, escaping each part.
///
/// Inverse of [`crate::vcard::parse::split_escaped_list`] for the same
/// revision.
#[must_use]
pub fn join_escaped_list<I, S>(parts: I, version: VCardVersion) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .map(|p| escape_text(p.as_ref(), version))
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v30_escapes_delimiters() {
        assert_eq!(
            escape_text("a;b,c\\d", VCardVersion::V30),
            r"a\;b\,c\\d"
        );
    }

    #[test]
    fn v30_rewrites_line_breaks() {
        assert_eq!(escape_text("a\nb", VCardVersion::V30), r"a\nb");
        assert_eq!(escape_text("a\r\nb", VCardVersion::V30), r"a\nb");
        assert_eq!(escape_text("a\rb", VCardVersion::V30), r"a\nb");
    }

    #[test]
    fn v21_escapes_minimal_set() {
        assert_eq!(escape_text("a;b\\c", VCardVersion::V21), r"a\;b\\c");
        // Commas and newlines pass through in 2.1.
        assert_eq!(escape_text("a,b\nc", VCardVersion::V21), "a,b\nc");
    }

    #[test]
    fn join_with_delimiter() {
        assert_eq!(
            join_escaped_list(["a", "", "b;c"], VCardVersion::V30),
            r"a;;b\;c"
        );
    }
}
