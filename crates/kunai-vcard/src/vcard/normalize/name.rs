//! Name ordering and display-name composition.

use crate::vcard::core::NameOrder;
use crate::vcard::core::structured::NameParts;
use crate::vcard::text::is_printable_ascii;

/// Orders the three name components for display.
///
/// Japanese ordering keeps family-first, except that pure Latin-script
/// names read in Western order even under a Japanese policy.
#[must_use]
pub fn order_name_parts<'a>(
    order: NameOrder,
    family: &'a str,
    middle: &'a str,
    given: &'a str,
) -> [&'a str; 3] {
    match order {
        NameOrder::Japanese => {
            if is_printable_ascii(family) && is_printable_ascii(given) {
                [given, middle, family]
            } else {
                [family, middle, given]
            }
        }
        NameOrder::European => [middle, given, family],
        NameOrder::Western => [given, middle, family],
    }
}

/// Composes a display name from the ordered components plus prefix and
/// suffix.
///
/// Empty pieces are skipped and the rest joined with single spaces; all
/// pieces empty yields the empty string.
#[must_use]
pub fn compose_display_name(
    order: NameOrder,
    family: &str,
    middle: &str,
    given: &str,
    prefix: &str,
    suffix: &str,
) -> String {
    let ordered = order_name_parts(order, family, middle, given);
    let mut result = String::new();
    for piece in std::iter::once(prefix)
        .chain(ordered)
        .chain(std::iter::once(suffix))
    {
        if piece.is_empty() {
            continue;
        }
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(piece);
    }
    result
}

/// Prefix- and suffix-free convenience over [`compose_display_name`].
#[must_use]
pub fn compose_name(order: NameOrder, family: &str, middle: &str, given: &str) -> String {
    compose_display_name(order, family, middle, given, "", "")
}

impl NameParts {
    /// Formats this name for display under the given ordering policy.
    #[must_use]
    pub fn display_name(&self, order: NameOrder) -> String {
        compose_display_name(
            order,
            &self.family,
            &self.middle,
            &self.given,
            &self.prefix,
            &self.suffix,
        )
    }
}
