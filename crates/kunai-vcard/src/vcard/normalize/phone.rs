//! Phone-type inference from free-text type tags.

use crate::vcard::core::category::{PhoneCategory, PhoneKind, X_PREFIX, tags};

/// Resolves the canonical phone kind for one entry from its type tags and
/// the number itself.
///
/// Tags are case-folded to upper. `PREF` and `FAX` act as modifiers
/// wherever they appear and never pick the base category themselves. A
/// `PAGER` tag wins outright when the number looks like a pager bridge
/// (`digits@domain`, the `@` strictly inside); otherwise the first table
/// hit sticks, with later hits only replacing a custom placeholder. The
/// first unrecognized tag becomes the custom label. With no base tag at
/// all the entry defaults to `Main` under `PREF`, else `Home`. `FAX`
/// remaps the home, work, and other categories to their fax pairings and
/// leaves everything else alone.
///
/// The precedence order here is load-bearing: reordering it changes which
/// category wins for conflicting tag sets.
#[must_use]
#[tracing::instrument(skip(types))]
pub fn resolve_phone_kind<'a, I>(types: I, number: &str) -> PhoneKind
where
    I: IntoIterator<Item = &'a str>,
{
    let mut chosen: Option<PhoneKind> = None;
    let mut is_fax = false;
    let mut has_pref = false;

    for raw in types {
        let tag = raw.to_uppercase();
        if tag == tags::PREF {
            has_pref = true;
        } else if tag == tags::FAX {
            is_fax = true;
        } else {
            // The extension prefix is stripped only while no base has
            // been chosen, matching how conflicting X- tags resolve.
            let base = if chosen.is_none() {
                tag.strip_prefix(X_PREFIX).unwrap_or(&tag)
            } else {
                tag.as_str()
            };
            if base.is_empty() {
                continue;
            }
            match PhoneCategory::for_tag(base) {
                Some(candidate) => {
                    let pager_bridge =
                        candidate == PhoneCategory::Pager && has_inner_at(number);
                    if pager_bridge
                        || chosen.is_none()
                        || matches!(&chosen, Some(PhoneKind::Custom(_)))
                    {
                        chosen = Some(PhoneKind::Known(candidate));
                    }
                }
                None => {
                    if chosen.is_none() {
                        chosen = Some(PhoneKind::Custom(base.to_string()));
                    }
                }
            }
        }
    }

    let mut kind = chosen.unwrap_or(PhoneKind::Known(if has_pref {
        PhoneCategory::Main
    } else {
        PhoneCategory::Home
    }));

    if is_fax {
        if let PhoneKind::Known(category) = &mut kind {
            *category = match *category {
                PhoneCategory::Home => PhoneCategory::FaxHome,
                PhoneCategory::Work => PhoneCategory::FaxWork,
                PhoneCategory::Other => PhoneCategory::OtherFax,
                other => other,
            };
        }
    }

    tracing::debug!(?kind, "resolved phone type");
    kind
}

/// `@` strictly between the first and last character, as in
/// `1111@domain.com` but not `@domain.com` or `1111@`.
fn has_inner_at(number: &str) -> bool {
    number
        .find('@')
        .is_some_and(|i| i > 0 && i < number.len() - 1)
}
