//! Canonical categories and the static lookup tables behind type inference.
//!
//! The tables are fixed for the life of the process and shared by every
//! caller, so they are expressed as `match` lookups and `const` slices
//! rather than built-at-runtime maps.

/// Recognized `TYPE=` parameter tokens, upper-cased as compared.
pub mod tags {
    pub const PREF: &str = "PREF";
    pub const FAX: &str = "FAX";

    pub const HOME: &str = "HOME";
    pub const WORK: &str = "WORK";
    pub const CELL: &str = "CELL";
    pub const CAR: &str = "CAR";
    pub const PAGER: &str = "PAGER";
    pub const ISDN: &str = "ISDN";

    pub const OTHER: &str = "OTHER";
    pub const CALLBACK: &str = "CALLBACK";
    pub const COMPANY_MAIN: &str = "COMPANY-MAIN";
    pub const RADIO: &str = "RADIO";
    pub const TTY_TDD: &str = "TTY-TDD";
    pub const ASSISTANT: &str = "ASSISTANT";

    // Valid on the wire, unknown to the store.
    pub const MODEM: &str = "MODEM";
    pub const BBS: &str = "BBS";
    pub const VIDEO: &str = "VIDEO";
}

/// Extension prefix for non-standard properties and tags.
pub const X_PREFIX: &str = "X-";

/// Canonical phone-number category in the contact store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneCategory {
    Home,
    Mobile,
    Work,
    FaxWork,
    FaxHome,
    Pager,
    Other,
    Callback,
    Car,
    CompanyMain,
    Isdn,
    Main,
    OtherFax,
    Radio,
    TtyTdd,
    Assistant,
}

impl PhoneCategory {
    /// Looks up the category for an upper-cased type tag.
    ///
    /// Only base tags map here; `PREF` and `FAX` are modifiers and the
    /// fax pairings are reached through them, never through a tag.
    #[must_use]
    pub fn for_tag(tag: &str) -> Option<Self> {
        match tag {
            tags::HOME => Some(Self::Home),
            tags::WORK => Some(Self::Work),
            tags::CELL => Some(Self::Mobile),
            tags::CAR => Some(Self::Car),
            tags::PAGER => Some(Self::Pager),
            tags::ISDN => Some(Self::Isdn),
            tags::OTHER => Some(Self::Other),
            tags::CALLBACK => Some(Self::Callback),
            tags::COMPANY_MAIN => Some(Self::CompanyMain),
            tags::RADIO => Some(Self::Radio),
            tags::TTY_TDD => Some(Self::TtyTdd),
            tags::ASSISTANT => Some(Self::Assistant),
            _ => None,
        }
    }

    /// Returns the type parameter the format carries verbatim for this
    /// category.
    ///
    /// Most categories serialize as parameter combinations (HOME+FAX and
    /// the like) and return `None` here.
    #[must_use]
    pub const fn vcard_type_param(self) -> Option<&'static str> {
        match self {
            Self::Car => Some(tags::CAR),
            Self::Pager => Some(tags::PAGER),
            Self::Isdn => Some(tags::ISDN),
            _ => None,
        }
    }
}

/// Resolved classification for one phone entry.
///
/// The free-text label exists exactly when no canonical category matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneKind {
    /// One of the closed store categories.
    Known(PhoneCategory),
    /// Upper-cased label of the first unrecognized tag.
    Custom(String),
}

/// Tags valid on the wire but deliberately unmapped to any category.
const FORMAT_ONLY_TAGS: &[&str] = &[tags::MODEM, tags::BBS, tags::VIDEO];

/// Returns whether an upper-cased tag is format-valid yet unknown to the
/// store. Such tags pass format validation but never resolve to a
/// category.
#[must_use]
pub fn is_format_only_type_tag(tag: &str) -> bool {
    FORMAT_ONLY_TAGS.contains(&tag)
}

// "MOBILE" plus the keitai spellings seen on Japanese handsets (kanji,
// katakana, half-width katakana). "_AUTO_CELL" is the legacy store label
// that marked mobile contact methods before the store grew a mobile
// category.
const MOBILE_LABELS: &[&str] = &[
    "MOBILE",
    "_AUTO_CELL",
    "\u{643A}\u{5E2F}\u{96FB}\u{8A71}",
    "\u{643A}\u{5E2F}",
    "\u{30B1}\u{30A4}\u{30BF}\u{30A4}",
    "\u{FF79}\u{FF72}\u{FF80}\u{FF72}",
];

/// Returns whether a custom label denotes a mobile contact method.
#[must_use]
pub fn is_mobile_label(label: &str) -> bool {
    MOBILE_LABELS.contains(&label)
}

/// Postal entry category in the contact store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AddressCategory {
    #[default]
    Home,
    Work,
    /// Free-text category; the label travels in its own store field.
    Custom(String),
}

impl AddressCategory {
    /// Store value for the category field.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
            Self::Custom(_) => "custom",
        }
    }
}

/// Instant-messaging protocols the store models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImProtocol {
    Aim,
    Msn,
    Yahoo,
    Skype,
    GoogleTalk,
    Icq,
    Jabber,
    Qq,
    Netmeeting,
}

impl ImProtocol {
    /// Returns the extension property name carrying handles for this
    /// protocol.
    #[must_use]
    pub fn property_name(self) -> &'static str {
        match self {
            Self::Aim => const_str::concat!(X_PREFIX, "AIM"),
            Self::Msn => const_str::concat!(X_PREFIX, "MSN"),
            Self::Yahoo => const_str::concat!(X_PREFIX, "YAHOO"),
            Self::Skype => const_str::concat!(X_PREFIX, "SKYPE-USERNAME"),
            Self::GoogleTalk => const_str::concat!(X_PREFIX, "GOOGLE-TALK"),
            Self::Icq => const_str::concat!(X_PREFIX, "ICQ"),
            Self::Jabber => const_str::concat!(X_PREFIX, "JABBER"),
            Self::Qq => const_str::concat!(X_PREFIX, "QQ"),
            Self::Netmeeting => const_str::concat!(X_PREFIX, "NETMEETING"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_lookup_known() {
        assert_eq!(PhoneCategory::for_tag("CELL"), Some(PhoneCategory::Mobile));
        assert_eq!(
            PhoneCategory::for_tag("COMPANY-MAIN"),
            Some(PhoneCategory::CompanyMain)
        );
    }

    #[test]
    fn tag_lookup_modifiers_are_not_categories() {
        assert_eq!(PhoneCategory::for_tag("PREF"), None);
        assert_eq!(PhoneCategory::for_tag("FAX"), None);
    }

    #[test]
    fn reverse_lookup_verbatim_params_only() {
        assert_eq!(PhoneCategory::Pager.vcard_type_param(), Some("PAGER"));
        assert_eq!(PhoneCategory::Isdn.vcard_type_param(), Some("ISDN"));
        assert_eq!(PhoneCategory::FaxHome.vcard_type_param(), None);
        assert_eq!(PhoneCategory::Mobile.vcard_type_param(), None);
    }

    #[test]
    fn format_only_tags() {
        assert!(is_format_only_type_tag("MODEM"));
        assert!(is_format_only_type_tag("BBS"));
        assert!(is_format_only_type_tag("VIDEO"));
        assert!(!is_format_only_type_tag("HOME"));
    }

    #[test]
    fn mobile_labels_include_keitai_spellings() {
        assert!(is_mobile_label("MOBILE"));
        assert!(is_mobile_label("_AUTO_CELL"));
        assert!(is_mobile_label("携帯電話"));
        assert!(is_mobile_label("ｹｲﾀｲ"));
        assert!(!is_mobile_label("mobile"));
    }

    #[test]
    fn im_property_names() {
        assert_eq!(ImProtocol::Aim.property_name(), "X-AIM");
        assert_eq!(ImProtocol::Skype.property_name(), "X-SKYPE-USERNAME");
        assert_eq!(ImProtocol::GoogleTalk.property_name(), "X-GOOGLE-TALK");
    }

    #[test]
    fn address_category_store_values() {
        assert_eq!(AddressCategory::Home.as_str(), "home");
        assert_eq!(AddressCategory::Custom("Cabin".into()).as_str(), "custom");
    }
}
