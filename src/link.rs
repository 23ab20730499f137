//! Link classification for `href` values.
//!
//! The population routines and the interaction binders both need to know
//! whether a link is the bare `#` placeholder, an in-page fragment, or an
//! outbound target.

/// Scheme prefix for e-mail links
pub const MAILTO: &str = "mailto:";

/// Scheme prefix for telephony links
pub const TEL: &str = "tel:";

/// The non-navigating placeholder href
pub const PLACEHOLDER: &str = "#";

/// Link type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkKind {
    #[default]
    None,
    Placeholder, // #
    Fragment,    // #anchor
    Absolute,    // /path
    Relative,    // ./file
    External,    // https://...
    Email,       // mailto:...
    Phone,       // tel:...
}

impl LinkKind {
    /// Infer link kind from an href string
    pub fn from_href(href: &str) -> Self {
        let href = href.trim();
        if href.is_empty() {
            return Self::None;
        }
        if href == PLACEHOLDER {
            Self::Placeholder
        } else if href.starts_with('#') {
            Self::Fragment
        } else if href.starts_with("http://") || href.starts_with("https://") || href.starts_with("//") {
            Self::External
        } else if href.starts_with(MAILTO) {
            Self::Email
        } else if href.starts_with(TEL) {
            Self::Phone
        } else if href.starts_with('/') {
            Self::Absolute
        } else {
            Self::Relative
        }
    }

    /// Whether the link goes somewhere (not empty, not the `#` placeholder)
    pub fn is_navigable(&self) -> bool {
        !matches!(self, Self::None | Self::Placeholder)
    }

    pub fn is_in_page(&self) -> bool {
        matches!(self, Self::Placeholder | Self::Fragment)
    }
}

/// `mailto:` link for an address, taken verbatim.
pub fn mailto(email: &str) -> String {
    format!("{MAILTO}{email}")
}

/// `tel:` link for a phone number with all whitespace removed.
pub fn tel(phone: &str) -> String {
    let digits: String = phone.chars().filter(|&c| !is_dial_space(c)).collect();
    format!("{TEL}{digits}")
}

/// Whitespace as browsers strip it from dial strings: Unicode `White_Space`
/// minus NEL (U+0085), plus the byte-order mark (U+FEFF).
fn is_dial_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// The id a fragment href points at (`"#contact"` → `Some("contact")`).
///
/// The bare placeholder and non-fragment hrefs yield `None`.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
