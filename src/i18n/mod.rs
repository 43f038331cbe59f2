use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod translate;

pub use translate::Translate;

/// Raised when a locale outside the supported set is requested, either by
/// parsing an unknown tag or by looking up a label for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("locale {tag} is not supported")]
pub struct UnsupportedLocaleError {
    pub tag: String,
}

/// The locales the label catalog ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    En,
    De,
    Fr,
    It,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::En, Locale::De, Locale::Fr, Locale::It];

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
            Locale::Fr => "fr",
            Locale::It => "it",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Locale {
    type Err = UnsupportedLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnsupportedLocaleError { tag: s.to_string() })
    }
}

/// Symbolic key into the label catalog. A key carries no behavior beyond its
/// English fallback text; resolution happens in [`Translate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelKey {
    // Ordering strategy names, shown in sort-order selection menus.
    PositionIndexAscending,
    PositionIndexDescending,
    InsertionOrderAscending,
    InsertionOrderDescending,
    AlphabeticAscending,
    AlphabeticDescending,
    // Page labels.
    Home,
    PublicHome,
    PrivateHome,
    Login,
    Logout,
    Settings,
    Notifications,
    MessageBox,
    SystemAccount,
}

impl LabelKey {
    /// English text for the key, also used as the fallback when a locale has
    /// no translation of its own.
    pub fn name(&self) -> &'static str {
        match self {
            LabelKey::PositionIndexAscending => "Position Index Ascending",
            LabelKey::PositionIndexDescending => "Position Index Descending",
            LabelKey::InsertionOrderAscending => "Insertion Order Ascending",
            LabelKey::InsertionOrderDescending => "Insertion Order Descending",
            LabelKey::AlphabeticAscending => "Alphabetic Ascending",
            LabelKey::AlphabeticDescending => "Alphabetic Descending",
            LabelKey::Home => "Home",
            LabelKey::PublicHome => "Public Home",
            LabelKey::PrivateHome => "Private Home",
            LabelKey::Login => "Log In",
            LabelKey::Logout => "Log Out",
            LabelKey::Settings => "Settings",
            LabelKey::Notifications => "Notifications",
            LabelKey::MessageBox => "Message Box",
            LabelKey::SystemAccount => "System Account",
        }
    }
}

/// Case-folded sort key over a display label.
///
/// The original collation source is the label in the sitemap's current
/// locale, so two sitemaps in different locales collate differently even for
/// the same nodes. Folding is plain Unicode lowercasing; no ICU tailoring.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CollationKey(String);

impl CollationKey {
    pub fn new(label: &str) -> Self {
        CollationKey(label.chars().flat_map(char::to_lowercase).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
