//! Data model for pronouns.page profiles.
//!
//! A profile document is keyed by username and carries one
//! [`LanguageProfile`] per language the owner filled in. Rating maps keep the
//! order the owner arranged their entries in, so every map here is an
//! [`IndexMap`] rather than a hash map.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Label → rating, in the owner's declared display order.
///
/// Ratings are kept as raw integers: the document format does not constrain
/// them, and values outside the known domain are rejected later, when a
/// display symbol is requested.
pub type RatingMap = IndexMap<String, i64>;

/// One language variant of a profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageProfile {
    /// Names the owner goes by, each with a rating.
    #[serde(default)]
    pub names: RatingMap,
    /// Pronoun sets, each with a rating. Keys starting with `:` are
    /// noun-pronoun shorthand and are expanded before display.
    #[serde(default)]
    pub pronouns: RatingMap,
    /// Free-form description, absent when the owner left it empty.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    /// Links the owner listed; each entry is itself a URL.
    #[serde(default)]
    pub links: Vec<String>,
    /// Standard flag identifiers, resolvable against the terminology pages.
    #[serde(default)]
    pub flags: Vec<String>,
    /// Owner-defined flags: internal asset key → display label.
    #[serde(default, rename = "customFlags")]
    pub custom_flags: IndexMap<String, String>,
    /// Vocabulary, one rating map per category. Categories are independent
    /// namespaces; the same label may appear in more than one.
    #[serde(default)]
    pub words: Vec<RatingMap>,
}

/// A full profile document as served by the API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalProfile {
    pub username: String,
    /// Avatar image URL. May be empty or unreachable; callers fall back to a
    /// default avatar.
    #[serde(default)]
    pub avatar: String,
    /// Language code → profile. Empty means the user has no profile at all,
    /// which is an error state for display, not an empty page.
    #[serde(default)]
    pub profiles: IndexMap<String, LanguageProfile>,
}

/// Where a display entry came from, which decides how a link for it is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// A flag from the shared terminology vocabulary.
    StandardFlag,
    /// An owner-defined flag, resolvable only through its asset key.
    CustomFlag,
    /// A plain line (name, pronoun, word, or link) with no flag semantics.
    Plain,
}

/// The normalized unit handed to rendering and link resolution.
///
/// Entries are derived values: they are rebuilt on every normalization pass
/// and hold no identity of their own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayEntry {
    pub label: String,
    /// Rating symbol, or empty for flags and links (they carry no rating).
    pub symbol: String,
    pub provenance: Provenance,
}

impl DisplayEntry {
    /// A rated line for the names/pronouns/words listings.
    pub fn plain(symbol: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            symbol: symbol.into(),
            provenance: Provenance::Plain,
        }
    }

    /// A standard-flag entry; the identifier doubles as the label.
    pub fn standard_flag(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            symbol: String::new(),
            provenance: Provenance::StandardFlag,
        }
    }

    /// A custom-flag entry labeled with the owner's display text.
    pub fn custom_flag(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            symbol: String::new(),
            provenance: Provenance::CustomFlag,
        }
    }

    /// The line as shown to the user: `symbol label`, or just the label when
    /// there is no symbol.
    pub fn display_text(&self) -> String {
        if self.symbol.is_empty() {
            self.label.clone()
        } else {
            format!("{} {}", self.symbol, self.label)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_maps_keep_document_order() {
        let json = r#"{"Sasha": 1, "Alex": 0, "Sam": -1}"#;
        let map: RatingMap = serde_json::from_str(json).unwrap();

        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Sasha", "Alex", "Sam"]);
    }

    #[test]
    fn absent_fields_default_to_empty() {
        let json = r#"{"names": {"Robin": 1}, "pronouns": {}}"#;
        let profile: LanguageProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.names.len(), 1);
        assert!(profile.description.is_none());
        assert!(profile.age.is_none());
        assert!(profile.words.is_empty());
        assert!(profile.custom_flags.is_empty());
    }

    #[test]
    fn custom_flags_use_wire_field_name() {
        let json = r#"{"customFlags": {"abc123": "My Flag"}}"#;
        let profile: LanguageProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.custom_flags.get("abc123").unwrap(), "My Flag");
    }

    #[test]
    fn display_text_omits_empty_symbol() {
        assert_eq!(DisplayEntry::standard_flag("bi").display_text(), "bi");
        assert_eq!(DisplayEntry::plain("♥", "Robin").display_text(), "♥ Robin");
    }
}
