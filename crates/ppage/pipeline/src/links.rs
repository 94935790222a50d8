//! Link resolver: display entry → external reference.

use ppage_types::{DisplayEntry, Provenance};

use crate::error::PipelineResult;
use crate::flags::ClassifiedFlags;

/// Terminology page anchor for standard flags.
pub const TERMINOLOGY_BASE: &str = "https://en.pronouns.page/dictionary/terminology#";

/// Asset CDN serving custom flag images.
pub const IMAGE_CDN: &str = "https://dclu0bpcdglik.cloudfront.net/images/";

/// Filename suffix of custom flag assets on the CDN.
pub const FLAG_SUFFIX: &str = "-flag.png";

/// Build the external reference for an activated display entry.
///
/// Standard flags anchor into the terminology dictionary by label; custom
/// flags resolve through their asset key, recovered from `flags`; plain
/// entries (the links listing) are already URLs and pass through unchanged.
/// Reverse-lookup failures propagate as-is.
pub fn resolve_link(entry: &DisplayEntry, flags: &ClassifiedFlags) -> PipelineResult<String> {
    match entry.provenance {
        Provenance::StandardFlag => Ok(format!(
            "{TERMINOLOGY_BASE}{}",
            urlencoding::encode(&entry.label)
        )),
        Provenance::CustomFlag => {
            let key = flags.key_for_label(&entry.label)?;
            Ok(format!("{IMAGE_CDN}{key}{FLAG_SUFFIX}"))
        }
        Provenance::Plain => Ok(entry.label.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use crate::flags::classify_flags;
    use indexmap::IndexMap;

    #[test]
    fn standard_flag_links_into_the_terminology_pages() {
        let flags = ClassifiedFlags::default();
        let entry = DisplayEntry::standard_flag("lesbian");
        assert_eq!(
            resolve_link(&entry, &flags).unwrap(),
            "https://en.pronouns.page/dictionary/terminology#lesbian"
        );
    }

    #[test]
    fn standard_flag_labels_are_url_escaped() {
        let flags = ClassifiedFlags::default();
        let entry = DisplayEntry::standard_flag("gender questioning");
        assert_eq!(
            resolve_link(&entry, &flags).unwrap(),
            "https://en.pronouns.page/dictionary/terminology#gender%20questioning"
        );
    }

    #[test]
    fn custom_flag_links_to_its_cdn_asset() {
        let custom: IndexMap<String, String> =
            [("abc123".to_string(), "My Flag".to_string())].into_iter().collect();
        let flags = classify_flags(&[], &custom);
        let entry = DisplayEntry::custom_flag("My Flag");

        assert_eq!(
            resolve_link(&entry, &flags).unwrap(),
            "https://dclu0bpcdglik.cloudfront.net/images/abc123-flag.png"
        );
    }

    #[test]
    fn plain_entries_are_their_own_urls() {
        let flags = ClassifiedFlags::default();
        let entry = DisplayEntry::plain("", "https://example.com/me");
        assert_eq!(resolve_link(&entry, &flags).unwrap(), "https://example.com/me");
    }

    #[test]
    fn custom_flag_without_a_key_is_unresolvable() {
        let flags = ClassifiedFlags::default();
        let entry = DisplayEntry::custom_flag("Ghost");
        assert_eq!(
            resolve_link(&entry, &flags),
            Err(PipelineError::UnresolvableReference {
                label: "Ghost".to_string()
            })
        );
    }
}
