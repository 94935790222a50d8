//! Profile selector: pick the primary language variant.

use indexmap::IndexMap;
use ppage_types::LanguageProfile;

use crate::error::{PipelineError, PipelineResult};

/// Language code tried first when the caller has no preference.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Select the language variant to display.
///
/// Selection is by explicit priority, never by incidental map order (the
/// document's key order is not a guarantee worth building on): the preferred
/// code wins if present, otherwise the lexicographically smallest code. An
/// empty mapping is [`PipelineError::ProfileNotFound`].
pub fn select_primary<'a>(
    profiles: &'a IndexMap<String, LanguageProfile>,
    preferred: &str,
) -> PipelineResult<(&'a str, &'a LanguageProfile)> {
    if let Some((code, profile)) = profiles.get_key_value(preferred) {
        return Ok((code.as_str(), profile));
    }

    profiles
        .iter()
        .min_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(code, profile)| (code.as_str(), profile))
        .ok_or(PipelineError::ProfileNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profiles_of(codes: &[&str]) -> IndexMap<String, LanguageProfile> {
        codes
            .iter()
            .map(|code| (code.to_string(), LanguageProfile::default()))
            .collect()
    }

    #[test]
    fn preferred_language_wins_when_present() {
        let profiles = profiles_of(&["de", "en", "fr"]);
        let (code, _) = select_primary(&profiles, DEFAULT_LANGUAGE).unwrap();
        assert_eq!(code, "en");
    }

    #[test]
    fn falls_back_to_lexicographically_smallest() {
        // Insertion order says "fr" first; the policy must not care.
        let profiles = profiles_of(&["fr", "de"]);
        let (code, _) = select_primary(&profiles, DEFAULT_LANGUAGE).unwrap();
        assert_eq!(code, "de");
    }

    #[test]
    fn empty_mapping_is_profile_not_found() {
        let profiles = IndexMap::new();
        assert!(matches!(
            select_primary(&profiles, DEFAULT_LANGUAGE),
            Err(PipelineError::ProfileNotFound)
        ));
    }
}
