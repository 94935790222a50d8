//! Pronoun normalizer: noun-pronoun shorthand expansion.

use ppage_types::RatingMap;

use crate::error::{PipelineError, PipelineResult};

/// Marker prefix for noun-pronoun shorthand, e.g. `:kit`.
const NOUN_MARKER: char = ':';

/// Rewrite noun-pronoun shorthand keys into explicit subject/possessive
/// pairs: `:kit` becomes `kit/kit's`. Other keys pass through untouched, and
/// ratings are carried over unchanged.
///
/// Output order matches input order. If an expansion collides with an
/// existing key the whole map is rejected with
/// [`PipelineError::DuplicatePronoun`] instead of dropping an entry.
pub fn expand_noun_pronouns(pronouns: &RatingMap) -> PipelineResult<RatingMap> {
    let mut expanded = RatingMap::with_capacity(pronouns.len());

    for (key, &rating) in pronouns {
        let pronoun = match key.strip_prefix(NOUN_MARKER) {
            Some(base) => format!("{base}/{base}'s"),
            None => key.clone(),
        };

        if expanded.insert(pronoun.clone(), rating).is_some() {
            return Err(PipelineError::DuplicatePronoun { pronoun });
        }
    }

    Ok(expanded)
}
