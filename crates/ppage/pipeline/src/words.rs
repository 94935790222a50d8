//! Vocabulary compiler: per-category rating maps → one flat listing.

use ppage_types::{DisplayEntry, RatingMap};

use crate::error::PipelineResult;
use crate::serialize;

/// Serialize every vocabulary category and concatenate the results in
/// category order. A profile with no vocabulary is a legal empty state, not
/// an error. Categories are independent namespaces, so a label repeating
/// across two categories produces two entries.
pub fn compile_words(words: &[RatingMap]) -> PipelineResult<Vec<DisplayEntry>> {
    let mut compiled = Vec::new();
    for category in words {
        compiled.extend(serialize::serialize_ratings(category)?);
    }
    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;

    fn map_of(entries: &[(&str, i64)]) -> RatingMap {
        entries
            .iter()
            .map(|(label, rating)| (label.to_string(), *rating))
            .collect()
    }

    #[test]
    fn no_vocabulary_yields_empty_listing() {
        assert!(compile_words(&[]).unwrap().is_empty());
    }

    #[test]
    fn categories_concatenate_in_order() {
        let words = vec![map_of(&[("partner", 1)]), map_of(&[("enby", 3)])];
        let compiled = compile_words(&words).unwrap();

        assert_eq!(compiled.len(), 2);
        assert_eq!(compiled[0].label, "partner");
        assert_eq!(compiled[1].label, "enby");
    }

    #[test]
    fn labels_may_repeat_across_categories() {
        let words = vec![map_of(&[("dear", 1)]), map_of(&[("dear", -1)])];
        let compiled = compile_words(&words).unwrap();

        assert_eq!(compiled.len(), 2);
        assert_eq!(compiled[0].symbol, "♥");
        assert_eq!(compiled[1].symbol, "👎");
    }

    #[test]
    fn bad_rating_in_any_category_fails_the_compile() {
        let words = vec![map_of(&[("fine", 0)]), map_of(&[("broken", 7)])];
        assert_eq!(
            compile_words(&words),
            Err(PipelineError::UnknownRating { value: 7 })
        );
    }
}
