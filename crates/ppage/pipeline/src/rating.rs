//! Rating codec: the fixed rating domain and its display symbols.

use crate::error::{PipelineError, PipelineResult};

/// The full rating domain, in ascending order. Useful for tests and for
/// callers that want to enumerate valid ratings.
pub const RATING_DOMAIN: [i64; 5] = [-1, 0, 1, 2, 3];

/// Map a rating to its display symbol.
///
/// The domain is closed: -1 disapprove, 0 okay, 1 love, 2 jokingly,
/// 3 "only as auxiliary" couple marker. Anything else is a malformed
/// document and fails with [`PipelineError::UnknownRating`] rather than
/// falling back to a blank symbol.
pub fn symbol_of(rating: i64) -> PipelineResult<&'static str> {
    match rating {
        -1 => Ok("👎"),
        0 => Ok("👍"),
        1 => Ok("♥"),
        2 => Ok("😛"),
        3 => Ok("💑"),
        value => Err(PipelineError::UnknownRating { value }),
    }
}

/// Map a display symbol back to its rating. Inverse of [`symbol_of`] over
/// the defined domain; `None` for anything that is not a rating symbol.
pub fn rating_of(symbol: &str) -> Option<i64> {
    match symbol {
        "👎" => Some(-1),
        "👍" => Some(0),
        "♥" => Some(1),
        "😛" => Some(2),
        "💑" => Some(3),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_domain_value_has_a_symbol() {
        for rating in RATING_DOMAIN {
            assert!(symbol_of(rating).is_ok(), "rating {rating} should map");
        }
    }

    #[test]
    fn out_of_domain_rating_is_rejected() {
        assert_eq!(
            symbol_of(99),
            Err(PipelineError::UnknownRating { value: 99 })
        );
        assert_eq!(
            symbol_of(-2),
            Err(PipelineError::UnknownRating { value: -2 })
        );
    }

    #[test]
    fn rating_of_inverts_symbol_of() {
        for rating in RATING_DOMAIN {
            let symbol = symbol_of(rating).unwrap();
            assert_eq!(rating_of(symbol).unwrap(), rating);
        }
    }
}
