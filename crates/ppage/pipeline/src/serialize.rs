//! Entry serializer: rating map → ordered display lines.

use ppage_types::{DisplayEntry, RatingMap};

use crate::error::PipelineResult;
use crate::rating;

/// Serialize a rating map into one display entry per item, preserving the
/// map's iteration order. Pure: an empty map yields an empty sequence.
pub fn serialize_ratings(map: &RatingMap) -> PipelineResult<Vec<DisplayEntry>> {
    map.iter()
        .map(|(label, &value)| {
            let symbol = rating::symbol_of(value)?;
            Ok(DisplayEntry::plain(symbol, label.clone()))
        })
        .collect()
}
