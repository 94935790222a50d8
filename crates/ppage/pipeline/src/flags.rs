//! Flag classifier: standard vs. custom provenance.

use std::collections::HashMap;

use indexmap::IndexMap;
use ppage_types::DisplayEntry;

use crate::error::{PipelineError, PipelineResult};

/// A profile's flags partitioned by provenance.
///
/// Standard flags come from the shared terminology vocabulary; custom flags
/// are owner-defined and only resolvable through their internal asset key.
/// The classifier keeps a label → key index so the link resolver can recover
/// a custom flag's key from the label the user activated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassifiedFlags {
    standard: Vec<DisplayEntry>,
    custom: Vec<DisplayEntry>,
    keys_by_label: HashMap<String, Vec<String>>,
}

impl ClassifiedFlags {
    /// Standard entries, in the profile's declared order.
    pub fn standard(&self) -> &[DisplayEntry] {
        &self.standard
    }

    /// Custom entries, in the profile's declared order.
    pub fn custom(&self) -> &[DisplayEntry] {
        &self.custom
    }

    /// All entries for display: standard first, then custom, each group in
    /// its input order.
    pub fn entries(&self) -> impl Iterator<Item = &DisplayEntry> {
        self.standard.iter().chain(self.custom.iter())
    }

    /// Recover the asset key behind a custom flag's display label.
    ///
    /// Labels are not guaranteed unique. A label used by more than one flag
    /// is [`PipelineError::AmbiguousFlagLabel`]; picking the first match
    /// silently would send the user to the wrong asset.
    pub fn key_for_label(&self, label: &str) -> PipelineResult<&str> {
        let keys = self
            .keys_by_label
            .get(label)
            .ok_or_else(|| PipelineError::UnresolvableReference {
                label: label.to_string(),
            })?;

        match keys.as_slice() {
            [key] => Ok(key.as_str()),
            _ => Err(PipelineError::AmbiguousFlagLabel {
                label: label.to_string(),
            }),
        }
    }
}

/// Partition a profile's flags into standard and custom display entries.
///
/// Standard identifiers double as their labels and carry no symbol. Custom
/// flags are labeled with the owner's display text.
pub fn classify_flags(
    flags: &[String],
    custom_flags: &IndexMap<String, String>,
) -> ClassifiedFlags {
    let standard = flags
        .iter()
        .map(|identifier| DisplayEntry::standard_flag(identifier.clone()))
        .collect();

    let mut custom = Vec::with_capacity(custom_flags.len());
    let mut keys_by_label: HashMap<String, Vec<String>> = HashMap::new();
    for (key, label) in custom_flags {
        custom.push(DisplayEntry::custom_flag(label.clone()));
        keys_by_label
            .entry(label.clone())
            .or_default()
            .push(key.clone());
    }

    ClassifiedFlags {
        standard,
        custom,
        keys_by_label,
    }
}
