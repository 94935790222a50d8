//! Whole-profile normalization: the one entry point the rendering layer
//! consumes.

use ppage_types::{DisplayEntry, GlobalProfile};

use crate::error::PipelineResult;
use crate::flags::{self, ClassifiedFlags};
use crate::pronouns;
use crate::select;
use crate::serialize;
use crate::words;

/// Knobs for a normalization pass.
#[derive(Clone, Debug)]
pub struct NormalizeOptions {
    /// Language code tried first when selecting the primary variant.
    pub preferred_language: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            preferred_language: select::DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// A fully normalized profile, ready for rendering.
///
/// This is a plain value passed from the pipeline to whatever renders it.
/// It is rebuilt from scratch on every pass; nothing here refers back to
/// mutable session state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedProfile {
    pub username: String,
    pub avatar_url: String,
    /// Code of the language variant that was selected.
    pub language: String,
    pub age: Option<u32>,
    pub description: Option<String>,
    pub names: Vec<DisplayEntry>,
    pub pronouns: Vec<DisplayEntry>,
    /// Link-list items; each label is itself a URL.
    pub links: Vec<DisplayEntry>,
    pub flags: ClassifiedFlags,
    /// All vocabulary categories flattened into one listing.
    pub words: Vec<DisplayEntry>,
}

/// Run the full pipeline over a fetched profile document.
///
/// All-or-nothing: the first component error aborts the pass, so callers
/// never see a partially populated profile.
pub fn normalize(
    profile: &GlobalProfile,
    options: &NormalizeOptions,
) -> PipelineResult<NormalizedProfile> {
    let (language, primary) = select::select_primary(&profile.profiles, &options.preferred_language)?;

    let names = serialize::serialize_ratings(&primary.names)?;
    let expanded = pronouns::expand_noun_pronouns(&primary.pronouns)?;
    let pronouns = serialize::serialize_ratings(&expanded)?;

    let links = primary
        .links
        .iter()
        .map(|url| DisplayEntry::plain("", url.clone()))
        .collect();

    let flags = flags::classify_flags(&primary.flags, &primary.custom_flags);
    let words = words::compile_words(&primary.words)?;

    Ok(NormalizedProfile {
        username: profile.username.clone(),
        avatar_url: profile.avatar.clone(),
        language: language.to_string(),
        age: primary.age,
        description: primary.description.clone(),
        names,
        pronouns,
        links,
        flags,
        words,
    })
}
