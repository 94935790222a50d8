//! Normalization pipeline for pronouns.page profiles.
//!
//! Turns a raw [`GlobalProfile`](ppage_types::GlobalProfile) into flat,
//! ordered display entries and resolves the external reference behind each
//! activated flag or link. Every stage is a pure transformation over
//! already-fetched data: nothing here does I/O, blocks, or keeps state
//! between passes, so normalizing two profiles concurrently is always safe.
//!
//! Stages, leaf to root:
//! - [`rating`] — the closed rating domain and its display symbols
//! - [`serialize`] — rating map → ordered `(symbol, label)` lines
//! - [`pronouns`] — noun-pronoun shorthand expansion
//! - [`flags`] — standard/custom provenance classification
//! - [`words`] — vocabulary categories flattened into one listing
//! - [`select`] — deterministic primary-language selection
//! - [`links`] — display entry → terminology anchor or CDN asset URL
//! - [`normalize`] — the whole pipeline as one all-or-nothing pass

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod error;
pub mod flags;
pub mod links;
pub mod normalize;
pub mod pronouns;
pub mod rating;
pub mod select;
pub mod serialize;
pub mod words;

pub use error::{PipelineError, PipelineResult};
pub use flags::{classify_flags, ClassifiedFlags};
pub use links::resolve_link;
pub use normalize::{normalize, NormalizeOptions, NormalizedProfile};
pub use pronouns::expand_noun_pronouns;
pub use rating::symbol_of;
pub use select::select_primary;
pub use serialize::serialize_ratings;
pub use words::compile_words;
