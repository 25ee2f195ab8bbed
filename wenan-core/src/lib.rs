//! Text pipeline core for Chinese marketing copy
//!
//! Two independently usable pieces share this crate: a template-driven
//! copy generator (category classification, slot-merge, selling-point
//! injection) and a length-bounded segmenter that cuts long text into
//! speech-synthesis-safe chunks. Both are pure: no I/O, no network, no
//! shared mutable state beyond the read-only template library.

#![warn(missing_docs)]

pub mod category;
pub mod error;
pub mod features;
pub mod generator;
pub mod library;
pub mod merge;
pub mod segmenter;

// Re-export key types
pub use category::{classify, Category};
pub use error::{CoreError, Result};
pub use features::{extract_features, FEATURE_VOCABULARY, MAX_INJECTED_FEATURES};
pub use generator::{CopyGenerator, GeneratedCopy};
pub use library::{TemplateLibrary, MIN_TEMPLATE_CHARS};
pub use merge::SlotMerger;
pub use segmenter::{Segmenter, DEFAULT_MAX_SEGMENT_CHARS};

// Convenience functions

/// Split text into chunks of at most `max_chars` characters
pub fn split_text(text: &str, max_chars: usize) -> Result<Vec<String>> {
    Ok(Segmenter::new(max_chars)?.split(text))
}

/// Build a generator directly from raw corpus paragraphs
pub fn generator_from_paragraphs<I, S>(paragraphs: I) -> Result<CopyGenerator>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    CopyGenerator::new(TemplateLibrary::from_paragraphs(paragraphs))
}
