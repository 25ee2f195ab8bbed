//! Length-bounded text segmentation
//!
//! Splits text that exceeds a maximum length into synthesis-safe chunks,
//! cutting at the most natural boundary available: sentence terminators
//! first, clause punctuation second, exact character counts as a last
//! resort. Concatenating the returned chunks always reproduces the input
//! byte for byte. Lengths are counted in `char`s, never bytes, so a forced
//! cut can never land inside a UTF-8 sequence.

use crate::error::{CoreError, Result};

/// Default chunk ceiling, sized to the downstream speech-synthesis
/// per-request limit of 150 Chinese characters.
pub const DEFAULT_MAX_SEGMENT_CHARS: usize = 150;

/// Sentence-level terminators (strong boundaries)
const STRONG_TERMINATORS: &[char] = &['。', '！', '？', '.', '!', '?'];

/// Clause-level punctuation (weak boundaries)
const WEAK_TERMINATORS: &[char] = &['，', '、', '；', ',', ';'];

/// Deterministic, boundary-preferring text segmenter
#[derive(Debug, Clone)]
pub struct Segmenter {
    max_chars: usize,
}

impl Segmenter {
    /// Create a segmenter with the given chunk ceiling in characters
    pub fn new(max_chars: usize) -> Result<Self> {
        if max_chars == 0 {
            return Err(CoreError::Config(
                "segment length must be at least one character".to_string(),
            ));
        }
        Ok(Self { max_chars })
    }

    /// The configured chunk ceiling
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Split text into ordered chunks of at most `max_chars` characters
    ///
    /// Text that already fits is returned as the single chunk (the empty
    /// string yields `[""]`). Otherwise sentences are packed greedily into
    /// chunks; a sentence that alone exceeds the ceiling is sub-split at
    /// clause punctuation, and a clause that still exceeds it is force-cut
    /// at exact character counts. The concatenation of the returned chunks
    /// equals the input exactly.
    pub fn split(&self, text: &str) -> Vec<String> {
        if char_len(text) <= self.max_chars {
            return vec![text.to_string()];
        }

        let mut chunks = Vec::new();
        let mut buffer = String::new();
        let mut buffer_len = 0;

        for sentence in split_units(text, STRONG_TERMINATORS) {
            let sentence_len = char_len(sentence);
            if sentence_len > self.max_chars {
                // Too long to buffer whole; flush what we have and let the
                // weak pass take it apart.
                if !buffer.is_empty() {
                    chunks.push(std::mem::take(&mut buffer));
                    buffer_len = 0;
                }
                self.split_clauses(sentence, &mut chunks);
            } else if buffer_len + sentence_len <= self.max_chars {
                buffer.push_str(sentence);
                buffer_len += sentence_len;
            } else {
                chunks.push(std::mem::take(&mut buffer));
                buffer.push_str(sentence);
                buffer_len = sentence_len;
            }
        }
        if !buffer.is_empty() {
            chunks.push(buffer);
        }

        chunks
    }

    /// Weak-boundary pass for a single over-length sentence
    fn split_clauses(&self, sentence: &str, chunks: &mut Vec<String>) {
        let mut buffer = String::new();
        let mut buffer_len = 0;

        for clause in split_units(sentence, WEAK_TERMINATORS) {
            let clause_len = char_len(clause);
            if buffer.is_empty() {
                buffer.push_str(clause);
                buffer_len = clause_len;
            } else if buffer_len + clause_len <= self.max_chars {
                buffer.push_str(clause);
                buffer_len += clause_len;
            } else {
                self.flush_clause(&std::mem::take(&mut buffer), chunks);
                buffer.push_str(clause);
                buffer_len = clause_len;
            }
        }
        if !buffer.is_empty() {
            self.flush_clause(&buffer, chunks);
        }
    }

    /// Emit a packed clause run, force-cutting it if it still exceeds the
    /// ceiling (a single clause with no usable punctuation).
    fn flush_clause(&self, clause: &str, chunks: &mut Vec<String>) {
        if char_len(clause) <= self.max_chars {
            chunks.push(clause.to_string());
        } else {
            let chars: Vec<char> = clause.chars().collect();
            for piece in chars.chunks(self.max_chars) {
                chunks.push(piece.iter().collect());
            }
        }
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_SEGMENT_CHARS,
        }
    }
}

/// Split `text` into units, each a run of content plus the terminator run
/// that closes it. No characters are dropped: concatenating the units in
/// order reproduces `text`.
fn split_units<'a>(text: &'a str, terminators: &[char]) -> Vec<&'a str> {
    let mut units = Vec::new();
    let mut start = 0;
    let mut in_terminator_run = false;

    for (idx, ch) in text.char_indices() {
        let is_terminator = terminators.contains(&ch);
        if in_terminator_run && !is_terminator {
            units.push(&text[start..idx]);
            start = idx;
        }
        in_terminator_run = is_terminator;
    }
    if start < text.len() {
        units.push(&text[start..]);
    }

    units
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
