//! Slot-merge engine
//!
//! Rewrites the product-description span of a template to name the caller's
//! actual product while keeping the template's rhetorical framing, then
//! splices detected selling points into the first sentence. Span matching
//! walks an ordered pattern table and stops at the first hit; a template
//! with no recognizable span passes through unchanged, which is a defined
//! outcome rather than an error.

use crate::error::Result;
use crate::features::{extract_features, MAX_INJECTED_FEATURES};
use regex::Regex;

/// Descriptive-run pattern sources, in fallback order
///
/// Each entry is (regex, keep_prefix). With `keep_prefix` the framing
/// capture (group 1) survives and only the rest of the match is replaced
/// by the product name; without it the whole match is replaced.
///
/// All four share the same garment-noun alternation; the trailing run
/// after the noun is restricted to garment suffix characters so framing
/// commentary after the span (e.g. 很不错) is left in place.
const SPAN_PATTERN_SOURCES: &[(&str, bool)] = &[
    // Brand-like token + possessive 的 + descriptive run.
    (
        r"([\x{4e00}-\x{9fa5}A-Za-z0-9]+的)([秋冬春夏季]{0,4}[男女]?[士款式]?[高档专柜品质加厚轻薄保暖]{0,10}[\x{4e00}-\x{9fa5}]{0,15}(?:羽绒马甲|羽绒服|羊毛衫|针织衫|开衫|外套|卫衣|毛衣|夹克|大衣|棉服)[外套款式]{0,4})",
        true,
    ),
    // Demonstrative marker + descriptive run.
    (
        r"(这款|就是这款|就拿这款)([秋冬春夏季]{0,4}[男女]?[士款式]?[\x{4e00}-\x{9fa5}]{0,20}(?:羽绒马甲|羽绒服|羊毛衫|针织衫|开衫|外套|卫衣|毛衣|夹克|大衣|棉服)[外套款式]{0,4})",
        true,
    ),
    // Descriptive run anchored at the start of the template.
    (
        r"^[秋冬春夏季]{0,4}[男女]?[士款式]?[\x{4e00}-\x{9fa5}]{0,20}(?:羽绒马甲|羽绒服|羊毛衫|针织衫|开衫|外套|卫衣|毛衣|夹克|大衣|棉服)[外套款式]{0,4}",
        false,
    ),
    // Descriptive run anywhere; first occurrence wins.
    (
        r"[秋冬春夏季]{0,4}[男女]?[士款式]?[高档专柜品质加厚轻薄保暖]{0,10}[\x{4e00}-\x{9fa5}]{0,15}(?:羽绒马甲|羽绒服|羊毛衫|针织衫|开衫|外套|卫衣|毛衣|夹克|大衣|棉服)[外套款式]{0,4}",
        false,
    ),
];

/// A compiled structural pattern plus its replacement discipline
#[derive(Debug)]
struct CompiledPattern {
    regex: Regex,
    keep_prefix: bool,
}

/// Template rewriting engine
///
/// Compiles its pattern table once; `merge` is then a pure function of its
/// arguments and safe to call from concurrent readers.
#[derive(Debug)]
pub struct SlotMerger {
    patterns: Vec<CompiledPattern>,
}

impl SlotMerger {
    /// Compile the structural pattern table
    pub fn new() -> Result<Self> {
        let patterns = SPAN_PATTERN_SOURCES
            .iter()
            .map(|&(source, keep_prefix)| {
                Ok(CompiledPattern {
                    regex: Regex::new(source)?,
                    keep_prefix,
                })
            })
            .collect::<std::result::Result<Vec<_>, regex::Error>>()?;
        Ok(Self { patterns })
    }

    /// Merge caller-supplied product identity into a template
    ///
    /// Replaces the first recognizable description span with
    /// `product_name` (framing prefix preserved where the pattern defines
    /// one), then splices up to [`MAX_INJECTED_FEATURES`] selling points
    /// detected in `description` onto the first sentence. Both steps are
    /// independent: a template without a span still receives features, and
    /// a description without features still gets its span rewritten.
    pub fn merge(&self, template: &str, product_name: &str, description: &str) -> String {
        let mut result = template.to_string();

        let name = product_name.trim();
        if !name.is_empty() {
            if let Some(rewritten) = self.replace_description_span(&result, name) {
                result = rewritten;
            }
        }

        let features = extract_features(description);
        if !features.is_empty() {
            let clause = features[..features.len().min(MAX_INJECTED_FEATURES)].join("、");
            result = splice_into_first_sentence(&result, &clause);
        }

        result
    }

    /// First-match-wins span replacement; `None` when no pattern matched
    fn replace_description_span(&self, text: &str, product_name: &str) -> Option<String> {
        for pattern in &self.patterns {
            let Some(caps) = pattern.regex.captures(text) else {
                continue;
            };
            let span = match caps.get(0) {
                Some(span) => span,
                None => continue,
            };
            let prefix = if pattern.keep_prefix {
                caps.get(1).map_or("", |m| m.as_str())
            } else {
                ""
            };

            let mut rewritten = String::with_capacity(text.len() + product_name.len());
            rewritten.push_str(&text[..span.start()]);
            rewritten.push_str(prefix);
            rewritten.push_str(product_name);
            rewritten.push_str(&text[span.end()..]);
            return Some(rewritten);
        }
        None
    }
}

/// Append a selling-point clause to the first sentence
///
/// Sentences are delimited by 。; a template without one is treated as a
/// single sentence and gets the clause appended at its end.
fn splice_into_first_sentence(text: &str, clause: &str) -> String {
    match text.find('。') {
        Some(pos) => format!("{}，{}{}", &text[..pos], clause, &text[pos..]),
        None => format!("{text}，{clause}"),
    }
}
