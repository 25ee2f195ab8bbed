//! Category-partitioned template corpus

use crate::category::Category;
use std::collections::HashMap;

/// Paragraphs shorter than this many characters are discarded as noise
/// (headings, stray lines) rather than stored as templates.
pub const MIN_TEMPLATE_CHARS: usize = 50;

/// An immutable, category-partitioned collection of template paragraphs
///
/// Built once from a paragraph source and read-only thereafter; concurrent
/// readers need no synchronization. Every accepted paragraph belongs to
/// exactly one category list, in corpus order.
#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    templates: HashMap<Category, Vec<String>>,
}

impl TemplateLibrary {
    /// Build a library from raw paragraphs
    ///
    /// Paragraphs are trimmed, length-filtered, and assigned to the first
    /// category in [`Category::ALL`] order with a keyword hit; paragraphs
    /// no keyword claims land in [`Category::Other`].
    pub fn from_paragraphs<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut templates: HashMap<Category, Vec<String>> = HashMap::new();
        for paragraph in paragraphs {
            let text = paragraph.as_ref().trim();
            if text.chars().count() < MIN_TEMPLATE_CHARS {
                continue;
            }
            let category = Self::partition(text);
            templates.entry(category).or_default().push(text.to_string());
        }
        Self { templates }
    }

    fn partition(text: &str) -> Category {
        Category::ALL
            .into_iter()
            .find(|category| {
                category
                    .partition_keywords()
                    .iter()
                    .any(|keyword| text.contains(keyword))
            })
            .unwrap_or(Category::Other)
    }

    /// Templates assigned to a category, in corpus order
    pub fn templates(&self, category: Category) -> &[String] {
        self.templates
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of stored templates across all categories
    pub fn len(&self) -> usize {
        self.templates.values().map(Vec::len).sum()
    }

    /// Whether the library holds no templates at all
    pub fn is_empty(&self) -> bool {
        self.templates.values().all(Vec::is_empty)
    }

    /// Per-category template counts, in [`Category::ALL`] order
    ///
    /// Callers log these after a corpus load to make partition results
    /// observable.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.templates(category).len()))
            .collect()
    }

    /// Resolve the template list to draw from for a classified category
    ///
    /// Falls back to [`Category::Other`] when the matched category is
    /// empty. Returns `None` when the fallback is empty too — the caller
    /// must surface a "no templates available" outcome instead of failing.
    pub fn resolve(&self, category: Category) -> Option<(Category, &[String])> {
        let own = self.templates(category);
        if !own.is_empty() {
            return Some((category, own));
        }
        let fallback = self.templates(Category::Other);
        if !fallback.is_empty() {
            return Some((Category::Other, fallback));
        }
        None
    }
}
