//! Product style categories and the classification decision list
//!
//! Categories serve two roles: partitioning the template corpus at load
//! time and classifying incoming (name, description) pairs. Both use plain
//! substring matching; classification additionally applies an ordered rule
//! table whose priority is part of the public contract.

use std::fmt;

/// Fixed style buckets for the template corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Category {
    /// 羽绒马甲
    DownVest,
    /// 羽绒服
    DownJacket,
    /// 羊毛衫
    WoolSweater,
    /// 针织衫
    Knitwear,
    /// 开衫
    Cardigan,
    /// 外套
    Outerwear,
    /// 其他 — catch-all for paragraphs and products no other bucket claims
    Other,
}

impl Category {
    /// All categories in partition priority order, `Other` last
    pub const ALL: [Category; 7] = [
        Category::DownVest,
        Category::DownJacket,
        Category::WoolSweater,
        Category::Knitwear,
        Category::Cardigan,
        Category::Outerwear,
        Category::Other,
    ];

    /// Chinese display label
    pub fn label(self) -> &'static str {
        match self {
            Category::DownVest => "羽绒马甲",
            Category::DownJacket => "羽绒服",
            Category::WoolSweater => "羊毛衫",
            Category::Knitwear => "针织衫",
            Category::Cardigan => "开衫",
            Category::Outerwear => "外套",
            Category::Other => "其他",
        }
    }

    /// ASCII identifier used in JSON output and on the command line
    pub fn code(self) -> &'static str {
        match self {
            Category::DownVest => "down-vest",
            Category::DownJacket => "down-jacket",
            Category::WoolSweater => "wool-sweater",
            Category::Knitwear => "knitwear",
            Category::Cardigan => "cardigan",
            Category::Outerwear => "outerwear",
            Category::Other => "other",
        }
    }

    /// Keywords that claim a corpus paragraph for this category
    ///
    /// Scanned in [`Category::ALL`] order; the first category with a
    /// substring hit wins, so each paragraph lands in exactly one bucket.
    /// `Other` has no keywords and collects everything left over.
    pub fn partition_keywords(self) -> &'static [&'static str] {
        match self {
            Category::DownVest => &["羽绒马甲", "马甲外套"],
            Category::DownJacket => &["羽绒服", "鹅绒服", "保暖羽绒"],
            Category::WoolSweater => &["羊毛衫", "羊毛打底", "纯羊毛", "山羊绒"],
            Category::Knitwear => &["针织", "条纹毛衣", "打底衫", "毛衣"],
            Category::Cardigan => &["开衫", "卫衣开衫"],
            Category::Outerwear => &["外套", "夹克"],
            Category::Other => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry in the ordered classification decision list
///
/// A rule matches when every keyword group has at least one member
/// occurring in the search text. Rules are evaluated top to bottom and the
/// first match wins, so compound rules must precede the broader rules they
/// specialize (a down vest is also a down garment).
struct ClassifyRule {
    category: Category,
    groups: &'static [&'static [&'static str]],
}

/// Down fillings. Duck down (鸭绒) counts the same as 羽绒/鹅绒 so a
/// duck-down vest resolves to the vest category, not the jacket one.
const DOWN_KEYWORDS: &[&str] = &["羽绒", "鹅绒", "鸭绒"];

const CLASSIFY_RULES: &[ClassifyRule] = &[
    ClassifyRule {
        category: Category::DownVest,
        groups: &[&["马甲"], DOWN_KEYWORDS],
    },
    ClassifyRule {
        category: Category::DownJacket,
        groups: &[DOWN_KEYWORDS],
    },
    ClassifyRule {
        category: Category::WoolSweater,
        groups: &[&["羊毛", "羊绒"]],
    },
    ClassifyRule {
        category: Category::Knitwear,
        groups: &[&["针织", "毛衣"]],
    },
    ClassifyRule {
        category: Category::Cardigan,
        groups: &[&["开衫"]],
    },
    ClassifyRule {
        category: Category::Outerwear,
        groups: &[&["外套", "夹克"]],
    },
];

/// Classify a product into a style category
///
/// Name and description are searched as one combined string. Falls through
/// to [`Category::Other`] when no rule matches. Pure and idempotent.
pub fn classify(product_name: &str, description: &str) -> Category {
    let combined = format!("{product_name} {description}");
    for rule in CLASSIFY_RULES {
        let matched = rule
            .groups
            .iter()
            .all(|group| group.iter().any(|keyword| combined.contains(keyword)));
        if matched {
            return rule.category;
        }
    }
    Category::Other
}
