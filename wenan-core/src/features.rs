//! Selling-point keyword extraction

/// Selling-point vocabulary, scanned in order
///
/// The scan order is the output order of [`extract_features`], so the list
/// doubles as a priority ranking: fabric-feel keywords first, then style,
/// then construction details.
pub const FEATURE_VOCABULARY: &[&str] = &[
    "保暖", "轻便", "防风", "透气", "舒适", "柔软", "时尚", "百搭", "修身", "宽松", "休闲",
    "商务", "加厚", "超薄", "防水", "耐磨", "速干", "纯棉", "纯羊毛", "羊绒", "鹅绒", "鸭绒",
    "可拆卸", "多口袋", "拉链", "半高领", "立领",
];

/// How many extracted features downstream consumers splice into copy
pub const MAX_INJECTED_FEATURES: usize = 3;

/// Extract selling-point keywords from a product description
///
/// Substring scan over [`FEATURE_VOCABULARY`]; results follow vocabulary
/// order, not the order keywords appear in the description.
pub fn extract_features(description: &str) -> Vec<&'static str> {
    FEATURE_VOCABULARY
        .iter()
        .filter(|keyword| description.contains(*keyword))
        .copied()
        .collect()
}
