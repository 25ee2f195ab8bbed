//! Segmentation invariants over arbitrary inputs

use proptest::prelude::*;
use wenan_core::{split_text, Segmenter};

#[test]
fn identity_below_ceiling() {
    let text = "厂家清仓一批秋冬爆款马甲。";
    let segmenter = Segmenter::new(150).unwrap();
    assert_eq!(segmenter.split(text), vec![text]);
}

#[test]
fn documented_packing_example() {
    let segmenter = Segmenter::new(4).unwrap();
    assert_eq!(segmenter.split("A。B。C。"), vec!["A。B。", "C。"]);
}

#[test]
fn convenience_function_checks_ceiling() {
    assert!(split_text("你好。", 0).is_err());
    assert_eq!(split_text("你好。", 10).unwrap(), vec!["你好。"]);
}

#[test]
fn sentences_packed_before_clauses_are_considered() {
    // Two 4-char sentences pack into one 8-char chunk even though weak
    // punctuation inside them could split finer.
    let segmenter = Segmenter::new(8).unwrap();
    assert_eq!(
        segmenter.split("一，二。三，四。五六七八九。"),
        vec!["一，二。三，四。", "五六七八九。"]
    );
}

proptest! {
    #[test]
    fn concatenation_reconstructs_input(
        text in "[一二三四五六七八九十衣服保暖 。！？.!?，、；,;a-zA-Z0-9]{0,120}",
        max_chars in 1usize..40,
    ) {
        let segmenter = Segmenter::new(max_chars).unwrap();
        let chunks = segmenter.split(&text);
        prop_assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn every_chunk_within_ceiling(
        text in "[一二三四五六七八九十衣服保暖 。！？.!?，、；,;a-zA-Z0-9]{0,120}",
        max_chars in 1usize..40,
    ) {
        let segmenter = Segmenter::new(max_chars).unwrap();
        for chunk in segmenter.split(&text) {
            prop_assert!(chunk.chars().count() <= max_chars);
        }
    }

    #[test]
    fn chunk_count_is_at_least_one(
        text in "[衣服。，a-z]{0,60}",
        max_chars in 1usize..20,
    ) {
        let segmenter = Segmenter::new(max_chars).unwrap();
        prop_assert!(!segmenter.split(&text).is_empty());
    }
}
