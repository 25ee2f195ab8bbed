//! End-to-end generation flows over a small corpus

use rand::rngs::StdRng;
use rand::SeedableRng;
use wenan_core::{classify, generator_from_paragraphs, Category, TemplateLibrary};

const VEST_TEMPLATE: &str = "这款羽绒马甲今年直接卖爆了，内里填充优质白鸭绒，蓬松度够，穿着轻薄不臃肿，经典大方的版型，不挑年龄身材，内搭外穿都出彩。";
const JACKET_TEMPLATE: &str = "皮尔卡丹的高档保暖羽绒服外套很不错，直发正品有保障，买着放心，秋冬有这么一件穿搭直接省事儿，保暖时髦两手抓，关键价格还这么划算。";
const GENERIC_TEMPLATE: &str = "反季买衣服真的能省好几百啊，今天的价格低到我亲眼见了才敢信，你点开小黄车看看，妥妥的捡大便宜，抢到的大哥收到货保准高兴得合不拢嘴。";

fn corpus() -> Vec<String> {
    vec![
        VEST_TEMPLATE.to_string(),
        JACKET_TEMPLATE.to_string(),
        GENERIC_TEMPLATE.to_string(),
    ]
}

#[test]
fn corpus_partition_is_complete_and_disjoint() {
    let library = TemplateLibrary::from_paragraphs(corpus());
    assert_eq!(library.len(), 3);
    assert_eq!(library.templates(Category::DownVest).len(), 1);
    assert_eq!(library.templates(Category::DownJacket).len(), 1);
    assert_eq!(library.templates(Category::Other).len(), 1);
    let counted: usize = library
        .category_counts()
        .into_iter()
        .map(|(_, count)| count)
        .sum();
    assert_eq!(counted, library.len());
}

#[test]
fn vest_request_merges_name_and_features() {
    let generator = generator_from_paragraphs(corpus()).unwrap();
    let copy = generator
        .generate(
            "白鸭绒立领马甲",
            "白鸭绒填充，保暖又轻便，版型宽松",
            Some(0),
        )
        .unwrap();

    assert_eq!(copy.category, Category::DownVest);
    assert_eq!(copy.template_index, 0);
    assert_eq!(copy.total_templates, 1);
    assert_eq!(
        copy.content,
        "这款白鸭绒立领马甲今年直接卖爆了，内里填充优质白鸭绒，蓬松度够，穿着轻薄不臃肿，经典大方的版型，不挑年龄身材，内搭外穿都出彩，保暖、轻便、宽松。"
    );
}

#[test]
fn jacket_request_keeps_brand_framing() {
    let generator = generator_from_paragraphs(corpus()).unwrap();
    let copy = generator
        .generate("轻薄连帽羽绒服", "防风又透气", Some(0))
        .unwrap();

    assert_eq!(copy.category, Category::DownJacket);
    assert_eq!(
        copy.content,
        "皮尔卡丹的轻薄连帽羽绒服很不错，直发正品有保障，买着放心，秋冬有这么一件穿搭直接省事儿，保暖时髦两手抓，关键价格还这么划算，防风、透气。"
    );
}

#[test]
fn unmatched_product_uses_catch_all_bucket() {
    let generator = generator_from_paragraphs(corpus()).unwrap();
    let copy = generator.generate("直筒牛仔裤", "显瘦百搭", Some(0)).unwrap();

    assert_eq!(classify("直筒牛仔裤", "显瘦百搭"), Category::Other);
    assert_eq!(copy.category, Category::Other);
    assert!(copy.content.starts_with("反季买衣服真的能省好几百啊"));
}

#[test]
fn returned_index_reproduces_the_same_template() {
    let generator = generator_from_paragraphs(corpus()).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let first = generator
        .generate_with_rng("轻薄连帽羽绒服", "防风", None, &mut rng)
        .unwrap();
    let replay = generator
        .generate("轻薄连帽羽绒服", "防风", Some(first.template_index))
        .unwrap();
    assert_eq!(first, replay);
}

#[test]
fn empty_corpus_yields_no_template_sentinel() {
    let generator = generator_from_paragraphs(Vec::<String>::new()).unwrap();
    assert!(generator.generate("羽绒服", "保暖", None).is_none());
}
