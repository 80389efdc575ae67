//! Tests for buzz scoring.

use buzzcast_core::{Article, Category, ScoredArticle};
use buzzcast_scoring::{BuzzScorer, ScoringWeights, normalize, rank, select_top};

fn article(title: &str, snippet: &str, category: Category) -> Article {
    Article::builder()
        .title(title)
        .content_snippet(snippet)
        .category(category)
        .build()
        .unwrap()
}

#[test]
fn test_mixed_theme_and_intent_article() {
    let scored = BuzzScorer::default().score(&article(
        "副業収入が2倍に、円安で家計も揺れる",
        "ふるさと納税や確定申告の違いを整理する動きが出ている",
        Category::Business,
    ));

    assert_eq!(*scored.buzz_score(), 14);
    assert_eq!(
        scored.trending_topics(),
        &["#資産形成".to_string(), "#家計管理".to_string(), "#キャリア".to_string()]
    );
    for keyword in ["円安", "副業", "ふるさと納税", "確定申告"] {
        assert!(scored.matched_keywords().iter().any(|k| k == keyword), "missing {keyword}");
    }
}

#[test]
fn test_matched_keywords_follow_scan_order() {
    let scored = BuzzScorer::default().score(&article(
        "副業収入が2倍に、円安で家計も揺れる",
        "ふるさと納税や確定申告の違いを整理する動きが出ている",
        Category::Business,
    ));

    assert_eq!(
        scored.matched_keywords(),
        &["円安", "ふるさと納税", "確定申告", "副業", "違い", "整理"]
    );
}

#[test]
fn test_no_matches_scores_zero() {
    let scored = BuzzScorer::default().score(&article(
        "小さな街のイベントレポート",
        "地元の祭りが開催された",
        Category::News,
    ));

    assert_eq!(*scored.buzz_score(), 0);
    assert!(scored.matched_keywords().is_empty());
    assert!(scored.trending_topics().is_empty());
}

#[test]
fn test_category_bonus_applies_once() {
    let scorer = BuzzScorer::default();
    let ai = scorer.score(&article("街の話題", "", Category::Ai));
    let business = scorer.score(&article("街の話題", "", Category::Business));
    let other = scorer.score(&article("街の話題", "", Category::Other("sports".into())));

    assert_eq!(*ai.buzz_score(), 2);
    assert_eq!(*business.buzz_score(), 1);
    assert_eq!(*other.buzz_score(), 0);
}

#[test]
fn test_numeric_bonus_applies_once() {
    let scorer = BuzzScorer::default();
    let one = scorer.score(&article("売上が3倍", "", Category::News));
    let many = scorer.score(&article("売上が3倍、利益は50%増、総額1兆円", "", Category::News));

    assert_eq!(*one.buzz_score(), 2);
    assert_eq!(*many.buzz_score(), 2);
}

#[test]
fn test_full_width_text_matches() {
    let scored = BuzzScorer::default().score(&article("ＣｈａｔＧＰＴの新機能", "", Category::News));

    assert_eq!(scored.matched_keywords(), &["ChatGPT", "新機能"]);
    assert_eq!(scored.trending_topics(), &["#AI活用".to_string(), "#テック".to_string()]);
    assert_eq!(*scored.buzz_score(), 4);
}

#[test]
fn test_full_width_numbers_trigger_bonus() {
    let scored = BuzzScorer::default().score(&article("値上げ率は１０％", "", Category::News));
    // theme 2 + numeric 2
    assert_eq!(*scored.buzz_score(), 4);
}

#[test]
fn test_topics_capped_at_three() {
    let scored = BuzzScorer::default().score(&article(
        "円安と節約と転職とChatGPTとiPhone",
        "",
        Category::News,
    ));

    assert_eq!(scored.trending_topics().len(), 3);
    assert_eq!(scored.trending_topics()[0], "#資産形成");
}

#[test]
fn test_scoring_is_deterministic() {
    let scorer = BuzzScorer::default();
    let input = article("円安の影響を解説", "物価と年金の違い", Category::Business);
    assert_eq!(scorer.score(&input), scorer.score(&input));
}

#[test]
fn test_adding_keyword_never_decreases_score() {
    let scorer = BuzzScorer::default();
    let base = scorer.score(&article("円安が続く", "", Category::News));
    let more = scorer.score(&article("円安が続く、転職市場も", "", Category::News));
    assert!(more.buzz_score() >= base.buzz_score());
}

#[test]
fn test_custom_weights() {
    let weights = ScoringWeights {
        theme: 5,
        ..ScoringWeights::default()
    };
    let scored = BuzzScorer::new(weights).score(&article("円安", "", Category::News));
    assert_eq!(*scored.buzz_score(), 5);
}

#[test]
fn test_weights_deserialize_with_defaults() {
    let weights: ScoringWeights = toml::from_str("numeric = 4").unwrap();
    assert_eq!(weights.numeric, 4);
    assert_eq!(weights.theme, 2);
}

#[test]
fn test_normalize_keeps_long_vowel_mark() {
    assert_eq!(normalize("アップデート"), "アップデート");
    assert_eq!(normalize("Ａ‐Ｂ"), "a-b");
}

fn scored(title: &str, score: u32) -> ScoredArticle {
    ScoredArticle::new(article(title, "", Category::News), score, vec![], vec![])
}

#[test]
fn test_select_top_first_max_wins() {
    let batch = vec![scored("a", 1), scored("b", 4), scored("c", 4), scored("d", 2)];
    assert_eq!(select_top(&batch).unwrap().article().title(), "b");
}

#[test]
fn test_select_top_empty() {
    assert!(select_top(&[]).is_none());
}

#[test]
fn test_rank_is_stable_descending() {
    let ranked = rank(vec![scored("a", 1), scored("b", 4), scored("c", 4), scored("d", 2)]);
    let titles: Vec<_> = ranked.iter().map(|s| s.article().title().as_str()).collect();
    assert_eq!(titles, vec!["b", "c", "d", "a"]);
}
