//! Generation prompt.

use buzzcast_core::ScoredArticle;

/// Build the instruction sent to the text generator.
///
/// The prompt fixes a persona, the length and sentence limits, and the
/// constructs the output must not contain. Model output is still capped and
/// truncated afterwards.
pub fn build_prompt(scored: &ScoredArticle, max_length: usize, max_sentences: usize) -> String {
    let article = scored.article();
    let keywords = if scored.matched_keywords().is_empty() {
        "なし".to_string()
    } else {
        scored.matched_keywords().join(", ")
    };

    format!(
        "あなたは経済・テクノロジーニュースを分かりやすく伝える日本語のSNS編集者です。\n\
         以下のニュースを元に、読者が内容を一目で理解できる投稿文を1つ作成してください。\n\
         \n\
         【ニュース情報】\n\
         カテゴリ: {category}\n\
         タイトル: {title}\n\
         内容: {snippet}\n\
         出典: {source}\n\
         注目キーワード: {keywords}\n\
         \n\
         【ルール】\n\
         - {max_length}文字以内\n\
         - {max_sentences}文以内で、各文は「。」で終える\n\
         - 事実に基づき、誇張や断定を避ける\n\
         - 読者にとっての影響や要点を具体的に伝える\n\
         \n\
         【禁止事項】\n\
         - URL\n\
         - ハッシュタグ\n\
         - 絵文字の多用\n\
         - 「衝撃」「ヤバい」などの煽り表現\n\
         \n\
         投稿本文のみを出力してください。",
        category = article.category().as_str().to_uppercase(),
        title = article.title(),
        snippet = article.content_snippet(),
        source = article.source(),
    )
}
