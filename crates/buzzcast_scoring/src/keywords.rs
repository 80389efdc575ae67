//! The keyword table.

/// Whether a group names a topic or a reader intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// Topical theme; carries a hashtag.
    Theme,
    /// Actionable framing such as comparisons or how-tos.
    Intent,
}

/// A weighted group of keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordGroup {
    /// Group name, for logs.
    pub name: &'static str,
    /// Theme or intent.
    pub kind: GroupKind,
    /// Hashtag suggested when the group matches.
    pub tag: Option<&'static str>,
    /// Literal keywords, in scan order.
    pub keywords: &'static [&'static str],
}

/// Groups in scan order: themes first, then intents.
pub const KEYWORD_GROUPS: &[KeywordGroup] = &[
    KeywordGroup {
        name: "asset_building",
        kind: GroupKind::Theme,
        tag: Some("#資産形成"),
        keywords: &[
            "円安", "円高", "投資", "NISA", "iDeCo", "株価", "金利", "利上げ", "資産運用", "インフレ",
        ],
    },
    KeywordGroup {
        name: "household",
        kind: GroupKind::Theme,
        tag: Some("#家計管理"),
        keywords: &[
            "ふるさと納税",
            "確定申告",
            "節約",
            "物価",
            "値上げ",
            "電気代",
            "税金",
            "年金",
            "保険料",
            "家計簿",
        ],
    },
    KeywordGroup {
        name: "career",
        kind: GroupKind::Theme,
        tag: Some("#キャリア"),
        keywords: &[
            "副業", "転職", "年収", "給料", "昇給", "リスキリング", "フリーランス", "起業",
        ],
    },
    KeywordGroup {
        name: "ai",
        kind: GroupKind::Theme,
        tag: Some("#AI活用"),
        keywords: &[
            "ChatGPT", "生成AI", "Claude", "Gemini", "OpenAI", "LLM", "AIエージェント", "人工知能",
        ],
    },
    KeywordGroup {
        name: "tech",
        kind: GroupKind::Theme,
        tag: Some("#テック"),
        keywords: &["iPhone", "半導体", "スマホ", "新機能", "アップデート", "セキュリティ"],
    },
    KeywordGroup {
        name: "comparison",
        kind: GroupKind::Intent,
        tag: None,
        keywords: &["違い", "整理", "比較", "まとめ", "解説", "ランキング"],
    },
    KeywordGroup {
        name: "how_to",
        kind: GroupKind::Intent,
        tag: None,
        keywords: &["方法", "やり方", "注意点", "対策", "始め方", "コツ", "損しない"],
    },
];
