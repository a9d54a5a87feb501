use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WordCloudConfig {
    /// Tokens shorter than this (in characters) are dropped.
    /// Default: 2
    pub min_token_length: usize,

    /// Maximum number of words returned, most frequent first.
    /// Default: 100
    pub max_words: usize,

    /// Lowercase tokens before counting.
    /// Default: true
    pub lowercase: bool,

    /// Tokens that are never counted. Compared after lowercasing.
    pub stop_words: Vec<String>,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        let stop_words = [
            "the", "and", "for", "are", "but", "not", "you", "with", "this", "that", "from",
            "have", "was", "were", "there", "です", "ます", "した", "こと", "もの", "ため",
            "よう", "これ", "それ", "あれ",
        ];
        Self {
            min_token_length: 2,
            max_words: 100,
            lowercase: true,
            stop_words: stop_words.iter().map(|w| w.to_string()).collect(),
        }
    }
}
