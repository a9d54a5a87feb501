use std::collections::HashSet;

use config::word_cloud::WordCloudConfig;

/// Punctuation stripped from both ends of a token: ASCII plus the common full width marks.
fn is_punctuation(ch: char) -> bool {
    ch.is_ascii_punctuation()
        || matches!(
            ch,
            '、' | '。' | '，' | '．' | '「' | '」' | '『' | '』' | '（' | '）' | '！' | '？' | '・'
                | '…' | '：' | '；' | '〜' | '“' | '”' | '‘' | '’'
        )
}

/// Normalizes raw tokens and drops the ones not worth counting.
pub struct TokenFilter {
    min_token_length: usize,
    lowercase: bool,
    stop_words: HashSet<String>,
}

impl TokenFilter {
    pub fn new(config: &WordCloudConfig) -> Self {
        Self {
            min_token_length: config.min_token_length,
            lowercase: config.lowercase,
            stop_words: config
                .stop_words
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
        }
    }

    /// The normalized token, or `None` if it should be skipped.
    pub fn apply(&self, token: &str) -> Option<String> {
        let trimmed = token.trim_matches(is_punctuation);
        let normalized = if self.lowercase {
            trimmed.to_lowercase()
        } else {
            trimmed.to_string()
        };

        if normalized.chars().count() < self.min_token_length {
            return None;
        }
        if normalized.chars().all(|ch| ch.is_numeric()) {
            return None;
        }
        if self.stop_words.contains(&normalized.to_lowercase()) {
            return None;
        }
        Some(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> TokenFilter {
        TokenFilter::new(&WordCloudConfig::default())
    }

    #[test]
    fn test_trims_punctuation_and_lowercases() {
        assert_eq!(filter().apply("\"Planning!\""), Some("planning".to_string()));
        assert_eq!(filter().apply("「時間」。"), Some("時間".to_string()));
    }

    #[test]
    fn test_drops_short_numeric_and_stop_words() {
        assert_eq!(filter().apply("a"), None);
        assert_eq!(filter().apply("..."), None);
        assert_eq!(filter().apply("2024"), None);
        assert_eq!(filter().apply("The"), None);
        assert_eq!(filter().apply("です"), None);
    }

    #[test]
    fn test_min_length_counts_chars() {
        // Two characters, six bytes.
        assert_eq!(filter().apply("時間"), Some("時間".to_string()));
    }

    #[test]
    fn test_case_preserved_when_configured() {
        let mut config = WordCloudConfig::default();
        config.lowercase = false;
        let filter = TokenFilter::new(&config);
        assert_eq!(filter.apply("Rust"), Some("Rust".to_string()));
        // Stop words still match regardless of case.
        assert_eq!(filter.apply("THE"), None);
    }
}
