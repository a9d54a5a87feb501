use std::collections::HashMap;

use config::word_cloud::WordCloudConfig;
use serde::{Deserialize, Serialize};

use super::token_filter::TokenFilter;
use super::tokenizer::{TokenStream, Tokenizer};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WordFrequency {
    pub text: String,
    pub count: usize,
}

/// Counts filtered tokens over any number of texts.
pub struct WordCloudBuilder<T: Tokenizer> {
    tokenizer: T,
    filter: TokenFilter,
    max_words: usize,
    counts: HashMap<String, usize>,
}

impl<T: Tokenizer> WordCloudBuilder<T> {
    pub fn new(tokenizer: T, config: &WordCloudConfig) -> Self {
        Self {
            tokenizer,
            filter: TokenFilter::new(config),
            max_words: config.max_words,
            counts: HashMap::new(),
        }
    }

    pub fn add_text(&mut self, text: &str) {
        let mut stream = self.tokenizer.input(text);
        while let Some(token) = stream.next() {
            if let Some(word) = self.filter.apply(&token.text) {
                *self.counts.entry(word).or_insert(0) += 1;
            }
        }
    }

    pub fn num_distinct_words(&self) -> usize {
        self.counts.len()
    }

    /// Most frequent words first, ties broken alphabetically, at most `max_words` entries.
    pub fn build(&self) -> Vec<WordFrequency> {
        let mut words: Vec<WordFrequency> = self
            .counts
            .iter()
            .map(|(text, &count)| WordFrequency {
                text: text.clone(),
                count,
            })
            .collect();
        words.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.text.cmp(&b.text)));
        words.truncate(self.max_words);
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word_cloud::WhiteSpaceTokenizer;

    #[test]
    fn test_counts_and_order() {
        let mut builder = WordCloudBuilder::new(WhiteSpaceTokenizer, &WordCloudConfig::default());
        builder.add_text("Planning takes time. Time is short!");
        builder.add_text("time planning budget");

        let words = builder.build();

        assert_eq!(
            words,
            vec![
                WordFrequency { text: "time".to_string(), count: 3 },
                WordFrequency { text: "planning".to_string(), count: 2 },
                WordFrequency { text: "budget".to_string(), count: 1 },
                WordFrequency { text: "is".to_string(), count: 1 },
                WordFrequency { text: "short".to_string(), count: 1 },
                WordFrequency { text: "takes".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_max_words() {
        let mut config = WordCloudConfig::default();
        config.max_words = 2;
        let mut builder = WordCloudBuilder::new(WhiteSpaceTokenizer, &config);
        builder.add_text("alpha beta gamma beta gamma gamma");

        let words = builder.build();

        assert_eq!(builder.num_distinct_words(), 3);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text, "gamma");
        assert_eq!(words[1].text, "beta");
    }

    #[test]
    fn test_empty() {
        let builder = WordCloudBuilder::new(WhiteSpaceTokenizer, &WordCloudConfig::default());
        assert!(builder.build().is_empty());
    }
}
