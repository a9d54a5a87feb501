use std::str::CharIndices;

use super::tokenizer::{Token, TokenStream, Tokenizer};

/// Splits text on Unicode whitespace, including the ideographic space used in Japanese input.
#[derive(Default)]
pub struct WhiteSpaceTokenizer;

impl Tokenizer for WhiteSpaceTokenizer {
    type TokenStream<'a> = WhiteSpaceTokenStream<'a>;

    fn input<'a>(&self, text: &'a str) -> WhiteSpaceTokenStream<'a> {
        WhiteSpaceTokenStream::new(text)
    }
}

pub struct WhiteSpaceTokenStream<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
    token: Token,
}

impl<'a> WhiteSpaceTokenStream<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices(),
            token: Token::new(String::new()),
        }
    }

    fn find_start(&mut self) -> Option<usize> {
        self.chars
            .by_ref()
            .find(|(_, ch)| !ch.is_whitespace())
            .map(|(offset, _)| offset)
    }

    fn find_end(&mut self) -> usize {
        self.chars
            .by_ref()
            .find(|(_, ch)| ch.is_whitespace())
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }
}

impl<'a> TokenStream for WhiteSpaceTokenStream<'a> {
    fn advance(&mut self) -> bool {
        match self.find_start() {
            Some(start_offset) => {
                let end_offset = self.find_end();
                self.token = Token::new(self.text[start_offset..end_offset].to_string());
                true
            }
            None => false,
        }
    }

    fn token(&self) -> Token {
        self.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<String> {
        let mut stream = WhiteSpaceTokenizer.input(text);
        let mut tokens = vec![];
        while let Some(token) = stream.next() {
            tokens.push(token.text);
        }
        tokens
    }

    #[test]
    fn test_token_stream_simple() {
        assert_eq!(collect("happy new year"), vec!["happy", "new", "year"]);
    }

    #[test]
    fn test_token_stream_multiple_whitespace() {
        assert_eq!(
            collect("   .  happy      new\tyear\n"),
            vec![".", "happy", "new", "year"]
        );
    }

    #[test]
    fn test_token_stream_ideographic_space() {
        assert_eq!(collect("時間　不足 です"), vec!["時間", "不足", "です"]);
    }

    #[test]
    fn test_token_stream_empty() {
        assert!(collect("").is_empty());
        assert!(collect("   ").is_empty());
    }
}
