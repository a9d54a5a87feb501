#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub text: String,
}

impl Token {
    /// Creates a new `Token` with the given text.
    pub fn new(text: String) -> Self {
        Self { text }
    }
}

pub trait TokenStream {
    /// Advances the stream to the next token.
    ///
    /// # Returns
    /// * `bool` - `true` if a token was successfully loaded, `false` if the end of the stream was reached.
    fn advance(&mut self) -> bool;

    /// Returns the current token in the stream.
    ///
    /// This should only be called after a successful call to `advance`.
    fn token(&self) -> Token;

    /// Advances the stream and returns the next token.
    fn next(&mut self) -> Option<Token> {
        if self.advance() {
            Some(self.token())
        } else {
            None
        }
    }
}

pub trait Tokenizer {
    type TokenStream<'a>: TokenStream;

    /// Creates a token stream for the given input text.
    fn input<'a>(&self, text: &'a str) -> Self::TokenStream<'a>;
}
