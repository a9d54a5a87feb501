pub mod builder;
pub mod token_filter;
pub mod tokenizer;
pub mod white_space_tokenizer;

pub use builder::{WordCloudBuilder, WordFrequency};
pub use token_filter::TokenFilter;
pub use tokenizer::{Token, TokenStream, Tokenizer};
pub use white_space_tokenizer::WhiteSpaceTokenizer;
