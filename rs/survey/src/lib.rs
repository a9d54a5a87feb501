pub mod feature_space;
pub mod report;
pub mod response;
pub mod service;
pub mod source;
pub mod vectorizer;
pub mod word_cloud;
