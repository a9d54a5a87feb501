pub mod analysis;
pub mod pca;
pub mod word_cloud;
