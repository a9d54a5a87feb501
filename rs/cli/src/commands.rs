use std::path::Path;

use anyhow::Result;
use config::analysis::AnalysisConfig;
use log::info;
use serde::Serialize;
use survey::feature_space::FeatureSpace;
use survey::report::{PcaReport, WordCloudReport};
use survey::service::AnalysisService;
use survey::source::JsonFileSource;

/// Command line values that take precedence over the config file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub max_words: Option<usize>,
}

/// Loads the config file when given, otherwise the defaults, then applies `overrides`.
pub fn resolve_config(path: Option<&Path>, overrides: &Overrides) -> Result<AnalysisConfig> {
    let mut config = match path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            AnalysisConfig::from_yaml_file(path)?
        }
        None => AnalysisConfig::default(),
    };
    if let Some(seed) = overrides.seed {
        config.pca.seed = seed;
    }
    if let Some(max_words) = overrides.max_words {
        config.word_cloud.max_words = max_words;
    }
    Ok(config)
}

fn service(input: &Path, config: AnalysisConfig) -> AnalysisService<JsonFileSource> {
    AnalysisService::new(
        JsonFileSource::new(input),
        FeatureSpace::survey_v1(),
        config,
    )
}

/// An unreadable input still yields a `load_failed` report rather than an error.
pub fn pca_report(input: &Path, config: AnalysisConfig) -> Result<PcaReport> {
    service(input, config).pca_report()
}

pub fn word_cloud_report(input: &Path, config: AnalysisConfig) -> WordCloudReport {
    service(input, config).word_cloud()
}

pub fn render_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
