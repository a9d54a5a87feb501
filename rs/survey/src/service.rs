use anyhow::Result;
use config::analysis::AnalysisConfig;
use log::{error, info};

use crate::feature_space::FeatureSpace;
use crate::report::{build_pca_report, PcaReport, ReportStatus, WordCloudReport};
use crate::response::SurveyResponse;
use crate::source::ResponseSource;
use crate::word_cloud::{WhiteSpaceTokenizer, WordCloudBuilder};

/// Admin analysis endpoints over a response source. Load failures become `load_failed` reports so
/// the caller can tell them apart from "not enough data yet".
pub struct AnalysisService<S: ResponseSource> {
    source: S,
    space: FeatureSpace,
    config: AnalysisConfig,
}

impl<S: ResponseSource> AnalysisService<S> {
    pub fn new(source: S, space: FeatureSpace, config: AnalysisConfig) -> Self {
        Self {
            source,
            space,
            config,
        }
    }

    fn load(&self) -> Option<Vec<SurveyResponse>> {
        match self.source.load() {
            Ok(responses) => Some(responses),
            Err(e) => {
                error!("Failed to load survey responses: {:#}", e);
                None
            }
        }
    }

    pub fn pca_report(&self) -> Result<PcaReport> {
        match self.load() {
            Some(responses) => build_pca_report(&responses, &self.space, &self.config.pca),
            None => Ok(PcaReport::load_failed()),
        }
    }

    pub fn word_cloud(&self) -> WordCloudReport {
        let responses = match self.load() {
            Some(responses) => responses,
            None => return WordCloudReport::load_failed(),
        };

        let mut builder = WordCloudBuilder::new(WhiteSpaceTokenizer, &self.config.word_cloud);
        for text in responses.iter().filter_map(|r| r.free_text.as_deref()) {
            builder.add_text(text);
        }
        info!(
            "Word cloud over {} responses: {} distinct words",
            responses.len(),
            builder.num_distinct_words()
        );
        WordCloudReport {
            status: ReportStatus::Ok,
            words: builder.build(),
            message: None,
        }
    }
}
