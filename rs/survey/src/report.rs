use anyhow::Result;
use config::pca::PcaConfig;
use log::info;
use pca::pca::compute_pca;
use serde::{Deserialize, Serialize};

use crate::feature_space::FeatureSpace;
use crate::response::SurveyResponse;
use crate::vectorizer::Vectorizer;
use crate::word_cloud::WordFrequency;

pub const LOAD_FAILED_MESSAGE: &str = "データの取得に失敗しました";

pub fn insufficient_data_message(min_samples: usize) -> String {
    format!("PCAには少なくとも{}件のデータが必要です", min_samples)
}

pub fn partial_components_message(found: usize, requested: usize) -> String {
    format!("主成分を{}個中{}個しか抽出できませんでした", requested, found)
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Ok,
    /// Fewer components than requested, the points are still usable.
    Partial,
    /// Not enough responses yet. Expected early in data collection.
    InsufficientData,
    /// The data source failed.
    LoadFailed,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PcaPoint {
    pub id: String,
    pub respondent_type: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PcaReport {
    pub status: ReportStatus,
    pub points: Vec<PcaPoint>,
    /// Percent (0..=100) per component found.
    #[serde(rename = "explainedVariance")]
    pub explained_variance: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PcaReport {
    pub fn insufficient_data(min_samples: usize) -> Self {
        Self {
            status: ReportStatus::InsufficientData,
            points: vec![],
            explained_variance: vec![],
            message: Some(insufficient_data_message(min_samples)),
        }
    }

    pub fn load_failed() -> Self {
        Self {
            status: ReportStatus::LoadFailed,
            points: vec![],
            explained_variance: vec![],
            message: Some(LOAD_FAILED_MESSAGE.to_string()),
        }
    }
}

/// Projects responses onto their first two principal components.
///
/// Fewer than `config.required_samples()` responses short-circuit to an insufficient data report
/// without running the engine. Points keep the input order, ids and respondent types.
pub fn build_pca_report(
    responses: &[SurveyResponse],
    space: &FeatureSpace,
    config: &PcaConfig,
) -> Result<PcaReport> {
    let required = config.required_samples();
    if responses.len() < required {
        info!(
            "Skipping PCA: {} responses, need {}",
            responses.len(),
            required
        );
        return Ok(PcaReport::insufficient_data(required));
    }

    let rows = Vectorizer::new(space).vectorize_all(responses);
    let result = compute_pca(&rows, config)?;

    let points = responses
        .iter()
        .zip(result.points_2d())
        .map(|(response, (x, y))| PcaPoint {
            id: response.id.clone(),
            respondent_type: response.respondent_type.clone(),
            x,
            y,
        })
        .collect();
    let explained_variance: Vec<f64> = result
        .explained_variance
        .iter()
        .map(|fraction| fraction * 100.0)
        .collect();

    let (status, message) = if result.num_components() < config.num_components {
        (
            ReportStatus::Partial,
            Some(partial_components_message(
                result.num_components(),
                config.num_components,
            )),
        )
    } else {
        (ReportStatus::Ok, None)
    };
    info!(
        "PCA report over {} responses (feature space v{}): explained variance {:?}",
        responses.len(),
        space.version(),
        explained_variance
    );

    Ok(PcaReport {
        status,
        points,
        explained_variance,
        message,
    })
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WordCloudReport {
    pub status: ReportStatus,
    pub words: Vec<WordFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WordCloudReport {
    pub fn load_failed() -> Self {
        Self {
            status: ReportStatus::LoadFailed,
            words: vec![],
            message: Some(LOAD_FAILED_MESSAGE.to_string()),
        }
    }
}
