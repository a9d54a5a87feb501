use serde::{Deserialize, Serialize};

/// One survey submission as delivered by the data source.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SurveyResponse {
    pub id: String,
    pub respondent_type: String,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub expectations: Vec<String>,
    /// Free form comment, feeds the word cloud.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_text: Option<String>,
}

impl SurveyResponse {
    pub fn new(id: &str, respondent_type: &str, challenges: &[&str], expectations: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            respondent_type: respondent_type.to_string(),
            challenges: challenges.iter().map(|c| c.to_string()).collect(),
            expectations: expectations.iter().map(|c| c.to_string()).collect(),
            free_text: None,
        }
    }

    pub fn with_free_text(mut self, text: &str) -> Self {
        self.free_text = Some(text.to_string());
        self
    }
}
