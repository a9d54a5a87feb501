use crate::feature_space::FeatureSpace;
use crate::response::SurveyResponse;

/// Turns multi-select answers into 0/1 feature vectors over a fixed `FeatureSpace`.
pub struct Vectorizer<'a> {
    space: &'a FeatureSpace,
}

impl<'a> Vectorizer<'a> {
    pub fn new(space: &'a FeatureSpace) -> Self {
        Self { space }
    }

    /// Always `space.dimension()` long. Codes outside the space are ignored, duplicates count once.
    pub fn vectorize(&self, response: &SurveyResponse) -> Vec<f64> {
        let mut vector = vec![0.0; self.space.dimension()];
        let challenges = response
            .challenges
            .iter()
            .filter_map(|code| self.space.index_of_challenge(code));
        let expectations = response
            .expectations
            .iter()
            .filter_map(|code| self.space.index_of_expectation(code));
        for i in challenges.chain(expectations) {
            vector[i] = 1.0;
        }
        vector
    }

    pub fn vectorize_all(&self, responses: &[SurveyResponse]) -> Vec<Vec<f64>> {
        responses.iter().map(|r| self.vectorize(r)).collect()
    }
}
