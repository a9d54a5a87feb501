use std::collections::HashMap;

/// Bump whenever either code list changes. Plots computed under different versions are not
/// comparable, since the same index means a different answer.
pub const FEATURE_SPACE_VERSION: u32 = 1;

pub const CHALLENGE_CODES: [&str; 11] = [
    "time_shortage",
    "skill_gap",
    "cost",
    "information_overload",
    "communication",
    "tool_complexity",
    "data_quality",
    "security",
    "motivation",
    "management_support",
    "other",
];

pub const EXPECTATION_CODES: [&str; 11] = [
    "efficiency",
    "quality",
    "cost_reduction",
    "learning",
    "collaboration",
    "automation",
    "decision_support",
    "creativity",
    "customer_experience",
    "work_life_balance",
    "other",
];

/// Maps answer codes to vector indices. Challenge codes come first, expectation codes follow at
/// an offset of `challenge_codes.len()`.
#[derive(Debug, Clone)]
pub struct FeatureSpace {
    version: u32,
    challenge_codes: Vec<String>,
    expectation_codes: Vec<String>,
    challenge_index: HashMap<String, usize>,
    expectation_index: HashMap<String, usize>,
}

impl FeatureSpace {
    pub fn new(version: u32, challenge_codes: &[&str], expectation_codes: &[&str]) -> Self {
        let to_owned = |codes: &[&str]| codes.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        let index = |codes: &[&str]| {
            codes
                .iter()
                .enumerate()
                .map(|(i, c)| (c.to_string(), i))
                .collect::<HashMap<_, _>>()
        };
        Self {
            version,
            challenge_codes: to_owned(challenge_codes),
            expectation_codes: to_owned(expectation_codes),
            challenge_index: index(challenge_codes),
            expectation_index: index(expectation_codes),
        }
    }

    /// The code lists used by the survey form.
    pub fn survey_v1() -> Self {
        Self::new(FEATURE_SPACE_VERSION, &CHALLENGE_CODES, &EXPECTATION_CODES)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn dimension(&self) -> usize {
        self.challenge_codes.len() + self.expectation_codes.len()
    }

    pub fn index_of_challenge(&self, code: &str) -> Option<usize> {
        self.challenge_index.get(code).copied()
    }

    pub fn index_of_expectation(&self, code: &str) -> Option<usize> {
        self.expectation_index
            .get(code)
            .map(|i| i + self.challenge_codes.len())
    }

    /// Human readable name of every dimension, in vector order.
    pub fn labels(&self) -> Vec<String> {
        self.challenge_codes
            .iter()
            .map(|c| format!("challenge:{}", c))
            .chain(
                self.expectation_codes
                    .iter()
                    .map(|c| format!("expectation:{}", c)),
            )
            .collect()
    }
}

impl Default for FeatureSpace {
    fn default() -> Self {
        Self::survey_v1()
    }
}
