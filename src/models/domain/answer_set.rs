use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Placeholder sent to the model for questions the student skipped.
pub const NO_ANSWER: &str = "No answer";

/// The student's chosen option text, keyed by question index.
///
/// Keys arrive as JSON object keys, so they are decimal strings such as `"0"`.
/// A `null` value is treated the same as a missing key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AnswerSet(HashMap<String, Option<String>>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, index: usize, answer: impl Into<String>) {
        self.0.insert(index.to_string(), Some(answer.into()));
    }

    pub fn answer_for(&self, index: usize) -> Option<&str> {
        self.0
            .get(&index.to_string())
            .and_then(|answer| answer.as_deref())
    }

    pub fn answer_or_sentinel(&self, index: usize) -> &str {
        self.answer_for(index).unwrap_or(NO_ANSWER)
    }

    /// Keys that do not name a question in `0..question_count`, sorted.
    ///
    /// Only the canonical decimal form counts: `"01"` is rejected because it
    /// would never be looked up.
    pub fn invalid_keys(&self, question_count: usize) -> Vec<&str> {
        let mut invalid: Vec<&str> = self
            .0
            .keys()
            .filter(|key| {
                !key.parse::<usize>()
                    .is_ok_and(|index| index < question_count && index.to_string() == **key)
            })
            .map(String::as_str)
            .collect();
        invalid.sort_unstable();
        invalid
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(usize, String)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (usize, String)>>(iter: I) -> Self {
        let mut answers = Self::new();
        for (index, answer) in iter {
            answers.insert(index, answer);
        }
        answers
    }
}
