use serde::{Deserialize, Serialize};

pub const OPTIONS_PER_QUESTION: usize = 4;

/// A single multiple-choice question as produced by the model.
///
/// `options` are formatted as `"<letter>) <text>"` and `answer` repeats one of
/// them in full.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl QuizQuestion {
    pub fn new(
        question: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            answer: answer.into(),
        }
    }

    pub fn has_expected_option_count(&self) -> bool {
        self.options.len() == OPTIONS_PER_QUESTION
    }

    /// Position of the option that matches `answer`, ignoring surrounding whitespace.
    pub fn answer_index(&self) -> Option<usize> {
        let answer = self.answer.trim();
        self.options
            .iter()
            .position(|option| option.trim() == answer)
    }
}
