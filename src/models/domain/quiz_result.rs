use serde::{Deserialize, Serialize};

use super::QuizQuestion;

/// Number of questions the summary prompt asks the model for.
pub const EXPECTED_QUESTION_COUNT: usize = 10;

/// Summary and quiz generated for one uploaded document.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizResult {
    pub summary: String,
    pub questions: Vec<QuizQuestion>,
}
