use serde::Serialize;

use super::{AnswerSet, QuizQuestion};

/// A question paired with the correct answer and what the student picked.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct AlignmentRecord<'a> {
    pub question: &'a str,
    pub options: &'a [String],
    pub correct_answer: &'a str,
    pub student_answer: &'a str,
}

/// One record per question, in quiz order.
pub fn align<'a>(questions: &'a [QuizQuestion], answers: &'a AnswerSet) -> Vec<AlignmentRecord<'a>> {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| AlignmentRecord {
            question: &question.question,
            options: &question.options,
            correct_answer: &question.answer,
            student_answer: answers.answer_or_sentinel(index),
        })
        .collect()
}
