pub mod alignment_record;
pub mod answer_set;
pub mod performance_analysis;
pub mod quiz_question;
pub mod quiz_result;
pub use alignment_record::AlignmentRecord;
pub use answer_set::AnswerSet;
pub use performance_analysis::PerformanceAnalysis;
pub use quiz_question::QuizQuestion;
pub use quiz_result::QuizResult;
