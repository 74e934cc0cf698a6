pub const SUMMARY_AND_QUIZ_PROMPT: &str = r#"You are an expert educator and content analyst. Based on the document text provided at the end of this message, produce two things.

## 1. SUMMARY

A detailed, well-structured summary of the text that:
- Captures all key concepts, arguments, and important facts
- Includes examples or explanations when relevant
- Follows the logical flow of ideas across the sections
- Avoids repetition while keeping rich detail

The summary should be about 3-5 paragraphs long, not a single short paragraph.

## 2. QUIZ

A set of exactly 10 high-quality multiple-choice questions (MCQs) that test comprehension:
- Each question focuses on a different concept or fact from the text
- Each question has exactly 4 options labeled "a", "b", "c", "d"
- Each question states the correct answer explicitly

## OUTPUT FORMAT

Format the entire output as a single valid JSON object with exactly two keys: "summary" and "questions".

- "summary": a single string
- "questions": an array of exactly 10 objects, each shaped as:
  {
    "question": "string",
    "options": ["a) ...", "b) ...", "c) ...", "d) ..."],
    "answer": "string"
  }

The "answer" value MUST be the exact, complete text of the correct option, for example "b) Photosynthesis", not just the letter.

Return ONLY the JSON object. Do not include explanatory text, markdown, or code fences."#;

pub const PERFORMANCE_ANALYSIS_PROMPT: &str = r#"Based on this:
1. Identify the student's strong areas (topics where answers are correct).
2. Identify the student's weak areas (topics where answers are wrong or missing).
3. Provide personalized feedback and suggestions for improvement.

A "student_answer" of "No answer" means the question was skipped.

## OUTPUT FORMAT

Format your response strictly as a single valid JSON object with exactly these keys:
{
  "strong_areas": ["topic1", "topic2", ...],
  "weak_areas": ["topic3", "topic4", ...],
  "feedback": "Your feedback message here"
}

Return ONLY the JSON object. Do not include explanatory text, markdown, or code fences."#;

pub const PERFORMANCE_ANALYSIS_PREAMBLE: &str = "You are an expert tutor analyzing a student's quiz performance.

The quiz had these questions (with correct answers) and the student's responses:";
