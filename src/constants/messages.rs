// Caller-facing error text. Upstream detail stays in the server log.
pub const UPLOAD_AI_UNAVAILABLE: &str =
    "Failed to get response from AI due to an API error (check backend logs)";
pub const UPLOAD_AI_MALFORMED: &str = "Failed to parse structured JSON from AI";
pub const ANALYSIS_AI_UNAVAILABLE: &str = "Failed to get feedback from AI";
pub const ANALYSIS_AI_MALFORMED: &str = "Invalid JSON returned by AI";
