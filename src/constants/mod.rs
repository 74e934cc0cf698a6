pub mod messages;
pub mod prompts;
