use std::{sync::Arc, time::Duration};

use thiserror::Error;

use crate::errors::AppError;
use crate::services::completion_client::{CompletionClient, CompletionError};

const CODE_FENCE: &str = "```";
const JSON_TAG: &str = "json";

#[derive(Debug, Error)]
pub enum CompletionFailure {
    #[error("completion service unavailable: {0}")]
    Unavailable(#[source] CompletionError),

    #[error("completion timed out after {0:?}")]
    TimedOut(Duration),
}

impl CompletionFailure {
    /// Maps the failure to the caller-facing error for one request flow.
    pub fn into_app_error(self, unavailable_message: &'static str) -> AppError {
        match self {
            CompletionFailure::Unavailable(_) => AppError::UpstreamUnavailable(unavailable_message),
            CompletionFailure::TimedOut(_) => AppError::UpstreamTimeout,
        }
    }
}

/// Unwraps a completion the model wrapped in Markdown code fences.
///
/// Removes a leading fence (with an optional `json` tag right after it) and a
/// trailing fence, then trims, repeating until neither end carries a fence.
/// Input with no fence at either end is returned unchanged, so applying the
/// function to its own output is a no-op.
pub fn strip_code_fences(raw: &str) -> String {
    let Some(mut body) = strip_one_fence(raw) else {
        return raw.to_string();
    };
    while let Some(inner) = strip_one_fence(body) {
        body = inner;
    }
    body.to_string()
}

/// One layer of fences, or `None` when the trimmed text has none.
fn strip_one_fence(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if !trimmed.starts_with(CODE_FENCE) && !trimmed.ends_with(CODE_FENCE) {
        return None;
    }

    let mut body = trimmed;
    if let Some(rest) = body.strip_prefix(CODE_FENCE) {
        body = rest;
        if body
            .get(..JSON_TAG.len())
            .is_some_and(|tag| tag.eq_ignore_ascii_case(JSON_TAG))
        {
            body = &body[JSON_TAG.len()..];
        }
    }
    if let Some(rest) = body.strip_suffix(CODE_FENCE) {
        body = rest;
    }

    Some(body.trim())
}

/// The completion adapter: one bounded call, fence stripping, and logging of
/// upstream errors that never reach the caller.
pub struct ModelService {
    client: Arc<dyn CompletionClient>,
    timeout: Duration,
}

impl ModelService {
    pub fn new(client: Arc<dyn CompletionClient>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub async fn complete(&self, prompt: &str, request_id: &str) -> Result<String, CompletionFailure> {
        log::info!(
            "[{}] Sending prompt to completion service ({} chars)",
            request_id,
            prompt.len()
        );

        let raw = match tokio::time::timeout(self.timeout, self.client.complete(prompt)).await {
            Ok(Ok(raw)) => raw,
            Ok(Err(err)) => {
                log::error!("[{}] Error generating content: {}", request_id, err);
                return Err(CompletionFailure::Unavailable(err));
            }
            Err(_) => {
                log::error!(
                    "[{}] Completion service did not respond within {:?}",
                    request_id,
                    self.timeout
                );
                return Err(CompletionFailure::TimedOut(self.timeout));
            }
        };

        let normalized = strip_code_fences(&raw);
        if normalized.trim().is_empty() {
            log::error!("[{}] Completion service returned no text", request_id);
            return Err(CompletionFailure::Unavailable(CompletionError::Empty));
        }

        Ok(normalized)
    }
}
