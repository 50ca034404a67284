//! Interpreting what the agent sends back.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PdtError, Result};

/// A question the planner wants answered before finalizing a spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClarifyingQuestion {
    /// Planner-assigned identifier.
    #[serde(default)]
    pub question_id: String,
    /// The question text.
    pub question: String,
    /// The user's answer, filled in locally.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub answer: String,
}

/// The planner's JSON reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerResponse {
    /// Markdown draft of the specification.
    pub draft_spec: String,
    /// Open questions, possibly none.
    #[serde(default)]
    pub clarifying_questions: Vec<ClarifyingQuestion>,
}

impl PlannerResponse {
    /// Parses the JSON object embedded in `raw` agent output.
    ///
    /// # Errors
    ///
    /// Returns [`PdtError::MissingJson`] when `raw` holds no `{...}` span and
    /// [`PdtError::Json`] when the span is not a planner response.
    pub fn parse(raw: &str) -> Result<Self> {
        let json = extract_json_object(raw).ok_or(PdtError::MissingJson)?;
        let response: Self = serde_json::from_str(json)
            .map_err(|source| PdtError::Json { context: "error parsing planner response".into(), source })?;
        debug!(questions = response.clarifying_questions.len(), "parsed planner response");
        Ok(response)
    }
}

/// Returns the span from the first `{` to the last `}`.
///
/// Agents often wrap JSON in prose or a code fence; this ignores both.
#[must_use]
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

/// Trims a generated commit message and strips a surrounding code fence.
///
/// An opening fence line (with or without a language tag) and a closing fence
/// are removed.
#[must_use]
pub fn clean_commit_message(raw: &str) -> String {
    let trimmed = raw.trim();
    let Some(after_fence) = trimmed.strip_prefix("```") else {
        return trimmed.to_string();
    };
    let body = match after_fence.split_once('\n') {
        Some((tag, rest)) if !tag.trim().contains(' ') => rest,
        _ => after_fence,
    };
    body.strip_suffix("```").unwrap_or(body).trim().to_string()
}
