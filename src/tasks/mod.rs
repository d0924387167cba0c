//! Analysis tasks over normalized legal text.
//!
//! The four task kinds (summarize, risk detection, question answering,
//! contract comparison) share one pipeline: validate the request, build a
//! task-specific prompt, dispatch it to the generation backend with the
//! task's fixed model.

pub mod prompts;
mod runner;

use thiserror::Error;

use crate::extract::ExtractError;
use crate::llm::GenerateError;

pub use runner::TaskRunner;

/// Model used for summarize, risk, and compare tasks.
pub const FLASH_MODEL: &str = "gemini-2.5-flash";
/// Model used for question answering, which needs deeper reasoning over
/// quoted clauses.
pub const PRO_MODEL: &str = "gemini-2.5-pro";

/// Default summary language when the caller does not specify one.
pub const DEFAULT_LANGUAGE: &str = "English";

/// A validated-on-use analysis request.
#[derive(Debug, Clone)]
pub enum TaskRequest {
    Summarize { text: String, language: String },
    Risks { text: String },
    Qa { text: String, question: String },
    Compare { text_a: String, text_b: String },
}

/// Errors produced by the task pipeline.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Required request fields were missing or empty. User-correctable.
    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

impl TaskRequest {
    /// Build a summarize request, defaulting the language.
    pub fn summarize(text: String, language: Option<String>) -> Self {
        Self::Summarize {
            text,
            language: language
                .filter(|l| !l.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        }
    }

    /// The fixed model for this task kind.
    pub fn model(&self) -> &'static str {
        match self {
            Self::Qa { .. } => PRO_MODEL,
            Self::Summarize { .. } | Self::Risks { .. } | Self::Compare { .. } => FLASH_MODEL,
        }
    }

    /// JSON key the generated text is returned under.
    pub fn response_key(&self) -> &'static str {
        match self {
            Self::Summarize { .. } => "summary",
            Self::Risks { .. } => "risks",
            Self::Qa { .. } => "answer",
            Self::Compare { .. } => "comparison",
        }
    }

    /// Reject requests whose required fields are empty after trimming.
    pub fn validate(&self) -> Result<(), TaskError> {
        let invalid = |msg: &str| Err(TaskError::InvalidInput(msg.to_string()));
        match self {
            Self::Summarize { text, .. } | Self::Risks { text } => {
                if text.trim().is_empty() {
                    return invalid("No text provided.");
                }
            }
            Self::Qa { text, question } => {
                if text.trim().is_empty() || question.trim().is_empty() {
                    return invalid("Text and question required.");
                }
            }
            Self::Compare { text_a, text_b } => {
                if text_a.trim().is_empty() || text_b.trim().is_empty() {
                    return invalid("Both texts required.");
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_table_is_fixed_per_task() {
        assert_eq!(TaskRequest::summarize("x".into(), None).model(), FLASH_MODEL);
        assert_eq!(TaskRequest::Risks { text: "x".into() }.model(), FLASH_MODEL);
        assert_eq!(
            TaskRequest::Compare {
                text_a: "a".into(),
                text_b: "b".into()
            }
            .model(),
            FLASH_MODEL
        );
        assert_eq!(
            TaskRequest::Qa {
                text: "x".into(),
                question: "q".into()
            }
            .model(),
            PRO_MODEL
        );
    }

    #[test]
    fn summarize_defaults_language() {
        match TaskRequest::summarize("x".into(), None) {
            TaskRequest::Summarize { language, .. } => assert_eq!(language, "English"),
            _ => unreachable!(),
        }
        match TaskRequest::summarize("x".into(), Some("  ".into())) {
            TaskRequest::Summarize { language, .. } => assert_eq!(language, "English"),
            _ => unreachable!(),
        }
        match TaskRequest::summarize("x".into(), Some("German".into())) {
            TaskRequest::Summarize { language, .. } => assert_eq!(language, "German"),
            _ => unreachable!(),
        }
    }

    #[test]
    fn validation_messages_match_the_api_contract() {
        let err = |t: TaskRequest| t.validate().unwrap_err().to_string();
        assert_eq!(
            err(TaskRequest::summarize("   ".into(), None)),
            "No text provided."
        );
        assert_eq!(err(TaskRequest::Risks { text: "".into() }), "No text provided.");
        assert_eq!(
            err(TaskRequest::Qa {
                text: "lease".into(),
                question: " ".into()
            }),
            "Text and question required."
        );
        assert_eq!(
            err(TaskRequest::Compare {
                text_a: "".into(),
                text_b: "lease".into()
            }),
            "Both texts required."
        );
    }

    #[test]
    fn whitespace_only_fields_are_invalid_everywhere() {
        assert!(TaskRequest::Qa {
            text: "\n\t".into(),
            question: "What is the rent?".into()
        }
        .validate()
        .is_err());
        assert!(TaskRequest::Compare {
            text_a: "a".into(),
            text_b: "b".into()
        }
        .validate()
        .is_ok());
    }
}
