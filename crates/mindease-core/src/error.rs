//! Core error types for mindease-core.
//!
//! Nothing here is fatal to an assessment session: validation failures
//! keep prior state, wizard errors surface as disabled actions, and
//! insight failures are recoverable by retry.

use std::path::PathBuf;
use thiserror::Error;

use crate::schema::QuestionKind;

/// Core error type for mindease-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Answer validation errors
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Wizard state machine errors
    #[error("wizard error: {0}")]
    Wizard(#[from] WizardError),

    /// Prediction service errors
    #[error("insight error: {0}")]
    Insight(#[from] InsightError),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Answer write rejections. The prior slot value is always kept.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Answer kind does not match the question kind
    #[error("expected a {expected:?} answer, got a {got:?} answer")]
    KindMismatch {
        expected: QuestionKind,
        got: QuestionKind,
    },

    /// Scale answer outside 1..=10
    #[error("scale answer {0} is outside 1-10")]
    ScaleOutOfRange(u8),

    /// Section or question index outside the fixed 3x3 grid
    #[error("answer slot ({section}, {question}) is out of range")]
    SlotOutOfRange { section: usize, question: usize },
}

/// Wizard navigation errors. Surfaced by callers as disabled actions,
/// not as crashes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardError {
    /// Next requested before the current question was answered
    #[error("current question has no recorded answer")]
    QuestionUnanswered,

    /// Previous requested at question index 0
    #[error("already at the first question")]
    AtFirstQuestion,

    /// Question operation requested outside a question sequence
    #[error("no question sequence is active")]
    NoActiveQuestion,

    /// Category selection requested while one is already open
    #[error("a category is already open")]
    CategoryAlreadyOpen,

    /// Return requested while already at the category list
    #[error("already at the category list")]
    AlreadyAtCategoryList,

    /// Insight submission requested before all categories are complete
    #[error("all four categories must be complete")]
    AssessmentIncomplete,

    /// Answer rejected by the store
    #[error(transparent)]
    InvalidAnswer(#[from] ValidationError),
}

/// Prediction service call failures.
#[derive(Error, Debug)]
pub enum InsightError {
    /// Transport failure or timeout
    #[error("prediction request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status from the prediction service
    #[error("prediction service returned HTTP {status}")]
    Service { status: u16 },

    /// Response body missing the expected flags
    #[error("malformed prediction response: {0}")]
    MalformedResponse(String),
}

/// Configuration load/save failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
