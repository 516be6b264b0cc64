//! # MindEase Core Library
//!
//! Core business logic for the MindEase wellness self-assessment: a
//! fixed four-category questionnaire answered through a guided wizard,
//! per-section and per-category scoring (with an inverted percentage
//! for the stress category), completion tracking, and an insight
//! adapter that submits a normalized feature vector to an external
//! prediction service and maps its flags to recommendations.
//!
//! The CLI binary is a thin layer over this crate; the presentation
//! layer interacts with it only through the types re-exported here.
//!
//! ## Key Components
//!
//! - [`schema`]: static questionnaire definition (categories, sections,
//!   questions)
//! - [`AnswerSheet`]: in-memory answer store for one session
//! - [`score`]: pure scoring functions over sheet snapshots
//! - [`AssessmentWizard`]: navigation state machine
//! - [`InsightClient`]: prediction service client and recommendation
//!   mapping

pub mod answers;
pub mod config;
pub mod error;
pub mod insight;
pub mod schema;
pub mod score;
pub mod wizard;

pub use answers::{Answer, AnswerSheet};
pub use config::{Config, InsightConfig};
pub use error::{ConfigError, CoreError, InsightError, ValidationError, WizardError};
pub use insight::{recommendations, FeatureVector, InsightClient, PredictionFlags, Recommendation};
pub use schema::{Category, Question, QuestionKind, Section};
pub use score::{category_score, CategoryScore};
pub use wizard::{AssessmentWizard, CurrentQuestion, WizardState};
