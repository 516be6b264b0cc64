//! Guided assessment wizard.
//!
//! The wizard is an enum state machine owning one assessment session:
//!
//! ```text
//! CategoryList -> Questions(category, 0..9) -> Summary(category) -> CategoryList
//! ```
//!
//! There is no terminal state; the user can cycle indefinitely. All
//! transitions are synchronous and single-threaded -- one question is
//! presented at a time, so no concurrent edits are possible by
//! construction. Navigation rules:
//!
//! - `next` is refused until the current question holds an answer
//!   (no skipping); at index 8 it finishes the category, caching its
//!   score and opening the summary.
//! - `previous` is refused at index 0 (no wraparound).
//! - Returning to the category list preserves answers and cached
//!   scores; re-entering a completed category starts at index 0 with
//!   prior answers still editable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::answers::{Answer, AnswerSheet};
use crate::error::WizardError;
use crate::insight::FeatureVector;
use crate::schema::{self, Category, Question, QuestionKind, QUESTIONS_PER_CATEGORY,
    QUESTIONS_PER_SECTION};
use crate::score::{self, CategoryScore};

/// Working value shown for scale questions before the user moves it.
pub const DEFAULT_SCALE_CURSOR: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum WizardState {
    CategoryList,
    Questions { category: Category, index: usize },
    Summary { category: Category },
}

/// The question currently presented, resolved against the schema.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CurrentQuestion {
    pub category: Category,
    pub section: &'static str,
    /// Flattened index 0..9 within the category.
    pub index: usize,
    pub question: &'static Question,
}

/// One assessment session.
#[derive(Debug, Clone)]
pub struct AssessmentWizard {
    id: String,
    started_at: DateTime<Utc>,
    state: WizardState,
    sheet: AnswerSheet,
    /// Per-category score cache, filled when a category is finished.
    /// Feeds the category list view and the insight feature vector.
    scores: [Option<CategoryScore>; 4],
    scale_cursor: u8,
}

impl AssessmentWizard {
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            state: WizardState::CategoryList,
            sheet: AnswerSheet::new(),
            scores: [None; 4],
            scale_cursor: DEFAULT_SCALE_CURSOR,
        }
    }

    /// Resume a session from a previously exported sheet. Scores are
    /// recomputed lazily when categories are finished again; completion
    /// state carries over.
    pub fn with_sheet(sheet: AnswerSheet) -> Self {
        let mut wizard = Self::new();
        for category in Category::ALL {
            if sheet.is_category_complete(category) {
                wizard.scores[category.index()] = Some(score::category_score(&sheet, category));
            }
        }
        wizard.sheet = sheet;
        wizard
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn sheet(&self) -> &AnswerSheet {
        &self.sheet
    }

    pub fn scale_cursor(&self) -> u8 {
        self.scale_cursor
    }

    /// Score cached when the category was last finished.
    pub fn cached_score(&self, category: Category) -> Option<CategoryScore> {
        self.scores[category.index()]
    }

    pub fn all_complete(&self) -> bool {
        self.sheet.all_complete()
    }

    /// The question currently presented.
    ///
    /// # Errors
    ///
    /// [`WizardError::NoActiveQuestion`] outside a question sequence.
    pub fn current_question(&self) -> Result<CurrentQuestion, WizardError> {
        let WizardState::Questions { category, index } = self.state else {
            return Err(WizardError::NoActiveQuestion);
        };
        let (section, question) =
            schema::question_at(category, index).ok_or(WizardError::NoActiveQuestion)?;
        Ok(CurrentQuestion {
            category,
            section: section.name,
            index,
            question,
        })
    }

    /// Answer previously recorded for the current question, if any.
    pub fn current_answer(&self) -> Option<Answer> {
        let WizardState::Questions { category, index } = self.state else {
            return None;
        };
        self.sheet
            .get(category, index / QUESTIONS_PER_SECTION, index % QUESTIONS_PER_SECTION)
    }

    /// Whether `next` would succeed.
    pub fn can_advance(&self) -> bool {
        self.current_answer().is_some()
    }

    /// 0.0 .. 1.0 progress within the current question sequence.
    pub fn progress(&self) -> f64 {
        match self.state {
            WizardState::Questions { index, .. } => {
                (index + 1) as f64 / QUESTIONS_PER_CATEGORY as f64
            }
            _ => 0.0,
        }
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Open a category's question sequence from the category list.
    /// Starts at index 0 even for completed categories; prior answers
    /// remain visible and editable.
    pub fn select_category(&mut self, category: Category) -> Result<(), WizardError> {
        if self.state != WizardState::CategoryList {
            return Err(WizardError::CategoryAlreadyOpen);
        }
        self.state = WizardState::Questions { category, index: 0 };
        self.scale_cursor = DEFAULT_SCALE_CURSOR;
        self.sync_scale_cursor();
        Ok(())
    }

    /// Record an answer for the current question, overwriting any prior
    /// value. Does not advance.
    pub fn answer(&mut self, value: Answer) -> Result<(), WizardError> {
        let WizardState::Questions { category, index } = self.state else {
            return Err(WizardError::NoActiveQuestion);
        };
        self.sheet.set(
            category,
            index / QUESTIONS_PER_SECTION,
            index % QUESTIONS_PER_SECTION,
            value,
        )?;
        if let Answer::Scale(v) = value {
            self.scale_cursor = v;
        }
        Ok(())
    }

    /// Advance to the next question, or finish the category at index 8.
    /// Finishing recomputes the category score into the cache and opens
    /// the summary view.
    pub fn next(&mut self) -> Result<WizardState, WizardError> {
        let WizardState::Questions { category, index } = self.state else {
            return Err(WizardError::NoActiveQuestion);
        };
        if self.current_answer().is_none() {
            return Err(WizardError::QuestionUnanswered);
        }

        if index + 1 < QUESTIONS_PER_CATEGORY {
            self.state = WizardState::Questions {
                category,
                index: index + 1,
            };
            self.sync_scale_cursor();
        } else {
            self.scores[category.index()] = Some(score::category_score(&self.sheet, category));
            self.state = WizardState::Summary { category };
        }
        Ok(self.state)
    }

    /// Step back one question. Refused at index 0.
    pub fn previous(&mut self) -> Result<(), WizardError> {
        let WizardState::Questions { category, index } = self.state else {
            return Err(WizardError::NoActiveQuestion);
        };
        if index == 0 {
            return Err(WizardError::AtFirstQuestion);
        }
        self.state = WizardState::Questions {
            category,
            index: index - 1,
        };
        self.sync_scale_cursor();
        Ok(())
    }

    /// Back to the category list, preserving the sheet and cached
    /// scores. Allowed from the summary and mid-sequence (abandoning a
    /// category keeps whatever was answered so far).
    pub fn return_to_categories(&mut self) -> Result<(), WizardError> {
        if self.state == WizardState::CategoryList {
            return Err(WizardError::AlreadyAtCategoryList);
        }
        self.state = WizardState::CategoryList;
        self.scale_cursor = DEFAULT_SCALE_CURSOR;
        Ok(())
    }

    /// Drop all of a category's answers and its cached score. Only
    /// available from the category list.
    pub fn restart_category(&mut self, category: Category) -> Result<(), WizardError> {
        if self.state != WizardState::CategoryList {
            return Err(WizardError::CategoryAlreadyOpen);
        }
        self.sheet.clear_category(category);
        self.scores[category.index()] = None;
        Ok(())
    }

    /// Build the outbound prediction feature vector. Gated on full
    /// completion; category percentages come from the score cache,
    /// recomputed from the sheet where the cache is empty.
    pub fn feature_vector(&self) -> Result<FeatureVector, WizardError> {
        if !self.sheet.all_complete() {
            return Err(WizardError::AssessmentIncomplete);
        }
        let pct = |category: Category| {
            self.scores[category.index()]
                .map(|s| s.percentage)
                .or_else(|| Some(score::category_percentage(&self.sheet, category)))
        };
        Ok(FeatureVector::from_percentages(
            pct(Category::Social),
            pct(Category::Work),
            pct(Category::SelfCare),
            pct(Category::Stress),
        ))
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Reset the scale cursor for the question now presented: a prior
    /// scale answer restores its value, anything else falls back to the
    /// default.
    fn sync_scale_cursor(&mut self) {
        let WizardState::Questions { category, index } = self.state else {
            return;
        };
        let Some((_, question)) = schema::question_at(category, index) else {
            return;
        };
        self.scale_cursor = match (question.kind, self.current_answer()) {
            (QuestionKind::Scale, Some(Answer::Scale(v))) => v,
            _ => DEFAULT_SCALE_CURSOR,
        };
    }
}

impl Default for AssessmentWizard {
    fn default() -> Self {
        Self::new()
    }
}
