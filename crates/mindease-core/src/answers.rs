//! In-memory answer store for one assessment session.
//!
//! Answers live in a fixed-shape grid per category (3 sections x 3
//! questions), so there is no dynamic keying and no "unexpected key"
//! failure mode. The store is dumb storage: writes are validated against
//! the question kind and range, but no cross-field consistency is
//! checked. Absence of a value means "unanswered".

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::schema::{
    self, Category, QuestionKind, QUESTIONS_PER_SECTION, SECTIONS_PER_CATEGORY,
};

/// A recorded answer to a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Bool(bool),
    Scale(u8),
}

impl Answer {
    pub fn kind(self) -> QuestionKind {
        match self {
            Answer::Bool(_) => QuestionKind::Boolean,
            Answer::Scale(_) => QuestionKind::Scale,
        }
    }

    /// Score contribution: yes = 10, no = 0, scale = its value.
    pub fn points(self) -> u32 {
        match self {
            Answer::Bool(true) => 10,
            Answer::Bool(false) => 0,
            Answer::Scale(value) => u32::from(value),
        }
    }
}

type CategoryGrid = [[Option<Answer>; QUESTIONS_PER_SECTION]; SECTIONS_PER_CATEGORY];

/// Answers for all four categories of one session.
///
/// Created empty when the session starts and discarded when it ends;
/// durability, if wanted, is an explicit export/import boundary outside
/// the core (the sheet is serde-serializable for that purpose).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSheet {
    grids: [CategoryGrid; 4],
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, overwriting any prior value at that slot.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range slots, kind mismatches against the schema,
    /// and scale values outside 1..=10. The slot keeps its prior value.
    pub fn set(
        &mut self,
        category: Category,
        section: usize,
        question: usize,
        value: Answer,
    ) -> Result<(), ValidationError> {
        let slot = schema::section(category, section)
            .and_then(|s| s.questions.get(question))
            .ok_or(ValidationError::SlotOutOfRange { section, question })?;

        if value.kind() != slot.kind {
            return Err(ValidationError::KindMismatch {
                expected: slot.kind,
                got: value.kind(),
            });
        }
        if let Answer::Scale(v) = value {
            if !(1..=10).contains(&v) {
                return Err(ValidationError::ScaleOutOfRange(v));
            }
        }

        self.grids[category.index()][section][question] = Some(value);
        Ok(())
    }

    pub fn get(&self, category: Category, section: usize, question: usize) -> Option<Answer> {
        self.grids[category.index()]
            .get(section)?
            .get(question)
            .copied()
            .flatten()
    }

    /// Remove a single answer, returning the prior value if any.
    pub fn clear(
        &mut self,
        category: Category,
        section: usize,
        question: usize,
    ) -> Option<Answer> {
        self.grids[category.index()]
            .get_mut(section)?
            .get_mut(question)?
            .take()
    }

    /// Remove all nine answers of a category (restart support).
    pub fn clear_category(&mut self, category: Category) {
        self.grids[category.index()] = CategoryGrid::default();
    }

    /// Number of answered slots in a category (0..=9).
    pub fn answered_count(&self, category: Category) -> usize {
        self.grids[category.index()]
            .iter()
            .flatten()
            .filter(|slot| slot.is_some())
            .count()
    }

    /// True iff all nine slots of the category hold an answer.
    pub fn is_category_complete(&self, category: Category) -> bool {
        self.answered_count(category) == schema::QUESTIONS_PER_CATEGORY
    }

    /// True iff every category is independently complete. Gates the
    /// insight adapter; per-category scoring never depends on this.
    pub fn all_complete(&self) -> bool {
        Category::ALL
            .into_iter()
            .all(|category| self.is_category_complete(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_category(sheet: &mut AnswerSheet, category: Category) {
        for section in 0..SECTIONS_PER_CATEGORY {
            // Every section follows the boolean / scale / boolean pattern.
            sheet.set(category, section, 0, Answer::Bool(true)).unwrap();
            sheet.set(category, section, 1, Answer::Scale(10)).unwrap();
            sheet.set(category, section, 2, Answer::Bool(true)).unwrap();
        }
    }

    #[test]
    fn round_trip_returns_exact_value() {
        let mut sheet = AnswerSheet::new();
        sheet.set(Category::Social, 0, 1, Answer::Scale(7)).unwrap();
        assert_eq!(sheet.get(Category::Social, 0, 1), Some(Answer::Scale(7)));
    }

    #[test]
    fn overwrite_replaces_rather_than_accumulates() {
        let mut sheet = AnswerSheet::new();
        sheet.set(Category::Work, 1, 0, Answer::Bool(false)).unwrap();
        sheet.set(Category::Work, 1, 0, Answer::Bool(true)).unwrap();
        assert_eq!(sheet.get(Category::Work, 1, 0), Some(Answer::Bool(true)));
        assert_eq!(sheet.answered_count(Category::Work), 1);
    }

    #[test]
    fn rejects_kind_mismatch_and_keeps_prior_state() {
        let mut sheet = AnswerSheet::new();
        sheet.set(Category::Social, 0, 0, Answer::Bool(true)).unwrap();

        let err = sheet
            .set(Category::Social, 0, 0, Answer::Scale(5))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::KindMismatch {
                expected: QuestionKind::Boolean,
                got: QuestionKind::Scale,
            }
        );
        assert_eq!(sheet.get(Category::Social, 0, 0), Some(Answer::Bool(true)));
    }

    #[test]
    fn rejects_scale_out_of_range() {
        let mut sheet = AnswerSheet::new();
        assert_eq!(
            sheet.set(Category::Social, 0, 1, Answer::Scale(0)),
            Err(ValidationError::ScaleOutOfRange(0))
        );
        assert_eq!(
            sheet.set(Category::Social, 0, 1, Answer::Scale(11)),
            Err(ValidationError::ScaleOutOfRange(11))
        );
    }

    #[test]
    fn rejects_out_of_range_slot() {
        let mut sheet = AnswerSheet::new();
        assert_eq!(
            sheet.set(Category::Social, 3, 0, Answer::Bool(true)),
            Err(ValidationError::SlotOutOfRange {
                section: 3,
                question: 0
            })
        );
        assert_eq!(
            sheet.set(Category::Social, 0, 3, Answer::Bool(true)),
            Err(ValidationError::SlotOutOfRange {
                section: 0,
                question: 3
            })
        );
    }

    #[test]
    fn completion_flips_on_ninth_answer_and_back_on_clear() {
        let mut sheet = AnswerSheet::new();
        for section in 0..SECTIONS_PER_CATEGORY {
            sheet.set(Category::Stress, section, 0, Answer::Bool(true)).unwrap();
            sheet.set(Category::Stress, section, 1, Answer::Scale(5)).unwrap();
            if section < 2 {
                sheet.set(Category::Stress, section, 2, Answer::Bool(false)).unwrap();
            }
        }
        assert!(!sheet.is_category_complete(Category::Stress));

        sheet.set(Category::Stress, 2, 2, Answer::Bool(false)).unwrap();
        assert!(sheet.is_category_complete(Category::Stress));

        sheet.clear(Category::Stress, 1, 1);
        assert!(!sheet.is_category_complete(Category::Stress));
    }

    #[test]
    fn all_complete_requires_every_category() {
        let mut sheet = AnswerSheet::new();
        fill_category(&mut sheet, Category::Social);
        fill_category(&mut sheet, Category::Work);
        fill_category(&mut sheet, Category::SelfCare);
        assert!(!sheet.all_complete());

        fill_category(&mut sheet, Category::Stress);
        assert!(sheet.all_complete());
    }

    #[test]
    fn clear_category_leaves_other_categories_alone() {
        let mut sheet = AnswerSheet::new();
        fill_category(&mut sheet, Category::Social);
        fill_category(&mut sheet, Category::Work);

        sheet.clear_category(Category::Social);
        assert_eq!(sheet.answered_count(Category::Social), 0);
        assert!(sheet.is_category_complete(Category::Work));
    }

    #[test]
    fn sheet_json_round_trip() {
        let mut sheet = AnswerSheet::new();
        fill_category(&mut sheet, Category::SelfCare);
        sheet.set(Category::Stress, 0, 1, Answer::Scale(3)).unwrap();

        let json = serde_json::to_string(&sheet).unwrap();
        let parsed: AnswerSheet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sheet);
    }
}
