//! Scoring calculator.
//!
//! Pure functions over an [`AnswerSheet`] snapshot, so scores are
//! testable without any wizard state. Missing answers contribute 0 --
//! a partially answered section is always scoreable.
//!
//! ## Stress scoring
//!
//! The stress category keeps a deliberate asymmetry from the source
//! product: its raw score is the plain sum daily + emotional + vision,
//! but its max score subtracts the vision maximum (30 + 30 - 30 = 30),
//! because the vision section is a positive signal ("today felt
//! meaningful"). The stress percentage is also inverted, since lower raw
//! stress is better. The raw/max ratio can therefore exceed 1 and the
//! inverted percentage can go negative before rounding; the final
//! percentage is clamped to 0..=100.

use serde::{Deserialize, Serialize};

use crate::answers::AnswerSheet;
use crate::schema::{self, Category, QUESTIONS_PER_SECTION, SECTIONS_PER_CATEGORY};

/// Maximum contribution of a fully answered section.
pub const SECTION_MAX: u32 = (QUESTIONS_PER_SECTION as u32) * 10;

/// Derived per-category score. Never a source of truth; recompute after
/// any answer change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub raw: u32,
    /// Clamped to 0..=100; stress is inverted (lower raw is better).
    pub percentage: u8,
}

/// Sum of per-question contributions for one section. Missing answers
/// contribute 0.
pub fn section_score(sheet: &AnswerSheet, category: Category, section: usize) -> u32 {
    (0..QUESTIONS_PER_SECTION)
        .filter_map(|question| sheet.get(category, section, question))
        .map(|answer| answer.points())
        .sum()
}

/// Sum of the three section scores. For stress this is still a sum
/// (daily + emotional + vision); the vision subtraction only exists in
/// the max-score formula.
pub fn category_raw_score(sheet: &AnswerSheet, category: Category) -> u32 {
    (0..SECTIONS_PER_CATEGORY)
        .map(|section| section_score(sheet, category, section))
        .sum()
}

/// 90 for non-stress categories; 30 + 30 - 30 = 30 for stress.
pub fn category_max_score(category: Category) -> u32 {
    match category {
        Category::Stress => {
            let (daily_max, emotional_max, vision_max) = (SECTION_MAX, SECTION_MAX, SECTION_MAX);
            daily_max + emotional_max - vision_max
        }
        _ => (SECTIONS_PER_CATEGORY as u32) * SECTION_MAX,
    }
}

/// Percentage before clamping. Stress inverts the ratio and can go
/// negative once the raw score exceeds the stress max of 30.
pub fn category_percentage_unclamped(sheet: &AnswerSheet, category: Category) -> i32 {
    let raw = category_raw_score(sheet, category) as f64;
    let max = category_max_score(category) as f64;
    let pct = if category == Category::Stress {
        100.0 - (raw / max) * 100.0
    } else {
        (raw / max) * 100.0
    };
    pct.round() as i32
}

/// Percentage clamped to 0..=100.
pub fn category_percentage(sheet: &AnswerSheet, category: Category) -> u8 {
    category_percentage_unclamped(sheet, category).clamp(0, 100) as u8
}

/// Raw score and clamped percentage together.
pub fn category_score(sheet: &AnswerSheet, category: Category) -> CategoryScore {
    CategoryScore {
        raw: category_raw_score(sheet, category),
        percentage: category_percentage(sheet, category),
    }
}
