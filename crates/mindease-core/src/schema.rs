//! Static questionnaire schema.
//!
//! The questionnaire is a closed, compile-time-known structure: four
//! categories, each with exactly three named sections of exactly three
//! questions. Questions within a category are also addressable by a
//! flattened index 0..9 (`section = flat / 3`, `question = flat % 3`).
//! Changing wording or counts is a schema edit, not a runtime operation.

use serde::{Deserialize, Serialize};

pub const SECTIONS_PER_CATEGORY: usize = 3;
pub const QUESTIONS_PER_SECTION: usize = 3;
pub const QUESTIONS_PER_CATEGORY: usize = SECTIONS_PER_CATEGORY * QUESTIONS_PER_SECTION;

/// Top-level assessment domains. Fixed closed set, never created or
/// destroyed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Social,
    Work,
    SelfCare,
    Stress,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Social,
        Category::Work,
        Category::SelfCare,
        Category::Stress,
    ];

    /// Stable key used in exported data and on the CLI.
    pub fn key(self) -> &'static str {
        match self {
            Category::Social => "social",
            Category::Work => "work",
            Category::SelfCare => "selfCare",
            Category::Stress => "stress",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Social => "Daily Social Activity",
            Category::Work => "Daily Work Productivity",
            Category::SelfCare => "Daily Self-Care",
            Category::Stress => "Daily Stress Impact",
        }
    }

    /// Position within [`Category::ALL`], used for fixed-size per-category
    /// storage.
    pub(crate) fn index(self) -> usize {
        match self {
            Category::Social => 0,
            Category::Work => 1,
            Category::SelfCare => 2,
            Category::Stress => 3,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "social" => Ok(Category::Social),
            "work" => Ok(Category::Work),
            "selfCare" | "self-care" | "selfcare" => Ok(Category::SelfCare),
            "stress" => Ok(Category::Stress),
            other => Err(format!(
                "unknown category '{other}' (expected social, work, selfCare or stress)"
            )),
        }
    }
}

/// Kind of answer a question accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Yes / no.
    Boolean,
    /// Integer in 1..=10.
    Scale,
}

/// A single question within a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub kind: QuestionKind,
    pub text: &'static str,
}

/// A named group of exactly three questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: &'static str,
    pub questions: [Question; QUESTIONS_PER_SECTION],
}

const fn boolean(text: &'static str) -> Question {
    Question {
        kind: QuestionKind::Boolean,
        text,
    }
}

const fn scale(text: &'static str) -> Question {
    Question {
        kind: QuestionKind::Scale,
        text,
    }
}

static SOCIAL_SECTIONS: [Section; SECTIONS_PER_CATEGORY] = [
    Section {
        name: "places",
        questions: [
            boolean("Did you visit any place outside your home today?"),
            scale("How enjoyable was your visit?"),
            boolean("Did you visit a social or public place today?"),
        ],
    },
    Section {
        name: "network",
        questions: [
            boolean("Did you engage in at least one meaningful conversation today?"),
            scale("How socially connected did you feel today?"),
            boolean("Did you interact with more than two different people today?"),
        ],
    },
    Section {
        name: "support",
        questions: [
            boolean("Did you help someone emotionally or practically today?"),
            scale("How fulfilling was your support for others today?"),
            boolean("Did anyone express gratitude towards you today?"),
        ],
    },
];

static WORK_SECTIONS: [Section; SECTIONS_PER_CATEGORY] = [
    Section {
        name: "achievement",
        questions: [
            boolean("Did you accomplish a key work or personal goal today?"),
            scale("How productive did you feel today?"),
            boolean("Did you receive any recognition or appreciation today?"),
        ],
    },
    Section {
        name: "todo",
        questions: [
            boolean("Did you complete at least 80% of your planned tasks today?"),
            scale("How efficient was your time management today?"),
            boolean("Did you not procrastinate on any tasks today?"),
        ],
    },
    Section {
        name: "awards",
        questions: [
            boolean("Did you reward yourself for completing a task today?"),
            scale("How motivated do you feel for tomorrow?"),
            boolean("Did you set any personal goals for the next day?"),
        ],
    },
];

static SELF_CARE_SECTIONS: [Section; SECTIONS_PER_CATEGORY] = [
    Section {
        name: "sleep",
        questions: [
            boolean("Did you sleep for at least 6 hours last night?"),
            scale("How well-rested did you feel this morning?"),
            boolean("Did you wake up feeling refreshed?"),
        ],
    },
    Section {
        name: "passion",
        questions: [
            boolean("Did you spend at least 30 minutes on a hobby today?"),
            scale("How much joy did your personal time bring you today?"),
            boolean("Did you learn or try something new today?"),
        ],
    },
    Section {
        name: "meditation",
        questions: [
            boolean("Did you practice meditation or relaxation today?"),
            scale("How calm and balanced did you feel today?"),
            boolean("Did you take intentional breaks from work today?"),
        ],
    },
];

static STRESS_SECTIONS: [Section; SECTIONS_PER_CATEGORY] = [
    Section {
        name: "daily",
        questions: [
            boolean("Did you not experience significant stress today?"),
            scale("How relaxing was your day overall?"),
            boolean("Did you successfully manage your stress levels today?"),
        ],
    },
    Section {
        name: "emotional",
        questions: [
            boolean("You did not experience any emotional outbursts today."),
            scale("How emotionally balanced did you feel today?"),
            boolean("You have not experienced any conflicts or arguments today."),
        ],
    },
    // The vision section is a positive signal; its maximum is subtracted
    // in the stress max-score formula (see the score module).
    Section {
        name: "vision",
        questions: [
            boolean("Did today feel meaningful to you?"),
            scale("How clear do you feel about your goals today?"),
            boolean("Did you take a moment to reflect on something positive?"),
        ],
    },
];

/// Ordered sections for a category.
pub fn sections(category: Category) -> &'static [Section; SECTIONS_PER_CATEGORY] {
    match category {
        Category::Social => &SOCIAL_SECTIONS,
        Category::Work => &WORK_SECTIONS,
        Category::SelfCare => &SELF_CARE_SECTIONS,
        Category::Stress => &STRESS_SECTIONS,
    }
}

/// Section by positional index (0..3).
pub fn section(category: Category, index: usize) -> Option<&'static Section> {
    sections(category).get(index)
}

/// Resolve a flattened question index (0..9) to its section and question.
pub fn question_at(
    category: Category,
    flat_index: usize,
) -> Option<(&'static Section, &'static Question)> {
    if flat_index >= QUESTIONS_PER_CATEGORY {
        return None;
    }
    let section = &sections(category)[flat_index / QUESTIONS_PER_SECTION];
    let question = &section.questions[flat_index % QUESTIONS_PER_SECTION];
    Some((section, question))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_three_sections_of_three_questions() {
        for category in Category::ALL {
            let sections = sections(category);
            assert_eq!(sections.len(), SECTIONS_PER_CATEGORY);
            for section in sections {
                assert_eq!(section.questions.len(), QUESTIONS_PER_SECTION);
            }
        }
    }

    #[test]
    fn flat_index_resolves_across_section_boundaries() {
        let (section, question) = question_at(Category::Stress, 0).unwrap();
        assert_eq!(section.name, "daily");
        assert_eq!(question.kind, QuestionKind::Boolean);

        let (section, question) = question_at(Category::Stress, 4).unwrap();
        assert_eq!(section.name, "emotional");
        assert_eq!(question.kind, QuestionKind::Scale);

        let (section, _) = question_at(Category::Stress, 8).unwrap();
        assert_eq!(section.name, "vision");

        assert!(question_at(Category::Stress, 9).is_none());
    }

    #[test]
    fn category_keys_parse_back() {
        for category in Category::ALL {
            let parsed: Category = category.key().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("mood".parse::<Category>().is_err());
    }

    #[test]
    fn category_serde_uses_camel_case_keys() {
        let json = serde_json::to_string(&Category::SelfCare).unwrap();
        assert_eq!(json, "\"selfCare\"");
    }
}
