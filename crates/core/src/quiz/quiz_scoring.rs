//! The two interest scoring strategies.
//!
//! `ChoiceTallyScorer` is the in-app quiz scorer: it maps each answer to the
//! category of its option position. `KeywordTallyScorer` is the scorer of the
//! authenticated submission endpoint: it counts keyword hits over five
//! categories. They answer different questions and are kept apart.

use serde::{Deserialize, Serialize};

use super::quiz_model::{CategoryTally, InterestCategory, QuizOutcome, QUIZ_QUESTIONS};
use crate::constants::QUIZ_QUESTION_COUNT;
use crate::errors::{Result, ValidationError};

/// Scores an ordered list of quiz answers by option position.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChoiceTallyScorer;

impl ChoiceTallyScorer {
    /// Scores exactly five answers, one per question slot.
    ///
    /// An answer that is not one of the options of its slot adds nothing to
    /// the tally.
    pub fn score<S: AsRef<str>>(&self, answers: &[S]) -> Result<QuizOutcome> {
        if answers.len() != QUIZ_QUESTION_COUNT {
            return Err(ValidationError::AnswerCount {
                expected: QUIZ_QUESTION_COUNT,
                actual: answers.len(),
            }
            .into());
        }

        let mut tally = CategoryTally::default();
        for (question, answer) in QUIZ_QUESTIONS.iter().zip(answers) {
            if let Some(category) = question
                .option_index(answer.as_ref())
                .and_then(InterestCategory::from_option_index)
            {
                tally.increment(category);
            }
        }

        let dominant = tally.dominant();
        Ok(QuizOutcome {
            tally,
            dominant,
            recommendation: dominant.recommendation(),
        })
    }
}

/// Category counted by the keyword scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordInterest {
    Creative,
    Analytical,
    Social,
    Technical,
    Business,
}

impl KeywordInterest {
    /// All categories in ranking tie-break order.
    pub const ALL: [KeywordInterest; 5] = [
        KeywordInterest::Creative,
        KeywordInterest::Analytical,
        KeywordInterest::Social,
        KeywordInterest::Technical,
        KeywordInterest::Business,
    ];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            KeywordInterest::Creative => &["menggambar", "seni", "musik"],
            KeywordInterest::Analytical => &["matematika", "sains", "penelitian"],
            KeywordInterest::Social => &["membantu", "mengajar", "sosial"],
            KeywordInterest::Technical => &["komputer", "teknologi", "coding"],
            KeywordInterest::Business => &["bisnis", "wirausaha", "penjualan"],
        }
    }

    pub fn careers(self) -> &'static [&'static str; 5] {
        match self {
            KeywordInterest::Creative => &[
                "Desainer Grafis",
                "Arsitek",
                "Musisi",
                "Penulis",
                "Animator",
            ],
            KeywordInterest::Analytical => &[
                "Ilmuwan Data",
                "Peneliti",
                "Dokter",
                "Insinyur",
                "Matematikawan",
            ],
            KeywordInterest::Social => &[
                "Guru",
                "Psikolog",
                "Pekerja Sosial",
                "Konselor",
                "Diplomat",
            ],
            KeywordInterest::Technical => &[
                "Software Engineer",
                "Cybersecurity Specialist",
                "AI Engineer",
                "Game Developer",
                "DevOps Engineer",
            ],
            KeywordInterest::Business => &[
                "Pengusaha",
                "Marketing Manager",
                "Financial Analyst",
                "Consultant",
                "Sales Manager",
            ],
        }
    }

    fn matches(self, lowercase_answer: &str) -> bool {
        self.keywords().iter().any(|k| lowercase_answer.contains(k))
    }
}

/// Suggests careers from free-text answers by keyword hits.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordTallyScorer;

impl KeywordTallyScorer {
    /// Counts, per category, the answers containing one of its keywords.
    ///
    /// Matching is case-insensitive and one answer may count for several
    /// categories.
    pub fn tally<'a, I>(&self, answers: I) -> [(KeywordInterest, u32); 5]
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = KeywordInterest::ALL.map(|c| (c, 0u32));
        for answer in answers {
            let lower = answer.to_lowercase();
            for (category, count) in counts.iter_mut() {
                if category.matches(&lower) {
                    *count += 1;
                }
            }
        }
        counts
    }

    /// Ranks categories by count, highest first; ties keep declaration order.
    pub fn rank<'a, I>(&self, answers: I) -> Vec<(KeywordInterest, u32)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut ranked = self.tally(answers).to_vec();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Two careers of the top category followed by the first career of the
    /// runner-up.
    pub fn suggest<'a, I>(&self, answers: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let ranked = self.rank(answers);
        let top = ranked[0].0.careers();
        let second = ranked[1].0.careers();

        top.iter()
            .take(2)
            .chain(second.iter().take(1))
            .map(|c| c.to_string())
            .collect()
    }
}
