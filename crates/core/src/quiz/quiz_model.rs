//! Interest quiz domain models and fixed lookup tables.

use serde::{Deserialize, Serialize};

use crate::constants::QUIZ_CAREER_DISPLAY_LIMIT;

/// Category tallied by the in-app interest quiz.
///
/// Declaration order is the tie-break order of the dominant category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestCategory {
    Creative,
    Analytical,
    Social,
    Literary,
}

impl InterestCategory {
    /// All categories in tie-break order.
    pub const ALL: [InterestCategory; 4] = [
        InterestCategory::Creative,
        InterestCategory::Analytical,
        InterestCategory::Social,
        InterestCategory::Literary,
    ];

    /// Maps the position of a chosen option to its category.
    pub fn from_option_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            InterestCategory::Creative => 0,
            InterestCategory::Analytical => 1,
            InterestCategory::Social => 2,
            InterestCategory::Literary => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InterestCategory::Creative => "creative",
            InterestCategory::Analytical => "analytical",
            InterestCategory::Social => "social",
            InterestCategory::Literary => "literary",
        }
    }

    pub fn recommendation(self) -> Recommendation {
        match self {
            InterestCategory::Creative => Recommendation {
                category: self,
                title: "Kreatif & Artistik",
                careers: ["Desainer Grafis", "Animator", "Arsitek"],
                description:
                    "Kamu memiliki jiwa seni yang tinggi dan suka menciptakan hal-hal baru!",
            },
            InterestCategory::Analytical => Recommendation {
                category: self,
                title: "Analitis & Logis",
                careers: ["Data Scientist", "Engineer", "Dokter"],
                description:
                    "Kamu pandai berpikir sistematis dan suka memecahkan masalah dengan logika!",
            },
            InterestCategory::Social => Recommendation {
                category: self,
                title: "Sosial & Komunikatif",
                careers: ["HRD", "Marketing", "Psikolog"],
                description: "Kamu punya kemampuan komunikasi yang baik dan suka berinteraksi dengan orang!",
            },
            InterestCategory::Literary => Recommendation {
                category: self,
                title: "Literatur & Penelitian",
                careers: ["Penulis", "Peneliti", "Editor"],
                description: "Kamu suka dengan dunia kata-kata dan memiliki kemampuan analisis yang mendalam!",
            },
        }
    }
}

/// Static result card for a dominant category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: InterestCategory,
    pub title: &'static str,
    pub careers: [&'static str; QUIZ_CAREER_DISPLAY_LIMIT],
    pub description: &'static str,
}

/// One quiz question and its four options, ordered by category index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
}

impl QuizQuestion {
    /// Position of `answer` among the options, if it is one of them.
    pub fn option_index(&self, answer: &str) -> Option<usize> {
        self.options.iter().position(|o| *o == answer)
    }
}

pub const QUIZ_QUESTIONS: [QuizQuestion; 5] = [
    QuizQuestion {
        prompt: "Kamu lebih suka aktivitas yang mana?",
        options: [
            "Menggambar dan membuat desain",
            "Menghitung dan menganalisis data",
            "Berbicara dan berinteraksi dengan orang",
            "Menulis dan membaca",
        ],
    },
    QuizQuestion {
        prompt: "Saat weekend, kamu paling senang...",
        options: [
            "Membuat karya seni atau craft",
            "Bermain puzzle atau game strategi",
            "Mengorganisir acara bersama teman",
            "Membaca buku atau menulis diary",
        ],
    },
    QuizQuestion {
        prompt: "Mata pelajaran favorit kamu di sekolah?",
        options: [
            "Seni Budaya atau Prakarya",
            "Matematika atau IPA",
            "Bahasa atau Sosiologi",
            "Sejarah atau Sastra",
        ],
    },
    QuizQuestion {
        prompt: "Jika bisa memilih, kamu ingin bekerja di...",
        options: [
            "Studio desain atau galeri seni",
            "Laboratorium atau perusahaan teknologi",
            "Kantor dengan banyak meeting dan presentasi",
            "Perpustakaan atau penerbit",
        ],
    },
    QuizQuestion {
        prompt: "Cara kamu menyelesaikan masalah?",
        options: [
            "Mencari solusi kreatif dan unik",
            "Menganalisis data dan fakta",
            "Berdiskusi dengan orang lain",
            "Merenung dan mencari referensi",
        ],
    },
];

/// Per-category answer counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryTally {
    counts: [u32; 4],
}

impl CategoryTally {
    pub fn increment(&mut self, category: InterestCategory) {
        self.counts[category.index()] += 1;
    }

    pub fn get(&self, category: InterestCategory) -> u32 {
        self.counts[category.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Category with the highest count; the earliest in
    /// [`InterestCategory::ALL`] wins a tie.
    pub fn dominant(&self) -> InterestCategory {
        InterestCategory::ALL
            .into_iter()
            .fold(InterestCategory::Creative, |best, category| {
                if self.get(category) > self.get(best) {
                    category
                } else {
                    best
                }
            })
    }
}

/// Result of scoring a completed quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOutcome {
    pub tally: CategoryTally,
    pub dominant: InterestCategory,
    pub recommendation: Recommendation,
}

/// Career suggestions persisted for an authenticated quiz submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSubmission {
    pub career_suggestions: Vec<String>,
}

/// Row stored for an authenticated quiz submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuizResult {
    pub user_id: String,
    pub answers: serde_json::Map<String, serde_json::Value>,
    pub career_suggestions: Vec<String>,
}
