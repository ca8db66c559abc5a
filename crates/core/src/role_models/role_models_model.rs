//! Role model catalog.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleModelCategory {
    Teknologi,
    Komunikasi,
    Bisnis,
    Kreatif,
    Pendidikan,
}

impl RoleModelCategory {
    pub const ALL: [RoleModelCategory; 5] = [
        RoleModelCategory::Teknologi,
        RoleModelCategory::Komunikasi,
        RoleModelCategory::Bisnis,
        RoleModelCategory::Kreatif,
        RoleModelCategory::Pendidikan,
    ];

    pub fn id(self) -> &'static str {
        match self {
            RoleModelCategory::Teknologi => "teknologi",
            RoleModelCategory::Komunikasi => "komunikasi",
            RoleModelCategory::Bisnis => "bisnis",
            RoleModelCategory::Kreatif => "kreatif",
            RoleModelCategory::Pendidikan => "pendidikan",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RoleModelCategory::Teknologi => "Teknologi",
            RoleModelCategory::Komunikasi => "Komunikasi",
            RoleModelCategory::Bisnis => "Bisnis",
            RoleModelCategory::Kreatif => "Kreatif",
            RoleModelCategory::Pendidikan => "Pendidikan",
        }
    }
}

/// Filter chip of the role model page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(RoleModelCategory),
}

impl CategoryFilter {
    /// Parses a chip id; unknown ids select everything.
    pub fn from_id(id: &str) -> Self {
        RoleModelCategory::ALL
            .into_iter()
            .find(|c| c.id() == id)
            .map(CategoryFilter::Only)
            .unwrap_or(CategoryFilter::All)
    }

    pub fn matches(self, category: RoleModelCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleModel {
    pub id: u32,
    pub name: &'static str,
    pub field: &'static str,
    pub nationality: &'static str,
    pub description: &'static str,
    pub achievement: &'static str,
    pub quote: &'static str,
    pub category: RoleModelCategory,
    pub inspiration: &'static str,
}

pub const ROLE_MODELS: [RoleModel; 6] = [
    RoleModel {
        id: 1,
        name: "B.J. Habibie",
        field: "Teknik Dirgantara & Presiden Indonesia",
        nationality: "Indonesia",
        description: "Ahli teknik dirgantara Indonesia yang menjadi Presiden RI ke-3. Beliau dikenal sebagai 'Bapak Teknologi Indonesia'.",
        achievement: "Menciptakan pesawat N-250 dan berkontribusi besar dalam teknologi Indonesia",
        quote: "Mulailah dengan mimpi, karena mimpi adalah awal dari semua pencapaian.",
        category: RoleModelCategory::Teknologi,
        inspiration: "Membuktikan bahwa orang Indonesia bisa bersaing di kancah internasional dalam bidang teknologi",
    },
    RoleModel {
        id: 2,
        name: "Najwa Shihab",
        field: "Jurnalis & Presenter",
        nationality: "Indonesia",
        description: "Jurnalis dan presenter televisi Indonesia yang dikenal dengan program 'Mata Najwa' dan jurnalisme investigatifnya.",
        achievement: "Menjadi salah satu jurnalis paling berpengaruh di Indonesia",
        quote: "Pertanyaan yang tepat lebih penting daripada jawaban yang sempurna.",
        category: RoleModelCategory::Komunikasi,
        inspiration: "Menunjukkan bahwa perempuan bisa memimpin dalam dunia jurnalisme dan media",
    },
    RoleModel {
        id: 3,
        name: "Susi Pudjiastuti",
        field: "Entrepreneur & Menteri",
        nationality: "Indonesia",
        description: "Pengusaha sukses dan mantan Menteri Kelautan dan Perikanan yang tegas dalam memberantas illegal fishing.",
        achievement: "Membangun bisnis penerbangan dari nol dan menjadi menteri berpengaruh",
        quote: "Jangan takut bermimpi besar, tapi jangan lupa untuk bekerja keras.",
        category: RoleModelCategory::Bisnis,
        inspiration: "Membuktikan bahwa tanpa latar belakang pendidikan tinggi, seseorang tetap bisa sukses dengan kerja keras",
    },
    RoleModel {
        id: 4,
        name: "Raditya Dika",
        field: "Penulis & Content Creator",
        nationality: "Indonesia",
        description: "Penulis, komedian, dan content creator yang berhasil mengubah hobi menulis menjadi karir yang sukses.",
        achievement: "Menulis puluhan buku best-seller dan memiliki jutaan pengikut",
        quote: "Kreativitas tidak mengenal batasan, yang penting berani memulai.",
        category: RoleModelCategory::Kreatif,
        inspiration: "Menunjukkan bahwa passion dalam berkreativitas bisa menjadi profesi yang menguntungkan",
    },
    RoleModel {
        id: 5,
        name: "Gita Savitri",
        field: "Content Creator & Researcher",
        nationality: "Indonesia",
        description: "PhD holder dan content creator yang berhasil mengombinasikan dunia akademik dengan konten edukasi di media sosial.",
        achievement: "Meraih gelar PhD dan memiliki jutaan subscriber di YouTube",
        quote: "Pendidikan adalah investasi terbaik untuk masa depan.",
        category: RoleModelCategory::Pendidikan,
        inspiration: "Membuktikan bahwa belajar tinggi dan menjadi content creator bisa berjalan bersama",
    },
    RoleModel {
        id: 6,
        name: "Teman Macet",
        field: "Music Producer & Entrepreneur",
        nationality: "Indonesia",
        description: "Produser musik dan entrepreneur yang sukses membangun brand musik dari bedroom producer menjadi label ternama.",
        achievement: "Membangun label musik independen yang sukses di Indonesia",
        quote: "Passion yang konsisten akan mengalahkan talent yang tidak diasah.",
        category: RoleModelCategory::Kreatif,
        inspiration: "Menunjukkan bahwa industri kreatif musik bisa menjadi bisnis yang berkelanjutan",
    },
];
