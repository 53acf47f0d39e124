//! Intent Classification Module
//!
//! Maps free-text user messages to a coarse topic category using fixed
//! keyword lists. Classification is single-label and order-determined:
//! categories are checked in a fixed priority order and the first match wins,
//! even when a message contains terms from several categories.

use serde::Serialize;

// == Intent ==
/// Topic category assigned to a user message.
///
/// Used to bucket cache entries and to select a TTL tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Food,
    Shelter,
    Health,
    Mental,
    Domestic,
    Jobs,
    Transport,
    Documents,
    /// Fallback when no category keyword matches.
    General,
}

// == Keyword Tables ==
/// Categories in priority order, each with its keyword/phrase list.
///
/// Matching is case-insensitive substring over the lowered message. The
/// order of this table is a contract: a message matching several categories
/// resolves to the first one listed here.
const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (
        Intent::Food,
        &[
            "hungry",
            "food",
            "eat",
            "meal",
            "groceries",
            "pantry",
            "starving",
            "feed",
            "dinner",
            "lunch",
            "breakfast",
        ],
    ),
    (
        Intent::Shelter,
        &[
            "shelter",
            "place to stay",
            "homeless",
            "sleep",
            "housing",
            "roof",
            "bed",
            "overnight",
            "stay tonight",
            "nowhere to go",
        ],
    ),
    (
        Intent::Health,
        &[
            "doctor",
            "medical",
            "sick",
            "clinic",
            "health",
            "insurance",
            "prescription",
            "medicine",
            "dentist",
            "dental",
            "teeth",
            "pain",
            "injury",
            "pregnant",
        ],
    ),
    (
        Intent::Mental,
        &[
            "mental",
            "therapy",
            "counseling",
            "depression",
            "anxiety",
            "stress",
            "sad",
            "hopeless",
            "overwhelmed",
            "someone to talk",
        ],
    ),
    (
        Intent::Domestic,
        &[
            "abuse",
            "violence",
            "hurt",
            "scared",
            "partner",
            "spouse",
            "hitting",
            "threatening",
            "safe place",
            "escape",
        ],
    ),
    (
        Intent::Jobs,
        &[
            "job",
            "work",
            "employment",
            "hire",
            "career",
            "training",
            "resume",
            "interview",
            "apply",
            "application",
            "unemployed",
            "income",
            "money",
        ],
    ),
    (
        Intent::Transport,
        &["ride", "bus", "transport", "car", "get there", "travel", "commute"],
    ),
    (
        Intent::Documents,
        &[
            "id",
            "license",
            "birth certificate",
            "social security",
            "document",
            "identification",
            "papers",
            "lost id",
        ],
    ),
];

impl Intent {
    // == Detect ==
    /// Classifies a message into a topic category.
    ///
    /// Total over any input: arbitrary text, any length, never panics.
    /// An empty message classifies as `General`.
    pub fn detect(message: &str) -> Self {
        let lower = message.to_lowercase();

        for (intent, keywords) in INTENT_KEYWORDS {
            if keywords.iter().any(|kw| lower.contains(kw)) {
                return *intent;
            }
        }

        Intent::General
    }

    // == As Str ==
    /// Returns the lowercase label used in cache keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Food => "food",
            Intent::Shelter => "shelter",
            Intent::Health => "health",
            Intent::Mental => "mental",
            Intent::Domestic => "domestic",
            Intent::Jobs => "jobs",
            Intent::Transport => "transport",
            Intent::Documents => "documents",
            Intent::General => "general",
        }
    }

    // == Is Resource Seeking ==
    /// True for categories backed by the slowly-changing resource directory.
    ///
    /// These get the long TTL tier. `Mental` and `Domestic` are deliberately
    /// excluded and stay on the short tier.
    pub fn is_resource_seeking(&self) -> bool {
        matches!(
            self,
            Intent::Food
                | Intent::Shelter
                | Intent::Health
                | Intent::Jobs
                | Intent::Transport
                | Intent::Documents
        )
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
