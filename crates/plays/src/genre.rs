use core::str::FromStr;
use serde::{Deserialize, Serialize};

use playbill_core::DomainError;

/// Play genre (closed set).
///
/// Pricing and crediting dispatch on this enum; adding a genre is a new variant
/// plus its constant table, checked by the compiler at every `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Tragedy,
    Comedy,
    History,
    Pastoral,
}

impl Genre {
    pub const ALL: [Genre; 4] = [
        Genre::Tragedy,
        Genre::Comedy,
        Genre::History,
        Genre::Pastoral,
    ];

    /// Label as it appears in catalog data.
    pub fn label(self) -> &'static str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
            Genre::History => "history",
            Genre::Pastoral => "pastoral",
        }
    }
}

impl core::fmt::Display for Genre {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Genre {
    type Err = DomainError;

    /// Exact, case-sensitive match on the catalog label. Anything else is a
    /// hard error; there is no default genre.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|g| g.label() == s)
            .ok_or_else(|| DomainError::unknown_genre(s))
    }
}
