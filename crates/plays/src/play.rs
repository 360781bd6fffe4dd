use serde::{Deserialize, Serialize};

use playbill_core::DomainResult;

use crate::genre::Genre;

/// A play from the catalog.
///
/// The genre label is kept exactly as the data source supplied it (`type` in
/// catalog JSON). It is validated when a statement is computed, so a catalog
/// with a bad entry still loads and only invoices that touch it fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub name: String,
    #[serde(rename = "type")]
    pub genre_label: String,
}

impl Play {
    pub fn new(name: impl Into<String>, genre: Genre) -> Self {
        Self {
            name: name.into(),
            genre_label: genre.label().to_string(),
        }
    }

    /// Build a play from a raw (possibly invalid) genre label.
    pub fn with_label(name: impl Into<String>, genre_label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            genre_label: genre_label.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve the genre; fails with `UnknownGenre` for labels outside the set.
    pub fn genre(&self) -> DomainResult<Genre> {
        self.genre_label.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playbill_core::DomainError;

    #[test]
    fn deserializes_catalog_entry() {
        let play: Play = serde_json::from_str(r#"{"name":"Hamlet","type":"tragedy"}"#).unwrap();
        assert_eq!(play.name(), "Hamlet");
        assert_eq!(play.genre().unwrap(), Genre::Tragedy);
    }

    #[test]
    fn invalid_label_loads_but_does_not_resolve() {
        let play: Play = serde_json::from_str(r#"{"name":"Tosca","type":"opera"}"#).unwrap();
        assert_eq!(play.genre().unwrap_err(), DomainError::unknown_genre("opera"));
    }
}
