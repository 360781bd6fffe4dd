//! Read-only play lookup.

use std::collections::HashMap;

use playbill_core::{DomainError, DomainResult, PlayId};

use crate::play::Play;

/// Read-only capability resolving a play key to its record.
///
/// Implementations must not be mutated while a statement is being computed;
/// sharing one across threads only needs `Sync`.
pub trait PlayLookup {
    fn play(&self, id: &PlayId) -> Option<&Play>;

    /// Like [`PlayLookup::play`] but turns a miss into `UnknownPlay`.
    fn resolve(&self, id: &PlayId) -> DomainResult<&Play> {
        self.play(id)
            .ok_or_else(|| DomainError::unknown_play(id.as_str()))
    }
}

impl PlayLookup for HashMap<PlayId, Play> {
    fn play(&self, id: &PlayId) -> Option<&Play> {
        self.get(id)
    }
}

impl<T: PlayLookup + ?Sized> PlayLookup for &T {
    fn play(&self, id: &PlayId) -> Option<&Play> {
        (**self).play(id)
    }
}

/// Frozen catalog of plays keyed by id.
///
/// Built once (from code or JSON) and then only read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayCatalog {
    plays: HashMap<PlayId, Play>,
}

impl PlayCatalog {
    /// Parse the `{ "<playID>": { "name": .., "type": .. } }` catalog format.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let plays: HashMap<PlayId, Play> = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("play catalog: {e}")))?;
        Ok(Self { plays })
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayId, &Play)> {
        self.plays.iter()
    }
}

impl FromIterator<(PlayId, Play)> for PlayCatalog {
    fn from_iter<I: IntoIterator<Item = (PlayId, Play)>>(iter: I) -> Self {
        Self {
            plays: iter.into_iter().collect(),
        }
    }
}

impl PlayLookup for PlayCatalog {
    fn play(&self, id: &PlayId) -> Option<&Play> {
        self.plays.get(id)
    }
}
