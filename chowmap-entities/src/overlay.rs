use std::collections::BTreeMap;

use crate::{id::Id, place::PlacePatch};

/// All local edits, keyed by place id.
///
/// Kept ordered so that persisting and iterating are deterministic.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overlay(BTreeMap<Id, PlacePatch>);

impl Overlay {
    /// Deep-merges the patch into whatever is already stored for
    /// the place. Later edits win field-wise, untouched fields of
    /// earlier edits survive.
    pub fn apply(&mut self, id: Id, patch: PlacePatch) {
        let merged = match self.0.remove(&id) {
            Some(existing) => existing.merge(patch),
            None => patch,
        };
        self.0.insert(id, merged);
    }

    pub fn get(&self, id: &Id) -> Option<&PlacePatch> {
        self.0.get(id)
    }

    pub fn remove(&mut self, id: &Id) -> Option<PlacePatch> {
        self.0.remove(id)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Id, &PlacePatch)> {
        self.0.iter()
    }
}

impl FromIterator<(Id, PlacePatch)> for Overlay {
    fn from_iter<I: IntoIterator<Item = (Id, PlacePatch)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Overlay {
    type Item = (Id, PlacePatch);
    type IntoIter = std::collections::btree_map::IntoIter<Id, PlacePatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
