//! Completion Set

use crate::domain::catalog::{Catalog, PuzzleId};
use crate::error::{EscapeError, EscapeResult};
use std::collections::BTreeMap;

/// Which catalog puzzles have been solved in the current session
///
/// Entries only ever go from `false` to `true`; a new session builds a new set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionSet {
    entries: BTreeMap<PuzzleId, bool>,
}

impl CompletionSet {
    /// Every catalog puzzle unsolved
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            entries: catalog.iter().map(|id| (id, false)).collect(),
        }
    }

    /// Mark a puzzle solved; `Ok(true)` when it was not solved before
    pub fn mark(&mut self, id: PuzzleId) -> EscapeResult<bool> {
        let entry = self
            .entries
            .get_mut(&id)
            .ok_or_else(|| EscapeError::UnknownPuzzle(id.slug().to_string()))?;
        let newly = !*entry;
        *entry = true;
        Ok(newly)
    }

    pub fn is_solved(&self, id: PuzzleId) -> bool {
        self.entries.get(&id).copied().unwrap_or(false)
    }

    pub fn all_solved(&self) -> bool {
        self.entries.values().all(|solved| *solved)
    }

    pub fn solved_count(&self) -> usize {
        self.entries.values().filter(|solved| **solved).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PuzzleId, bool)> + '_ {
        self.entries.iter().map(|(id, solved)| (*id, *solved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_set_is_all_false() {
        let set = CompletionSet::new(&Catalog::full());
        assert_eq!(set.len(), 5);
        assert!(set.iter().all(|(_, solved)| !solved));
        assert!(!set.all_solved());
    }

    #[test]
    fn test_mark_is_monotonic() {
        let mut set = CompletionSet::new(&Catalog::full());
        assert!(set.mark(PuzzleId::PaintedCube).unwrap());
        assert!(!set.mark(PuzzleId::PaintedCube).unwrap());
        assert!(set.is_solved(PuzzleId::PaintedCube));
        assert_eq!(set.solved_count(), 1);
    }

    #[test]
    fn test_mark_outside_catalog_is_rejected() {
        let catalog = Catalog::new([PuzzleId::BrokenCalc]).unwrap();
        let mut set = CompletionSet::new(&catalog);

        assert!(set.mark(PuzzleId::InvisibleMaze).is_err());
        assert_eq!(set.solved_count(), 0);
        assert_eq!(set.len(), 1);
    }
}
