//! The formation graph — deduplication store and persisted unit of state.
//!
//! Both interning operations are linear scans over the existing elements.
//! Transcripts are short dance sequences, so n stays small and the scan
//! beats maintaining a hash index over positional formation equality.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Call, Formation, FormationId};

/// Append-only store of deduplicated formations and calls.
///
/// Formation identities are dense, 1-based, and assigned in insertion
/// order; given identical input the assignment is identical, and output
/// artifact names depend on it. Single-owner, single-writer: callers hold
/// the graph by value and mutate it through `&mut`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    formations: Vec<Formation>,
    calls: Vec<Call>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the identity of the one true formation equal to `formation`,
    /// interning it first if it is new.
    ///
    /// The candidate is normalized before comparison; `regrid` is
    /// idempotent, so already-normalized input is unchanged.
    pub fn intern_formation(&mut self, formation: Formation) -> FormationId {
        let candidate = formation.regrid();
        for (index, existing) in self.formations.iter().enumerate() {
            if *existing == candidate {
                let id = FormationId(index as u32 + 1);
                debug!(%id, "formation interned to existing");
                return id;
            }
        }
        let id = FormationId(self.formations.len() as u32 + 1);
        let mut interned = candidate;
        interned.id = Some(id);
        self.formations.push(interned);
        debug!(%id, "formation interned as new");
        id
    }

    /// Ensure only one instance of an equal call is remembered; returns
    /// the canonical call.
    pub fn intern_call(&mut self, call: Call) -> Call {
        if let Some(existing) = self.calls.iter().find(|c| **c == call) {
            return existing.clone();
        }
        debug!(call = %call, "call interned as new");
        self.calls.push(call.clone());
        call
    }

    pub fn formations(&self) -> &[Formation] {
        &self.formations
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Look up a formation by identity.
    pub fn formation(&self, id: FormationId) -> Option<&Formation> {
        if id.0 == 0 {
            return None;
        }
        self.formations.get(id.0 as usize - 1)
    }

    /// Iterate formations with their identities, in interning order.
    pub fn entries(&self) -> impl Iterator<Item = (FormationId, &Formation)> {
        self.formations
            .iter()
            .enumerate()
            .map(|(index, f)| (FormationId(index as u32 + 1), f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dancer, Facing, Role};
    use pretty_assertions::assert_eq;

    fn pair(x0: i64, x1: i64, y: i64) -> Formation {
        Formation::new([
            Dancer::new(x0, y, 1, Role::Leader, Facing::Up),
            Dancer::new(x1, y, 1, Role::Follower, Facing::Up),
        ])
    }

    #[test]
    fn test_intern_assigns_dense_identities_from_one() {
        let mut graph = Graph::new();
        let a = graph.intern_formation(pair(0, 1, 0));
        let b = graph.intern_formation(pair(1, 0, 0)); // different scan order
        let c = graph.intern_formation(Formation::squared_set());
        assert_eq!((a, b, c), (FormationId(1), FormationId(2), FormationId(3)));
        assert_eq!(graph.formations().len(), 3);
    }

    #[test]
    fn test_intern_dedups_structurally_equal_formations() {
        let mut graph = Graph::new();
        // Same geometry at different raw offsets normalizes identically.
        let a = graph.intern_formation(pair(3, 9, 4));
        let b = graph.intern_formation(pair(0, 50, 17));
        assert_eq!(a, b);
        assert_eq!(graph.formations().len(), 1);
    }

    #[test]
    fn test_interned_formation_carries_its_identity() {
        let mut graph = Graph::new();
        let id = graph.intern_formation(pair(0, 1, 0));
        let stored = graph.formation(id).unwrap();
        assert_eq!(stored.id, Some(id));
        assert!(graph.formation(FormationId(0)).is_none());
        assert!(graph.formation(FormationId(99)).is_none());
    }

    #[test]
    fn test_intern_call_dedups() {
        let mut graph = Graph::new();
        let from = graph.intern_formation(pair(0, 1, 0));
        let to = graph.intern_formation(Formation::squared_set());
        graph.intern_call(Call::new("circle left", from, to));
        graph.intern_call(Call::new("circle left", from, to));
        graph.intern_call(Call::new("circle right", from, to));
        assert_eq!(graph.calls().len(), 2);
    }
}
