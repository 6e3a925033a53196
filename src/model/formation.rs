//! Formation — the ordered snapshot of all dancers between two calls.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Dancer, Facing, Role};

/// Opaque formation identifier, dense from 1 in interning order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FormationId(pub u32);

impl FormationId {
    /// Graphviz node name, also the stem of the formation's SVG file.
    pub fn dot_id(self) -> String {
        format!("f{}", self.0)
    }
}

impl std::fmt::Display for FormationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered collection of dancers captured from one contiguous block of
/// dancer-bearing transcript lines.
///
/// Dancer order is scan order: top to bottom, left to right within a line.
/// Equality is positional — dancer `i` must equal dancer `i` — and ignores
/// the interning identity, so an uninterned candidate compares equal to its
/// interned twin. A full square fits the inline capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formation {
    /// Assigned once, at interning time; `None` before that.
    pub id: Option<FormationId>,
    pub dancers: SmallVec<[Dancer; 8]>,
}

impl PartialEq for Formation {
    fn eq(&self, other: &Self) -> bool {
        self.dancers == other.dancers
    }
}

impl Eq for Formation {}

impl Formation {
    pub fn new(dancers: impl IntoIterator<Item = Dancer>) -> Self {
        Self {
            id: None,
            dancers: dancers.into_iter().collect(),
        }
    }

    /// Compress each axis's raw coordinates to dense 0-based ranks.
    ///
    /// Raw positions come from arbitrary text columns and line numbers.
    /// Each dancer's x becomes the rank of its raw x among the distinct
    /// raw x-values of the formation; y likewise, independently. Dancers
    /// sharing a raw coordinate share the rank, so relative order on each
    /// axis is preserved. Idempotent: ranks of ranks are the ranks.
    pub fn regrid(mut self) -> Self {
        let mut xs: Vec<i64> = self.dancers.iter().map(|d| d.x).collect();
        let mut ys: Vec<i64> = self.dancers.iter().map(|d| d.y).collect();
        xs.sort_unstable();
        xs.dedup();
        ys.sort_unstable();
        ys.dedup();
        for d in &mut self.dancers {
            d.x = xs.partition_point(|&v| v < d.x) as i64;
            d.y = ys.partition_point(|&v| v < d.y) as i64;
        }
        self
    }

    /// The canonical starting formation: couples 1–4 squared up, each
    /// couple on one side of the square, facing in. Dancers are listed in
    /// scan order so that a squared set read back from a transcript
    /// interns to the same formation.
    pub fn squared_set() -> Self {
        Formation::new([
            Dancer::new(2, 1, 3, Role::Follower, Facing::Down),
            Dancer::new(3, 1, 3, Role::Leader, Facing::Down),
            Dancer::new(1, 2, 4, Role::Leader, Facing::Right),
            Dancer::new(4, 2, 2, Role::Follower, Facing::Left),
            Dancer::new(1, 3, 4, Role::Follower, Facing::Right),
            Dancer::new(4, 3, 2, Role::Leader, Facing::Left),
            Dancer::new(2, 4, 1, Role::Leader, Facing::Up),
            Dancer::new(3, 4, 1, Role::Follower, Facing::Up),
        ])
        .regrid()
    }

    /// Extent of the normalized grid, `(max x, max y)`. Zero for an empty
    /// formation.
    pub fn extent(&self) -> (i64, i64) {
        let max_x = self.dancers.iter().map(|d| d.x).max().unwrap_or(0);
        let max_y = self.dancers.iter().map(|d| d.y).max().unwrap_or(0);
        (max_x, max_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn leader(x: i64, y: i64) -> Dancer {
        Dancer::new(x, y, 1, Role::Leader, Facing::Up)
    }

    #[test]
    fn test_regrid_ranks_distinct_values() {
        // Raw x-values {5, 5, 12, 40} compress to ranks {0, 0, 1, 2},
        // independent of the gaps between them.
        let f = Formation::new([leader(5, 0), leader(5, 10), leader(12, 20), leader(40, 30)])
            .regrid();
        let xs: Vec<i64> = f.dancers.iter().map(|d| d.x).collect();
        let ys: Vec<i64> = f.dancers.iter().map(|d| d.y).collect();
        assert_eq!(xs, vec![0, 0, 1, 2]);
        assert_eq!(ys, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_regrid_axes_are_independent() {
        // A shared y does not merge distinct x ranks and vice versa.
        let f = Formation::new([leader(3, 7), leader(9, 7), leader(3, 8)]).regrid();
        let got: Vec<(i64, i64)> = f.dancers.iter().map(|d| (d.x, d.y)).collect();
        assert_eq!(got, vec![(0, 0), (1, 0), (0, 1)]);
    }

    #[test]
    fn test_regrid_is_idempotent() {
        let once = Formation::new([leader(5, 2), leader(12, 9), leader(40, 2)]).regrid();
        let twice = once.clone().regrid();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_equality_is_positional_not_set_based() {
        // Same dancers, opposite scan order: not equal.
        let a = Formation::new([leader(0, 0), leader(1, 0)]);
        let b = Formation::new([leader(1, 0), leader(0, 0)]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_ignores_identity() {
        let a = Formation::new([leader(0, 0)]);
        let mut b = a.clone();
        b.id = Some(FormationId(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_squared_set_is_normalized() {
        let set = Formation::squared_set();
        assert_eq!(set.dancers.len(), 8);
        assert_eq!(set.extent(), (3, 3));
        assert_eq!(set, set.clone().regrid());
    }
}
