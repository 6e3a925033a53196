//! Shape classification — naming a formation's geometry.
//!
//! A shape is a fixed ordered list of normalized-grid coordinate slots.
//! Classification is agnostic to who stands where; the matched [`Shape`]
//! keeps the slot assignment so a fully position-specific label can be
//! rendered, primarily for naming per-formation output files.
//!
//! The catalog is closed: one enum variant per recognizable shape, each
//! carrying its pattern table.

use std::collections::HashMap;

use crate::model::{Dancer, Formation};

/// A grid coordinate slot in a shape pattern.
pub type Slot = (i64, i64);

/// The fixed catalog of recognizable shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    CircleOfEight,
    HorizontalLineOfEight,
    VerticalLineOfEight,
    HorizontalLinesOfFour,
    VerticalLinesOfFour,
    HorizontalTag,
    VerticalTag,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::CircleOfEight,
        ShapeKind::HorizontalLineOfEight,
        ShapeKind::VerticalLineOfEight,
        ShapeKind::HorizontalLinesOfFour,
        ShapeKind::VerticalLinesOfFour,
        ShapeKind::HorizontalTag,
        ShapeKind::VerticalTag,
    ];

    /// The pattern slots, in canonical label order.
    pub fn pattern(self) -> &'static [Slot] {
        match self {
            ShapeKind::CircleOfEight => &[
                (2, 0), (1, 0),
                (0, 1), (0, 2),
                (1, 3), (2, 3),
                (3, 2), (3, 1),
            ],
            ShapeKind::HorizontalLineOfEight => &[
                (0, 0), (1, 0), (2, 0), (3, 0),
                (4, 0), (5, 0), (6, 0), (7, 0),
            ],
            ShapeKind::VerticalLineOfEight => &[
                (0, 0), (0, 1), (0, 2), (0, 3),
                (0, 4), (0, 5), (0, 6), (0, 7),
            ],
            ShapeKind::HorizontalLinesOfFour => &[
                (3, 0), (2, 0), (1, 0), (0, 0),
                (0, 1), (1, 1), (2, 1), (3, 1),
            ],
            ShapeKind::VerticalLinesOfFour => &[
                (0, 0), (0, 1), (0, 2), (0, 3),
                (1, 3), (1, 2), (1, 1), (1, 0),
            ],
            ShapeKind::HorizontalTag => &[
                (1, 0), (2, 0),
                (0, 1), (1, 1), (2, 1), (3, 1),
                (2, 2), (1, 2),
            ],
            ShapeKind::VerticalTag => &[
                (0, 1), (0, 2),
                (1, 0), (1, 1), (1, 2), (1, 3),
                (3, 2), (3, 1),
            ],
        }
    }

    /// Short prefix used in artifact file names.
    pub fn file_prefix(self) -> &'static str {
        match self {
            ShapeKind::CircleOfEight => "c",
            ShapeKind::HorizontalLineOfEight => "h8",
            ShapeKind::VerticalLineOfEight => "v8",
            ShapeKind::HorizontalLinesOfFour => "h4",
            ShapeKind::VerticalLinesOfFour => "v4",
            ShapeKind::HorizontalTag => "ht",
            ShapeKind::VerticalTag => "vt",
        }
    }

    /// Match this shape against a formation: every dancer must stand on a
    /// pattern slot and every slot must be occupied. Returns the slot
    /// assignment on success.
    pub fn matches(self, formation: &Formation) -> Option<Shape> {
        let pattern = self.pattern();
        if formation.dancers.len() != pattern.len() {
            return None;
        }
        let mut occupied: HashMap<Slot, Dancer> = HashMap::with_capacity(pattern.len());
        for dancer in &formation.dancers {
            let slot = (dancer.x, dancer.y);
            if !pattern.contains(&slot) {
                return None;
            }
            occupied.insert(slot, *dancer);
        }
        let mut slots = Vec::with_capacity(pattern.len());
        for slot in pattern {
            slots.push(*occupied.get(slot)?);
        }
        Some(Shape { kind: self, slots })
    }
}

/// A successful classification: the shape kind plus the dancer occupying
/// each pattern slot, in pattern order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    kind: ShapeKind,
    slots: Vec<Dancer>,
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Dancers in pattern-slot order.
    pub fn slots(&self) -> &[Dancer] {
        &self.slots
    }

    /// Canonical identifying label: the shape prefix followed by one
    /// `{couple}{role}{facing}` segment per slot, in pattern order.
    pub fn label(&self) -> String {
        let mut label = String::from(self.kind.file_prefix());
        for dancer in &self.slots {
            label.push('_');
            label.push((b'0' + dancer.couple) as char);
            label.push(dancer.role.letter());
            label.push((b'0' + dancer.facing.quarter_turns()) as char);
        }
        label
    }
}

/// Classify a formation against the whole catalog. Usually zero or one
/// match; an empty result is a normal outcome, not an error.
pub fn identify(formation: &Formation) -> Vec<Shape> {
    ShapeKind::ALL
        .iter()
        .filter_map(|kind| kind.matches(formation))
        .collect()
}
