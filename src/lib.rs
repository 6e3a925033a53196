//! # sd-graph — Square Dance Formation Graphs
//!
//! Reads sequence files written by sd ("A Square Dance Caller's Helper")
//! and accumulates a graph with formations as nodes and calls as edges.
//!
//! ## Design Principles
//!
//! 1. **Explicit ownership**: the [`Graph`] is a plain struct owned by the
//!    caller and threaded by `&mut` — no ambient singleton
//! 2. **Clean DTOs**: `Dancer`, `Formation`, `Call` cross all boundaries
//! 3. **Parser owns nothing**: transcript text → session entries, with the
//!    graph mutated only through its two interning operations
//! 4. **Closed shape catalog**: classification iterates a fixed table of
//!    pattern slots, not an open type hierarchy
//!
//! ## Quick Start
//!
//! ```rust
//! use sd_graph::{parse, Graph};
//!
//! let mut graph = Graph::new();
//! let session = parse::parse_text(&mut graph, "1B^ 1G^\nheads square thru\n");
//!
//! // The canonical squared set is interned first, then the parsed pair.
//! assert_eq!(graph.formations().len(), 2);
//! assert_eq!(session.len(), 1);
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Module | Description |
//! |-------|--------|-------------|
//! | Load | [`snapshot`] | Restore the persisted graph, or start empty |
//! | Parse | [`parse`] | Scan dancer tokens, intern formations and calls |
//! | Classify | [`shape`] | Name a formation's geometry for artifact labels |
//! | Render | [`render`] | Emit per-formation SVG and a Graphviz DOT file |
//! | Persist | [`snapshot`] | Atomically overwrite the snapshot |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod parse;
pub mod graph;
pub mod shape;
pub mod snapshot;
pub mod render;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{Call, Dancer, Facing, Formation, FormationId, Role};

// ============================================================================
// Re-exports: Graph and parsing
// ============================================================================

pub use graph::Graph;
pub use parse::{Session, SessionEntry};

// ============================================================================
// Re-exports: Classification
// ============================================================================

pub use shape::{Shape, ShapeKind};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Snapshot error for {}: {source}", .path.display())]
    Snapshot {
        path: std::path::PathBuf,
        source: serde_json::Error,
    },

    #[error("Graph layout tool exited with {status}")]
    Layout { status: std::process::ExitStatus },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
