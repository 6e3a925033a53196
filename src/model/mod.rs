//! # Formation Model
//!
//! Clean DTOs for the formation graph: dancers, formations, calls.
//! These types cross every boundary: parser ↔ graph ↔ renderer ↔ user.
//!
//! Design rule: this module is pure data — no I/O, no state.

pub mod dancer;
pub mod formation;
pub mod call;

pub use dancer::{Dancer, Facing, Role};
pub use formation::{Formation, FormationId};
pub use call::Call;
