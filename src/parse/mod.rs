//! # Transcript Parsing
//!
//! Turns the text of an sd sequence file into a [`Session`] — the ordered
//! list of transcript entries — while interning one formation per
//! contiguous block of dancer-bearing lines into the graph.
//!
//! There is no failure mode for the transcript format itself: a line
//! either contains dancer tokens or it is plain text.

pub mod token;
pub mod session;

pub use session::{parse_file, parse_text, Session, SessionEntry, WARNING_MARKER};
