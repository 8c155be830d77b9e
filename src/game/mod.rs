//! The photo matching game.
//!
//! - `deck`: Deck construction from an image pool
//! - `layout`: The heart-shaped board template
//! - `engine`: Reveal/match/mismatch state machine with completion signal

pub mod deck;
pub mod engine;
pub mod layout;

pub use deck::{Deck, SlotId, MAX_PAIR_COUNT};
pub use engine::{CardFace, CompletionCallback, GameStats, IgnoreReason, MatchingGame, RevealOutcome};
pub use layout::{LayoutCell, LayoutMask};
