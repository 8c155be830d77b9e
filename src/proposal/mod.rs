//! The proposal shown after the game is solved.
//!
//! - `sequence`: Four-step controller, timer-advanced up to the question
//! - `evasion`: The decline control that dodges the pointer
//! - `mosaic`: Randomly sized photo tiles behind the question

pub mod evasion;
pub mod mosaic;
pub mod sequence;

pub use evasion::{DeclineButton, DeclinePosition, EvasionRegion};
pub use mosaic::{build_mosaic, AspectBucket, MosaicTile, SizeClass, TileSpan};
pub use sequence::{ProposalSequence, ProposalStep, ACCEPT_LABEL, DECLINE_LABEL};
