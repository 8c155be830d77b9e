//! # photo-pairs
//!
//! A photo memory-matching game that, once solved, hands over to a timed
//! proposal sequence.
//!
//! ## Design Principles
//!
//! 1. **Explicit inputs**: The image pool and all flags are passed in at
//!    mount time. There is no process-wide state and the core never reads
//!    the environment.
//!
//! 2. **Injectable randomness**: Every random draw (deck shuffles, mosaic
//!    sizes, evasive button positions) goes through a seeded `GameRng`, so
//!    tests are reproducible.
//!
//! 3. **Cancellable timers**: Delayed transitions are events in a
//!    `TimerQueue` owned by the component they mutate. Teardown cancels
//!    them, so nothing changes after unmount.
//!
//! 4. **Degrade, don't fail**: An empty pool renders an empty board, a
//!    photo without dimensions is treated as square.
//!
//! ## Modules
//!
//! - `core`: RNG, timer queue, configuration
//! - `pool`: Image descriptors, environment settings, directory loader
//! - `game`: Deck construction, heart layout, matching state machine
//! - `proposal`: Step sequence, evasive decline control, photo mosaic
//! - `host`: Top-level composition and board render model
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use photo_pairs::{AppConfig, Host, HostView, ImageDescriptor, ImagePool, SlotId};
//!
//! let pool = ImagePool::new((0..18).map(|i| ImageDescriptor::new(format!("/{i}.avif"), 800, 600)));
//! let mut host = Host::mount(pool, AppConfig::default().with_seed(7));
//! assert_eq!(host.view(), HostView::Game);
//!
//! host.reveal(SlotId::new(0));
//! host.tick(Duration::from_millis(16));
//! ```

pub mod core;
pub mod game;
pub mod host;
pub mod pool;
pub mod proposal;

// Re-export commonly used types
pub use crate::core::{AppConfig, GameConfig, GameRng, HostConfig, ProposalConfig, TimerHandle, TimerQueue};

pub use crate::pool::{load_pool, ImageDescriptor, ImageId, ImagePool, LoaderSettings, PoolError};

pub use crate::game::{
    CardFace, Deck, GameStats, IgnoreReason, LayoutMask, MatchingGame, RevealOutcome, SlotId,
};

pub use crate::proposal::{
    AspectBucket, DeclinePosition, EvasionRegion, MosaicTile, ProposalSequence, ProposalStep, SizeClass,
};

pub use crate::host::{BoardCell, CardView, Host, HostView};
