//! Deck construction.
//!
//! ## Policy
//!
//! Given a pool of N images and a target of P pairs:
//! - N >= P: P distinct images are drawn uniformly without replacement.
//! - 0 < N < P: the pool is repeated until it holds at least P entries,
//!   shuffled, and the first P are kept. Small pools therefore repeat an
//!   image across several pairs.
//! - N = 0: the deck is empty.
//!
//! Every drawn image is then duplicated and the full 2P sequence gets a
//! second, independent shuffle.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::pool::{ImageId, ImagePool};

/// Largest pair count whose slots all fit in a [`SlotId`].
pub const MAX_PAIR_COUNT: usize = (u32::MAX / 2) as usize;

/// Position of a card in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId(pub u32);

impl SlotId {
    /// Create a new slot ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// The shuffled card sequence for one game session.
///
/// Immutable once built.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    slots: Vec<ImageId>,
}

impl Deck {
    /// Build a deck of `pair_count` pairs from `pool`.
    pub fn build(pool: &ImagePool, pair_count: usize, rng: &mut GameRng) -> Self {
        let pair_count = if pair_count > MAX_PAIR_COUNT {
            log::warn!("clamping pair count {pair_count} to {MAX_PAIR_COUNT}");
            MAX_PAIR_COUNT
        } else {
            pair_count
        };
        if pool.is_empty() || pair_count == 0 {
            log::debug!("empty deck (pool: {}, pairs: {})", pool.len(), pair_count);
            return Self::default();
        }

        let ids: Vec<ImageId> = pool.ids().collect();
        let mut candidates = ids.clone();
        while candidates.len() < pair_count {
            candidates.extend_from_slice(&ids);
        }

        rng.shuffle(&mut candidates);
        candidates.truncate(pair_count);

        let mut slots: Vec<ImageId> = candidates.iter().flat_map(|&id| [id, id]).collect();
        rng.shuffle(&mut slots);

        log::debug!("built deck of {} slots from {} images", slots.len(), pool.len());
        Self { slots }
    }

    /// Build a deck from an explicit slot order.
    ///
    /// Used for scripted boards and tests; no pairing check is performed.
    pub fn from_slots(slots: Vec<ImageId>) -> Self {
        Self { slots }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.slots.len() / 2
    }

    /// The image shown by a slot.
    #[must_use]
    pub fn image_at(&self, slot: SlotId) -> Option<ImageId> {
        self.slots.get(slot.index()).copied()
    }

    /// Whether `slot` is a valid position in this deck.
    #[must_use]
    pub fn contains(&self, slot: SlotId) -> bool {
        slot.index() < self.slots.len()
    }

    /// Images in slot order.
    #[must_use]
    pub fn slots(&self) -> &[ImageId] {
        &self.slots
    }

    /// How many slots show `image`.
    #[must_use]
    pub fn occurrences(&self, image: ImageId) -> usize {
        self.slots.iter().filter(|&&id| id == image).count()
    }

    /// All slot ids in order.
    pub fn slot_ids(&self) -> impl Iterator<Item = SlotId> {
        (0..self.slots.len()).map_while(|i| u32::try_from(i).ok().map(SlotId))
    }
}
