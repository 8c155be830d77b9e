//! Matching game state machine.
//!
//! ## Reveal rules
//!
//! - A reveal is ignored while two cards are face-up and unresolved, or if
//!   the target is already matched or already selected.
//! - The first card of an attempt is simply turned face-up.
//! - The second card is compared with the first by image identity:
//!   - equal: both move to `matched` and the selection clears at once;
//!   - different: both stay face-up for `reveal_delay`, are then flagged
//!     as mismatched, and after a further `mismatch_clear_delay` the flag
//!     and the selection both clear and the cards turn back down.
//!
//! When the last pair is matched the completion callback fires, once.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::deck::{Deck, SlotId};
use crate::core::{GameConfig, GameRng, TimerQueue};
use crate::pool::ImagePool;

/// Callback invoked when every card has been matched.
pub type CompletionCallback = Box<dyn FnMut()>;

/// What a card currently shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFace {
    Hidden,
    FaceUp,
    Matched,
}

/// Why a reveal did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The slot is not part of the deck (includes every slot of an empty deck).
    OutOfRange,
    /// Two cards are face-up and waiting to be resolved.
    Busy,
    AlreadyMatched,
    AlreadySelected,
    /// The game has been torn down.
    TornDown,
}

/// Result of [`MatchingGame::reveal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Ignored(IgnoreReason),
    /// First card of an attempt turned face-up.
    FirstCard,
    /// Second card completed a pair. `completed` is true on the final pair.
    Matched { completed: bool },
    /// Second card did not match; both stay up until the timers clear them.
    Mismatched,
}

/// Running counters for one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameStats {
    /// Pairs of cards compared.
    pub attempts: u32,
    pub matches: u32,
    pub mismatches: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GameTimer {
    FlagMismatch(SlotId, SlotId),
    ClearMismatch,
    ClearSelection,
}

/// One session of the photo matching game.
pub struct MatchingGame {
    deck: Deck,
    config: GameConfig,
    selected: SmallVec<[SlotId; 2]>,
    matched: FxHashSet<SlotId>,
    mismatched: SmallVec<[SlotId; 2]>,
    timers: TimerQueue<GameTimer>,
    on_complete: Option<CompletionCallback>,
    completed: bool,
    torn_down: bool,
    stats: GameStats,
}

impl MatchingGame {
    /// Start a session on an already built deck.
    #[must_use]
    pub fn new(deck: Deck, config: GameConfig) -> Self {
        Self {
            deck,
            config,
            selected: SmallVec::new(),
            matched: FxHashSet::default(),
            mismatched: SmallVec::new(),
            timers: TimerQueue::new(),
            on_complete: None,
            completed: false,
            torn_down: false,
            stats: GameStats::default(),
        }
    }

    /// Build a deck from `pool` and start a session on it.
    #[must_use]
    pub fn from_pool(pool: &ImagePool, config: GameConfig, rng: &mut GameRng) -> Self {
        let deck = Deck::build(pool, config.pair_count, rng);
        Self::new(deck, config)
    }

    /// Register the completion callback.
    #[must_use]
    pub fn with_completion(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Turn a card face-up.
    pub fn reveal(&mut self, slot: SlotId) -> RevealOutcome {
        if self.torn_down {
            return RevealOutcome::Ignored(IgnoreReason::TornDown);
        }
        if !self.deck.contains(slot) {
            if !self.deck.is_empty() {
                log::warn!("reveal of {slot} outside a deck of {}", self.deck.len());
            }
            return RevealOutcome::Ignored(IgnoreReason::OutOfRange);
        }
        if self.selected.len() == 2 {
            return RevealOutcome::Ignored(IgnoreReason::Busy);
        }
        if self.matched.contains(&slot) {
            return RevealOutcome::Ignored(IgnoreReason::AlreadyMatched);
        }
        if self.selected.contains(&slot) {
            return RevealOutcome::Ignored(IgnoreReason::AlreadySelected);
        }

        if self.selected.is_empty() {
            self.selected.push(slot);
            return RevealOutcome::FirstCard;
        }

        let first = self.selected[0];
        self.selected.push(slot);
        self.stats.attempts += 1;

        if self.deck.image_at(first) == self.deck.image_at(slot) {
            self.matched.insert(first);
            self.matched.insert(slot);
            self.selected.clear();
            self.stats.matches += 1;
            log::debug!("matched {first} and {slot} ({}/{})", self.matched.len(), self.deck.len());
            let completed = self.check_completion();
            RevealOutcome::Matched { completed }
        } else {
            self.stats.mismatches += 1;
            self.timers
                .schedule(self.config.reveal_delay, GameTimer::FlagMismatch(first, slot));
            RevealOutcome::Mismatched
        }
    }

    /// Advance the game clock, firing any due mismatch timers.
    pub fn tick(&mut self, elapsed: std::time::Duration) {
        if self.torn_down {
            return;
        }
        let target = self.timers.now() + elapsed;
        while let Some(timer) = self.timers.pop_due(target) {
            self.handle_timer(timer);
        }
        self.timers.advance_to(target);
    }

    /// Cancel pending timers. Nothing changes state afterwards.
    pub fn teardown(&mut self) {
        if !self.torn_down {
            log::debug!("tearing down game with {} pending timers", self.timers.pending_count());
        }
        self.timers.cancel_all();
        self.torn_down = true;
    }

    fn handle_timer(&mut self, timer: GameTimer) {
        match timer {
            GameTimer::FlagMismatch(a, b) => {
                self.mismatched.clear();
                self.mismatched.push(a);
                self.mismatched.push(b);
                // Both clears start from the same moment and only remove state.
                let delay = self.config.mismatch_clear_delay;
                self.timers.schedule(delay, GameTimer::ClearMismatch);
                self.timers.schedule(delay, GameTimer::ClearSelection);
            }
            GameTimer::ClearMismatch => self.mismatched.clear(),
            GameTimer::ClearSelection => self.selected.clear(),
        }
    }

    fn check_completion(&mut self) -> bool {
        if self.completed || self.deck.is_empty() || self.matched.len() != self.deck.len() {
            return false;
        }
        self.completed = true;
        log::info!("all {} pairs matched", self.deck.pair_count());
        if let Some(callback) = self.on_complete.as_mut() {
            callback();
        }
        true
    }

    // === Queries ===

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Face-up cards of the current attempt (at most two).
    #[must_use]
    pub fn selected(&self) -> &[SlotId] {
        &self.selected
    }

    /// Cards currently carrying the mismatch cue.
    #[must_use]
    pub fn mismatched(&self) -> &[SlotId] {
        &self.mismatched
    }

    /// Matched slots in ascending order.
    #[must_use]
    pub fn matched(&self) -> Vec<SlotId> {
        let mut slots: Vec<_> = self.matched.iter().copied().collect();
        slots.sort_unstable();
        slots
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    #[must_use]
    pub fn is_matched(&self, slot: SlotId) -> bool {
        self.matched.contains(&slot)
    }

    #[must_use]
    pub fn card_face(&self, slot: SlotId) -> CardFace {
        if self.matched.contains(&slot) {
            CardFace::Matched
        } else if self.selected.contains(&slot) {
            CardFace::FaceUp
        } else {
            CardFace::Hidden
        }
    }

    #[must_use]
    pub fn is_flagged_mismatch(&self, slot: SlotId) -> bool {
        self.mismatched.contains(&slot)
    }

    /// True once every card has been matched. Never true for an empty deck.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Whether a mismatch is still waiting to clear.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.timers.pending_count() > 0
    }

    #[must_use]
    pub fn stats(&self) -> GameStats {
        self.stats
    }
}
