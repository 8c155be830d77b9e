//! The post-game proposal sequence.
//!
//! | Step        | Leaves when            | Auto-advance    |
//! |-------------|------------------------|-----------------|
//! | Greeting    | timer elapses          | `step_duration` |
//! | Teaser      | timer elapses          | `step_duration` |
//! | Question    | the accept control     | never           |
//! | Celebration | terminal               | never           |
//!
//! Accepting starts the fireworks overlay, which runs until teardown.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::evasion::{DeclineButton, DeclinePosition, EvasionRegion};
use super::mosaic::{build_mosaic, MosaicTile};
use crate::core::{GameRng, ProposalConfig, TimerHandle, TimerQueue};
use crate::pool::ImagePool;

pub const ACCEPT_LABEL: &str = "Yes, I will!";
pub const DECLINE_LABEL: &str = "No, I won't";

/// Stage of the proposal sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProposalStep {
    Greeting,
    Teaser,
    Question,
    Celebration,
}

impl ProposalStep {
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            ProposalStep::Greeting => 0,
            ProposalStep::Teaser => 1,
            ProposalStep::Question => 2,
            ProposalStep::Celebration => 3,
        }
    }

    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(ProposalStep::Greeting),
            1 => Some(ProposalStep::Teaser),
            2 => Some(ProposalStep::Question),
            3 => Some(ProposalStep::Celebration),
            _ => None,
        }
    }

    /// Headline shown during the step.
    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            ProposalStep::Greeting => "Congratulations! You have completed the game.",
            ProposalStep::Teaser => "I have a surprise for you!",
            ProposalStep::Question => "Will you be my Valentine?",
            ProposalStep::Celebration => "I love you so much! \u{1F495}",
        }
    }

    /// The step a timer leads to, if this step advances on its own.
    #[must_use]
    pub const fn auto_next(self) -> Option<Self> {
        match self {
            ProposalStep::Greeting => Some(ProposalStep::Teaser),
            ProposalStep::Teaser => Some(ProposalStep::Question),
            ProposalStep::Question | ProposalStep::Celebration => None,
        }
    }
}

impl std::fmt::Display for ProposalStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Step {} ({:?})", self.index(), self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProposalTimer {
    Advance,
}

/// Timer-driven proposal controller.
pub struct ProposalSequence {
    step: ProposalStep,
    config: ProposalConfig,
    timers: TimerQueue<ProposalTimer>,
    pending: Option<TimerHandle>,
    decline: DeclineButton,
    evasion_rng: GameRng,
    mosaic: Vec<MosaicTile>,
    fireworks: bool,
    torn_down: bool,
}

impl ProposalSequence {
    /// Mount the sequence at the greeting and schedule its first advance.
    #[must_use]
    pub fn new(pool: &ImagePool, config: ProposalConfig, rng: GameRng) -> Self {
        let mut mosaic_rng = rng.for_context("mosaic");
        let mosaic = build_mosaic(pool, &config, &mut mosaic_rng);
        let decline = DeclineButton::new(EvasionRegion::from_config(&config));

        let mut sequence = Self {
            step: ProposalStep::Greeting,
            config,
            timers: TimerQueue::new(),
            pending: None,
            decline,
            evasion_rng: rng.for_context("evasion"),
            mosaic,
            fireworks: false,
            torn_down: false,
        };
        sequence.schedule_advance();
        sequence
    }

    fn schedule_advance(&mut self) {
        if self.step.auto_next().is_some() {
            self.pending = Some(
                self.timers
                    .schedule(self.config.step_duration, ProposalTimer::Advance),
            );
        }
    }

    /// Advance the sequence clock.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.torn_down {
            return;
        }
        let target = self.timers.now() + elapsed;
        while let Some(ProposalTimer::Advance) = self.timers.pop_due(target) {
            self.pending = None;
            if let Some(next) = self.step.auto_next() {
                log::debug!("proposal {} -> {}", self.step, next);
                self.step = next;
                self.schedule_advance();
            }
        }
        self.timers.advance_to(target);
    }

    /// Accept the proposal. Only meaningful while the question is shown.
    ///
    /// Returns true if the sequence moved to the celebration.
    pub fn accept(&mut self) -> bool {
        if self.torn_down || self.step != ProposalStep::Question {
            log::debug!("accept ignored at {}", self.step);
            return false;
        }
        if let Some(handle) = self.pending.take() {
            self.timers.cancel(handle);
        }
        self.step = ProposalStep::Celebration;
        self.fireworks = true;
        log::info!("proposal accepted");
        true
    }

    /// Pointer entered the decline control.
    pub fn decline_hover(&mut self) -> Option<DeclinePosition> {
        self.dodge()
    }

    /// The decline control was clicked anyway.
    pub fn decline_click(&mut self) -> Option<DeclinePosition> {
        self.dodge()
    }

    fn dodge(&mut self) -> Option<DeclinePosition> {
        if self.torn_down || self.step != ProposalStep::Question {
            return None;
        }
        Some(self.decline.dodge(&mut self.evasion_rng))
    }

    /// Cancel the pending advance and stop the fireworks.
    pub fn teardown(&mut self) {
        self.timers.cancel_all();
        self.pending = None;
        self.fireworks = false;
        self.torn_down = true;
    }

    // === Queries ===

    #[must_use]
    pub fn step(&self) -> ProposalStep {
        self.step
    }

    #[must_use]
    pub fn caption(&self) -> &'static str {
        self.step.caption()
    }

    /// Current decline placement; `None` until it first dodges.
    #[must_use]
    pub fn decline_position(&self) -> Option<DeclinePosition> {
        self.decline.position()
    }

    #[must_use]
    pub fn decline_button(&self) -> &DeclineButton {
        &self.decline
    }

    #[must_use]
    pub fn fireworks_active(&self) -> bool {
        self.fireworks
    }

    #[must_use]
    pub fn mosaic(&self) -> &[MosaicTile] {
        &self.mosaic
    }

    /// Whether the question controls (and mosaic) are on screen.
    #[must_use]
    pub fn shows_question(&self) -> bool {
        self.step == ProposalStep::Question
    }

    /// Time until the next automatic advance.
    #[must_use]
    pub fn time_until_advance(&self) -> Option<Duration> {
        self.timers
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(self.timers.now()))
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
