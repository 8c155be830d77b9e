//! Top-level composition: game first, proposal after.
//!
//! The host starts in [`HostView::Game`] (or directly in the proposal when
//! `skip_game` is set). The game's completion signal starts a fade-out;
//! only once the fade has run its full duration does the proposal mount,
//! so the two views are never both fully opaque.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::board::{board_cells, BoardCell};
use crate::core::{AppConfig, GameRng, TimerQueue};
use crate::game::{LayoutMask, MatchingGame, RevealOutcome, SlotId};
use crate::pool::ImagePool;
use crate::proposal::{DeclinePosition, ProposalSequence};

/// Footer lines shown under the board.
pub const FOOTER_LINES: [&str; 2] = ["Match the photo pairs", "to reveal the surprise"];

/// Which full-screen view is up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostView {
    Game,
    /// The game is fading out; the proposal has not mounted yet.
    FadingOut,
    Proposal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HostTimer {
    ShowProposal,
}

/// Owns the game and proposal for one page session.
pub struct Host {
    view: HostView,
    pool: ImagePool,
    config: AppConfig,
    rng: GameRng,
    layout: LayoutMask,
    game: Option<MatchingGame>,
    proposal: Option<ProposalSequence>,
    timers: TimerQueue<HostTimer>,
    completion: Rc<Cell<bool>>,
    fade_started_at: Option<Duration>,
    proposal_shown_at: Option<Duration>,
    unmounted: bool,
}

impl Host {
    /// Mount a session over `pool`.
    #[must_use]
    pub fn mount(pool: ImagePool, config: AppConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        log::debug!(
            "mounting host: {} images, seed {}, skip_game {}",
            pool.len(),
            rng.seed(),
            config.host.skip_game
        );

        let mut host = Self {
            view: HostView::Game,
            pool,
            config,
            rng,
            layout: LayoutMask::heart(),
            game: None,
            proposal: None,
            timers: TimerQueue::new(),
            completion: Rc::new(Cell::new(false)),
            fade_started_at: None,
            proposal_shown_at: None,
            unmounted: false,
        };

        if host.config.host.skip_game {
            host.show_proposal();
        } else {
            let signal = host.completion.clone();
            let mut deck_rng = host.rng.for_context("deck");
            host.game = Some(
                MatchingGame::from_pool(&host.pool, host.config.game.clone(), &mut deck_rng)
                    .with_completion(move || signal.set(true)),
            );
        }
        host
    }

    /// Forward a card click to the game.
    ///
    /// Returns `None` when no game is mounted.
    pub fn reveal(&mut self, slot: SlotId) -> Option<RevealOutcome> {
        if self.unmounted {
            return None;
        }
        let outcome = self.game.as_mut()?.reveal(slot);
        self.poll_completion();
        Some(outcome)
    }

    fn poll_completion(&mut self) {
        if !self.completion.replace(false) {
            return;
        }
        if self.view != HostView::Game {
            log::debug!("completion ignored: transition already under way");
            return;
        }
        self.view = HostView::FadingOut;
        self.fade_started_at = Some(self.timers.now());
        self.timers
            .schedule(self.config.host.fade_duration, HostTimer::ShowProposal);
        log::info!("game solved, fading to proposal");
    }

    fn show_proposal(&mut self) {
        if let Some(mut game) = self.game.take() {
            game.teardown();
        }
        let proposal_rng = self.rng.fork();
        self.proposal = Some(ProposalSequence::new(
            &self.pool,
            self.config.proposal.clone(),
            proposal_rng,
        ));
        self.view = HostView::Proposal;
        self.proposal_shown_at = Some(self.timers.now());
    }

    /// Advance every clock in the session.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.unmounted {
            return;
        }
        if let Some(game) = self.game.as_mut() {
            game.tick(elapsed);
        }

        let target = self.timers.now() + elapsed;
        let mut proposal_elapsed = elapsed;
        while let Some(HostTimer::ShowProposal) = self.timers.pop_due(target) {
            self.show_proposal();
            proposal_elapsed = target.saturating_sub(self.timers.now());
        }
        self.timers.advance_to(target);

        if let Some(proposal) = self.proposal.as_mut() {
            proposal.tick(proposal_elapsed);
        }
    }

    /// Accept the proposal.
    pub fn accept(&mut self) -> bool {
        !self.unmounted && self.proposal.as_mut().map_or(false, ProposalSequence::accept)
    }

    pub fn decline_hover(&mut self) -> Option<DeclinePosition> {
        if self.unmounted {
            return None;
        }
        self.proposal.as_mut()?.decline_hover()
    }

    pub fn decline_click(&mut self) -> Option<DeclinePosition> {
        if self.unmounted {
            return None;
        }
        self.proposal.as_mut()?.decline_click()
    }

    /// Tear everything down. No timer fires afterwards.
    pub fn unmount(&mut self) {
        if let Some(game) = self.game.as_mut() {
            game.teardown();
        }
        if let Some(proposal) = self.proposal.as_mut() {
            proposal.teardown();
        }
        self.timers.cancel_all();
        self.unmounted = true;
        log::debug!("host unmounted in {:?}", self.view);
    }

    // === Queries ===

    #[must_use]
    pub fn view(&self) -> HostView {
        self.view
    }

    #[must_use]
    pub fn game(&self) -> Option<&MatchingGame> {
        self.game.as_ref()
    }

    #[must_use]
    pub fn proposal(&self) -> Option<&ProposalSequence> {
        self.proposal.as_ref()
    }

    #[must_use]
    pub fn pool(&self) -> &ImagePool {
        &self.pool
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn music_enabled(&self) -> bool {
        self.config.host.music_enabled
    }

    #[must_use]
    pub fn heart_layout(&self) -> LayoutMask {
        self.layout
    }

    /// Board render model; empty once the game is gone or if it has no cards.
    #[must_use]
    pub fn board(&self) -> Vec<BoardCell> {
        self.game
            .as_ref()
            .map(|game| board_cells(game, &self.layout))
            .unwrap_or_default()
    }

    /// Footer text, shown only alongside the board.
    #[must_use]
    pub fn footer_lines(&self) -> Option<[&'static str; 2]> {
        (self.view != HostView::Proposal).then_some(FOOTER_LINES)
    }

    #[must_use]
    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }

    fn fraction_since(&self, start: Option<Duration>) -> f64 {
        let Some(start) = start else {
            return 0.0;
        };
        let fade = self.config.host.fade_duration;
        if fade.is_zero() {
            return 1.0;
        }
        let elapsed = self.timers.now().saturating_sub(start);
        (elapsed.as_secs_f64() / fade.as_secs_f64()).min(1.0)
    }

    /// How far the game-to-proposal fade has run, from 0 to 1.
    #[must_use]
    pub fn fade_progress(&self) -> f64 {
        match self.view {
            HostView::Game => 0.0,
            HostView::FadingOut => self.fraction_since(self.fade_started_at),
            HostView::Proposal => 1.0,
        }
    }

    /// Opacity of the game view (1 until the fade starts, 0 once it ends).
    #[must_use]
    pub fn game_opacity(&self) -> f64 {
        1.0 - self.fade_progress()
    }

    /// Opacity of the proposal view, fading in after it mounts.
    #[must_use]
    pub fn proposal_opacity(&self) -> f64 {
        match self.view {
            HostView::Proposal => self.fraction_since(self.proposal_shown_at),
            HostView::Game | HostView::FadingOut => 0.0,
        }
    }
}
