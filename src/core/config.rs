//! Session configuration types.
//!
//! Hosts configure a session at mount time by providing:
//! - `GameConfig`: Deck size and mismatch timing for the matching game
//! - `ProposalConfig`: Step timing, evasion region and mosaic shaping
//! - `HostConfig`: Cross-fade timing and the startup flags
//! - `AppConfig`: Combines all configuration plus the RNG seed
//!
//! The core never reads the environment. Flags arrive already resolved,
//! usually through [`HostConfig::from_settings`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::pool::LoaderSettings;

/// Matching game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of pairs on the board (default: 18, which fills the heart).
    pub pair_count: usize,

    /// How long a mismatched pair stays face-up before it is flagged.
    pub reveal_delay: Duration,

    /// How long the mismatch cue shows before both cards flip back.
    pub mismatch_clear_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: 18,
            reveal_delay: Duration::from_secs(1),
            mismatch_clear_delay: Duration::from_secs(1),
        }
    }
}

impl GameConfig {
    /// Set the number of pairs.
    #[must_use]
    pub fn with_pair_count(mut self, pairs: usize) -> Self {
        self.pair_count = pairs;
        self
    }

    /// Set both mismatch delays.
    #[must_use]
    pub fn with_mismatch_delays(mut self, reveal: Duration, clear: Duration) -> Self {
        self.reveal_delay = reveal;
        self.mismatch_clear_delay = clear;
        self
    }
}

/// Proposal sequence configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProposalConfig {
    /// Time spent on each auto-advancing step.
    pub step_duration: Duration,

    /// Upper bound of the decline control's `top`, in percent.
    pub evasion_max_top: f64,

    /// Upper bound of the decline control's `left`, in percent.
    pub evasion_max_left: f64,

    /// How many times the pool is repeated in the background mosaic.
    pub mosaic_copies: usize,

    /// Widest column span any mosaic tile may take.
    pub mosaic_max_col_span: u32,

    /// Aspect ratio above which an image counts as wide.
    pub wide_ratio: f64,

    /// Aspect ratio below which an image counts as tall.
    pub tall_ratio: f64,
}

impl Default for ProposalConfig {
    fn default() -> Self {
        Self {
            step_duration: Duration::from_secs(5),
            evasion_max_top: 80.0,
            evasion_max_left: 80.0,
            mosaic_copies: 4,
            mosaic_max_col_span: 6,
            wide_ratio: 1.4,
            tall_ratio: 0.7,
        }
    }
}

impl ProposalConfig {
    /// Set the auto-advance interval.
    #[must_use]
    pub fn with_step_duration(mut self, duration: Duration) -> Self {
        self.step_duration = duration;
        self
    }

    /// Set the evasion region bounds (percent of the container).
    #[must_use]
    pub fn with_evasion_bounds(mut self, max_top: f64, max_left: f64) -> Self {
        self.evasion_max_top = max_top;
        self.evasion_max_left = max_left;
        self
    }

    /// Set the mosaic repetition count and column cap.
    #[must_use]
    pub fn with_mosaic(mut self, copies: usize, max_col_span: u32) -> Self {
        self.mosaic_copies = copies;
        self.mosaic_max_col_span = max_col_span.max(1);
        self
    }
}

/// Host composition configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Cross-fade duration between the game and the proposal.
    pub fade_duration: Duration,

    /// Mount straight into the proposal, skipping the game.
    pub skip_game: bool,

    /// Whether the host should play background music.
    pub music_enabled: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            fade_duration: Duration::from_secs(2),
            skip_game: false,
            music_enabled: false,
        }
    }
}

impl HostConfig {
    /// Build from loader settings, keeping the default fade.
    #[must_use]
    pub fn from_settings(settings: &LoaderSettings) -> Self {
        Self {
            skip_game: settings.skip_game,
            music_enabled: settings.music_enabled,
            ..Self::default()
        }
    }

    /// Set the cross-fade duration.
    #[must_use]
    pub fn with_fade_duration(mut self, duration: Duration) -> Self {
        self.fade_duration = duration;
        self
    }

    /// Skip the game on mount.
    #[must_use]
    pub fn skipping_game(mut self) -> Self {
        self.skip_game = true;
        self
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub game: GameConfig,
    pub proposal: ProposalConfig,
    pub host: HostConfig,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Set the matching game configuration.
    #[must_use]
    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    /// Set the proposal configuration.
    #[must_use]
    pub fn with_proposal(mut self, proposal: ProposalConfig) -> Self {
        self.proposal = proposal;
        self
    }

    /// Set the host configuration.
    #[must_use]
    pub fn with_host(mut self, host: HostConfig) -> Self {
        self.host = host;
        self
    }

    /// Fix the RNG seed for reproducible sessions.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
