//! The decline control that runs away from the pointer.
//!
//! Every hover and every click moves it to a fresh uniform position inside
//! a bounded region, so in practice it cannot be clicked.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, ProposalConfig};

/// Absolute placement of the decline control, in percent of its container.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeclinePosition {
    pub top_pct: f64,
    pub left_pct: f64,
}

impl std::fmt::Display for DeclinePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "top: {:.2}%; left: {:.2}%", self.top_pct, self.left_pct)
    }
}

/// Region the decline control may jump to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvasionRegion {
    pub max_top: f64,
    pub max_left: f64,
}

impl Default for EvasionRegion {
    fn default() -> Self {
        Self::from_config(&ProposalConfig::default())
    }
}

impl EvasionRegion {
    #[must_use]
    pub fn from_config(config: &ProposalConfig) -> Self {
        Self {
            max_top: config.evasion_max_top.max(0.0),
            max_left: config.evasion_max_left.max(0.0),
        }
    }

    /// Draw each axis independently and uniformly from `[0, max)`.
    pub fn random_position(&self, rng: &mut GameRng) -> DeclinePosition {
        DeclinePosition {
            top_pct: rng.gen_unit() * self.max_top,
            left_pct: rng.gen_unit() * self.max_left,
        }
    }

    #[must_use]
    pub fn contains(&self, position: DeclinePosition) -> bool {
        (0.0..=self.max_top).contains(&position.top_pct)
            && (0.0..=self.max_left).contains(&position.left_pct)
    }
}

/// State of the decline control.
///
/// Starts in normal flow next to the accept control (`position() == None`)
/// and switches to absolute placement on the first dodge.
#[derive(Clone, Debug)]
pub struct DeclineButton {
    region: EvasionRegion,
    position: Option<DeclinePosition>,
    dodges: u32,
}

impl DeclineButton {
    #[must_use]
    pub fn new(region: EvasionRegion) -> Self {
        Self {
            region,
            position: None,
            dodges: 0,
        }
    }

    /// Jump somewhere else.
    pub fn dodge(&mut self, rng: &mut GameRng) -> DeclinePosition {
        let position = self.region.random_position(rng);
        self.position = Some(position);
        self.dodges += 1;
        position
    }

    #[must_use]
    pub fn position(&self) -> Option<DeclinePosition> {
        self.position
    }

    /// How many times the control has moved.
    #[must_use]
    pub fn dodges(&self) -> u32 {
        self.dodges
    }

    #[must_use]
    pub fn region(&self) -> EvasionRegion {
        self.region
    }
}
