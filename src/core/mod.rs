//! Core building blocks: RNG, timers, configuration.
//!
//! Nothing in here knows about cards or proposals. The game, proposal and
//! host modules build on these.

pub mod config;
pub mod rng;
pub mod timer;

pub use config::{AppConfig, GameConfig, HostConfig, ProposalConfig};
pub use rng::GameRng;
pub use timer::{TimerHandle, TimerQueue};
