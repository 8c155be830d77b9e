//! Startup settings resolved from the environment.
//!
//! This is the only place that touches the process environment. The rest
//! of the crate receives plain values.

use std::path::PathBuf;

/// Environment variable overriding the photo directory.
pub const PHOTOS_DIR_ENV: &str = "GAME_PHOTOS_DIR";
/// Environment variable that skips the game and shows the proposal.
pub const SKIP_GAME_ENV: &str = "BYPASS_MINIGAME";
/// Environment variable that turns background music on.
pub const MUSIC_ENV: &str = "MUSIC_ENABLED";

/// Directory scanned when no override is set.
pub const DEFAULT_PHOTOS_DIR: &str = "public/game-photos";

/// Settings read once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderSettings {
    pub photos_dir: PathBuf,
    pub skip_game: bool,
    pub music_enabled: bool,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            photos_dir: PathBuf::from(DEFAULT_PHOTOS_DIR),
            skip_game: false,
            music_enabled: false,
        }
    }
}

impl LoaderSettings {
    /// Resolve settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let photos_dir = lookup(PHOTOS_DIR_ENV)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PHOTOS_DIR));

        let settings = Self {
            photos_dir,
            skip_game: lookup(SKIP_GAME_ENV).as_deref().map_or(false, parse_flag),
            music_enabled: lookup(MUSIC_ENV).as_deref().map_or(false, parse_flag),
        };
        log::debug!("loader settings: {:?}", settings);
        settings
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = LoaderSettings::from_lookup(lookup(&[]));
        assert_eq!(settings, LoaderSettings::default());
        assert_eq!(settings.photos_dir, PathBuf::from("public/game-photos"));
    }

    #[test]
    fn test_overrides() {
        let settings = LoaderSettings::from_lookup(lookup(&[
            (PHOTOS_DIR_ENV, "public/holiday"),
            (SKIP_GAME_ENV, "true"),
            (MUSIC_ENV, "1"),
        ]));

        assert_eq!(settings.photos_dir, PathBuf::from("public/holiday"));
        assert!(settings.skip_game);
        assert!(settings.music_enabled);
    }

    #[test]
    fn test_flag_parsing() {
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" yes "));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("on please"));
    }

    #[test]
    fn test_blank_dir_falls_back() {
        let settings = LoaderSettings::from_lookup(lookup(&[(PHOTOS_DIR_ENV, "  ")]));
        assert_eq!(settings.photos_dir, PathBuf::from(DEFAULT_PHOTOS_DIR));
    }
}
