use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Persisted preferences: theme and desired random-word count.
///
/// Game state itself is never persisted; a round lives and dies in memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub theme: String,
    pub word_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            word_count: 5,
        }
    }
}

/// Random-word count bounds, matching the original game's input range.
pub const MIN_WORD_COUNT: usize = 1;
pub const MAX_WORD_COUNT: usize = 20;

impl Config {
    fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wordsearch.json")
    }

    /// Load the config, falling back to defaults on any failure.
    pub fn load() -> Self {
        match fs::read_to_string(Self::path()) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Best-effort save; a failure here is not worth interrupting play.
    pub fn save(&self) {
        if let Ok(json) = serde_json::to_string_pretty(self) {
            let _ = fs::write(Self::path(), json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.word_count, 5);
    }

    #[test]
    fn survives_a_round_trip() {
        let config = Config {
            theme: "light".to_string(),
            word_count: 12,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.theme, "light");
        assert_eq!(back.word_count, 12);
    }

    #[test]
    fn garbage_config_falls_back_to_default() {
        let config: Config = serde_json::from_str("{\"theme\": 3}").unwrap_or_default();
        assert_eq!(config.theme, "dark");
    }
}
