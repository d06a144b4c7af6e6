//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the game works out of the box.

use crate::game::card::default_symbols;
use crate::game::deck;
use crate::game::{Difficulty, DifficultySettings, GameError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Rules of a round: board presets, timings and the symbol pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub default_difficulty: Difficulty,
    /// How long a mismatched pair stays face-up.
    #[serde(default = "default_flip_back_ms")]
    pub flip_back_ms: u64,
    /// Fixed shuffle seed. Every launch deals the same sequence of boards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Replaces the built-in emoji pool. Symbols are dealt in pool order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbols: Option<Vec<String>>,
    #[serde(default = "default_easy")]
    pub easy: DifficultySettings,
    #[serde(default = "default_medium")]
    pub medium: DifficultySettings,
    #[serde(default = "default_hard")]
    pub hard: DifficultySettings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_difficulty: Difficulty::default(),
            flip_back_ms: default_flip_back_ms(),
            seed: None,
            symbols: None,
            easy: default_easy(),
            medium: default_medium(),
            hard: default_hard(),
        }
    }
}

impl GameConfig {
    pub fn settings(&self, difficulty: Difficulty) -> DifficultySettings {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    pub fn symbol_pool(&self) -> Vec<String> {
        self.symbols.clone().unwrap_or_else(default_symbols)
    }

    pub fn flip_back_delay(&self) -> Duration {
        Duration::from_millis(self.flip_back_ms)
    }

    /// Check every preset can be dealt from the symbol pool. Run once at
    /// startup so a bad config never reaches a half-built board.
    pub fn validate(&self) -> Result<(), GameError> {
        let pool = self.symbol_pool();
        for difficulty in Difficulty::ALL {
            let settings = self.settings(difficulty);
            if settings.columns == 0 {
                return Err(GameError::NoColumns.for_difficulty(difficulty));
            }
            deck::check_pool(&pool, settings.pairs).map_err(|e| e.for_difficulty(difficulty))?;
        }
        Ok(())
    }
}

fn default_flip_back_ms() -> u64 {
    1000
}

fn default_easy() -> DifficultySettings {
    DifficultySettings::defaults_for(Difficulty::Easy)
}

fn default_medium() -> DifficultySettings {
    DifficultySettings::defaults_for(Difficulty::Medium)
}

fn default_hard() -> DifficultySettings {
    DifficultySettings::defaults_for(Difficulty::Hard)
}

/// Diagnostic log file settings. Logs never go to the terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing` filter directive, e.g. `info` or `memmatch=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_dir() -> String {
    "~/.local/share/memmatch/logs".into()
}

fn default_log_level() -> String {
    "info".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.game.default_difficulty, Difficulty::Easy);
        assert_eq!(config.game.flip_back_ms, 1000);
        assert_eq!(config.game.settings(Difficulty::Medium).pairs, 18);
        assert_eq!(config.game.symbol_pool().len(), 32);
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, "info");
        assert!(config.game.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let config: AppConfig = toml::from_str(
            r#"
            [game]
            default_difficulty = "hard"
            flip_back_ms = 400
            seed = 9

            [game.easy]
            pairs = 6
            preview_ms = 250
            columns = 3

            [logging]
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.game.default_difficulty, Difficulty::Hard);
        assert_eq!(config.game.flip_back_delay(), Duration::from_millis(400));
        assert_eq!(config.game.seed, Some(9));
        assert_eq!(config.game.easy.pairs, 6);
        assert_eq!(config.game.hard, default_hard());
        assert!(!config.logging.enabled);
        assert_eq!(config.logging.log_dir, default_log_dir());
    }

    #[test]
    fn test_validate_rejects_oversized_preset() {
        let mut config = GameConfig::default();
        config.hard.pairs = 40;
        assert_eq!(
            config.validate(),
            Err(GameError::PoolExhausted {
                requested: 40,
                available: 32
            }
            .for_difficulty(Difficulty::Hard))
        );
    }

    #[test]
    fn test_validate_rejects_zero_columns_and_duplicates() {
        let mut config = GameConfig::default();
        config.medium.columns = 0;
        assert_eq!(
            config.validate(),
            Err(GameError::NoColumns.for_difficulty(Difficulty::Medium))
        );

        let mut config = GameConfig::default();
        let mut pool = default_symbols();
        pool[3] = pool[0].clone();
        config.symbols = Some(pool.clone());
        assert_eq!(
            config.validate(),
            Err(GameError::DuplicateSymbol(pool[0].clone()).for_difficulty(Difficulty::Easy))
        );
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = AppConfig::default();
        config.game.seed = Some(5);
        let text = toml::to_string_pretty(&config).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.game.seed, Some(5));
        assert_eq!(back.game.symbols, None);
        assert_eq!(back.game.easy, config.game.easy);
    }
}
