use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Number-row shortcut: `1` easy, `2` medium, `3` hard.
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Difficulty::Easy),
            '2' => Some(Difficulty::Medium),
            '3' => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Board shape and preview length for one difficulty preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultySettings {
    pub pairs: usize,
    pub preview_ms: u64,
    pub columns: usize,
}

impl DifficultySettings {
    pub fn defaults_for(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                pairs: 8,
                preview_ms: 500,
                columns: 4,
            },
            Difficulty::Medium => Self {
                pairs: 18,
                preview_ms: 1000,
                columns: 6,
            },
            Difficulty::Hard => Self {
                pairs: 32,
                preview_ms: 3000,
                columns: 8,
            },
        }
    }

    pub fn preview(&self) -> Duration {
        Duration::from_millis(self.preview_ms)
    }

    pub fn card_count(&self) -> usize {
        self.pairs * 2
    }

    pub fn rows(&self) -> usize {
        if self.columns == 0 {
            return 0;
        }
        self.card_count().div_ceil(self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_presets() {
        let easy = DifficultySettings::defaults_for(Difficulty::Easy);
        assert_eq!((easy.pairs, easy.preview_ms), (8, 500));
        assert_eq!(easy.rows(), 4);

        let medium = DifficultySettings::defaults_for(Difficulty::Medium);
        assert_eq!((medium.pairs, medium.preview_ms), (18, 1000));
        assert_eq!(medium.rows(), 6);

        let hard = DifficultySettings::defaults_for(Difficulty::Hard);
        assert_eq!((hard.pairs, hard.preview_ms), (32, 3000));
        assert_eq!(hard.rows(), 8);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Difficulty::from_key('1'), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_key('3'), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_key('4'), None);
    }

    #[test]
    fn test_rows_round_up() {
        let odd = DifficultySettings {
            pairs: 5,
            preview_ms: 0,
            columns: 4,
        };
        assert_eq!(odd.rows(), 3);
    }
}
