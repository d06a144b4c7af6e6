use crate::game::difficulty::Difficulty;
use thiserror::Error;

/// Configuration problems detected before a round can be dealt.
///
/// Invalid player actions are never errors; the controller ignores them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{requested} pairs requested but the symbol pool only has {available}")]
    PoolExhausted { requested: usize, available: usize },

    #[error("a board needs at least one pair")]
    NoPairs,

    #[error("a board needs at least one column")]
    NoColumns,

    #[error("symbol {0:?} appears more than once in the symbol pool")]
    DuplicateSymbol(String),

    #[error("invalid {difficulty} settings: {source}")]
    Difficulty {
        difficulty: Difficulty,
        #[source]
        source: Box<GameError>,
    },
}

impl GameError {
    pub fn for_difficulty(self, difficulty: Difficulty) -> Self {
        GameError::Difficulty {
            difficulty,
            source: Box::new(self),
        }
    }
}
