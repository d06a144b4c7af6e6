//! Memory-matching game core: deck generation, the round state machine, and
//! the read-only view the renderer draws from.

pub mod card;
pub mod controller;
pub mod deck;
pub mod difficulty;
pub mod error;
pub mod view;

pub use controller::{Deferred, DeferredTask, FlipOutcome, GameController, Phase, TimerCommand};
pub use difficulty::{Difficulty, DifficultySettings};
pub use error::GameError;
