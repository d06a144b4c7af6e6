//! The round state machine.
//!
//! `GameController` owns the board and the round counters and is driven by
//! three kinds of input: player actions (`start_preview`, `flip`, `stop`,
//! `reset`, `set_difficulty`), and deferred tasks it scheduled earlier and
//! which the runtime hands back through `fire`.
//!
//! The controller never sleeps or spawns. Every delay it needs is queued as a
//! [`TimerCommand`] which the caller drains with `take_timer_commands` and
//! executes. Each deferred task is stamped with the generation it was
//! scheduled in; `reset` bumps the generation and queues `CancelAll`, so a
//! task that still arrives afterwards is recognised as stale and dropped.

use crate::config::GameConfig;
use crate::game::card::Card;
use crate::game::deck;
use crate::game::difficulty::{Difficulty, DifficultySettings};
use crate::game::error::GameError;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use std::time::Duration;
use tracing::{debug, info};

/// Resolution of the round clock.
pub const CLOCK_TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Previewing,
    Playing,
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    /// End of the face-up preview; play begins.
    PreviewEnd,
    /// Turn a mismatched pair face-down again.
    FlipBack { first: usize, second: usize },
    /// One second of play elapsed.
    ClockTick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    pub generation: u64,
    pub task: DeferredTask,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerCommand {
    Schedule { delay: Duration, deferred: Deferred },
    CancelAll,
}

/// What a single flip did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    Ignored,
    Revealed,
    Matched,
    Mismatched,
    Won,
}

/// Final score of a won round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub elapsed_secs: u64,
    pub moves: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundState {
    /// Face-up cards awaiting comparison, at most two.
    pub pending: Vec<usize>,
    pub matched_pairs: usize,
    pub moves: u32,
    pub elapsed_secs: u64,
    pub phase: Phase,
}

pub struct GameController {
    config: GameConfig,
    symbols: Vec<String>,
    difficulty: Difficulty,
    board: Vec<Card>,
    round: RoundState,
    outcome: Option<RoundOutcome>,
    generation: u64,
    timers: Vec<TimerCommand>,
    rng: StdRng,
}

impl GameController {
    /// Validate `config` and deal the first board. Uses the configured seed
    /// when present, fresh entropy otherwise.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: GameConfig, mut rng: StdRng) -> Result<Self, GameError> {
        config.validate()?;

        let symbols = config.symbol_pool();
        let difficulty = config.default_difficulty;
        let pairs = config.settings(difficulty).pairs;
        let board = deck::generate(&symbols, pairs, &mut rng)?;

        Ok(Self {
            config,
            symbols,
            difficulty,
            board,
            round: RoundState::default(),
            outcome: None,
            generation: 0,
            timers: Vec::new(),
            rng,
        })
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn settings(&self) -> DifficultySettings {
        self.config.settings(self.difficulty)
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn phase(&self) -> Phase {
        self.round.phase
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pair_count(&self) -> usize {
        self.settings().pairs
    }

    /// Drain the timer commands queued since the last call, in order.
    pub fn take_timer_commands(&mut self) -> Vec<TimerCommand> {
        std::mem::take(&mut self.timers)
    }

    /// Show every card face-up for the difficulty's preview duration.
    /// Only valid from `Idle`; returns whether the preview started.
    pub fn start_preview(&mut self) -> bool {
        if self.round.phase != Phase::Idle {
            return false;
        }
        for card in &mut self.board {
            card.flipped = true;
        }
        self.round.phase = Phase::Previewing;

        let preview = self.settings().preview();
        let preview_ms = preview.as_millis() as u64;
        info!(difficulty = %self.difficulty, preview_ms, "preview started");
        self.schedule(preview, DeferredTask::PreviewEnd);
        true
    }

    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        if self.round.phase != Phase::Playing || self.round.pending.len() >= 2 {
            return FlipOutcome::Ignored;
        }
        let Some(card) = self.board.get_mut(index) else {
            return FlipOutcome::Ignored;
        };
        if !card.can_flip() {
            return FlipOutcome::Ignored;
        }

        card.flipped = true;
        self.round.pending.push(index);
        if self.round.pending.len() < 2 {
            return FlipOutcome::Revealed;
        }

        self.round.moves += 1;
        let (first, second) = (self.round.pending[0], self.round.pending[1]);

        if self.board[first].symbol != self.board[second].symbol {
            debug!(first, second, moves = self.round.moves, "mismatch");
            let delay = self.config.flip_back_delay();
            self.schedule(delay, DeferredTask::FlipBack { first, second });
            return FlipOutcome::Mismatched;
        }

        self.board[first].matched = true;
        self.board[second].matched = true;
        self.round.matched_pairs += 1;
        self.round.pending.clear();
        debug!(
            symbol = %self.board[first].symbol,
            matched_pairs = self.round.matched_pairs,
            "pair matched"
        );

        if self.round.matched_pairs == self.pair_count() {
            self.win();
            return FlipOutcome::Won;
        }
        FlipOutcome::Matched
    }

    /// Run a deferred task. Returns false when the task is stale or no
    /// longer applies to the current phase.
    pub fn fire(&mut self, deferred: Deferred) -> bool {
        if deferred.generation != self.generation {
            debug!(
                task = ?deferred.task,
                stale = deferred.generation,
                current = self.generation,
                "dropping stale deferred task"
            );
            return false;
        }

        match (deferred.task, self.round.phase) {
            (DeferredTask::PreviewEnd, Phase::Previewing) => {
                for card in &mut self.board {
                    card.flipped = false;
                }
                self.round.phase = Phase::Playing;
                info!("preview over, round started");
                self.schedule(CLOCK_TICK, DeferredTask::ClockTick);
                true
            }
            (DeferredTask::FlipBack { first, second }, Phase::Playing) => {
                for index in [first, second] {
                    if let Some(card) = self.board.get_mut(index) {
                        if !card.matched {
                            card.flipped = false;
                        }
                    }
                }
                self.round.pending.clear();
                true
            }
            (DeferredTask::ClockTick, Phase::Playing) => {
                self.round.elapsed_secs += 1;
                self.schedule(CLOCK_TICK, DeferredTask::ClockTick);
                true
            }
            _ => false,
        }
    }

    /// Abandon the round. Same as `reset`: the board is re-dealt.
    pub fn stop(&mut self) -> Result<(), GameError> {
        self.reset()
    }

    /// Cancel outstanding deferred tasks, zero every counter and deal a
    /// fresh board in `Idle`.
    pub fn reset(&mut self) -> Result<(), GameError> {
        let pairs = self.pair_count();
        let board = deck::generate(&self.symbols, pairs, &mut self.rng)?;

        self.cancel_deferred();
        self.board = board;
        self.round = RoundState::default();
        self.outcome = None;
        info!(difficulty = %self.difficulty, generation = self.generation, "board reset");
        Ok(())
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), GameError> {
        let previous = self.difficulty;
        self.difficulty = difficulty;
        if let Err(e) = self.reset() {
            self.difficulty = previous;
            return Err(e);
        }
        info!(from = %previous, to = %difficulty, "difficulty changed");
        Ok(())
    }

    fn win(&mut self) {
        self.cancel_deferred();
        self.round.phase = Phase::Won;
        let outcome = RoundOutcome {
            elapsed_secs: self.round.elapsed_secs,
            moves: self.round.moves,
        };
        self.outcome = Some(outcome);
        info!(
            elapsed_secs = outcome.elapsed_secs,
            moves = outcome.moves,
            difficulty = %self.difficulty,
            "round won"
        );
    }

    fn schedule(&mut self, delay: Duration, task: DeferredTask) {
        self.timers.push(TimerCommand::Schedule {
            delay,
            deferred: Deferred {
                generation: self.generation,
                task,
            },
        });
    }

    fn cancel_deferred(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.timers.clear();
        self.timers.push(TimerCommand::CancelAll);
    }
}
