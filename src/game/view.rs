//! Read-only projection of a round for the renderer.

use crate::game::controller::{GameController, Phase, RoundOutcome};
use crate::game::difficulty::Difficulty;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardFace {
    Hidden,
    Revealed(String),
    Matched(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub cards: Vec<CardFace>,
    pub columns: usize,
    pub difficulty: Difficulty,
    pub phase: Phase,
    pub moves: u32,
    pub elapsed_secs: u64,
    pub matched_pairs: usize,
    pub pair_count: usize,
    pub outcome: Option<RoundOutcome>,
    pub can_start: bool,
    pub can_stop: bool,
}

pub fn project(game: &GameController) -> BoardView {
    let cards = game
        .board()
        .iter()
        .map(|card| {
            if card.matched {
                CardFace::Matched(card.symbol.clone())
            } else if card.is_face_up() {
                CardFace::Revealed(card.symbol.clone())
            } else {
                CardFace::Hidden
            }
        })
        .collect();

    let round = game.round();
    BoardView {
        cards,
        columns: game.settings().columns,
        difficulty: game.difficulty(),
        phase: round.phase,
        moves: round.moves,
        elapsed_secs: round.elapsed_secs,
        matched_pairs: round.matched_pairs,
        pair_count: game.pair_count(),
        outcome: game.outcome(),
        can_start: round.phase == Phase::Idle,
        can_stop: round.phase != Phase::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::controller::{DeferredTask, TimerCommand};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn controller() -> GameController {
        GameController::with_rng(GameConfig::default(), StdRng::seed_from_u64(21)).unwrap()
    }

    #[test]
    fn test_idle_view() {
        let view = project(&controller());
        assert_eq!(view.cards.len(), 16);
        assert!(view.cards.iter().all(|f| *f == CardFace::Hidden));
        assert_eq!(view.columns, 4);
        assert_eq!(view.phase, Phase::Idle);
        assert!(view.can_start);
        assert!(!view.can_stop);
        assert_eq!(view.outcome, None);
    }

    #[test]
    fn test_preview_reveals_every_face() {
        let mut game = controller();
        game.start_preview();
        let view = project(&game);
        assert!(!view.can_start);
        assert!(view.can_stop);
        for (face, card) in view.cards.iter().zip(game.board()) {
            assert_eq!(face, &CardFace::Revealed(card.symbol.clone()));
        }
    }

    #[test]
    fn test_matched_cards_project_as_matched() {
        let mut game = controller();
        game.start_preview();
        let deferred = game
            .take_timer_commands()
            .into_iter()
            .find_map(|cmd| match cmd {
                TimerCommand::Schedule { deferred, .. } if deferred.task == DeferredTask::PreviewEnd => {
                    Some(deferred)
                }
                _ => None,
            })
            .unwrap();
        game.fire(deferred);

        let symbol = game.board()[0].symbol.clone();
        let twin = (1..game.board().len())
            .find(|&i| game.board()[i].symbol == symbol)
            .unwrap();
        game.flip(0);
        game.flip(twin);

        let view = project(&game);
        assert_eq!(view.cards[0], CardFace::Matched(symbol.clone()));
        assert_eq!(view.cards[twin], CardFace::Matched(symbol));
        assert_eq!(view.matched_pairs, 1);
        assert_eq!(view.moves, 1);
    }
}
