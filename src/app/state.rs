use crate::app::action::Action;
use crate::config::AppConfig;
use crate::game::view::{self, BoardView};
use crate::game::{GameController, GameError, Phase};
use ratatui::layout::Rect;

pub struct AppState {
    pub game: GameController,
    /// Keyboard-selected card.
    pub cursor: usize,
    pub show_rules: bool,
    /// Last known terminal size, used for mouse hit-testing.
    pub viewport: Rect,
    pub dirty: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, GameError> {
        let game = GameController::new(config.game.clone())?;
        Ok(Self {
            game,
            cursor: 0,
            show_rules: false,
            viewport: Rect::default(),
            dirty: true,
            should_quit: false,
        })
    }

    pub fn view(&self) -> BoardView {
        view::project(&self.game)
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
        self.dirty = true;
    }

    /// Move the cursor by whole cells, staying on the board.
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let settings = self.game.settings();
        let (columns, rows) = (settings.columns, settings.rows());
        let count = self.game.board().len();
        if columns == 0 || count == 0 {
            return;
        }

        let col = (self.cursor % columns) as isize;
        let row = (self.cursor / columns) as isize;
        let new_col = (col + dx).clamp(0, columns as isize - 1) as usize;
        let new_row = (row + dy).clamp(0, rows as isize - 1) as usize;

        let index = new_row * columns + new_col;
        if index < count {
            self.cursor = index;
            self.dirty = true;
        }
    }

    /// Keep the cursor on the board after a re-deal changes its size.
    pub fn clamp_cursor(&mut self) {
        let count = self.game.board().len();
        if self.cursor >= count {
            self.cursor = count.saturating_sub(1);
        }
    }

    pub fn toggle_rules(&mut self) {
        self.show_rules = !self.show_rules;
        self.dirty = true;
    }

    /// Drain the controller's timer commands as actions for the main loop.
    pub fn timer_actions(&mut self) -> Vec<Action> {
        self.game
            .take_timer_commands()
            .into_iter()
            .map(Action::from)
            .collect()
    }

    pub fn status_line(&self) -> String {
        let round = self.game.round();
        match round.phase {
            Phase::Idle => "Press s to preview the cards".to_string(),
            Phase::Previewing => "Memorize the board...".to_string(),
            Phase::Playing => format!(
                "Pairs {}/{}",
                round.matched_pairs,
                self.game.pair_count()
            ),
            Phase::Won => match self.game.outcome() {
                Some(outcome) => format!(
                    "Solved in {}s with {} moves, press r to play again",
                    outcome.elapsed_secs, outcome.moves
                ),
                None => "Solved, press r to play again".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let mut config = AppConfig::default();
        config.game.seed = Some(1);
        AppState::new(&config).unwrap()
    }

    #[test]
    fn test_cursor_stays_on_board() {
        let mut state = state();
        state.move_cursor(-1, -1);
        assert_eq!(state.cursor, 0);

        state.move_cursor(1, 0);
        assert_eq!(state.cursor, 1);
        state.move_cursor(0, 1);
        assert_eq!(state.cursor, 5);

        state.move_cursor(10, 10);
        assert_eq!(state.cursor, 15);
    }

    #[test]
    fn test_cursor_skips_missing_cells_on_short_last_row() {
        let mut config = AppConfig::default();
        config.game.seed = Some(1);
        config.game.easy.pairs = 5;
        config.game.easy.columns = 4;
        let mut state = AppState::new(&config).unwrap();

        // 10 cards: last row holds indices 8 and 9.
        state.cursor = 7;
        state.move_cursor(0, 1);
        assert_eq!(state.cursor, 7);
        state.cursor = 5;
        state.move_cursor(0, 1);
        assert_eq!(state.cursor, 9);
    }

    #[test]
    fn test_clamp_after_smaller_board() {
        let mut state = state();
        state.cursor = 15;
        state.game.set_difficulty(crate::game::Difficulty::Hard).unwrap();
        state.cursor = 60;
        state.game.set_difficulty(crate::game::Difficulty::Easy).unwrap();
        state.clamp_cursor();
        assert_eq!(state.cursor, 15);
    }

    #[test]
    fn test_status_line_follows_phase() {
        let mut state = state();
        assert!(state.status_line().contains("Press s"));
        state.game.start_preview();
        assert!(state.status_line().contains("Memorize"));
    }
}
