use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::game::{Difficulty, FlipOutcome};
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use tracing::{debug, error};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    let mut actions = match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Timer(deferred) => {
            if state.game.fire(deferred) {
                state.dirty = true;
            }
            vec![]
        }
    };

    // Drain timers the controller queued while handling this event
    actions.extend(state.timer_actions());
    actions
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.set_viewport(width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Rules panel captures all input when visible
    if state.show_rules {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            state.toggle_rules();
        }
        return vec![];
    }

    if let KeyCode::Char(c) = key.code {
        if let Some(difficulty) = Difficulty::from_key(c) {
            change_difficulty(state, difficulty);
            return vec![];
        }
    }

    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Char('?') => state.toggle_rules(),
        KeyCode::Char('s') => {
            state.game.start_preview();
        }
        KeyCode::Char('x') => {
            if let Err(e) = state.game.stop() {
                error!(error = %e, "stop failed");
            }
        }
        KeyCode::Char('r') => {
            match state.game.reset() {
                Ok(()) => debug!(generation = state.game.generation(), "new board dealt"),
                Err(e) => error!(error = %e, "reset failed"),
            }
        }
        KeyCode::Left | KeyCode::Char('h') => state.move_cursor(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => state.move_cursor(1, 0),
        KeyCode::Up | KeyCode::Char('k') => state.move_cursor(0, -1),
        KeyCode::Down | KeyCode::Char('j') => state.move_cursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let cursor = state.cursor;
            flip(state, cursor);
        }
        _ => {}
    }
    vec![]
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    state.dirty = true;

    // Clicking anywhere dismisses the rules panel
    if state.show_rules {
        state.toggle_rules();
        return vec![];
    }

    let board = layout::compute_layout(state.viewport).board;
    let columns = state.game.settings().columns;
    let count = state.game.board().len();
    if let Some(index) = layout::card_at(board, columns, count, mouse.column, mouse.row) {
        state.cursor = index;
        flip(state, index);
    }
    vec![]
}

fn flip(state: &mut AppState, index: usize) {
    let outcome = state.game.flip(index);
    if outcome != FlipOutcome::Ignored {
        debug!(index, ?outcome, "flip");
    }
}

fn change_difficulty(state: &mut AppState, difficulty: Difficulty) {
    if let Err(e) = state.game.set_difficulty(difficulty) {
        error!(error = %e, %difficulty, "difficulty change failed");
        return;
    }
    state.clamp_cursor();
}
