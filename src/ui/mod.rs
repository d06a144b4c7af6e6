mod board;
mod header;
pub mod layout;
mod rules;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use crate::game::view::BoardView;
use crate::game::Phase;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let view = state.view();
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    header::render(frame, app_layout.header, &view);
    board::render(frame, app_layout.board, &view, state.cursor);
    status_bar::render(frame, app_layout.status_bar, state, &view);
    render_help(frame, app_layout.help, &view);

    if view.phase == Phase::Won {
        render_win_banner(frame, app_layout.board, &view);
    }
    if state.show_rules {
        rules::render(frame, area);
    }
}

fn render_help(frame: &mut Frame, area: Rect, view: &BoardView) {
    let control = |label: &'static str, enabled: bool| {
        let style = if enabled {
            Theme::control_enabled()
        } else {
            Theme::control_disabled()
        };
        Span::styled(label, style)
    };

    let line = Line::from(vec![
        control(" s start ", view.can_start),
        control(" x stop ", view.can_stop),
        control(" r play again ", true),
        Span::styled(" ←↑↓→ move  Enter flip  ? rules  q quit", Theme::help_text()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_win_banner(frame: &mut Frame, board: Rect, view: &BoardView) {
    let Some(outcome) = view.outcome else { return };

    let w = 34.min(board.width);
    let h = 6.min(board.height);
    let banner = Rect::new(
        board.x + board.width.saturating_sub(w) / 2,
        board.y + board.height.saturating_sub(h) / 2,
        w,
        h,
    );
    frame.render_widget(Clear, banner);

    let block = Block::default()
        .title(" You won! ")
        .title_style(Theme::win_banner())
        .borders(Borders::ALL)
        .border_style(Theme::win_banner());

    let lines = vec![
        Line::from(format!("Time: {}s", outcome.elapsed_secs)),
        Line::from(format!("Moves: {}", outcome.moves)),
        Line::from(Span::styled("Press r to play again", Theme::help_text())),
    ];
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, banner);
}
