use crate::app::state::AppState;
use crate::game::view::BoardView;
use crate::game::Phase;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, view: &BoardView) {
    let mut parts: Vec<Span> = Vec::new();

    let phase_name = match view.phase {
        Phase::Idle => "READY",
        Phase::Previewing => "PREVIEW",
        Phase::Playing => "PLAYING",
        Phase::Won => "SOLVED",
    };
    parts.push(Span::styled(
        format!(" [{}] ", phase_name),
        Style::default().fg(Color::Green).bg(Color::DarkGray),
    ));

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let counters = format!(" {}s | {} moves ", view.elapsed_secs, view.moves);

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + counters.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        counters,
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}
