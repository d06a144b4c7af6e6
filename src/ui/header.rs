use crate::game::view::BoardView;
use crate::game::Difficulty;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, view: &BoardView) {
    let block = Block::default()
        .title(" memmatch ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let mut spans: Vec<Span> = Vec::new();
    for (n, difficulty) in Difficulty::ALL.iter().enumerate() {
        let style = if *difficulty == view.difficulty {
            Theme::tab_active()
        } else {
            Theme::tab_inactive()
        };
        spans.push(Span::styled(format!(" [{}] {} ", n + 1, difficulty), style));
        spans.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
