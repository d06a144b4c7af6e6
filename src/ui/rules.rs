use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

const RULES: &[&str] = &[
    "Find every matching pair of cards.",
    "",
    "1. Pick a difficulty with 1, 2 or 3.",
    "2. Press s: all cards are shown face-up for a moment. Memorize them.",
    "3. Flip two cards with Enter/Space or a mouse click.",
    "4. A matching pair stays face-up. A wrong guess turns back after a second.",
    "5. Match all pairs to win. Fewer moves and less time is better.",
    "",
    "x stops the round, r deals a new board, q quits.",
];

pub fn render(frame: &mut Frame, area: Rect) {
    // Center the popup: 60% width, up to 15 rows
    let popup_w = (area.width * 60 / 100)
        .max(40)
        .min(area.width.saturating_sub(2));
    let popup_h = 15.min(area.height.saturating_sub(2));
    let popup_x = area.x + area.width.saturating_sub(popup_w) / 2;
    let popup_y = area.y + area.height.saturating_sub(popup_h) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" How to play (? or Esc to close) ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    let lines: Vec<Line> = RULES.iter().map(|l| Line::from(*l)).collect();
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Theme::help_text())
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup_area);
}
