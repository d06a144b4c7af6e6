use crate::game::view::{BoardView, CardFace};
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, view: &BoardView, cursor: usize) {
    let cells = layout::card_cells(area, view.columns, view.cards.len());
    if cells.is_empty() {
        let hint = Paragraph::new("Terminal too small for this board")
            .style(Theme::error_message())
            .alignment(Alignment::Center);
        frame.render_widget(hint, area);
        return;
    }

    for (index, (cell, face)) in cells.iter().zip(&view.cards).enumerate() {
        render_card(frame, *cell, face, index == cursor);
    }
}

fn render_card(frame: &mut Frame, cell: Rect, face: &CardFace, selected: bool) {
    let (text, style) = match face {
        CardFace::Hidden => ("?".to_string(), Theme::card_hidden()),
        CardFace::Revealed(symbol) => (symbol.clone(), Theme::card_revealed()),
        CardFace::Matched(symbol) => (symbol.clone(), Theme::card_matched()),
    };

    // Too small for a border: reverse video marks the cursor instead.
    if cell.height < 3 || cell.width < 4 {
        let style = if selected {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        };
        let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
        frame.render_widget(paragraph, cell);
        return;
    }

    let border_style = if selected {
        Theme::border_focused()
    } else if matches!(face, CardFace::Matched(_)) {
        Theme::card_matched()
    } else {
        Theme::border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(cell);
    frame.render_widget(block, cell);

    let middle = Rect::new(inner.x, inner.y + inner.height.saturating_sub(1) / 2, inner.width, 1);
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, middle);
}
