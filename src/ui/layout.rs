use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Upper bound on a card cell so small boards don't stretch across a
/// wide terminal.
pub const MAX_CELL_WIDTH: u16 = 10;
pub const MAX_CELL_HEIGHT: u16 = 5;

pub struct AppLayout {
    pub header: Rect,
    pub board: Rect,
    pub status_bar: Rect,
    pub help: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Difficulty tabs
            Constraint::Min(3),    // Board
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Key help
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        board: chunks[1],
        status_bar: chunks[2],
        help: chunks[3],
    }
}

/// Screen rectangles for `count` cards laid out `columns` wide, centred in
/// `board`. Empty when the board area is too small to give every card a cell.
pub fn card_cells(board: Rect, columns: usize, count: usize) -> Vec<Rect> {
    if columns == 0 || count == 0 {
        return Vec::new();
    }
    let rows = count.div_ceil(columns);
    let (Ok(cols_u16), Ok(rows_u16)) = (u16::try_from(columns), u16::try_from(rows)) else {
        return Vec::new();
    };

    let cell_w = (board.width / cols_u16).min(MAX_CELL_WIDTH);
    let cell_h = (board.height / rows_u16).min(MAX_CELL_HEIGHT);
    if cell_w == 0 || cell_h == 0 {
        return Vec::new();
    }

    let x0 = board.x + (board.width - cell_w * cols_u16) / 2;
    let y0 = board.y + (board.height - cell_h * rows_u16) / 2;

    (0..count)
        .map(|i| {
            let col = (i % columns) as u16;
            let row = (i / columns) as u16;
            Rect::new(x0 + col * cell_w, y0 + row * cell_h, cell_w, cell_h)
        })
        .collect()
}

/// Which card, if any, sits under the terminal cell `(x, y)`.
pub fn card_at(board: Rect, columns: usize, count: usize, x: u16, y: u16) -> Option<usize> {
    card_cells(board, columns, count).iter().position(|r| {
        x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_splits_screen() {
        let layout = compute_layout(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.board, Rect::new(0, 3, 80, 25));
        assert_eq!(layout.status_bar.y, 28);
        assert_eq!(layout.help.y, 29);
    }

    #[test]
    fn test_cells_fill_exact_board() {
        let board = Rect::new(0, 0, 40, 20);
        let cells = card_cells(board, 4, 16);
        assert_eq!(cells.len(), 16);
        assert_eq!(cells[0], Rect::new(0, 0, 10, 5));
        assert_eq!(cells[5], Rect::new(10, 5, 10, 5));
        assert_eq!(cells[15], Rect::new(30, 15, 10, 5));
    }

    #[test]
    fn test_cells_are_centred_and_capped() {
        let board = Rect::new(0, 2, 100, 30);
        let cells = card_cells(board, 4, 16);
        // 4 * 10 wide, 4 * 5 tall, centred.
        assert_eq!(cells[0], Rect::new(30, 7, 10, 5));
    }

    #[test]
    fn test_card_at_hits_and_misses() {
        let board = Rect::new(0, 0, 40, 20);
        assert_eq!(card_at(board, 4, 16, 0, 0), Some(0));
        assert_eq!(card_at(board, 4, 16, 15, 7), Some(5));
        assert_eq!(card_at(board, 4, 16, 39, 19), Some(15));
        assert_eq!(card_at(board, 4, 16, 40, 0), None);
    }

    #[test]
    fn test_tiny_board_has_no_cells() {
        assert!(card_cells(Rect::new(0, 0, 3, 3), 8, 64).is_empty());
        assert!(card_cells(Rect::new(0, 0, 40, 20), 0, 16).is_empty());
        assert_eq!(card_at(Rect::new(0, 0, 3, 3), 8, 64, 1, 1), None);
    }
}
