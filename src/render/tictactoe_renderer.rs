use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::metrics::MatchTally;
use crate::tictactoe::{CELL_COUNT, Player, TicTacToeState};

/// Columns taken by one cell, borders included
pub const CELL_WIDTH: u16 = 9;
/// Rows taken by one cell, borders included
pub const CELL_HEIGHT: u16 = 5;

/// Screen regions used by the tic-tac-toe view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub header: Rect,
    pub board: Rect,
    pub tally: Rect,
    pub footer: Rect,
}

impl BoardLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Tally
                Constraint::Length(3), // Footer
            ])
            .split(area);

        let region = chunks[1];
        let width = (CELL_WIDTH * 3).min(region.width);
        let height = (CELL_HEIGHT * 3).min(region.height);
        let board = Rect::new(
            region.x + (region.width - width) / 2,
            region.y + (region.height - height) / 2,
            width,
            height,
        );

        Self {
            header: chunks[0],
            board,
            tally: chunks[2],
            footer: chunks[3],
        }
    }

    /// Screen rectangle of a board index
    pub fn cell_rect(&self, index: usize) -> Rect {
        let col = (index % 3) as u16;
        let row = (index / 3) as u16;
        Rect::new(
            self.board.x + col * CELL_WIDTH,
            self.board.y + row * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(self.board)
    }

    /// Board index under a terminal column/row, if any
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        (0..CELL_COUNT).find(|&i| {
            let rect = self.cell_rect(i);
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        })
    }
}

pub struct TicTacToeRenderer;

impl TicTacToeRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        state: &TicTacToeState,
        cursor: usize,
        tally: &MatchTally,
    ) {
        let layout = BoardLayout::new(frame.area());

        frame.render_widget(self.render_status(state), layout.header);

        for index in 0..CELL_COUNT {
            let cell = self.render_cell(state, index, index == cursor);
            frame.render_widget(cell, layout.cell_rect(index));
        }

        frame.render_widget(self.render_tally(tally), layout.tally);
        frame.render_widget(self.render_controls(), layout.footer);
    }

    fn render_cell(&self, state: &TicTacToeState, index: usize, selected: bool) -> Paragraph<'_> {
        let winning = state
            .winning_line
            .is_some_and(|line| line.contains(&index));

        let (symbol, color) = match state.board.get(index) {
            Some(Player::X) => ("X", Color::Cyan),
            Some(Player::O) => ("O", Color::Yellow),
            None => (" ", Color::DarkGray),
        };

        let mut symbol_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        if winning {
            symbol_style = symbol_style.bg(Color::Green).fg(Color::Black);
        }

        let border_style = if selected && state.active {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let border_type = if selected && state.active {
            BorderType::Thick
        } else {
            BorderType::Plain
        };

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(symbol, symbol_style)),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        )
    }

    fn render_status(&self, state: &TicTacToeState) -> Paragraph<'_> {
        let color = if state.active {
            Color::White
        } else {
            Color::Green
        };

        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                state.status(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
    }

    fn render_tally(&self, tally: &MatchTally) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        Paragraph::new(Line::from(vec![
            Span::styled("X: ", label),
            Span::styled(tally.x_wins.to_string(), value),
            Span::raw("    "),
            Span::styled("O: ", label),
            Span::styled(tally.o_wins.to_string(), value),
            Span::raw("    "),
            Span::styled("Draws: ", label),
            Span::styled(tally.draws.to_string(), value),
        ]))
        .alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw("/"),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" select | "),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(", "),
            Span::styled("1-9", Style::default().fg(Color::Cyan)),
            Span::raw(" or click to mark | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP))
    }
}

impl Default for TicTacToeRenderer {
    fn default() -> Self {
        Self::new()
    }
}
