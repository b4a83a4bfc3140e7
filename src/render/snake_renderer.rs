use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::metrics::GameMetrics;
use crate::snake::{Position, SnakePhase, SnakeState};

pub struct SnakeRenderer;

impl SnakeRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &SnakeState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Status
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match state.phase() {
            SnakePhase::GameOver | SnakePhase::Won => {
                frame.render_widget(self.render_game_over(state), game_area);
            }
            SnakePhase::Paused | SnakePhase::Running => {
                frame.render_widget(self.render_grid(state), game_area);
            }
        }

        frame.render_widget(self.render_status(state), chunks[2]);
        frame.render_widget(self.render_controls(), chunks[3]);
    }

    fn render_grid(&self, state: &SnakeState) -> Paragraph<'_> {
        let size = state.grid_size as i32;
        let head = state.snake.head();

        let lines: Vec<Line> = (0..size)
            .map(|y| {
                let spans: Vec<Span> = (0..size)
                    .map(|x| {
                        let pos = Position::new(x, y);
                        if pos == head {
                            Span::styled(
                                "■ ",
                                Style::default()
                                    .fg(Color::Cyan)
                                    .add_modifier(Modifier::BOLD),
                            )
                        } else if state.snake.occupies(pos) {
                            Span::styled("□ ", Style::default().fg(Color::Green))
                        } else if state.food == Some(pos) {
                            Span::styled(
                                "● ",
                                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                            )
                        } else {
                            Span::styled(". ", Style::default().fg(Color::DarkGray))
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        let title = if state.paused { " Snake [paused] " } else { " Snake " };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &SnakeState, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(state.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("High: ", label),
            Span::styled(metrics.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Games: ", label),
            Span::styled(metrics.games_played.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_status(&self, state: &SnakeState) -> Paragraph<'_> {
        let color = match state.phase() {
            SnakePhase::Paused => Color::Yellow,
            SnakePhase::Running => Color::Green,
            SnakePhase::GameOver => Color::Red,
            SnakePhase::Won => Color::Magenta,
        };
        Paragraph::new(Line::from(Span::styled(
            state.status(),
            Style::default().fg(color),
        )))
        .alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &SnakeState) -> Paragraph<'_> {
        let (headline, color) = if state.won {
            ("YOU WIN", Color::Magenta)
        } else {
            ("GAME OVER", Color::Red)
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                headline,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space/P", Style::default().fg(Color::Cyan)),
            Span::raw(" pause | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for SnakeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::{Direction, Snake};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(state: &SnakeState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let renderer = SnakeRenderer::new();
        let metrics = GameMetrics::new();
        terminal
            .draw(|frame| renderer.render(frame, state, &metrics))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn state() -> SnakeState {
        SnakeState::new(
            Snake::new(Position::new(8, 8), Direction::Right, 3),
            Some(Position::new(2, 2)),
            16,
        )
    }

    #[test]
    fn test_paused_grid() {
        let text = screen_text(&state());
        assert!(text.contains("Snake [paused]"));
        assert!(text.contains("Press an arrow key to start"));
        assert!(text.contains("■"));
        assert!(text.contains("●"));
    }

    #[test]
    fn test_game_over_screen() {
        let mut state = state();
        state.game_over = true;
        let text = screen_text(&state);
        assert!(text.contains("GAME OVER"));
        assert!(!text.contains("■"));
    }

    #[test]
    fn test_win_screen() {
        let mut state = state();
        state.game_over = true;
        state.won = true;
        assert!(screen_text(&state).contains("YOU WIN"));
    }
}
