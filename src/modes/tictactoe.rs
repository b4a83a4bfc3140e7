use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use log::info;
use ratatui::layout::Rect;
use std::time::Duration;
use tokio::time::interval;

use super::terminal::{Tui, restore_terminal, setup_terminal};
use crate::input::{InputHandler, TicTacToeCommand};
use crate::metrics::MatchTally;
use crate::render::{BoardLayout, TicTacToeRenderer};
use crate::tictactoe::{TicTacToeState, apply_move};

/// Interactive tic-tac-toe session
pub struct TicTacToeMode {
    state: TicTacToeState,
    /// Board index under the keyboard cursor
    cursor: usize,
    tally: MatchTally,
    renderer: TicTacToeRenderer,
    input_handler: InputHandler,
    render_interval: Duration,
    /// Size of the last drawn frame, for mouse hit-testing
    last_area: Rect,
    should_quit: bool,
}

impl TicTacToeMode {
    pub fn new(render_interval: Duration) -> Self {
        Self {
            state: TicTacToeState::new(),
            cursor: 4,
            tally: MatchTally::default(),
            renderer: TicTacToeRenderer::new(),
            input_handler: InputHandler::new(),
            render_interval,
            last_area: Rect::default(),
            should_quit: false,
        }
    }

    pub fn state(&self) -> &TicTacToeState {
        &self.state
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal(true)?;

        let result = self.run_game_loop(&mut terminal).await;

        restore_terminal(&mut terminal, true)?;

        result
    }

    async fn run_game_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut render_timer = interval(self.render_interval);

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.last_area = frame.area();
                        self.renderer.render(frame, &self.state, self.cursor, &self.tally);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let command = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.input_handler.tictactoe_key(key)
            }
            Event::Mouse(mouse) => self.input_handler.tictactoe_mouse(mouse),
            _ => return,
        };

        match command {
            TicTacToeCommand::MoveCursor(dx, dy) => self.move_cursor(dx, dy),
            TicTacToeCommand::Place => self.place(self.cursor),
            TicTacToeCommand::PlaceAt(index) => self.place(index),
            TicTacToeCommand::Click { column, row } => {
                if let Some(index) = BoardLayout::new(self.last_area).cell_at(column, row) {
                    self.place(index);
                }
            }
            TicTacToeCommand::Restart => self.reset_game(),
            TicTacToeCommand::Quit => self.should_quit = true,
            TicTacToeCommand::None => {}
        }
    }

    /// Cursor stays on the board; it does not wrap
    fn move_cursor(&mut self, dx: i32, dy: i32) {
        let col = (self.cursor % 3) as i32 + dx;
        let row = (self.cursor / 3) as i32 + dy;
        if (0..3).contains(&col) && (0..3).contains(&row) {
            self.cursor = (row * 3 + col) as usize;
        }
    }

    fn place(&mut self, index: usize) {
        let result = apply_move(&self.state, index);
        if !result.accepted {
            return;
        }

        self.cursor = index;
        self.state = result.state;
        if result.terminal {
            self.tally.record(result.outcome);
        }
    }

    fn reset_game(&mut self) {
        info!("tic-tac-toe restart requested");
        self.state = TicTacToeState::new();
        self.cursor = 4;
    }
}
