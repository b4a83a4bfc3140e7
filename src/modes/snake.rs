use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use log::info;
use std::time::Duration;
use tokio::time::interval;

use super::terminal::{Tui, restore_terminal, setup_terminal};
use crate::input::{InputHandler, SnakeCommand};
use crate::metrics::GameMetrics;
use crate::render::SnakeRenderer;
use crate::snake::{SnakeConfig, SnakeEngine, SnakeState, request_direction, toggle_pause};

/// Interactive snake session: owns the only mutable copy of the game state
pub struct SnakeMode {
    engine: SnakeEngine,
    state: SnakeState,
    metrics: GameMetrics,
    renderer: SnakeRenderer,
    input_handler: InputHandler,
    render_interval: Duration,
    should_quit: bool,
}

impl SnakeMode {
    pub fn new(config: SnakeConfig, render_interval: Duration) -> Self {
        let mut engine = SnakeEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: SnakeRenderer::new(),
            input_handler: InputHandler::new(),
            render_interval,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &SnakeState {
        &self.state
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal(false)?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        restore_terminal(&mut terminal, false)?;

        result
    }

    async fn run_game_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut event_stream = EventStream::new();

        let tick_interval = Duration::from_millis(self.engine.config().tick_interval_ms);
        let mut tick_timer = interval(tick_interval);
        let mut render_timer = interval(self.render_interval);

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = tick_timer.tick() => {
                    self.on_tick();
                }

                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
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
        let Event::Key(key) = event else {
            return;
        };
        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.snake_key(key) {
            SnakeCommand::Steer(direction) => {
                self.state = request_direction(&self.state, direction);
            }
            SnakeCommand::TogglePause => {
                self.state = toggle_pause(&self.state);
            }
            SnakeCommand::Restart => self.reset_game(),
            SnakeCommand::Quit => self.should_quit = true,
            SnakeCommand::None => {}
        }
    }

    fn on_tick(&mut self) {
        if self.state.paused || self.state.game_over {
            return;
        }

        let result = self.engine.advance(&self.state);
        self.state = result.state;

        if result.terminated {
            self.metrics.on_game_over(self.state.score);
        }
    }

    fn reset_game(&mut self) {
        info!("snake restart requested");
        self.state = self.engine.reset();
        self.metrics.on_game_start();
    }
}
