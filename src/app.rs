use std::io::{Stderr, stderr};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::time::interval;

use crate::audio::{AudioPlayer, Cue};
use crate::game::{Game, GameConfig, TickGate};
use crate::input::{InputHandler, KeyCommand};
use crate::metrics::SessionStats;
use crate::render::Renderer;

const FRAME_INTERVAL: Duration = Duration::from_micros(16_667); // ~60 fps

/// Owns the whole program: game state, tick gate, presentation, and the
/// event loop.
pub struct App {
    game: Game,
    gate: TickGate,
    stats: SessionStats,
    renderer: Renderer,
    input: InputHandler,
    audio: Option<AudioPlayer>,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig, audio: Option<AudioPlayer>) -> Self {
        Self {
            game: Game::new(config),
            gate: TickGate::new(),
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            audio,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, SetTitle("Snake Game"))
            .context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor().context("failed to hide cursor")?;
        terminal.clear().context("failed to clear terminal")?;

        let result = self.run_loop(&mut terminal).await;

        // Restore the terminal even when the loop errored.
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let mut events = EventStream::new();
        let mut frames = interval(FRAME_INTERVAL);

        loop {
            tokio::select! {
                maybe_event = events.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = frames.tick() => {
                    // Logic runs at most once per tick interval regardless
                    // of the frame rate.
                    if self.gate.elapsed(self.game.tick_interval()) {
                        self.step();
                    }
                    self.stats.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.game, &self.stats);
                    }).context("failed to draw frame")?;
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
        if let Event::Key(key) = event {
            // Act once per physical press, not on repeat or release.
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input.map_key(key) {
                KeyCommand::Steer(direction) => self.game.steer(direction),
                KeyCommand::Restart => {
                    self.game.restart();
                    self.stats.reset_clock();
                }
                KeyCommand::Quit => self.should_quit = true,
                KeyCommand::Ignored => {}
            }
        }
    }

    fn step(&mut self) {
        let outcome = self.game.update();

        if outcome.ate_food {
            self.play(Cue::Eat);
        }
        if let Some(over) = outcome.game_over {
            self.play(Cue::Hit);
            self.stats.record_round(over.final_score);
            self.stats.reset_clock();
        }
    }

    fn play(&self, cue: Cue) {
        if let Some(audio) = &self.audio {
            audio.play(cue);
        }
    }

    fn cleanup_terminal(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        disable_raw_mode().context("failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("failed to leave alternate screen")?;
        terminal.show_cursor().context("failed to show cursor")?;
        Ok(())
    }
}
