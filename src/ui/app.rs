//! Main TUI application state and logic

use super::panes::{
    render_array_pane, render_narrative_pane, render_status_bar, render_tree_pane, StepView,
};
use crate::sift::engine::SiftEngine;
use crate::sift::errors::SiftError;
use crate::sift::types::{HeapOrder, Phase};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

const IDLE_PROMPT: &str = "Choose Max Heap (m) or Min Heap (n) to start sorting";

/// The main application state
pub struct App {
    /// The engine being driven
    pub engine: SiftEngine<i64>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Delay between two autoplay steps
    pub interval: Duration,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,

    /// Narrative shown before any run has started
    idle_narrative: Vec<String>,
}

impl App {
    /// Create a new app driving the given engine
    pub fn new(engine: SiftEngine<i64>, interval: Duration) -> Self {
        App {
            engine,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            interval,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
            idle_narrative: vec![IDLE_PROMPT.to_string()],
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= self.interval {
                if self.step_forward() {
                    self.status_message = "Playing...".to_string();
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: Array (top) | Tree (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(columns[0]);

        let history = self.engine.history();
        let view = match history.current() {
            Some(record) => StepView::from_record(record),
            None => StepView::idle(self.engine.values(), &self.idle_narrative),
        };

        render_array_pane(frame, left_rows[0], &view);
        render_tree_pane(frame, left_rows[1], &view);
        render_narrative_pane(
            frame,
            columns[1],
            &view,
            history.records(),
            history.cursor(),
        );

        render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            history.cursor(),
            history.len(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('m') | KeyCode::Char('M') => self.start(HeapOrder::Max),
            KeyCode::Char('n') | KeyCode::Char('N') => self.start(HeapOrder::Min),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.is_playing = false;
                self.engine.reset();
                self.status_message = "Reset".to_string();
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1);
                let mut stepped = 0;
                for _ in 0..n {
                    if self.step_forward() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.status_message = if self.engine.history_mut().previous().is_some() {
                    "Stepped backward".to_string()
                } else {
                    "Already at the first step".to_string()
                };
            }
            KeyCode::Right => {
                self.is_playing = false;
                if self.step_forward() {
                    self.status_message = "Stepped forward".to_string();
                }
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(self.interval)
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.engine.history_mut().jump_to_latest();
                self.status_message = "Jumped to latest step".to_string();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.engine.history_mut().rewind_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    /// Start a run; only allowed while the engine is idle
    fn start(&mut self, order: HeapOrder) {
        if self.engine.phase() != Phase::Idle {
            self.status_message = "Finish or reset the current run first".to_string();
            return;
        }
        self.is_playing = false;
        self.engine.start(order);
        self.status_message = format!("Sorting {} with a {}-heap", order.direction(), order);
    }

    /// Move one step forward.
    ///
    /// Replays the next recorded step if the cursor is behind, otherwise
    /// drives the engine. Returns false when there is nothing further.
    fn step_forward(&mut self) -> bool {
        if self.engine.history_mut().next().is_some() {
            return true;
        }

        match self.engine.step() {
            Ok(record) => {
                debug!(index = record.index, "driver advanced engine");
                true
            }
            Err(SiftError::NothingToDo) => {
                self.status_message = if self.engine.is_finished() {
                    "Array is fully sorted. Press r to reset".to_string()
                } else {
                    IDLE_PROMPT.to_string()
                };
                false
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sift::constants::DEFAULT_VALUES;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(
            SiftEngine::new(DEFAULT_VALUES.to_vec()),
            Duration::from_millis(100),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::from(code));
    }

    #[test]
    fn test_start_keys_only_work_while_idle() {
        let mut app = app();
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.engine.phase(), Phase::Building);
        assert_eq!(app.engine.order(), Some(HeapOrder::Max));

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.engine.order(), Some(HeapOrder::Max));
        assert_eq!(app.status_message, "Finish or reset the current run first");
    }

    #[test]
    fn test_right_before_start_prompts() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        assert!(app.engine.history().is_empty());
        assert_eq!(app.status_message, IDLE_PROMPT);
    }

    #[test]
    fn test_navigation_replays_before_driving_engine() {
        let mut app = app();
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.engine.history().len(), 4);

        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        let values_before = app.engine.values().to_vec();
        assert_eq!(app.engine.history().cursor(), 1);

        // Replaying recorded steps must not touch the engine
        press(&mut app, KeyCode::Right);
        assert_eq!(app.engine.history().cursor(), 2);
        assert_eq!(app.engine.history().len(), 4);
        assert_eq!(app.engine.values(), values_before.as_slice());

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.engine.history().len(), 5);
    }

    #[test]
    fn test_run_to_end_then_reset() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        for _ in 0..100 {
            press(&mut app, KeyCode::Char('9'));
        }
        assert!(app.engine.is_finished());
        assert_eq!(app.engine.values(), &[10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(app.status_message, "Stepped forward 0 step(s)");

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.engine.phase(), Phase::Idle);
        assert_eq!(app.engine.order(), None);
        assert_eq!(app.engine.values(), &DEFAULT_VALUES);
    }

    #[test]
    fn test_render_idle_and_running() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('5'));
        terminal.draw(|f| app.render(f)).unwrap();

        press(&mut app, KeyCode::Backspace);
        terminal.draw(|f| app.render(f)).unwrap();
        assert_eq!(app.engine.history().cursor(), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
