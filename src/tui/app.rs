//! Main TUI application state machine.
//!
//! Handles:
//! - Input event handling
//! - Routing edits through the calculator service
//! - Drawing the calculator screen

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::adapters::PublishedModel;
use crate::application::CalculatorService;
use crate::domain::{parse_incidence, Field, FieldUpdate, RiskFactor};

use super::ui::{
    calculator::{render_calculator, step_preset, CalculatorFormState},
    render_disclaimer,
};

type Calculator = CalculatorService<PublishedModel, PublishedModel>;

/// Main application state
pub struct App {
    /// Whether the app should quit
    should_quit: bool,

    /// Calculator service (owns the selections and the latest assessment)
    calculator: Calculator,

    /// Focus and text buffers
    form_view: CalculatorFormState,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application instance using the published model.
    #[must_use]
    pub fn new() -> Self {
        let model = Arc::new(PublishedModel::new());
        Self::with_calculator(CalculatorService::new(model.clone(), model))
    }

    /// Create application with an injected calculator service.
    #[must_use]
    pub fn with_calculator(calculator: Calculator) -> Self {
        Self {
            should_quit: false,
            calculator,
            form_view: CalculatorFormState::default(),
        }
    }

    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Main loop
        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Draw the whole screen into a frame.
    pub fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        render_calculator(
            f,
            chunks[0],
            &self.form_view,
            self.calculator.state(),
            self.calculator.assessment(),
        );
        render_disclaimer(f, chunks[1]);
    }

    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.form_view.move_focus(-1, self.calculator.state());
            }
            KeyCode::Down | KeyCode::Tab => {
                self.form_view.move_focus(1, self.calculator.state());
            }
            KeyCode::Left => self.cycle_selected(-1),
            KeyCode::Right | KeyCode::Enter => self.cycle_selected(1),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.calculator.reset();
                self.form_view = CalculatorFormState::default();
            }
            KeyCode::Char(c) if self.form_view.selected_field == Field::Incidence => {
                if self.form_view.input_char(c) {
                    self.sync_incidence();
                }
            }
            KeyCode::Backspace if self.form_view.selected_field == Field::Incidence => {
                self.form_view.delete_char();
                self.sync_incidence();
            }
            KeyCode::Delete if self.form_view.selected_field == Field::Incidence => {
                self.form_view.clear_incidence();
                self.sync_incidence();
            }
            _ => {}
        }
    }

    /// Step the focused field's value and recompute.
    fn cycle_selected(&mut self, delta: isize) {
        let state = *self.calculator.state();
        let update = match self.form_view.selected_field {
            Field::Incidence => {
                let next = step_preset(state.incidence, delta);
                self.form_view.incidence_text = next.to_string();
                FieldUpdate::Incidence(next)
            }
            Field::GestationalAge => FieldUpdate::GestationalAge(state.gestational_age.cycle(delta)),
            Field::HighestTemp => FieldUpdate::HighestTemp(state.highest_temp.cycle(delta)),
            Field::Rom => FieldUpdate::Rom(state.rom.cycle(delta)),
            Field::GbsStatus => FieldUpdate::GbsStatus(state.gbs_status.cycle(delta)),
            Field::Iap => FieldUpdate::Iap(state.iap.cycle(delta)),
        };
        self.calculator.apply(update);
    }

    fn sync_incidence(&mut self) {
        let incidence = parse_incidence(&self.form_view.incidence_text);
        self.calculator.apply(FieldUpdate::Incidence(incidence));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GbsStatus, Iap, Recommendation};
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, key: KeyCode) {
        app.handle_key(key, KeyModifiers::NONE);
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 32)).expect("test terminal");
        terminal.draw(|f| app.draw(f)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_shows_baseline() {
        let app = App::new();
        let text = screen_text(&app);
        assert!(text.contains("0.07"));
        assert!(text.contains("Routine Care"));
        assert!(text.contains("DISCLAIMER"));
    }

    #[test]
    fn test_typing_incidence_recomputes() {
        let mut app = App::new();
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.calculator().assessment().risk().to_string(), "0.00");

        for c in "0.3".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert!((app.calculator().state().incidence - 0.3).abs() < f64::EPSILON);
        assert_eq!(app.calculator().assessment().risk().to_string(), "0.04");
    }

    #[test]
    fn test_gbs_cycle_disables_iap() {
        let mut app = App::new();
        // Incidence -> GA -> Temp -> ROM -> GBS
        for _ in 0..4 {
            press(&mut app, KeyCode::Down);
        }
        // Negative -> Unknown -> Positive
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.calculator().state().gbs_status, GbsStatus::Positive);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.calculator().state().iap, Iap::AdequatePenAmp);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.calculator().state().gbs_status, GbsStatus::Negative);
        assert_eq!(app.calculator().state().iap, Iap::NoIapNeeded);
    }

    #[test]
    fn test_reset_and_quit() {
        let mut app = App::new();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Left);
        assert_eq!(
            app.calculator().assessment().recommendation,
            Recommendation::EmpiricAntibiotics
        );

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.calculator().assessment().risk().to_string(), "0.07");
        assert!(!app.should_quit());

        app.handle_key(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(app.should_quit());
    }
}
