//! Risk calculator form and result panel.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::application::Assessment;
use crate::domain::{Field, FormState, RiskFactor, DEFAULT_INCIDENCE, INCIDENCE_PRESETS};
use crate::tui::styles::MedicalTheme;

/// View-only state of the form (focus and the incidence text buffer).
///
/// The selections themselves live in the calculator service.
pub struct CalculatorFormState {
    pub selected_field: Field,
    pub incidence_text: String,
}

impl Default for CalculatorFormState {
    fn default() -> Self {
        Self {
            selected_field: Field::Incidence,
            incidence_text: DEFAULT_INCIDENCE.to_string(),
        }
    }
}

impl CalculatorFormState {
    /// Move focus by `delta` fields, skipping fields the form has disabled.
    pub fn move_focus(&mut self, delta: isize, state: &FormState) {
        let len = Field::ALL.len() as isize;
        let mut idx = Field::ALL
            .iter()
            .position(|f| *f == self.selected_field)
            .unwrap_or(0) as isize;
        for _ in 0..len {
            idx = (idx + delta).rem_euclid(len);
            let field = Field::ALL[idx as usize];
            if state.is_enabled(field) {
                self.selected_field = field;
                return;
            }
        }
    }

    /// Add a character to the incidence buffer
    pub fn input_char(&mut self, c: char) -> bool {
        if c.is_ascii_digit() || c == '.' || c == '-' {
            self.incidence_text.push(c);
            true
        } else {
            false
        }
    }

    /// Delete the last character of the incidence buffer
    pub fn delete_char(&mut self) {
        self.incidence_text.pop();
    }

    /// Clear the incidence buffer
    pub fn clear_incidence(&mut self) {
        self.incidence_text.clear();
    }
}

/// Next incidence preset from `current`, wrapping around the list.
///
/// A custom (non-preset) value steps to the nearest preset in that direction.
#[must_use]
pub fn step_preset(current: f64, delta: isize) -> f64 {
    let len = INCIDENCE_PRESETS.len() as isize;
    match INCIDENCE_PRESETS
        .iter()
        .position(|p| (p - current).abs() < 1e-9)
    {
        Some(i) => INCIDENCE_PRESETS[(i as isize + delta).rem_euclid(len) as usize],
        None if delta >= 0 => INCIDENCE_PRESETS
            .iter()
            .copied()
            .find(|p| *p > current)
            .unwrap_or(INCIDENCE_PRESETS[0]),
        None => INCIDENCE_PRESETS
            .iter()
            .rev()
            .copied()
            .find(|p| *p < current)
            .unwrap_or(INCIDENCE_PRESETS[INCIDENCE_PRESETS.len() - 1]),
    }
}

/// Render the calculator screen
pub fn render_calculator(
    f: &mut Frame,
    area: Rect,
    view: &CalculatorFormState,
    state: &FormState,
    assessment: &Assessment,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form + result
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(f, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .margin(1)
        .split(chunks[1]);

    render_fields(f, columns[0], view, state);
    render_result(f, columns[1], assessment);
    render_footer(f, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", MedicalTheme::text()),
        Span::styled("Neonatal EOS Risk", MedicalTheme::title()),
        Span::styled(
            " │ Likelihood-ratio model per 1000 live births",
            MedicalTheme::text_secondary(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(header, area);
}

fn field_value(field: Field, view: &CalculatorFormState, state: &FormState) -> String {
    match field {
        Field::Incidence => view.incidence_text.clone(),
        Field::GestationalAge => state.gestational_age.label().to_string(),
        Field::HighestTemp => state.highest_temp.label().to_string(),
        Field::Rom => state.rom.label().to_string(),
        Field::GbsStatus => state.gbs_status.label().to_string(),
        Field::Iap if !state.is_enabled(Field::Iap) => {
            format!("{} (GBS not positive)", state.iap.label())
        }
        Field::Iap => state.iap.label().to_string(),
    }
}

fn render_fields(f: &mut Frame, area: Rect, view: &CalculatorFormState, state: &FormState) {
    let constraints: Vec<Constraint> = Field::ALL
        .iter()
        .map(|_| Constraint::Length(3))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in Field::ALL.iter().enumerate() {
        let enabled = state.is_enabled(*field);
        let is_selected = *field == view.selected_field;

        let (border_style, title_style) = if !enabled {
            (MedicalTheme::border(), MedicalTheme::disabled())
        } else if is_selected {
            (MedicalTheme::border_focused(), MedicalTheme::focused())
        } else {
            (MedicalTheme::border(), MedicalTheme::text_secondary())
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", field.label()), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        let value = field_value(*field, view, state);
        let value_span = if !enabled {
            Span::styled(value, MedicalTheme::disabled())
        } else if value.is_empty() {
            Span::styled("enter a rate, e.g. 0.5", MedicalTheme::text_muted())
        } else {
            Span::styled(value, MedicalTheme::text())
        };

        let mut spans = vec![Span::raw(" ")];
        if is_selected && enabled {
            spans.push(Span::styled("◀ ", MedicalTheme::key_hint()));
            spans.push(value_span);
            spans.push(Span::styled(" ▶", MedicalTheme::key_hint()));
        } else {
            spans.push(value_span);
        }

        f.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[i]);
    }
}

fn render_result(f: &mut Frame, area: Rect, assessment: &Assessment) {
    let tier = assessment.recommendation;
    let tier_style = MedicalTheme::recommendation(tier);

    let block = Block::default()
        .title(Span::styled(" EOS Risk ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(tier_style);

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Risk
            Constraint::Length(4), // Recommendation
            Constraint::Length(3), // Breakdown
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    let risk = Paragraph::new(vec![
        Line::from(Span::styled(
            assessment.risk().to_string(),
            tier_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "per 1000 live births",
            MedicalTheme::text_secondary(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(risk, chunks[0]);

    let recommendation = Paragraph::new(vec![
        Line::from(Span::styled(
            tier.label(),
            tier_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            tier.description(),
            MedicalTheme::text_secondary(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(recommendation, chunks[1]);

    let b = &assessment.breakdown;
    let breakdown = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Combined LR: ", MedicalTheme::text_secondary()),
            Span::styled(format!("{:.3}", b.combined_lr), MedicalTheme::text()),
        ]),
        Line::from(vec![
            Span::styled("Prior odds: ", MedicalTheme::text_secondary()),
            Span::styled(format!("{:.6}", b.prior_odds), MedicalTheme::text()),
        ]),
    ])
    .alignment(Alignment::Center);
    f.render_widget(breakdown, chunks[2]);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let content = Line::from(vec![
        Span::styled("[↑↓] ", MedicalTheme::key_hint()),
        Span::styled("Field ", MedicalTheme::key_desc()),
        Span::styled("[←→] ", MedicalTheme::key_hint()),
        Span::styled("Change ", MedicalTheme::key_desc()),
        Span::styled("[0-9.] ", MedicalTheme::key_hint()),
        Span::styled("Incidence ", MedicalTheme::key_desc()),
        Span::styled("[R] ", MedicalTheme::key_hint()),
        Span::styled("Reset ", MedicalTheme::key_desc()),
        Span::styled("[Q] ", MedicalTheme::key_hint()),
        Span::styled("Quit", MedicalTheme::key_desc()),
    ]);

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(footer, area);
}
