//! UI module: View components for the TUI.

pub mod calculator;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::styles::MedicalTheme;

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(vec![Span::styled(
            "DISCLAIMER: Decision support only. Estimates reproduce the published model's arithmetic and do not replace clinical judgement.",
            MedicalTheme::text_muted(),
        )]),
        Line::from(vec![Span::styled(
            "Not validated for infants < 34 weeks or for use after delivery-room resuscitation.",
            MedicalTheme::text_muted(),
        )]),
    ];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(MedicalTheme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}
