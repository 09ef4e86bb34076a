//! Rendering for the claim form and the prediction outcome.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::Outcome;
use crate::form::{ClaimForm, Field};

fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn selected_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn success_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

fn error_style() -> Style {
    Style::default().fg(Color::Red)
}

/// Render the whole screen: header, form fields, outcome, key help.
pub fn render(frame: &mut Frame, form: &ClaimForm, outcome: Option<&Outcome>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // header
            Constraint::Length(11), // form: 7 fields + borders
            Constraint::Min(4),     // outcome
            Constraint::Length(1),  // help
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_form(frame, chunks[1], form);
    render_outcome(frame, chunks[2], outcome);
    render_help(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled("Claimsight", title_style()),
        Span::raw(" — insurance claim amount prediction"),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn field_value(form: &ClaimForm, field: Field) -> String {
    match field {
        Field::Age => form.age.to_string(),
        Field::Sex => form.sex.label().to_string(),
        Field::Category => form.category.to_string(),
        Field::Preauth => form.preauth_input.clone(),
        Field::HospitalType => form.hospital_type.label().to_string(),
        Field::Mortality => form.mortality.label().to_string(),
        Field::DaysStayed => form.days_input.clone(),
    }
}

fn render_form(frame: &mut Frame, area: Rect, form: &ClaimForm) {
    let lines: Vec<Line> = Field::ALL
        .iter()
        .map(|&field| {
            let focused = form.selected_field() == field;
            let marker = if focused { "› " } else { "  " };
            let label_style = if focused {
                selected_style()
            } else {
                Style::default()
            };
            let cursor = if focused && field.is_text_input() {
                "_"
            } else {
                ""
            };
            Line::from(vec![
                Span::styled(format!("{marker}{:<26}", field.label()), label_style),
                Span::raw(format!("{}{cursor}", field_value(form, field))),
                Span::styled(format!("   {}", field.hint()), hint_style()),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Customer Details ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_outcome(frame: &mut Frame, area: Rect, outcome: Option<&Outcome>) {
    let lines: Vec<Line> = match outcome {
        None => vec![Line::from(Span::styled(
            "Press Enter to predict the claim amount.",
            hint_style(),
        ))],
        Some(Outcome::Predicted {
            input_row,
            formatted,
            audio_path,
        }) => {
            let mut lines = vec![
                Line::from(format!("Input row: {input_row:?}")),
                Line::from(Span::styled(
                    format!("Predicted claim amount: {formatted}"),
                    success_style(),
                )),
            ];
            if let Some(path) = audio_path {
                lines.push(Line::from(format!(
                    "Narration audio written to {} (play with your audio player)",
                    path.display()
                )));
            }
            lines
        }
        Some(Outcome::Failed { message }) => vec![Line::from(Span::styled(
            format!("Prediction error: {message}"),
            error_style(),
        ))],
    };

    let block = Block::default().borders(Borders::ALL).title(" Result ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(Span::styled(
        " Tab/↑↓ field · ←/→ adjust · type numbers · Enter predict · q quit",
        hint_style(),
    )));
    frame.render_widget(help, area);
}
