//! New question form screen.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::admin::Admin;
use crate::controller::FormController;
use crate::models::DraftField;
use crate::validation::{ANSWER_SLOTS, ErrorKey};

pub fn render(frame: &mut Frame, area: Rect, admin: &Admin) {
    let Some(form) = admin.form() else {
        return;
    };
    let disabled = form.is_disabled(admin.app().is_initial_load());

    let chunks = Layout::vertical([
        Constraint::Length(3), // Heading
        Constraint::Fill(1),   // Fields
        Constraint::Length(3), // Messages
    ])
    .margin(1)
    .split(area);

    render_heading(frame, chunks[0]);
    render_fields(frame, chunks[1], form, disabled);
    render_messages(frame, chunks[2], form, admin.app().error());
}

fn render_heading(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "Create New Question",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "Add a new quiz question with multiple choice answers",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

fn label(field: DraftField) -> &'static str {
    match field {
        DraftField::Prompt => "Question Prompt *",
        DraftField::Answer1 => "Answer 1 *",
        DraftField::Answer2 => "Answer 2 *",
        DraftField::Answer3 => "Answer 3 (optional)",
        DraftField::Answer4 => "Answer 4 (optional)",
        DraftField::CorrectIndex => "Correct Answer *",
    }
}

fn render_fields(frame: &mut Frame, area: Rect, form: &FormController, disabled: bool) {
    let mut lines: Vec<Line> = Vec::new();

    for field in DraftField::ALL {
        let focused = field == form.focus() && !disabled;
        let label_style = if focused {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let value_style = if disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let marker = if focused { ">" } else { " " };

        let value = match field {
            DraftField::CorrectIndex => correct_answer_choice(form.draft().correct_index),
            other => form.draft().text(other).unwrap_or_default().to_string(),
        };

        let mut spans = vec![
            Span::styled(format!("{} {:<22}", marker, label(field)), label_style),
            Span::styled(value, value_style),
        ];
        if focused && field != DraftField::CorrectIndex {
            spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
        }
        lines.push(Line::from(spans));

        match form.errors().field(field) {
            Some(message) => lines.push(Line::from(Span::styled(
                format!("  {:<22}{}", "", message),
                Style::default().fg(Color::Red),
            ))),
            None => lines.push(Line::from("")),
        }
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn correct_answer_choice(index: usize) -> String {
    (0..ANSWER_SLOTS)
        .map(|i| {
            if i == index {
                format!("[Answer {}]", i + 1)
            } else {
                format!(" Answer {} ", i + 1)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_messages(frame: &mut Frame, area: Rect, form: &FormController, error: Option<&str>) {
    let mut lines = Vec::with_capacity(3);

    if let Some(message) = form.errors().get(ErrorKey::Duplicate) {
        lines.push(Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red).bold(),
        )));
    }
    if let Some(message) = error {
        lines.push(Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red),
        )));
    }
    if form.is_submitting() {
        lines.push(Line::from(Span::styled(
            "Adding Question...",
            Style::default().fg(Color::Yellow),
        )));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
