//! Delete confirmation dialog.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

const DIALOG_WIDTH: u16 = 60;
const DIALOG_HEIGHT: u16 = 11;

pub fn render(frame: &mut Frame, area: Rect, prompt: &str) {
    let dialog = centered(area, DIALOG_WIDTH, DIALOG_HEIGHT);

    let content = vec![
        Line::from(Span::styled(
            "Are you sure you want to delete this question?",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("\"{}\"", prompt),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "This action cannot be undone.",
            Style::default().fg(Color::Red),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[N] Cancel  ·  [Y] Delete Question",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Confirm Delete ")
                .title_style(Style::default().fg(Color::Red).bold())
                .padding(Padding::uniform(1)),
        );

    frame.render_widget(Clear, dialog);
    frame.render_widget(widget, dialog);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
