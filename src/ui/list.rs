//! Question list screen.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::admin::Admin;
use crate::controller::list::count_label;
use crate::controller::{ItemController, ListEntry, ListView};

const ANSWER_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, admin: &Admin) {
    let view = admin.list_view();

    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Fill(1)])
        .margin(1)
        .split(area);

    render_header(frame, chunks[0], &view);

    match &view {
        ListView::Loading => render_centered(
            frame,
            chunks[1],
            vec![Line::from(Span::styled(
                "Loading questions...",
                Style::default().fg(Color::Yellow),
            ))],
        ),
        ListView::Failed { message } => render_centered(
            frame,
            chunks[1],
            vec![
                Line::from(Span::styled(
                    "Unable to load questions",
                    Style::default().fg(Color::Red).bold(),
                )),
                Line::from(""),
                Line::from(Span::styled(*message, Style::default().fg(Color::Red))),
                Line::from(""),
                Line::from(Span::styled(
                    "[R] Try again",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
        ),
        ListView::Empty => render_centered(
            frame,
            chunks[1],
            vec![
                Line::from(Span::styled(
                    "No questions yet",
                    Style::default().fg(Color::White).bold(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Get started by creating your first quiz question!",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
        ),
        ListView::Populated(entries) => render_entries(frame, chunks[1], admin, entries),
    }
}

fn render_header(frame: &mut Frame, area: Rect, view: &ListView) {
    let mut title = vec![Span::styled(
        "Quiz Questions",
        Style::default().fg(Color::Cyan).bold(),
    )];
    let mut lines = Vec::with_capacity(2);

    if let ListView::Populated(entries) = view {
        title.push(Span::styled(
            format!("   {}", count_label(entries.len())),
            Style::default().fg(Color::Green),
        ));
        lines.push(Line::from(title));
        lines.push(Line::from(Span::styled(
            "Manage your quiz questions below. You can edit the correct answer or delete questions as needed.",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(title));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_centered(frame: &mut Frame, area: Rect, content: Vec<Line>) {
    let height = content.len() as u16;
    let chunks = Layout::vertical([
        Constraint::Percentage(35),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, chunks[1]);
}

fn render_entries(frame: &mut Frame, area: Rect, admin: &Admin, entries: &[ListEntry]) {
    let mut lines: Vec<Line> = Vec::new();
    let mut selected_start = 0;

    for (position, entry) in entries.iter().enumerate() {
        let is_selected = position == admin.selected();
        if is_selected {
            selected_start = lines.len();
        }
        let item = admin.item(&entry.question.id);
        lines.extend(entry_lines(entry, item, is_selected));
        lines.push(Line::from(""));
    }

    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = if lines.len() > inner_height {
        selected_start.saturating_sub(inner_height / 3)
    } else {
        0
    };

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        )
        .scroll((scroll as u16, 0));

    frame.render_widget(widget, area);
}

fn entry_lines<'a>(
    entry: &ListEntry<'a>,
    item: Option<&ItemController>,
    is_selected: bool,
) -> Vec<Line<'a>> {
    let question = entry.question;
    // the item's local choice wins over the stored value so edits show at once
    let correct = item
        .map(ItemController::local_correct_index)
        .unwrap_or(question.correct_index);
    let updating = item.is_some_and(ItemController::is_updating);

    let heading_style = if is_selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::White).bold()
    };
    let marker = if is_selected { ">" } else { " " };

    let mut heading = vec![
        Span::styled(format!("{} ", marker), heading_style),
        Span::styled(format!("Question {}", entry.number), heading_style),
    ];
    if updating {
        heading.push(Span::styled(
            "  Updating...",
            Style::default().fg(Color::Yellow),
        ));
    }

    let mut lines = vec![
        Line::from(heading),
        Line::from(vec![
            Span::styled("  Prompt: ", Style::default().fg(Color::DarkGray)),
            Span::styled(question.prompt.as_str(), Style::default().fg(Color::White)),
        ]),
    ];

    for (index, answer) in question.answers.iter().enumerate() {
        let is_correct = index == correct;
        let style = if is_correct {
            Style::default().fg(Color::Green).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let label = ANSWER_LABELS.get(index).copied().unwrap_or('?');

        let mut spans = vec![
            Span::styled(if is_correct { "    ✓ " } else { "    ○ " }, style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(answer.as_str(), style),
        ];
        if is_correct {
            spans.push(Span::styled(
                "  Correct",
                Style::default().fg(Color::Green),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines
}
