mod confirm;
mod form;
mod list;
mod nav;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::admin::Admin;
use crate::controller::Page;

pub fn render(frame: &mut Frame, admin: &Admin) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([
        Constraint::Length(3), // Nav bar
        Constraint::Fill(1),   // Page
        Constraint::Length(1), // Controls
    ])
    .split(area);

    nav::render(frame, chunks[0], admin.page());

    match admin.page() {
        Page::List => list::render(frame, chunks[1], admin),
        Page::Form => form::render(frame, chunks[1], admin),
    }

    render_controls(frame, chunks[2], admin);

    if let Some(item) = admin.confirming() {
        if let Some(question) = admin.app().question(item.id()) {
            confirm::render(frame, area, &question.prompt);
        }
    }
}

fn render_controls(frame: &mut Frame, area: Rect, admin: &Admin) {
    let hint = if admin.confirming().is_some() {
        "y delete  ·  n cancel"
    } else {
        match admin.page() {
            Page::List => {
                "j/k select  ·  1-4 / h/l correct answer  ·  d delete  ·  r reload  ·  n new  ·  q quit"
            }
            Page::Form => {
                "tab next field  ·  ←/→ correct answer  ·  enter add  ·  ctrl+r reset  ·  esc back"
            }
        }
    };

    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
