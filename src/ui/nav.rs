//! Top navigation bar.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::controller::Page;

pub fn render(frame: &mut Frame, area: Rect, current: Page) {
    let mut spans = vec![
        Span::styled(" Quiz Admin ", Style::default().fg(Color::Cyan).bold()),
        Span::raw("   "),
    ];

    for (key, page, icon) in [("F2", Page::Form, "+"), ("F1", Page::List, "≡")] {
        let style = if page == current {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} {} ", icon, page.title()), style));
        spans.push(Span::styled(
            format!("[{}]  ", key),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}
