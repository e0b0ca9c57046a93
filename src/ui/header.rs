use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    title: String,
    depth: usize,
    server: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: String, depth: usize, server: &'a str) -> Self {
        Self {
            title,
            depth,
            server,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(self.title.clone(), title_style),
        ];
        if self.depth > 1 {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("Esc: volver", text_style));
        }
        if !self.server.is_empty() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(self.server.to_string(), separator_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
