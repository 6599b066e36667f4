use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::util::colors;

pub const SEARCHING_LABEL: &str = "Searching...";

/// Search box plus the favourites counter.
pub struct Header<'a> {
    input: &'a str,
    editing: bool,
    busy: bool,
    favourite_count: usize,
    accent: Color,
}

impl<'a> Header<'a> {
    pub fn new(input: &'a str, favourite_count: usize, accent: Color) -> Self {
        Self {
            input,
            editing: false,
            busy: false,
            favourite_count,
            accent,
        }
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(12)])
            .split(area);

        let border_style = if self.editing {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(colors::MUTED)
        };

        let search_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(border_style)
            .title(Span::styled(
                " recipe-finder ",
                Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::styled(
                if self.busy { "" } else { " [/] search " },
                Style::default().fg(colors::NEUTRAL),
            ));

        let content = if self.busy {
            Line::styled(SEARCHING_LABEL, Style::default().fg(colors::NEUTRAL))
        } else if self.editing {
            Line::from(vec![
                Span::raw(self.input.to_string()),
                Span::styled("▏", Style::default().fg(self.accent)),
            ])
        } else if self.input.is_empty() {
            Line::styled("Search recipes...", Style::default().fg(colors::MUTED))
        } else {
            Line::raw(self.input.to_string())
        };
        Paragraph::new(content).block(search_block).render(chunks[0], buf);

        let counter_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::MUTED));
        Paragraph::new(Line::from(vec![
            Span::styled("♥ ", Style::default().fg(colors::HEART)),
            Span::raw(self.favourite_count.to_string()),
        ]))
        .alignment(Alignment::Center)
        .block(counter_block)
        .render(chunks[1], buf);
    }
}
