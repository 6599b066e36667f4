use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::util::colors;

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Blocking message box sized to its text.
pub struct Popup<'a> {
    title: &'a str,
    message: &'a str,
    hint: &'a str,
    accent: Color,
}

impl<'a> Popup<'a> {
    pub fn new(title: &'a str, message: &'a str, hint: &'a str, accent: Color) -> Self {
        Self {
            title,
            message,
            hint,
            accent,
        }
    }
}

impl Widget for Popup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content_width = self.message.width().max(self.hint.width()) as u16 + 4;
        let width = content_width.min(area.width);
        let height = 5.min(area.height);
        let popup = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        };

        Clear.render(popup, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(self.accent))
            .title(format!(" {} ", self.title));

        Paragraph::new(vec![
            Line::raw(self.message),
            Line::raw(""),
            Line::styled(self.hint, Style::default().fg(colors::NEUTRAL)),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block)
        .render(popup, buf);
    }
}
