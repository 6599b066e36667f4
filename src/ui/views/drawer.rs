use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span, Text},
    widgets::{
        Block, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap,
    },
};

use crate::{model::FavouriteEntry, ui::views::results::meta_line, util::colors};

pub const EMPTY_DRAWER: &str = "No favourites yet — press f on any recipe to save it here.";

/// Slide-in list of saved recipes.
pub struct FavouritesDrawer<'a> {
    entries: &'a [FavouriteEntry],
    selected: usize,
    accent: Color,
}

impl<'a> FavouritesDrawer<'a> {
    pub fn new(entries: &'a [FavouriteEntry], selected: usize, accent: Color) -> Self {
        Self {
            entries,
            selected,
            accent,
        }
    }
}

impl Widget for FavouritesDrawer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(self.accent))
            .title(format!(" Favourites ({}) ", self.entries.len()))
            .title_bottom(Line::styled(
                " [o] open [d] remove [C] clear [x] close ",
                Style::default().fg(colors::NEUTRAL),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.entries.is_empty() {
            Paragraph::new(Line::styled(EMPTY_DRAWER, Style::default().fg(colors::NEUTRAL)))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                ListItem::new(Text::from(vec![
                    Line::from(Span::styled(
                        entry.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::styled(
                        format!("  {}", meta_line(&entry.category, &entry.area)),
                        Style::default().fg(colors::NEUTRAL),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().fg(self.accent).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, inner, buf, &mut state);
    }
}
