use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::{
    favourites::Favourites,
    model::Recipe,
    ui::components::spinner::Spinner,
    util::colors,
};

pub const EXCERPT_LEN: usize = 120;

/// First [`EXCERPT_LEN`] characters of the instructions, with `...` when
/// anything was cut.
pub fn excerpt(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(EXCERPT_LEN).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

pub fn heart(is_favourite: bool) -> Span<'static> {
    if is_favourite {
        Span::styled("♥", Style::default().fg(colors::HEART))
    } else {
        Span::styled("♡", Style::default().fg(colors::NEUTRAL))
    }
}

pub fn meta_line(category: &str, area: &str) -> String {
    format!("{category} • {area}")
}

fn card(recipe: &Recipe, is_favourite: bool) -> ListItem<'static> {
    let summary = excerpt(&recipe.instructions)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let lines = vec![
        Line::from(vec![
            heart(is_favourite),
            Span::raw(" "),
            Span::styled(recipe.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::styled(
            format!("  {}", meta_line(&recipe.category, &recipe.area)),
            Style::default().fg(colors::NEUTRAL),
        ),
        Line::raw(format!("  {summary}")),
        Line::styled(
            format!("  {}", recipe.thumbnail),
            Style::default().fg(colors::MUTED),
        ),
        Line::raw(""),
    ];

    ListItem::new(Text::from(lines))
}

pub struct ResultsView<'a> {
    recipes: &'a [Recipe],
    favourites: &'a Favourites,
    selected: usize,
    busy: bool,
    accent: Color,
}

impl<'a> ResultsView<'a> {
    pub fn new(recipes: &'a [Recipe], favourites: &'a Favourites, accent: Color) -> Self {
        Self {
            recipes,
            favourites,
            selected: 0,
            busy: false,
            accent,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }
}

impl Widget for ResultsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title(format!(" Recipes ({}) ", self.recipes.len()))
            .title_bottom(Line::styled(
                " [Enter] view  [f] favourite ",
                Style::default().fg(colors::NEUTRAL),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.recipes.is_empty() {
            if self.busy {
                Spinner::default()
                    .with_style(Style::default().fg(self.accent))
                    .with_label("Searching...".to_string())
                    .render(inner, buf);
            } else {
                Paragraph::new(Line::styled("No results", Style::default().fg(colors::NEUTRAL)))
                    .render(inner, buf);
            }
            return;
        }

        let items: Vec<ListItem> = self
            .recipes
            .iter()
            .map(|recipe| card(recipe, self.favourites.is_favourite(&recipe.id)))
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().fg(self.accent).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, inner, buf, &mut state);
    }
}
