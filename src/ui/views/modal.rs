use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use reqwest::Url;

use crate::{
    model::Recipe,
    ui::{components::popup::centered_rect, views::results::heart},
    util::colors,
};

pub const MEAL_PAGE_BASE: &str = "https://www.themealdb.com/meal/";

/// The id always lands in a single path segment.
pub fn meal_page_url(id: &str) -> String {
    let Ok(mut url) = Url::parse(MEAL_PAGE_BASE) else {
        return MEAL_PAGE_BASE.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(id);
    }
    url.to_string()
}

pub fn links(recipe: &Recipe) -> Vec<(&'static str, String)> {
    let mut links = Vec::with_capacity(2);
    if recipe.has_video() {
        links.push(("YouTube", recipe.video.trim().to_string()));
    }
    links.push(("View on TheMealDB", meal_page_url(&recipe.id)));
    links
}

fn heading(text: &'static str, accent: Color) -> Line<'static> {
    Line::styled(text, Style::default().fg(accent).add_modifier(Modifier::BOLD))
}

pub fn modal_lines(recipe: &Recipe, accent: Color) -> Vec<Line<'static>> {
    let dim = Style::default().fg(colors::NEUTRAL);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Category: ", dim),
            Span::raw(recipe.category.clone()),
            Span::styled("   Area: ", dim),
            Span::raw(recipe.area.clone()),
        ]),
    ];
    if !recipe.thumbnail.trim().is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Image: ", dim),
            Span::raw(recipe.thumbnail.trim().to_string()),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(heading("Ingredients", accent));

    if recipe.ingredients.is_empty() {
        lines.push(Line::styled("No ingredient data", dim));
    } else {
        lines.extend(
            recipe
                .ingredients
                .iter()
                .map(|ingredient| Line::raw(format!("• {ingredient}"))),
        );
    }

    lines.push(Line::raw(""));
    lines.push(heading("Instructions", accent));
    lines.extend(
        recipe
            .instructions
            .lines()
            .map(|line| Line::raw(line.trim_end().to_string())),
    );

    lines.push(Line::raw(""));
    lines.push(heading("Links", accent));
    for (label, url) in links(recipe) {
        lines.push(Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(url, Style::default().fg(accent).add_modifier(Modifier::UNDERLINED)),
        ]));
    }

    lines
}

pub struct RecipeModal<'a> {
    recipe: &'a Recipe,
    is_favourite: bool,
    scroll: u16,
    accent: Color,
}

impl<'a> RecipeModal<'a> {
    pub fn new(recipe: &'a Recipe, is_favourite: bool, scroll: u16, accent: Color) -> Self {
        Self {
            recipe,
            is_favourite,
            scroll,
            accent,
        }
    }
}

impl Widget for RecipeModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered_rect(80, 85, area);
        Clear.render(area, buf);

        let title = Line::from(vec![
            Span::raw(" "),
            heart(self.is_favourite),
            Span::raw(" "),
            Span::styled(
                self.recipe.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ]);
        let toggle_hint = if self.is_favourite {
            " [f] remove from favourites  [j/k] scroll  [x] close "
        } else {
            " [f] save to favourites  [j/k] scroll  [x] close "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(self.accent))
            .title(title)
            .title_bottom(Line::styled(toggle_hint, Style::default().fg(colors::NEUTRAL)));

        Paragraph::new(modal_lines(self.recipe, self.accent))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
