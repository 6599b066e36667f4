use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    ui::{
        components::{header::Header, popup::Popup},
        state::{AppState, Focus},
        views::{FavouritesDrawer, RecipeModal, ResultsView},
    },
    util::colors,
};

const DRAWER_WIDTH: u16 = 42;
const KEY_HINTS: &str =
    "/ search  j/k move  Enter view  f favourite  F favourites  a accent  H home  q quit";

pub struct AppLayout<'a> {
    pub state: &'a AppState,
}

impl<'a> AppLayout<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let state = self.state;
        let accent = colors::accent(state.data.accent);
        f.buffer_mut().set_style(
            area,
            Style::new().bg(colors::BACKGROUND).fg(colors::FOREGROUND),
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        f.render_widget(
            Header::new(
                &state.ui.input,
                state.data.favourites.saved_count(),
                accent,
            )
            .editing(state.ui.focus == Focus::Search)
            .busy(state.ui.is_searching),
            chunks[0],
        );

        let body = chunks[1];
        let (results_area, drawer_area) = if state.ui.drawer_open {
            let split = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(1), Constraint::Length(DRAWER_WIDTH)])
                .split(body);
            (split[0], Some(split[1]))
        } else {
            (body, None)
        };

        f.render_widget(
            ResultsView::new(&state.data.recipes, &state.data.favourites, accent)
                .selected(state.ui.results_index)
                .busy(state.ui.is_searching),
            results_area,
        );

        if let Some(drawer_area) = drawer_area {
            f.render_widget(
                FavouritesDrawer::new(
                    state.data.favourites.entries(),
                    state.ui.drawer_index,
                    accent,
                ),
                drawer_area,
            );
        }

        let status = if state.ui.pending_open.is_some() {
            Line::from(Span::styled("Loading recipe...", Style::default().fg(accent)))
        } else {
            Line::styled(KEY_HINTS, Style::default().fg(colors::NEUTRAL))
        };
        f.render_widget(Paragraph::new(status), chunks[2]);

        if let Some(recipe) = &state.data.current {
            f.render_widget(
                RecipeModal::new(
                    recipe,
                    state.data.favourites.is_favourite(&recipe.id),
                    state.ui.modal_scroll,
                    accent,
                ),
                body,
            );
        }

        if let Some(confirm) = state.ui.confirm {
            f.render_widget(Popup::new("Confirm", confirm.prompt(), "[y] yes  [n] no", accent), area);
        } else if let Some(message) = &state.ui.notification {
            f.render_widget(Popup::new("Notice", message, "press any key", accent), area);
        }
    }
}
