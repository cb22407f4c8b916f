// ui/title.rs

//! App bar showing the name of the current view.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::block::{Block, BorderType};
use ratatui::widgets::{Borders, Paragraph};

use super::style::base_style;
use crate::app::router::Route;
use crate::app::state::AppState;
use crate::theme::Role;

pub const TITLE_BLOCK_HEIGHT: u16 = 3;

/// Title shown in the app bar for a route.
pub(crate) fn title_for(route: Route) -> &'static str {
    match route {
        Route::Main => "Greetings New",
        Route::Settings => "Settings",
        Route::SelectText => "Select Text",
    }
}

pub fn draw_title<'a>(state: &AppState) -> Paragraph<'a> {
    let theme = &state.theme;
    let route = state.router.current();
    let mut spans = vec![];
    if !route.is_root() {
        spans.push(Span::styled("← ", Style::default().fg(theme.faded(Role::Text, 0.6))));
    }
    spans.push(Span::styled(
        title_for(route),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    Paragraph::new(Line::from(spans))
        .style(base_style(theme))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.color(Role::Primary)))
                .border_type(BorderType::Plain),
        )
}
