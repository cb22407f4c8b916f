// ui/select_text.rs

//! Full-screen view of a message text, for selecting or copying it.

use ratatui::widgets::block::{Block, BorderType};
use ratatui::widgets::{Borders, Padding, Paragraph, Wrap};

use super::style::{base_style, border_style};
use crate::app::state::AppState;

pub fn draw_select_text<'a>(state: &AppState) -> Paragraph<'a> {
    let theme = &state.theme;
    Paragraph::new(state.selected_text.clone())
        .style(base_style(theme))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style(theme, true))
                .padding(Padding::uniform(1)),
        )
}
