// ui/message_editor.rs

//! Composer at the bottom of the chat view: a text editor and its button.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use ratatui::Frame;
use tui_textarea::TextArea;

use super::style::border_style;
use crate::app::message_editor::ComposerButton;
use crate::app::state::{AppState, Focus};
use crate::theme::Role;

pub const MSG_INPUT_BLOCK_HEIGHT: u16 = 5;
const BUTTON_WIDTH: u16 = 10;

/// Label shown on the composer button.
pub(crate) fn button_label(button: ComposerButton) -> &'static str {
    match button {
        ComposerButton::Mic => "🎤 Mic",
        ComposerButton::Send => "➤ Send",
        ComposerButton::Stop => "■ Stop",
    }
}

// Styles a copy of the editor for display.
fn draw_textarea<'a>(state: &AppState<'a>) -> TextArea<'a> {
    let theme = &state.theme;
    let focused = state.focus() == Focus::Compose;
    let field_style = Style::default()
        .fg(theme.color(Role::BubbleText))
        .bg(theme.color(Role::InputIcon));

    let mut textarea = state.message_editor.textarea().clone();
    textarea.set_style(field_style);
    textarea.set_placeholder_style(Style::default().fg(theme.faded(Role::BubbleText, 0.5)));
    textarea.set_cursor_line_style(Style::default());
    if !focused {
        textarea.set_cursor_style(field_style);
    }
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(theme, focused))
            .style(Style::default().bg(theme.color(Role::Background))),
    );
    textarea
}

fn draw_button<'a>(state: &AppState) -> Paragraph<'a> {
    let theme = &state.theme;
    let button = state.message_editor.button();
    let mut style = Style::default()
        .fg(theme.color(Role::BubbleText))
        .bg(theme.color(Role::InputIcon));
    if button != ComposerButton::Mic {
        style = style.add_modifier(Modifier::BOLD);
    }
    Paragraph::new(button_label(button))
        .centered()
        .style(style)
        .block(Block::default().padding(Padding::vertical(1)))
}

/// Draws the editor and its button side by side in `area`.
pub fn draw_message_editor(frame: &mut Frame, state: &AppState, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(BUTTON_WIDTH)])
        .split(area);
    let textarea = draw_textarea(state);
    frame.render_widget(&textarea, columns[0]);
    frame.render_widget(draw_button(state), columns[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_labels_are_distinct() {
        let labels = [
            button_label(ComposerButton::Mic),
            button_label(ComposerButton::Send),
            button_label(ComposerButton::Stop),
        ];
        assert!(labels.iter().all(|l| !l.is_empty()));
        assert_ne!(labels[0], labels[1]);
        assert_ne!(labels[1], labels[2]);
    }
}
