// ui/help.rs

//! Panel with contextual help

use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::block::{Block, BorderType};
use ratatui::widgets::{Borders, Cell, Row, Table};

use super::style::base_style;
use crate::app::actions::Actions;
use crate::theme::{Role, Theme};

const HELP_KEY_WIDTH: u16 = 10;
const HELP_ACTION_WIDTH: u16 = 20;
pub const HELP_WIDTH: u16 = HELP_KEY_WIDTH + HELP_ACTION_WIDTH + 3;

/// Draw the help panel as a `Table` containing available keys and
/// their associated `Action`
/// Argument `actions`: list of actions currently available
pub fn draw_help<'a>(actions: &Actions, theme: &Theme) -> Table<'a> {
    let key_style = Style::default()
        .fg(theme.color(Role::Text))
        .add_modifier(Modifier::BOLD);
    let help_style = Style::default().fg(theme.faded(Role::Text, 0.6));

    let mut rows = vec![];
    for action in actions.actions().iter() {
        let mut first = true;
        for key in action.keys() {
            let help = if first {
                first = false;
                action.to_string()
            } else {
                String::new()
            };
            let row = Row::new(vec![
                Cell::from(Span::styled(key.to_string(), key_style)),
                Cell::from(Span::styled(help, help_style)),
            ]);
            rows.push(row);
        }
    }

    Table::new(
        rows,
        [
            Constraint::Length(HELP_KEY_WIDTH),
            Constraint::Min(HELP_ACTION_WIDTH),
        ],
    )
    .block(
        Block::default()
            .borders(Borders::LEFT)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(theme.color(Role::Primary)))
            .title("Help"),
    )
    .style(base_style(theme))
    .column_spacing(1)
}
