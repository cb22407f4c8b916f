// ui/drawer.rs

//! Navigation drawer sliding over the left side of the chat view.

use chrono::{Local, NaiveDate};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::block::{Block, BorderType};
use ratatui::widgets::{Borders, HighlightSpacing, List, ListItem};

use super::style::{base_style, border_style, truncate_with_ellipsis};
use crate::app::drawer::{date_label, Drawer, DrawerItem};
use crate::theme::{Role, Theme};

pub const DRAWER_WIDTH: u16 = 36;
const DRAWER_TITLE: &str = "Message History";
// Borders and highlight symbol
const DRAWER_CHROME: usize = 4;

/// One list item per selectable row. History entries opening a new day
/// carry the day heading, and "New Chat" is set apart by a separator so
/// list indices still match [`Drawer::items`].
fn drawer_items<'a>(drawer: &Drawer, theme: &Theme, today: NaiveDate) -> Vec<ListItem<'a>> {
    let width = (DRAWER_WIDTH as usize).saturating_sub(DRAWER_CHROME);
    let heading_style = Style::default()
        .fg(theme.faded(Role::Text, 0.5))
        .add_modifier(Modifier::ITALIC);
    let entries = drawer.entries();
    let mut previous_date = None;

    drawer
        .items()
        .into_iter()
        .map(|item| match item {
            DrawerItem::History(index) => {
                let entry = &entries[index];
                let mut text = Text::default();
                if previous_date != Some(entry.date) {
                    if previous_date.is_some() {
                        text.lines.push(Line::default());
                    }
                    text.lines.push(Line::styled(date_label(entry.date, today), heading_style));
                    previous_date = Some(entry.date);
                }
                text.lines.push(Line::raw(truncate_with_ellipsis(&entry.title, width)));
                ListItem::new(text)
            }
            DrawerItem::NewChat => {
                let separator = Line::styled(
                    "─".repeat(width),
                    Style::default().fg(theme.faded(Role::Text, 0.3)),
                );
                ListItem::new(Text::from(vec![separator, Line::raw("+ New Chat")]))
            }
            DrawerItem::Settings => ListItem::new("⚙ Settings"),
        })
        .collect()
}

pub fn draw_drawer<'a>(drawer: &Drawer, theme: &Theme) -> List<'a> {
    let today = Local::now().date_naive();
    List::new(drawer_items(drawer, theme, today))
        .block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_type(BorderType::Plain)
                .border_style(border_style(theme, true))
                .title(DRAWER_TITLE),
        )
        .style(base_style(theme))
        .highlight_style(
            Style::default()
                .bg(theme.color(Role::Primary))
                .fg(theme.color(Role::BubbleText)),
        )
        .highlight_symbol("› ")
        .highlight_spacing(HighlightSpacing::Always)
}
