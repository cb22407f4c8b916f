// ui/context_menu.rs

//! Bottom sheet listing the actions available on a message.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::block::{Block, BorderType};
use ratatui::widgets::{Borders, HighlightSpacing, List, ListItem, Padding};

use crate::app::context_menu::ContextMenu;
use crate::theme::{Role, Theme};

/// Height of the sheet for `menu`, top border included.
pub fn context_menu_height(menu: &ContextMenu) -> u16 {
    menu.entries().len() as u16 + 1
}

pub fn draw_context_menu<'a>(menu: &ContextMenu, theme: &Theme) -> List<'a> {
    let items: Vec<ListItem> = menu
        .entries()
        .iter()
        .map(|entry| ListItem::new(entry.to_string()))
        .collect();
    List::new(items)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.color(Role::Primary)))
                .padding(Padding::horizontal(1))
                .title("Message"),
        )
        .style(
            Style::default()
                .fg(theme.color(Role::Text))
                .bg(theme.color(Role::Container)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
        .highlight_spacing(HighlightSpacing::Never)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::conversation::Sender;

    #[test]
    fn test_height_fits_entries() {
        assert_eq!(context_menu_height(&ContextMenu::new(0, Sender::User)), 4);
        assert_eq!(context_menu_height(&ContextMenu::new(1, Sender::Assistant)), 5);
    }
}
