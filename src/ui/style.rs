//! Some helper functions to place and style items

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use textwrap::core::display_width;

use crate::theme::{Role, Theme};

/// Base style of a view: text over the background.
pub(crate) fn base_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.color(Role::Text))
        .bg(theme.color(Role::Background))
}

/// Border style, highlighted when the element has the focus.
pub(crate) fn border_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(theme.color(Role::Text))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.faded(Role::Text, 0.4))
    }
}

/// A panel anchored to the left edge of `area`.
pub(crate) fn left_panel(area: Rect, width: u16) -> Rect {
    Rect {
        width: width.min(area.width),
        ..area
    }
}

/// A sheet anchored to the bottom edge of `area`.
pub(crate) fn bottom_sheet(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        y: area.y + area.height - height,
        height,
        ..area
    }
}

/// Shortens `text` to `width` columns, ending with an ellipsis when cut.
pub(crate) fn truncate_with_ellipsis(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    for c in text.chars() {
        if display_width(&out) + display_width(c.encode_utf8(&mut [0; 4])) + 1 > width {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_panel() {
        let area = Rect::new(2, 3, 80, 20);
        assert_eq!(left_panel(area, 30), Rect::new(2, 3, 30, 20));
        assert_eq!(left_panel(area, 100), area);
    }

    #[test]
    fn test_bottom_sheet() {
        let area = Rect::new(0, 3, 80, 20);
        assert_eq!(bottom_sheet(area, 5), Rect::new(0, 18, 80, 5));
        assert_eq!(bottom_sheet(area, 50), area);
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("Hello", 10), "Hello");
        assert_eq!(truncate_with_ellipsis("Hello, World!", 6), "Hello…");
        assert_eq!(truncate_with_ellipsis("Hello", 0), "");
    }
}
