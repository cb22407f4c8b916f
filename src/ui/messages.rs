// ui/messages.rs

//! The conversation: user messages as right-aligned bubbles, assistant
//! messages as plain text with fenced code blocks set apart.

pub const MESSAGES_MIN_HEIGHT: u16 = 8;
const USER_LEFT_MARGIN: usize = 8;
const USER_RIGHT_MARGIN: usize = 2;
const BUBBLE_PADDING: usize = 2;
const ASSISTANT_PADDING: usize = 2;
const HIGHLIGHT_SYMBOL: &str = "▎ ";
const NO_HIGHLIGHT_SYMBOL: &str = "  ";

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{HighlightSpacing, List, ListItem};
use textwrap::core::display_width;

use crate::app::conversation::{ChatMessage, Sender};
use crate::app::state::AppState;
use crate::theme::{Role, Theme};

/// Formats a user message as a bubble aligned to the right of `width`.
fn user_bubble<'a>(msg: &ChatMessage, width: usize, theme: &Theme) -> Text<'a> {
    let max_inner = width
        .saturating_sub(USER_LEFT_MARGIN + USER_RIGHT_MARGIN + 2 * BUBBLE_PADDING)
        .max(1);
    let lines: Vec<String> = textwrap::wrap(&msg.content, max_inner)
        .into_iter()
        .map(|line| line.into_owned())
        .collect();
    let inner = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
    let bubble_width = inner + 2 * BUBBLE_PADDING;
    let indent = " ".repeat(width.saturating_sub(USER_RIGHT_MARGIN + bubble_width));

    let bubble_style = Style::default()
        .fg(theme.color(Role::BubbleText))
        .bg(theme.color(Role::Primary));
    let padding = " ".repeat(BUBBLE_PADDING);
    let blank = " ".repeat(bubble_width);

    let mut text = Text::default();
    text.lines.push(Line::from(vec![
        Span::raw(indent.clone()),
        Span::styled(blank.clone(), bubble_style),
    ]));
    for line in lines {
        let fill = " ".repeat(inner - display_width(&line));
        text.lines.push(Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(format!("{padding}{fill}{line}{padding}"), bubble_style),
        ]));
    }
    text.lines.push(Line::from(vec![
        Span::raw(indent),
        Span::styled(blank, bubble_style),
    ]));
    text
}

/// Formats an assistant message, rendering fenced code blocks on the
/// container color with a header naming the language and code theme.
fn assistant_text<'a>(msg: &ChatMessage, width: usize, theme: &Theme) -> Text<'a> {
    let inner = width.saturating_sub(2 * ASSISTANT_PADDING).max(1);
    let padding = " ".repeat(ASSISTANT_PADDING);
    let text_style = Style::default().fg(theme.color(Role::Text));
    let code_style = Style::default()
        .fg(theme.color(Role::Text))
        .bg(theme.color(Role::Container));
    let header_style = Style::default()
        .fg(theme.faded(Role::Text, 0.6))
        .bg(theme.color(Role::Container))
        .add_modifier(Modifier::ITALIC);

    let mut text = Text::default();
    let mut in_code = false;
    for raw_line in msg.content.lines() {
        if let Some(lang) = raw_line.trim_start().strip_prefix("```") {
            if !in_code {
                let lang = if lang.trim().is_empty() { "code" } else { lang.trim() };
                let header = format!(" {} · {}", lang, theme.get(Role::CodeTheme));
                text.lines.push(code_line(&padding, &header, inner, header_style));
            }
            in_code = !in_code;
            continue;
        }
        if in_code {
            let code = raw_line.replace('\t', "    ");
            for chunk in textwrap::wrap(&format!(" {code}"), inner) {
                text.lines.push(code_line(&padding, &chunk, inner, code_style));
            }
        } else if raw_line.is_empty() {
            text.lines.push(Line::default());
        } else {
            for chunk in textwrap::wrap(raw_line, inner) {
                text.lines.push(Line::from(vec![
                    Span::raw(padding.clone()),
                    Span::styled(chunk.into_owned(), text_style),
                ]));
            }
        }
    }
    text
}

/// A line filled with `style` across the full inner width.
fn code_line<'a>(padding: &str, content: &str, inner: usize, style: Style) -> Line<'a> {
    let fill = " ".repeat(inner.saturating_sub(display_width(content)));
    Line::from(vec![
        Span::raw(padding.to_string()),
        Span::styled(format!("{content}{fill}"), style),
    ])
}

/// Builds the list item for one message, followed by a spacing line.
fn item_for_message<'a>(msg: &ChatMessage, width: usize, theme: &Theme) -> ListItem<'a> {
    let mut text = match msg.sender {
        Sender::User => user_bubble(msg, width, theme),
        Sender::Assistant => assistant_text(msg, width, theme),
    };
    let stamp = msg.created.format("%H:%M").to_string();
    let stamp_style = Style::default().fg(theme.faded(Role::Text, 0.4));
    let indent = match msg.sender {
        Sender::User => width.saturating_sub(USER_RIGHT_MARGIN + display_width(&stamp)),
        Sender::Assistant => ASSISTANT_PADDING,
    };
    let stamp_line = Line::styled(format!("{}{stamp}", " ".repeat(indent)), stamp_style);
    text.lines.push(stamp_line);
    text.lines.push(Line::default());
    ListItem::new(text)
}

/// Draws the list of messages in the conversation.
///
/// `width` is the width of the area the list is rendered into.
pub fn draw_messages<'a>(state: &AppState, width: u16) -> List<'a> {
    let theme = &state.theme;
    let width = (width as usize).saturating_sub(display_width(HIGHLIGHT_SYMBOL));
    let items: Vec<ListItem> = state
        .conversation
        .messages()
        .iter()
        .map(|msg| item_for_message(msg, width, theme))
        .collect();

    let list = List::new(items)
        .style(Style::default().bg(theme.color(Role::Background)))
        .highlight_spacing(HighlightSpacing::Always);
    if state.messages_list.has_selection() {
        list.highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
    } else {
        list.highlight_symbol(NO_HIGHLIGHT_SYMBOL)
    }
}
