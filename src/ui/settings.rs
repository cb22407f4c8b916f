// ui/settings.rs

//! Settings view: model instruction, API access and voice.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::block::{Block, BorderType};
use ratatui::widgets::{Borders, Paragraph};
use ratatui::Frame;
use tui_textarea::TextArea;

use super::style::{base_style, border_style};
use crate::app::settings_form::SettingsField;
use crate::app::state::AppState;
use crate::theme::{Role, Theme};

const INSTRUCTION_HEIGHT: u16 = 6;
const FIELD_HEIGHT: u16 = 3;
const SWITCH_HEIGHT: u16 = 1;
const FOOTER_HEIGHT: u16 = 1;

fn container_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.color(Role::Text))
        .bg(theme.color(Role::Container))
}

// Styles a copy of a form field for display.
fn styled_field<'a>(
    textarea: &TextArea<'a>,
    title: &'a str,
    theme: &Theme,
    focused: bool,
    enabled: bool,
) -> TextArea<'a> {
    let mut textarea = textarea.clone();
    let mut style = container_style(theme);
    if !enabled {
        style = style.fg(theme.faded(Role::Text, 0.4));
    }
    textarea.set_style(style);
    textarea.set_placeholder_style(Style::default().fg(theme.faded(Role::Text, 0.5)));
    textarea.set_cursor_line_style(Style::default());
    if !focused {
        textarea.set_cursor_style(style);
    }
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style(theme, focused))
            .title(title),
    );
    textarea
}

/// Text of the api token switch.
pub(crate) fn switch_label(enabled: bool) -> &'static str {
    if enabled {
        "[■] Use API token"
    } else {
        "[ ] Use API token"
    }
}

fn focus_style(theme: &Theme, focused: bool) -> Style {
    let style = container_style(theme);
    if focused {
        style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        style
    }
}

pub fn draw_settings(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = &state.theme;
    let form = &state.settings_form;
    let focused = form.focused();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(INSTRUCTION_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(SWITCH_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(SWITCH_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    let instruction = styled_field(
        form.model_instruction(),
        "Model Instruction",
        theme,
        focused == SettingsField::ModelInstruction,
        true,
    );
    frame.render_widget(&instruction, rows[0]);

    let api_url = styled_field(
        form.api_url(),
        "API URL",
        theme,
        focused == SettingsField::ApiUrl,
        true,
    );
    frame.render_widget(&api_url, rows[1]);

    let switch = Paragraph::new(switch_label(form.api_token_enabled()))
        .style(focus_style(theme, focused == SettingsField::ApiTokenEnabled));
    frame.render_widget(switch, rows[2]);

    let api_token = styled_field(
        form.api_token(),
        "API Token",
        theme,
        focused == SettingsField::ApiToken,
        form.api_token_enabled(),
    );
    frame.render_widget(&api_token, rows[3]);

    let voice = Paragraph::new(Line::from(vec![
        Span::raw("Voice model  "),
        Span::styled(
            format!("‹ {} ›", form.voice_model()),
            focus_style(theme, focused == SettingsField::VoiceModel),
        ),
    ]))
    .style(container_style(theme));
    frame.render_widget(voice, rows[4]);

    let footer = Paragraph::new(format!(
        "Font: {}   Theme: {}",
        state.font_family,
        theme.mode()
    ))
    .style(base_style(theme).fg(theme.faded(Role::Text, 0.5)));
    frame.render_widget(footer, rows[6]);
}
