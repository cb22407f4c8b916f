// ui/logs.rs

//! Panel showing log messages

use ratatui::style::{Color, Style};
use ratatui::widgets::BorderType;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerSmartWidget};

use crate::app::state::AppState;
use crate::theme::Role;

pub(crate) const LOG_BLOCK_HEIGHT: u16 = 12;

// Draw the logs panel
pub(crate) fn draw_logs<'a>(state: &'a AppState) -> TuiLoggerSmartWidget<'a> {
    let theme = &state.theme;
    TuiLoggerSmartWidget::default()
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(theme.color(Role::Text)))
        .style_debug(Style::default().fg(theme.faded(Role::Text, 0.7)))
        .style_trace(Style::default().fg(theme.faded(Role::Text, 0.5)))
        .output_separator(' ')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Long))
        .output_target(true)
        .output_file(false)
        .output_line(false)
        .state(&state.log_state)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.color(Role::Primary)))
}
