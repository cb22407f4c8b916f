// ui/mod.rs

//! ratatui user interface

use log::*;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Clear};
use ratatui::Frame;

mod context_menu;
mod drawer;
mod help;
mod logs;
mod message_editor;
mod messages;
mod select_text;
mod settings;
mod style;
mod title;

use crate::app::router::Route;
use crate::app::state::AppState;
use context_menu::{context_menu_height, draw_context_menu};
use drawer::{draw_drawer, DRAWER_WIDTH};
use help::{draw_help, HELP_WIDTH};
use logs::{draw_logs, LOG_BLOCK_HEIGHT};
use message_editor::{draw_message_editor, MSG_INPUT_BLOCK_HEIGHT};
use messages::{draw_messages, MESSAGES_MIN_HEIGHT};
use select_text::draw_select_text;
use settings::draw_settings;
use style::{base_style, bottom_sheet, left_panel};
use title::{draw_title, TITLE_BLOCK_HEIGHT};

const CONTENT_MIN_WIDTH: u16 = 40;

/// Render all blocks.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let size = frame.area();
    check_size(&size, state);

    frame.render_widget(Block::default().style(base_style(&state.theme)), size);

    let mut app_constraints = vec![
        Constraint::Length(TITLE_BLOCK_HEIGHT),
        Constraint::Min(MESSAGES_MIN_HEIGHT + MSG_INPUT_BLOCK_HEIGHT),
    ];
    if state.show_logs {
        app_constraints.push(Constraint::Length(LOG_BLOCK_HEIGHT));
    }

    // Vertical layout
    let app_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(app_constraints)
        .split(size);

    // Title
    frame.render_widget(draw_title(state), app_rows[0]);

    // Body: current view, help
    let mut body_constraints = vec![Constraint::Min(CONTENT_MIN_WIDTH)];
    if state.show_help {
        body_constraints.push(Constraint::Length(HELP_WIDTH));
    }
    let body_columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(body_constraints)
        .split(app_rows[1]);

    let content = body_columns[0];
    match state.router.current() {
        Route::Main => render_chat(frame, state, content),
        Route::Settings => draw_settings(frame, state, content),
        Route::SelectText => frame.render_widget(draw_select_text(state), content),
    }

    // Help
    if state.show_help {
        frame.render_widget(draw_help(&state.actions, &state.theme), body_columns[1]);
    }

    // Logs
    if state.show_logs {
        frame.render_widget(draw_logs(state), app_rows[2]);
    }
}

/// Chat view: messages and composer, with the drawer or the message menu
/// drawn over them when open.
fn render_chat(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(MESSAGES_MIN_HEIGHT),
            Constraint::Length(MSG_INPUT_BLOCK_HEIGHT),
        ])
        .split(area);

    let messages_area = rows[0];
    let messages = draw_messages(state, messages_area.width);
    frame.render_stateful_widget(
        messages,
        messages_area,
        state.messages_list.list_state_mut(),
    );

    draw_message_editor(frame, state, rows[1]);

    if state.drawer.is_open() {
        let drawer_area = left_panel(area, DRAWER_WIDTH);
        let drawer = draw_drawer(&state.drawer, &state.theme);
        frame.render_widget(Clear, drawer_area);
        frame.render_stateful_widget(drawer, drawer_area, state.drawer.list_state_mut());
    }

    if let Some(menu) = state.context_menu.as_mut() {
        let sheet_area = bottom_sheet(area, context_menu_height(menu));
        let sheet = draw_context_menu(menu, &state.theme);
        frame.render_widget(Clear, sheet_area);
        frame.render_stateful_widget(sheet, sheet_area, menu.list_state_mut());
    }
}

/// Logs warnings when terminal size constraints are not respected.
fn check_size(rect: &Rect, state: &AppState) {
    let mut min_width = CONTENT_MIN_WIDTH;
    if state.show_help {
        min_width += HELP_WIDTH
    };
    if rect.width < min_width {
        trace!("Require width >= {}, (got {})", min_width, rect.width);
    }

    let mut min_height = TITLE_BLOCK_HEIGHT + MESSAGES_MIN_HEIGHT + MSG_INPUT_BLOCK_HEIGHT;
    if state.show_logs {
        min_height += LOG_BLOCK_HEIGHT
    };
    if rect.height < min_height {
        trace!("Require height >= {}, (got {})", min_height, rect.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::app::events::AppEvent;
    use crate::config::Config;
    use crate::theme::Theme;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn app() -> App<'static> {
        App::new(AppState::new(Theme::default(), &Config::default()))
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, &mut app.state)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_each_route() {
        let mut app = app();
        assert!(draw(&mut app).contains("Greetings New"));
        app.dispatch(AppEvent::RouteChanged("/settings".to_string()));
        let screen = draw(&mut app);
        assert!(screen.contains("Model Instruction"));
        assert!(screen.contains("Alloy"));
        app.dispatch(AppEvent::RouteChanged("/select_text".to_string()));
        let screen = draw(&mut app);
        assert!(screen.contains("Select Text"));
        assert!(screen.contains("This is a sample text"));
    }

    #[test]
    fn test_renders_overlays() {
        let mut app = app();
        app.state.drawer.open();
        assert!(draw(&mut app).contains("Message History"));
        app.state.drawer.close();
        app.state.messages_list.select_next_message();
        app.state.context_menu = app
            .state
            .selected_message()
            .map(|(index, msg)| crate::app::context_menu::ContextMenu::new(index, msg.sender));
        assert!(draw(&mut app).contains("Copy"));
    }

    #[test]
    fn test_help_panel_can_be_hidden() {
        let mut app = app();
        assert!(draw(&mut app).contains("Help"));
        app.state.show_help = false;
        let screen = draw(&mut app);
        assert!(!screen.contains("Help"));
    }
}
