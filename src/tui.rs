// tui.rs

use color_eyre::eyre::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::time::Duration;
use std::{io, panic};

use crate::app::App;
use crate::inputs::handler::EventHandler;
use crate::ui::render;

pub(crate) type CrosstermTerminal = Terminal<CrosstermBackend<io::Stderr>>;

const TICK_TIME_MS: u64 = 200;

/// Representation of a terminal user interface.
///
/// It is responsible for setting up the terminal,
/// initializing the interface and handling the draw events.
pub(crate) struct Tui {
    /// Interface to the Terminal.
    terminal: CrosstermTerminal,
    /// Terminal event handler.
    pub(crate) events: EventHandler,
}

impl Tui {
    /// Constructs a new instance of [`Tui`].
    pub(crate) fn new(terminal: CrosstermTerminal, events: EventHandler) -> Self {
        Self { terminal, events }
    }

    /// Constructs a [`Tui`] drawing to stderr, ticking every `TICK_TIME_MS`.
    pub(crate) fn with_crossterm() -> Result<Self> {
        let backend = CrosstermBackend::new(io::stderr());
        let terminal = Terminal::new(backend)?;
        let events = EventHandler::new(Duration::from_millis(TICK_TIME_MS));
        Ok(Tui::new(terminal, events))
    }

    /// Initializes the terminal interface.
    ///
    /// It enables the raw mode and sets terminal properties.
    pub(crate) fn init(&mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(io::stderr(), EnterAlternateScreen)?;

        // Restore the terminal before the panic report is printed.
        let panic_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic| {
            if let Err(err) = Self::reset() {
                eprintln!("Failed to reset the terminal: {err}");
            }
            panic_hook(panic);
        }));

        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        info!("Terminal ready");
        Ok(())
    }

    /// Draws the terminal interface by [`rendering`] the widgets.
    ///
    /// [`rendering`]: render
    pub(crate) fn draw(&mut self, app: &mut App) -> Result<()> {
        self.terminal.draw(|frame| render(frame, &mut app.state))?;
        Ok(())
    }

    /// Resets the terminal interface.
    ///
    /// This function is also used for the panic hook to revert
    /// the terminal properties if unexpected errors occur.
    fn reset() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stderr(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Exits the terminal interface.
    ///
    /// It disables the raw mode and reverts back the terminal properties.
    pub(crate) fn exit(&mut self) -> Result<()> {
        self.events.close();
        Self::reset()?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}
