// main.rs

//! Terminal client for a chat assistant.

use clap::{command, value_parser, Arg, ArgAction, ArgMatches, Command};
use color_eyre::eyre::{eyre, Result};
use log::*;
use std::path::PathBuf;

mod app;
mod config;
mod inputs;
mod logger;
mod platform;
mod theme;
mod tui;
mod ui;

use app::state::AppState;
use app::{App, AppReturn};
use config::Config;
use inputs::handler::Event;
use theme::Theme;
use tui::Tui;

fn cli() -> Command {
    command!()
        .arg(
            Arg::new("mode")
                .long("mode")
                .value_name("MODE")
                .help("Color mode, light or dark. Detected from the terminal if not set"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Path to the configuration file"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Default level shown in the log pane"),
        )
        .arg(
            Arg::new("no-sample")
                .long("no-sample")
                .action(ArgAction::SetTrue)
                .help("Start with an empty conversation"),
        )
}

/// Picks the brightness: command line first, then the config file, then
/// whatever `detect` reports for the terminal.
fn resolve_mode(
    cli: Option<&str>,
    config: Option<&str>,
    detect: impl FnOnce() -> String,
) -> String {
    cli.or(config)
        .map(str::to_string)
        .unwrap_or_else(detect)
}

fn build_state(matches: &ArgMatches) -> Result<AppState<'static>> {
    let mut config = Config::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    if matches.get_flag("no-sample") {
        config.sample_conversation = false;
    }

    let level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .or(config.log_level.as_deref());
    if let Some(level) = level {
        logger::set_level(logger::parse_level(level)?);
    }

    let mode = resolve_mode(
        matches.get_one::<String>("mode").map(String::as_str),
        config.color_mode.as_deref(),
        platform::brightness,
    );
    let mut theme = Theme::default();
    theme.set_mode(&mode)?;
    info!("Starting in {} mode", theme.mode());

    Ok(AppState::new(theme, &config))
}

/// Applies one event to the app. Running out of events means the terminal
/// reader stopped, and the app cannot be driven any more.
fn handle_event(app: &mut App, event: Option<Event>) -> Result<AppReturn> {
    match event {
        Some(Event::Input(key_event)) => Ok(app.process_key_event(key_event)),
        Some(Event::Tick) => Ok(app.update_on_tick()),
        None => Err(eyre!("Terminal input closed")),
    }
}

async fn run(tui: &mut Tui, app: &mut App<'_>) -> Result<()> {
    loop {
        tui.draw(app)?;
        let event = tui.events.next().await;
        if handle_event(app, event)? == AppReturn::Exit {
            return Ok(());
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let matches = cli().get_matches();
    logger::setup_logger()?;

    // Bad arguments or config abort before the terminal is touched.
    let state = build_state(&matches)?;
    let mut app = App::new(state);

    let mut tui = Tui::with_crossterm()?;
    tui.init()?;
    let result = run(&mut tui, &mut app).await;
    tui.exit()?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_cli_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn test_resolve_mode_precedence() {
        let detect = || "dark".to_string();
        assert_eq!(resolve_mode(Some("light"), Some("dark"), detect), "light");
        assert_eq!(resolve_mode(None, Some("light"), detect), "light");
        assert_eq!(resolve_mode(None, None, detect), "dark");
    }

    #[test]
    fn test_closed_input_stops_the_loop() {
        let mut app = App::new(AppState::new(Theme::default(), &Config::default()));
        assert_eq!(
            handle_event(&mut app, Some(Event::Tick)).unwrap(),
            AppReturn::Continue
        );
        let err = handle_event(&mut app, None).unwrap_err();
        assert!(err.to_string().contains("Terminal input closed"));
    }

    #[test]
    fn test_invalid_mode_aborts_startup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        let path = path.to_str().unwrap();
        let matches =
            cli().get_matches_from(["assistant-tui", "--config", path, "--mode", "blue"]);
        let err = build_state(&matches).err().unwrap();
        assert!(err
            .to_string()
            .contains("Mode must be 'light' or 'dark'. Your mode: blue"));
    }

    #[test]
    fn test_config_file_and_flags() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "color_mode: dark\nfont_family: Inter").unwrap();
        let path = file.path().to_str().unwrap();

        let matches = cli().get_matches_from(["assistant-tui", "--config", path, "--no-sample"]);
        let state = build_state(&matches).unwrap();
        assert_eq!(state.theme.mode(), theme::ColorMode::Dark);
        assert_eq!(state.font_family, "Inter");
        assert!(state.conversation.is_empty());

        let matches = cli().get_matches_from(["assistant-tui", "--config", path, "--mode", "light"]);
        let state = build_state(&matches).unwrap();
        assert_eq!(state.theme.mode(), theme::ColorMode::Light);
        assert_eq!(state.conversation.len(), 6);
    }
}
