// logger.rs

//! Log capture for the in-app log pane.

use color_eyre::eyre::{eyre, Result};
use log::LevelFilter;
use std::str::FromStr;
use tui_logger::{init_logger, set_default_level};

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Starts capturing every record; the pane shows `DEFAULT_LOG_LEVEL` and up
/// until [`set_level`] is called.
pub fn setup_logger() -> Result<()> {
    init_logger(LevelFilter::Trace)?;
    set_default_level(DEFAULT_LOG_LEVEL);
    for target in ["arboard", "mio"] {
        tui_logger::set_level_for_target(target, LevelFilter::Warn);
    }
    Ok(())
}

pub fn set_level(level: LevelFilter) {
    set_default_level(level);
}

/// Parses a level name such as `debug` or `WARN`.
pub fn parse_level(value: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(value.trim()).map_err(|_| {
        eyre!(
            "Log level must be one of off, error, warn, info, debug, trace. Your level: {}",
            value
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("debug", LevelFilter::Debug)]
    #[case("WARN", LevelFilter::Warn)]
    #[case(" trace ", LevelFilter::Trace)]
    #[case("off", LevelFilter::Off)]
    fn test_parse_level(#[case] value: &str, #[case] expected: LevelFilter) {
        assert_eq!(parse_level(value).unwrap(), expected);
    }

    #[test]
    fn test_parse_level_rejects_unknown() {
        let err = parse_level("loud").unwrap_err();
        assert!(err.to_string().contains("loud"));
    }
}
