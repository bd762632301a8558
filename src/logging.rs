//! Structured logging setup using the `tracing` ecosystem.
//!
//! For binaries embedding the filter pipeline. Configures a
//! `tracing-subscriber` with either JSON output (for production) or
//! pretty-printed output (for TTY / local dev). Format is auto-detected
//! from the terminal but can be forced by the caller.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[must_use]
pub fn resolve_format(pretty: bool, json: bool) -> LogFormat {
    if json {
        LogFormat::Json
    } else if pretty || std::io::IsTerminal::is_terminal(&std::io::stdout()) {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

pub fn init(level: tracing::Level, format: LogFormat) {
    let filter = tracing_subscriber::filter::Targets::new().with_default(level);

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_target(false))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flag_wins_over_pretty() {
        assert_eq!(resolve_format(true, true), LogFormat::Json);
    }

    #[test]
    fn explicit_pretty_is_respected() {
        assert_eq!(resolve_format(true, false), LogFormat::Pretty);
    }
}
