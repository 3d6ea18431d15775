//! Structured logging.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` applies to this crate.
/// Panics if a global subscriber was already installed.
pub fn init_logging(default_level: &str) {
    tracing_subscriber::registry()
        .with(build_filter(default_level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Parse a bare level name (`trace` .. `error`, or `off`), in any case.
///
/// Config validation uses this too, so a level that validates is the level
/// that gets applied.
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    let level = level.trim();
    // LevelFilter parses "" as ERROR.
    if level.is_empty() {
        return None;
    }
    level.parse().ok()
}

fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = parse_level(default_level).unwrap_or(LevelFilter::INFO);
        EnvFilter::new(format!("shutdown_hooks={}", level))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(" debug "), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level("WARN"), Some(LevelFilter::WARN));
        assert_eq!(parse_level("off"), Some(LevelFilter::OFF));
        assert_eq!(parse_level("shutdown_hooks=debug"), None);
        assert_eq!(parse_level("verbose"), None);
        assert_eq!(parse_level(""), None);
    }

    #[test]
    fn test_filter_falls_back_to_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = build_filter(" debug ");
        assert!(filter.to_string().contains("shutdown_hooks=debug"));

        let filter = build_filter("not-a-level");
        assert!(filter.to_string().contains("shutdown_hooks=info"));
    }
}
