//! Tracing subscriber setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "skinscan=info";

/// Install the global subscriber.
///
/// `RUST_LOG` replaces the default filter when set; `LOG_FORMAT=json`
/// switches to JSON lines. Logs go to stderr so results on stdout stay clean.
pub fn init() -> anyhow::Result<()> {
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = env_filter(std::env::var("RUST_LOG").ok().as_deref())?;

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter)
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .try_init()?;
    }

    Ok(())
}

fn env_filter(rust_log: Option<&str>) -> anyhow::Result<EnvFilter> {
    let directives = match rust_log {
        Some(value) if !value.trim().is_empty() => value,
        _ => DEFAULT_FILTER,
    };
    Ok(EnvFilter::try_new(directives)?)
}
