use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive: `RUST_LOG` wins, then the configured filter, with
/// `sudba=debug` appended in verbose mode.
pub fn filter_directive(env: Option<&str>, configured: &str, verbose: bool) -> String {
    if let Some(env) = env.map(str::trim).filter(|s| !s.is_empty()) {
        return env.to_string();
    }
    if verbose {
        format!("{configured},sudba=debug")
    } else {
        configured.to_string()
    }
}

/// Install the stderr logger. Stdout carries command output only.
pub fn init_cli_logger(configured: &str, verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(env.as_deref(), configured, verbose);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_config() {
        assert_eq!(filter_directive(Some("trace"), "info", true), "trace");
    }

    #[test]
    fn blank_env_ignored() {
        assert_eq!(filter_directive(Some("  "), "warn", false), "warn");
    }

    #[test]
    fn verbose_raises_own_crates() {
        assert_eq!(filter_directive(None, "info", true), "info,sudba=debug");
        assert_eq!(filter_directive(None, "info", false), "info");
    }
}
