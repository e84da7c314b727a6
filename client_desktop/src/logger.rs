use anyhow::Context as _;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt::time, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// A non-empty `RUST_LOG` replaces the built-in directives entirely. Without it the
/// GPU and windowing crates are quietened and the workspace log level depends on the
/// build (debug builds are chattier).
pub fn init() -> anyhow::Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_timer(time::uptime()),
        )
        .with(filter(env.as_deref())?)
        .init();
    Ok(())
}

fn filter(env: Option<&str>) -> anyhow::Result<EnvFilter> {
    match env.map(str::trim).filter(|directives| !directives.is_empty()) {
        Some(directives) => EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .parse(directives)
            .with_context(|| format!("invalid {}: {directives}", EnvFilter::DEFAULT_ENV)),
        None => default_filter(),
    }
}

fn default_filter() -> anyhow::Result<EnvFilter> {
    let (ours, noisy) = if cfg!(debug_assertions) {
        ("debug", "warn")
    } else {
        ("info", "error")
    };

    Ok(EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse("")?
        .add_directive(format!("client_desktop={ours}").parse()?)
        .add_directive(format!("game_core={ours}").parse()?)
        .add_directive(format!("winit={noisy}").parse()?)
        .add_directive(format!("naga={noisy}").parse()?)
        .add_directive(format!("calloop={noisy}").parse()?)
        .add_directive(format!("sctk={noisy}").parse()?)
        .add_directive("wgpu_hal=error".parse()?)
        .add_directive("wgpu_core=error".parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_directives_win_over_defaults() {
        let filter = filter(Some("client_desktop=trace")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_defaults_without_env() {
        for env in [None, Some(""), Some("  ")] {
            let filter = filter(env).unwrap();
            let expected = if cfg!(debug_assertions) {
                LevelFilter::DEBUG
            } else {
                LevelFilter::INFO
            };
            assert_eq!(filter.max_level_hint(), Some(expected));
        }
    }

    #[test]
    fn test_invalid_env_is_an_error() {
        assert!(filter(Some("client_desktop=loud")).is_err());
    }
}
