//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Pick the filter directive: `RUST_LOG`, then the configured filter, then `info`
pub fn filter_directive(env: Option<String>, configured: Option<&str>) -> String {
    env.filter(|v| !v.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install the global subscriber. Safe to call more than once; later calls
/// leave the first subscriber in place.
pub fn init(configured: Option<&str>) {
    let directive = filter_directive(std::env::var(EnvFilter::DEFAULT_ENV).ok(), configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|err| {
        eprintln!("invalid log filter {directive:?}: {err}, using {DEFAULT_FILTER:?}");
        EnvFilter::new(DEFAULT_FILTER)
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_precedence() {
        assert_eq!(filter_directive(Some("debug".into()), Some("warn")), "debug");
        assert_eq!(filter_directive(None, Some("warn")), "warn");
        assert_eq!(filter_directive(Some("  ".into()), None), "info");
        assert_eq!(filter_directive(None, None), "info");
    }
}
