use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,pressable_ui=debug,pressable_winit=debug,winit=info";

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Same as [`init`] but with an explicit fallback filter.
pub fn init_with_filter(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        tracing::trace!("global subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init();
        init_with_filter("trace");
    }
}
