use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr so stdout stays a clean table.
///
/// Filter comes from `RUST_LOG`, defaulting to `warn`. Calling this twice is a no-op.
pub(crate) fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(e) = installed {
        tracing::debug!(error = %e, "tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init();
        init();
        tracing::warn!("logging initialised");
    }
}
