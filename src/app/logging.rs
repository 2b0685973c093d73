use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive, e.g. `msforge=debug`.
pub const LOG_ENV: &str = "MSFORGE_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the stderr subscriber. Stdout stays reserved for command output.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
