use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "sendlog=warn,sendlogapp=warn";
const VERBOSE_FILTER: &str = "sendlog=info,sendlogapp=debug";

/// Installs a global subscriber writing to stderr. `RUST_LOG` wins over `verbose`.
/// Later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };
    let env_filter = std::env::var("RUST_LOG")
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new(default));
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
