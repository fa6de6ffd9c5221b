use tracing_error::ErrorLayer;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Registry;

/// Sets up logging to stderr with [`tracing`]. The filter is read from
/// `LOG_<TAG>` and defaults to `info`. Span traces are captured for error
/// reports.
#[allow(clippy::needless_pass_by_value)]
pub fn setup(tag: impl ToString) {
    let env = format!("LOG_{}", tag.to_string().to_ascii_uppercase());
    let filter = EnvFilter::try_from_env(env).unwrap_or_else(|_| EnvFilter::new("info"));
    Registry::default()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(ErrorLayer::default())
        .init();
}
