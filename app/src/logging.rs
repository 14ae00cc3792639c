use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install the global subscriber.
///
/// Logs go to stderr so stdout carries only the report. The level defaults to
/// `warn` and can be raised with `RUST_LOG`.
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
