/// Installs the global tracing subscriber.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Logs go to stderr so
/// controller output on stdout stays readable.
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
