use tracing_subscriber::EnvFilter;

/// Initialize tracing and bridge `log` to `tracing`.
/// Calling this multiple times is safe (subsequent attempts are ignored where possible).
pub fn init_tracing(enable_debug: bool) {
    // Library code logs through the `log` facade
    let _ = tracing_log::LogTracer::init();

    let env_filter = if enable_debug {
        EnvFilter::new("slidekit=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_names(false)
        .try_init()
        .ok();
}
