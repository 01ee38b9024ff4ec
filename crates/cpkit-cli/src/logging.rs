use env_logger::{Builder, Env};

/// Installs the global logger.
///
/// Diagnostics are filtered by `RUST_LOG` and default to `warn`, so that only
/// ignored configuration values and similar notices show up unless asked for.
pub(crate) fn init() {
    let env = Env::default().default_filter_or("warn");
    if Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init()
        .is_ok()
    {
        log::debug!("logger initialized");
    }
}
