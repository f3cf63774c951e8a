use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;

/// Installs a compact `tracing-subscriber` formatter as the global default.
///
/// `verbosity` 0 logs at `INFO`, 1 at `DEBUG`, 2 and above at `TRACE`.
pub fn init_logging(verbosity: u8) -> Result<(), SetGlobalDefaultError> {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}
