pub mod notification_logger;

use log::LevelFilter;

/// Installs the process-wide logger. Call once, from `main`.
///
/// `info` by default, `debug` with `--verbose`; `RUST_LOG` wins over both.
pub fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .format_target(false)
        .parse_default_env()
        .try_init();
}
