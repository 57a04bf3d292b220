// Log setup: verbosity count picks the default level, RUST_LOG overrides it
use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// 0 = info, 1 = debug, 2+ = trace
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the global logger. Calling it twice is harmless; the second call is ignored.
pub fn init(verbosity: u8) {
    let default_level = level_for_verbosity(verbosity).to_string().to_lowercase();
    let _ = Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
