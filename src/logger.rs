use std::io::Write;
use std::time::Instant;

use log::{Log, Metadata, Record};
use parking_lot::Mutex;

struct NupackLogger {
    file: Option<Mutex<std::fs::File>>,
    filter: log::LevelFilter,
    start: Instant,
}

impl NupackLogger {
    fn format(&self, record: &Record) -> String {
        let elapsed = self.start.elapsed().as_secs_f64();
        format!(
            "[{elapsed:.3}s] [{}] {} — {}",
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for NupackLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format(record);
        eprintln!("{line}");

        if let Some(ref file) = self.file {
            let _ = writeln!(file.lock(), "{line}");
        }
    }

    fn flush(&self) {
        if let Some(ref file) = self.file {
            let _ = file.lock().flush();
        }
    }
}

/// Level from `RUST_LOG`, else `debug` when verbose, else `warn`
#[must_use]
pub fn level_filter(verbose: bool) -> log::LevelFilter {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
}

/// Initialize the global logger. Must be called once before any logging.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init(filter: log::LevelFilter, log_file: Option<std::fs::File>) {
    let logger = NupackLogger {
        file: log_file.map(Mutex::new),
        filter,
        start: Instant::now(),
    };

    log::set_boxed_logger(Box::new(logger)).expect("logger already initialized");
    log::set_max_level(filter);
}
