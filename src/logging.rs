// src/logging.rs
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Instant;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::config::consts::LOG_ENV;

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Install the global logger. Lines look like `[00:00:01.250][WARN] message`.
///
/// `level` is the default filter; `UT_DISCLOSURES_LOG` overrides it with the
/// usual env_logger syntax. With `file`, output is appended there instead of
/// stderr. Calling this twice is harmless: the second call is ignored.
pub fn init(level: LevelFilter, file: Option<&Path>) -> std::io::Result<()> {
    start();

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_env(Env::new().filter(LOG_ENV))
        .format(|buf, record| {
            let elapsed = fmt_elapsed(start().elapsed().as_millis());
            writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
        });

    if let Some(path) = file {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(Target::Pipe(Box::new(f)));
    }

    let _ = builder.try_init();
    Ok(())
}
