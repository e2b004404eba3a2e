//! Logging setup.
//!
//! Log records go to stdout and, when the platform has a local data directory, to
//! `<data dir>/gamelogic/latest.log`, which is truncated on every start.

use std::path::PathBuf;

use log::LevelFilter;

fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("gamelogic").join("latest.log"))
}

/// Installs the global logger at `Info`. Must be called once, before anything logs.
///
/// The dispatch itself accepts every level; [`set_level`] narrows or widens what is emitted
/// once the configuration is known.
pub fn init() -> Result<(), String> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(LevelFilter::Trace)
        // window system chatter
        .level_for("sdl2", LevelFilter::Warn)
        .chain(std::io::stdout());

    let mut file_error = None;
    if let Some(path) = log_file_path() {
        let file = path
            .parent()
            .map_or(Ok(()), std::fs::create_dir_all)
            .and_then(|_| {
                std::fs::OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(&path)
            });
        match file {
            Ok(file) => dispatch = dispatch.chain(file),
            Err(e) => file_error = Some(format!("{}: {}", path.display(), e)),
        }
    }

    dispatch.apply().map_err(|e| e.to_string())?;
    set_level(LevelFilter::Info);

    if let Some(e) = file_error {
        log::warn!("Logging to stdout only, could not open log file {}", e);
    }
    Ok(())
}

/// Changes the most verbose level that is logged.
pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}
