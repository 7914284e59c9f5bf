use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use crate::error::AppError;

/// Sends log records to `path`, truncating any previous log.
///
/// The game owns the terminal while it runs, so records never go to
/// stdout or stderr. Without a path no logger is installed and the `log`
/// macros are no-ops.
pub fn init(path: Option<&Path>, level: LevelFilter) -> Result<(), AppError> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;
    WriteLogger::init(level, Config::default(), file)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use super::init;
    use crate::error::AppError;

    #[test]
    fn no_path_installs_nothing() {
        assert!(init(None, LevelFilter::Info).is_ok());
    }

    #[test]
    fn unwritable_path_is_reported() {
        let path = std::env::temp_dir()
            .join("canvas-snake-missing-dir")
            .join("nested")
            .join("game.log");

        let result = init(Some(&path), LevelFilter::Info);

        assert!(matches!(result, Err(AppError::LogFile { .. })));
    }
}
