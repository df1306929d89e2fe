//! Result document saving for `--save`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::CheckerError;

/// Prefix of saved result files
pub const RESULT_FILE_PREFIX: &str = "mental-health-result-";

/// File name for a result saved at the given unix time in milliseconds
pub fn result_file_name(timestamp_millis: i64) -> String {
    format!("{}{}.txt", RESULT_FILE_PREFIX, timestamp_millis)
}

/// Write `contents` to a new result file in `dir`, returning its path.
///
/// The directory is created if missing.
pub fn save_result(dir: &Path, contents: &str) -> Result<PathBuf, CheckerError> {
    fs::create_dir_all(dir).map_err(|e| CheckerError::Io {
        context: dir.display().to_string(),
        message: e.to_string(),
    })?;

    let path = dir.join(result_file_name(Utc::now().timestamp_millis()));
    fs::write(&path, contents).map_err(|e| CheckerError::Io {
        context: path.display().to_string(),
        message: e.to_string(),
    })?;

    tracing::info!(path = %path.display(), "result saved");
    Ok(path)
}
