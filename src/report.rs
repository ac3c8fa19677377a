use std::path::Path;
use std::process;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The structured failure payload written to the stop sentinel.
///
/// The host recognizes exactly one key, `error`. The file's appearance doubles
/// as a stop signal, so writing this record both reports the failure and tells
/// the host the plugin is done.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub error: String,
}

/// Write an [`ErrorRecord`] as the entire content of `stop_file`, creating or
/// truncating it.
pub fn write_error_record(message: &str, stop_file: &Path) -> Result<(), Error> {
    let record = ErrorRecord {
        error: message.to_owned(),
    };
    let payload = serde_json::to_string(&record)?;
    std::fs::write(stop_file, payload).map_err(|source| Error::WriteFailed {
        path: stop_file.to_owned(),
        source,
    })?;
    Ok(())
}

/// Report a fatal failure and terminate the process.
///
/// Logs the message, writes `{"error": message}` to the stop sentinel, and
/// exits with status 1. Every fatal condition in the crate funnels through
/// here so the host always observes failures as one well-known artifact.
/// If the sentinel itself cannot be written there is nothing left to report
/// to — the failure is logged and the exit status stands alone.
pub fn fatal_exit(message: &str, stop_file: &Path) -> ! {
    tracing::error!(stop_file = %stop_file.display(), "{message}");
    eprintln!("{message}");
    if let Err(err) = write_error_record(message, stop_file) {
        tracing::error!("failed to write error record: {err}");
    }
    process::exit(1);
}
