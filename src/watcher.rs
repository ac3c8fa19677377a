use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

use tokio::task::JoinHandle;

use crate::report;

/// Default starvation timeout for the convenience watchers.
pub const DEFAULT_WATCH_TIMEOUT: Duration = Duration::from_secs(120);

/// Suffixes accepted by [`watch_images`].
pub const IMAGE_SUFFIXES: &[&str] = &[".jpeg", ".jpg"];

/// Suffixes accepted by [`watch_json`].
pub const JSON_SUFFIXES: &[&str] = &[".json"];

/// Pause before the next poll on iterations that dispatch nothing. A dispatch
/// is followed immediately by the next poll.
const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// One folder to watch: where, which file names qualify, and how long the
/// folder may stay empty before the plugin is considered starved.
///
/// Immutable once the watcher starts; one target drives exactly one
/// background watcher.
#[derive(Debug, Clone)]
pub struct WatchTarget {
    folder: PathBuf,
    /// Lowercased suffixes; matching is case-insensitive on the file name.
    suffixes: Vec<String>,
    timeout: Duration,
}

impl WatchTarget {
    pub fn new(folder: impl Into<PathBuf>, suffixes: &[&str], timeout: Duration) -> Self {
        Self {
            folder: folder.into(),
            suffixes: suffixes.iter().map(|s| s.to_ascii_lowercase()).collect(),
            timeout,
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }
}

/// Handle to a running folder watcher. Only keeps the background task alive;
/// the watcher has no graceful shutdown — it runs until the process exits.
pub struct WatcherHandle {
    _task: JoinHandle<()>,
}

/// Start a background watcher over `target` and return immediately.
///
/// Each poll lists the folder, filters to qualifying names, and dispatches the
/// newest entry to `on_file` — synchronously on the watcher's task, so a slow
/// callback stalls polling for this folder only. The same (path, mtime) state
/// is never dispatched twice in a row. If the folder stays empty longer than
/// the target's timeout, the error is written to `stop_file` and the process
/// exits non-zero; that is the watcher's only exit path.
///
/// A missing or unreadable folder is transient and retried forever. Panics in
/// `on_file` are not caught and kill the watcher task.
pub fn watch_folder<F>(
    target: WatchTarget,
    stop_file: impl Into<PathBuf>,
    on_file: F,
) -> WatcherHandle
where
    F: FnMut(&Path) + Send + 'static,
{
    let stop_file = stop_file.into();
    tracing::info!(folder = %target.folder.display(), "file watcher started");
    let task = tokio::task::spawn_blocking(move || {
        let starved = run_poll_loop(&target, on_file);
        report::fatal_exit(&starved.message(), &stop_file);
    });
    WatcherHandle { _task: task }
}

/// Watch a folder for image drops (`.jpeg`, `.jpg`).
pub fn watch_images<F>(
    folder: impl Into<PathBuf>,
    stop_file: impl Into<PathBuf>,
    timeout: Duration,
    on_file: F,
) -> WatcherHandle
where
    F: FnMut(&Path) + Send + 'static,
{
    watch_folder(
        WatchTarget::new(folder, IMAGE_SUFFIXES, timeout),
        stop_file,
        on_file,
    )
}

/// Watch a folder for JSON drops (`.json`).
pub fn watch_json<F>(
    folder: impl Into<PathBuf>,
    stop_file: impl Into<PathBuf>,
    timeout: Duration,
    on_file: F,
) -> WatcherHandle
where
    F: FnMut(&Path) + Send + 'static,
{
    watch_folder(
        WatchTarget::new(folder, JSON_SUFFIXES, timeout),
        stop_file,
        on_file,
    )
}

/// Terminal outcome of a poll loop: the folder stayed empty past the timeout.
/// Kept as a value (rather than exiting inside the loop) so the fatal path is
/// testable without killing the test process.
#[derive(Debug)]
struct Starvation {
    folder: PathBuf,
    timeout: Duration,
}

impl Starvation {
    fn message(&self) -> String {
        format!(
            "folder {} is empty and has not been populated for {:?}",
            self.folder.display(),
            self.timeout
        )
    }
}

/// The poll loop. Returns only on starvation; every other condition either
/// dispatches or retries.
///
/// The starvation timer measures time since the folder was last *observed
/// non-empty*, not since the last dispatch: a folder holding one unchanged
/// file is debounced forever without ever timing out.
fn run_poll_loop<F>(target: &WatchTarget, mut on_file: F) -> Starvation
where
    F: FnMut(&Path),
{
    let mut last_seen: Option<(PathBuf, SystemTime)> = None;
    let mut last_non_empty = Instant::now();

    loop {
        let candidate = match newest_qualifying(&target.folder, &target.suffixes) {
            Err(err) => {
                tracing::debug!(folder = %target.folder.display(), "poll skipped: {err}");
                std::thread::sleep(IDLE_POLL_INTERVAL);
                continue;
            }
            Ok(None) => {
                if last_non_empty.elapsed() > target.timeout {
                    return Starvation {
                        folder: target.folder.clone(),
                        timeout: target.timeout,
                    };
                }
                std::thread::sleep(IDLE_POLL_INTERVAL);
                continue;
            }
            Ok(Some(candidate)) => candidate,
        };

        last_non_empty = Instant::now();

        if last_seen.as_ref() == Some(&candidate) {
            std::thread::sleep(IDLE_POLL_INTERVAL);
            continue;
        }

        tracing::debug!(file = %candidate.0.display(), "dispatching newest file");
        last_seen = Some(candidate.clone());
        on_file(&candidate.0);
    }
}

/// Find the most recently modified file in `folder` whose lowercased name
/// ends with one of `suffixes`. Ties on modification time go to the entry
/// listed later. Unreadable entries are skipped; an unreadable folder is an
/// error (the caller treats it as transient).
fn newest_qualifying(
    folder: &Path,
    suffixes: &[String],
) -> std::io::Result<Option<(PathBuf, SystemTime)>> {
    let mut newest: Option<(PathBuf, SystemTime)> = None;

    for entry in std::fs::read_dir(folder)? {
        let Ok(entry) = entry else { continue };
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        let lower = name.to_ascii_lowercase();
        if !suffixes.iter().any(|s| lower.ends_with(s.as_str())) {
            continue;
        }
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        if !metadata.is_file() {
            continue;
        }
        let Ok(modified) = metadata.modified() else {
            continue;
        };
        let newer = match &newest {
            Some((_, best)) => modified >= *best,
            None => true,
        };
        if newer {
            newest = Some((entry.path(), modified));
        }
    }

    Ok(newest)
}
