use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::task::JoinHandle;

/// Poll interval when native filesystem notification is unavailable.
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Handle to a running stop watcher. Keeps the OS watcher alive (dropping it
/// ends the subscription). Its sole operation is [`join`](StopHandle::join).
pub struct StopHandle {
    _watcher: Option<RecommendedWatcher>,
    task: JoinHandle<()>,
}

impl StopHandle {
    /// Block until the watcher subscription ends. Under normal operation it
    /// never does — the expected outcomes are process exit via the sentinel
    /// or via a fatal error elsewhere.
    pub async fn join(self) {
        let _ = self.task.await;
    }
}

/// Subscribe to creation events in the stop file's parent directory and
/// return immediately.
///
/// Creation of exactly `stop_file` terminates the process with status 0 — no
/// cleanup, no callback into user code. Other files appearing in the same
/// directory are ignored. Detection is event-driven through the platform's
/// native notification primitive; when that cannot be established (missing
/// parent directory, exhausted inotify watches), the watcher degrades to
/// polling for the sentinel's existence at a short interval, preserving the
/// exact-path contract.
///
/// The sentinel is also checked once right after subscribing, so a stop file
/// created before the subscription was in place is still honored.
pub fn watch_for_stop(stop_file: impl Into<PathBuf>) -> StopHandle {
    let stop_file = absolutize(stop_file.into());

    match subscribe(&stop_file) {
        Ok((watcher, events)) => {
            tracing::info!(stop_file = %stop_file.display(), "stop file watcher started");
            let task = tokio::task::spawn_blocking(move || {
                if stop_file.exists() {
                    stop_now(&stop_file);
                }
                while let Ok(result) = events.recv() {
                    match result {
                        Ok(event) if creation_matches(&event, &stop_file) => {
                            stop_now(&stop_file);
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::debug!("stop watcher event error: {err}");
                        }
                    }
                }
            });
            StopHandle {
                _watcher: Some(watcher),
                task,
            }
        }
        Err(err) => {
            tracing::warn!(
                stop_file = %stop_file.display(),
                "native file notification unavailable ({err}); polling instead"
            );
            let task = tokio::task::spawn_blocking(move || {
                loop {
                    if stop_file.exists() {
                        stop_now(&stop_file);
                    }
                    std::thread::sleep(STOP_POLL_INTERVAL);
                }
            });
            StopHandle {
                _watcher: None,
                task,
            }
        }
    }
}

fn subscribe(
    stop_file: &Path,
) -> Result<(RecommendedWatcher, mpsc::Receiver<notify::Result<Event>>), notify::Error> {
    let parent = stop_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| notify::Error::generic("stop file has no parent directory"))?;

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |result| {
        let _ = tx.send(result);
    })?;
    watcher.watch(parent, RecursiveMode::NonRecursive)?;
    Ok((watcher, rx))
}

/// True when `event` is a creation whose path equals the sentinel exactly.
fn creation_matches(event: &Event, stop_file: &Path) -> bool {
    matches!(event.kind, EventKind::Create(_)) && event.paths.iter().any(|p| p == stop_file)
}

fn stop_now(stop_file: &Path) -> ! {
    tracing::info!(stop_file = %stop_file.display(), "stop file detected");
    std::process::exit(0);
}

/// Event paths arrive rooted at the registered watch directory; register and
/// compare against the same absolute form. The parent is canonicalized when
/// possible so a symlinked run directory does not defeat the exact-path match.
fn absolutize(path: PathBuf) -> PathBuf {
    if let (Some(parent), Some(name)) = (path.parent(), path.file_name())
        && !parent.as_os_str().is_empty()
        && let Ok(parent) = parent.canonicalize()
    {
        return parent.join(name);
    }
    std::path::absolute(&path).unwrap_or(path)
}
