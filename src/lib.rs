//! Filesystem exchange toolkit for host-managed plugins.
//!
//! A plugin process talks to its host purely through the filesystem: the host
//! drops images and telemetry JSON into watched folders and creates a stop
//! sentinel file to signal shutdown; the plugin writes result files and
//! structured error reports back. This crate provides the machinery for that
//! exchange:
//!
//! - [`watcher`] — background polling of a drop folder, dispatching the newest
//!   qualifying file exactly once per distinct (path, mtime) state, with a
//!   starvation timeout that escalates to a fatal error.
//! - [`stop`] — event-driven detection of the stop sentinel; its creation
//!   terminates the process immediately.
//! - [`report`] — the single fatal-error primitive: write `{"error": ...}` to
//!   the stop sentinel and exit non-zero.
//! - [`json`] — compact serialization: every emitted object drops absent
//!   fields at every nesting depth.
//! - [`request`] / [`schema`] — the host's job description and the stream
//!   record catalog exchanged through the drop folders.

pub mod cli;
pub mod error;
pub mod fsutil;
pub mod json;
pub mod report;
pub mod request;
pub mod schema;
pub mod stop;
pub mod watcher;

pub use error::Error;
pub use json::to_compact_json;
pub use report::{ErrorRecord, fatal_exit};
pub use request::{Channel, PluginRequest, TelemetryFeeds};
pub use stop::{StopHandle, watch_for_stop};
pub use watcher::{
    DEFAULT_WATCH_TIMEOUT, WatchTarget, WatcherHandle, watch_folder, watch_images, watch_json,
};
