//! Integration suite — drives the compiled `echo-plugin` binary as a real
//! subprocess, the way the host platform would, with every exchanged path
//! living in a temp directory. `CARGO_BIN_EXE_echo-plugin` is set by Cargo
//! during `cargo test` to point to the compiled binary.
//!
//! The process-exit contracts (stop sentinel → exit 0, starvation and bad
//! configuration → exit 1 + error record) can only be observed on a real
//! process; everything in-process is covered by the unit tests.

use std::path::{Path, PathBuf};
use std::process::{Child, Command};
use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_echo-plugin"))
}

/// Kills the child on drop so a failing assertion never leaks a subprocess.
struct ChildGuard(Child);

impl Drop for ChildGuard {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

/// The full set of host-supplied paths, rooted in one temp directory.
struct PluginDirs {
    _root: tempfile::TempDir,
    request_file: PathBuf,
    result_folder: PathBuf,
    result_file: PathBuf,
    stop_file: PathBuf,
    input_root: PathBuf,
    output_root: PathBuf,
    telemetry_root: PathBuf,
    input_channel: PathBuf,
    output_channel: PathBuf,
}

fn plugin_dirs() -> PluginDirs {
    let root = tempfile::tempdir().expect("failed to create temp root");
    let base = root.path().to_owned();

    let input_channel = base.join("in").join("0");
    let output_channel = base.join("out").join("0");
    std::fs::create_dir_all(&input_channel).unwrap();
    std::fs::create_dir_all(base.join("results")).unwrap();
    std::fs::create_dir_all(base.join("telemetry")).unwrap();

    let request_file = base.join("request.json");
    let request = serde_json::json!({
        "id": "it-job",
        "orgProfileFile": "",
        "jobParamFile": "",
        "userProfileFile": "",
        "telemetryFeeds": [],
        "inputChannels": [{"id": "0", "jsonFolder": input_channel.display().to_string()}],
        "outputChannels": [{"id": "0", "jsonFolder": output_channel.display().to_string()}]
    });
    std::fs::write(&request_file, request.to_string()).unwrap();

    PluginDirs {
        request_file,
        result_folder: base.join("results"),
        result_file: base.join("results").join("result.json"),
        stop_file: base.join("stop.json"),
        input_root: base.join("in"),
        output_root: base.join("out"),
        telemetry_root: base.join("telemetry"),
        input_channel,
        output_channel,
        _root: root,
    }
}

fn spawn_plugin(dirs: &PluginDirs, timeout_secs: u64) -> ChildGuard {
    let child = Command::new(binary())
        .arg("--request-file")
        .arg(&dirs.request_file)
        .arg("--result-folder")
        .arg(&dirs.result_folder)
        .arg("--result-file")
        .arg(&dirs.result_file)
        .arg("--stop-file")
        .arg(&dirs.stop_file)
        .arg("--input-channel-folder")
        .arg(&dirs.input_root)
        .arg("--output-channel-folder")
        .arg(&dirs.output_root)
        .arg("--telemetry-stream-folder")
        .arg(&dirs.telemetry_root)
        .arg("--watch-timeout-secs")
        .arg(timeout_secs.to_string())
        .spawn()
        .expect("failed to spawn echo-plugin");
    ChildGuard(child)
}

/// Wait for the child to exit, up to `deadline`. Returns its exit code.
fn wait_for_exit(child: &mut ChildGuard, deadline: Duration) -> i32 {
    let start = Instant::now();
    loop {
        if let Some(status) = child.0.try_wait().expect("try_wait failed") {
            return status.code().unwrap_or(-1);
        }
        assert!(
            start.elapsed() < deadline,
            "plugin did not exit within {deadline:?}"
        );
        std::thread::sleep(Duration::from_millis(50));
    }
}

/// Wait until `path` exists, up to `deadline`.
fn wait_for_file(path: &Path, deadline: Duration) {
    let start = Instant::now();
    while !path.exists() {
        assert!(
            start.elapsed() < deadline,
            "{} did not appear within {deadline:?}",
            path.display()
        );
        std::thread::sleep(Duration::from_millis(50));
    }
}

fn read_error_record(stop_file: &Path) -> String {
    let contents = std::fs::read_to_string(stop_file).expect("stop file should exist");
    let parsed: serde_json::Value =
        serde_json::from_str(&contents).expect("stop file should hold an error record");
    parsed["error"]
        .as_str()
        .expect("error record should have a string 'error' key")
        .to_owned()
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// A missing required path is reported through the stop sentinel, then the
/// process exits non-zero.
#[test]
fn missing_argument_reports_through_stop_file() {
    let dirs = plugin_dirs();
    let child = Command::new(binary())
        .arg("--stop-file")
        .arg(&dirs.stop_file)
        .spawn()
        .expect("failed to spawn echo-plugin");
    let mut child = ChildGuard(child);

    let code = wait_for_exit(&mut child, Duration::from_secs(10));
    assert_ne!(code, 0, "missing arguments must exit non-zero");

    let error = read_error_record(&dirs.stop_file);
    assert!(
        error.contains("--request-file"),
        "error should name the first missing flag, got: {error}"
    );
}

/// With no stop path at all there is no sentinel to write; the process still
/// exits non-zero.
#[test]
fn missing_stop_file_still_exits_nonzero() {
    let out = Command::new(binary())
        .output()
        .expect("failed to spawn echo-plugin");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("missing required argument"),
        "stderr should mention the missing argument, got: {stderr}"
    );
}

// ---------------------------------------------------------------------------
// Starvation
// ---------------------------------------------------------------------------

/// An input channel that stays empty past the timeout produces exactly one
/// error record naming the folder, and a non-zero exit.
#[test]
fn empty_input_channel_starves_and_reports() {
    let dirs = plugin_dirs();
    let mut child = spawn_plugin(&dirs, 1);

    let code = wait_for_exit(&mut child, Duration::from_secs(15));
    assert_eq!(code, 1, "starvation must exit with status 1");

    let error = read_error_record(&dirs.stop_file);
    assert!(
        error.contains(&dirs.input_channel.display().to_string()),
        "error should name the starved folder, got: {error}"
    );
    assert!(
        error.contains("1s"),
        "error should mention the timeout, got: {error}"
    );
}

// ---------------------------------------------------------------------------
// Stop sentinel
// ---------------------------------------------------------------------------

/// Creating the exact sentinel path stops the plugin with status 0; a sibling
/// file in the same directory does not.
#[test]
fn stop_file_creation_terminates_cleanly() {
    let dirs = plugin_dirs();
    // Keep the watcher fed so starvation never fires.
    std::fs::write(dirs.input_channel.join("seed.json"), "{}").unwrap();
    let mut child = spawn_plugin(&dirs, 120);

    // Give the subscription time to establish, then create a decoy next to
    // the sentinel.
    std::thread::sleep(Duration::from_millis(1000));
    std::fs::write(dirs.stop_file.with_file_name("decoy.json"), "{}").unwrap();
    std::thread::sleep(Duration::from_millis(1000));
    assert!(
        child.0.try_wait().unwrap().is_none(),
        "a sibling file must not stop the plugin"
    );

    std::fs::write(&dirs.stop_file, "").unwrap();
    let code = wait_for_exit(&mut child, Duration::from_secs(10));
    assert_eq!(code, 0, "host-initiated stop is a clean exit");
}

// ---------------------------------------------------------------------------
// Echo flow
// ---------------------------------------------------------------------------

/// Two records present before the first poll: only the newer one is echoed,
/// and the result file tracks the dispatch.
#[test]
fn echoes_newest_record_only() {
    let dirs = plugin_dirs();
    std::fs::write(dirs.input_channel.join("a.json"), r#"{"seq":"older"}"#).unwrap();
    std::thread::sleep(Duration::from_millis(400));
    std::fs::write(dirs.input_channel.join("b.json"), r#"{"seq":"newer"}"#).unwrap();

    let mut child = spawn_plugin(&dirs, 120);

    let first_echo = dirs.output_channel.join("echo-000001.json");
    wait_for_file(&first_echo, Duration::from_secs(10));
    assert_eq!(
        std::fs::read_to_string(&first_echo).unwrap(),
        r#"{"seq":"newer"}"#,
        "the older record must never be dispatched"
    );

    wait_for_file(&dirs.result_file, Duration::from_secs(5));
    let result: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&dirs.result_file).unwrap()).unwrap();
    assert_eq!(result["echoed"].as_u64(), Some(1));
    assert!(result["lastFile"].as_str().unwrap().ends_with("b.json"));

    // The unchanged record is debounced: no second echo shows up.
    std::thread::sleep(Duration::from_millis(800));
    assert!(!dirs.output_channel.join("echo-000002.json").exists());

    std::fs::write(&dirs.stop_file, "").unwrap();
    let code = wait_for_exit(&mut child, Duration::from_secs(10));
    assert_eq!(code, 0);
}

/// A record dropped after startup is picked up and echoed.
#[test]
fn echoes_record_dropped_after_startup() {
    let dirs = plugin_dirs();
    let mut child = spawn_plugin(&dirs, 120);

    std::thread::sleep(Duration::from_millis(500));
    std::fs::write(
        dirs.input_channel.join("late.json"),
        r#"{"iStreamType":"BATTERY","percent":51}"#,
    )
    .unwrap();

    let first_echo = dirs.output_channel.join("echo-000001.json");
    wait_for_file(&first_echo, Duration::from_secs(10));
    assert_eq!(
        std::fs::read_to_string(&first_echo).unwrap(),
        r#"{"iStreamType":"BATTERY","percent":51}"#
    );

    std::fs::write(&dirs.stop_file, "").unwrap();
    let code = wait_for_exit(&mut child, Duration::from_secs(10));
    assert_eq!(code, 0);
}
