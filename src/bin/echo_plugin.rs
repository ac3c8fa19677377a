//! Reference plugin: copies the newest record from input channel 0 into
//! output channel 0 and keeps a running result file. Doubles as the
//! subprocess fixture for the integration suite — it exercises the full
//! lifecycle: argument validation, request parsing, folder bootstrap, stop
//! watcher, and a JSON drop watcher.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use dropchannel::cli::PluginArgs;
use dropchannel::{PluginRequest, fatal_exit, fsutil, json, stop, watcher};

#[derive(Parser, Debug)]
#[command(name = "echo-plugin", version, about)]
struct Cli {
    #[command(flatten)]
    plugin: PluginArgs,

    /// Seconds the input channel may stay empty before the plugin reports
    /// starvation and exits.
    #[arg(long, default_value_t = dropchannel::DEFAULT_WATCH_TIMEOUT.as_secs())]
    watch_timeout_secs: u64,
}

/// Running summary written to the result file after every echoed record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EchoResult {
    echoed: u64,
    last_file: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let stop_hint = cli.plugin.stop_file.clone();

    let paths = match cli.plugin.validate() {
        Ok(paths) => paths,
        Err(err) => match stop_hint {
            Some(stop_file) => fatal_exit(&err.to_string(), &stop_file),
            None => {
                // Without a stop path there is no sentinel to report through.
                eprintln!("{err}");
                std::process::exit(1);
            }
        },
    };

    let request = PluginRequest::load(&paths.request_file)
        .unwrap_or_else(|err| fatal_exit(&err.to_string(), &paths.stop_file));
    let input_folder = request
        .input_channel_folder(0)
        .unwrap_or_else(|err| fatal_exit(&err.to_string(), &paths.stop_file))
        .to_owned();
    let output_folder = request
        .output_channel_folder(0)
        .unwrap_or_else(|err| fatal_exit(&err.to_string(), &paths.stop_file))
        .to_owned();

    fsutil::ensure_folders(&[&paths.result_folder, &output_folder])
        .unwrap_or_else(|err| fatal_exit(&err.to_string(), &paths.stop_file));

    let stop_handle = stop::watch_for_stop(&paths.stop_file);

    let result_file = paths.result_file.clone();
    let mut echoed: u64 = 0;
    let _watcher = watcher::watch_json(
        &input_folder,
        &paths.stop_file,
        Duration::from_secs(cli.watch_timeout_secs),
        move |path| {
            echoed += 1;
            if let Err(err) = echo_record(path, &output_folder, &result_file, echoed) {
                tracing::warn!(file = %path.display(), "echo failed: {err}");
            }
        },
    );

    stop_handle.join().await;
    Ok(())
}

/// Copy one dispatched record into the output channel and refresh the result
/// file. Failures here are the callback's to absorb — a watcher callback must
/// not panic.
fn echo_record(
    path: &Path,
    output_folder: &Path,
    result_file: &Path,
    sequence: u64,
) -> Result<(), dropchannel::Error> {
    let contents = std::fs::read_to_string(path)?;
    let echo_name = format!("echo-{sequence:06}.json");
    fsutil::write_shared(&output_folder.join(echo_name), &contents)?;

    let summary = EchoResult {
        echoed: sequence,
        last_file: path.display().to_string(),
    };
    fsutil::write_shared(result_file, &json::to_compact_json(&summary)?)?;
    tracing::info!(file = %path.display(), sequence, "echoed record");
    Ok(())
}
