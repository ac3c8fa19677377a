use std::path::PathBuf;

use clap::Args;

use crate::error::Error;

/// The startup surface every plugin receives from the host: seven filesystem
/// paths naming the request file, the places results go, the stop sentinel,
/// and the three channel roots.
///
/// All arguments are declared optional so that a missing one is validated by
/// [`PluginArgs::validate`] and reported through the stop-sentinel error path
/// rather than as a usage error the host never sees. Embed in a binary's
/// parser with `#[command(flatten)]`.
#[derive(Args, Debug, Clone)]
pub struct PluginArgs {
    /// The PluginRequest json describing this job.
    #[arg(long)]
    pub request_file: Option<PathBuf>,

    /// Folder collected by the host when the job finishes.
    #[arg(long)]
    pub result_folder: Option<PathBuf>,

    /// Result file json collected by the host.
    #[arg(long)]
    pub result_file: Option<PathBuf>,

    /// File to monitor for the stop signal and to write error reports to.
    #[arg(long)]
    pub stop_file: Option<PathBuf>,

    /// Root folder containing input channel sub folders.
    #[arg(long)]
    pub input_channel_folder: Option<PathBuf>,

    /// Root folder containing output channel sub folders.
    #[arg(long)]
    pub output_channel_folder: Option<PathBuf>,

    /// Root folder containing telemetry stream sub folders.
    #[arg(long)]
    pub telemetry_stream_folder: Option<PathBuf>,
}

/// The validated startup surface: every path present.
#[derive(Debug, Clone)]
pub struct PluginPaths {
    pub request_file: PathBuf,
    pub result_folder: PathBuf,
    pub result_file: PathBuf,
    pub stop_file: PathBuf,
    pub input_channel_folder: PathBuf,
    pub output_channel_folder: PathBuf,
    pub telemetry_stream_folder: PathBuf,
}

impl PluginArgs {
    /// Check that every required path was supplied.
    ///
    /// The first missing argument is the error; callers holding a known stop
    /// path should forward it to [`crate::report::fatal_exit`] so the host
    /// learns about the misconfiguration through the sentinel.
    pub fn validate(self) -> Result<PluginPaths, Error> {
        Ok(PluginPaths {
            request_file: self
                .request_file
                .ok_or(Error::MissingArgument("--request-file"))?,
            result_folder: self
                .result_folder
                .ok_or(Error::MissingArgument("--result-folder"))?,
            result_file: self
                .result_file
                .ok_or(Error::MissingArgument("--result-file"))?,
            stop_file: self.stop_file.ok_or(Error::MissingArgument("--stop-file"))?,
            input_channel_folder: self
                .input_channel_folder
                .ok_or(Error::MissingArgument("--input-channel-folder"))?,
            output_channel_folder: self
                .output_channel_folder
                .ok_or(Error::MissingArgument("--output-channel-folder"))?,
            telemetry_stream_folder: self
                .telemetry_stream_folder
                .ok_or(Error::MissingArgument("--telemetry-stream-folder"))?,
        })
    }
}
