use std::path::PathBuf;

/// Errors surfaced by the library's fallible operations.
///
/// Fatal conditions (starvation, missing startup paths) are not represented
/// here — they converge on [`crate::report::fatal_exit`], which terminates the
/// process. This type covers the recoverable surface callers handle themselves.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{kind} channel {id} not found in plugin request")]
    ChannelNotFound {
        kind: ChannelKind,
        id: String,
    },

    #[error("missing required argument {0}")]
    MissingArgument(&'static str),

    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Direction of a channel lookup, for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Input,
    Output,
}

impl std::fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelKind::Input => write!(f, "input"),
            ChannelKind::Output => write!(f, "output"),
        }
    }
}
