use std::io::Write;
use std::path::Path;

use crate::error::Error;

/// Create every folder in `folders` that does not exist yet, parents
/// included. Existing folders are left untouched.
pub fn ensure_folders<P: AsRef<Path>>(folders: &[P]) -> Result<(), Error> {
    for folder in folders {
        std::fs::create_dir_all(folder.as_ref())?;
    }
    Ok(())
}

/// Write `contents` to `path` and open its permissions so the host-side user
/// can read and collect the file.
///
/// The write is atomic: contents land in a temp file in the same directory
/// which is then renamed over the target, so the host never observes a
/// half-written result. On Unix the final file is chmod 0o777 — host and
/// plugin run as different users sharing a mounted volume.
pub fn write_shared(path: &Path, contents: &str) -> Result<(), Error> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let wrap = |source: std::io::Error| Error::WriteFailed {
        path: path.to_owned(),
        source,
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(wrap)?;
    tmp.write_all(contents.as_bytes()).map_err(wrap)?;
    tmp.as_file().flush().map_err(wrap)?;
    tmp.persist(path).map_err(|e| wrap(e.error))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o777)).map_err(wrap)?;
    }

    Ok(())
}
