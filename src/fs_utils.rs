use crate::error::{EmbedresError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads the full binary contents of a resource file
///
/// # Errors
///
/// - `EmbedresError::FileUnreadable` if the file is missing, is a directory or can't be read.
pub fn read_resource(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| EmbedresError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns the directory that has to exist before `output` can be written,
/// or `None` when the output goes to the current directory.
#[must_use]
pub fn output_dir(output: &Path) -> Option<PathBuf> {
    output
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty() && *dir != Path::new("."))
        .map(Path::to_path_buf)
}

/// Creates the parent directory of `output` (recursively) if it is missing
///
/// # Errors
///
/// - `EmbedresError::DirectoryCreate` if the directory can't be created.
pub fn ensure_output_dir(output: &Path) -> Result<()> {
    let Some(dir) = output_dir(output) else {
        return Ok(());
    };
    if dir.is_dir() {
        return Ok(());
    }

    tracing::debug!(dir = %dir.display(), "creating output directory");
    fs::create_dir_all(&dir).map_err(|source| EmbedresError::DirectoryCreate {
        dir,
        output: output.to_path_buf(),
        source,
    })
}
