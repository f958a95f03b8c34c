//! `@file` argument expansion.
//!
//! An argument of the form `@path` is replaced by the lines of `path`, one
//! argument per line. Blank lines are ignored and nested `@path` lines are
//! expanded in turn.

use crate::error::{EmbedresError, Result};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

/// Expands `@file` references in a full argv. The program name is passed through untouched.
///
/// # Errors
///
/// - `EmbedresError::ArgFile` if a referenced file can't be read.
/// - `EmbedresError::ArgFileCycle` if a file references itself, directly or not.
pub fn expand_args<I>(args: I) -> Result<Vec<OsString>>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut expanded: Vec<OsString> = args.next().into_iter().collect();
    let mut open_files = Vec::new();

    for arg in args {
        expand_into(arg, &mut expanded, &mut open_files)?;
    }

    Ok(expanded)
}

fn expand_into(
    arg: OsString,
    expanded: &mut Vec<OsString>,
    open_files: &mut Vec<PathBuf>,
) -> Result<()> {
    let Some(path) = argfile_path(&arg) else {
        expanded.push(arg);
        return Ok(());
    };

    let identity = path.canonicalize().unwrap_or_else(|_| path.clone());
    if open_files.contains(&identity) {
        return Err(EmbedresError::ArgFileCycle { path });
    }

    let contents = fs::read_to_string(&path).map_err(|source| EmbedresError::ArgFile {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "expanding argument file");

    open_files.push(identity);
    for line in contents.lines().filter(|line| !line.trim().is_empty()) {
        expand_into(OsString::from(line), expanded, open_files)?;
    }
    open_files.pop();

    Ok(())
}

/// Returns the referenced path for `@path` arguments. A lone `@` is a plain argument.
fn argfile_path(arg: &OsStr) -> Option<PathBuf> {
    arg.to_str()
        .and_then(|s| s.strip_prefix('@'))
        .filter(|rest| !rest.is_empty())
        .map(|rest| Path::new(rest).to_path_buf())
}
