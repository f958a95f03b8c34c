//! Include-guard name derivation.

use std::path::Path;

/// Derives the include-guard macro for a header written to `output_path`.
///
/// Only the final path component takes part; directories are ignored.
#[must_use]
pub fn guard_name(output_path: &Path, namespace: &str) -> String {
    let base_name = output_path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    sanitize(&base_name, namespace)
}

/// Builds `_<NAMESPACE>_<BASENAME>_` from a file base name.
///
/// Control characters are dropped, punctuation and spaces become `_`, and
/// both parts are upper-cased. The namespace is upper-cased only.
#[must_use]
pub fn sanitize(base_name: &str, namespace: &str) -> String {
    let token: String = base_name
        .chars()
        .filter(|c| !c.is_ascii_control())
        .map(|c| {
            if c.is_ascii_punctuation() || c == ' ' {
                '_'
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect();

    format!("_{}_{token}_", namespace.to_ascii_uppercase())
}
