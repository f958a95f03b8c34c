use clap::ValueEnum;
use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Namespace used when none (or an empty one) is given
pub const DEFAULT_NAMESPACE: &str = "resources";
/// Container variable name used when none (or an empty one) is given
pub const DEFAULT_NAME: &str = "resources";
/// Output path used when none (or an empty one) is given
pub const DEFAULT_OUTPUT: &str = "resources.hpp";

/// How the generated header protects itself against multiple inclusion
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardStyle {
    /// `#ifndef` / `#define` / `#endif` macro guard
    #[default]
    Define,
    /// `#pragma once`
    Pragma,
}

impl fmt::Display for GuardStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Define => f.write_str("define"),
            Self::Pragma => f.write_str("pragma"),
        }
    }
}

/// A single `file:alias` pair to embed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    /// File whose bytes are embedded
    pub source_path: PathBuf,
    /// Key under which the bytes are exposed in the generated map
    pub alias: String,
}

impl ResourceEntry {
    pub fn new(source_path: impl Into<PathBuf>, alias: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            alias: alias.into(),
        }
    }
}

impl FromStr for ResourceEntry {
    type Err = Infallible;

    /// Splits on the first `:`. A token without one is all path, with an empty alias.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (path, alias) = s.split_once(':').unwrap_or((s, ""));
        Ok(Self::new(path, alias))
    }
}

/// Resolved emission options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionConfig {
    /// C++ namespace wrapping the container
    pub namespace: String,
    /// Name of the generated static map
    pub container_name: String,
    pub guard_style: GuardStyle,
    /// Header path, always ending in `.h` or `.hpp`
    pub output_path: PathBuf,
}

impl Default for EmissionConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            container_name: DEFAULT_NAME.to_string(),
            guard_style: GuardStyle::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl EmissionConfig {
    /// Builds a config, replacing empty values with the defaults and
    /// normalizing the output extension.
    pub fn new(
        namespace: &str,
        container_name: &str,
        guard_style: GuardStyle,
        output: &str,
    ) -> Self {
        let output = or_default(output, DEFAULT_OUTPUT);
        Self {
            namespace: or_default(namespace, DEFAULT_NAMESPACE),
            container_name: or_default(container_name, DEFAULT_NAME),
            guard_style,
            output_path: PathBuf::from(normalize_output_path(&output)),
        }
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Appends `.hpp` unless the path already ends with `.h` or `.hpp` (case-sensitive).
#[must_use]
pub fn normalize_output_path(output: &str) -> String {
    if output.ends_with(".h") || output.ends_with(".hpp") {
        output.to_string()
    } else {
        format!("{output}.hpp")
    }
}
