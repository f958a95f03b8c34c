use crate::config::{EmissionConfig, GuardStyle, ResourceEntry};
use crate::error::{EmbedresError, Result};
use crate::fs_utils::{ensure_output_dir, read_resource};
use crate::sanitize::guard_name;
use serde::Serialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

const INCLUDES: [&str; 4] = ["cstdint", "string", "vector", "unordered_map"];
const CONTAINER_TYPE: &str = "std::unordered_map<std::string, std::vector<uint8_t> >";

/// A resource that made it into the generated header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenResource {
    pub alias: String,
    pub source_path: PathBuf,
    pub size: u64,
}

/// A resource that was left out because it couldn't be read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedResource {
    pub alias: String,
    pub source_path: PathBuf,
    pub reason: String,
}

/// Outcome of a generation run (or of a dry run)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmitReport {
    pub output_path: PathBuf,
    pub namespace: String,
    pub container_name: String,
    pub guard_style: GuardStyle,
    /// Guard macro, only present for `#ifndef`-style guards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guard: Option<String>,
    pub written: Vec<WrittenResource>,
    pub skipped: Vec<SkippedResource>,
}

impl EmitReport {
    fn new(config: &EmissionConfig) -> Self {
        let guard = match config.guard_style {
            GuardStyle::Define => Some(guard_name(&config.output_path, &config.namespace)),
            GuardStyle::Pragma => None,
        };
        Self {
            output_path: config.output_path.clone(),
            namespace: config.namespace.clone(),
            container_name: config.container_name.clone(),
            guard_style: config.guard_style,
            guard,
            written: Vec::new(),
            skipped: Vec::new(),
        }
    }

    fn skip<F>(&mut self, entry: &ResourceEntry, err: &EmbedresError, on_skip: &mut F)
    where
        F: FnMut(&SkippedResource),
    {
        tracing::debug!(
            path = %entry.source_path.display(),
            alias = %entry.alias,
            "skipping resource: {err}"
        );
        let reason = match err {
            EmbedresError::FileUnreadable { source, .. } => source.to_string(),
            other => other.to_string(),
        };
        let skipped = SkippedResource {
            alias: entry.alias.clone(),
            source_path: entry.source_path.clone(),
            reason,
        };
        on_skip(&skipped);
        self.skipped.push(skipped);
    }
}

/// Writes the complete header for `entries` to `out`.
///
/// Unreadable resources are skipped and listed in the returned report; only
/// failures of `out` itself abort the run.
///
/// # Errors
///
/// - `EmbedresError::OutputWrite` if writing to `out` fails.
pub fn emit<W: Write>(
    out: &mut W,
    entries: &[ResourceEntry],
    config: &EmissionConfig,
) -> Result<EmitReport> {
    emit_with(out, entries, config, |_| {})
}

/// Like [`emit`], calling `on_skip` as soon as a resource turns out to be unreadable.
///
/// # Errors
///
/// - `EmbedresError::OutputWrite` if writing to `out` fails. Resources skipped
///   before the failure have already been passed to `on_skip`.
pub fn emit_with<W, F>(
    out: &mut W,
    entries: &[ResourceEntry],
    config: &EmissionConfig,
    mut on_skip: F,
) -> Result<EmitReport>
where
    W: Write,
    F: FnMut(&SkippedResource),
{
    let mut report = EmitReport::new(config);

    write_header(out, entries, config, &mut report, &mut on_skip)
        .map_err(|source| output_error(&config.output_path, source))?;

    Ok(report)
}

fn write_header<W, F>(
    out: &mut W,
    entries: &[ResourceEntry],
    config: &EmissionConfig,
    report: &mut EmitReport,
    on_skip: &mut F,
) -> io::Result<()>
where
    W: Write,
    F: FnMut(&SkippedResource),
{
    let namespace = &config.namespace;
    let program = env!("CARGO_PKG_NAME");

    writeln!(
        out,
        "// this file is auto-generated by {program} v{}",
        env!("CARGO_PKG_VERSION")
    )?;
    writeln!(out, "// do not edit: regenerate with {program} instead")?;
    writeln!(out)?;
    match &report.guard {
        Some(guard) => {
            writeln!(out, "#ifndef {guard}")?;
            writeln!(out, "#define {guard}")?;
        }
        None => writeln!(out, "#pragma once")?,
    }
    writeln!(out)?;
    for include in INCLUDES {
        writeln!(out, "#include <{include}>")?;
    }
    writeln!(out)?;
    writeln!(out, "namespace {namespace} {{")?;
    writeln!(out, "static {CONTAINER_TYPE} const {} =", config.container_name)?;
    writeln!(out, "{{")?;

    for entry in entries {
        tracing::debug!(
            path = %entry.source_path.display(),
            alias = %entry.alias,
            "embedding resource"
        );
        match read_resource(&entry.source_path) {
            Ok(bytes) => {
                write_entry(out, &entry.alias, &bytes)?;
                report.written.push(WrittenResource {
                    alias: entry.alias.clone(),
                    source_path: entry.source_path.clone(),
                    size: bytes.len() as u64,
                });
            }
            Err(err) => report.skip(entry, &err, on_skip),
        }
    }
    warn_duplicate_aliases(&report.written);

    writeln!(out, "}};")?;
    writeln!(out, "}}  // namespace {namespace}")?;
    if let Some(guard) = &report.guard {
        writeln!(out)?;
        writeln!(out, "#endif  // {guard}")?;
    }

    Ok(())
}

/// Writes one `{ "alias", { b0,b1,...,bN, } },` line.
fn write_entry<W: Write>(out: &mut W, alias: &str, bytes: &[u8]) -> io::Result<()> {
    write!(out, "    {{ \"{}\", {{ ", escape_alias(alias))?;
    for byte in bytes {
        write!(out, "{byte},")?;
    }
    writeln!(out, " }} }},")
}

/// Escapes an alias for use inside a C++ string literal.
///
/// Other control characters become three-digit octal escapes, which can't
/// swallow a following character the way `\x` escapes do.
fn escape_alias(alias: &str) -> String {
    let mut escaped = String::with_capacity(alias.len());
    for c in alias.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_ascii_control() => escaped.push_str(&format!("\\{:03o}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Warns about aliases that ended up in the header more than once.
fn warn_duplicate_aliases(written: &[WrittenResource]) {
    let mut seen = HashSet::new();
    for resource in written {
        if !seen.insert(resource.alias.as_str()) {
            tracing::warn!(alias = %resource.alias, "alias listed more than once");
        }
    }
}

/// Generates the header file described by `config`.
///
/// The output directory is created first; if that fails nothing is written.
///
/// # Errors
///
/// - `EmbedresError::DirectoryCreate` if the output directory can't be created.
/// - `EmbedresError::OutputWrite` if the output file can't be created or written.
pub fn generate(entries: &[ResourceEntry], config: &EmissionConfig) -> Result<EmitReport> {
    generate_with(entries, config, |_| {})
}

/// Like [`generate`], calling `on_skip` as soon as a resource turns out to be unreadable.
///
/// # Errors
///
/// Same as [`generate`].
pub fn generate_with<F>(
    entries: &[ResourceEntry],
    config: &EmissionConfig,
    on_skip: F,
) -> Result<EmitReport>
where
    F: FnMut(&SkippedResource),
{
    let output = &config.output_path;
    ensure_output_dir(output)?;

    let file = File::create(output).map_err(|source| output_error(output, source))?;
    let mut out = BufWriter::new(file);
    let report = emit_with(&mut out, entries, config, on_skip)?;
    out.flush().map_err(|source| output_error(output, source))?;

    tracing::info!(
        output = %output.display(),
        written = report.written.len(),
        skipped = report.skipped.len(),
        "header generated"
    );
    Ok(report)
}

fn output_error(path: &Path, source: io::Error) -> EmbedresError {
    EmbedresError::OutputWrite {
        path: path.to_path_buf(),
        source,
    }
}

/// Resolves what `generate` would do without writing anything.
///
/// Resources are opened to check readability and size, but not read.
#[must_use]
pub fn preview(entries: &[ResourceEntry], config: &EmissionConfig) -> EmitReport {
    let mut report = EmitReport::new(config);

    for entry in entries {
        let size = File::open(&entry.source_path)
            .and_then(|file| file.metadata())
            .and_then(|metadata| {
                if metadata.is_dir() {
                    Err(io::Error::other("is a directory"))
                } else {
                    Ok(metadata.len())
                }
            });
        match size {
            Ok(size) => report.written.push(WrittenResource {
                alias: entry.alias.clone(),
                source_path: entry.source_path.clone(),
                size,
            }),
            Err(source) => {
                let err = EmbedresError::FileUnreadable {
                    path: entry.source_path.clone(),
                    source,
                };
                report.skip(entry, &err, &mut |_: &SkippedResource| {});
            }
        }
    }
    warn_duplicate_aliases(&report.written);

    report
}
