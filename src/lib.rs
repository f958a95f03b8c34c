//! # embedres
//!
//! Generates a C++ header that embeds binary files as a static
//! `std::unordered_map<std::string, std::vector<uint8_t>>`, so assets such as
//! icons, shaders or certificates can be compiled straight into a program.
//!
//! ## Features
//!
//! - `file:alias` pairs, emitted in the order given
//! - `#ifndef` macro guards or `#pragma once`
//! - Configurable namespace and container name
//! - Unreadable resources are reported and skipped, never fatal
//! - `@file` argument files for long resource lists
//!
//! ## Usage
//!
//! ### As a Library
//!
//! ```no_run
//! use embedres::{EmissionConfig, GuardStyle, ResourceEntry, generate};
//!
//! let config = EmissionConfig::new("assets", "data", GuardStyle::Define, "out/gen.hpp");
//! let entries = [ResourceEntry::new("logo.png", "logo")];
//!
//! match generate(&entries, &config) {
//!     Ok(report) => println!("{} resources embedded", report.written.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```
//!
//! ### As a CLI Tool
//!
//! ```bash
//! # Embed two files into resources.hpp
//! embedres logo.png:logo shaders/main.frag:frag
//!
//! # Custom namespace, map name and output
//! embedres logo.png:logo --namespace assets --name data -o out/gen.hpp
//!
//! # Read the resource list from a file
//! embedres @resources.txt --guards pragma
//! ```

pub mod argfile;
pub mod config;
pub mod emit;
pub mod error;
pub mod fs_utils;
pub mod sanitize;

// Re-export main types and functions for convenience
pub use config::{EmissionConfig, GuardStyle, ResourceEntry};
pub use emit::{
    EmitReport, SkippedResource, WrittenResource, emit, emit_with, generate, generate_with,
    preview,
};
pub use error::{EmbedresError, Result};
pub use sanitize::{guard_name, sanitize};
