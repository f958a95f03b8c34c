use clap::Parser;
use embedres::config::{DEFAULT_NAME, DEFAULT_NAMESPACE, DEFAULT_OUTPUT};
use embedres::{EmissionConfig, EmitReport, GuardStyle, ResourceEntry, Result};
use tracing_subscriber::EnvFilter;

const LONG_HELP: &str = r#"
Generated layout:
  namespace <NAMESPACE> {
  static std::unordered_map<std::string, std::vector<uint8_t> > const <NAME> =
  {
      { "alias", { 222,173, } },
  };
  }  // namespace <NAMESPACE>

Examples:
  # Embed two files into resources.hpp
  embedres logo.png:logo shaders/main.frag:frag
  # Custom namespace, map name and output (directories are created)
  embedres logo.png:logo --namespace assets --name data -o out/gen.hpp
  # Use #pragma once instead of #ifndef guards
  embedres logo.png:logo --guards pragma
  # Read arguments from a file, one per line
  embedres @resources.txt
  # Check what would be generated without writing anything
  embedres @resources.txt --dry-run
  # Same, as JSON for scripting
  embedres @resources.txt --dry-run --json

Unreadable resources are reported and skipped; the header is still generated.
"#;

/// Embed binary files into a generated C++ header.
#[derive(Parser, Debug)]
#[command(
    name = "embedres",
    version,
    about = "Embed binary files into a generated C++ header.",
    after_long_help = LONG_HELP
)]
struct Cli {
    /// Resources to embed, split on the first ':' into file and alias
    #[arg(value_name = "file:alias")]
    resources: Vec<ResourceEntry>,

    /// Include guard style
    #[arg(long, value_enum, default_value_t = GuardStyle::Define)]
    guards: GuardStyle,

    /// Name of the generated map
    #[arg(long, value_name = "NAME", default_value = DEFAULT_NAME)]
    name: String,

    /// Namespace wrapping the generated map
    #[arg(
        long,
        value_name = "NAMESPACE",
        default_value = DEFAULT_NAMESPACE,
        env = "EMBEDRES_NAMESPACE"
    )]
    namespace: String,

    /// Output header; '.hpp' is appended unless it ends in '.h' or '.hpp'
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = DEFAULT_OUTPUT,
        env = "EMBEDRES_OUTPUT"
    )]
    output: String,

    /// Report what would be generated without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Print the dry-run report as JSON
    #[arg(long, requires = "dry_run")]
    json: bool,

    /// Increase verbosity (can be used multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress the success notice and warnings
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let args = match embedres::argfile::expand_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };
    let cli = Cli::parse_from(args);
    init_tracing(&cli);

    let config = EmissionConfig::new(&cli.namespace, &cli.name, cli.guards, &cli.output);
    tracing::debug!(?config, resources = cli.resources.len(), "resolved arguments");

    if cli.dry_run {
        let report = embedres::preview(&cli.resources, &config);
        if let Err(e) = print_dry_run(&report, cli.json) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        return;
    }

    let result = embedres::generate_with(&cli.resources, &config, |skipped| {
        println!("[FAIL] Can't open file '{}'", skipped.source_path.display());
    });
    match result {
        Ok(report) => {
            if !cli.quiet {
                println!("[ OK ] File '{}' generated", report.output_path.display());
            }
        }
        Err(e) => {
            eprintln!("[FAIL] {e}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(cli: &Cli) {
    let level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_dry_run(report: &EmitReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("Output: {}", report.output_path.display());
    println!("Namespace: {}", report.namespace);
    println!("Container: {}", report.container_name);
    match &report.guard {
        Some(guard) => println!("Guard: {guard}"),
        None => println!("Guard: #pragma once"),
    }

    for written in &report.written {
        println!(
            "  ✓ {} -> {} ({} bytes)",
            written.alias,
            written.source_path.display(),
            written.size
        );
    }
    for skipped in &report.skipped {
        println!(
            "  ✗ {} -> {} ({})",
            skipped.alias,
            skipped.source_path.display(),
            skipped.reason
        );
    }

    println!(
        "\nSummary: {} resources found",
        report.written.len() + report.skipped.len()
    );
    if !report.written.is_empty() {
        println!("  ✓ {} readable", report.written.len());
    }
    if !report.skipped.is_empty() {
        println!("  ✗ {} unreadable", report.skipped.len());
    }

    Ok(())
}
