//! CLI entry point for sift

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser, ValueEnum};
use log::Level;
use sift::{
    OutputConfig, ScanConfig, ScanOptions, ScanReport, ScanStats, Scanner, TreeFormatter,
    TreeWalker, print_csv, print_json, print_list, print_stats,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(about = "Scan a directory tree, filter files and report on the matches")]
#[command(version)]
struct Args {
    /// Directory to scan
    path: Option<PathBuf>,

    /// Descend at most N levels below the root (0 = only the root's own entries)
    #[arg(long = "depth", value_name = "N", allow_hyphen_values = true)]
    depth: Option<String>,

    /// Only include these extensions, comma-separated (e.g. .rs,.toml)
    #[arg(long = "ext", value_name = "EXTS")]
    ext: Option<String>,

    /// Only include file names matching a glob (* and ? wildcards, case-insensitive)
    #[arg(long = "name", value_name = "PATTERN")]
    name: Option<String>,

    /// Only include files whose size satisfies EXPR (e.g. ">1MB", "<=500", "=2KB")
    #[arg(long = "size", value_name = "EXPR", allow_hyphen_values = true)]
    size: Option<String>,

    /// Only include text files containing TEXT (case-insensitive)
    #[arg(long = "search", value_name = "TEXT", allow_hyphen_values = true)]
    search: Option<String>,

    /// Show the directory hierarchy (ignores filters)
    #[arg(long = "tree")]
    tree: bool,

    /// Show statistics about the matched files
    #[arg(long = "stats")]
    stats: bool,

    /// Output the matched files as JSON
    #[arg(long = "json")]
    json: bool,

    /// Output the matched files as CSV
    #[arg(long = "csv")]
    csv: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            path: self.path.clone(),
            depth: self.depth.clone(),
            ext: self.ext.clone(),
            name: self.name.clone(),
            size: self.size.clone(),
            search: self.search.clone(),
            tree: self.tree,
            stats: self.stats,
            json: self.json,
            csv: self.csv,
        }
    }
}

/// Route `log` records to stderr as `sift: <level>: <message>`.
/// `RUST_LOG` overrides the default `warn` filter.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            let level = match record.level() {
                Level::Error => "error",
                Level::Warn => "warning",
                Level::Info => "info",
                Level::Debug => "debug",
                Level::Trace => "trace",
            };
            writeln!(buf, "sift: {}: {}", level, record.args())
        })
        .init();
}

fn main() {
    init_logging();

    let args = Args::try_parse().unwrap_or_else(|e| {
        // --help and --version land here too, on stdout
        let code = if e.use_stderr() { 1 } else { 0 };
        let _ = e.print();
        process::exit(code);
    });

    let config = ScanConfig::from_options(&args.scan_options()).unwrap_or_else(|errors| {
        for e in errors.iter() {
            eprintln!("sift: {}", e);
        }
        eprintln!();
        eprintln!("{}", Args::command().render_usage());
        process::exit(1);
    });

    if let Err(e) = run(&config, should_use_color(args.color)) {
        eprintln!("sift: error writing output: {}", e);
        process::exit(1);
    }
}

/// Render every selected report. The scan only runs when a report needs records.
fn run(config: &ScanConfig, use_color: bool) -> io::Result<()> {
    let outputs = config.outputs;
    let output = OutputConfig { use_color };

    if outputs.tree {
        let tree = TreeWalker::from_config(config).walk();
        TreeFormatter::new(output.clone()).print(&tree)?;
    }

    if !outputs.needs_scan() {
        return Ok(());
    }

    let result = Scanner::new(config).scan();

    if outputs.json {
        print_json(&ScanReport::new(&config.root, &result.records))?;
    }
    if outputs.csv {
        print_csv(&result.records)?;
    }
    if outputs.stats {
        print_stats(&ScanStats::from_records(&result.records), &output)?;
    }
    if outputs.flat_list() {
        print_list(&result.records)?;
    }

    Ok(())
}
