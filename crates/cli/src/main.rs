//! `respeq` — tolerance-bounded JSON response equivalence checks.

mod exit_codes;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{EXIT_INVALID_CONFIG, EXIT_IO, EXIT_NOT_EQUIVALENT, EXIT_PARSE, EXIT_SUCCESS};
use respeq_engine::model::EquivResult;
use respeq_engine::{CompareConfig, EquivError, ScanMode};

#[derive(Parser)]
#[command(name = "respeq")]
#[command(about = "Compare two JSON responses for semantic equivalence")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two JSON documents under a difference tolerance
    #[command(after_help = "\
Examples:
  respeq check result1.json result2.json
  respeq check result1.json result2.json --tolerance 5
  respeq check result1.json result2.json --config respeq.toml --json
  respeq check result1.json result2.json --full-scan --output report.json")]
    Check {
        /// Left document
        left: PathBuf,

        /// Right document
        right: PathBuf,

        /// Maximum total count of mismatched (key, value) pairs
        #[arg(long, short = 't')]
        tolerance: Option<usize>,

        /// Path to a .respeq.toml config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Visit every key instead of stopping once tolerance is exceeded
        #[arg(long)]
        full_scan: bool,

        /// Print the JSON report to stdout
        #[arg(long)]
        json: bool,

        /// Write the JSON report to a file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Suppress the per-key mismatch listing on stderr
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Validate a config file without running a comparison
    #[command(after_help = "\
Examples:
  respeq validate respeq.toml")]
    Validate {
        /// Path to the .respeq.toml config file
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Check {
            left,
            right,
            tolerance,
            config,
            full_scan,
            json,
            output,
            quiet,
        } => cmd_check(left, right, tolerance, config, full_scan, json, output, quiet),
        Commands::Validate { config } => cmd_validate(config),
    };

    match outcome {
        Ok(code) => ExitCode::from(code),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {message}");
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {hint}");
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
struct CliError {
    code: u8,
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn io(msg: impl Into<String>) -> Self {
        Self {
            code: EXIT_IO,
            message: msg.into(),
            hint: None,
        }
    }

    /// Map an engine error onto the exit code registry.
    fn engine(err: EquivError) -> Self {
        let code = match &err {
            EquivError::ConfigParse(_) => EXIT_INVALID_CONFIG,
            EquivError::NotAnObject { .. } | EquivError::DocumentParse { .. } => EXIT_PARSE,
            EquivError::Io { .. } => EXIT_IO,
        };
        Self {
            code,
            message: err.to_string(),
            hint: None,
        }
    }
}

fn cmd_check(
    left: PathBuf,
    right: PathBuf,
    tolerance: Option<usize>,
    config_path: Option<PathBuf>,
    full_scan: bool,
    json_output: bool,
    output_file: Option<PathBuf>,
    quiet: bool,
) -> Result<u8, CliError> {
    let mut config = match config_path {
        Some(ref path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| CliError::io(format!("cannot read config {}: {e}", path.display())))?;
            CompareConfig::from_toml(&text).map_err(CliError::engine)?
        }
        None => CompareConfig::default(),
    };

    // CLI flags override config values
    if let Some(t) = tolerance {
        config.tolerance = t;
    }
    if full_scan {
        config.scan = ScanMode::Full;
    }

    let left_doc = respeq_engine::loader::load_document(&left).map_err(CliError::engine)?;
    let right_doc = respeq_engine::loader::load_document(&right).map_err(CliError::engine)?;

    let result = respeq_engine::run(&config, &left_doc, &right_doc).map_err(CliError::engine)?;

    let report = serde_json::to_string_pretty(&result)
        .map_err(|e| CliError::io(format!("JSON serialization error: {e}")))?;

    let output_file = output_file.or_else(|| config.output.json.clone().map(PathBuf::from));
    if let Some(ref path) = output_file {
        std::fs::write(path, &report)
            .map_err(|e| CliError::io(format!("cannot write {}: {e}", path.display())))?;
        eprintln!("wrote {}", path.display());
    }

    if json_output {
        println!("{report}");
    }

    if !quiet {
        render_summary(&result);
    }

    if result.summary.equivalent {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_NOT_EQUIVALENT)
    }
}

fn cmd_validate(config: PathBuf) -> Result<u8, CliError> {
    let text = std::fs::read_to_string(&config)
        .map_err(|e| CliError::io(format!("cannot read {}: {e}", config.display())))?;
    let parsed = CompareConfig::from_toml(&text).map_err(CliError::engine)?;

    eprintln!(
        "config '{}' OK: tolerance {}, scan {}",
        parsed.name, parsed.tolerance, parsed.scan
    );
    Ok(EXIT_SUCCESS)
}

/// Human summary on stderr; stdout stays reserved for the JSON report.
fn render_summary(result: &EquivResult) {
    for m in &result.mismatches {
        eprintln!(
            "key '{}': [{}] vs [{}]",
            m.key,
            fmt_set(&m.left),
            fmt_set(&m.right)
        );
    }

    let s = &result.summary;
    let verdict = if s.equivalent { "equivalent" } else { "not equivalent" };
    let suffix = if s.truncated {
        " (stopped early: tolerance exceeded)"
    } else {
        ""
    };
    eprintln!(
        "{verdict}: {} difference(s) across {} key(s), tolerance {}{suffix}",
        s.total_differences, s.keys_compared, result.meta.tolerance
    );
}

fn fmt_set(values: &std::collections::BTreeSet<String>) -> String {
    values.iter().cloned().collect::<Vec<_>>().join(", ")
}
