//! CLI for acs-refs - Split ACS-style reference lists into JSON arrays.

use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use acs_refs::{render_json, split_refs, write_file, write_stdout};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Split a semicolon-delimited ACS reference list into a JSON array
#[derive(Parser)]
#[command(name = "acs-refs")]
#[command(version)]
#[command(after_help = "\
Examples:
  acs-refs 'Smith, A.; Jones, B.; Lee, C.'
  acs-refs 'Smith, A.; Jones, B.' -o refs.json
  echo 'Smith, A.; Jones, B.' | acs-refs -
  acs-refs --pretty 'Smith, A.; Jones, B.'

Each fragment is trimmed of surrounding whitespace; order is preserved,
and empty fragments (adjacent semicolons) are kept as empty strings.")]
struct Cli {
    /// Reference list to split (use '-' to read it from stdin)
    refs: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON array
    #[arg(long)]
    pretty: bool,
}

// ---------------------------------------------------------------------------
// AppError — semantic exit codes
// ---------------------------------------------------------------------------

enum AppError {
    /// Exit 10 — cannot read the reference list from stdin
    Input(String),
    /// Exit 15 — cannot write output file
    OutputFile(String),
}

impl AppError {
    fn exit_code(&self) -> i32 {
        match self {
            AppError::Input(_) => 10,
            AppError::OutputFile(_) => 15,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Input(msg) => {
                write!(f, "{}", msg)
            }
            AppError::OutputFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: check that the output directory exists and is writable",
                    msg
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    split_command(&cli.refs, cli.output.as_deref(), cli.pretty)
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Split the reference list and emit the JSON array.
fn split_command(refs: &str, output: Option<&Path>, pretty: bool) -> Result<(), AppError> {
    // 1. Resolve the input (support '-' for stdin)
    let refs = if refs == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| AppError::Input(format!("failed to read from stdin: {}", e)))?;
        // Shell pipelines append a newline; strip it so piped input splits
        // the same way the argument form does.
        buf.trim_end_matches(['\r', '\n']).to_string()
    } else {
        refs.to_string()
    };

    // 2. Split into trimmed fragments
    let fragments = split_refs(&refs);

    // 3. Render the JSON array
    let json = render_json(&fragments, pretty)
        .map_err(|e| AppError::OutputFile(e.to_string()))?;

    // 4. Write to file or stdout, newline-terminated
    if let Some(output_path) = output {
        write_file(output_path, &json).map_err(|e| {
            AppError::OutputFile(format!("'{}': {}", output_path.display(), e))
        })?;
        eprintln!(
            "split {} reference(s), wrote {}",
            fragments.len(),
            output_path.display()
        );
    } else {
        write_stdout(&json).map_err(|e| AppError::OutputFile(format!("stdout: {}", e)))?;
    }

    Ok(())
}
