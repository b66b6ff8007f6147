//! Three-address intermediate code translator CLI.
//!
//! Reads a [`ic_core::ast::Program`] as JSON (from a file or stdin), runs it
//! through [`ic_translate::Translator`], and writes the canonical textual
//! dump of the emitted instructions to a file or stdout.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use ic_core::ast::Program;
use ic_translate::error::TranslateError;
use ic_translate::Translator;

use crate::error::CliError;

mod error;

/// Translate a program AST into three-address intermediate code.
#[derive(Parser)]
#[command(name = "ictranslate", about = "Translate a program AST into three-address intermediate code")]
struct Cli {
    /// Path to the input JSON AST. Reads stdin if omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path to write the IC dump to. Writes stdout if omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose (debug-level) tracing of the translation.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(level))
        .init();

    let exit_code = run(cli.input, cli.output);
    process::exit(exit_code);
}

/// Execute the translation.
///
/// Returns exit code: 0 = success with no diagnostics, 1 = translation
/// completed but reported assumption violations, 3 = I/O or parse error.
fn run(input: Option<PathBuf>, output: Option<PathBuf>) -> i32 {
    let program = match read_program(input.as_deref()) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            return 3;
        }
    };

    let mut translator = Translator::new();
    translator.translate_program(&program);

    if let Err(e) = write_output(output.as_deref(), &translator.dump()) {
        eprintln!("Error: {e}");
        return 3;
    }

    if !translator.skipped().is_empty() {
        let err = TranslateError::SkippedExtDefs(translator.skipped().len());
        eprintln!(
            "Note: {err} ({})",
            translator.skipped().join(", ")
        );
    }

    if translator.diagnostics().is_empty() {
        0
    } else {
        for diag in translator.diagnostics() {
            eprintln!("{diag}");
        }
        1
    }
}

fn read_program(path: Option<&std::path::Path>) -> Result<Program, CliError> {
    let text = match path {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Read {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            buf
        }
    };
    Ok(serde_json::from_str(&text)?)
}

fn write_output(path: Option<&std::path::Path>, dump: &str) -> Result<(), CliError> {
    match path {
        Some(path) => fs::write(path, dump).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => io::stdout()
            .write_all(dump.as_bytes())
            .map_err(|source| CliError::Write {
                path: PathBuf::from("<stdout>"),
                source,
            }),
    }
}
