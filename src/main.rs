/*
 * ==========================================================================
 * SAPLING - Parse Trees from Tokens
 * ==========================================================================
 *
 * Command-line driver: scan a file, parse it, print the tree.
 *
 * Exit codes:
 *   0  parsed cleanly
 *   1  scan or parse diagnostics (printed to stderr)
 *   2  could not read the input or the configuration
 *
 * --------------------------------------------------------------------------
 * Author:   Sam Wilcox
 * Github:   https://github.com/samwilcox/sapling
 *
 * License:
 * This file is part of the SAPLING parser project.
 *
 * SAPLING is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use clap::{Parser as _, ValueEnum};
use sapling::diagnostics::DiagnosticPrinter;
use sapling::error::Report;
use sapling::{tokenize_with, Config, Error, Parser, Token};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, clap::Parser)]
#[command(
    name = "sapling",
    version,
    about = "Parse a source file into a concrete syntax tree."
)]
struct Cli {
    /// The source file to parse.
    file: PathBuf,

    /// Output format for the parse tree.
    #[arg(long, value_enum, default_value_t = Format::Tree)]
    format: Format,

    /// Print the token stream instead of parsing.
    #[arg(long)]
    tokens: bool,

    /// JSON configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Emit WHITESPACE tokens inside lines.
    #[arg(long)]
    emit_whitespace: bool,

    /// Deepest allowed nesting of blocks and parentheses.
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Tree,
    Json,
}

/// Installs the stderr subscriber. `RUST_LOG` overrides the default filter.
fn init_logging(verbose: bool) {
    let default = if verbose { "sapling=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config, Error> {
    let mut config = match &cli.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };

    if cli.emit_whitespace {
        config.scanner.emit_whitespace = true;
    }
    if let Some(max_depth) = cli.max_depth {
        config.parser.max_depth = max_depth;
    }
    config.validate()?;

    debug!(?config, "configuration loaded");
    Ok(config)
}

/// Diagnostics are reported here and turned into exit code 1; only I/O,
/// configuration and serialization problems come back as `Err`.
fn run(cli: &Cli) -> Result<ExitCode, Error> {
    let config = load_config(cli)?;
    let source = fs::read_to_string(&cli.file).map_err(|source| Error::Io {
        path: cli.file.clone(),
        source,
    })?;
    let printer = DiagnosticPrinter::new(cli.file.display().to_string(), source.as_str());

    let tokens = match tokenize_with(&source, &config.scanner) {
        Ok(tokens) => tokens,
        Err(err) => {
            printer.print(&Report::from(&err));
            return Ok(ExitCode::from(1));
        }
    };

    if cli.tokens {
        print_tokens(&tokens);
        return Ok(ExitCode::SUCCESS);
    }

    match Parser::with_config(tokens, config.parser).parse() {
        Ok(tree) => {
            info!(file = %cli.file.display(), "parsed");
            match cli.format {
                Format::Tree => print!("{tree}"),
                Format::Json => println!("{}", tree.to_json()?),
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            for diagnostic in failure.diagnostics() {
                printer.print(&Report::from(diagnostic));
            }
            eprintln!("{failure}");
            Ok(ExitCode::from(1))
        }
    }
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!(
            "{:>4}:{:<4} {:<20} {:?}",
            token.span.line,
            token.span.column + 1,
            token.kind.name(),
            token.lexeme
        );
    }
}
