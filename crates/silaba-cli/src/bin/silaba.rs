// silaba: Separate Portuguese words into syllables.
//
// Words come from the command line or, when none are given, from stdin
// (one per line).
//
// Usage:
//   silaba [-s SEP] [-f text|json|pattern|explain] [--strict] [-v...] [WORD...]

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use silaba_cli::{OutputFormat, RenderOptions};

/// Separate Portuguese words into syllables.
#[derive(Debug, Parser)]
#[command(name = "silaba", version, about)]
struct Cli {
    /// Words to separate; read from stdin, one per line, when omitted
    #[arg(value_name = "WORD")]
    words: Vec<String>,

    /// Separator placed between syllables in text output
    #[arg(short, long, default_value = "-")]
    separator: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Reject words containing anything other than letters
    #[arg(long)]
    strict: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> RenderOptions {
        RenderOptions {
            separator: self.separator.clone(),
            format: self.format,
            strict: self.strict,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    silaba_cli::init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    log::debug!("arguments: {cli:?}");
    let options = cli.options();

    let words = if cli.words.is_empty() {
        silaba_cli::read_words(io::stdin().lock()).context("failed to read words from stdin")?
    } else {
        cli.words
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    silaba_cli::render(&words, &options, &mut out)?;
    out.flush()?;
    Ok(())
}
