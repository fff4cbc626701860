// silaba-cli: input, rendering and logging for the `silaba` tool.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use silaba_pt::{BoundaryRule, Syllabification, WordError, separate_checked};

/// Errors reported by the command-line tool.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// `--strict` was given and a word contains something other than letters.
    #[error("invalid word {word:?}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },

    #[error("i/o error")]
    Io(#[from] io::Error),

    #[error("failed to write JSON")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// How each word is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// The word with the separator between syllables
    #[default]
    Text,
    /// A JSON array of `{"word", "syllables"}` objects
    Json,
    /// The word followed by its break pattern
    Pattern,
    /// Syllables plus the rule behind every break
    Explain,
}

/// Rendering configuration, built from the command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Inserted between syllables in text and explain output.
    pub separator: String,
    pub format: OutputFormat,
    /// Reject words that contain anything but letters.
    pub strict: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            separator: "-".to_string(),
            format: OutputFormat::Text,
            strict: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Read one word per line: lines are trimmed and blank lines skipped.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>, CliError> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    log::debug!("read {} word(s) from input", words.len());
    Ok(words)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct WordEntry<'a> {
    word: &'a str,
    syllables: Vec<&'a str>,
}

/// Separate `words` and write them to `out` in the configured format.
///
/// In strict mode every word is validated before anything is written, so a
/// bad word produces no partial output.
pub fn render<W: Write>(
    words: &[String],
    options: &RenderOptions,
    out: &mut W,
) -> Result<(), CliError> {
    log::info!(
        "separating {} word(s) as {:?}",
        words.len(),
        options.format
    );

    if options.strict {
        for word in words {
            separate_checked(word).map_err(|source| CliError::InvalidWord {
                word: word.clone(),
                source,
            })?;
        }
    }

    match options.format {
        OutputFormat::Text => {
            for word in words {
                let s = Syllabification::of(word);
                writeln!(out, "{}", s.syllables().join(options.separator.as_str()))?;
            }
        }
        OutputFormat::Pattern => {
            for word in words {
                let s = Syllabification::of(word);
                writeln!(out, "{} {}", word, s.pattern())?;
            }
        }
        OutputFormat::Explain => {
            for word in words {
                write_explain(&Syllabification::of(word), &options.separator, out)?;
            }
        }
        OutputFormat::Json => {
            let entries: Vec<WordEntry<'_>> = words
                .iter()
                .map(|word| WordEntry {
                    word,
                    syllables: Syllabification::of(word).into_syllables(),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// One header line with the separated word, one indented line per break,
/// then the nucleus shapes and the rule applied to every consonant run.
fn write_explain<W: Write>(
    s: &Syllabification<'_>,
    separator: &str,
    out: &mut W,
) -> Result<(), CliError> {
    writeln!(out, "{}: {}", s.word(), s.syllables().join(separator))?;
    for boundary in s.boundaries() {
        let kind = match boundary.rule {
            BoundaryRule::Consonant(_) => "consonant",
            BoundaryRule::Hiatus(_) => "hiatus",
        };
        writeln!(out, "  @{} {} {}", boundary.offset, kind, boundary.rule)?;
    }
    if !s.nuclei().is_empty() {
        let kinds: Vec<&str> = s.nuclei().iter().map(|k| k.name()).collect();
        writeln!(out, "  nuclei: {}", kinds.join(", "))?;
    }
    if !s.onset_rules().is_empty() {
        let rules: Vec<&str> = s.onset_rules().iter().map(|r| r.name()).collect();
        writeln!(out, "  runs: {}", rules.join(", "))?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Default log filter for a `-v` count; `RUST_LOG` still takes precedence.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install `env_logger` on stderr.
pub fn init_logging(verbose: u8) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level(verbose)))
        .init();
}
