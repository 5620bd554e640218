use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use greek_normalize::{pronunciation_order, reorder_diacritics, standard_diacritics};
use greek_tokenizer::Tokenizer;
use greek_translit::{Script, TranslitOptions, Transliterator};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "greek-tr", author, version, about = "Transliterates and normalizes Ancient and Modern Greek")]
struct Cli {
    /// More logging on stderr (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate into the Latin alphabet
    Translit {
        /// Use the Modern Greek rules instead of the Polytonic ones
        #[arg(long)]
        modern: bool,

        #[command(flatten)]
        source: Source,
    },

    /// Split into letters and diphthongs
    Tokenize {
        /// One JSON report per line, with diagnostics
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        source: Source,
    },

    /// Replace spacing and legacy diacritics with combining ones
    Standardize {
        #[command(flatten)]
        source: Source,
    },

    /// Put combining diacritics in storage order
    Reorder {
        #[command(flatten)]
        source: Source,
    },

    /// Put diacritics in pronunciation order
    Pronounce {
        #[command(flatten)]
        source: Source,
    },
}

#[derive(Args)]
struct Source {
    /// Text to process. Read from --input or stdin when absent.
    text: Option<String>,

    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    input: Option<PathBuf>,
}

impl Source {
    fn read(&self) -> anyhow::Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.input {
            return fs::read_to_string(path).with_context(|| format!("reading {:?}", path));
        }

        let mut text = String::new();
        io::stdin().read_to_string(&mut text).context("reading stdin")?;
        Ok(text)
    }
}

#[derive(Serialize)]
struct TokenReport<'a> {
    input: &'a str,
    tokens: Vec<String>,
    diagnostics: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Translit { modern, source } => {
            let script = if modern { Script::Modern } else { Script::Polytonic };
            let mut translit = Transliterator::new(TranslitOptions {
                script,
                ..Default::default()
            });
            each_line(&source, &mut out, |line| Ok(translit.transliterate(line)))?;
        }
        Command::Tokenize { json, source } => {
            let mut tokenizer = Tokenizer::new();
            each_line(&source, &mut out, |line| {
                let analysis = tokenizer.analyze(line);
                if !json {
                    return Ok(analysis.texts().join(", "));
                }

                let report = TokenReport {
                    input: line,
                    tokens: analysis.texts(),
                    diagnostics: analysis.diagnostics.iter().map(ToString::to_string).collect(),
                };
                Ok(serde_json::to_string(&report)?)
            })?;
        }
        Command::Standardize { source } => {
            each_line(&source, &mut out, |line| Ok(standard_diacritics(line)))?;
        }
        Command::Reorder { source } => {
            each_line(&source, &mut out, |line| Ok(reorder_diacritics(line)))?;
        }
        Command::Pronounce { source } => {
            each_line(&source, &mut out, |line| Ok(pronunciation_order(line)))?;
        }
    }

    Ok(())
}

/// Runs `process` on every line of the input and prints each result.
fn each_line(
    source: &Source,
    out: &mut impl Write,
    mut process: impl FnMut(&str) -> anyhow::Result<String>,
) -> anyhow::Result<()> {
    let text = source.read()?;

    let mut lines = 0usize;
    for line in text.lines() {
        writeln!(out, "{}", process(line)?)?;
        lines += 1;
    }

    info!(lines, "processed input");
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::parse_from(["greek-tr", "-vv", "translit", "--modern", "αυτός"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Command::Translit { modern: true, source: Source { text: Some(ref t), input: None } } if t == "αυτός"
        ));

        let cli = Cli::parse_from(["greek-tr", "tokenize", "--json", "--input", "words.txt"]);
        assert!(matches!(
            cli.command,
            Command::Tokenize { json: true, source: Source { text: None, input: Some(_) } }
        ));
    }

    #[test]
    fn test_each_line() {
        let source = Source {
            text: Some("λόγος\nοἷαι".to_string()),
            input: None,
        };
        let mut out = Vec::new();
        let mut translit = Transliterator::default();
        each_line(&source, &mut out, |line| Ok(translit.transliterate(line))).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "lógos\nhoîai\n");
    }

    #[test]
    fn test_token_report_json() {
        let report = TokenReport {
            input: "υι",
            tokens: vec!["υι".to_string()],
            diagnostics: vec![],
        };
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"input":"υι","tokens":["υι"],"diagnostics":[]}"#
        );
    }
}
