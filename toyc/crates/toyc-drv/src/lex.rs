//! Lex command implementation.
//!
//! Reads one source, scans it with a single lexer and prints the token
//! list. A lexical error rejects the whole input, so nothing is printed
//! unless the scan reaches end of input.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use toyc_lex::{LexConfig, LexError, Lexer, State, Token};
use toyc_util::Level;

use crate::config::OutputFormat;
use crate::error::{Result, ToycError};

/// Arguments for the lex command.
#[derive(Debug, Clone)]
pub struct LexArgs {
    /// Source file; `None` or `-` reads standard input.
    pub input: Option<PathBuf>,
    /// Token list format.
    pub format: OutputFormat,
    /// Scanner configuration.
    pub config: LexConfig,
}

/// One token as written by `--format json`.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    lexeme: &'a str,
    line: u32,
    column: u32,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        let span = token.span();
        Self {
            kind: token.kind().as_str(),
            lexeme: token.lexeme(),
            line: span.line,
            column: span.column,
        }
    }
}

/// Execute the lex command, writing the token list to `out`.
pub fn run_lex(args: &LexArgs, out: &mut impl Write) -> Result<()> {
    let source = read_source(args.input.as_deref())?;
    debug!(
        bytes = source.len(),
        dot_policy = ?args.config.dot_policy(),
        "scanning source"
    );

    let tokens = Lexer::new(&source, &args.config).read_all()?;
    debug!(count = tokens.len(), "scan complete");

    match args.format {
        OutputFormat::Text => write_text(&tokens, out)?,
        OutputFormat::Json => write_json(&tokens, out)?,
    }
    out.flush()?;
    Ok(())
}

/// Reads the source as raw bytes.
///
/// Bytes that are not valid UTF-8 become U+FFFD, which lies outside the
/// language alphabet, so the lexer reports them as invalid characters at
/// their own position rather than failing the read.
fn read_source(input: Option<&Path>) -> Result<String> {
    let bytes = match input {
        Some(path) if path != Path::new("-") => {
            std::fs::read(path).map_err(|source| ToycError::Input {
                path: path.display().to_string(),
                source,
            })?
        }
        _ => {
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes)?;
            bytes
        }
    };

    match String::from_utf8(bytes) {
        Ok(source) => Ok(source),
        Err(err) => {
            debug!(valid_up_to = err.utf8_error().valid_up_to(), "source is not valid UTF-8");
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

fn write_text(tokens: &[Token], out: &mut impl Write) -> Result<()> {
    for token in tokens {
        writeln!(out, "{}", token)?;
    }
    Ok(())
}

fn write_json(tokens: &[Token], out: &mut impl Write) -> Result<()> {
    let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}

/// Writes `err` as a diagnostic, e.g. `error[E0001]: invalid character '@' at 1:5`.
pub fn report_error(err: &ToycError, out: &mut impl Write) -> io::Result<()> {
    match err {
        ToycError::Lex(lex_err) => {
            writeln!(out, "{}[{}]: {}", Level::Error, lex_err.code(), lex_err)?;
            if let Some(note) = note_for(lex_err) {
                writeln!(out, "{}: {}", Level::Note, note)?;
            }
        }
        other => writeln!(out, "{}: {}", Level::Error, other)?,
    }
    Ok(())
}

fn note_for(err: &LexError) -> Option<&'static str> {
    match err {
        LexError::UnexpectedCharacter {
            state: State::InIntegerDot,
            ..
        } => Some("a `.` after digits must be followed by a digit when dots are strict"),
        LexError::UnexpectedCharacter {
            state: State::Idle,
            ch: Some('$'),
            ..
        } => Some("`$` may only appear inside an identifier, after its first letter"),
        _ => None,
    }
}
