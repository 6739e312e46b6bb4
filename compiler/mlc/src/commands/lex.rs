//! `mlc lex`: stream a file through the lexer and dump its tokens.

use std::fs::File;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use ml_lexer::{LexerConfig, ReadSource, StreamError, TokenStream, DEFAULT_CHUNK_SIZE};

use crate::error::CliError;
use crate::report::SourceText;

/// Options of `mlc lex`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOptions {
    pub path: PathBuf,
    /// Bytes read from the file per chunk.
    pub chunk_size: usize,
    /// Include comment tokens in the dump.
    pub comments: bool,
    /// Logical file name for positions; defaults to the path.
    pub file_name: Option<String>,
    pub color: bool,
}

impl LexOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LexOptions {
            path: path.into(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            comments: true,
            file_name: None,
            color: std::io::stderr().is_terminal(),
        }
    }
}

/// Parse the arguments following `lex`.
///
/// Flags may appear before or after the path.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, CliError> {
    let mut path = None;
    let mut chunk_size = None;
    let mut comments = true;
    let mut file_name = None;
    let mut color = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--chunk" => {
                let value = iter.next().ok_or(CliError::MissingValue("--chunk"))?;
                chunk_size = Some(parse_chunk_size(value)?);
            }
            "--file-name" => {
                let value = iter.next().ok_or(CliError::MissingValue("--file-name"))?;
                file_name = Some(value.clone());
            }
            "--no-comments" => comments = false,
            "--no-color" => color = Some(false),
            _ => {
                if let Some(value) = arg.strip_prefix("--chunk=") {
                    chunk_size = Some(parse_chunk_size(value)?);
                } else if let Some(value) = arg.strip_prefix("--file-name=") {
                    file_name = Some(value.to_owned());
                } else if arg.starts_with('-') {
                    return Err(CliError::UnknownOption(arg.clone()));
                } else if path.is_none() {
                    path = Some(arg.clone());
                } else {
                    return Err(CliError::UnknownOption(arg.clone()));
                }
            }
        }
    }

    let mut options = LexOptions::new(path.ok_or(CliError::MissingPath)?);
    if let Some(size) = chunk_size {
        options.chunk_size = size;
    }
    options.comments = comments;
    options.file_name = file_name;
    if let Some(color) = color {
        options.color = color;
    }
    Ok(options)
}

fn parse_chunk_size(value: &str) -> Result<usize, CliError> {
    match value.parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(CliError::InvalidChunkSize(value.to_owned())),
    }
}

/// Counts from one `mlc lex` run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexSummary {
    pub tokens: usize,
    pub warnings: usize,
    /// Lexing stopped on an error.
    pub failed: bool,
}

/// Lex `options.path`, writing tokens to `out` and diagnostics to `diag`.
#[tracing::instrument(level = "debug", skip_all, fields(path = %options.path.display()))]
pub fn lex_file(
    options: &LexOptions,
    out: &mut impl Write,
    diag: &mut impl Write,
) -> Result<LexSummary, CliError> {
    let file = File::open(&options.path).map_err(|e| CliError::read(&options.path, e))?;
    let name = match &options.file_name {
        Some(name) => name.clone(),
        None => options.path.display().to_string(),
    };
    let config = LexerConfig::new().file_name(name.as_str());
    let mut stream =
        TokenStream::new(config, ReadSource::with_chunk_size(file, options.chunk_size));
    if !options.comments {
        stream = stream.skip_comments();
    }

    writeln!(out, "Tokens for '{name}':")?;
    let mut summary = LexSummary::default();
    let mut error = None;
    for item in stream.by_ref() {
        match item {
            Ok(token) => {
                summary.tokens += 1;
                writeln!(out, "  {:?} @ {}", token.kind, token.span)?;
            }
            Err(StreamError::Lex(err)) => error = Some(err),
            Err(StreamError::Io(err)) => return Err(CliError::read(&options.path, err)),
        }
    }
    writeln!(out, "({} tokens)", summary.tokens)?;

    let warnings = stream.into_lexer().take_warnings();
    summary.warnings = warnings.len();
    summary.failed = error.is_some();
    tracing::debug!(
        tokens = summary.tokens,
        warnings = summary.warnings,
        failed = summary.failed,
        "lex finished"
    );
    if warnings.is_empty() && error.is_none() {
        return Ok(summary);
    }

    // Rendering needs the whole text.
    let bytes = std::fs::read(&options.path).map_err(|e| CliError::read(&options.path, e))?;
    let mut source = SourceText::new(name, &bytes).with_color(options.color);
    for warning in &warnings {
        let report = source.warning_report(warning);
        source.write(&report, &mut *diag)?;
    }
    if let Some(err) = &error {
        let report = source.error_report(err);
        source.write(&report, &mut *diag)?;
    }
    Ok(summary)
}

#[cfg(test)]
mod tests;
