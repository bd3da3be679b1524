/*
 * ==========================================================================
 * SAPLING - Parse Trees from Tokens
 * ==========================================================================
 *
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

use crate::span::Span;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for the scan → parse pipeline and the CLI around it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Parse(#[from] ParseFailure),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to serialize parse tree: {0}")]
    Json(#[from] serde_json::Error),
}

/// Scanner failures. Scanning stops at the first one.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("unexpected character '{}'", .ch.escape_debug())]
    UnexpectedCharacter { ch: char, span: Span },

    #[error("unterminated string literal")]
    UnterminatedString { span: Span },

    #[error("invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl ScanError {
    pub fn span(&self) -> Option<Span> {
        match self {
            ScanError::UnexpectedCharacter { span, .. } | ScanError::UnterminatedString { span } => {
                Some(*span)
            }
            ScanError::Pattern(_) => None,
        }
    }
}

/// One entry of the parser's error log.
///
/// Displays as the bare message; the span, when known, is where the
/// offending token starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub message: String,
    pub span: Option<Span>,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Returned by `parse` whenever the error log is non-empty.
///
/// Carries every diagnostic in the order it was logged. Partial trees are
/// never exposed through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parsing failed with {} error(s)", .diagnostics.len())]
pub struct ParseFailure {
    diagnostics: Vec<Diagnostic>,
}

impl ParseFailure {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The log as plain strings.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.message.clone()).collect()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// A located, coded message ready for [`DiagnosticPrinter`].
///
/// [`DiagnosticPrinter`]: crate::diagnostics::DiagnosticPrinter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Stable error code (S0001, P0001, …)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Primary source location, if one is known
    pub span: Option<Span>,

    /// Optional note / help text
    pub help: Option<String>,
}

impl Report {
    pub fn new(code: &'static str, message: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            help: None,
        }
    }

    /// Attach a help message to the report (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl From<&ScanError> for Report {
    fn from(err: &ScanError) -> Self {
        match err {
            ScanError::UnexpectedCharacter { .. } => {
                Report::new("S0001", err.to_string(), err.span())
            }
            ScanError::UnterminatedString { .. } => Report::new("S0002", err.to_string(), err.span())
                .with_help("strings must close with a matching quote on the same line"),
            ScanError::Pattern(_) => Report::new("S0000", err.to_string(), None),
        }
    }
}

impl From<&Diagnostic> for Report {
    fn from(diagnostic: &Diagnostic) -> Self {
        Report::new("P0001", diagnostic.message.clone(), diagnostic.span)
    }
}
