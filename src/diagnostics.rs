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

use crate::error::Report;
use crate::span::Span;
use std::fmt::Write;

/// Renders compiler-style diagnostics for scanner and parser reports.
///
/// This printer:
/// - Formats reports with file/line/column information
/// - Displays the offending source line
/// - Highlights the error position using a caret (`^`)
/// - Optionally shows a follow-up hint
///
/// Reports without a span (hand-built tokens, end of input on an empty
/// stream) render as the header line only.
pub struct DiagnosticPrinter {
    /// Full source text of the file being parsed.
    source: String,

    /// Name of the source file, for display only.
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders a report to a string.
    ///
    /// # Output Example
    /// ```text
    /// error[P0001]: expected 'NEWLINE', found IDENTIFIER: y
    ///   --> demo.sap:1:7
    ///    |
    ///   1 | x = 1 y
    ///    |       ^
    /// ```
    pub fn render(&self, report: &Report) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "error[{}]: {}", report.code, report.message);

        if let Some(Span { line, column }) = report.span {
            // Lines are 1-indexed in spans, vectors are 0-indexed.
            let src_line = self.source.lines().nth(line.saturating_sub(1)).unwrap_or("");

            let _ = writeln!(out, "  --> {}:{}:{}", self.file_name, line, column + 1);
            let _ = writeln!(out, "   |");
            let _ = writeln!(out, "{:>3} | {}", line, src_line);
            let _ = writeln!(out, "   | {}^", " ".repeat(column));
        }

        if let Some(help) = &report.help {
            let _ = writeln!(out, "\nhelp: {}", help);
        }

        out
    }

    /// Prints a rendered report to stderr.
    pub fn print(&self, report: &Report) {
        eprint!("{}", self.render(report));
    }
}
