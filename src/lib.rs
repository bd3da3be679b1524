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

//! # Sapling
//!
//! A recursive-descent parser that turns classified tokens into a concrete
//! syntax tree for a small imperative language: assignments, conditionals,
//! loops and arithmetic expressions.
//!
//! ```text
//! Source → Scanner → Tokens → Parser → Parse Tree
//!                                   ↘ Diagnostics
//! ```
//!
//! The parser keeps going after an error, collecting diagnostics as it
//! goes, but the outcome is all or nothing: any diagnostic means no tree.
//!
//! ```no_run
//! let tokens = sapling::tokenize("x = 1 + 2\n")?;
//! let tree = sapling::parse(tokens)?;
//! print!("{tree}");
//! # Ok::<(), sapling::Error>(())
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod tree;

pub use config::{Config, ParserConfig, ScannerConfig};
pub use error::{ConfigError, Diagnostic, Error, ParseFailure, Result, ScanError};
pub use lexer::{tokenize, tokenize_with, Token, TokenKind};
pub use parser::{parse, Parser};
pub use span::Span;
pub use tree::{Node, ParseTree};

/// Scans and parses `source` in one go.
pub fn parse_source(source: &str, config: &Config) -> Result<ParseTree> {
    let tokens = tokenize_with(source, &config.scanner)?;
    let tree = Parser::with_config(tokens, config.parser).parse()?;
    Ok(tree)
}
