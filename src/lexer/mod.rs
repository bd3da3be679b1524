/*
 * ==========================================================================
 * SAPLING - Parse Trees from Tokens
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for the SAPLING scanner.
 *
 * This module wires together:
 *   - The token vocabulary shared with the parser
 *   - Keyword classification
 *   - The regex-driven, line-oriented scanner
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

/// `TokenKind` and `Token`.
pub mod token;

/// Reserved word lookup.
pub mod keywords;

/// Source text → token stream.
pub mod scanner;

pub use scanner::Scanner;
pub use token::{Token, TokenKind};

use crate::config::ScannerConfig;
use crate::error::ScanError;

/// Scans `source` with the default scanner configuration.
///
/// ```text
/// "x = 1\n"  →  IDENTIFIER, ASSIGNMENT_OPERATOR, NUMBER, NEWLINE
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ScanError> {
    tokenize_with(source, &ScannerConfig::default())
}

/// Scans `source` with an explicit configuration.
pub fn tokenize_with(source: &str, config: &ScannerConfig) -> Result<Vec<Token>, ScanError> {
    Scanner::new(source, *config)?.scan_tokens()
}
