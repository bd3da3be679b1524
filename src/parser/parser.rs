/*
 * ==========================================================================
 * SAPLING - Parse Trees from Tokens
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public `parse()`
 * driver that turns a token stream into a parse tree, or into the list of
 * diagnostics explaining why it could not.
 *
 * The grammar itself is split across:
 * - `statements.rs`   → program, statement lists, statements, blocks
 * - `expressions.rs`  → expression, term, factor, logical placeholder
 * - `helpers.rs`      → expect, whitespace skipping, error logging
 * - `cursor.rs`       → the forward-only token cursor
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

use crate::config::ParserConfig;
use crate::error::{Diagnostic, ParseFailure};
use crate::lexer::token::Token;
use crate::parser::cursor::TokenCursor;
use crate::tree::ParseTree;
use tracing::debug;

/// The recursive-descent parser.
///
/// One instance parses one token stream and is consumed by [`Parser::parse`].
/// It maintains:
/// - The token cursor shared by every grammar routine
/// - The append-only error log
/// - The current nesting depth, checked against `config.max_depth`
///
/// The grammar routines live in further `impl Parser` blocks
/// (`statements`, `expressions`, `helpers`).
pub struct Parser {
    pub(crate) cursor: TokenCursor,
    pub(crate) errors: Vec<Diagnostic>,
    pub(crate) config: ParserConfig,
    pub(crate) depth: usize,
}

/// Public entry point for the parsing phase.
///
/// ```text
/// Source → Scanner → Tokens → Parser → Parse Tree
/// ```
///
/// # Returns
/// - `Ok(tree)` when the error log stayed empty
/// - `Err(failure)` with every diagnostic otherwise; no partial tree is
///   exposed
pub fn parse(tokens: Vec<Token>) -> Result<ParseTree, ParseFailure> {
    Parser::new(tokens).parse()
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_config(tokens, ParserConfig::default())
    }

    pub fn with_config(tokens: Vec<Token>, config: ParserConfig) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            errors: Vec::new(),
            config,
            depth: 0,
        }
    }

    /// Runs the start rule once and applies the all-or-nothing contract.
    pub fn parse(self) -> Result<ParseTree, ParseFailure> {
        let (tree, errors) = self.run();

        if errors.is_empty() {
            Ok(tree)
        } else {
            Err(ParseFailure::new(errors))
        }
    }

    /// Runs the start rule and returns whatever was built alongside the log.
    ///
    /// The tree may be partial when the log is non-empty.
    pub(crate) fn run(mut self) -> (ParseTree, Vec<Diagnostic>) {
        debug!(tokens = self.cursor.token_count(), "parse started");

        let root = self.program();

        debug!(
            consumed = self.cursor.position(),
            diagnostics = self.errors.len(),
            "parse finished"
        );
        (ParseTree::new(root), self.errors)
    }
}
