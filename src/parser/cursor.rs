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

use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use std::fmt;

/// The token under the cursor.
///
/// Running past the last token is not an error; it yields `EndOfInput`,
/// which grammar routines must check for themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Current<'t> {
    Token(&'t Token),
    EndOfInput,
}

impl Current<'_> {
    /// Kind name for diagnostics: `NUMBER`, or `end of input`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Current::Token(token) => token.kind.name(),
            Current::EndOfInput => "end of input",
        }
    }
}

impl fmt::Display for Current<'_> {
    /// `KIND: lexeme`, or `end of input`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Current::Token(token) => write!(f, "{token}"),
            Current::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Result of looking at the current token's kind without consuming it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookahead {
    Kind(TokenKind),
    EndOfInput,
}

/// Forward-only position over the token stream.
///
/// The cursor owns its tokens and knows nothing about the grammar. The
/// index never decreases; there is no rewind.
#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    index: usize,
}

impl TokenCursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    pub fn current(&self) -> Current<'_> {
        self.tokens
            .get(self.index)
            .map_or(Current::EndOfInput, Current::Token)
    }

    pub fn peek_kind(&self) -> Lookahead {
        match self.current() {
            Current::Token(token) => Lookahead::Kind(token.kind),
            Current::EndOfInput => Lookahead::EndOfInput,
        }
    }

    /// True iff a current token exists and has this kind.
    pub fn matches(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Lookahead::Kind(kind)
    }

    /// Moves to the next token. At end of input this does nothing.
    pub fn advance(&mut self) {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.index >= self.tokens.len()
    }

    /// Lexeme of the current token.
    pub fn lexeme(&self) -> Option<&str> {
        match self.current() {
            Current::Token(token) => Some(token.lexeme.as_str()),
            Current::EndOfInput => None,
        }
    }

    /// Where the current token starts; at end of input, where the last
    /// token started.
    pub fn span(&self) -> Option<Span> {
        match self.current() {
            Current::Token(token) => Some(token.span),
            Current::EndOfInput => self.tokens.last().map(|t| t.span),
        }
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}
