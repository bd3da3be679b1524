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

/// Represents the **category of a lexical token**.
///
/// `TokenKind` is the closed vocabulary shared by the scanner and the
/// parser. The parser never looks inside a lexeme to decide what a token
/// is; it only ever compares kinds.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Scanner → TokenKind → Parser → Parse Tree
/// ```
///
/// Kind names render in upper snake case (`IDENTIFIER`, `NEWLINE`, ...)
/// both in diagnostics and in JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// A user-defined name: `x`, `total_count`.
    Identifier,

    /// A numeric literal: `42`, `3.14`.
    Number,

    /// A quoted string literal, quotes included: `"hi"`, `'hi'`.
    StringLiteral,

    /// The `=` operator.
    AssignmentOperator,

    /// Any of `+`, `-`, `*`, `/`, `%`.
    ArithmeticOperator,

    /// `if`, `elif`, `else`.
    ConditionalKeyword,

    /// `for`, `while`.
    LoopKeyword,

    /// `(`
    OpeningParenthesis,

    /// `)`
    ClosingParenthesis,

    /// `:`
    Colon,

    /// End of a source line. Every statement must be followed by one.
    Newline,

    /// Leading whitespace on a line indented deeper than the line before.
    Indent,

    /// A run of spaces or tabs inside a line.
    Whitespace,
}

impl TokenKind {
    /// The upper snake case name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::AssignmentOperator => "ASSIGNMENT_OPERATOR",
            TokenKind::ArithmeticOperator => "ARITHMETIC_OPERATOR",
            TokenKind::ConditionalKeyword => "CONDITIONAL_KEYWORD",
            TokenKind::LoopKeyword => "LOOP_KEYWORD",
            TokenKind::OpeningParenthesis => "OPENING_PARENTHESIS",
            TokenKind::ClosingParenthesis => "CLOSING_PARENTHESIS",
            TokenKind::Colon => "COLON",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Whitespace => "WHITESPACE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents a **single lexical token** handed to the parser.
///
/// A `Token` is an immutable `(kind, lexeme)` pair plus the place in the
/// source it came from:
///
/// ```text
/// x   →  { kind: IDENTIFIER,          lexeme: "x", span: 1:1 }
/// =   →  { kind: ASSIGNMENT_OPERATOR, lexeme: "=", span: 1:3 }
/// 42  →  { kind: NUMBER,              lexeme: "42", span: 1:5 }
/// ```
///
/// The span is only used to point diagnostics at source text. Tokens built
/// with [`Token::new`] get a default span so tests and other producers can
/// feed the parser without a scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub lexeme: String,

    /// Where the token starts in the source.
    pub span: Span,
}

impl Token {
    /// Builds a token with no meaningful source location.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span: Span::default(),
        }
    }

    /// Builds a token located at `span`.
    pub fn at(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    /// Formats a token the way diagnostics quote it: `KIND: lexeme`.
    ///
    /// Control characters in the lexeme are escaped so a `NEWLINE` token
    /// reads as `NEWLINE: \n` instead of breaking the message in two.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.lexeme.escape_debug())
    }
}
