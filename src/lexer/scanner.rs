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

use crate::config::ScannerConfig;
use crate::error::ScanError;
use crate::lexer::keywords::keyword_kind;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use regex::{Captures, Regex};
use tracing::{debug, trace};

/// One alternative per lexical shape, tried left to right at the start of
/// the unscanned remainder of a line.
///
/// A lone `quote` only matches once the full `string` alternative failed,
/// which is exactly the unterminated-string case.
const TOKEN_PATTERN: &str = r##"^(?:(?P<whitespace>[ \t]+)|(?P<comment>#.*)|(?P<number>[0-9]+(?:\.[0-9]+)?)|(?P<string>"[^"]*"|'[^']*')|(?P<quote>["'])|(?P<word>[A-Za-z_][A-Za-z0-9_]*)|(?P<assign>=)|(?P<arith>[-+*/%])|(?P<open>\()|(?P<close>\))|(?P<colon>:))"##;

/// Capture groups that map straight onto a token kind.
const SIMPLE_GROUPS: [(&str, TokenKind); 7] = [
    ("number", TokenKind::Number),
    ("string", TokenKind::StringLiteral),
    ("assign", TokenKind::AssignmentOperator),
    ("arith", TokenKind::ArithmeticOperator),
    ("open", TokenKind::OpeningParenthesis),
    ("close", TokenKind::ClosingParenthesis),
    ("colon", TokenKind::Colon),
];

/// What the scanner does with one regex match.
enum Piece {
    Emit(TokenKind),
    Skip,
    EndOfLine,
    Unterminated,
}

/// Line-oriented scanner producing the parser's token vocabulary.
///
/// Each source line is handled on its own:
/// - Blank and comment-only lines produce nothing at all
/// - Leading whitespace becomes an `INDENT` token only when the line sits
///   deeper than the previous non-blank line
/// - The rest of the line is matched against [`TOKEN_PATTERN`]
/// - Every non-blank line ends with a `NEWLINE` token, including a final
///   line that has no `\n` in the source
pub struct Scanner<'src> {
    source: &'src str,
    config: ScannerConfig,
    pattern: Regex,
    line: usize,
    indent_width: usize,
    tokens: Vec<Token>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner over `source`.
    ///
    /// # Errors
    /// Fails only if the token pattern cannot be compiled.
    pub fn new(source: &'src str, config: ScannerConfig) -> Result<Self, ScanError> {
        Ok(Self {
            source,
            config,
            pattern: Regex::new(TOKEN_PATTERN)?,
            line: 1,
            indent_width: 0,
            tokens: Vec::new(),
        })
    }

    /// Performs complete lexical analysis over the source.
    ///
    /// # Errors
    /// - [`ScanError::UnexpectedCharacter`] for a character no token starts with
    /// - [`ScanError::UnterminatedString`] for a quote with no closing partner
    ///   on the same line
    pub fn scan_tokens(mut self) -> Result<Vec<Token>, ScanError> {
        for (index, raw) in self.source.split('\n').enumerate() {
            self.line = index + 1;
            let text = raw.strip_suffix('\r').unwrap_or(raw);
            self.scan_line(text)?;
        }

        debug!(tokens = self.tokens.len(), lines = self.line, "scan complete");
        Ok(self.tokens)
    }

    fn scan_line(&mut self, text: &str) -> Result<(), ScanError> {
        let body = text.trim_start_matches([' ', '\t']);
        if body.is_empty() || body.starts_with('#') {
            return Ok(());
        }

        let leading = &text[..text.len() - body.len()];
        self.indentation(leading);

        let mut offset = leading.len();
        while offset < text.len() {
            let rest = &text[offset..];
            let column = text[..offset].chars().count();

            let Some(caps) = self.pattern.captures(rest) else {
                return Err(ScanError::UnexpectedCharacter {
                    ch: rest.chars().next().unwrap_or_default(),
                    span: Span::new(self.line, column),
                });
            };
            let lexeme = caps.get(0).map_or("", |m| m.as_str());

            match self.classify(&caps, lexeme) {
                Piece::Emit(kind) => self.push(kind, lexeme, column),
                Piece::Skip => {}
                Piece::EndOfLine => break,
                Piece::Unterminated => {
                    return Err(ScanError::UnterminatedString {
                        span: Span::new(self.line, column),
                    });
                }
            }

            offset += lexeme.len();
        }

        let end = text.chars().count();
        self.push(TokenKind::Newline, "\n", end);
        Ok(())
    }

    fn classify(&self, caps: &Captures<'_>, lexeme: &str) -> Piece {
        if caps.name("whitespace").is_some() {
            return if self.config.emit_whitespace {
                Piece::Emit(TokenKind::Whitespace)
            } else {
                Piece::Skip
            };
        }
        if caps.name("comment").is_some() {
            return Piece::EndOfLine;
        }
        if caps.name("quote").is_some() {
            return Piece::Unterminated;
        }
        if caps.name("word").is_some() {
            return Piece::Emit(keyword_kind(lexeme).unwrap_or(TokenKind::Identifier));
        }

        SIMPLE_GROUPS
            .iter()
            .find(|(group, _)| caps.name(group).is_some())
            .map_or(Piece::Skip, |(_, kind)| Piece::Emit(*kind))
    }

    /// Emits `INDENT` when `leading` is wider than the last non-blank line.
    ///
    /// There is no `DEDENT` in the vocabulary, so shallower lines only reset
    /// the reference width.
    fn indentation(&mut self, leading: &str) {
        let width: usize = leading
            .chars()
            .map(|c| if c == '\t' { self.config.tab_width } else { 1 })
            .sum();

        if width > self.indent_width {
            trace!(line = self.line, width, "indent");
            self.push(TokenKind::Indent, leading, 0);
        }
        self.indent_width = width;
    }

    fn push(&mut self, kind: TokenKind, lexeme: &str, column: usize) {
        self.tokens
            .push(Token::at(kind, lexeme, Span::new(self.line, column)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Scanner::new(source, ScannerConfig::default())
            .and_then(Scanner::scan_tokens)
            .expect("scan failed")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn token_pattern_compiles() {
        assert!(Regex::new(TOKEN_PATTERN).is_ok());
    }

    #[test]
    fn trailing_comment_ends_the_line() {
        use TokenKind::*;
        assert_eq!(
            kinds("x = 1 # set x\n"),
            vec![Identifier, AssignmentOperator, Number, Newline]
        );
    }

    #[test]
    fn crlf_line_endings_are_one_newline() {
        use TokenKind::*;
        assert_eq!(
            kinds("a = 1\r\nb = 2\r\n"),
            vec![
                Identifier, AssignmentOperator, Number, Newline,
                Identifier, AssignmentOperator, Number, Newline,
            ]
        );
    }

    #[test]
    fn tabs_count_as_tab_width() {
        let config = ScannerConfig {
            tab_width: 2,
            ..ScannerConfig::default()
        };
        let tokens = Scanner::new("for i:\n  a = 1\n\tb = 2\n", config)
            .and_then(Scanner::scan_tokens)
            .expect("scan failed");

        let indents = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Indent)
            .count();
        assert_eq!(indents, 1);
    }

    #[test]
    fn newline_span_points_past_the_last_character() {
        let tokens = Scanner::new("ab = 12", ScannerConfig::default())
            .and_then(Scanner::scan_tokens)
            .expect("scan failed");

        let newline = tokens.last().expect("no tokens");
        assert_eq!(newline.kind, TokenKind::Newline);
        assert_eq!(newline.span, Span::new(1, 7));
    }
}
