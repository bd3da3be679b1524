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

use crate::error::Diagnostic;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use crate::tree::Node;
use tracing::{trace, warn};

impl Parser {
    /// Appends a diagnostic located at the current token.
    ///
    /// Logging never stops the parse; the caller decides what happens next.
    pub(crate) fn report(&mut self, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(message, self.cursor.span());
        trace!(position = self.cursor.position(), message = %diagnostic, "diagnostic");
        self.errors.push(diagnostic);
    }

    /// The current token as diagnostics quote it: `KIND: lexeme` or
    /// `end of input`.
    pub(crate) fn found(&self) -> String {
        self.cursor.current().to_string()
    }

    /// Consumes a token of `kind`, or logs what was found instead.
    ///
    /// On a mismatch the cursor does **not** move. This is the only
    /// synchronization primitive; callers re-check state afterwards.
    pub(crate) fn expect(&mut self, kind: TokenKind) {
        if self.cursor.matches(kind) {
            self.cursor.advance();
        } else {
            let found = self.found();
            self.report(format!("expected '{kind}', found {found}"));
        }
    }

    /// Builds a leaf from the current token's lexeme and consumes it.
    ///
    /// Callers have already matched the token's kind.
    pub(crate) fn terminal(&mut self, kind: &str) -> Node {
        let node = Node::with_value(kind, self.cursor.lexeme().map(str::to_owned));
        self.cursor.advance();
        node
    }

    /// Skips a run of `WHITESPACE` tokens.
    pub(crate) fn skip_whitespace(&mut self) {
        while self.cursor.matches(TokenKind::Whitespace) {
            self.cursor.advance();
        }
    }

    /// Forced one-token advance after an unrecognized construct.
    pub(crate) fn desynchronize(&mut self) {
        trace!(position = self.cursor.position(), skipped = %self.cursor.current(), "desynchronize");
        self.cursor.advance();
    }

    pub(crate) fn newline(&mut self) {
        self.expect(TokenKind::Newline);
    }

    pub(crate) fn indent(&mut self) {
        self.expect(TokenKind::Indent);
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// Past `max_depth` the rule is not entered at all: one diagnostic is
    /// logged and the construct counts as absent.
    pub(crate) fn nested(&mut self, rule: fn(&mut Parser) -> Option<Node>) -> Option<Node> {
        if self.depth >= self.config.max_depth {
            warn!(max_depth = self.config.max_depth, "nesting limit reached");
            let limit = self.config.max_depth;
            self.report(format!("maximum nesting depth of {limit} exceeded"));
            return None;
        }

        self.depth += 1;
        let node = rule(self);
        self.depth -= 1;
        node
    }
}
