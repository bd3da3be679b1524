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
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * Expression grammar, two levels deep:
 *
 *   expression → ws? term   ( ADDITIVE_OP       term   )*
 *   term       → ws? factor ( MULTIPLICATIVE_OP factor )*
 *   factor     → ws? ( NUMBER | IDENTIFIER | STRING_LITERAL
 *                    | '(' expression ')' | logical_expression )
 *
 * Both operator classes are ARITHMETIC_OPERATOR tokens; the lexeme picks
 * the level. Operators are kept as `arithmetic_operator` children between
 * their operands, so chains stay flat and read left to right.
 *
 * Whitespace is skipped only in front of a unit, never in front of an
 * operator.
 *
 * ==========================================================================
 */

use crate::lexer::token::TokenKind;
use crate::parser::cursor::{Current, Lookahead};
use crate::parser::parser::Parser;
use crate::tree::Node;
use tracing::trace;

/// Which level of the expression grammar chains an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OperatorLevel {
    Additive,
    Multiplicative,
}

impl OperatorLevel {
    fn of(lexeme: &str) -> Self {
        match lexeme {
            "+" | "-" => OperatorLevel::Additive,
            _ => OperatorLevel::Multiplicative,
        }
    }
}

impl Parser {
    /// expression → ws? term ( ADDITIVE_OP term )*
    pub(crate) fn expression(&mut self) -> Option<Node> {
        self.skip_whitespace();
        trace!(at = %self.cursor.current(), "expression");

        let Some(first) = self.term() else {
            let found = self.found();
            self.report(format!("expected a term, found {found}"));
            return None;
        };

        let mut expression = Node::new("expression");
        expression.add_child(first);

        while self.at_operator(OperatorLevel::Additive) {
            let operator = self.terminal("arithmetic_operator");

            match self.term() {
                Some(term) => {
                    expression.add_child(operator);
                    expression.add_child(term);
                }
                None => {
                    let found = self.found();
                    self.report(format!("expected a term, found {found}"));
                }
            }
        }

        Some(expression)
    }

    /// term → ws? factor ( MULTIPLICATIVE_OP factor )*
    ///
    /// Always yields a node; it is childless when the first factor failed.
    pub(crate) fn term(&mut self) -> Option<Node> {
        let mut term = Node::new("term");
        self.skip_whitespace();

        match self.factor() {
            Some(first) => {
                term.add_child(first);

                while self.at_operator(OperatorLevel::Multiplicative) {
                    let operator = self.terminal("arithmetic_operator");

                    match self.factor() {
                        Some(factor) => {
                            term.add_child(operator);
                            term.add_child(factor);
                        }
                        None => {
                            let found = self.found();
                            self.report(format!("expected a factor, found {found}"));
                        }
                    }
                }
            }
            None => {
                let found = self.found();
                self.report(format!("expected a factor, found {found}"));
            }
        }

        Some(term)
    }

    /// Terminal dispatch.
    ///
    /// A parenthesized factor *is* its inner `expression` node; the
    /// parentheses leave no trace in the tree. A missing `)` is logged but
    /// the inner node is still returned.
    pub(crate) fn factor(&mut self) -> Option<Node> {
        self.skip_whitespace();

        match self.cursor.peek_kind() {
            Lookahead::Kind(TokenKind::Number) => Some(self.terminal("number")),
            Lookahead::Kind(TokenKind::Identifier) => Some(self.terminal("identifier")),
            Lookahead::Kind(TokenKind::StringLiteral) => Some(self.terminal("string_literal")),
            Lookahead::Kind(TokenKind::OpeningParenthesis) => {
                self.cursor.advance();
                let inner = self.nested(Self::expression)?;
                self.expect(TokenKind::ClosingParenthesis);
                Some(inner)
            }
            _ => {
                if let Some(logical) = self.logical_expression() {
                    return Some(logical);
                }

                let kind = self.cursor.current().kind_name();
                self.report(format!("invalid token {kind}"));
                self.desynchronize();
                None
            }
        }
    }

    /// Placeholder: the condition grammar is not defined yet.
    ///
    /// Never matches, never consumes, never logs.
    pub(crate) fn logical_expression(&mut self) -> Option<Node> {
        None
    }

    fn at_operator(&self, level: OperatorLevel) -> bool {
        match self.cursor.current() {
            Current::Token(token) if token.kind == TokenKind::ArithmeticOperator => {
                OperatorLevel::of(&token.lexeme) == level
            }
            _ => false,
        }
    }
}
