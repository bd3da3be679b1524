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
 *
 *   program               → statement_list
 *   statement_list        → statement*
 *   statement             → ( assignment_statement
 *                           | conditional_statement
 *                           | loop_statement ) NEWLINE
 *   assignment_statement  → IDENTIFIER ws? '=' ws? expression
 *   conditional_statement → ws? CONDITIONAL_KEYWORD logical_expression block
 *                           ( CONDITIONAL_KEYWORD block )?
 *   loop_statement        → ws? LOOP_KEYWORD IDENTIFIER ':' NEWLINE INDENT
 *                           statement_list
 *   block                 → INDENT statement_list
 *
 * A statement list stops at the first statement that fails. Nothing after
 * it in the same list is attempted.
 *
 * ==========================================================================
 */

use crate::lexer::token::TokenKind;
use crate::parser::cursor::Lookahead;
use crate::parser::parser::Parser;
use crate::tree::Node;
use tracing::trace;

impl Parser {
    /// program → statement_list
    pub(crate) fn program(&mut self) -> Node {
        let mut program = Node::new("program");

        match self.statement_list() {
            Some(list) => program.add_child(list),
            // statement_list always yields a node today
            None => {
                let found = self.found();
                self.report(format!("expected a statement_list, found {found}"));
            }
        }

        program
    }

    /// statement_list → statement*
    ///
    /// Runs until end of input or the first failing statement.
    pub(crate) fn statement_list(&mut self) -> Option<Node> {
        let mut list = Node::new("statement_list");

        while !self.cursor.is_exhausted() {
            match self.statement() {
                Some(statement) => list.add_child(statement),
                None => {
                    trace!(position = self.cursor.position(), "statement list truncated");
                    break;
                }
            }
        }

        Some(list)
    }

    /// Dispatches on one token of lookahead, then requires the trailing
    /// `NEWLINE` on every path.
    pub(crate) fn statement(&mut self) -> Option<Node> {
        trace!(at = %self.cursor.current(), "statement");
        let statement = match self.cursor.peek_kind() {
            Lookahead::Kind(TokenKind::Identifier) => self.assignment_statement(),
            Lookahead::Kind(TokenKind::ConditionalKeyword) => self.conditional_statement(),
            Lookahead::Kind(TokenKind::LoopKeyword) => self.loop_statement(),
            _ => {
                let found = self.found();
                self.report(format!("expected a statement type, found {found}"));
                self.desynchronize();
                None
            }
        };

        self.newline();
        statement
    }

    /// assignment_statement → IDENTIFIER ws? '=' ws? expression
    ///
    /// Produces `(identifier, assignment_operator, expression)`. Tokens
    /// consumed before a failing expression stay consumed.
    pub(crate) fn assignment_statement(&mut self) -> Option<Node> {
        if !self.cursor.matches(TokenKind::Identifier) {
            let found = self.found();
            self.report(format!("expected an identifier, found {found}"));
            return None;
        }

        let identifier = self.terminal("identifier");
        self.skip_whitespace();

        // Taken before `expect` moves past it; absent when the operator is missing.
        let operator = if self.cursor.matches(TokenKind::AssignmentOperator) {
            self.cursor.lexeme().map(str::to_owned)
        } else {
            None
        };
        self.expect(TokenKind::AssignmentOperator);
        let operator = Node::with_value("assignment_operator", operator);

        self.skip_whitespace();

        let Some(expression) = self.expression() else {
            let found = self.found();
            self.report(format!("expected an expression, found {found}"));
            return None;
        };

        let mut assignment = Node::new("assignment_statement");
        assignment.add_child(identifier);
        assignment.add_child(operator);
        assignment.add_child(expression);
        Some(assignment)
    }

    /// conditional_statement → ws? CONDITIONAL_KEYWORD logical_expression block
    ///                         ( CONDITIONAL_KEYWORD block )?
    ///
    /// The condition rule is a placeholder that never matches, so this
    /// returns `None` right after the keyword. Nothing is logged here for
    /// that; the statement's `NEWLINE` check is what reports the leftovers.
    pub(crate) fn conditional_statement(&mut self) -> Option<Node> {
        self.skip_whitespace();
        if !self.cursor.matches(TokenKind::ConditionalKeyword) {
            return None;
        }

        let mut conditional = self.terminal("conditional_statement");

        let condition = self.logical_expression()?;
        conditional.add_child(condition);

        if let Some(then_block) = self.block() {
            conditional.add_child(then_block);

            if self.cursor.matches(TokenKind::ConditionalKeyword) {
                self.cursor.advance();
                if let Some(else_block) = self.block() {
                    conditional.add_child(else_block);
                }
            }
        }

        Some(conditional)
    }

    /// loop_statement → ws? LOOP_KEYWORD IDENTIFIER ':' NEWLINE INDENT statement_list
    ///
    /// The node carries the keyword as its value and holds the loop
    /// variable followed by the body list.
    pub(crate) fn loop_statement(&mut self) -> Option<Node> {
        self.skip_whitespace();
        if !self.cursor.matches(TokenKind::LoopKeyword) {
            return None;
        }

        let mut node = self.terminal("loop_statement");

        if self.cursor.matches(TokenKind::Identifier) {
            node.add_child(self.terminal("identifier"));
            self.expect(TokenKind::Colon);
            self.newline();
            self.indent();

            if let Some(body) = self.nested(Self::statement_list) {
                node.add_child(body);
            }
        } else {
            let found = self.found();
            self.report(format!("expected an identifier, found {found}"));
        }

        Some(node)
    }

    /// block → INDENT statement_list
    pub(crate) fn block(&mut self) -> Option<Node> {
        let mut block = Node::new("block");
        self.indent();

        if let Some(list) = self.nested(Self::statement_list) {
            block.add_child(list);
        }

        Some(block)
    }
}
