/*
 * ==========================================================================
 * SAPLING - Parse Trees from Tokens
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the SAPLING recursive-descent parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - The token cursor
 *   - Core parser control logic
 *   - Statement parsing
 *   - Expression parsing
 *   - Shared helper utilities
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

/// Forward-only token cursor with an explicit end-of-input state.
pub mod cursor;

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the main `parse(tokens)` entry point
#[allow(clippy::module_inception)]
pub mod parser;

/// Statement-level grammar:
/// - program / statement_list / statement
/// - assignment, conditional, loop, block
pub mod statements;

/// Expression-level grammar:
/// - expression → term → factor
/// - logical_expression placeholder
pub mod expressions;

/// Shared parser helpers:
/// - expect / newline / indent
/// - whitespace skipping
/// - error logging and desynchronization
/// - nesting depth guard
pub mod helpers;

/// Re-export the public parse entry point so callers can use:
/// `crate::parser::parse(...)`
pub use parser::{parse, Parser};

pub use cursor::{Current, Lookahead, TokenCursor};
