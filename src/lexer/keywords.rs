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

use crate::lexer::token::TokenKind;

/// Classifies a scanned word as a **reserved keyword**.
///
/// Used by the scanner right after it matches an identifier-shaped word,
/// to decide whether the word is a user name or a language keyword.
///
/// # Returns
/// - `Some(TokenKind::ConditionalKeyword)` for `if`, `elif`, `else`
/// - `Some(TokenKind::LoopKeyword)` for `for`, `while`
/// - `None` when the word should be an `IDENTIFIER`
///
/// ```text
/// if     -> CONDITIONAL_KEYWORD
/// while  -> LOOP_KEYWORD
/// total  -> IDENTIFIER
/// ```
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    match word {
        "if" | "elif" | "else" => Some(TokenKind::ConditionalKeyword),
        "for" | "while" => Some(TokenKind::LoopKeyword),
        _ => None,
    }
}
