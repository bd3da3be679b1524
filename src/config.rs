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

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for one scan + parse run.
///
/// Loaded from JSON; every field is optional and falls back to its default:
///
/// ```json
/// { "scanner": { "emit_whitespace": true }, "parser": { "max_depth": 64 } }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scanner: ScannerConfig,
    pub parser: ParserConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScannerConfig {
    /// Emit `WHITESPACE` tokens for runs of spaces inside a line.
    ///
    /// Off by default: the grammar only skips whitespace at the start of a
    /// unit, so `a + 1` with whitespace tokens never parses.
    pub emit_whitespace: bool,

    /// Columns a tab counts for when comparing indentation.
    pub tab_width: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            emit_whitespace: false,
            tab_width: 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    /// Deepest allowed nesting of statement lists and parenthesized
    /// expressions.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

impl Config {
    /// Reads and validates a JSON configuration file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parser.max_depth == 0 {
            return Err(ConfigError::Invalid("parser.max_depth must be at least 1".into()));
        }
        if self.scanner.tab_width == 0 {
            return Err(ConfigError::Invalid("scanner.tab_width must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = Config::from_json_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.parser.max_depth, 256);
        assert_eq!(config.scanner.tab_width, 4);
        assert!(!config.scanner.emit_whitespace);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config =
            Config::from_json_str(r#"{ "scanner": { "emit_whitespace": true } }"#).unwrap();
        assert!(config.scanner.emit_whitespace);
        assert_eq!(config.scanner.tab_width, 4);
        assert_eq!(config.parser, ParserConfig::default());
    }

    #[test]
    fn zero_depth_is_rejected() {
        let err = Config::from_json_str(r#"{ "parser": { "max_depth": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = Config::from_json_str(r#"{ "lexer": {} }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = Config::from_path(Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
