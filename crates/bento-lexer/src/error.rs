//! Lexer error definitions.

use thiserror::Error;

/// A lexer error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexError {
    /// No pattern matches at the current position.
    #[error("illegal character `{character}` at line {line} column {column} of `{source_name}`")]
    IllegalCharacter {
        character: char,
        line: usize,
        column: usize,
        offset: usize,
        source_name: String,
    },
}

impl LexError {
    /// Get the span of the offending text.
    pub fn span(&self) -> std::ops::Range<usize> {
        match self {
            LexError::IllegalCharacter {
                character, offset, ..
            } => *offset..*offset + character.len_utf8(),
        }
    }

    /// Get the 1-indexed line and column of this error.
    pub fn line_col(&self) -> (usize, usize) {
        match self {
            LexError::IllegalCharacter { line, column, .. } => (*line, *column),
        }
    }

    /// Get the name of the source this error was found in.
    pub fn source_name(&self) -> &str {
        match self {
            LexError::IllegalCharacter { source_name, .. } => source_name,
        }
    }
}
