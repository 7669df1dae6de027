//! The scanning loop.

use crate::error::LexError;
use crate::pattern::patterns;
use crate::position::Position;
use crate::token::{Token, TokenKind};

/// A scanner for Bento source code.
///
/// Runs the pattern table over the source until it is exhausted or nothing
/// matches. Comments are consumed as trivia: they produce no token, but their
/// spans are kept so the consumed text can be accounted for.
pub struct Scanner<'source> {
    source: &'source str,
    source_name: String,
    position: Position,
    tokens: Vec<Token>,
    trivia: Vec<std::ops::Range<usize>>,
    /// Track if we've emitted EOF
    done: bool,
}

impl<'source> Scanner<'source> {
    /// Create a new scanner. `source_name` only shows up in errors.
    pub fn new(source: &'source str, source_name: impl Into<String>) -> Self {
        Self {
            source,
            source_name: source_name.into(),
            position: Position::default(),
            tokens: Vec::new(),
            trivia: Vec::new(),
            done: false,
        }
    }

    /// Get the source text.
    pub fn source(&self) -> &'source str {
        self.source
    }

    /// Get the current scan position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Tokens produced so far. After a failed [`scan`](Self::scan) these are
    /// the tokens before the offending character.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Spans of the comments consumed so far.
    pub fn trivia(&self) -> &[std::ops::Range<usize>] {
        &self.trivia
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Scan the whole source, ending the token stream with a single EOF.
    ///
    /// Stops at the first character no pattern accepts. Nothing is skipped
    /// and no EOF is appended in that case.
    pub fn scan(&mut self) -> Result<(), LexError> {
        if self.done {
            return Ok(());
        }

        while !self.at_end() {
            let remainder = self.remainder();
            let matched = patterns().iter().find_map(|pattern| {
                pattern
                    .match_at_start(remainder)
                    .map(|lexeme| (pattern, lexeme))
            });

            let Some((pattern, lexeme)) = matched else {
                let err = self.illegal_character();
                tracing::debug!(
                    source = %self.source_name,
                    tokens = self.tokens.len(),
                    "scan failed: {err}"
                );
                return Err(err);
            };

            tracing::trace!(
                pattern = pattern.source(),
                lexeme,
                line = self.position.line,
                column = self.position.column,
                "matched"
            );
            pattern.handler().apply(self, lexeme);
        }

        let end = self.source.len();
        self.tokens.push(Token::bare(TokenKind::Eof, end..end));
        self.done = true;

        tracing::debug!(
            source = %self.source_name,
            tokens = self.tokens.len(),
            comments = self.trivia.len(),
            "scan finished"
        );
        Ok(())
    }

    /// Push a token for `lexeme` and move past it on the current line.
    pub(crate) fn emit(&mut self, kind: TokenKind, value: &str, lexeme: &str) {
        let start = self.position.offset;
        self.tokens
            .push(Token::new(kind, value, start..start + lexeme.len()));
        self.position.advance_columns(lexeme);
    }

    /// Push a newline token for a run of `count` line breaks.
    pub(crate) fn emit_lines(&mut self, value: &str, count: usize) {
        let start = self.position.offset;
        self.tokens
            .push(Token::new(TokenKind::Newline, value, start..start + count));
        self.position.advance_lines(count);
    }

    /// Move past `lexeme` without producing a token.
    ///
    /// Line breaks inside the lexeme are not counted.
    pub(crate) fn skip(&mut self, lexeme: &str) {
        let start = self.position.offset;
        self.trivia.push(start..start + lexeme.len());
        self.position.advance_columns(lexeme);
    }

    fn at_end(&self) -> bool {
        self.position.offset >= self.source.len()
    }

    fn remainder(&self) -> &'source str {
        &self.source[self.position.offset..]
    }

    fn illegal_character(&self) -> LexError {
        LexError::IllegalCharacter {
            character: self.remainder().chars().next().unwrap_or_default(),
            line: self.position.line,
            column: self.position.column,
            offset: self.position.offset,
            source_name: self.source_name.clone(),
        }
    }
}
