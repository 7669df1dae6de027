//! # Bento Lexer
//!
//! Tokenizes Bento source code into a stream of tokens.
//!
//! Scanning is driven by an ordered table of regex patterns: at each offset
//! the first pattern that matches wins. Layout is significant, so line
//! breaks, indentation and space runs all come out as tokens; comments are
//! dropped.
//!
//! ## Example
//!
//! ```
//! use bento_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("var x = 10", "main.bento").unwrap();
//!
//! assert_eq!(tokens[0].kind, TokenKind::Var);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
//! for token in &tokens {
//!     println!("{}", token);
//! }
//! ```

mod error;
mod pattern;
mod position;
mod scanner;
mod token;

pub use error::LexError;
pub use pattern::{patterns, Handler, Pattern};
pub use position::Position;
pub use scanner::Scanner;
pub use token::{keyword, Token, TokenKind, KEYWORDS};

/// Tokenize source code into a vector of tokens ending with EOF.
///
/// `source_name` is only used to label the error.
pub fn tokenize(source: &str, source_name: &str) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::new(source, source_name);
    scanner.scan()?;
    Ok(scanner.into_tokens())
}
