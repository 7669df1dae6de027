//! Rendering of lexer failures.

use bento_lexer::LexError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A lexer error with the source attached, so miette can point at it.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(
    code(bento::lex::illegal_character),
    help("only ASCII identifiers, numbers, strings, operators, spaces and newlines can appear outside strings and comments")
)]
pub struct LexDiagnostic {
    message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("no token starts here")]
    span: SourceSpan,
}

impl LexDiagnostic {
    pub fn new(err: &LexError, source: &str) -> Self {
        Self {
            message: err.to_string(),
            src: NamedSource::new(err.source_name(), source.to_string()),
            span: err.span().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_at_offending_character() {
        let source = "var a = 1\nvar b = @";
        let err = bento_lexer::tokenize(source, "demo.bento").unwrap_err();
        let diagnostic = LexDiagnostic::new(&err, source);

        assert_eq!(diagnostic.span.offset(), 18);
        assert_eq!(diagnostic.span.len(), 1);
        assert_eq!(
            diagnostic.to_string(),
            "illegal character `@` at line 2 column 9 of `demo.bento`"
        );
        assert_eq!(
            diagnostic.code().map(|code| code.to_string()).as_deref(),
            Some("bento::lex::illegal_character")
        );
    }
}
