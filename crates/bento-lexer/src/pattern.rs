//! The ordered pattern table driving the scanner.
//!
//! Each entry pairs an anchored regex with a [`Handler`]. The scanner tries
//! entries top to bottom and takes the first one that matches at the current
//! offset, so the table order is the precedence. Compound operators must stay
//! above any single-character pattern that is a prefix of them, otherwise the
//! prefix wins and the compound form can never be produced.

use crate::scanner::Scanner;
use crate::token::{self, TokenKind};
use regex::Regex;

/// What to do with a matched lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Emit a token of a fixed kind with no value.
    Fixed(TokenKind),
    /// Collapse a run of line breaks into one token.
    Newline,
    /// A run of whole 4-space groups.
    Indentation,
    /// Any other run of spaces.
    Space,
    /// Identifier, or a keyword if the text is reserved.
    Identifier,
    Number,
    String,
    /// Consume without emitting a token.
    Comment,
}

impl Handler {
    /// Turn `lexeme` into at most one token and advance past it.
    pub(crate) fn apply(self, scanner: &mut Scanner<'_>, lexeme: &str) {
        match self {
            Handler::Fixed(kind) => scanner.emit(kind, "", lexeme),
            Handler::Newline => {
                let count = lexeme.len();
                scanner.emit_lines(&count.to_string(), count);
            }
            Handler::Indentation => {
                scanner.emit(TokenKind::Indentation, &(lexeme.len() / 4).to_string(), lexeme)
            }
            Handler::Space => scanner.emit(TokenKind::Space, &lexeme.len().to_string(), lexeme),
            Handler::Identifier => match token::keyword(lexeme) {
                Some(kind) => scanner.emit(kind, lexeme, lexeme),
                None => scanner.emit(TokenKind::Identifier, lexeme, lexeme),
            },
            Handler::Number => scanner.emit(TokenKind::Number, lexeme, lexeme),
            Handler::String => {
                let literal = &lexeme[1..lexeme.len() - 1];
                scanner.emit(TokenKind::String, literal, lexeme)
            }
            Handler::Comment => scanner.skip(lexeme),
        }
    }
}

/// One entry of the pattern table.
pub struct Pattern {
    source: &'static str,
    regex: Regex,
    guard: Option<fn(&str) -> bool>,
    handler: Handler,
}

impl Pattern {
    fn regex(source: &'static str, handler: Handler) -> Self {
        // Table regexes are constants, a bad one is a bug in this file.
        let regex = Regex::new(&format!("^(?:{source})"))
            .unwrap_or_else(|err| panic!("invalid pattern `{source}`: {err}"));
        Self {
            source,
            regex,
            guard: None,
            handler,
        }
    }

    fn guarded(source: &'static str, guard: fn(&str) -> bool, handler: Handler) -> Self {
        Self {
            guard: Some(guard),
            ..Self::regex(source, handler)
        }
    }

    fn literal(spelling: &'static str, kind: TokenKind) -> Self {
        let regex = Regex::new(&format!("^{}", regex::escape(spelling)))
            .unwrap_or_else(|err| panic!("invalid literal `{spelling}`: {err}"));
        Self {
            source: spelling,
            regex,
            guard: None,
            handler: Handler::Fixed(kind),
        }
    }

    /// The regex source (or literal spelling) this entry was built from.
    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn handler(&self) -> Handler {
        self.handler
    }

    /// The lexeme this entry matches at the very start of `remainder`, if any.
    pub fn match_at_start<'s>(&self, remainder: &'s str) -> Option<&'s str> {
        let found = self.regex.find(remainder)?;
        let lexeme = found.as_str();
        if lexeme.is_empty() {
            return None;
        }
        match self.guard {
            Some(guard) if !guard(lexeme) => None,
            _ => Some(lexeme),
        }
    }
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("guarded", &self.guard.is_some())
            .field("handler", &self.handler)
            .finish()
    }
}

fn is_whole_indentation(run: &str) -> bool {
    run.len() % 4 == 0
}

lazy_static::lazy_static! {
    static ref PATTERNS: Vec<Pattern> = build_table();
}

/// The pattern table, in precedence order.
pub fn patterns() -> &'static [Pattern] {
    &PATTERNS
}

fn build_table() -> Vec<Pattern> {
    use TokenKind::*;

    vec![
        Pattern::regex(r"\n+", Handler::Newline),
        Pattern::guarded(r" +", is_whole_indentation, Handler::Indentation),
        Pattern::regex(r" +", Handler::Space),
        Pattern::regex(r"[a-zA-Z_][a-zA-Z0-9_]*", Handler::Identifier),
        Pattern::regex(r"[0-9]+(\.[0-9]+)?", Handler::Number),
        Pattern::regex(r#""[^"]*""#, Handler::String),
        // Brackets
        Pattern::literal("(", LRound),
        Pattern::literal(")", RRound),
        Pattern::literal("[", LSquare),
        Pattern::literal("]", RSquare),
        Pattern::literal("{", LCurly),
        Pattern::literal("}", RCurly),
        // Comparison
        Pattern::literal("==", EqualTo),
        Pattern::literal("!=", NotEqualTo),
        Pattern::literal("<=", LessEqual),
        Pattern::literal("<", Less),
        Pattern::literal(">=", GreaterEqual),
        Pattern::literal(">", Greater),
        Pattern::literal("!", Not),
        // Arithmetic
        Pattern::literal("++", PlusPlus),
        Pattern::literal("+=", PlusEquals),
        Pattern::literal("+", Plus),
        Pattern::literal("--", MinusMinus),
        Pattern::literal("-=", MinusEquals),
        Pattern::literal("-", Minus),
        Pattern::literal("**", TimesTimes),
        Pattern::literal("*=", TimesEquals),
        Pattern::literal("*", Times),
        // Comments go before anything starting with `/`
        Pattern::regex(r"//.*", Handler::Comment),
        Pattern::regex(r"/\*[\s\S]*?\*/", Handler::Comment),
        Pattern::literal("/=", DividedEquals),
        Pattern::literal("/", DividedBy),
        Pattern::literal("%", Modulo),
        Pattern::literal("=", Equals),
        // Logical
        Pattern::literal("&&", And),
        Pattern::literal("||", Or),
        Pattern::literal("##", Xor),
        // Punctuation
        Pattern::literal(",", Comma),
        Pattern::literal("...", DotDotDot),
        Pattern::literal("..", DotDot),
        Pattern::literal(".", Dot),
        Pattern::literal("?", Question),
        Pattern::literal(":", Colon),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(source: &str) -> usize {
        patterns()
            .iter()
            .position(|p| p.source() == source)
            .unwrap_or_else(|| panic!("no pattern `{source}`"))
    }

    fn first_match(remainder: &str) -> Option<(&'static Pattern, &str)> {
        patterns()
            .iter()
            .find_map(|p| p.match_at_start(remainder).map(|lexeme| (p, lexeme)))
    }

    #[test]
    fn test_compound_operators_precede_their_prefix() {
        let pairs = [
            ("<=", "<"),
            (">=", ">"),
            ("!=", "!"),
            ("==", "="),
            ("++", "+"),
            ("+=", "+"),
            ("--", "-"),
            ("-=", "-"),
            ("**", "*"),
            ("*=", "*"),
            ("/=", "/"),
            ("...", ".."),
            ("..", "."),
            (r"//.*", "/"),
            (r"/\*[\s\S]*?\*/", "/"),
        ];
        for (compound, prefix) in pairs {
            assert!(
                index_of(compound) < index_of(prefix),
                "`{compound}` must come before `{prefix}`"
            );
        }
    }

    #[test]
    fn test_layout_order() {
        assert_eq!(patterns()[0].handler(), Handler::Newline);
        assert_eq!(patterns()[1].handler(), Handler::Indentation);
        assert_eq!(patterns()[2].handler(), Handler::Space);
    }

    #[test]
    fn test_match_is_anchored() {
        let plus = &patterns()[index_of("+")];
        assert_eq!(plus.match_at_start("+1"), Some("+"));
        assert_eq!(plus.match_at_start("1+"), None);
    }

    #[test]
    fn test_first_match_wins() {
        let (pattern, lexeme) = first_match("+=1").unwrap();
        assert_eq!(pattern.handler(), Handler::Fixed(TokenKind::PlusEquals));
        assert_eq!(lexeme, "+=");

        let (pattern, lexeme) = first_match("+++").unwrap();
        assert_eq!(pattern.handler(), Handler::Fixed(TokenKind::PlusPlus));
        assert_eq!(lexeme, "++");

        let (pattern, _) = first_match("<= b").unwrap();
        assert_eq!(pattern.handler(), Handler::Fixed(TokenKind::LessEqual));
    }

    #[test]
    fn test_indentation_needs_whole_groups() {
        let indentation = &patterns()[1];
        assert_eq!(indentation.match_at_start("        x"), Some("        "));
        assert_eq!(indentation.match_at_start("      x"), None);

        let (pattern, lexeme) = first_match("      x").unwrap();
        assert_eq!(pattern.handler(), Handler::Space);
        assert_eq!(lexeme, "      ");
    }

    #[test]
    fn test_comment_patterns() {
        let (pattern, lexeme) = first_match("// note\nx").unwrap();
        assert_eq!(pattern.handler(), Handler::Comment);
        assert_eq!(lexeme, "// note");

        let (pattern, lexeme) = first_match("/* a\nb */ c */").unwrap();
        assert_eq!(pattern.handler(), Handler::Comment);
        assert_eq!(lexeme, "/* a\nb */");
    }

    #[test]
    fn test_unterminated_string_has_no_match() {
        assert!(first_match("\"open").is_none());
    }

    #[test]
    fn test_number_takes_one_decimal_point() {
        let (_, lexeme) = first_match("1.5.2").unwrap();
        assert_eq!(lexeme, "1.5");
        let (_, lexeme) = first_match("1..5").unwrap();
        assert_eq!(lexeme, "1");
    }

    #[test]
    fn test_nothing_matches_illegal_characters() {
        for input in ["@", "$", "\t", "&", "|", "#", "\r", "é"] {
            assert!(first_match(input).is_none(), "{input:?} should not match");
        }
    }
}
