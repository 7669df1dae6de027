//! Token definitions for Bento.

use smol_str::SmolStr;
use std::collections::HashMap;
use std::fmt;

/// A token with its kind, literal value and span.
///
/// `value` is empty unless the kind carries data, see [`TokenKind::carries_value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: SmolStr,
    pub span: std::ops::Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<SmolStr>, span: std::ops::Range<usize>) -> Self {
        Self {
            kind,
            value: value.into(),
            span,
        }
    }

    /// A token with no literal value.
    pub fn bare(kind: TokenKind, span: std::ops::Range<usize>) -> Self {
        Self::new(kind, SmolStr::default(), span)
    }
}

/// The debug form used by tooling: `kind ("value")` for data-carrying
/// layout and literal kinds, just `kind` otherwise.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_layout() || self.kind.is_literal() {
            write!(f, "{} (\"{}\")", self.kind, self.value)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

/// Token kinds for Bento.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input, always the last token of a stream
    Eof,

    // ========================================================================
    // Layout
    // ========================================================================
    /// Run of line breaks, value is the count
    Newline,
    /// Run of spaces that isn't a whole indentation, value is the length
    Space,
    /// Run of 4-space groups, value is the depth
    Indentation,

    // ========================================================================
    // Literals
    // ========================================================================
    Identifier,
    Number,
    String,

    // ========================================================================
    // Brackets
    // ========================================================================
    LRound,
    RRound,
    LSquare,
    RSquare,
    LCurly,
    RCurly,

    // ========================================================================
    // Operators
    // ========================================================================
    Not,
    EqualTo,
    NotEqualTo,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    Plus,
    PlusPlus,
    Minus,
    MinusMinus,
    Times,
    TimesTimes,
    DividedBy,
    Modulo,

    Equals,
    PlusEquals,
    MinusEquals,
    TimesEquals,
    DividedEquals,

    And,
    Or,
    Xor,

    // ========================================================================
    // Punctuation
    // ========================================================================
    Comma,
    Dot,
    DotDot,
    DotDotDot,
    Question,
    Colon,

    // ========================================================================
    // Keywords
    // ========================================================================
    Imp,
    From,
    Var,
    Const,
    Proc,
    Type,
    Enum,
    Struct,
    Interf,
    Class,
    Module,
    New,
    In,
    Of,
    If,
    Elif,
    Else,
    Switch,
    Case,
    Default,
    For,
    While,
    Break,
    Contin,
    Ret,
}

/// Reserved spellings and their kinds.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("imp", TokenKind::Imp),
    ("from", TokenKind::From),
    ("var", TokenKind::Var),
    ("const", TokenKind::Const),
    ("proc", TokenKind::Proc),
    ("type", TokenKind::Type),
    ("enum", TokenKind::Enum),
    ("struct", TokenKind::Struct),
    ("interf", TokenKind::Interf),
    ("class", TokenKind::Class),
    ("module", TokenKind::Module),
    ("new", TokenKind::New),
    ("in", TokenKind::In),
    ("of", TokenKind::Of),
    ("if", TokenKind::If),
    ("elif", TokenKind::Elif),
    ("else", TokenKind::Else),
    ("switch", TokenKind::Switch),
    ("case", TokenKind::Case),
    ("default", TokenKind::Default),
    ("for", TokenKind::For),
    ("while", TokenKind::While),
    ("break", TokenKind::Break),
    ("contin", TokenKind::Contin),
    ("ret", TokenKind::Ret),
];

lazy_static::lazy_static! {
    static ref KEYWORD_TABLE: HashMap<&'static str, TokenKind> = KEYWORDS.iter().copied().collect();
}

/// Look up a reserved spelling. Case-sensitive.
pub fn keyword(text: &str) -> Option<TokenKind> {
    KEYWORD_TABLE.get(text).copied()
}

impl TokenKind {
    /// The lowercase name used in the token debug form.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "eof",
            TokenKind::Newline => "nl",
            TokenKind::Space => "space",
            TokenKind::Indentation => "indentation",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::LRound => "lround",
            TokenKind::RRound => "rround",
            TokenKind::LSquare => "lsquare",
            TokenKind::RSquare => "rsquare",
            TokenKind::LCurly => "lcurly",
            TokenKind::RCurly => "rcurly",
            TokenKind::Not => "not",
            TokenKind::EqualTo => "equalto",
            TokenKind::NotEqualTo => "nequalto",
            TokenKind::Less => "less",
            TokenKind::LessEqual => "lequalto",
            TokenKind::Greater => "greater",
            TokenKind::GreaterEqual => "gequalto",
            TokenKind::Plus => "plus",
            TokenKind::PlusPlus => "plusplus",
            TokenKind::Minus => "minus",
            TokenKind::MinusMinus => "minusminus",
            TokenKind::Times => "times",
            TokenKind::TimesTimes => "timestimes",
            TokenKind::DividedBy => "dividedby",
            TokenKind::Modulo => "modulo",
            TokenKind::Equals => "equals",
            TokenKind::PlusEquals => "pequals",
            TokenKind::MinusEquals => "mequals",
            TokenKind::TimesEquals => "tequals",
            TokenKind::DividedEquals => "dequals",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Xor => "xor",
            TokenKind::Comma => "comma",
            TokenKind::Dot => "dot",
            TokenKind::DotDot => "dotdot",
            TokenKind::DotDotDot => "dotdotdot",
            TokenKind::Question => "question",
            TokenKind::Colon => "colon",
            TokenKind::Imp => "imp",
            TokenKind::From => "from",
            TokenKind::Var => "var",
            TokenKind::Const => "const",
            TokenKind::Proc => "proc",
            TokenKind::Type => "type",
            TokenKind::Enum => "enum",
            TokenKind::Struct => "struct",
            TokenKind::Interf => "interf",
            TokenKind::Class => "class",
            TokenKind::Module => "module",
            TokenKind::New => "new",
            TokenKind::In => "in",
            TokenKind::Of => "of",
            TokenKind::If => "if",
            TokenKind::Elif => "elif",
            TokenKind::Else => "else",
            TokenKind::Switch => "switch",
            TokenKind::Case => "case",
            TokenKind::Default => "default",
            TokenKind::For => "for",
            TokenKind::While => "while",
            TokenKind::Break => "break",
            TokenKind::Contin => "contin",
            TokenKind::Ret => "ret",
        }
    }

    /// Check if this token is a keyword.
    pub fn is_keyword(self) -> bool {
        KEYWORDS.iter().any(|&(_, kind)| kind == self)
    }

    /// Check if this token is structural whitespace.
    pub fn is_layout(self) -> bool {
        matches!(
            self,
            TokenKind::Newline | TokenKind::Space | TokenKind::Indentation
        )
    }

    /// Check if this token is a literal.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::Number | TokenKind::String
        )
    }

    /// Check if tokens of this kind carry a non-empty value.
    pub fn carries_value(self) -> bool {
        self.is_layout() || self.is_literal() || self.is_keyword()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
