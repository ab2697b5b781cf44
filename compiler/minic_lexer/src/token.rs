//! Token types produced by the lexer.

use std::fmt;

use minic_ir::{Name, Span};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TokenKind {
    // === Literals ===
    Int(i32),
    Real(f64),
    Char(u8),
    Ident(Name),

    // === Type keywords ===
    KwInt,
    KwFloat,
    KwDouble,
    KwChar,
    KwVoid,
    KwLong,
    KwShort,
    KwSigned,
    KwUnsigned,

    // === Statement keywords ===
    If,
    Else,
    While,
    Do,
    For,
    Return,

    // === Delimiters ===
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
    Comma,

    // === Operators ===
    Plus,
    Minus,
    Star,
    Slash,
    Eq,
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    AndAnd,
    OrOr,
    Bang,

    Eof,
}

impl TokenKind {
    /// Whether this token starts a type specifier.
    pub fn is_type_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::KwInt
                | TokenKind::KwFloat
                | TokenKind::KwDouble
                | TokenKind::KwChar
                | TokenKind::KwVoid
                | TokenKind::KwLong
                | TokenKind::KwShort
                | TokenKind::KwSigned
                | TokenKind::KwUnsigned
        )
    }

    /// Human-readable description for diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Int(_) => "integer literal",
            TokenKind::Real(_) => "floating literal",
            TokenKind::Char(_) => "character literal",
            TokenKind::Ident(_) => "identifier",
            TokenKind::KwInt => "'int'",
            TokenKind::KwFloat => "'float'",
            TokenKind::KwDouble => "'double'",
            TokenKind::KwChar => "'char'",
            TokenKind::KwVoid => "'void'",
            TokenKind::KwLong => "'long'",
            TokenKind::KwShort => "'short'",
            TokenKind::KwSigned => "'signed'",
            TokenKind::KwUnsigned => "'unsigned'",
            TokenKind::If => "'if'",
            TokenKind::Else => "'else'",
            TokenKind::While => "'while'",
            TokenKind::Do => "'do'",
            TokenKind::For => "'for'",
            TokenKind::Return => "'return'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Semicolon => "';'",
            TokenKind::Comma => "','",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Eq => "'='",
            TokenKind::EqEq => "'=='",
            TokenKind::NotEq => "'!='",
            TokenKind::Lt => "'<'",
            TokenKind::Gt => "'>'",
            TokenKind::LtEq => "'<='",
            TokenKind::GtEq => "'>='",
            TokenKind::AndAnd => "'&&'",
            TokenKind::OrOr => "'||'",
            TokenKind::Bang => "'!'",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// The tokens of one source text, always terminated by [`TokenKind::Eof`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index`, clamped to the trailing `Eof`.
    #[inline]
    pub fn get(&self, index: usize) -> Token {
        self.tokens
            .get(index)
            .or_else(|| self.tokens.last())
            .copied()
            .unwrap_or(Token::new(TokenKind::Eof, Span::DUMMY))
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(|t| t.kind)
    }
}
