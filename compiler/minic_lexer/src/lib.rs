//! Lexer for MiniC using logos with string interning.
//!
//! Produces a [`TokenList`] ending in `Eof`. Whitespace and both comment
//! styles are dropped. The first unrecognized input aborts lexing with a
//! [`SyntaxError`].

mod token;

use logos::Logos;
use minic_ir::{LineOffsetTable, Span, StringInterner, SyntaxError};

pub use token::{Token, TokenKind, TokenList};

/// Raw token from logos (before interning and literal conversion).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // === Type keywords ===
    #[token("int")]
    KwInt,
    #[token("float")]
    KwFloat,
    #[token("double")]
    KwDouble,
    #[token("char")]
    KwChar,
    #[token("void")]
    KwVoid,
    #[token("long")]
    KwLong,
    #[token("short")]
    KwShort,
    #[token("signed")]
    KwSigned,
    #[token("unsigned")]
    KwUnsigned,

    // === Statement keywords ===
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("do")]
    Do,
    #[token("for")]
    For,
    #[token("return")]
    Return,

    // === Literals ===
    #[regex(r"[0-9]+")]
    Int,

    #[regex(r"[0-9]+\.[0-9]*")]
    #[regex(r"\.[0-9]+")]
    Real,

    #[regex(r"'([^'\\\n]|\\[^\n])'")]
    Char,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    // === Delimiters ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,

    // === Operators ===
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("!")]
    Bang,
}

/// Lex `source` into tokens, interning identifiers.
pub fn lex(source: &str, interner: &StringInterner) -> Result<TokenList, SyntaxError> {
    let table = LineOffsetTable::build(source);
    let Ok(eof_pos) = u32::try_from(source.len()) else {
        return Err(SyntaxError::with_table(
            &table,
            source,
            Span::DUMMY,
            format!("source exceeds {} bytes", u32::MAX),
        ));
    };

    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        // Bounded by the length check above.
        let span = Span::try_from_range(logos.span()).unwrap_or(Span::new(eof_pos, eof_pos));
        let slice = logos.slice();

        let kind = match token_result {
            Ok(RawToken::LineComment | RawToken::BlockComment) => continue,
            Ok(raw) => convert_token(raw, slice, interner),
            Err(()) => Err(unexpected_input(slice)),
        };
        match kind {
            Ok(kind) => result.push(Token::new(kind, span)),
            Err(message) => return Err(SyntaxError::with_table(&table, source, span, message)),
        }
    }

    result.push(Token::new(TokenKind::Eof, Span::new(eof_pos, eof_pos)));
    Ok(result)
}

fn unexpected_input(slice: &str) -> String {
    match slice.chars().next() {
        Some('\'') => "unterminated character literal".to_string(),
        Some(c) => format!("unexpected character '{c}'"),
        None => "unexpected end of input".to_string(),
    }
}

/// Convert a raw token to a `TokenKind`, parsing literals and interning names.
fn convert_token(
    raw: RawToken,
    slice: &str,
    interner: &StringInterner,
) -> Result<TokenKind, String> {
    let kind = match raw {
        RawToken::Int => slice
            .parse::<i32>()
            .map(TokenKind::Int)
            .map_err(|_| format!("integer literal '{slice}' is out of range"))?,
        RawToken::Real => slice
            .parse::<f64>()
            .map(TokenKind::Real)
            .map_err(|_| format!("malformed floating literal '{slice}'"))?,
        RawToken::Char => TokenKind::Char(unescape_char(&slice[1..slice.len() - 1])?),
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        RawToken::KwInt => TokenKind::KwInt,
        RawToken::KwFloat => TokenKind::KwFloat,
        RawToken::KwDouble => TokenKind::KwDouble,
        RawToken::KwChar => TokenKind::KwChar,
        RawToken::KwVoid => TokenKind::KwVoid,
        RawToken::KwLong => TokenKind::KwLong,
        RawToken::KwShort => TokenKind::KwShort,
        RawToken::KwSigned => TokenKind::KwSigned,
        RawToken::KwUnsigned => TokenKind::KwUnsigned,

        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::While => TokenKind::While,
        RawToken::Do => TokenKind::Do,
        RawToken::For => TokenKind::For,
        RawToken::Return => TokenKind::Return,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Comma => TokenKind::Comma,

        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::AndAnd => TokenKind::AndAnd,
        RawToken::OrOr => TokenKind::OrOr,
        RawToken::Bang => TokenKind::Bang,

        // Filtered out by `lex` before conversion.
        RawToken::LineComment | RawToken::BlockComment => {
            return Err("unexpected comment".to_string())
        }
    };
    Ok(kind)
}

/// Resolve the body of a character literal (quotes stripped) to its byte.
fn unescape_char(body: &str) -> Result<u8, String> {
    let mut chars = body.chars();
    let c = match chars.next() {
        Some('\\') => match chars.next() {
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('0') => '\0',
            Some('\\') => '\\',
            Some('\'') => '\'',
            Some('"') => '"',
            Some(other) => return Err(format!("unknown escape sequence '\\{other}'")),
            None => return Err("empty escape sequence".to_string()),
        },
        Some(c) => c,
        None => return Err("empty character literal".to_string()),
    };
    u8::try_from(u32::from(c))
        .map_err(|_| format!("character '{c}' does not fit in a single byte"))
}
