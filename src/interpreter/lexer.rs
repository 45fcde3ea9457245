use logos::Logos;
use tracing::warn;

use crate::{error::LexError, interpreter::value::number::Number};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens. `42` is an integer; `3.14`, `5.` and `.5` are
    /// reals.
    #[regex(r"[0-9]+", parse_integer)]
    #[regex(r"[0-9]+\.[0-9]*", parse_real)]
    #[regex(r"\.[0-9]+", parse_real, priority = 5)]
    Number(Number),
    /// Quoted string literals, `"..."` or `'...'`. Quotes are stripped and
    /// backslash escapes are kept verbatim.
    #[regex(r#""([^"\\\n]|\\[^\n])*""#, parse_string)]
    #[regex(r"'([^'\\\n]|\\[^\n])*'", parse_string)]
    Str(String),
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,
    /// `in`
    #[token("in")]
    In,
    /// Identifier tokens such as `x`, `total_2` or `my.var`.
    #[regex(r"[a-zA-Z_.][a-zA-Z0-9_.]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# Comments.`
    #[regex(r"#[^\r\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `<-` and `=`
    #[token("<-")]
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// A run of one or more line breaks. Separates statements.
    #[regex(r"(\r?\n)+", |lex| {
        lex.extras.line += lex.slice().matches('\n').count();
        Token::Separator
    })]
    Separator,
    /// Spaces, tabs and stray carriage returns.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number '{n}'"),
            Self::Str(s) => write!(f, "string \"{s}\""),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Separator => f.write_str("newline"),
            other => write!(f, "'{}'", other.symbol()),
        }
    }
}

impl Token {
    /// Source spelling of keyword and punctuation tokens.
    const fn symbol(&self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::For => "for",
            Self::In => "in",
            Self::Assign => "<-",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Comma => ",",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Number(_)
            | Self::Str(_)
            | Self::Identifier(_)
            | Self::Separator
            | Self::Comment
            | Self::Ignored => "",
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented as line breaks are consumed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Output of [`tokenize`]: the token stream and the characters that were
/// skipped along the way.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Lexed {
    /// Tokens paired with the line each one starts on.
    pub tokens:      Vec<(Token, usize)>,
    /// One entry per skipped character, in source order.
    pub diagnostics: Vec<LexError>,
}

/// Converts source text into a token stream.
///
/// Tokenizing never fails. When a character does not start any token, a
/// [`LexError::IllegalCharacter`] is recorded and logged, exactly that one
/// character is skipped, and lexing resumes right after it.
///
/// # Example
/// ```
/// use rlite::interpreter::lexer::{Token, tokenize};
///
/// let lexed = tokenize("x <- 1 @ 2");
/// assert_eq!(lexed.diagnostics.len(), 1);
/// assert_eq!(lexed.tokens[0].0, Token::Identifier("x".into()));
/// assert_eq!(lexed.tokens[1].0, Token::Assign);
/// assert_eq!(lexed.tokens.len(), 4);
/// ```
pub fn tokenize(source: &str) -> Lexed {
    let mut lexed = Lexed::default();
    let mut offset = 0;
    let mut line = 1;

    'restart: while offset < source.len() {
        let rest = &source[offset..];
        let mut lexer = Token::lexer_with_extras(rest, LexerExtras { line });

        while let Some(token) = lexer.next() {
            if let Ok(tok) = token {
                let start_line = lexer.extras.line - lexer.slice().matches('\n').count();
                lexed.tokens.push((tok, start_line));
                continue;
            }

            let start = lexer.span().start;
            let Some(character) = rest[start..].chars().next() else {
                break 'restart;
            };
            line = lexer.extras.line;
            warn!(line, %character, "skipping illegal character");
            lexed.diagnostics
                 .push(LexError::IllegalCharacter { character, line });
            offset += start + character.len_utf8();
            continue 'restart;
        }

        break;
    }

    lexed
}

/// Parses an integer literal from the current token slice.
///
/// Literals too large for `i64` are kept as reals rather than rejected.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<Number> {
    let slice = lex.slice();
    slice.parse::<i64>()
         .map(Number::Integer)
         .or_else(|_| slice.parse::<f64>().map(Number::Real))
         .ok()
}

/// Parses a real literal (`1.5`, `5.`, `.5`) from the current token slice.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<Number> {
    lex.slice().parse::<f64>().ok().map(Number::Real)
}

/// Strips the surrounding quotes from a string literal.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}
