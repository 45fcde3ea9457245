use pretty_assertions::assert_eq;
use rlite::{
    error::LexError,
    interpreter::{
        lexer::{Token, tokenize},
        value::number::Number,
    },
};

fn kinds(src: &str) -> Vec<Token> {
    tokenize(src).tokens.into_iter().map(|(tok, _)| tok).collect()
}

#[test]
fn numbers_integer_and_real() {
    assert_eq!(kinds("42 1.5 5. .25"),
               vec![Token::Number(Number::Integer(42)),
                    Token::Number(Number::Real(1.5)),
                    Token::Number(Number::Real(5.0)),
                    Token::Number(Number::Real(0.25))]);
}

#[test]
fn oversized_integer_becomes_real() {
    assert_eq!(kinds("99999999999999999999"),
               vec![Token::Number(Number::Real(1e20))]);
}

#[test]
fn strings_in_either_quote_style() {
    assert_eq!(kinds("\"hello world\" 'single'"),
               vec![Token::Str("hello world".into()), Token::Str("single".into())]);
}

#[test]
fn backslash_escapes_are_kept_and_do_not_end_the_string() {
    assert_eq!(kinds(r#""a\"b""#), vec![Token::Str(r#"a\"b"#.into())]);
    assert_eq!(kinds(r"'it\'s'"), vec![Token::Str(r"it\'s".into())]);
    assert_eq!(kinds(r#""q\\" x"#),
               vec![Token::Str(r"q\\".into()), Token::Identifier("x".into())]);
}

#[test]
fn strings_do_not_span_lines() {
    let lexed = tokenize("\"open\nx");

    assert_eq!(lexed.diagnostics.len(), 1);
    assert_eq!(lexed.tokens.last(), Some(&(Token::Identifier("x".into()), 2)));
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(kinds("if else while for in iffy my.var _x"),
               vec![Token::If,
                    Token::Else,
                    Token::While,
                    Token::For,
                    Token::In,
                    Token::Identifier("iffy".into()),
                    Token::Identifier("my.var".into()),
                    Token::Identifier("_x".into())]);
}

#[test]
fn both_assignment_spellings() {
    assert_eq!(kinds("x <- 1"), kinds("x = 1"));
    assert_eq!(kinds("x<-1")[1], Token::Assign);
}

#[test]
fn operators_prefer_longest_match() {
    assert_eq!(kinds("<= >= == != < >"),
               vec![Token::LessEqual,
                    Token::GreaterEqual,
                    Token::EqualEqual,
                    Token::BangEqual,
                    Token::Less,
                    Token::Greater]);
}

#[test]
fn newline_runs_collapse_into_one_separator() {
    let lexed = tokenize("a\n\n\nb\r\nc");

    assert_eq!(lexed.tokens,
               vec![(Token::Identifier("a".into()), 1),
                    (Token::Separator, 1),
                    (Token::Identifier("b".into()), 4),
                    (Token::Separator, 4),
                    (Token::Identifier("c".into()), 5)]);
}

#[test]
fn comments_are_dropped_but_newline_kept() {
    assert_eq!(kinds("x # note\ny"),
               vec![Token::Identifier("x".into()),
                    Token::Separator,
                    Token::Identifier("y".into())]);
}

#[test]
fn illegal_characters_are_skipped_one_at_a_time() {
    let lexed = tokenize("a\n@$ b");

    assert_eq!(lexed.diagnostics,
               vec![LexError::IllegalCharacter { character: '@',
                                                 line:      2, },
                    LexError::IllegalCharacter { character: '$',
                                                 line:      2, }]);
    assert_eq!(lexed.tokens.last(), Some(&(Token::Identifier("b".into()), 2)));
}

#[test]
fn diagnostic_message_names_character_and_line() {
    let lexed = tokenize("1 ~ 2");
    assert_eq!(lexed.diagnostics[0].to_string(), "Illegal character '~' on line 1");
}
