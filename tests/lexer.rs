use lofy::{
    error::LexErrorKind,
    interpreter::lexer::{Token, TokenKind, Tokenizer, tokenize},
};
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).map(|t| t.expect("unexpected lexical error").kind)
                    .collect()
}

fn positions(source: &str) -> Vec<(TokenKind, usize, usize)> {
    tokenize(source).map(|t| t.expect("unexpected lexical error"))
                    .map(|t| (t.kind, t.line, t.column))
                    .collect()
}

#[test]
fn tracks_lines_and_columns() {
    use TokenKind::{Assign, Eof, Identifier, Integer, LParen, NewLine, Plus, Print, RParen};

    assert_eq!(positions("x = 3\nprint(x + 4)\n"),
               vec![(Identifier, 1, 1),
                    (Assign, 1, 3),
                    (Integer, 1, 5),
                    (NewLine, 1, 6),
                    (Print, 2, 1),
                    (LParen, 2, 6),
                    (Identifier, 2, 7),
                    (Plus, 2, 9),
                    (Integer, 2, 11),
                    (RParen, 2, 12),
                    (NewLine, 2, 13),
                    (Eof, 3, 1)]);
}

#[test]
fn recognises_keywords_and_identifiers() {
    use TokenKind::{Def, Else, Eof, Identifier, If, Print, Return, While};

    assert_eq!(kinds("def return if else while print iffy _while print2"),
               vec![Def, Return, If, Else, While, Print, Identifier, Identifier, Identifier, Eof]);
}

#[test]
fn prefers_two_character_operators() {
    use TokenKind::{
        Assign, BangEqual, Colon, Comma, Eof, EqualEqual, Greater, GreaterEqual, Less, LessEqual,
        Minus, Semicolon, Slash, Star,
    };

    assert_eq!(kinds("== != <= >= < > = - * / : , ;"),
               vec![EqualEqual,
                    BangEqual,
                    LessEqual,
                    GreaterEqual,
                    Less,
                    Greater,
                    Assign,
                    Minus,
                    Star,
                    Slash,
                    Colon,
                    Comma,
                    Semicolon,
                    Eof]);
    assert_eq!(kinds("a<=b"), vec![TokenKind::Identifier, LessEqual, TokenKind::Identifier, Eof]);
}

#[test]
fn literals_keep_their_text() {
    let tokens = tokenize("42 3.25 \"hi there\" name").collect::<Result<Vec<Token>, _>>()
                                                      .expect("unexpected lexical error");

    let lexemes = tokens.iter()
                        .map(|t| (t.kind, t.lexeme.as_deref()))
                        .collect::<Vec<_>>();
    assert_eq!(lexemes,
               vec![(TokenKind::Integer, Some("42")),
                    (TokenKind::Float, Some("3.25")),
                    (TokenKind::String, Some("hi there")),
                    (TokenKind::Identifier, Some("name")),
                    (TokenKind::Eof, None)]);
}

#[test]
fn skips_comments_but_keeps_the_line_break() {
    use TokenKind::{Eof, Identifier, NewLine};

    assert_eq!(positions("a # note = 1\nb"),
               vec![(Identifier, 1, 1), (NewLine, 1, 13), (Identifier, 2, 1), (Eof, 2, 2)]);
}

#[test]
fn strings_may_span_lines() {
    use TokenKind::{Eof, Identifier, String};

    assert_eq!(positions("\"a\nb\" x"), vec![(String, 1, 1), (Identifier, 2, 4), (Eof, 2, 5)]);
}

#[test]
fn reports_unexpected_characters_and_continues() {
    let results = tokenize("x @ y").collect::<Vec<_>>();

    assert_eq!(results.len(), 4);
    let error = results[1].as_ref().expect_err("'@' should be rejected");
    assert_eq!(error.kind, LexErrorKind::UnexpectedCharacter('@'));
    assert_eq!((error.line, error.column), (1, 3));
    assert_eq!(results[2].as_ref().map(|t| t.kind), Ok(TokenKind::Identifier));
}

#[test]
fn reports_a_lone_bang() {
    let error = tokenize("a ! b").find_map(Result::err).expect("'!' should be rejected");

    assert_eq!(error.kind, LexErrorKind::BareBang);
    assert_eq!(error.column, 3);
    assert_eq!(error.to_string(), "Error on line 1, column 3: Expected '=' after '!'.");
}

#[test]
fn reports_unterminated_strings() {
    let results = tokenize("s = \"abc").collect::<Vec<_>>();

    let error = results[2].as_ref().expect_err("string should be unterminated");
    assert_eq!(error.kind, LexErrorKind::UnterminatedString);
    assert_eq!((error.line, error.column), (1, 5));
    assert_eq!(results[3].as_ref().map(|t| t.kind), Ok(TokenKind::Eof));
}

#[test]
fn end_of_input_repeats() {
    let mut tokenizer = Tokenizer::new("");

    for _ in 0..3 {
        let token = tokenizer.next_token().expect("end of input is not an error");
        assert_eq!((token.kind, token.line, token.column), (TokenKind::Eof, 1, 1));
    }
}

#[test]
fn iterator_stops_after_end_of_input() {
    let mut tokenizer = tokenize("a\n");

    assert_eq!(tokenizer.by_ref().count(), 3);
    assert!(tokenizer.next().is_none());
}

#[test]
fn describes_tokens_for_messages() {
    let tokens = tokenize("x \"s\" +").collect::<Result<Vec<Token>, _>>()
                                      .expect("unexpected lexical error");

    assert_eq!(tokens[0].describe(), "identifier 'x'");
    assert_eq!(tokens[1].describe(), "string literal \"s\"");
    assert_eq!(tokens[2].describe(), "'+'");
    assert_eq!(tokens[3].describe(), "end of input");
}
