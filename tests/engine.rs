use std::f64::consts;

use calc::{
    Error,
    error::{ParseError, RuntimeError},
    interpreter::{
        lexer::{lex_constant, lex_number},
        reducer::{apply, reduce},
        scope::ScopeStack,
        token::{Token, TokenSequence},
        tokenizer::Tokenizer,
    },
    util::format::format_significant,
};

fn sequence(tokens: &[Token]) -> TokenSequence {
    tokens.iter().copied().collect()
}

#[test]
fn number_lexer_takes_the_longest_literal() {
    let cases = [("12", 12.0, 2),
                 ("12.5 + 1", 12.5, 4),
                 ("-0.25", -0.25, 5),
                 ("1e3x", 1000.0, 3),
                 ("6.02E+23", 6.02e23, 8),
                 ("4.5e-1)", 0.45, 6)];

    for (src, value, end) in cases {
        let lexeme = lex_number(src, 0).unwrap_or_else(|| panic!("no literal in {src:?}"));
        assert_eq!(lexeme.value, value, "value of {src:?}");
        assert_eq!(lexeme.end, end, "end of {src:?}");
    }
}

#[test]
fn number_lexer_starts_at_the_cursor() {
    let lexeme = lex_number("3 - 42", 4).unwrap();
    assert_eq!(lexeme.value, 42.0);
    assert_eq!(lexeme.end, 6);
    assert_eq!(lexeme.sign, None);

    assert!(lex_number("3 - 42", 1).is_none());
    assert!(lex_number("3 - 42", 2).is_none());
    assert!(lex_number("3", 1).is_none());
}

#[test]
fn number_lexer_recognizes_zero() {
    for src in ["0", "0.0", "-0", ".0", "0e5"] {
        let lexeme = lex_number(src, 0).unwrap_or_else(|| panic!("no literal in {src:?}"));
        assert_eq!(lexeme.value, 0.0);
        assert_eq!(lexeme.end, src.len());
    }
}

#[test]
fn number_lexer_reports_the_sign() {
    assert_eq!(lex_number("-3", 0).unwrap().sign, Some('-'));
    assert_eq!(lex_number("+3", 0).unwrap().sign, Some('+'));
    assert_eq!(lex_number("+3", 0).unwrap().unsigned_value(), 3.0);
    assert!(lex_number("- 3", 0).is_none());
    assert!(lex_number("-", 0).is_none());
}

#[test]
fn signed_value_after_a_value_splits_off_its_sign() {
    let number = lex_number("-2", 0).unwrap();
    assert_eq!(number.split(true), (Some('-'), 2.0));
    assert_eq!(number.split(false), (None, -2.0));

    let constant = lex_constant("+pi", 0).unwrap();
    assert_eq!(constant.split(true), (Some('+'), consts::PI));

    let unsigned = lex_number("2", 0).unwrap();
    assert_eq!(unsigned.split(true), (None, 2.0));
}

#[test]
fn constant_lexer_honors_case_rules() {
    assert_eq!(lex_constant("e", 0).unwrap().value, consts::E);
    assert!(lex_constant("E", 0).is_none());
    for src in ["pi", "Pi", "pI", "PI"] {
        assert_eq!(lex_constant(src, 0).unwrap().value, consts::PI, "{src:?}");
    }
    assert_eq!(lex_constant("pHi", 0).unwrap().value, 1.618_033_988_749_895);
}

#[test]
fn constant_lexer_prefers_the_longest_name() {
    let phi = lex_constant("phi", 0).unwrap();
    assert_eq!(phi.value, 1.618_033_988_749_895);
    assert_eq!(phi.end, 3);

    let pi = lex_constant("pie", 0).unwrap();
    assert_eq!(pi.value, consts::PI);
    assert_eq!(pi.end, 2);
}

#[test]
fn constant_lexer_skips_whitespace_and_reads_a_sign() {
    let lexeme = lex_constant("2 *  -pi", 3).unwrap();
    assert_eq!(lexeme.value, -consts::PI);
    assert_eq!(lexeme.sign, Some('-'));
    assert_eq!(lexeme.end, 8);
}

#[test]
fn constant_lexer_rejects_partial_names() {
    for src in ["p", "ph", "x", "", "- e", "3"] {
        assert!(lex_constant(src, 0).is_none(), "{src:?}");
    }
}

#[test]
fn apply_covers_every_operator() {
    assert_eq!(apply('^', 3.0, 2.0), Ok(9.0));
    assert_eq!(apply('*', 3.0, 2.0), Ok(6.0));
    assert_eq!(apply('/', 3.0, 2.0), Ok(1.5));
    assert_eq!(apply('+', 3.0, 2.0), Ok(5.0));
    assert_eq!(apply('-', 3.0, 2.0), Ok(1.0));
    assert_eq!(apply('/', -1.0, 0.0), Ok(f64::NEG_INFINITY));
    assert_eq!(apply('x', 3.0, 2.0),
               Err(RuntimeError::UnsupportedOperator { operator: 'x' }));
}

#[test]
fn reduce_is_idempotent_on_a_single_number() {
    let mut tokens = sequence(&[Token::Number(7.5)]);
    assert_eq!(reduce(&mut tokens), Ok(7.5));
    assert_eq!(reduce(&mut tokens), Ok(7.5));
    assert_eq!(tokens.as_slice(), &[Token::Number(7.5)]);
}

#[test]
fn reduce_splices_in_place() {
    let mut tokens = sequence(&[Token::Number(1.0),
                                Token::Operator('-'),
                                Token::Number(2.0),
                                Token::Operator('^'),
                                Token::Number(3.0),
                                Token::Operator('*'),
                                Token::Number(2.0)]);
    assert_eq!(reduce(&mut tokens), Ok(-15.0));
    assert_eq!(tokens.len(), 1);
}

#[test]
fn reduce_empty_sequence_is_zero() {
    assert_eq!(reduce(&mut TokenSequence::new()), Ok(0.0));
}

#[test]
fn reduce_rejects_dangling_operators() {
    let mut tokens = sequence(&[Token::Operator('+'), Token::Number(1.0)]);
    assert_eq!(reduce(&mut tokens),
               Err(RuntimeError::SyntaxError { operator: Some('+') }));

    let mut tokens = sequence(&[Token::Number(1.0), Token::Operator('/')]);
    assert_eq!(reduce(&mut tokens),
               Err(RuntimeError::SyntaxError { operator: Some('/') }));

    let mut tokens = sequence(&[Token::Number(1.0),
                                Token::Operator('^'),
                                Token::Operator('^'),
                                Token::Number(2.0)]);
    assert_eq!(reduce(&mut tokens),
               Err(RuntimeError::SyntaxError { operator: Some('^') }));
}

#[test]
fn reduce_rejects_unknown_symbols_before_reducing() {
    let mut tokens = sequence(&[Token::Number(1.0),
                                Token::Operator('+'),
                                Token::Number(2.0),
                                Token::Operator('?'),
                                Token::Number(3.0)]);
    assert_eq!(reduce(&mut tokens),
               Err(RuntimeError::UnsupportedOperator { operator: '?' }));
    assert_eq!(tokens.len(), 5);
}

#[test]
fn scope_stack_collapses_groups() {
    let mut scopes = ScopeStack::new();
    assert_eq!(scopes.depth(), 0);

    scopes.enter(0);
    scopes.enter(1);
    assert_eq!(scopes.depth(), 2);
    assert_eq!(scopes.current().opened_at, Some(1));

    scopes.push(Token::Number(2.0));
    scopes.push(Token::Operator('*'));
    scopes.push(Token::Number(3.0));
    let value = scopes.leave(7).unwrap();
    assert_eq!(value, 6.0);
    assert_eq!(scopes.depth(), 1);
    assert_eq!(scopes.current().opened_at, Some(0));
    assert!(scopes.current().tokens.is_empty());
}

#[test]
fn scope_stack_rejects_unbalanced_groups() {
    let mut scopes = ScopeStack::new();
    assert_eq!(scopes.leave(4),
               Err(Error::Parse(ParseError::UnmatchedCloseParen { pos: 4 })));

    scopes.enter(2);
    assert_eq!(scopes.finish(),
               Err(Error::Parse(ParseError::UnmatchedOpenParen { pos: 2 })));
}

#[test]
fn tokenizer_resolves_groups_into_numbers() {
    let scopes = Tokenizer::new("-1 + (2 x 3) -e").tokenize().unwrap();
    assert_eq!(scopes.depth(), 0);
    assert_eq!(scopes.current().tokens.as_slice(),
               &[Token::Number(-1.0),
                 Token::Operator('+'),
                 Token::Number(6.0),
                 Token::Operator('-'),
                 Token::Number(consts::E)]);
}

#[test]
fn tokenizer_leaves_open_groups_to_finish() {
    let scopes = Tokenizer::new("1 + (2 * (3").tokenize().unwrap();
    assert_eq!(scopes.depth(), 2);
    assert_eq!(scopes.current().opened_at, Some(9));
    assert_eq!(scopes.finish(),
               Err(Error::Parse(ParseError::UnmatchedOpenParen { pos: 9 })));
}

#[test]
fn tokenizer_keeps_unknown_symbols_as_operators() {
    let scopes = Tokenizer::new("1 $ 2").tokenize().unwrap();
    assert_eq!(scopes.current().tokens.as_slice(),
               &[Token::Number(1.0), Token::Operator('$'), Token::Number(2.0)]);
}

#[test]
fn tokenizer_handles_multibyte_input() {
    let scopes = Tokenizer::new("2 × 3").tokenize().unwrap();
    assert_eq!(scopes.current().tokens.as_slice(),
               &[Token::Number(2.0), Token::Operator('×'), Token::Number(3.0)]);
}

#[test]
fn token_sequence_display() {
    let tokens = sequence(&[Token::Number(1.5), Token::Operator('+'), Token::Number(2.0)]);
    assert_eq!(tokens.to_string(), "1.5 + 2");
}

#[test]
fn format_matches_percent_g() {
    assert_eq!(format_significant(14.0, 10), "14");
    assert_eq!(format_significant(-2.5, 10), "-2.5");
    assert_eq!(format_significant(1.0 / 3.0, 10), "0.3333333333");
    assert_eq!(format_significant(0.0001, 10), "0.0001");
    assert_eq!(format_significant(0.000_01, 10), "1e-05");
    assert_eq!(format_significant(1e20, 10), "1e+20");
    assert_eq!(format_significant(123_456_789_012.0, 10), "1.23456789e+11");
    assert_eq!(format_significant(9_999_999_999.0, 10), "9999999999");
    assert_eq!(format_significant(99_999_999_999.0, 10), "1e+11");
    assert_eq!(format_significant(0.0, 10), "0");
    assert_eq!(format_significant(consts::PI, 3), "3.14");
    assert_eq!(format_significant(f64::INFINITY, 10), "inf");
    assert_eq!(format_significant(f64::NAN, 10), "nan");
}
