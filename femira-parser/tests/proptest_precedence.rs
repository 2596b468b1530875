//! Property-based tests for the parser's lookahead and precedence ladder.
//!
//! Tests the following properties:
//! - `is_token` reports the kind at any position and never moves the cursor
//! - Operators of the same level fold to the left
//! - Multiplicative operators bind tighter than additive ones

use femira_parser::lexer::{make_tokens, TokenKind};
use femira_parser::parser::Parser;
use proptest::prelude::*;

fn render(source: &str) -> String {
    let tokens = make_tokens(source).unwrap();
    let mut parser = Parser::new(tokens);
    let ast = parser.parse_expression(false).unwrap();
    assert!(parser.at_end());
    ast.to_string()
}

/// Builds `n0 op1 n1 op2 n2 ...` together with its expected left-folded rendering.
fn chain(first: u32, rest: &[(&str, u32)]) -> (String, String) {
    let mut source = first.to_string();
    let mut expected = first.to_string();
    for (op, n) in rest {
        source.push_str(&format!(" {} {}", op, n));
        expected = format!("({} {} {})", op, expected, n);
    }
    (source, expected)
}

fn additive() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("+"), Just("-")]
}

fn multiplicative() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("*"), Just("/")]
}

fn any_kind() -> impl Strategy<Value = TokenKind> {
    prop_oneof![
        Just(TokenKind::Digit),
        Just(TokenKind::Identifier),
        Just(TokenKind::Plus),
        Just(TokenKind::Semicolon),
        Just(TokenKind::Print),
        Just(TokenKind::LParen),
    ]
}

proptest! {
    #[test]
    fn is_token_matches_kind_without_moving(
        kinds in prop::collection::vec(any_kind(), 1..4),
        position in 0usize..8,
    ) {
        let tokens = make_tokens("print x + 1; (2)").unwrap();
        let parser = Parser::new(tokens.clone());

        let expected = tokens
            .get(position)
            .map_or(false, |token| kinds.contains(&token.kind));
        prop_assert_eq!(parser.is_token(&kinds, position), expected);
        prop_assert_eq!(parser.cursor(), 0);
    }

    #[test]
    fn additive_chains_are_left_associative(
        first in 0u32..1000,
        rest in prop::collection::vec((additive(), 0u32..1000), 1..12),
    ) {
        let (source, expected) = chain(first, &rest);
        prop_assert_eq!(render(&source), expected);
    }

    #[test]
    fn multiplicative_chains_are_left_associative(
        first in 0u32..1000,
        rest in prop::collection::vec((multiplicative(), 0u32..1000), 1..12),
    ) {
        let (source, expected) = chain(first, &rest);
        prop_assert_eq!(render(&source), expected);
    }

    #[test]
    fn multiplication_binds_tighter_than_addition(
        a in 0u32..100,
        add in additive(),
        b in 0u32..100,
        mul in multiplicative(),
        c in 0u32..100,
    ) {
        prop_assert_eq!(
            render(&format!("{} {} {} {} {}", a, add, b, mul, c)),
            format!("({} {} ({} {} {}))", add, a, mul, b, c)
        );
        prop_assert_eq!(
            render(&format!("{} {} {} {} {}", a, mul, b, add, c)),
            format!("({} ({} {} {}) {})", add, mul, a, b, c)
        );
    }
}
