//! Property-based tests for the lexer and parser.
//!
//! These check the scanning guarantees that must hold for any input: one token
//! per punctuation character, a single terminating `EOF`, and termination of
//! the parser on arbitrary token soup.

use monkey::interpreter::{
    lexer::Lexer,
    parser::Parser,
    token::{Token, TokenKind},
};
use proptest::prelude::*;

/// Single characters that always lex to a token of their own.
const PUNCTUATION: &[(char, TokenKind)] = &[('(', TokenKind::LParen),
                                            (')', TokenKind::RParen),
                                            ('{', TokenKind::LBrace),
                                            ('}', TokenKind::RBrace),
                                            (',', TokenKind::Comma),
                                            (';', TokenKind::Semicolon),
                                            ('+', TokenKind::Plus),
                                            ('-', TokenKind::Minus),
                                            ('*', TokenKind::Asterisk),
                                            ('/', TokenKind::Slash),
                                            ('<', TokenKind::Lt),
                                            ('>', TokenKind::Gt)];

fn punctuation_strategy() -> impl Strategy<Value = Vec<(char, TokenKind)>> {
    prop::collection::vec(prop::sample::select(PUNCTUATION), 0..64)
}

fn whitespace_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec![' ', '\t', '\n', '\r']), 0..3)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Source built from keywords, names, numbers and operators.
fn program_strategy() -> impl Strategy<Value = String> {
    let word = prop_oneof![Just("let".to_string()),
                           Just("return".to_string()),
                           Just("=".to_string()),
                           Just("==".to_string()),
                           Just("!".to_string()),
                           Just(";".to_string()),
                           "[a-z_]{1,8}",
                           "[0-9]{1,6}",
                           "[-+*/<>(){},]"];
    prop::collection::vec(word, 0..48).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn punctuation_lexes_one_token_per_character(items in punctuation_strategy(),
                                                 gaps in prop::collection::vec(whitespace_strategy(), 64)) {
        let mut source = String::new();
        for ((ch, _), gap) in items.iter().zip(&gaps) {
            source.push_str(gap);
            source.push(*ch);
        }

        let tokens: Vec<Token> = Lexer::new(&source).collect();

        prop_assert_eq!(tokens.len(), items.len() + 1);
        for (token, (ch, kind)) in tokens.iter().zip(&items) {
            prop_assert_eq!(token.kind, *kind);
            prop_assert_eq!(token.literal, ch.to_string());
        }
        let last = tokens.last().unwrap();
        prop_assert_eq!(last.kind, TokenKind::Eof);
        prop_assert_eq!(last.literal, "");
    }

    #[test]
    fn lexing_never_panics_and_ends_in_eof(source in any::<String>()) {
        let tokens: Vec<Token> = Lexer::new(&source).collect();

        prop_assert_eq!(tokens.iter().filter(|t| t.is(TokenKind::Eof)).count(), 1);
        prop_assert!(tokens.last().unwrap().is(TokenKind::Eof));
        // Every literal is a non-empty piece of the source, except the final EOF.
        for token in &tokens[..tokens.len() - 1] {
            prop_assert!(!token.literal.is_empty());
            prop_assert!(source.contains(token.literal));
        }
    }

    #[test]
    fn eof_is_sticky(source in any::<String>(), extra in 1usize..8) {
        let mut lexer = Lexer::new(&source);
        while !lexer.next_token().is(TokenKind::Eof) {}

        for _ in 0..extra {
            prop_assert!(lexer.next_token().is(TokenKind::Eof));
        }
    }

    #[test]
    fn parser_terminates_on_arbitrary_programs(source in program_strategy()) {
        let mut parser = Parser::new(Lexer::new(&source));
        let program = parser.parse_program();

        let lets = source.split_whitespace().filter(|w| *w == "let").count();
        let returns = source.split_whitespace().filter(|w| *w == "return").count();
        prop_assert!(program.len() + parser.errors().len() <= lets + returns);
        prop_assert!(parser.current().is(TokenKind::Eof));
    }
}
