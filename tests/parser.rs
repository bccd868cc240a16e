use monkey::{
    ast::Statement,
    error::ParseError,
    interpreter::{lexer::Lexer, parser::Parser, token::TokenKind},
};

fn parse(source: &str) -> (Vec<Statement<'_>>, Vec<String>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    let errors = parser.errors().iter().map(ToString::to_string).collect();

    (program.statements, errors)
}

#[test]
fn window_is_primed_with_two_tokens() {
    let parser = Parser::new(Lexer::new("let x"));

    assert_eq!(parser.current().kind, TokenKind::Let);
    assert_eq!(parser.peek().kind, TokenKind::Ident);
    assert!(parser.cur_token_is(TokenKind::Let));
    assert!(parser.peek_token_is(TokenKind::Ident));
}

#[test]
fn expect_peek_advances_only_on_match() {
    let mut parser = Parser::new(Lexer::new("let 5"));
    let before = *parser.window();

    assert!(!parser.expect_peek(TokenKind::Ident));
    assert_eq!(*parser.window(), before);
    assert_eq!(parser.errors(),
               [ParseError::UnexpectedToken { expected: TokenKind::Ident,
                                              found:    TokenKind::Int,
                                              line:     1, }]);

    assert!(parser.expect_peek(TokenKind::Int));
    assert_eq!(parser.current().literal, "5");
    assert_eq!(parser.peek().kind, TokenKind::Eof);
}

#[test]
fn missing_assign_is_reported() {
    let (statements, errors) = parse("let x 5;");

    assert!(statements.is_empty());
    assert_eq!(errors, ["expected next token to be =, got INT instead"]);
}

#[test]
fn errors_are_collected_in_detection_order() {
    let (statements, errors) = parse("let = 10;\nlet 838383;\nlet x 5;");

    assert!(statements.is_empty());
    assert_eq!(errors,
               ["expected next token to be IDENT, got = instead",
                "expected next token to be IDENT, got INT instead",
                "expected next token to be =, got INT instead"]);
}

#[test]
fn parsing_continues_after_an_error() {
    let (statements, errors) = parse("let x 5; let y = 10;");

    assert_eq!(errors, ["expected next token to be =, got INT instead"]);
    assert_eq!(statements.len(), 1);
    match &statements[0] {
        Statement::Let { name, .. } => assert_eq!(name.value, "y"),
        Statement::Return { .. } => panic!("Expected a let statement"),
    }
}

#[test]
fn one_token_resynchronisation_cascades() {
    // The failed `let` leaves the second `let` current, which then fails on `=`.
    let (statements, errors) = parse("let let = 5;");

    assert!(statements.is_empty());
    assert_eq!(errors,
               ["expected next token to be IDENT, got LET instead",
                "expected next token to be IDENT, got = instead"]);
}

#[test]
fn resynchronisation_can_recover_a_nested_statement() {
    let (statements, errors) = parse("let let x = 5;");

    assert_eq!(errors, ["expected next token to be IDENT, got LET instead"]);
    assert_eq!(statements.len(), 1);
}

#[test]
fn bare_semicolons_are_not_statements() {
    let (statements, errors) = parse(";;;");

    assert!(statements.is_empty());
    assert!(errors.is_empty());
}

#[test]
fn errors_survive_repeated_reads() {
    let mut parser = Parser::new(Lexer::new("let x 5;"));
    parser.parse_program();

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(parser.errors(), parser.errors());
    assert_eq!(parser.errors().len(), 1);
}

#[test]
fn parsing_an_exhausted_parser_yields_nothing() {
    let mut parser = Parser::new(Lexer::new("let x = 1;"));

    assert_eq!(parser.parse_program().len(), 1);
    assert!(parser.parse_program().is_empty());
    assert!(parser.current().is(TokenKind::Eof));
}

#[test]
fn illegal_tokens_reach_the_parser() {
    let (statements, errors) = parse("let @ = 1; return 2;");

    assert_eq!(errors, ["expected next token to be IDENT, got ILLEGAL instead"]);
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].token_literal(), "return");
}

#[test]
fn statements_report_their_token() {
    let (statements, errors) = parse("let answer = 42; return answer;");

    assert!(errors.is_empty());
    assert_eq!(statements[0].token().kind, TokenKind::Let);
    assert_eq!(statements[1].token().kind, TokenKind::Return);
    match &statements[0] {
        Statement::Let { name, .. } => {
            assert_eq!(name.value, "answer");
            assert_eq!(name.token.kind, TokenKind::Ident);
        },
        Statement::Return { .. } => panic!("Expected a let statement"),
    }
}

#[test]
fn value_expressions_are_skipped() {
    let (statements, errors) = parse("let x = fn(a, b) { a + b }; return if (x) { 1 } else { 2 };");

    assert!(errors.is_empty());
    assert_eq!(statements.len(), 2);
}
