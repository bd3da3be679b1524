use sapling::{tokenize, tokenize_with, ScanError, ScannerConfig, Span, Token, TokenKind};
use TokenKind::*;

fn scan(source: &str) -> Vec<Token> {
    tokenize(source).expect("scan failed")
}

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).into_iter().map(|t| t.kind).collect()
}

#[test]
fn assignment_line() {
    let tokens = scan("total = price * 2\n");

    let pairs: Vec<_> = tokens
        .iter()
        .map(|t| (t.kind, t.lexeme.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (Identifier, "total"),
            (AssignmentOperator, "="),
            (Identifier, "price"),
            (ArithmeticOperator, "*"),
            (Number, "2"),
            (Newline, "\n"),
        ]
    );
    assert_eq!(tokens[2].span, Span::new(1, 8));
}

#[test]
fn whitespace_tokens_only_when_enabled() {
    assert_eq!(kinds("x = 1\n"), vec![Identifier, AssignmentOperator, Number, Newline]);

    let config = ScannerConfig {
        emit_whitespace: true,
        ..ScannerConfig::default()
    };
    let kinds: Vec<_> = tokenize_with("x = 1\n", &config)
        .expect("scan failed")
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![Identifier, Whitespace, AssignmentOperator, Whitespace, Number, Newline]
    );
}

#[test]
fn deeper_lines_get_an_indent_token() {
    let tokens = scan("for i:\n    x = 1\n");

    let indent = tokens
        .iter()
        .find(|t| t.kind == Indent)
        .expect("no indent token");
    assert_eq!(indent.lexeme, "    ");
    assert_eq!(indent.span, Span::new(2, 0));
    assert_eq!(
        kinds("for i:\n    x = 1\n"),
        vec![
            LoopKeyword, Identifier, Colon, Newline,
            Indent, Identifier, AssignmentOperator, Number, Newline,
        ]
    );
}

#[test]
fn dedent_produces_nothing_and_reindent_indents_again() {
    let indents = scan("for i:\n  a = 1\nb = 2\n  c = 3\n")
        .into_iter()
        .filter(|t| t.kind == Indent)
        .map(|t| t.span.line)
        .collect::<Vec<_>>();

    assert_eq!(indents, vec![2, 4]);
}

#[test]
fn same_depth_lines_do_not_indent() {
    let indents = scan("for i:\n  a = 1\n  b = 2\n")
        .into_iter()
        .filter(|t| t.kind == Indent)
        .count();
    assert_eq!(indents, 1);
}

#[test]
fn missing_final_newline_is_synthesized() {
    assert_eq!(kinds("x = 1"), vec![Identifier, AssignmentOperator, Number, Newline]);
}

#[test]
fn blank_and_comment_lines_are_skipped() {
    let tokens = scan("\n   \n# heading\nx = 1\n\n");

    assert_eq!(tokens.len(), 4);
    assert!(tokens.iter().all(|t| t.span.line == 4));
}

#[test]
fn empty_source_has_no_tokens() {
    assert!(scan("").is_empty());
}

#[test]
fn strings_keep_their_quotes() {
    let tokens = scan("a = 'one'\nb = \"two words\"\n");

    let strings: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == StringLiteral)
        .map(|t| t.lexeme.as_str())
        .collect();
    assert_eq!(strings, vec!["'one'", "\"two words\""]);
}

#[test]
fn keywords_are_classified() {
    assert_eq!(
        kinds("if elif else for while iffy\n"),
        vec![
            ConditionalKeyword,
            ConditionalKeyword,
            ConditionalKeyword,
            LoopKeyword,
            LoopKeyword,
            Identifier,
            Newline,
        ]
    );
}

#[test]
fn decimal_numbers_are_one_token() {
    let tokens = scan("rate = 3.25\n");
    assert_eq!(tokens[2].kind, Number);
    assert_eq!(tokens[2].lexeme, "3.25");
}

#[test]
fn unexpected_character_is_located() {
    let err = tokenize("x = 1 ?\n").expect_err("'?' is not a token");

    match err {
        ScanError::UnexpectedCharacter { ch, span } => {
            assert_eq!(ch, '?');
            assert_eq!(span, Span::new(1, 6));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unterminated_string_is_located() {
    let err = tokenize("s = \"abc\n").expect_err("string never closes");

    assert!(matches!(err, ScanError::UnterminatedString { .. }));
    assert_eq!(err.span(), Some(Span::new(1, 4)));
    assert_eq!(err.to_string(), "unterminated string literal");
}
