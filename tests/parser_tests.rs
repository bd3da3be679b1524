use sapling::{parse, parse_source, tokenize, Config, Error, Node, Token, TokenKind};

fn tokens(spec: &[(TokenKind, &str)]) -> Vec<Token> {
    spec.iter().map(|(k, l)| Token::new(*k, *l)).collect()
}

fn statements(root: &Node) -> &[Node] {
    assert_eq!(root.kind(), "program");
    assert_eq!(root.child_kinds(), vec!["statement_list"]);
    root.children()[0].children()
}

fn failure_messages(source: &str) -> Vec<String> {
    let tokens = tokenize(source).expect("scan failed");
    match parse(tokens) {
        Ok(tree) => panic!("expected failure, got:\n{tree}"),
        Err(failure) => failure.messages(),
    }
}

#[test]
fn repeated_assignments_fill_the_statement_list() {
    for n in [1, 2, 5] {
        let mut spec = Vec::new();
        for _ in 0..n {
            spec.extend([
                (TokenKind::Identifier, "x"),
                (TokenKind::AssignmentOperator, "="),
                (TokenKind::Number, "1"),
                (TokenKind::Newline, "\n"),
            ]);
        }

        let tree = parse(tokens(&spec)).expect("assignments should parse");
        let list = statements(tree.root());
        assert_eq!(list.len(), n);
        assert!(list.iter().all(|s| s.kind() == "assignment_statement"));
    }
}

#[test]
fn unknown_first_token_logs_one_statement_type_error() {
    let result = parse(tokens(&[(TokenKind::Number, "5")]));
    let failure = result.expect_err("a bare number is not a statement");

    let messages = failure.messages();
    assert_eq!(
        messages
            .iter()
            .filter(|m| m.starts_with("expected a statement type"))
            .count(),
        1
    );
    assert_eq!(messages[0], "expected a statement type, found NUMBER: 5");
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let tree = parse(tokenize("x = a + 1 * 2\n").expect("scan failed")).expect("parse failed");
    let assignment = &statements(tree.root())[0];
    let expression = &assignment.children()[2];

    assert_eq!(
        expression.child_kinds(),
        vec!["term", "arithmetic_operator", "term"]
    );
    assert_eq!(expression.children()[1].value(), Some("+"));
    assert_eq!(expression.children()[0].child_kinds(), vec!["identifier"]);
    assert_eq!(
        expression.children()[2].child_kinds(),
        vec!["number", "arithmetic_operator", "number"]
    );
    assert_eq!(expression.children()[2].children()[1].value(), Some("*"));
}

#[test]
fn parentheses_leave_only_the_inner_expression() {
    let tree = parse(tokenize("x = (a + 1)\n").expect("scan failed")).expect("parse failed");
    let expression = &statements(tree.root())[0].children()[2];

    // expression → term → (inner expression)
    let inner = &expression.children()[0].children()[0];
    assert_eq!(inner.kind(), "expression");
    assert_eq!(
        inner.child_kinds(),
        vec!["term", "arithmetic_operator", "term"]
    );
}

#[test]
fn unclosed_parenthesis_is_reported() {
    assert_eq!(
        failure_messages("x = (a + 1\n"),
        vec!["expected 'CLOSING_PARENTHESIS', found NEWLINE: \\n"]
    );
}

#[test]
fn conditional_reports_only_the_leftover_condition() {
    assert_eq!(
        failure_messages("if ready:\n    x = 1\n"),
        vec!["expected 'NEWLINE', found IDENTIFIER: ready"]
    );
}

#[test]
fn loop_swallows_its_own_newline() {
    assert_eq!(
        failure_messages("for i:\n  x = 1\n"),
        vec!["expected 'NEWLINE', found end of input"]
    );
}

#[test]
fn display_matches_the_preorder_layout() {
    let tree = parse(tokenize("x = 1\ny = x + 2\n").expect("scan failed")).expect("parse failed");

    let expected = "\
program: None
  statement_list: None
    assignment_statement: None
      identifier: x
      assignment_operator: =
      expression: None
        term: None
          number: 1
    assignment_statement: None
      identifier: y
      assignment_operator: =
      expression: None
        term: None
          identifier: x
        arithmetic_operator: +
        term: None
          number: 2
";
    assert_eq!(tree.to_string(), expected);
}

#[test]
fn display_is_idempotent() {
    let tree = parse(tokenize("total = (price + tax) * qty\n").expect("scan failed"))
        .expect("parse failed");

    let first = tree.render();
    let second = tree.render();
    assert_eq!(first, second);
    assert_eq!(first, tree.to_string());
}

#[test]
fn string_literals_are_factors() {
    let tree = parse(tokenize("greeting = \"hi there\"\n").expect("scan failed"))
        .expect("parse failed");
    let term = &statements(tree.root())[0].children()[2].children()[0];

    assert_eq!(term.child_kinds(), vec!["string_literal"]);
    assert_eq!(term.children()[0].value(), Some("\"hi there\""));
}

#[test]
fn diagnostics_carry_source_locations() {
    let failure = parse(tokenize("x = 1\n5 = y\n").expect("scan failed"))
        .expect_err("second line is not a statement");

    let first = &failure.diagnostics()[0];
    assert_eq!(first.message, "expected a statement type, found NUMBER: 5");
    assert_eq!(first.span.map(|s| (s.line, s.column)), Some((2, 0)));
}

#[test]
fn parse_source_honours_the_scanner_config() {
    let mut config = Config::default();
    config.scanner.emit_whitespace = true;

    let tree = parse_source("x = 1\n", &config).expect("whitespace around '=' is skipped");
    assert_eq!(statements(tree.root()).len(), 1);

    // operators never skip the whitespace in front of them
    let err = parse_source("x = a + 1\n", &config).expect_err("should fail");
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn parse_source_surfaces_scan_errors() {
    let err = parse_source("x = 1 ?\n", &Config::default()).expect_err("should fail");
    assert!(matches!(err, Error::Scan(_)));
}

#[test]
fn json_output_mirrors_the_tree() {
    let tree = parse(tokenize("x = 1\n").expect("scan failed")).expect("parse failed");
    let json: serde_json::Value =
        serde_json::from_str(&tree.to_json().expect("serialize")).expect("valid json");

    assert_eq!(json["kind"], "program");
    assert_eq!(json["value"], serde_json::Value::Null);
    assert_eq!(json["children"][0]["kind"], "statement_list");
}
