use std::fs;

use numeral::{ast::Node, error::ErrorKind, run};
use walkdir::WalkDir;

fn corpus(dir: &str) -> Vec<(String, String)> {
    WalkDir::new(dir).sort_by_file_name()
                     .into_iter()
                     .filter_map(Result::ok)
                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "expr"))
                     .map(|e| {
                         let path = e.path();
                         let content = fs::read_to_string(path).unwrap_or_else(|e| {
                                                                   panic!("Failed to read {path:?}: {e}")
                                                               });
                         (path.display().to_string(), content.trim_end_matches('\n').to_string())
                     })
                     .collect()
}

#[test]
fn valid_corpus_parses() {
    let files = corpus("tests/corpus/valid");
    assert!(!files.is_empty(), "No examples found in tests/corpus/valid");

    for (name, source) in files {
        if let Err(e) = run(&name, &source) {
            panic!("Example {name} failed:\n{}", e.as_string());
        }
    }
}

#[test]
fn invalid_corpus_is_rejected() {
    let files = corpus("tests/corpus/invalid");
    assert!(!files.is_empty(), "No examples found in tests/corpus/invalid");

    for (name, source) in files {
        if let Ok(tree) = run(&name, &source) {
            panic!("Example {name} parsed but was expected to fail: {tree}");
        }
    }
}

fn assert_tree(src: &str, expected: &str) {
    match run("<test>", src) {
        Ok(tree) => assert_eq!(tree.to_string(), expected, "source: {src}"),
        Err(e) => panic!("Expression failed:\n{}", e.as_string()),
    }
}

fn assert_failure(src: &str, kind: ErrorKind, details: &str) -> numeral::error::ParseError {
    match run("<test>", src) {
        Ok(tree) => panic!("Expression succeeded but was expected to fail: {tree}"),
        Err(e) => {
            assert_eq!(e.kind, kind, "source: {src}");
            assert_eq!(e.details, details, "source: {src}");
            e
        },
    }
}

#[test]
fn precedence() {
    assert_tree("2+3*4", "(INT:2, PLUS, (INT:3, MUL, INT:4))");
    assert_tree("2*3+4", "((INT:2, MUL, INT:3), PLUS, INT:4)");
    assert_tree("1 - 6 / 3", "(INT:1, MINUS, (INT:6, DIV, INT:3))");
}

#[test]
fn left_associativity() {
    assert_tree("8/4/2", "((INT:8, DIV, INT:4), DIV, INT:2)");
    assert_tree("10 - 3 - 2", "((INT:10, MINUS, INT:3), MINUS, INT:2)");
}

#[test]
fn parentheses_override_precedence() {
    assert_tree("(2+3)*4", "((INT:2, PLUS, INT:3), MUL, INT:4)");
    assert_tree("8/(4/2)", "(INT:8, DIV, (INT:4, DIV, INT:2))");
}

#[test]
fn unary_signs() {
    assert_tree("--5", "(MINUS, (MINUS, INT:5))");
    assert_tree("+-3", "(PLUS, (MINUS, INT:3))");
    assert_tree("-(1+2)", "(MINUS, (INT:1, PLUS, INT:2))");
    assert_tree("2*-3", "(INT:2, MUL, (MINUS, INT:3))");
    assert_tree("1 - -1", "(INT:1, MINUS, (MINUS, INT:1))");
}

#[test]
fn decimals() {
    assert_tree("1.5 * 2.", "(FLOAT:1.5, MUL, FLOAT:2.0)");
    assert_tree("0.25", "FLOAT:0.25");
}

#[test]
fn unmatched_parenthesis_points_at_end_of_input() {
    let err = assert_failure("(1+2", ErrorKind::InvalidSyntax, "Expected ')'");
    assert_eq!(err.span.start.index, 4);
    assert_eq!(err.as_string(),
               "ERROR Invalid Syntax: Expected ')'\n  File <test>, line 1\n\n(1+2\n    ^");
}

#[test]
fn trailing_input_points_at_second_token() {
    let err = assert_failure("1 2", ErrorKind::InvalidSyntax, "Expected '+', '-', '*' or '/'");
    assert_eq!((err.span.start.column, err.span.end.column), (2, 3));
}

#[test]
fn missing_operand() {
    assert_failure("1 + * 2", ErrorKind::InvalidSyntax, "Expected int or float");
    assert_failure("", ErrorKind::InvalidSyntax, "Expected int or float");
    assert_failure(")", ErrorKind::InvalidSyntax, "Expected int or float");
}

#[test]
fn illegal_characters() {
    let err = assert_failure("12 + x", ErrorKind::IllegalCharacter, "'x'");
    assert_eq!(err.as_string(),
               "ERROR Illegal Character: 'x'\n  File <test>, line 1\n\n12 + x\n     ^");
    assert_failure("1.2.3", ErrorKind::IllegalCharacter, "'.'");
    assert_failure("2 ^ 3", ErrorKind::IllegalCharacter, "'^'");
}

#[test]
fn lexical_errors_win_over_syntax_errors() {
    // Both a syntax error (`* *`) and an illegal character; lexing fails first.
    assert_failure("* * $", ErrorKind::IllegalCharacter, "'$'");
}

#[test]
fn integers_have_no_width_limit() {
    assert_tree("12345678901234567890", "INT:12345678901234567890");
    assert_tree("-9223372036854775808", "(MINUS, INT:9223372036854775808)");
    assert_tree("340282366920938463463374607431768211456 / 2",
                "(INT:340282366920938463463374607431768211456, DIV, INT:2)");
}

#[test]
fn hostile_nesting_is_a_syntax_error() {
    let signs = format!("{}1", "-".repeat(200_000));
    let parens = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    let chain = format!("1{}", " - 1".repeat(100_000));

    for src in [&signs, &parens, &chain] {
        let err = run("<test>", src).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidSyntax);
        assert_eq!(err.details, "Expression nested too deeply");
    }
}

#[test]
fn node_spans_cover_operands() {
    let tree = run("<test>", "(1 + 2) * 30").unwrap();
    let span = tree.span();
    assert_eq!((span.start.index, span.end.index), (1, 12));
    assert!(matches!(tree, Node::BinaryOp { .. }));
    assert_eq!(tree.line_number(), 1);
    assert_eq!(tree.size(), 5);
}

#[test]
fn same_source_gives_same_result() {
    for src in ["1 + 2 * (3 - -4)", "(1 +", "7 @ 2"] {
        assert_eq!(run("<test>", src), run("<test>", src));
    }
}

#[test]
fn source_name_reaches_diagnostics() {
    let err = run("sums/monthly.expr", "1 +").unwrap_err();
    assert_eq!(err.span.start.source_name(), "sums/monthly.expr");
    assert!(err.as_string().contains("File sums/monthly.expr, line 1"));
}
