use lofy::{
    ast::{Node, Position},
    error::{Error, LexErrorKind, ParseError},
    interpreter::parser::core::{Parsed, parse_source},
};
use pretty_assertions::assert_eq;

/// Renders a node as a compact s-expression so tree shapes can be compared
/// as strings.
fn sexpr(node: &Node) -> String {
    match node {
        Node::IntLiteral { value, .. } => value.to_string(),
        Node::FloatLiteral { value, .. } => format!("{value:?}"),
        Node::StringLiteral { value, .. } => format!("{value:?}"),
        Node::Identifier { name, .. } => name.clone(),
        Node::BinaryOp { op, left, right, .. } => {
            format!("({op} {} {})", sexpr(left), sexpr(right))
        },
        Node::Assignment { name, value, .. } => format!("(= {name} {})", sexpr(value)),
        Node::If { condition,
                   then_branch,
                   else_branch,
                   .. } => match else_branch {
            Some(else_branch) => {
                format!("(if {} {} {})", sexpr(condition), sexpr(then_branch), sexpr(else_branch))
            },
            None => format!("(if {} {})", sexpr(condition), sexpr(then_branch)),
        },
        Node::While { condition, body, .. } => format!("(while {} {})", sexpr(condition), sexpr(body)),
        Node::Print { expr, .. } => format!("(print {})", sexpr(expr)),
        Node::Block { statements, .. } => {
            let inner = statements.iter().map(sexpr).collect::<Vec<_>>();
            format!("{{{}}}", inner.join(" "))
        },
    }
}

fn parse_ok(source: &str) -> Vec<String> {
    let parsed = parse_source(source);
    assert!(parsed.is_ok(), "unexpected errors in {source:?}: {:?}", parsed.errors);
    parsed.statements().iter().map(sexpr).collect()
}

fn first_parse_error(parsed: &Parsed) -> &ParseError {
    parsed.errors
          .iter()
          .find_map(|e| match e {
              Error::Parse(e) => Some(e),
              _ => None,
          })
          .expect("expected a syntax error")
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(parse_ok("1 + 2 * 3"), vec!["(+ 1 (* 2 3))"]);
    assert_eq!(parse_ok("(1 + 2) * 3"), vec!["(* (+ 1 2) 3)"]);
    assert_eq!(parse_ok("8 / 4 / 2"), vec!["(/ (/ 8 4) 2)"]);
}

#[test]
fn comparisons_share_the_additive_level() {
    assert_eq!(parse_ok("a < b + 1"), vec!["(+ (< a b) 1)"]);
    assert_eq!(parse_ok("x == 1 * 2"), vec!["(== x (* 1 2))"]);
    assert_eq!(parse_ok("a - b != c"), vec!["(!= (- a b) c)"]);
}

#[test]
fn literals_of_every_kind() {
    assert_eq!(parse_ok("42\n2.5\n\"hi\"\nname\n"), vec!["42", "2.5", "\"hi\"", "name"]);
}

#[test]
fn assignment_takes_a_full_expression() {
    assert_eq!(parse_ok("total = a * (b + 1)"), vec!["(= total (* a (+ b 1)))"]);
}

#[test]
fn assignment_position_is_the_target() {
    let parsed = parse_source("\n  count = 1");

    assert_eq!(parsed.statements()[0].position(), Position::new(2, 3));
}

#[test]
fn rejects_assignment_to_an_expression() {
    let parsed = parse_source("a + 1 = 2");

    assert_eq!(first_parse_error(&parsed),
               &ParseError::InvalidAssignmentTarget { line: 1, column: 3 });
    assert!(parsed.statements().is_empty());
}

#[test]
fn chained_assignment_is_not_allowed() {
    let parsed = parse_source("a = b = 1");

    assert!(matches!(first_parse_error(&parsed), ParseError::UnexpectedToken { column: 7, .. }));
}

#[test]
fn recovers_at_the_next_line() {
    let parsed = parse_source("x = (1\ny = 2\n");

    assert_eq!(parsed.statements().iter().map(sexpr).collect::<Vec<_>>(), vec!["(= y 2)"]);
    assert_eq!(first_parse_error(&parsed),
               &ParseError::UnexpectedToken { expected: "')' to close '('".to_string(),
                                              found:    "newline".to_string(),
                                              line:     1,
                                              column:   7, });
}

#[test]
fn reports_every_broken_line() {
    let parsed = parse_source("print(\nx = 1\n* 2\ny = 3\n");

    assert_eq!(parsed.errors.len(), 2);
    assert_eq!(parsed.statements().iter().map(sexpr).collect::<Vec<_>>(),
               vec!["(= x 1)", "(= y 3)"]);
}

#[test]
fn statements_need_a_terminator() {
    let parsed = parse_source("x = 1 y = 2");

    assert!(matches!(first_parse_error(&parsed),
                     ParseError::UnexpectedToken { column: 7, .. }));
}

#[test]
fn semicolons_separate_statements() {
    assert_eq!(parse_ok("a = 1; b = 2;; print(a)"), vec!["(= a 1)", "(= b 2)", "(print a)"]);
}

#[test]
fn lexical_errors_are_collected_alongside_statements() {
    let parsed = parse_source("x = 1\ny = 2 ! 3\nz = 4\n");

    assert!(matches!(parsed.errors.first(),
                     Some(Error::Lex(e)) if e.kind == LexErrorKind::BareBang && e.line == 2));
    assert!(parsed.statements().iter().map(sexpr).any(|s| s == "(= z 4)"));
}

#[test]
fn print_requires_parentheses() {
    let parsed = parse_source("print 1");

    assert!(matches!(first_parse_error(&parsed),
                     ParseError::UnexpectedToken { expected, column: 7, .. } if expected == "'(' after 'print'"));
}

#[test]
fn inline_if_else() {
    assert_eq!(parse_ok("if x > 1: print(x) else print(0)"),
               vec!["(if (> x 1) (print x) (print 0))"]);
    assert_eq!(parse_ok("if x: y = 1"), vec!["(if x (= y 1))"]);
}

#[test]
fn indented_while_block() {
    let source = "i = 0\nwhile i < 3:\n  print(i)\n  i = i + 1\nprint(i)\n";

    assert_eq!(parse_ok(source),
               vec!["(= i 0)",
                    "(while (< i 3) {(print i) (= i (+ i 1))})",
                    "(print i)"]);
}

#[test]
fn indented_if_else_blocks() {
    let source = "if a:\n    b = 1\n    c = 2\nelse:\n    b = 0\nd = 3\n";

    assert_eq!(parse_ok(source),
               vec!["(if a {(= b 1) (= c 2)} {(= b 0)})", "(= d 3)"]);
}

#[test]
fn nested_blocks_close_by_indentation() {
    let source = "while a:\n  while b:\n    b = b - 1\n  a = a - 1\n";

    assert_eq!(parse_ok(source),
               vec!["(while a {(while b {(= b (- b 1))}) (= a (- a 1))})"]);
}

#[test]
fn blank_lines_inside_a_block_are_skipped() {
    let source = "while a:\n  b = 1\n\n  # comment\n  c = 2\n";

    assert_eq!(parse_ok(source), vec!["(while a {(= b 1) (= c 2)})"]);
}

#[test]
fn a_block_must_be_indented() {
    let parsed = parse_source("while x:\nprint(x)\n");

    assert!(matches!(first_parse_error(&parsed),
                     ParseError::UnexpectedToken { expected, line: 2, column: 1, .. } if expected == "an indented block"));
}

#[test]
fn a_block_may_not_be_empty() {
    let parsed = parse_source("if x:\n");

    assert!(matches!(first_parse_error(&parsed),
                     ParseError::UnexpectedToken { expected, .. } if expected == "an indented block"));
}

#[test]
fn if_needs_a_colon() {
    let parsed = parse_source("if x print(x)");

    assert!(matches!(first_parse_error(&parsed),
                     ParseError::UnexpectedToken { column: 6, .. }));
}

#[test]
fn reserved_words_are_not_expressions() {
    let parsed = parse_source("def f");

    assert_eq!(first_parse_error(&parsed).to_string(),
               "Error on line 1, column 1: Expected an expression, found 'def'.");
}

#[test]
fn oversized_integer_literals_are_rejected() {
    let parsed = parse_source("x = 99999999999999999999");

    assert!(matches!(first_parse_error(&parsed),
                     ParseError::LiteralTooLarge { line: 1, column: 5, .. }));
}

#[test]
fn empty_input_is_an_empty_program() {
    for source in ["", "\n\n", "# only a comment\n", ";"] {
        let parsed = parse_source(source);
        assert!(parsed.is_ok());
        assert!(parsed.statements().is_empty());
    }
}

#[test]
fn always_terminates_on_garbage() {
    let inputs = ["((((", "))))", "= = =", "if if if", "else", "while", ": : :", "1 2 3 4", "print(print(", "\"", "!!!"];

    for source in inputs {
        let parsed = parse_source(source);
        assert!(!parsed.is_ok(), "expected an error for {source:?}");
    }
}

#[test]
fn outdented_else_belongs_to_the_outer_if() {
    let source = "if a:\n  if b: print(1)\nelse: print(2)\n";

    assert_eq!(parse_ok(source), vec!["(if a {(if b (print 1))} (print 2))"]);
}

#[test]
fn aligned_else_belongs_to_the_inner_if() {
    let source = "if a:\n  if b: print(1)\n  else: print(2)\n";

    assert_eq!(parse_ok(source), vec!["(if a {(if b (print 1) (print 2))})"]);
}

#[test]
fn misaligned_else_is_an_error() {
    let parsed = parse_source("if a: print(1)\n  else: print(2)\n");

    assert_eq!(first_parse_error(&parsed).to_string(),
               "Error on line 2, column 3: Expected an expression, found 'else'.");
}

#[test]
fn broken_block_is_skipped_entirely() {
    let parsed = parse_source("i = 0\nwhile i < 3:\n  print(i +)\n  i = i + 1\nprint(i)\n");

    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(parsed.statements().iter().map(sexpr).collect::<Vec<_>>(),
               vec!["(= i 0)", "(print i)"]);
}

#[test]
fn broken_nested_block_discards_the_outer_statement() {
    let source = "while a:\n  while b:\n    b = (\n    c = 1\n  d = 2\ne = 3\n";
    let parsed = parse_source(source);

    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(parsed.statements().iter().map(sexpr).collect::<Vec<_>>(), vec!["(= e 3)"]);
}

#[test]
fn broken_header_skips_its_block() {
    let parsed = parse_source("while x +:\n  y = 1\nz = 2\n");

    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(parsed.statements().iter().map(sexpr).collect::<Vec<_>>(), vec!["(= z 2)"]);
}
