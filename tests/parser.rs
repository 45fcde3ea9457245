use pretty_assertions::assert_eq;
use rlite::{
    ast::{BinaryOperator, Expr, LiteralValue, Statement},
    error::ParseError,
    parse,
};

fn single_expr(src: &str) -> Expr {
    let program = parse(src).unwrap_or_else(|e| panic!("parse failed: {e}"));
    match program.statements.as_slice() {
        [Statement::Expression { expr, .. }] => expr.clone(),
        other => panic!("expected one expression statement, got {other:?}"),
    }
}

fn num(n: i64) -> Box<Expr> {
    Box::new(Expr::Literal { value: n.into(),
                             line:  1, })
}

#[test]
fn arithmetic_is_left_associative() {
    let expected = Expr::BinaryOp { left:  Box::new(Expr::BinaryOp { left:  num(8),
                                                                     op:    BinaryOperator::Sub,
                                                                     right: num(3),
                                                                     line:  1, }),
                                    op:    BinaryOperator::Sub,
                                    right: num(2),
                                    line:  1, };

    assert_eq!(single_expr("8 - 3 - 2"), expected);
}

#[test]
fn comparison_binds_tighter_than_multiplication() {
    let expected = Expr::BinaryOp { left:  num(2),
                                    op:    BinaryOperator::Mul,
                                    right: Box::new(Expr::BinaryOp { left:  num(3),
                                                                     op:    BinaryOperator::Less,
                                                                     right: num(4),
                                                                     line:  1, }),
                                    line:  1, };

    assert_eq!(single_expr("2 * 3 < 4"), expected);
}

#[test]
fn calls_and_literals() {
    let expected = Expr::Call { name:      "paste".into(),
                                arguments: vec![Expr::Literal { value: LiteralValue::from("a"),
                                                                line:  1, },
                                                Expr::Identifier { name: "b".into(),
                                                                   line: 1, }],
                                line:      1, };

    assert_eq!(single_expr("paste(\"a\", b)"), expected);
    assert!(single_expr("c()").is_call_to(&["c"]));
}

#[test]
fn separators_split_statements() {
    let program = parse("\n\nx <- 1\n\ny <- 2\n").unwrap();

    assert_eq!(program.len(), 2);
    assert_eq!(program.statements[1].line_number(), 5);
}

#[test]
fn else_binds_to_nearest_if() {
    let program = parse("if (a) if (b) 1 else 2").unwrap();

    let Statement::If { then_branch: Some(inner),
                        else_branch: None,
                        .. } = &program.statements[0]
    else {
        panic!("outer if should have no else");
    };
    assert!(matches!(inner.as_ref(), Statement::If { else_branch: Some(_), .. }));
}

#[test]
fn empty_bodies_are_allowed() {
    let program = parse("while (x) {}\nfor (i in y) { }\nif (z) {} else {}").unwrap();
    assert_eq!(program.len(), 3);

    let Statement::For { var, body, .. } = &program.statements[1] else {
        panic!("expected a for loop");
    };
    assert_eq!(var, "i");
    assert!(matches!(body.as_deref(), Some(Statement::Block { statements, .. }) if statements.is_empty()));
}

#[test]
fn blocks_span_lines() {
    let program = parse("{\n  a <- 1\n\n  b <- 2\n}").unwrap();

    let Statement::Block { statements, .. } = &program.statements[0] else {
        panic!("expected a block");
    };
    assert_eq!(statements.len(), 2);
}

#[test]
fn two_statements_on_one_line_are_rejected() {
    assert_eq!(parse("x <- 1 y <- 2"),
               Err(ParseError::UnexpectedToken { token: "identifier 'y'".into(),
                                                 line:  1, }));
}

#[test]
fn end_of_input_reports_last_line() {
    assert_eq!(parse("x <- 1\ny <- (2 +"),
               Err(ParseError::UnexpectedEndOfInput { line: 2 }));
}

#[test]
fn missing_comma_between_arguments() {
    let err = parse("cat(1 2)").unwrap_err();

    assert_eq!(err.to_string(),
               "Syntax error on line 1: expected ',' or ')', found number '2'");
}

#[test]
fn else_on_its_own_line_is_rejected() {
    let err = parse("if (1) {\n  1\n}\nelse {\n  2\n}").unwrap_err();
    assert_eq!(err.line(), 4);
}

#[test]
fn unary_minus_is_not_an_expression() {
    assert!(parse("x <- -1").is_err());
}
