use pretty_assertions::assert_eq;
use rlite::{
    error::ParseError,
    interpreter::{evaluator::core::Context, value::core::Value},
    parse, run,
};

fn output(src: &str) -> Vec<String> {
    let mut context = Context::new();
    run(&mut context, src).unwrap_or_else(|e| panic!("Script failed: {e}"))
                          .output
}

fn assert_output(src: &str, expected: &[&str]) {
    assert_eq!(output(src), expected);
}

fn assert_failure(src: &str) {
    if parse(src).is_ok() {
        panic!("Script parsed but was expected to fail")
    }
}

#[test]
fn assignment_and_print() {
    assert_output("x <- 5\nprint(x)", &["[1] 5"]);
    assert_output("x = 5\nx", &["[1] 5"]);
    assert_output("x <- 1\nx <- 2\nx", &["[1] 2"]);
}

#[test]
fn auto_print_of_top_level_expressions() {
    assert_output("x <- 10\ny <- 20\nz <- x + y\nz", &["[1] 30"]);
    assert_output("1\n2", &["[1] 1", "[1] 2"]);
    assert_output("paste(\"a\", 1)", &["[1] a 1"]);
}

#[test]
fn assignments_and_control_flow_are_silent() {
    assert_output("x <- 3", &[]);
    assert_output("if (1) 5", &[]);
    assert_output("for (i in c(1, 2)) i", &[]);
}

#[test]
fn cat_writes_plain_line_and_returns_nil() {
    let mut context = Context::new();
    let transcript = run(&mut context, "cat(1, 2, 3)").unwrap();

    assert_eq!(transcript.output, vec!["1 2 3"]);
    assert_eq!(transcript.results, vec![Value::Nil]);
    assert_output("cat()", &[""]);
}

#[test]
fn print_fires_when_nested() {
    assert_output("y <- print(3) + 1\ny", &["[1] 3", "[1] 4"]);
    assert_output("print()", &["[1] "]);
    assert_output("print(1, 2)", &["[1] 1"]);
}

#[test]
fn unknown_function_and_object() {
    assert_output("foo()", &["[1] Error: Function 'foo' not found"]);
    assert_output("missing", &["[1] Error: Object 'missing' not found"]);
}

#[test]
fn left_error_wins_in_binary_operations() {
    assert_output("a + b", &["[1] Error: Object 'a' not found"]);
    assert_output("1 + b", &["[1] Error: Object 'b' not found"]);
    assert_output("x <- a * 2\nx", &["[1] Error: Object 'a' not found"]);
}

#[test]
fn division_and_numeric_rendering() {
    assert_output("10 / 4", &["[1] 2.5"]);
    assert_output("10 / 2", &["[1] 5.0"]);
    assert_output("1.5 + 1", &["[1] 2.5"]);
    assert_output("2 * 3", &["[1] 6"]);
    assert_output(".5 * 2", &["[1] 1.0"]);
}

#[test]
fn arithmetic_faults_become_error_values() {
    assert_output("1 / 0", &["[1] Error: Arithmetic error"]);
    assert_output("1.0 / 0.0", &["[1] Error: Arithmetic error"]);
    assert_output("\"a\" + 1", &["[1] Error: Arithmetic error"]);
    assert_output("c(1) * 2", &["[1] Error: Arithmetic error"]);
    assert_output("\"a\" < 1", &["[1] Error: Arithmetic error"]);
}

#[test]
fn plus_concatenates_strings_and_lists() {
    assert_output("\"a\" + \"b\"", &["[1] ab"]);
    assert_output("greeting <- \"hello\"\ngreeting + \", \" + \"world\"",
                  &["[1] hello, world"]);
    assert_output("c(1) + c(2)", &["[1] [1, 2]"]);
    assert_output("c(1, \"a\") + c() + c(c(2))", &["[1] [1, a, [2]]"]);
    assert_output("\"a\" - \"b\"", &["[1] Error: Arithmetic error"]);
    assert_output("\"a\" + c(1)", &["[1] Error: Arithmetic error"]);
    assert_output("c(1) * c(2)", &["[1] Error: Arithmetic error"]);
}

#[test]
fn lists_order_by_first_difference() {
    assert_output("c(1, 2) < c(1, 3)", &["[1] 1"]);
    assert_output("c(1, 2) < c(1, 2, 0)", &["[1] 1"]);
    assert_output("c(2) >= c(1, 9)", &["[1] 1"]);
    assert_output("c(\"b\") > c(\"a\")", &["[1] 1"]);
    assert_output("c(1, 2) <= c(1, 2)", &["[1] 1"]);
    assert_output("c(1, \"x\") < c(1, 2)", &["[1] Error: Arithmetic error"]);
}

#[test]
fn integer_overflow_widens_to_real() {
    assert_output("9223372036854775807 + 1", &["[1] 9.223372036854776e+18"]);
    assert_output("4611686018427387904 * 2", &["[1] 9.223372036854776e+18"]);
    assert_output("9223372036854775806 + 1", &["[1] 9223372036854775807"]);
}

#[test]
fn escapes_in_strings_are_kept_verbatim() {
    assert_output(r#"cat("a\"b", 'it\'s')"#, &[r#"a\"b it\'s"#]);
    assert_output("x <- \"q\\\\\"\nx", &["[1] q\\\\"]);
}

#[test]
fn long_operator_chain_is_rejected_not_overflowed() {
    let source = vec!["1"; 5000].join(" + ");
    assert_eq!(parse(&source), Err(ParseError::TooDeep { line: 1 }));

    let mut context = Context::new();
    let err = run(&mut context, &source).unwrap_err();
    assert_eq!(err.to_string(), "Syntax error on line 1: nesting too deep");
}

#[test]
fn moderate_operator_chain_still_evaluates() {
    let source = vec!["1"; 300].join(" + ");
    assert_output(&source, &["[1] 300"]);
}

#[test]
fn deep_brackets_and_control_nesting_are_rejected() {
    let parens = format!("{}1{}", "(".repeat(1000), ")".repeat(1000));
    assert_eq!(parse(&parens), Err(ParseError::TooDeep { line: 1 }));

    let blocks = format!("{}1{}", "{\n".repeat(1000), "\n}".repeat(1000));
    assert!(matches!(parse(&blocks), Err(ParseError::TooDeep { .. })));

    let ifs = format!("{}print(1)", "if (1) ".repeat(500));
    assert!(matches!(parse(&ifs), Err(ParseError::TooDeep { .. })));

    let nested = format!("{}1{}", "(".repeat(40), ")".repeat(40));
    assert_output(&nested, &["[1] 1"]);
}

#[test]
fn precedence_tiers_and_associativity() {
    // Comparison binds tighter than arithmetic.
    assert_output("1 + 2 < 3", &["[1] 2"]);
    assert_output("2 * 3 > 1", &["[1] 2"]);
    assert_output("(1 + 2) < 3", &["[1] 0"]);
    assert_output("10 - 4 - 3", &["[1] 3"]);
    assert_output("2 + 3 * 4", &["[1] 14"]);
}

#[test]
fn comparisons_yield_integers() {
    assert_output("2 < 3", &["[1] 1"]);
    assert_output("3 <= 2", &["[1] 0"]);
    assert_output("1 == 1.0", &["[1] 1"]);
    assert_output("\"apple\" < \"banana\"", &["[1] 1"]);
    assert_output("1 == \"1\"", &["[1] 0"]);
    assert_output("1 != \"1\"", &["[1] 1"]);
    assert_output("c(1, 2) == c(1, 2)", &["[1] 1"]);
}

#[test]
fn if_else_chains() {
    assert_output("x <- 5\nif (x > 3) print(\"big\") else print(\"small\")",
                  &["[1] big"]);
    assert_output("x <- 1\nif (x > 3) { print(\"big\") } else if (x > 0) { print(\"pos\") }",
                  &["[1] pos"]);
    assert_output("if (0) print(1)", &[]);
    // Error values count as true.
    assert_output("if (nope) print(\"yes\")", &["[1] yes"]);
}

#[test]
fn dangling_else_binds_to_nearest_if() {
    assert_output("if (1) if (0) print(1) else print(2)", &["[1] 2"]);
    assert_output("if (0) if (1) print(1) else print(2)", &[]);
}

#[test]
fn while_loops() {
    assert_output("i <- 0\nwhile (i < 3) { i <- i + 1 }\ni", &["[1] 3"]);
    assert_output("i <- 0\nwhile (i < 2) {\n  i <- i + 1\n  print(i)\n}",
                  &["[1] 1", "[1] 2"]);
}

#[test]
fn for_loops() {
    assert_output("total <- 0\nfor (i in c(1,2,3)) { total <- total + i }\ntotal",
                  &["[1] 6"]);
    assert_output("for (i in c(1, 2, 3)) {}\ni", &["[1] 3"]);
    assert_output("for (x in 7) print(x)", &["[1] 7"]);
    assert_output("for (s in c(\"a\", \"b\")) cat(s, \"!\")", &["a !", "b !"]);
}

#[test]
fn lists_display_and_nest() {
    assert_output("c(1, 2.5, \"a\")", &["[1] [1, 2.5, a]"]);
    assert_output("c(c(1, 2), 3)", &["[1] [[1, 2], 3]"]);
    assert_output("c()", &["[1] []"]);
}

#[test]
fn blocks_share_the_environment() {
    assert_output("{ a <- 1\n b <- 2 }\na + b", &["[1] 3"]);
    assert_output("{ 5 }", &[]);
    assert_output("{}", &[]);
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    assert_output("# setup\n\nx <- 2 # two\n\n\nx * x", &["[1] 4"]);
    assert_output("", &[]);
}

#[test]
fn illegal_characters_are_skipped() {
    assert_output("x <- 1 @ + 2\nx", &["[1] 3"]);
}

#[test]
fn environment_persists_across_runs_until_reset() {
    let mut context = Context::new();
    run(&mut context, "x <- 5").unwrap();

    assert_eq!(run(&mut context, "x").unwrap().output, vec!["[1] 5"]);

    context.reset_environment();
    assert_eq!(run(&mut context, "x").unwrap().output,
               vec!["[1] Error: Object 'x' not found"]);
}

#[test]
fn results_cover_every_statement() {
    let mut context = Context::new();
    let transcript = run(&mut context, "x <- 5\nfoo()\nwhile (0) 1").unwrap();

    assert_eq!(transcript.results,
               vec![Value::from(5),
                    Value::Error("Function 'foo' not found".into()),
                    Value::Nil]);
}

#[test]
fn syntax_errors_abort_before_evaluation() {
    assert_failure("x <- ");
    assert_failure("1 +");
    assert_failure("(1 + 2");
    assert_failure("else 1");
    assert_failure("if (1) 1\nelse 2");
    assert_failure("print(1,\n2)");

    let mut context = Context::new();
    assert!(run(&mut context, "y <- 1\nx <- ").is_err());
    assert!(context.environment.is_empty());
}
