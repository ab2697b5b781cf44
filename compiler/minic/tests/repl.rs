//! REPL behavior over in-memory input and output.

use minic::repl::{BANNER, CONTINUATION_PROMPT, PROMPT};
use minic::{Repl, Session};
use pretty_assertions::assert_eq;

fn run_repl(input: &str) -> String {
    let mut repl = Repl::new(Session::new());
    let mut output = Vec::new();
    repl.run(input.as_bytes(), &mut output)
        .expect("in-memory io cannot fail");
    String::from_utf8(output).expect("repl writes utf-8")
}

#[test]
fn evaluates_expression_then_exits() {
    assert_eq!(
        run_repl("3 + 4;\nexit\n"),
        format!("{BANNER}\n{PROMPT}Result: 7\n\n{PROMPT}")
    );
}

#[test]
fn trailing_semicolon_is_optional() {
    assert_eq!(
        run_repl("3 + 4\nexit\n"),
        format!("{BANNER}\n{PROMPT}Result: 7\n\n{PROMPT}")
    );
}

#[test]
fn syntax_error_is_reported_and_session_continues() {
    let output = run_repl("3 + ;\n1 + 1;\nexit\n");
    assert!(
        output.contains("Error: Syntax error at line 1, column 4: expected expression, found ';'"),
        "{output}"
    );
    assert!(output.contains("Result: 2"), "{output}");
}

#[test]
fn declarations_persist_across_lines() {
    let output = run_repl("int x = 5;\nx * 2;\nexit\n");
    assert!(output.contains("Result: 5\n"), "{output}");
    assert!(output.contains("Result: 10\n"), "{output}");
}

#[test]
fn unit_without_value_prints_marker() {
    let output = run_repl("if (0) 1;\nexit\n");
    assert!(output.contains("Result: [No value]"), "{output}");
}

#[test]
fn runtime_error_keeps_earlier_definitions() {
    let output = run_repl("int a = 1;\na / 0;\na;\nexit\n");
    assert!(output.contains("Error: Division by zero."), "{output}");
    assert!(output.ends_with(&format!("Result: 1\n\n{PROMPT}")), "{output}");
}

#[test]
fn multi_line_function_definition() {
    let input = "int twice(int n) {\nreturn n * 2;\n}\ntwice(21);\nexit\n";
    assert_eq!(
        run_repl(input),
        format!(
            "{BANNER}\n{PROMPT}{CONTINUATION_PROMPT}{CONTINUATION_PROMPT}Result: [No value]\n\n\
             {PROMPT}Result: 42\n\n{PROMPT}"
        )
    );
}

#[test]
fn multi_line_syntax_error_keeps_typed_columns() {
    let output = run_repl("int f() {\n    return 1 +;\n}\nexit\n");
    assert!(
        output.contains("Error: Syntax error at line 2, column 14: expected expression, found ';'"),
        "{output}"
    );
}

#[test]
fn blank_lines_are_skipped() {
    assert_eq!(
        run_repl("\n   \n'A'\nexit\n"),
        format!("{BANNER}\n{PROMPT}{PROMPT}{PROMPT}Result: A\n\n{PROMPT}")
    );
}

#[test]
fn end_of_input_stops_loop() {
    assert_eq!(
        run_repl("2.5 * 2;\n"),
        format!("{BANNER}\n{PROMPT}Result: 5\n\n{PROMPT}")
    );
}

#[test]
fn unfinished_block_at_end_of_input_is_an_error() {
    let output = run_repl("{ int a = 1;\n");
    assert!(output.contains("Error: Syntax error"), "{output}");
    assert!(output.contains("expected '}', found end of input"), "{output}");
}
