use super::*;
use crate::session::Session;

#[test]
fn syntax_error_report_names_file_and_message() {
    let mut session = Session::new();
    let source = "int x = ;";
    let err = session.eval_source(source).expect_err("missing initializer");
    let rendered = render_error("prog.c", source, &err, ColorMode::Never);
    assert!(rendered.contains("prog.c"), "{rendered}");
    assert!(rendered.contains("syntax error"), "{rendered}");
    assert!(rendered.contains("expected expression"), "{rendered}");
}

#[test]
fn eval_error_report_carries_message() {
    let mut session = Session::new();
    let source = "int x = 1 / 0;";
    let err = session.eval_source(source).expect_err("division by zero");
    let rendered = render_error("prog.c", source, &err, ColorMode::Never);
    assert!(rendered.contains("Division by zero."), "{rendered}");
}

#[test]
fn spanless_error_renders_plain_line() {
    let err = SessionError::Eval(minic_eval::missing_main());
    assert_eq!(
        render_error("prog.c", "", &err, ColorMode::Never),
        "Error: No zero-argument 'main' function defined.\n"
    );
}

#[test]
fn char_range_keeps_range_inside_source() {
    let source = "0123456789";
    assert_eq!(char_range(source, Span::new(2, 40)), 2..10);
    assert_eq!(char_range(source, Span::new(12, 14)), 10..10);
}

#[test]
fn char_range_counts_characters_not_bytes() {
    let source = "// café\nint x = ;";
    let semicolon = u32::try_from(source.find(';').expect("has ';'")).expect("small offset");
    assert_eq!(semicolon, 17);
    assert_eq!(char_range(source, Span::new(semicolon, semicolon + 1)), 16..17);
}

#[test]
fn char_range_snaps_inside_multibyte_char() {
    // Byte 5 is inside 'é' (bytes 4..6).
    assert_eq!(char_range("caf\u{e9}!", Span::new(4, 5)), 3..3);
}

#[test]
fn report_after_non_ascii_comment_points_at_token() {
    let mut session = Session::new();
    let source = "// café\nint x = ;";
    let err = session.eval_source(source).expect_err("missing initializer");
    let rendered = render_error("prog.c", source, &err, ColorMode::Never);
    assert!(rendered.contains("prog.c:2:9"), "{rendered}");
}
