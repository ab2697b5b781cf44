use super::*;
use minic_ir::{BinaryOp, ExprId, ExprKind, ForInit, StmtKind, TypeSpec, UnaryOp};
use pretty_assertions::assert_eq;

fn parse(source: &str, mode: ParseMode) -> (ParseOutput, StringInterner) {
    let interner = StringInterner::new();
    match parse_source(source, &interner, mode) {
        Ok(output) => (output, interner),
        Err(err) => panic!("unexpected parse error for {source:?}: {err}"),
    }
}

fn parse_err(source: &str, mode: ParseMode) -> SyntaxError {
    let interner = StringInterner::new();
    match parse_source(source, &interner, mode) {
        Ok(output) => panic!("expected a syntax error for {source:?}, got {output:?}"),
        Err(err) => err,
    }
}

/// The expression of a single-item REPL unit.
fn single_expr(output: &ParseOutput) -> ExprId {
    assert_eq!(output.items.len(), 1);
    let Item::Stmt(stmt) = output.items[0] else {
        panic!("expected a statement item");
    };
    match output.arena.get_stmt(stmt).kind {
        StmtKind::Expr(expr) => expr,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

fn binary(output: &ParseOutput, id: ExprId) -> (BinaryOp, ExprId, ExprId) {
    match output.arena.get_expr(id).kind {
        ExprKind::Binary { op, left, right } => (op, left, right),
        other => panic!("expected a binary expression, got {other:?}"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let (output, _) = parse("3 + 2 * 4;", ParseMode::Repl);
    let (op, left, right) = binary(&output, single_expr(&output));
    assert_eq!(op, BinaryOp::Add);
    assert_eq!(output.arena.get_expr(left).kind, ExprKind::Int(3));
    assert_eq!(binary(&output, right).0, BinaryOp::Mul);
}

#[test]
fn parentheses_override_precedence() {
    let (output, _) = parse("2 * (3 + 4) - 5 / (1 + 1);", ParseMode::Repl);
    let (op, left, right) = binary(&output, single_expr(&output));
    assert_eq!(op, BinaryOp::Sub);
    let (mul, _, sum) = binary(&output, left);
    assert_eq!(mul, BinaryOp::Mul);
    assert_eq!(binary(&output, sum).0, BinaryOp::Add);
    assert_eq!(binary(&output, right).0, BinaryOp::Div);
}

#[test]
fn binary_operators_are_left_associative() {
    let (output, _) = parse("10 - 4 - 3;", ParseMode::Repl);
    let (op, left, right) = binary(&output, single_expr(&output));
    assert_eq!(op, BinaryOp::Sub);
    assert_eq!(binary(&output, left).0, BinaryOp::Sub);
    assert_eq!(output.arena.get_expr(right).kind, ExprKind::Int(3));
}

#[test]
fn logical_and_binds_tighter_than_or() {
    let (output, _) = parse("1 || 0 && 0;", ParseMode::Repl);
    let (op, _, right) = binary(&output, single_expr(&output));
    assert_eq!(op, BinaryOp::Or);
    assert_eq!(binary(&output, right).0, BinaryOp::And);
}

#[test]
fn assignment_is_right_associative() {
    let (output, interner) = parse("a = b = 3;", ParseMode::Repl);
    let ExprKind::Assign { target, value } = output.arena.get_expr(single_expr(&output)).kind
    else {
        panic!("expected assignment");
    };
    assert_eq!(interner.lookup(target), "a");
    assert!(matches!(
        output.arena.get_expr(value).kind,
        ExprKind::Assign { .. }
    ));
}

#[test]
fn unary_operators_nest() {
    let (output, _) = parse("-!5;", ParseMode::Repl);
    let ExprKind::Unary { op, operand } = output.arena.get_expr(single_expr(&output)).kind else {
        panic!("expected unary");
    };
    assert_eq!(op, UnaryOp::Neg);
    assert!(matches!(
        output.arena.get_expr(operand).kind,
        ExprKind::Unary {
            op: UnaryOp::Not,
            ..
        }
    ));
}

#[test]
fn repl_accepts_trailing_expression_without_semicolon() {
    let (output, _) = parse("3 + 4", ParseMode::Repl);
    assert_eq!(binary(&output, single_expr(&output)).0, BinaryOp::Add);

    let (output, _) = parse("int a = 10; a + 5", ParseMode::Repl);
    assert_eq!(output.items.len(), 2);
}

#[test]
fn missing_semicolon_between_statements_is_an_error() {
    let err = parse_err("3 + 4 5", ParseMode::Repl);
    assert_eq!(err.message, "expected ';', found integer literal");
    assert_eq!((err.line, err.column), (1, 6));
}

#[test]
fn incomplete_expression_reports_position() {
    let err = parse_err("3 + ;", ParseMode::Repl);
    assert_eq!(
        err.to_string(),
        "Syntax error at line 1, column 4: expected expression, found ';'"
    );
}

#[test]
fn unmatched_parenthesis() {
    let err = parse_err("3 + (4 - 1", ParseMode::Repl);
    assert_eq!(err.message, "expected ')', found end of input");
}

#[test]
fn assignment_requires_variable_target() {
    let err = parse_err("(a) = 3;", ParseMode::Repl);
    assert_eq!(err.message, "left-hand side of assignment must be a variable");
}

#[test]
fn function_definition_with_params() {
    let (output, interner) = parse(
        "int add(int a, double b) { return a + b; }",
        ParseMode::Repl,
    );
    let Item::Function(func) = output.items[0] else {
        panic!("expected function");
    };
    assert_eq!(interner.lookup(func.name), "add");
    assert_eq!(func.return_type, TypeSpec::Int);
    let params = output.arena.get_params(func.params);
    assert_eq!(params.len(), 2);
    assert_eq!(params[1].ty, TypeSpec::Double);
    assert_eq!(interner.lookup(params[1].name), "b");
    assert_eq!(output.arena.get_stmt_list(func.body).len(), 1);
}

#[test]
fn void_parameter_list_is_empty() {
    let (output, _) = parse("int main(void) { return 0; }", ParseMode::TranslationUnit);
    let Item::Function(func) = output.items[0] else {
        panic!("expected function");
    };
    assert!(func.params.is_empty());
}

#[test]
fn nested_function_definition_is_rejected() {
    let err = parse_err("int f() { int g() { return 1; } }", ParseMode::Repl);
    assert_eq!(
        err.message,
        "function definitions are only allowed at file scope"
    );
}

#[test]
fn for_loop_header_forms() {
    let (output, _) = parse(
        "for (int i = 0; i < 3; i = i + 1) ; for (;;) ;",
        ParseMode::Repl,
    );
    let kinds: Vec<StmtKind> = output
        .items
        .iter()
        .map(|item| match item {
            Item::Stmt(id) => output.arena.get_stmt(*id).kind,
            Item::Function(_) => panic!("unexpected function"),
        })
        .collect();
    let StmtKind::For {
        init, cond, update, ..
    } = kinds[0]
    else {
        panic!("expected for");
    };
    assert!(matches!(init, ForInit::Decl(decl) if decl.ty == TypeSpec::Int));
    assert!(cond.is_some());
    assert!(update.is_some());
    assert!(matches!(
        kinds[1],
        StmtKind::For {
            init: ForInit::None,
            cond: None,
            update: None,
            ..
        }
    ));
}

#[test]
fn dangling_else_binds_to_nearest_if() {
    let (output, _) = parse("if (1) if (0) 1; else 2;", ParseMode::Repl);
    let Item::Stmt(outer) = output.items[0] else {
        panic!("expected statement");
    };
    let StmtKind::If {
        then_branch,
        else_branch,
        ..
    } = output.arena.get_stmt(outer).kind
    else {
        panic!("expected if");
    };
    assert_eq!(else_branch, None);
    assert!(matches!(
        output.arena.get_stmt(then_branch).kind,
        StmtKind::If {
            else_branch: Some(_),
            ..
        }
    ));
}

#[test]
fn do_while_requires_semicolon() {
    let err = parse_err("do { } while (0)", ParseMode::Repl);
    assert_eq!(err.message, "expected ';', found end of input");
}

#[test]
fn other_type_specifiers_parse() {
    let (output, interner) = parse("long x;", ParseMode::Repl);
    let Item::Stmt(id) = output.items[0] else {
        panic!("expected statement");
    };
    let StmtKind::Decl(decl) = output.arena.get_stmt(id).kind else {
        panic!("expected declaration");
    };
    assert_eq!(decl.ty, TypeSpec::Other(interner.intern("long")));
}

#[test]
fn translation_unit_rejects_statements() {
    let err = parse_err("int main() { return 0; }\nmain();", ParseMode::TranslationUnit);
    assert_eq!(
        err.message,
        "expected a declaration or function definition, found identifier"
    );
    assert_eq!((err.line, err.column), (2, 0));
}

#[test]
fn unterminated_block() {
    let err = parse_err("{ int a = 1;", ParseMode::Repl);
    assert_eq!(err.message, "expected '}', found end of input");
}

#[test]
fn empty_input_has_no_items() {
    let (output, _) = parse("   // nothing\n", ParseMode::Repl);
    assert!(output.items.is_empty());
}
