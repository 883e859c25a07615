//! Property-based coverage of the precedence/associativity invariants
//! (spec property 1: precedence; property 2: associativity).

use crate::ast::{BinOp, ExprKind};
use crate::parser::Parser;
use proptest::prelude::*;
use sixc_lex::Lexer;
use sixc_util::Interner;

/// The grammar only allows a bare expression statement for `input();`, so
/// arbitrary expressions are parsed by wrapping them in a `var` declaration
/// and pulling the initializer back out.
fn parse_expr_source(expr_source: &str) -> crate::Expr {
    let source = format!("var r = {expr_source};");
    let mut interner = Interner::new();
    let tokens = Lexer::new(&source, &mut interner).tokenize().unwrap();
    let program = Parser::new(tokens).parse_program().unwrap();
    let crate::StmtKind::VarDecl { init, .. } = program.stmts.into_iter().next().unwrap().kind
    else {
        panic!("expected a var declaration");
    };
    init
}

fn left_assoc_ops() -> impl Strategy<Value = &'static str> {
    prop_oneof!["+", "-"]
}

proptest! {
    /// `a OP b OP c` for any of the level-10 (`+`/`-`) operators always
    /// groups as `(a OP b) OP c`, regardless of which operator is chosen
    /// at each position.
    #[test]
    fn additive_chain_is_left_associative(op1 in left_assoc_ops(), op2 in left_assoc_ops()) {
        let source = format!("a {op1} b {op2} c");
        let expr = parse_expr_source(&source);
        let ExprKind::Binary(_, lhs, _) = &expr.kind else {
            prop_assert!(false, "expected a binary node");
            return Ok(());
        };
        prop_assert!(matches!(lhs.kind, ExprKind::Binary(_, _, _)));
    }

    /// `a < b + c` always parses with `+` (level 10) binding tighter than
    /// `<` (level 8): the relational node's right child is the additive
    /// node, never the other way around.
    #[test]
    fn additive_binds_tighter_than_relational(op in prop_oneof!["<", "<=", ">", ">="]) {
        let source = format!("a {op} b + c");
        let expr = parse_expr_source(&source);
        let ExprKind::Binary(top_op, _, rhs) = &expr.kind else {
            prop_assert!(false, "expected a binary node");
            return Ok(());
        };
        prop_assert!(matches!(top_op, BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge));
        prop_assert!(matches!(rhs.kind, ExprKind::Binary(BinOp::Add, _, _)));
    }

    /// `a && b || c` parses as `(a && b) || c`: `&&` (level 3) binds
    /// tighter than `||` (level 1).
    #[test]
    fn and_binds_tighter_than_or(_dummy in 0u8..1) {
        let expr = parse_expr_source("a && b || c");
        let ExprKind::Binary(BinOp::Or, lhs, _) = &expr.kind else {
            prop_assert!(false, "expected top-level ||");
            return Ok(());
        };
        prop_assert!(matches!(lhs.kind, ExprKind::Binary(BinOp::And, _, _)));
    }
}
