//! Recursive-descent / Pratt parsing: tokens to a precedence-correct
//! statement list.

mod ast;
mod bp;
mod error;
mod parser;
#[cfg(test)]
mod proptests;

pub use ast::{BinOp, Builtin, Expr, ExprKind, Program, Stmt, StmtKind, UnOp};
pub use error::{ParseError, Result};
pub use parser::Parser;

pub fn parse(tokens: Vec<sixc_lex::Token>) -> Result<Program> {
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sixc_lex::Lexer;
    use sixc_util::Interner;

    fn parse_source(source: &str) -> Result<Program> {
        let mut interner = Interner::new();
        let tokens = Lexer::new(source, &mut interner).tokenize().unwrap();
        parse(tokens)
    }

    #[test]
    fn var_decl_and_assign() {
        let program = parse_source("var x = 1; x = 2;").unwrap();
        assert_eq!(program.stmts.len(), 2);
        assert!(matches!(program.stmts[0].kind, StmtKind::VarDecl { .. }));
        assert!(matches!(program.stmts[1].kind, StmtKind::Assign { .. }));
    }

    #[test]
    fn post_inc_and_dec() {
        let program = parse_source("var x = 0; x++; x--;").unwrap();
        assert!(matches!(program.stmts[1].kind, StmtKind::PostInc { .. }));
        assert!(matches!(program.stmts[2].kind, StmtKind::PostDec { .. }));
    }

    #[test]
    fn if_else_requires_trailing_semicolon() {
        let program = parse_source("if (1) { output(1); } else { output(0); };").unwrap();
        assert_eq!(program.stmts.len(), 1);
        assert!(matches!(program.stmts[0].kind, StmtKind::If { else_block: Some(_), .. }));
    }

    #[test]
    fn if_without_trailing_semicolon_is_an_error() {
        assert!(parse_source("if (1) { output(1); }").is_err());
    }

    #[test]
    fn while_loop() {
        let program = parse_source("while (1) { output(1); };").unwrap();
        assert!(matches!(program.stmts[0].kind, StmtKind::While { .. }));
    }

    #[test]
    fn do_while_loop() {
        let program = parse_source("do { output(1); } while (0);").unwrap();
        assert!(matches!(program.stmts[0].kind, StmtKind::DoWhile { .. }));
    }

    #[test]
    fn bare_input_call_statement() {
        let program = parse_source("input();").unwrap();
        assert!(matches!(program.stmts[0].kind, StmtKind::ExprStmt(_)));
    }

    #[test]
    fn precedence_multiplication_like_binding_add_below_relational() {
        // a < b + c parses as a < (b + c): level 10 (+) binds tighter than level 8 (<).
        let program = parse_source("var r = a < b + c;").unwrap();
        let StmtKind::VarDecl { init, .. } = &program.stmts[0].kind else { panic!() };
        let ExprKind::Binary(BinOp::Lt, _, rhs) = &init.kind else { panic!() };
        assert!(matches!(rhs.kind, ExprKind::Binary(BinOp::Add, _, _)));
    }

    #[test]
    fn left_associativity_of_subtraction() {
        // a - b - c parses as (a - b) - c.
        let program = parse_source("var r = a - b - c;").unwrap();
        let StmtKind::VarDecl { init, .. } = &program.stmts[0].kind else { panic!() };
        let ExprKind::Binary(BinOp::Sub, lhs, _) = &init.kind else { panic!() };
        assert!(matches!(lhs.kind, ExprKind::Binary(BinOp::Sub, _, _)));
    }

    #[test]
    fn unary_minus_is_explicit_node_not_a_binary_with_missing_operand() {
        let program = parse_source("var r = -x;").unwrap();
        let StmtKind::VarDecl { init, .. } = &program.stmts[0].kind else { panic!() };
        assert!(matches!(init.kind, ExprKind::Unary(UnOp::Neg, _)));
    }

    #[test]
    fn parenthesized_expression_overrides_precedence() {
        // (a + b) * is unavailable (no multiplication), so use relational:
        // (a || b) && c should group the || first.
        let program = parse_source("var r = (a || b) && c;").unwrap();
        let StmtKind::VarDecl { init, .. } = &program.stmts[0].kind else { panic!() };
        let ExprKind::Binary(BinOp::And, lhs, _) = &init.kind else { panic!() };
        assert!(matches!(lhs.kind, ExprKind::Binary(BinOp::Or, _, _)));
    }
}
