use crate::{generate, Target};
use proptest::prelude::*;
use sixc_sem::{Expr, Program, Stmt};
use std::collections::HashSet;

fn literal(n: u8) -> Expr {
    Expr::IntLiteral(n)
}

/// Builds a tree of nested `if`/`while`/`do-while` statements from a flat
/// list of branch choices, each a shallow structured statement wrapping a
/// single assignment. Depth is bounded by the input length.
fn build_nested(choices: &[u8]) -> Vec<Stmt> {
    match choices {
        [] => vec![Stmt::Assign { addr: 0x10, expr: literal(1) }],
        [first, rest @ ..] => {
            let inner = build_nested(rest);
            match first % 3 {
                0 => vec![Stmt::If { cond: literal(1), then_block: inner, else_block: None }],
                1 => vec![Stmt::While { cond: literal(1), body: inner }],
                _ => vec![Stmt::DoWhile { body: inner, cond: literal(1) }],
            }
        }
    }
}

fn label_definitions(asm: &str) -> Vec<String> {
    asm.lines().filter_map(|line| line.strip_suffix(':').map(str::to_string)).collect()
}

proptest! {
    /// Property 4 (determinism): generating the same program twice from a
    /// fresh generator produces byte-identical assembly.
    #[test]
    fn generation_is_deterministic(choices in prop::collection::vec(0u8..3, 0..6)) {
        let program = Program { stmts: build_nested(&choices), symbol_count: 1 };
        let first = generate(&program, Target::Generic).unwrap();
        let second = generate(&program, Target::Generic).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property 3 (label uniqueness): no label string is ever defined twice,
    /// however deeply control flow is nested.
    #[test]
    fn nested_control_flow_never_reuses_a_label(choices in prop::collection::vec(0u8..3, 0..8)) {
        let program = Program { stmts: build_nested(&choices), symbol_count: 1 };
        let asm = generate(&program, Target::Generic).unwrap();
        let labels = label_definitions(&asm);
        let unique: HashSet<&String> = labels.iter().collect();
        prop_assert_eq!(labels.len(), unique.len());
    }

    /// Shift-order property: the count (right operand) always reaches `X`
    /// via `TAX` before the accumulator is restored via the matching `PLA`.
    #[test]
    fn shift_count_loads_into_x_before_accumulator_restore(count in 0u8..8) {
        let program = Program {
            stmts: vec![Stmt::Output(Expr::Binary(
                sixc_sem::BinOp::Shl,
                Box::new(literal(1)),
                Box::new(literal(count)),
            ))],
            symbol_count: 0,
        };
        let asm = generate(&program, Target::Generic).unwrap();
        let tax_pos = asm.find("TAX").unwrap();
        let pla_pos = asm.find("PLA").unwrap();
        prop_assert!(tax_pos < pla_pos);
    }
}
