//! Binding powers for the 10 binary-operator precedence levels of the
//! expression grammar. Unary `-`, `~`, `!` (level 11) and primaries
//! (level 12) are handled directly by the parser's prefix logic, not
//! through this table — only infix operators need a binding power.
//!
//! Every level is left-associative, so each level's right binding power is
//! its left binding power plus one (`parse_expr_bp(left_bp + 1)` on the
//! right-hand side refuses to re-absorb an operator at the same level,
//! forcing left-to-right grouping).

use crate::ast::BinOp;
use sixc_lex::TokenKind;

pub fn infix_binding_power(kind: &TokenKind) -> Option<(u8, u8, BinOp)> {
    use TokenKind::*;
    let (level, op) = match kind {
        PipePipe => (1, BinOp::Or),
        CaretCaret => (2, BinOp::Xor),
        AmpAmp => (3, BinOp::And),
        Pipe => (4, BinOp::BitOr),
        Caret => (5, BinOp::BitXor),
        Amp => (6, BinOp::BitAnd),
        EqEq => (7, BinOp::Eq),
        BangEq => (7, BinOp::Ne),
        Lt => (8, BinOp::Lt),
        Le => (8, BinOp::Le),
        Gt => (8, BinOp::Gt),
        Ge => (8, BinOp::Ge),
        Shl => (9, BinOp::Shl),
        Shr => (9, BinOp::Shr),
        Plus => (10, BinOp::Add),
        Minus => (10, BinOp::Sub),
        _ => return None,
    };
    let left = level * 2;
    Some((left, left + 1, op))
}
