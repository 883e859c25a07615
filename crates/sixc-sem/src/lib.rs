//! Semantic analysis: symbol binding and slot allocation over the parsed
//! tree, producing an AST with every variable reference resolved to a
//! zero-page address.

mod analysis;
mod ast;
mod error;

pub use analysis::SemanticAnalyzer;
pub use ast::{BinOp, Expr, Program, Stmt, UnOp};
pub use error::{Result, SemError};
