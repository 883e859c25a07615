use crate::ast::{Expr, Program, Stmt};
use crate::error::{Result, SemError};
use indexmap::IndexMap;
use sixc_par as par;
use sixc_util::{Interner, Span, Symbol};

/// First user-variable zero-page address (spec §3, §6).
const BASE_ADDR: u8 = 0x10;
/// One past the last user-variable address: `$FA`-`$FE` are reserved
/// runtime scratch, so the usable range is `$10..=$F9`, 234 slots.
const MAX_SLOTS: usize = 0xFA - BASE_ADDR as usize;

/// Walks a parsed [`par::Program`] in declaration order, binding every
/// variable reference to a zero-page slot address. Single top-down pass:
/// the language has no forward references to collect first.
pub struct SemanticAnalyzer<'a> {
    interner: &'a Interner,
    symbols: IndexMap<Symbol, u8>,
}

impl<'a> SemanticAnalyzer<'a> {
    pub fn new(interner: &'a Interner) -> Self {
        Self { interner, symbols: IndexMap::new() }
    }

    pub fn analyze(mut self, program: par::Program) -> Result<Program> {
        let stmts = self.analyze_stmts(program.stmts)?;
        Ok(Program { stmts, symbol_count: self.symbols.len() })
    }

    fn analyze_stmts(&mut self, stmts: Vec<par::Stmt>) -> Result<Vec<Stmt>> {
        stmts.into_iter().map(|stmt| self.analyze_stmt(stmt)).collect()
    }

    fn analyze_stmt(&mut self, stmt: par::Stmt) -> Result<Stmt> {
        let span = stmt.span;
        match stmt.kind {
            par::StmtKind::VarDecl { name, init } => {
                let init = self.analyze_expr(init)?;
                let addr = self.declare(name, span)?;
                Ok(Stmt::VarDecl { addr, init })
            }
            par::StmtKind::Assign { name, expr } => {
                let expr = self.analyze_expr(expr)?;
                let addr = self.resolve(name, span)?;
                Ok(Stmt::Assign { addr, expr })
            }
            par::StmtKind::PostInc { name } => Ok(Stmt::PostInc(self.resolve(name, span)?)),
            par::StmtKind::PostDec { name } => Ok(Stmt::PostDec(self.resolve(name, span)?)),
            par::StmtKind::If { cond, then_block, else_block } => {
                let cond = self.analyze_expr(cond)?;
                let then_block = self.analyze_stmts(then_block)?;
                let else_block = else_block.map(|b| self.analyze_stmts(b)).transpose()?;
                Ok(Stmt::If { cond, then_block, else_block })
            }
            par::StmtKind::While { cond, body } => {
                let cond = self.analyze_expr(cond)?;
                let body = self.analyze_stmts(body)?;
                Ok(Stmt::While { cond, body })
            }
            par::StmtKind::DoWhile { body, cond } => {
                let body = self.analyze_stmts(body)?;
                let cond = self.analyze_expr(cond)?;
                Ok(Stmt::DoWhile { body, cond })
            }
            par::StmtKind::OutputStmt(expr) => Ok(Stmt::Output(self.analyze_expr(expr)?)),
            par::StmtKind::ExprStmt(expr) => Ok(Stmt::ExprStmt(self.analyze_expr(expr)?)),
        }
    }

    fn analyze_expr(&mut self, expr: par::Expr) -> Result<Expr> {
        let span = expr.span;
        match expr.kind {
            par::ExprKind::IntLiteral(value) => Ok(Expr::IntLiteral(value)),
            par::ExprKind::Var(name) => Ok(Expr::Var(self.resolve(name, span)?)),
            par::ExprKind::Unary(op, operand) => {
                Ok(Expr::Unary(op, Box::new(self.analyze_expr(*operand)?)))
            }
            par::ExprKind::Binary(op, lhs, rhs) => Ok(Expr::Binary(
                op,
                Box::new(self.analyze_expr(*lhs)?),
                Box::new(self.analyze_expr(*rhs)?),
            )),
            par::ExprKind::Call(par::Builtin::Input, _) => Ok(Expr::Input),
        }
    }

    fn declare(&mut self, name: Symbol, span: Span) -> Result<u8> {
        if self.symbols.contains_key(&name) {
            return Err(SemError::Redeclaration { name: self.name_of(name), span });
        }
        if self.symbols.len() >= MAX_SLOTS {
            return Err(SemError::OutOfSlots { span });
        }
        let addr = BASE_ADDR + self.symbols.len() as u8;
        self.symbols.insert(name, addr);
        Ok(addr)
    }

    fn resolve(&self, name: Symbol, span: Span) -> Result<u8> {
        self.symbols
            .get(&name)
            .copied()
            .ok_or_else(|| SemError::UndeclaredName { name: self.name_of(name), span })
    }

    fn name_of(&self, name: Symbol) -> String {
        self.interner.resolve(name).to_string()
    }
}
