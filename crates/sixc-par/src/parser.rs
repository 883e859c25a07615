use crate::ast::{Builtin, Expr, ExprKind, Program, Stmt, StmtKind, UnOp};
use crate::bp::infix_binding_power;
use crate::error::{ParseError, Result};
use sixc_lex::{Token, TokenKind};
use sixc_util::Span;

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, position: 0 }
    }

    pub fn parse_program(mut self) -> Result<Program> {
        let mut stmts = Vec::new();
        while !self.at_eof() {
            stmts.push(self.parse_stmt()?);
        }
        Ok(Program { stmts })
    }

    fn current(&self) -> &Token {
        &self.tokens[self.position]
    }

    fn at_eof(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.position];
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
        tok
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token> {
        if self.current().kind == kind {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: self.current().kind.spelling().to_string(),
            span: self.current().span,
        }
    }

    fn expect_ident(&mut self) -> Result<(sixc_util::Symbol, Span)> {
        match self.current().kind {
            TokenKind::Ident(sym) => {
                let span = self.current().span;
                self.advance();
                Ok((sym, span))
            }
            _ => Err(self.unexpected("an identifier")),
        }
    }

    // --- statements ---

    fn parse_stmt(&mut self) -> Result<Stmt> {
        match self.current().kind {
            TokenKind::Var => self.parse_var_decl(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Do => self.parse_do_while(),
            TokenKind::Output => self.parse_output(),
            TokenKind::Input => self.parse_bare_input(),
            TokenKind::Ident(_) => self.parse_assign_or_post(),
            _ => Err(self.unexpected("a statement")),
        }
    }

    fn parse_block(&mut self) -> Result<Vec<Stmt>> {
        self.expect(TokenKind::LBrace, "'{'")?;
        let mut stmts = Vec::new();
        while self.current().kind != TokenKind::RBrace {
            stmts.push(self.parse_stmt()?);
        }
        self.expect(TokenKind::RBrace, "'}'")?;
        Ok(stmts)
    }

    fn parse_var_decl(&mut self) -> Result<Stmt> {
        let start = self.advance().span; // 'var'
        let (name, _) = self.expect_ident()?;
        self.expect(TokenKind::Eq, "'='")?;
        let init = self.parse_expr()?;
        let end = self.expect(TokenKind::Semi, "';'")?.span;
        Ok(Stmt::new(StmtKind::VarDecl { name, init }, start.to(end)))
    }

    fn parse_assign_or_post(&mut self) -> Result<Stmt> {
        let (name, start) = self.expect_ident()?;
        match self.current().kind {
            TokenKind::Eq => {
                self.advance();
                let expr = self.parse_expr()?;
                let end = self.expect(TokenKind::Semi, "';'")?.span;
                Ok(Stmt::new(StmtKind::Assign { name, expr }, start.to(end)))
            }
            TokenKind::PlusPlus => {
                self.advance();
                let end = self.expect(TokenKind::Semi, "';'")?.span;
                Ok(Stmt::new(StmtKind::PostInc { name }, start.to(end)))
            }
            TokenKind::MinusMinus => {
                self.advance();
                let end = self.expect(TokenKind::Semi, "';'")?.span;
                Ok(Stmt::new(StmtKind::PostDec { name }, start.to(end)))
            }
            _ => Err(self.unexpected("'=', '++', or '--'")),
        }
    }

    fn parse_if(&mut self) -> Result<Stmt> {
        let start = self.advance().span; // 'if'
        self.expect(TokenKind::LParen, "'('")?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::RParen, "')'")?;
        let then_block = self.parse_block()?;
        let else_block = if self.current().kind == TokenKind::Else {
            self.advance();
            Some(self.parse_block()?)
        } else {
            None
        };
        let end = self.expect(TokenKind::Semi, "';'")?.span;
        Ok(Stmt::new(StmtKind::If { cond, then_block, else_block }, start.to(end)))
    }

    fn parse_while(&mut self) -> Result<Stmt> {
        let start = self.advance().span; // 'while'
        self.expect(TokenKind::LParen, "'('")?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::RParen, "')'")?;
        let body = self.parse_block()?;
        let end = self.expect(TokenKind::Semi, "';'")?.span;
        Ok(Stmt::new(StmtKind::While { cond, body }, start.to(end)))
    }

    fn parse_do_while(&mut self) -> Result<Stmt> {
        let start = self.advance().span; // 'do'
        let body = self.parse_block()?;
        self.expect(TokenKind::While, "'while'")?;
        self.expect(TokenKind::LParen, "'('")?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::RParen, "')'")?;
        let end = self.expect(TokenKind::Semi, "';'")?.span;
        Ok(Stmt::new(StmtKind::DoWhile { body, cond }, start.to(end)))
    }

    fn parse_output(&mut self) -> Result<Stmt> {
        let start = self.advance().span; // 'output'
        self.expect(TokenKind::LParen, "'('")?;
        let expr = self.parse_expr()?;
        self.expect(TokenKind::RParen, "')'")?;
        let end = self.expect(TokenKind::Semi, "';'")?.span;
        Ok(Stmt::new(StmtKind::OutputStmt(expr), start.to(end)))
    }

    /// `input();` as a standalone statement — its result is discarded.
    fn parse_bare_input(&mut self) -> Result<Stmt> {
        let expr = self.parse_expr()?;
        let end = self.expect(TokenKind::Semi, "';'")?.span;
        let start = expr.span;
        Ok(Stmt::new(StmtKind::ExprStmt(expr), start.to(end)))
    }

    // --- expressions (Pratt) ---

    fn parse_expr(&mut self) -> Result<Expr> {
        self.parse_expr_bp(0)
    }

    fn parse_expr_bp(&mut self, min_bp: u8) -> Result<Expr> {
        let mut left = self.parse_unary()?;
        loop {
            let Some((left_bp, right_bp, op)) = infix_binding_power(&self.current().kind) else {
                break;
            };
            if left_bp < min_bp {
                break;
            }
            self.advance();
            let right = self.parse_expr_bp(right_bp)?;
            let span = left.span.to(right.span);
            left = Expr::new(ExprKind::Binary(op, Box::new(left), Box::new(right)), span);
        }
        Ok(left)
    }

    /// Level 11: unary `-`, `~`, `!`, right-associative by recursing into
    /// itself for the operand so `--x`-as-two-prefixes (not reachable from
    /// this grammar's tokens, but `-~x` is) nests correctly.
    fn parse_unary(&mut self) -> Result<Expr> {
        let op = match self.current().kind {
            TokenKind::Minus => UnOp::Neg,
            TokenKind::Tilde => UnOp::BitNot,
            TokenKind::Bang => UnOp::Not,
            _ => return self.parse_primary(),
        };
        let start = self.advance().span;
        let operand = self.parse_unary()?;
        let span = start.to(operand.span);
        Ok(Expr::new(ExprKind::Unary(op, Box::new(operand)), span))
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        let token = self.current().clone();
        match token.kind {
            TokenKind::Int(value) => {
                self.advance();
                Ok(Expr::new(ExprKind::IntLiteral(value), token.span))
            }
            TokenKind::Ident(sym) => {
                self.advance();
                Ok(Expr::new(ExprKind::Var(sym), token.span))
            }
            TokenKind::Input => {
                self.advance();
                self.expect(TokenKind::LParen, "'('")?;
                let end = self.expect(TokenKind::RParen, "')'")?.span;
                Ok(Expr::new(ExprKind::Call(Builtin::Input, Vec::new()), token.span.to(end)))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen, "')'")?;
                Ok(inner)
            }
            _ => Err(self.unexpected("an expression")),
        }
    }
}
