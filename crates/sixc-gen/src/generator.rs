use crate::error::Result;
use crate::target::Target;
use sixc_sem::{BinOp, Expr, Program, Stmt, UnOp};
use std::fmt::Write as _;

/// Lowers a bound [`Program`] to DASM-flavored 6502 assembly text.
///
/// Expressions are evaluated post-order onto an implicit one-value stack
/// realized with `PHA`/`PLA` and the `$FE` scratch byte: the left operand is
/// computed first and pushed, the right operand is computed into `A` and
/// parked at `$FE`, then the left operand is pulled back into `A` so the
/// operator kernel always sees left in `A` and right at `$FE`.
///
/// Every structured statement captures one label id from `label_counter` at
/// entry and derives its label pair from it, so nested statements never
/// reuse a label; every relational/logical kernel mints its own id the same
/// way. The counter lives on the generator instance, never a global.
pub struct CodeGenerator {
    out: String,
    label_counter: u32,
    target: Target,
}

impl CodeGenerator {
    pub fn new(target: Target) -> Self {
        Self { out: String::new(), label_counter: 0, target }
    }

    pub fn generate(mut self, program: &Program) -> Result<String> {
        self.prologue();
        for stmt in &program.stmts {
            self.gen_stmt(stmt);
        }
        self.epilogue();
        Ok(self.out)
    }

    fn next_id(&mut self) -> u32 {
        let id = self.label_counter;
        self.label_counter += 1;
        id
    }

    fn emit(&mut self, line: impl AsRef<str>) {
        let line = line.as_ref();
        if line.ends_with(':') {
            let _ = writeln!(self.out, "{line}");
        } else if line.is_empty() {
            let _ = writeln!(self.out);
        } else {
            let _ = writeln!(self.out, "    {line}");
        }
    }

    fn label(&mut self, name: impl AsRef<str>) {
        let _ = writeln!(self.out, "{}:", name.as_ref());
    }

    fn prologue(&mut self) {
        let _ = writeln!(self.out, "; Generated 6502 Assembly Code");
        let _ = writeln!(self.out, "; Processor: 6502");
        self.emit("");
        self.emit("processor 6502");
        self.emit("org $0600");
        self.emit("");
        self.label("start");
        self.emit("LDX #$FF");
        self.emit("TXS");
        self.emit("");
    }

    fn epilogue(&mut self) {
        self.emit("");
        self.emit("BRK");
        self.emit("");
        let _ = writeln!(self.out, "; ==================== I/O Routines ====================");
        let _ = writeln!(self.out, "{}", self.target.runtime_text());
    }

    fn gen_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::VarDecl { addr, init } => {
                self.gen_expr(init);
                self.emit(format!("STA ${addr:02X}"));
            }
            Stmt::Assign { addr, expr } => {
                self.gen_expr(expr);
                self.emit(format!("STA ${addr:02X}"));
            }
            Stmt::PostInc(addr) => self.emit(format!("INC ${addr:02X}")),
            Stmt::PostDec(addr) => self.emit(format!("DEC ${addr:02X}")),
            Stmt::Output(expr) => {
                self.gen_expr(expr);
                self.emit("JSR output_routine");
            }
            Stmt::ExprStmt(expr) => self.gen_expr(expr),
            Stmt::If { cond, then_block, else_block } => self.gen_if(cond, then_block, else_block.as_deref()),
            Stmt::While { cond, body } => self.gen_while(cond, body),
            Stmt::DoWhile { body, cond } => self.gen_do_while(body, cond),
        }
    }

    fn gen_if(&mut self, cond: &Expr, then_block: &[Stmt], else_block: Option<&[Stmt]>) {
        let k = self.next_id();
        self.gen_expr(cond);
        self.emit("CMP #0");
        self.emit(format!("BEQ ELSE{k}"));
        for s in then_block {
            self.gen_stmt(s);
        }
        self.emit(format!("JMP ENDIF{k}"));
        self.label(format!("ELSE{k}"));
        if let Some(else_block) = else_block {
            for s in else_block {
                self.gen_stmt(s);
            }
        }
        self.label(format!("ENDIF{k}"));
    }

    fn gen_while(&mut self, cond: &Expr, body: &[Stmt]) {
        let k = self.next_id();
        self.label(format!("WHILE{k}"));
        self.gen_expr(cond);
        self.emit("CMP #0");
        self.emit(format!("BEQ ENDWHILE{k}"));
        for s in body {
            self.gen_stmt(s);
        }
        self.emit(format!("JMP WHILE{k}"));
        self.label(format!("ENDWHILE{k}"));
    }

    fn gen_do_while(&mut self, body: &[Stmt], cond: &Expr) {
        let k = self.next_id();
        self.label(format!("DO{k}"));
        for s in body {
            self.gen_stmt(s);
        }
        self.gen_expr(cond);
        self.emit("CMP #0");
        self.emit(format!("BNE DO{k}"));
    }

    /// Evaluates `expr`, leaving the result in `A`.
    fn gen_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::IntLiteral(value) => self.emit(format!("LDA #{value}")),
            Expr::Var(addr) => self.emit(format!("LDA ${addr:02X}")),
            Expr::Input => self.emit("JSR input_routine"),
            Expr::Unary(op, operand) => self.gen_unary(*op, operand),
            Expr::Binary(op, lhs, rhs) => self.gen_binary(*op, lhs, rhs),
        }
    }

    fn gen_unary(&mut self, op: UnOp, operand: &Expr) {
        self.gen_expr(operand);
        match op {
            UnOp::Neg => {
                self.emit("EOR #$FF");
                self.emit("CLC");
                self.emit("ADC #1");
            }
            UnOp::BitNot => self.emit("EOR #$FF"),
            UnOp::Not => {
                let k = self.next_id();
                self.emit("CMP #0");
                self.emit(format!("BEQ NOT_TRUE{k}"));
                self.emit("LDA #0");
                self.emit(format!("JMP NOT_END{k}"));
                self.label(format!("NOT_TRUE{k}"));
                self.emit("LDA #1");
                self.label(format!("NOT_END{k}"));
            }
        }
    }

    /// Pushes the left operand, evaluates the right into `A`, and leaves the
    /// right value parked at `$FE` with the left value restored to `A`.
    fn gen_operands(&mut self, lhs: &Expr, rhs: &Expr) {
        self.gen_expr(lhs);
        self.emit("PHA");
        self.gen_expr(rhs);
        self.emit("STA $FE");
        self.emit("PLA");
    }

    fn gen_binary(&mut self, op: BinOp, lhs: &Expr, rhs: &Expr) {
        match op {
            BinOp::Add => {
                self.gen_operands(lhs, rhs);
                self.emit("CLC");
                self.emit("ADC $FE");
            }
            BinOp::Sub => {
                self.gen_operands(lhs, rhs);
                self.emit("SEC");
                self.emit("SBC $FE");
            }
            BinOp::BitAnd => {
                self.gen_operands(lhs, rhs);
                self.emit("AND $FE");
            }
            BinOp::BitOr => {
                self.gen_operands(lhs, rhs);
                self.emit("ORA $FE");
            }
            BinOp::BitXor => {
                self.gen_operands(lhs, rhs);
                self.emit("EOR $FE");
            }
            BinOp::Shl => self.gen_shift(lhs, rhs, "ASL"),
            BinOp::Shr => self.gen_shift(lhs, rhs, "LSR"),
            BinOp::Eq => self.gen_relational(lhs, rhs, "EQ", "BEQ"),
            BinOp::Ne => self.gen_relational(lhs, rhs, "NE", "BNE"),
            BinOp::Lt => self.gen_relational(lhs, rhs, "LT", "BCC"),
            BinOp::Ge => self.gen_relational(lhs, rhs, "GE", "BCS"),
            BinOp::Le => self.gen_le(lhs, rhs),
            BinOp::Gt => self.gen_gt(lhs, rhs),
            BinOp::And => self.gen_logical_and(lhs, rhs),
            BinOp::Or => self.gen_logical_or(lhs, rhs),
            BinOp::Xor => self.gen_logical_xor(lhs, rhs),
        }
    }

    fn gen_shift(&mut self, lhs: &Expr, rhs: &Expr, op: &str) {
        self.gen_expr(lhs);
        self.emit("PHA");
        self.gen_expr(rhs);
        self.emit("TAX");
        self.emit("PLA");
        let k = self.next_id();
        self.label(format!("SHIFT_LOOP{k}"));
        self.emit("CPX #0");
        self.emit(format!("BEQ SHIFT_END{k}"));
        self.emit(op);
        self.emit("DEX");
        self.emit(format!("JMP SHIFT_LOOP{k}"));
        self.label(format!("SHIFT_END{k}"));
    }

    /// Emits a two-arm comparison kernel: `CMP $FE` followed by a single
    /// conditional branch to a "true" label, with the 0/1 materialization
    /// shared by every relational operator.
    fn gen_relational(&mut self, lhs: &Expr, rhs: &Expr, name: &str, branch_mnemonic: &str) {
        self.gen_operands(lhs, rhs);
        let k = self.next_id();
        self.emit("CMP $FE");
        self.emit(format!("{branch_mnemonic} {name}_TRUE{k}"));
        self.emit("LDA #0");
        self.emit(format!("JMP {name}_END{k}"));
        self.label(format!("{name}_TRUE{k}"));
        self.emit("LDA #1");
        self.label(format!("{name}_END{k}"));
    }

    fn gen_le(&mut self, lhs: &Expr, rhs: &Expr) {
        self.gen_operands(lhs, rhs);
        let k = self.next_id();
        self.emit("CMP $FE");
        self.emit(format!("BCC LE_TRUE{k}"));
        self.emit(format!("BEQ LE_TRUE{k}"));
        self.emit("LDA #0");
        self.emit(format!("JMP LE_END{k}"));
        self.label(format!("LE_TRUE{k}"));
        self.emit("LDA #1");
        self.label(format!("LE_END{k}"));
    }

    fn gen_gt(&mut self, lhs: &Expr, rhs: &Expr) {
        self.gen_operands(lhs, rhs);
        let k = self.next_id();
        self.emit("CMP $FE");
        self.emit(format!("BEQ GT_FALSE{k}"));
        self.emit(format!("BCC GT_FALSE{k}"));
        self.emit("LDA #1");
        self.emit(format!("JMP GT_END{k}"));
        self.label(format!("GT_FALSE{k}"));
        self.emit("LDA #0");
        self.label(format!("GT_END{k}"));
    }

    /// Evaluates both operands without the `$FE` scratch: the right value is
    /// transferred into `Y` so the left value can be restored straight from
    /// the stack into `A`, leaving both truthiness tests free to run without
    /// clobbering each other.
    fn gen_logical_operands(&mut self, lhs: &Expr, rhs: &Expr) {
        self.gen_expr(lhs);
        self.emit("PHA");
        self.gen_expr(rhs);
        self.emit("TAY");
        self.emit("PLA");
    }

    fn gen_logical_and(&mut self, lhs: &Expr, rhs: &Expr) {
        self.gen_logical_operands(lhs, rhs);
        let k = self.next_id();
        self.emit("CMP #0");
        self.emit(format!("BEQ AND_FALSE{k}"));
        self.emit("CPY #0");
        self.emit(format!("BEQ AND_FALSE{k}"));
        self.emit("LDA #1");
        self.emit(format!("JMP AND_END{k}"));
        self.label(format!("AND_FALSE{k}"));
        self.emit("LDA #0");
        self.label(format!("AND_END{k}"));
    }

    fn gen_logical_or(&mut self, lhs: &Expr, rhs: &Expr) {
        self.gen_logical_operands(lhs, rhs);
        let k = self.next_id();
        self.emit("CMP #0");
        self.emit(format!("BNE OR_TRUE{k}"));
        self.emit("CPY #0");
        self.emit(format!("BNE OR_TRUE{k}"));
        self.emit("LDA #0");
        self.emit(format!("JMP OR_END{k}"));
        self.label(format!("OR_TRUE{k}"));
        self.emit("LDA #1");
        self.label(format!("OR_END{k}"));
    }

    fn gen_logical_xor(&mut self, lhs: &Expr, rhs: &Expr) {
        self.gen_logical_operands(lhs, rhs);
        let k = self.next_id();
        self.emit("CMP #0");
        self.emit(format!("BEQ XOR_L_ZERO{k}"));
        self.emit("CPY #0");
        self.emit(format!("BEQ XOR_TRUE{k}"));
        self.emit(format!("JMP XOR_FALSE{k}"));
        self.label(format!("XOR_L_ZERO{k}"));
        self.emit("CPY #0");
        self.emit(format!("BEQ XOR_FALSE{k}"));
        self.label(format!("XOR_TRUE{k}"));
        self.emit("LDA #1");
        self.emit(format!("JMP XOR_END{k}"));
        self.label(format!("XOR_FALSE{k}"));
        self.emit("LDA #0");
        self.label(format!("XOR_END{k}"));
    }
}
