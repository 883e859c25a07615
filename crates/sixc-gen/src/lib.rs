//! Code generation: lowers a bound [`sixc_sem::Program`] to DASM-flavored
//! 6502 assembly text, ready to hand to `dasm` or run under an emulator.

mod error;
mod generator;
#[cfg(test)]
mod proptests;
mod runtime;
mod target;

pub use error::{CodeGenError, Result};
pub use generator::CodeGenerator;
pub use target::Target;

/// Generates assembly for `program` targeting `target`.
pub fn generate(program: &sixc_sem::Program, target: Target) -> Result<String> {
    CodeGenerator::new(target).generate(program)
}
