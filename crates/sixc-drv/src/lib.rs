//! Compiler driver: wires the lexer, parser, semantic analyzer, and code
//! generator into a single `source -> assembly` pipeline and owns the CLI
//! surface (argument parsing, file I/O, exit codes).

use sixc_sem::SemanticAnalyzer;
use sixc_util::Interner;
use thiserror::Error;

pub use sixc_gen::Target;

/// Every failure mode a run of [`compile`] can produce, aggregated from the
/// four pipeline stages plus the driver's own I/O boundary.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] sixc_lex::LexError),
    #[error(transparent)]
    Parse(#[from] sixc_par::ParseError),
    #[error(transparent)]
    Sem(#[from] sixc_sem::SemError),
    #[error(transparent)]
    CodeGen(#[from] sixc_gen::CodeGenError),
    #[error("failed to read {path}: {source}")]
    Read { path: String, #[source] source: std::io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: String, #[source] source: std::io::Error },
}

/// Runs the full pipeline over `source`, returning DASM assembly text.
pub fn compile(source: &str, target: Target) -> Result<String, CompileError> {
    let mut interner = Interner::new();
    tracing::debug!("lexing {} bytes", source.len());
    let tokens = sixc_lex::Lexer::new(source, &mut interner).tokenize()?;
    tracing::debug!(token_count = tokens.len(), "lexed");
    let parsed = sixc_par::parse(tokens)?;
    tracing::debug!(stmt_count = parsed.stmts.len(), "parsed");
    let program = SemanticAnalyzer::new(&interner).analyze(parsed)?;
    tracing::debug!(symbol_count = program.symbol_count, "analyzed");
    let asm = sixc_gen::generate(&program, target)?;
    tracing::debug!(target = %target, "generated");
    Ok(asm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_a_small_program_end_to_end() {
        let asm = compile("var a = 1; var b = a + 2; output(b);", Target::Generic).unwrap();
        assert!(asm.contains("output_routine"));
    }

    #[test]
    fn surfaces_undeclared_name_as_sem_error() {
        let err = compile("x = 1;", Target::Generic).unwrap_err();
        assert!(matches!(err, CompileError::Sem(_)));
    }

    #[test]
    fn surfaces_unexpected_token_as_parse_error() {
        let err = compile("var a = ;", Target::Generic).unwrap_err();
        assert!(matches!(err, CompileError::Parse(_)));
    }
}
