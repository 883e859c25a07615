use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sixc_drv::{compile, CompileError, Target};

/// Compiles a small imperative language to 6502 assembly.
#[derive(Debug, Parser)]
#[command(name = "sixc", version, about)]
struct Cli {
    /// Source file to compile, or `-` to read from stdin.
    input: PathBuf,

    /// I/O runtime to target.
    #[arg(long, value_enum, default_value = "generic")]
    target: CliTarget,

    /// Where to write the generated assembly; defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliTarget {
    Generic,
    Py65mon,
}

impl From<CliTarget> for Target {
    fn from(target: CliTarget) -> Self {
        match target {
            CliTarget::Generic => Target::Generic,
            CliTarget::Py65mon => Target::Py65mon,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("SIXC_LOG"))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CompileError> {
    let source = read_input(&cli.input)?;
    let asm = compile(&source, cli.target.into())?;
    write_output(cli.output.as_deref(), &asm)
}

fn read_input(path: &std::path::Path) -> Result<String, CompileError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CompileError::Read { path: "<stdin>".to_string(), source })?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .map_err(|source| CompileError::Read { path: path.display().to_string(), source })
    }
}

fn write_output(path: Option<&std::path::Path>, asm: &str) -> Result<(), CompileError> {
    match path {
        Some(path) => std::fs::write(path, asm)
            .map_err(|source| CompileError::Write { path: path.display().to_string(), source }),
        None => {
            print!("{asm}");
            Ok(())
        }
    }
}
