//! Femira: lexer, parser, bytecode compiler and virtual machine.
//!
//! ```
//! let vm = femira::interpret("print 1 + 2;", &femira::Options::default(), Vec::new()).unwrap();
//! let output = String::from_utf8(vm.into_output()).unwrap();
//! assert_eq!(output, " -----\n | 3 | \n -----\n");
//! ```

use femira_parser::ParseError;
use femira_source::{LexError, SyntaxError};
use femira_value::chunk::Bytecode;
use femira_vm::codegen::{Codegen, CompileError};
use femira_vm::vm::{RuntimeError, Vm};
use std::io::Write;
use thiserror::Error;

/// Run configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Write the bytecode listing before executing it.
    pub trace: bool,
}

impl Options {
    /// Reads the optional trace flag argument. Only the exact text `yes` enables tracing.
    pub fn from_trace_arg(arg: Option<&str>) -> Self {
        Self {
            trace: arg == Some("yes"),
        }
    }
}

/// Any error raised by the pipeline. All of them abort the run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),
    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),
    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Lex(err) => Error::Lex(err),
            ParseError::Syntax(err) => Error::Syntax(err),
        }
    }
}

impl Error {
    /// Byte offset in the source the error points at, if any.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Lex(err) => Some(err.offset()),
            Error::Syntax(err) => err.offset(),
            Error::Compile(_) | Error::Runtime(_) => None,
        }
    }
}

/// Lexes, parses and compiles `source`.
pub fn compile(source: &str) -> Result<Bytecode, Error> {
    let ast = femira_parser::parse_str(source)?;

    let mut codegen = Codegen::new();
    codegen.codegen_program(&ast)?;
    Ok(codegen.into_bytecode())
}

/// Compiles and runs `source`, writing printed output to `out`.
/// Returns the VM so that the final stack can be inspected.
pub fn interpret<W: Write>(source: &str, options: &Options, out: W) -> Result<Vm<W>, Error> {
    let bytecode = compile(source)?;

    let mut vm = Vm::new(out);
    vm.run(&bytecode, options.trace)?;
    Ok(vm)
}
