//! Bytecode generation and execution.

pub mod codegen;
pub mod vm;
