//! Lexer, abstract syntax tree and parser for Femira source code.

pub mod ast;
pub mod lexer;
pub mod parser;

use femira_source::{LexError, SyntaxError};
use thiserror::Error;

/// Any error raised before the AST is complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    /// Byte offset of the offending character or token, if known.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::Lex(err) => Some(err.offset()),
            ParseError::Syntax(err) => err.offset(),
        }
    }
}

/// Lexes and parses `source` into the top-level block.
///
/// # Example
/// ```
/// let ast = femira_parser::parse_str("print 1 + 2;").unwrap();
/// assert_eq!(ast.to_string(), "(block (print (+ 1 2)))");
/// ```
pub fn parse_str(source: &str) -> Result<ast::Block, ParseError> {
    let tokens = lexer::make_tokens(source)?;
    let ast = parser::Parser::new(tokens).make_ast()?;
    Ok(ast)
}
