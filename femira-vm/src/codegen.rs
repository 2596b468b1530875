//! Lowers AST into [`Bytecode`].

use femira_parser::{
    ast::{AstNode, Block},
    lexer::{Token, TokenKind},
};
use femira_value::chunk::{Bytecode, Instruction, Opcode};
use femira_value::Value;
use thiserror::Error;

/// Raised for nodes the instruction set cannot express yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("{construct} is not supported by the bytecode compiler")]
    UnsupportedConstruct { construct: &'static str },
    #[error("operator `{operator}` is not supported by the bytecode compiler")]
    UnsupportedOperator { operator: String },
    #[error("invalid literal `{text}`")]
    InvalidLiteral { text: String },
}

pub type CompileResult<T> = Result<T, CompileError>;

/// Generate bytecode from an abstract syntax tree.
#[derive(Default)]
pub struct Codegen {
    bytecode: Bytecode,
}

impl Codegen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bytecode generated so far.
    pub fn generated_bytecode(&self) -> &Bytecode {
        &self.bytecode
    }

    /// Consumes `self` and returns the generated [`Bytecode`].
    #[must_use]
    pub fn into_bytecode(self) -> Bytecode {
        self.bytecode
    }

    /// Lowers every top-level statement, in order.
    pub fn codegen_program(&mut self, program: &Block) -> CompileResult<()> {
        for statement in &program.statements {
            self.codegen_node(statement)?;
        }
        Ok(())
    }

    fn emit(&mut self, opcode: Opcode) {
        self.bytecode.write(Instruction::new(opcode));
    }

    fn codegen_node(&mut self, node: &AstNode) -> CompileResult<()> {
        match node {
            AstNode::Literal(token) => {
                let value = literal_value(token)?;
                self.bytecode.write(Instruction::push_value(value));
            }
            AstNode::Parenthesized(inner) => self.codegen_node(inner)?,
            AstNode::BinaryOperation {
                left,
                operator,
                right,
            } => {
                let opcode = match operator.kind {
                    TokenKind::Plus => Opcode::Add,
                    TokenKind::Minus => Opcode::Sub,
                    TokenKind::Asterisk => Opcode::Mul,
                    TokenKind::Slash => Opcode::Div,
                    _ => {
                        return Err(CompileError::UnsupportedOperator {
                            operator: operator.text.clone(),
                        })
                    }
                };
                self.codegen_node(left)?;
                self.codegen_node(right)?;
                self.emit(opcode);
            }
            AstNode::UnaryOperation { operator, operand } => {
                let opcode = match operator.kind {
                    TokenKind::Print => Opcode::Print,
                    TokenKind::Wait => Opcode::Wait,
                    TokenKind::Return => Opcode::Return,
                    _ => {
                        return Err(CompileError::UnsupportedOperator {
                            operator: operator.text.clone(),
                        })
                    }
                };
                self.codegen_node(operand)?;
                self.emit(opcode);
            }
            // No jump targets or call frames in the instruction set yet.
            AstNode::Identifier(_)
            | AstNode::Block(_)
            | AstNode::If { .. }
            | AstNode::While { .. }
            | AstNode::Function { .. }
            | AstNode::Call { .. }
            | AstNode::Indexation { .. }
            | AstNode::Array(_)
            | AstNode::Object(_)
            | AstNode::Typedef { .. } => {
                return Err(CompileError::UnsupportedConstruct {
                    construct: node.describe(),
                })
            }
        }

        Ok(())
    }
}

/// Converts a literal token into the constant it denotes.
fn literal_value(token: &Token) -> CompileResult<Value> {
    let invalid = || CompileError::InvalidLiteral {
        text: token.text.clone(),
    };

    match token.kind {
        TokenKind::Digit if token.text.contains('.') => {
            token.text.parse().map(Value::Double).map_err(|_| invalid())
        }
        TokenKind::Digit => token.text.parse().map(Value::Integer).map_err(|_| invalid()),
        TokenKind::String => token
            .text
            .strip_prefix('"')
            .and_then(|text| text.strip_suffix('"'))
            .map(|text| Value::String(text.to_string()))
            .ok_or_else(invalid),
        TokenKind::Nil => Ok(Value::Null),
        TokenKind::True => Ok(Value::Integer(1)),
        TokenKind::False => Ok(Value::Integer(0)),
        _ => Err(invalid()),
    }
}
