use crate::lexer::Token;
use std::fmt;

/// An identifier with an optional type annotation (e.g. `x` or `x: int`).
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub type_annotation: Option<Box<AstNode>>,
}

impl Identifier {
    pub fn name(&self) -> &str {
        &self.token.text
    }
}

/// A sequence of statements. The root of every program is a `Block`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<AstNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// A `nil`, `true`, `false`, digit or string literal.
    Literal(Token),
    Identifier(Identifier),
    /// A binary expression (e.g. `1 + 1`).
    BinaryOperation {
        left: Box<AstNode>,
        operator: Token,
        right: Box<AstNode>,
    },
    /// A keyword operator applied to one operand (e.g. `print x`).
    UnaryOperation {
        operator: Token,
        operand: Box<AstNode>,
    },
    Block(Block),
    If {
        condition: Box<AstNode>,
        then_block: Block,
        /// Empty when the `else` branch is missing.
        else_block: Block,
    },
    While {
        condition: Box<AstNode>,
        body: Block,
    },
    Function {
        name: Identifier,
        parameters: Vec<Identifier>,
        body: Block,
        return_type: Box<AstNode>,
    },
    Call {
        callee: Box<AstNode>,
        arguments: Vec<AstNode>,
    },
    Indexation {
        target: Box<AstNode>,
        index: Box<AstNode>,
    },
    Parenthesized(Box<AstNode>),
    Array(Vec<AstNode>),
    Object(Vec<AstNode>),
    Typedef {
        name: Identifier,
        type_expr: Box<AstNode>,
    },
}

impl AstNode {
    /// Short description of the node variant, used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            AstNode::Literal(_) => "literal",
            AstNode::Identifier(_) => "identifier",
            AstNode::BinaryOperation { .. } => "binary operation",
            AstNode::UnaryOperation { .. } => "unary operation",
            AstNode::Block(_) => "block",
            AstNode::If { .. } => "if expression",
            AstNode::While { .. } => "while loop",
            AstNode::Function { .. } => "function definition",
            AstNode::Call { .. } => "call",
            AstNode::Indexation { .. } => "indexation",
            AstNode::Parenthesized(_) => "parenthesized expression",
            AstNode::Array(_) => "array literal",
            AstNode::Object(_) => "object literal",
            AstNode::Typedef { .. } => "type definition",
        }
    }
}

/// Writes `items` separated by spaces, each preceded by a space.
fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for item in items {
        write!(f, " {}", item)?;
    }
    Ok(())
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.type_annotation {
            Some(ty) => write!(f, "(: {} {})", self.name(), ty),
            None => f.write_str(self.name()),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(block")?;
        write_list(f, &self.statements)?;
        f.write_str(")")
    }
}

/// Renders the node as an s-expression, e.g. `(+ 1 (* 2 3))`.
impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstNode::Literal(token) => f.write_str(&token.text),
            AstNode::Identifier(ident) => write!(f, "{}", ident),
            AstNode::BinaryOperation {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", operator.text, left, right),
            AstNode::UnaryOperation { operator, operand } => {
                write!(f, "({} {})", operator.text, operand)
            }
            AstNode::Block(block) => write!(f, "{}", block),
            AstNode::If {
                condition,
                then_block,
                else_block,
            } => write!(f, "(if {} {} {})", condition, then_block, else_block),
            AstNode::While { condition, body } => write!(f, "(while {} {})", condition, body),
            AstNode::Function {
                name,
                parameters,
                body,
                return_type,
            } => {
                write!(f, "(fn {} (", name)?;
                for (i, param) in parameters.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", param)?;
                }
                write!(f, ") -> {} {})", return_type, body)
            }
            AstNode::Call { callee, arguments } => {
                write!(f, "(call {}", callee)?;
                write_list(f, arguments)?;
                f.write_str(")")
            }
            AstNode::Indexation { target, index } => write!(f, "(index {} {})", target, index),
            AstNode::Parenthesized(inner) => write!(f, "(group {})", inner),
            AstNode::Array(elements) => {
                f.write_str("(array")?;
                write_list(f, elements)?;
                f.write_str(")")
            }
            AstNode::Object(fields) => {
                f.write_str("(object")?;
                write_list(f, fields)?;
                f.write_str(")")
            }
            AstNode::Typedef { name, type_expr } => write!(f, "(type {} {})", name, type_expr),
        }
    }
}
