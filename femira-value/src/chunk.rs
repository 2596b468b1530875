//! Definitions for [`Bytecode`], [`Instruction`] and [`Opcode`].

use crate::Value;
use std::slice;

/// Represents an opcode. The discriminants are the stable byte tags of the instruction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Pops the right then the left operand and pushes their sum.
    Add = 0x01,
    Sub = 0x02,
    Mul = 0x03,
    Div = 0x04,
    /// Pushes the instruction operand onto the stack.
    PushValue = 0x05,
    /// Pops a value and prints it inside a box.
    Print = 0x06,
    /// Pops a number and sleeps that many seconds.
    Wait = 0x07,
    /// Stops executing the current bytecode.
    Return = 0x08,
}

impl Opcode {
    /// Mnemonic used in bytecode listings.
    pub const fn name(self) -> &'static str {
        match self {
            Opcode::Add => "add",
            Opcode::Sub => "sub",
            Opcode::Mul => "mul",
            Opcode::Div => "div",
            Opcode::PushValue => "pushv",
            Opcode::Print => "print",
            Opcode::Wait => "wait",
            Opcode::Return => "return",
        }
    }
}

/// A single VM instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub opcode: Opcode,
    /// Only [`Opcode::PushValue`] carries an operand.
    pub operand: Option<Value>,
}

impl Instruction {
    /// Create an instruction without operand.
    pub fn new(opcode: Opcode) -> Self {
        Self {
            opcode,
            operand: None,
        }
    }

    /// Create a [`Opcode::PushValue`] instruction.
    pub fn push_value(value: Value) -> Self {
        Self {
            opcode: Opcode::PushValue,
            operand: Some(value),
        }
    }
}

/// Represents a flat sequence of instructions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bytecode {
    instructions: Vec<Instruction>,
}

impl Bytecode {
    /// Create an empty [`Bytecode`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an instruction.
    ///
    /// # Example
    /// ```
    /// use femira_value::chunk::{Bytecode, Instruction, Opcode};
    /// use femira_value::Value;
    /// let mut bytecode = Bytecode::new();
    /// bytecode.write(Instruction::push_value(Value::Integer(1)));
    /// bytecode.write(Instruction::new(Opcode::Print));
    /// assert_eq!(bytecode.len(), 2);
    /// assert_eq!(bytecode.instructions()[1].opcode, Opcode::Print);
    /// ```
    pub fn write(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }
}

impl From<Vec<Instruction>> for Bytecode {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }
}

impl<'a> IntoIterator for &'a Bytecode {
    type Item = &'a Instruction;
    type IntoIter = slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
