use femira_value::chunk::{Bytecode, Opcode};
use femira_value::{Value, ValueArray};
use std::convert::TryFrom;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("stack is empty")]
    StackUnderflow,
    #[error("cannot push an absent value to the stack")]
    AbsentValue,
    #[error("cannot {operation} {left} and {right}")]
    OperandMismatch {
        operation: &'static str,
        left: &'static str,
        right: &'static str,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
    #[error("cannot write output")]
    Output(#[from] io::Error),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Stack machine executing [`Bytecode`]. Printed output goes to `out`.
pub struct Vm<W> {
    /// VM stack.
    stack: ValueArray,
    out: W,
}

impl<W: Write> Vm<W> {
    pub fn new(out: W) -> Self {
        Self {
            stack: Vec::with_capacity(256),
            out,
        }
    }

    /// Values currently on the stack, bottom first.
    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    pub fn pop(&mut self) -> RuntimeResult<Value> {
        self.stack.pop().ok_or(RuntimeError::StackUnderflow)
    }

    /// Executes `bytecode` until its end or until a `return` instruction.
    ///
    /// When `trace` is set, the whole listing is written to the output before anything runs.
    pub fn run(&mut self, bytecode: &Bytecode, trace: bool) -> RuntimeResult<()> {
        if trace {
            write!(self.out, "{}", bytecode)?;
        }

        for instruction in bytecode {
            match instruction.opcode {
                Opcode::PushValue => {
                    let value = instruction
                        .operand
                        .clone()
                        .ok_or(RuntimeError::AbsentValue)?;
                    self.push(value);
                }
                Opcode::Add => self.binary_op(Opcode::Add, i64::checked_add, |a, b| a + b)?,
                Opcode::Sub => self.binary_op(Opcode::Sub, i64::checked_sub, |a, b| a - b)?,
                Opcode::Mul => self.binary_op(Opcode::Mul, i64::checked_mul, |a, b| a * b)?,
                Opcode::Div => self.binary_op(Opcode::Div, i64::checked_div, |a, b| a / b)?,
                Opcode::Print => {
                    let value = self.pop()?;
                    self.print_boxed(&value.to_string())?;
                }
                Opcode::Wait => {
                    if let Some(duration) = self.pop_duration()? {
                        self.out.flush()?;
                        thread::sleep(duration);
                    }
                }
                Opcode::Return => return Ok(()),
            }
        }

        Ok(())
    }

    /// Pops the right operand, then the left one, and pushes `left op right`.
    /// Both operands must be integers or both must be doubles.
    fn binary_op(
        &mut self,
        opcode: Opcode,
        int_op: fn(i64, i64) -> Option<i64>,
        double_op: fn(f64, f64) -> f64,
    ) -> RuntimeResult<()> {
        let right = self.pop()?;
        let left = self.pop()?;

        let result = match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => {
                if opcode == Opcode::Div && b == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                let val = int_op(a, b).ok_or(RuntimeError::IntegerOverflow {
                    operation: opcode.name(),
                })?;
                Value::Integer(val)
            }
            (Value::Double(a), Value::Double(b)) => Value::Double(double_op(a, b)),
            (left, right) => {
                return Err(RuntimeError::OperandMismatch {
                    operation: opcode.name(),
                    left: left.type_name(),
                    right: right.type_name(),
                })
            }
        };

        self.push(result);
        Ok(())
    }

    /// Writes `text` framed by dashes, e.g.
    ///
    /// ```text
    ///  ------
    ///  | hi |
    ///  ------
    /// ```
    fn print_boxed(&mut self, text: &str) -> RuntimeResult<()> {
        let border = "-".repeat(text.chars().count() + 4);
        writeln!(self.out, " {}", border)?;
        writeln!(self.out, " | {} | ", text)?;
        writeln!(self.out, " {}", border)?;
        Ok(())
    }

    /// Pops whole seconds (integer) or fractional seconds (double).
    /// Negative and NaN durations are zero. Other values are popped and ignored.
    fn pop_duration(&mut self) -> RuntimeResult<Option<Duration>> {
        let duration = match self.pop()? {
            Value::Integer(secs) => Duration::from_secs(u64::try_from(secs).unwrap_or(0)),
            Value::Double(secs) if secs > 0.0 => {
                Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
            }
            Value::Double(_) => Duration::ZERO,
            _ => return Ok(None),
        };
        Ok(Some(duration))
    }
}
