//! [`Bytecode`] listing support. The listing is also the VM trace format.

use crate::chunk::{Bytecode, Instruction};
use std::fmt;

/// Renders `name    operand`. The operand is empty for instructions without one.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}    ", self.opcode.name())?;
        match &self.operand {
            Some(operand) => write!(f, "{}", operand),
            None => Ok(()),
        }
    }
}

/// One line per instruction, in order.
impl fmt::Display for Bytecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instruction in self {
            writeln!(f, "{}", instruction)?;
        }

        Ok(())
    }
}
