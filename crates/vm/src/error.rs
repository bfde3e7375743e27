//! Runtime faults for the LS-8 VM.
//!
//! Every fault is fatal: the machine stops and keeps the fault as its final
//! status. Faults carry the address or index involved so runners can report
//! it.

use std::fmt;

use thiserror::Error;

/// The kind of access that hit an out-of-range index or address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Reading an instruction or operand byte at pc.
    Fetch,
    /// Reading a register or memory cell.
    Read,
    /// Writing a register or memory cell.
    Write,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Fetch => write!(f, "fetch"),
            Access::Read => write!(f, "read"),
            Access::Write => write!(f, "write"),
        }
    }
}

/// Errors that stop the machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The byte at pc is not a recognized opcode.
    #[error("unknown instruction {opcode:#04x} at address {at:#04x}")]
    UnknownInstruction { opcode: u8, at: usize },

    /// Register index outside R0..R7.
    #[error("register index {index} out of range during {access}")]
    RegisterOutOfRange { index: usize, access: Access },

    /// Memory address outside the 256-byte address space.
    #[error("memory address {address:#04x} out of range during {access}")]
    AddressOutOfRange { address: usize, access: Access },
}
