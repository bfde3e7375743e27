//! Opcode definitions for the LS-8 instruction set.
//!
//! Every opcode byte carries its own metadata:
//!
//! ```text
//! bit 7-6  operand count (0, 1 or 2)
//! bit 5    ALU operation
//! bit 4    sets the program counter directly
//! bit 3-0  instruction identifier
//! ```

use crate::error::DecodeError;

/// Identifies the operation to perform.
///
/// The `#[repr(u8)]` attribute pins each variant to its byte value in
/// program files.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // VM control
    /// Halt the machine.
    Hlt = 0b0000_0001,

    // Subroutines
    /// Pop the return address from the stack into pc.
    Ret = 0b0001_0001,
    /// Push pc + 2, then jump to the address held in register A.
    Call = 0b0101_0000,

    // Stack
    /// Decrement SP, then store register A at memory[SP].
    Push = 0b0100_0101,
    /// Load memory[SP] into register A, then increment SP.
    Pop = 0b0100_0110,

    // General
    /// Emit the value of register A to the output sink.
    Prn = 0b0100_0111,
    /// Load immediate B into register A.
    Ldi = 0b1000_0010,

    // ALU
    /// register A = register A + register B (mod 256).
    Add = 0b1010_0000,
    /// register 0 = register A * register B (mod 256).
    Mul = 0b1010_0010,
    /// Compare register A with register B and set the flags.
    Cmp = 0b1010_0111,
}

/// All valid opcodes, in byte order.
pub const ALL_OPCODES: [Opcode; 10] = [
    Opcode::Hlt,
    Opcode::Ret,
    Opcode::Push,
    Opcode::Pop,
    Opcode::Prn,
    Opcode::Call,
    Opcode::Ldi,
    Opcode::Add,
    Opcode::Mul,
    Opcode::Cmp,
];

impl TryFrom<u8> for Opcode {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0b0000_0001 => Ok(Opcode::Hlt),
            0b0001_0001 => Ok(Opcode::Ret),
            0b0100_0101 => Ok(Opcode::Push),
            0b0100_0110 => Ok(Opcode::Pop),
            0b0100_0111 => Ok(Opcode::Prn),
            0b0101_0000 => Ok(Opcode::Call),
            0b1000_0010 => Ok(Opcode::Ldi),
            0b1010_0000 => Ok(Opcode::Add),
            0b1010_0010 => Ok(Opcode::Mul),
            0b1010_0111 => Ok(Opcode::Cmp),
            other => Err(DecodeError::UnknownOpcode(other)),
        }
    }
}

/// Number of operand bytes declared by the top two bits of an opcode byte.
///
/// Works on any byte, recognized or not. Only 0, 1 and 2 are used by the
/// defined opcodes; 3 is returned for `0b11xx_xxxx` bytes.
pub const fn operand_count(byte: u8) -> usize {
    (byte >> 6) as usize
}

impl Opcode {
    /// Number of operand bytes following this opcode.
    pub const fn operand_count(self) -> usize {
        operand_count(self as u8)
    }

    /// Total encoded length in bytes, opcode included.
    pub const fn encoded_len(self) -> usize {
        1 + self.operand_count()
    }

    /// True for instructions routed through the ALU (bit 5).
    pub const fn is_alu(self) -> bool {
        self as u8 & 0b0010_0000 != 0
    }

    /// True for instructions that assign pc instead of advancing it (bit 4).
    pub const fn sets_pc(self) -> bool {
        self as u8 & 0b0001_0000 != 0
    }

    /// Returns the assembly mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Hlt => "HLT",
            Opcode::Ret => "RET",
            Opcode::Call => "CALL",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Prn => "PRN",
            Opcode::Ldi => "LDI",
            Opcode::Add => "ADD",
            Opcode::Mul => "MUL",
            Opcode::Cmp => "CMP",
        }
    }
}
