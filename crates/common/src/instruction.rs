//! Decoded view of one LS-8 instruction.
//!
//! An instruction is an opcode byte followed by the number of operand bytes
//! its top two bits declare:
//! ```text
//! [opcode] [operand A]? [operand B]?
//! ```
//! Operands are register indices or immediates depending on the opcode.

use std::fmt;

use crate::error::DecodeError;
use crate::opcode::Opcode;

/// A decoded instruction. Unused operand slots are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The operation to perform.
    pub opcode: Opcode,
    /// First operand byte.
    pub a: u8,
    /// Second operand byte.
    pub b: u8,
}

impl Instruction {
    /// Create a new instruction.
    pub fn new(opcode: Opcode, a: u8, b: u8) -> Self {
        Self { opcode, a, b }
    }

    /// Decode the instruction at the start of `bytes`.
    ///
    /// Only the bytes the opcode declares are read; anything after them is
    /// ignored.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let (&first, rest) = bytes.split_first().ok_or(DecodeError::Truncated {
            opcode: 0,
            needed: 1,
            available: 0,
        })?;
        let opcode = Opcode::try_from(first)?;
        let needed = opcode.operand_count();
        if rest.len() < needed {
            return Err(DecodeError::Truncated {
                opcode: first,
                needed,
                available: rest.len(),
            });
        }

        let a = if needed >= 1 { rest[0] } else { 0 };
        let b = if needed >= 2 { rest[1] } else { 0 };
        Ok(Self { opcode, a, b })
    }

    /// Encode to the bytes a program file would contain.
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.opcode.encoded_len());
        bytes.push(self.opcode as u8);
        let operands = [self.a, self.b];
        bytes.extend_from_slice(&operands[..self.opcode.operand_count()]);
        bytes
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.opcode.mnemonic();
        match self.opcode {
            Opcode::Hlt | Opcode::Ret => write!(f, "{name}"),
            Opcode::Push | Opcode::Pop | Opcode::Prn | Opcode::Call => {
                write!(f, "{name} R{}", self.a)
            }
            Opcode::Ldi => write!(f, "{name} R{},{}", self.a, self.b),
            Opcode::Add | Opcode::Mul | Opcode::Cmp => {
                write!(f, "{name} R{},R{}", self.a, self.b)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_two_operand() {
        let instr = Instruction::decode(&[0x82, 0x00, 0x08]).unwrap();
        assert_eq!(instr, Instruction::new(Opcode::Ldi, 0, 8));
    }

    #[test]
    fn decode_one_operand_ignores_trailing_bytes() {
        let instr = Instruction::decode(&[0x47, 0x03, 0xAA, 0xBB]).unwrap();
        assert_eq!(instr, Instruction::new(Opcode::Prn, 3, 0));
    }

    #[test]
    fn decode_zero_operand() {
        let instr = Instruction::decode(&[0x01]).unwrap();
        assert_eq!(instr, Instruction::new(Opcode::Hlt, 0, 0));
    }

    #[test]
    fn decode_unknown_opcode() {
        assert_eq!(
            Instruction::decode(&[0xFF, 0, 0]),
            Err(DecodeError::UnknownOpcode(0xFF))
        );
    }

    #[test]
    fn decode_truncated() {
        assert_eq!(
            Instruction::decode(&[0xA2, 0x00]),
            Err(DecodeError::Truncated {
                opcode: 0xA2,
                needed: 2,
                available: 1
            })
        );
    }

    #[test]
    fn decode_empty() {
        assert!(matches!(
            Instruction::decode(&[]),
            Err(DecodeError::Truncated { available: 0, .. })
        ));
    }

    #[test]
    fn encode_drops_unused_operands() {
        assert_eq!(Instruction::new(Opcode::Ret, 9, 9).encode(), vec![0x11]);
        assert_eq!(Instruction::new(Opcode::Push, 2, 9).encode(), vec![0x45, 2]);
        assert_eq!(
            Instruction::new(Opcode::Cmp, 0, 1).encode(),
            vec![0xA7, 0, 1]
        );
    }

    #[test]
    fn display_forms() {
        assert_eq!(Instruction::new(Opcode::Ldi, 0, 8).to_string(), "LDI R0,8");
        assert_eq!(Instruction::new(Opcode::Prn, 1, 0).to_string(), "PRN R1");
        assert_eq!(Instruction::new(Opcode::Mul, 0, 1).to_string(), "MUL R0,R1");
        assert_eq!(Instruction::new(Opcode::Hlt, 0, 0).to_string(), "HLT");
    }
}
