//! Decode and load errors for LS-8 programs.

use thiserror::Error;

/// Errors that occur while decoding an instruction byte stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Byte is not one of the ten recognized opcodes.
    #[error("unknown opcode: {0:#04x}")]
    UnknownOpcode(u8),

    /// The byte window ended before all declared operands were read.
    #[error("truncated instruction: {opcode:#04x} needs {needed} operand bytes, {available} available")]
    Truncated {
        opcode: u8,
        needed: usize,
        available: usize,
    },
}

/// Errors that occur while turning program text or bytes into a [`Program`](crate::Program).
///
/// Lines that do not parse as binary are not errors; they are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The program does not fit in the 256-byte address space.
    #[error("program of {len} bytes exceeds memory size of {max}")]
    ProgramTooLarge { len: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_opcode() {
        assert_eq!(
            DecodeError::UnknownOpcode(0xff).to_string(),
            "unknown opcode: 0xff"
        );
    }

    #[test]
    fn display_truncated() {
        assert_eq!(
            DecodeError::Truncated {
                opcode: 0x82,
                needed: 2,
                available: 1
            }
            .to_string(),
            "truncated instruction: 0x82 needs 2 operand bytes, 1 available"
        );
    }

    #[test]
    fn display_program_too_large() {
        assert_eq!(
            LoadError::ProgramTooLarge { len: 300, max: 256 }.to_string(),
            "program of 300 bytes exceeds memory size of 256"
        );
    }
}
