//! LS-8 common types: the instruction set and program images.
//!
//! This crate provides the vocabulary shared by the VM and its runners:
//!
//! - [`Opcode`]: the ten recognized opcodes and their bit-layout metadata
//! - [`Instruction`]: a decoded opcode with its operand bytes
//! - [`Program`]: a byte image, parsed from `.ls8` text or built from bytes
//! - [`DecodeError`], [`LoadError`]: what can go wrong getting there

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;

// Re-export commonly used types at the crate root.
pub use error::{DecodeError, LoadError};
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use program::{ParseReport, Program, MEMORY_SIZE};

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy that generates a random valid Opcode.
    fn arb_opcode() -> impl Strategy<Value = Opcode> {
        prop::sample::select(&opcode::ALL_OPCODES[..])
    }

    proptest! {
        /// Decoding any byte window either yields an instruction whose
        /// encoding is a prefix of the window, or a decode error.
        #[test]
        fn decode_consumes_declared_prefix(bytes in prop::collection::vec(any::<u8>(), 0..4)) {
            match Instruction::decode(&bytes) {
                Ok(instr) => {
                    let encoded = instr.encode();
                    prop_assert_eq!(&bytes[..encoded.len()], &encoded[..]);
                }
                Err(e) => match e {
                    DecodeError::UnknownOpcode(_) | DecodeError::Truncated { .. } => {}
                },
            }
        }

        /// Operand count always agrees with the top two bits of the byte.
        #[test]
        fn operand_count_matches_top_bits(op in arb_opcode()) {
            prop_assert_eq!(op.operand_count(), (op as u8 >> 6) as usize);
        }

        /// Writing each byte as an 8-digit binary line and parsing it back
        /// yields the same image.
        #[test]
        fn binary_text_loads_same_bytes(bytes in prop::collection::vec(any::<u8>(), 0..=MEMORY_SIZE)) {
            let text: String = bytes.iter().map(|b| format!("{b:08b}\n")).collect();
            let program = Program::parse(&text).unwrap();
            prop_assert_eq!(program.bytes(), &bytes[..]);
        }
    }
}
