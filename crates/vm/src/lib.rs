//! LS-8 virtual machine: fetch, decode, and execute 8-bit programs.
//!
//! The machine has:
//! - 256 bytes of memory, with the program loaded at address 0
//! - eight 8-bit registers, R7 being the stack pointer (starts at `0xF3`)
//! - a flags register set by CMP
//! - a stack that grows down, shared by PUSH/POP and CALL/RET
//!
//! # Usage
//!
//! ```
//! use ls8_common::Program;
//! use ls8_vm::run;
//!
//! let program = Program::parse(
//!     "10000010\n00000000\n00001000\n\
//!      01000111\n00000000\n\
//!      00000001\n",
//! )
//! .unwrap();
//!
//! let mut out: Vec<u8> = Vec::new();
//! run(&program, &mut out).unwrap();
//! assert_eq!(out, vec![8]);
//! ```

pub mod alu;
pub mod error;
pub mod execute;
pub mod flags;
pub mod machine;
pub mod memory;
pub mod output;

pub use alu::AluOp;
pub use error::{Access, RuntimeError};
pub use flags::Flags;
pub use machine::{Machine, Status};
pub use memory::{Memory, Registers, REGISTER_COUNT, SP, STACK_START};
pub use output::{Console, Output};

use ls8_common::Program;

/// Load `program` into a fresh machine and run it until HLT.
///
/// PRN values go to `out` as they are produced, so a faulting program
/// still delivers everything it printed before the fault.
///
/// # Errors
///
/// Returns [`RuntimeError`] if the machine faults (unknown opcode, register
/// or address out of range).
pub fn run(program: &Program, out: &mut impl Output) -> Result<(), RuntimeError> {
    let mut machine = Machine::new(program);
    machine.run(out)
}
