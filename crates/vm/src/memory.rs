//! Address space and register file.
//!
//! Both are fixed-size byte arrays behind checked accessors: a valid index
//! is accepted, anything else is a [`RuntimeError`] rather than a silent
//! no-op.

use crate::error::{Access, RuntimeError};
use ls8_common::{Program, MEMORY_SIZE};

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Register reserved as the stack pointer.
pub const SP: usize = 7;

/// Initial stack pointer. The stack grows down from here.
pub const STACK_START: u8 = 0xF3;

/// 256 bytes of zero-initialized RAM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    pub fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    pub fn read(&self, address: usize) -> Result<u8, RuntimeError> {
        self.cells
            .get(address)
            .copied()
            .ok_or(RuntimeError::AddressOutOfRange {
                address,
                access: Access::Read,
            })
    }

    pub fn write(&mut self, address: usize, value: u8) -> Result<(), RuntimeError> {
        let cell = self
            .cells
            .get_mut(address)
            .ok_or(RuntimeError::AddressOutOfRange {
                address,
                access: Access::Write,
            })?;
        *cell = value;
        Ok(())
    }

    /// Copy a program image into memory starting at address 0.
    pub fn load(&mut self, program: &Program) {
        let bytes = program.bytes();
        self.cells[..bytes.len()].copy_from_slice(bytes);
    }

    /// The whole address space.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

/// Registers R0..R7. R7 doubles as the stack pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registers {
    values: [u8; REGISTER_COUNT],
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    /// All registers zero except SP, which starts at [`STACK_START`].
    pub fn new() -> Self {
        let mut values = [0; REGISTER_COUNT];
        values[SP] = STACK_START;
        Self { values }
    }

    pub fn read(&self, index: usize) -> Result<u8, RuntimeError> {
        self.values
            .get(index)
            .copied()
            .ok_or(RuntimeError::RegisterOutOfRange {
                index,
                access: Access::Read,
            })
    }

    pub fn write(&mut self, index: usize, value: u8) -> Result<(), RuntimeError> {
        let slot = self
            .values
            .get_mut(index)
            .ok_or(RuntimeError::RegisterOutOfRange {
                index,
                access: Access::Write,
            })?;
        *slot = value;
        Ok(())
    }

    /// Current stack pointer.
    pub fn sp(&self) -> u8 {
        self.values[SP]
    }

    pub(crate) fn set_sp(&mut self, value: u8) {
        self.values[SP] = value;
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.values
    }
}
