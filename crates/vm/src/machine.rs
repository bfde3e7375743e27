//! Machine state: memory, registers, flags, pc, and run status.

use log::debug;

use crate::error::RuntimeError;
use crate::flags::Flags;
use crate::memory::{Memory, Registers};
use ls8_common::Program;

/// Where the machine is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Ready to execute the instruction at pc.
    Running,
    /// Stopped by HLT.
    Halted,
    /// Stopped by a fault. The fault is kept for inspection.
    Faulted(RuntimeError),
}

/// An LS-8 machine.
///
/// Each machine owns its whole state, so any number can run side by side.
#[derive(Debug, Clone)]
pub struct Machine {
    pub(crate) memory: Memory,
    pub(crate) registers: Registers,
    pub(crate) flags: Flags,
    /// Address of the next opcode byte.
    pub(crate) pc: usize,
    pub(crate) status: Status,
    /// Instructions executed so far.
    pub(crate) steps: u64,
}

impl Default for Machine {
    fn default() -> Self {
        Self {
            memory: Memory::new(),
            registers: Registers::new(),
            flags: Flags::default(),
            pc: 0,
            status: Status::Running,
            steps: 0,
        }
    }
}

impl Machine {
    /// Create a machine with `program` loaded at address 0.
    pub fn new(program: &Program) -> Self {
        let mut machine = Self::default();
        machine.memory.load(program);
        debug!("loaded {} program bytes", program.len());
        machine
    }

    /// Address of the next instruction to fetch.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Current lifecycle status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Flags left by the most recent CMP.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// The register file, R0..R7.
    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    /// The full 256-byte memory.
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Number of instructions executed, HLT included.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Read register `index`, rejecting indices past R7.
    pub fn read_register(&self, index: usize) -> Result<u8, RuntimeError> {
        self.registers.read(index)
    }

    /// Write register `index`, rejecting indices past R7.
    ///
    /// Writing R7 moves the stack pointer.
    pub fn write_register(&mut self, index: usize, value: u8) -> Result<(), RuntimeError> {
        self.registers.write(index, value)
    }

    /// Read the byte at `address`, rejecting addresses past 255.
    pub fn read_memory(&self, address: usize) -> Result<u8, RuntimeError> {
        self.memory.read(address)
    }

    /// Write the byte at `address`, rejecting addresses past 255.
    pub fn write_memory(&mut self, address: usize, value: u8) -> Result<(), RuntimeError> {
        self.memory.write(address, value)
    }

    /// Push a byte: decrement SP, then store at the new SP.
    pub(crate) fn push(&mut self, value: u8) -> Result<(), RuntimeError> {
        let sp = self.registers.sp().wrapping_sub(1);
        self.registers.set_sp(sp);
        self.memory.write(sp as usize, value)
    }

    /// Pop a byte: read at SP, then increment SP.
    pub(crate) fn pop(&mut self) -> Result<u8, RuntimeError> {
        let sp = self.registers.sp();
        let value = self.memory.read(sp as usize)?;
        self.registers.set_sp(sp.wrapping_add(1));
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::STACK_START;

    #[test]
    fn initial_state() {
        let program = Program::from_bytes(vec![0x01]).unwrap();
        let machine = Machine::new(&program);
        assert_eq!(machine.pc(), 0);
        assert_eq!(machine.status(), &Status::Running);
        assert_eq!(machine.flags().bits(), 0);
        assert_eq!(machine.registers().sp(), STACK_START);
        assert_eq!(machine.read_memory(0), Ok(0x01));
        assert_eq!(machine.steps(), 0);
    }

    #[test]
    fn push_then_pop() {
        let mut machine = Machine::default();
        machine.push(0xAB).unwrap();
        assert_eq!(machine.registers().sp(), STACK_START - 1);
        assert_eq!(machine.read_memory(STACK_START as usize - 1), Ok(0xAB));
        assert_eq!(machine.pop(), Ok(0xAB));
        assert_eq!(machine.registers().sp(), STACK_START);
    }

    #[test]
    fn stack_pointer_wraps() {
        let mut machine = Machine::default();
        machine.write_register(crate::memory::SP, 0).unwrap();
        machine.push(5).unwrap();
        assert_eq!(machine.registers().sp(), 0xFF);
        assert_eq!(machine.read_memory(0xFF), Ok(5));
        assert_eq!(machine.pop(), Ok(5));
        assert_eq!(machine.registers().sp(), 0);
    }
}
