//! Fetch-decode-execute loop and opcode dispatch.

use log::{debug, trace, warn};

use crate::alu::{alu, AluOp};
use crate::error::{Access, RuntimeError};
use crate::machine::{Machine, Status};
use crate::memory::SP;
use crate::output::Output;
use ls8_common::{DecodeError, Instruction, Opcode};

impl Machine {
    /// Execute exactly one instruction and return the new status.
    ///
    /// A halted machine stays halted. A faulted machine returns its fault
    /// again without executing anything.
    pub fn step(&mut self, out: &mut impl Output) -> Result<Status, RuntimeError> {
        match &self.status {
            Status::Running => {}
            Status::Halted => return Ok(Status::Halted),
            Status::Faulted(e) => return Err(e.clone()),
        }

        match self.execute_one(out) {
            Ok(()) => {
                self.steps += 1;
                Ok(self.status.clone())
            }
            Err(e) => {
                warn!("faulted at pc {:#04x}: {e}", self.pc);
                self.status = Status::Faulted(e.clone());
                Err(e)
            }
        }
    }

    /// Run until HLT or a fault.
    ///
    /// There is no step budget; a program that never halts never returns.
    /// Use [`run_for`](Self::run_for) to bound execution.
    pub fn run(&mut self, out: &mut impl Output) -> Result<(), RuntimeError> {
        while self.step(out)? == Status::Running {}
        Ok(())
    }

    /// Run at most `max_steps` instructions.
    ///
    /// Returns `Status::Running` if the budget ran out before HLT.
    pub fn run_for(
        &mut self,
        max_steps: u64,
        out: &mut impl Output,
    ) -> Result<Status, RuntimeError> {
        for _ in 0..max_steps {
            if self.step(out)? != Status::Running {
                break;
            }
        }
        Ok(self.status.clone())
    }

    /// Decode the instruction at pc.
    fn fetch(&self) -> Result<Instruction, RuntimeError> {
        let window = self
            .memory
            .as_slice()
            .get(self.pc..)
            .filter(|window| !window.is_empty())
            .ok_or(RuntimeError::AddressOutOfRange {
                address: self.pc,
                access: Access::Fetch,
            })?;

        Instruction::decode(window).map_err(|e| match e {
            DecodeError::UnknownOpcode(opcode) => RuntimeError::UnknownInstruction {
                opcode,
                at: self.pc,
            },
            DecodeError::Truncated { available, .. } => RuntimeError::AddressOutOfRange {
                address: self.pc + 1 + available,
                access: Access::Fetch,
            },
        })
    }

    fn execute_one(&mut self, out: &mut impl Output) -> Result<(), RuntimeError> {
        let instr = self.fetch()?;
        trace!("{:#04x}: {instr}", self.pc);

        let a = instr.a as usize;
        let b = instr.b as usize;
        let next_pc = self.pc + instr.opcode.encoded_len();

        match instr.opcode {
            Opcode::Hlt => {
                debug!("halted at pc {:#04x} after {} steps", self.pc, self.steps + 1);
                self.status = Status::Halted;
                return Ok(());
            }
            Opcode::Ldi => self.registers.write(a, instr.b)?,
            Opcode::Prn => out.emit(self.registers.read(a)?),

            Opcode::Add => self.exec_alu(AluOp::Add, a, b)?,
            Opcode::Mul => self.exec_alu(AluOp::Multiply, a, b)?,
            Opcode::Cmp => self.exec_alu(AluOp::Compare, a, b)?,

            Opcode::Push => self.exec_push(a)?,
            Opcode::Pop => self.exec_pop(a)?,

            Opcode::Call => return self.exec_call(a, next_pc),
            Opcode::Ret => return self.exec_ret(),
        }

        self.pc = next_pc;
        Ok(())
    }

    fn exec_alu(&mut self, op: AluOp, a: usize, b: usize) -> Result<(), RuntimeError> {
        alu(op, &mut self.registers, &mut self.flags, a, b)
    }

    // SP is R7, so PUSH R7 stores the already-decremented SP and POP R7
    // increments the popped value. The register is checked before SP moves.

    fn exec_push(&mut self, reg: usize) -> Result<(), RuntimeError> {
        let value = match self.registers.read(reg)? {
            sp if reg == SP => sp.wrapping_sub(1),
            value => value,
        };
        self.push(value)
    }

    fn exec_pop(&mut self, reg: usize) -> Result<(), RuntimeError> {
        let value = self.memory.read(self.registers.sp() as usize)?;
        self.registers.write(reg, value)?;
        self.registers.set_sp(self.registers.sp().wrapping_add(1));
        Ok(())
    }

    fn exec_call(&mut self, reg: usize, return_pc: usize) -> Result<(), RuntimeError> {
        self.registers.read(reg)?;
        let return_address =
            u8::try_from(return_pc).map_err(|_| RuntimeError::AddressOutOfRange {
                address: return_pc,
                access: Access::Write,
            })?;
        self.push(return_address)?;
        self.pc = self.registers.read(reg)? as usize;
        Ok(())
    }

    fn exec_ret(&mut self) -> Result<(), RuntimeError> {
        self.pc = self.pop()? as usize;
        Ok(())
    }
}
