//! Arithmetic and comparison unit.
//!
//! The ALU works on register indices, not opcodes: the engine picks the
//! [`AluOp`] for ADD, MUL and CMP explicitly.

use crate::error::RuntimeError;
use crate::flags::Flags;
use crate::memory::Registers;

/// Operations the ALU can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    /// `R[a] = R[a] + R[b]`, wrapping.
    Add,
    /// `R0 = R[a] * R[b]`, wrapping. The destination is always R0.
    Multiply,
    /// Set flags from the unsigned comparison of `R[a]` and `R[b]`.
    Compare,
}

/// Apply `op` to registers `a` and `b`.
///
/// Both registers are read before anything is written, so an out-of-range
/// index leaves registers and flags untouched.
pub fn alu(
    op: AluOp,
    registers: &mut Registers,
    flags: &mut Flags,
    a: usize,
    b: usize,
) -> Result<(), RuntimeError> {
    let lhs = registers.read(a)?;
    let rhs = registers.read(b)?;

    match op {
        AluOp::Add => registers.write(a, lhs.wrapping_add(rhs)),
        AluOp::Multiply => registers.write(0, lhs.wrapping_mul(rhs)),
        AluOp::Compare => {
            *flags = Flags::from_ordering(lhs.cmp(&rhs));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Access;

    fn regs(values: &[(usize, u8)]) -> Registers {
        let mut registers = Registers::new();
        for &(i, v) in values {
            registers.write(i, v).unwrap();
        }
        registers
    }

    #[test]
    fn add_writes_back_to_a() {
        let mut r = regs(&[(2, 10), (3, 5)]);
        let mut flags = Flags::default();
        alu(AluOp::Add, &mut r, &mut flags, 2, 3).unwrap();
        assert_eq!(r.read(2), Ok(15));
        assert_eq!(r.read(3), Ok(5));
        assert_eq!(flags, Flags::default());
    }

    #[test]
    fn add_wraps() {
        let mut r = regs(&[(0, 200), (1, 100)]);
        alu(AluOp::Add, &mut r, &mut Flags::default(), 0, 1).unwrap();
        assert_eq!(r.read(0), Ok(44));
    }

    #[test]
    fn multiply_always_targets_r0() {
        let mut r = regs(&[(0, 1), (2, 6), (3, 7)]);
        alu(AluOp::Multiply, &mut r, &mut Flags::default(), 2, 3).unwrap();
        assert_eq!(r.read(0), Ok(42));
        assert_eq!(r.read(2), Ok(6));
    }

    #[test]
    fn multiply_wraps() {
        let mut r = regs(&[(1, 16), (2, 17)]);
        alu(AluOp::Multiply, &mut r, &mut Flags::default(), 1, 2).unwrap();
        assert_eq!(r.read(0), Ok(16));
    }

    #[test]
    fn compare_sets_exactly_one_flag() {
        let mut flags = Flags::default();

        let mut r = regs(&[(0, 3), (1, 7)]);
        alu(AluOp::Compare, &mut r, &mut flags, 0, 1).unwrap();
        assert_eq!(flags.bits(), Flags::LESS);

        alu(AluOp::Compare, &mut r, &mut flags, 1, 0).unwrap();
        assert_eq!(flags.bits(), Flags::GREATER);

        alu(AluOp::Compare, &mut r, &mut flags, 1, 1).unwrap();
        assert_eq!(flags.bits(), Flags::EQUAL);
    }

    #[test]
    fn compare_is_unsigned() {
        let mut r = regs(&[(0, 0x80), (1, 0x01)]);
        let mut flags = Flags::default();
        alu(AluOp::Compare, &mut r, &mut flags, 0, 1).unwrap();
        assert!(flags.greater());
    }

    #[test]
    fn bad_register_leaves_state_untouched() {
        let mut r = regs(&[(0, 1)]);
        let before = r.clone();
        let mut flags = Flags::default();
        assert_eq!(
            alu(AluOp::Add, &mut r, &mut flags, 0, 8),
            Err(RuntimeError::RegisterOutOfRange {
                index: 8,
                access: Access::Read
            })
        );
        assert_eq!(r, before);
        assert_eq!(flags, Flags::default());
    }
}
