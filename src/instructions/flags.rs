//! # Status Flag Manipulation Instructions
//!
//! - CLC: Clear Carry Flag
//! - CLD: Clear Decimal Mode
//!
//! Both use implied addressing and are one byte long.

use crate::{MemoryBus, Opcode, StatusFlags, CPU};

/// Executes the CLC (Clear Carry Flag) instruction.
///
/// Opcode: 0x18
///
/// Flags affected:
/// - C: Set to 0
/// - All other flags: Unchanged
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: Opcode) {
    cpu.regs.p.remove(StatusFlags::CARRY);
    cpu.advance(opcode);
}

/// Executes the CLD (Clear Decimal Mode) instruction.
///
/// Opcode: 0xD8
///
/// Flags affected:
/// - D: Set to 0
/// - All other flags: Unchanged
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>, opcode: Opcode) {
    cpu.regs.p.remove(StatusFlags::DECIMAL);
    cpu.advance(opcode);
}
