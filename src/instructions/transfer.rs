//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//!
//! All four copy one register into another and update Z and N from the copied
//! value.

use crate::{MemoryBus, Opcode, CPU};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>, opcode: Opcode) {
    cpu.regs.x = cpu.regs.a;
    cpu.regs.p.update_nz(cpu.regs.x);
    cpu.advance(opcode);
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>, opcode: Opcode) {
    cpu.regs.y = cpu.regs.a;
    cpu.regs.p.update_nz(cpu.regs.y);
    cpu.advance(opcode);
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>, opcode: Opcode) {
    cpu.regs.a = cpu.regs.x;
    cpu.regs.p.update_nz(cpu.regs.a);
    cpu.advance(opcode);
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>, opcode: Opcode) {
    cpu.regs.a = cpu.regs.y;
    cpu.regs.p.update_nz(cpu.regs.a);
    cpu.advance(opcode);
}
