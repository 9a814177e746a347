//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDX / LDXIM: Load X Register (absolute / immediate)
//! - LDY / LDYIM: Load Y Register (absolute / immediate)
//! - LDAIM: Load Accumulator (immediate)
//! - STA, STX, STY: Store register (absolute)
//!
//! Loads update N and Z from the loaded value. Stores touch no flags.

use crate::{MemoryBus, Opcode, CPU};

/// Executes LDAIM (Load Accumulator, immediate).
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, opcode: Opcode) {
    let value = cpu.operand_value(opcode.addressing_mode());
    cpu.regs.a = value;
    cpu.regs.p.update_nz(value);
    cpu.advance(opcode);
}

/// Executes LDX or LDXIM (Load X Register).
///
/// # Flag Behavior
///
/// - Zero (Z): Set if X = 0
/// - Negative (N): Set if bit 7 of X is set
/// - Other flags: Not affected
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: Opcode) {
    let value = cpu.operand_value(opcode.addressing_mode());
    cpu.regs.x = value;
    cpu.regs.p.update_nz(value);
    cpu.advance(opcode);
}

/// Executes LDY or LDYIM (Load Y Register).
///
/// Same flag behavior as `execute_ldx`, applied to Y.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, opcode: Opcode) {
    let value = cpu.operand_value(opcode.addressing_mode());
    cpu.regs.y = value;
    cpu.regs.p.update_nz(value);
    cpu.advance(opcode);
}

/// Executes STA (Store Accumulator).
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, opcode: Opcode) {
    let addr = cpu.operand_address();
    cpu.memory.write(addr, cpu.regs.a);
    cpu.advance(opcode);
}

/// Executes STX (Store X Register).
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: Opcode) {
    let addr = cpu.operand_address();
    cpu.memory.write(addr, cpu.regs.x);
    cpu.advance(opcode);
}

/// Executes STY (Store Y Register).
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, opcode: Opcode) {
    let addr = cpu.operand_address();
    cpu.memory.write(addr, cpu.regs.y);
    cpu.advance(opcode);
}
