//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! - ADC: Add with Carry (absolute)

use crate::{MemoryBus, Opcode, StatusFlags, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the byte at the absolute operand address plus the incoming carry to
/// the accumulator, keeping the low 8 bits.
///
/// # Flag Behavior
///
/// - Carry (C): Set if the 9-bit sum exceeds 255
/// - Zero (Z): Set if the 8-bit result is 0
/// - Negative (N): Set if bit 7 of the result is set
/// - Overflow (V): Set if both operands share a sign bit and the result does not
/// - Other flags: Not affected
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: Opcode) {
    let value = cpu.operand_value(opcode.addressing_mode());

    let a = cpu.regs.a;
    let sum = a as u16 + value as u16 + cpu.regs.p.carry_in() as u16;
    let result = sum as u8;

    cpu.regs.p.set(StatusFlags::CARRY, sum > 0xFF);
    cpu.regs.p.update_nz(result);

    // Both inputs agree in sign and the result disagrees with them
    let overflow = ((a ^ result) & (value ^ result) & 0x80) != 0;
    cpu.regs.p.set(StatusFlags::OVERFLOW, overflow);

    cpu.regs.a = result;
    cpu.advance(opcode);
}
