//! Instruction encoder for the assembler

use crate::{AddressingMode, Opcode};

/// Encode an instruction into bytes.
///
/// Immediate operands become one byte; absolute operands become the low byte
/// (`value % 256`) followed by the high byte (`value / 256`). The operand is
/// ignored for implicit instructions.
pub fn encode_instruction(opcode: Opcode, operand: Option<u16>) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(opcode.size_bytes() as usize);
    bytes.push(opcode.byte());

    let value = operand.unwrap_or(0);
    match opcode.addressing_mode() {
        AddressingMode::Implicit => {}
        AddressingMode::Immediate => bytes.push(value as u8),
        AddressingMode::Absolute => bytes.extend_from_slice(&value.to_le_bytes()),
    }

    bytes
}
