//! Instruction decoder for the disassembler

use crate::disassembler::Instruction;
use crate::opcodes::decode;
use crate::{AddressingMode, MemoryBus};

/// Decode a single instruction at `address`.
///
/// Operand bytes are read with wrapping addresses, so decoding never fails;
/// bytes outside the instruction set come back as one-byte instructions with
/// `opcode: None`.
pub fn decode_instruction<M: MemoryBus + ?Sized>(memory: &M, address: u16) -> Instruction {
    let byte = memory.read(address);
    let opcode = decode(byte);

    let operand = opcode.and_then(|op| match op.addressing_mode() {
        AddressingMode::Implicit => None,
        AddressingMode::Immediate => Some(memory.read(address.wrapping_add(1)) as u16),
        AddressingMode::Absolute => Some(memory.read_word(address.wrapping_add(1))),
    });

    Instruction {
        address,
        byte,
        opcode,
        operand,
        size_bytes: opcode.map_or(1, |op| op.size_bytes()),
    }
}
