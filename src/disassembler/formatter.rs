//! Formatting functions for disassembled instructions
//!
//! Operands print in decimal, the same notation the assembler reads, so a
//! formatted instruction is valid assembler source.

use crate::disassembler::Instruction;

/// Format a single instruction as assembly text, e.g. `ADC 900` or `TAX`.
pub fn format_instruction(instr: &Instruction) -> String {
    match instr.operand {
        Some(operand) => format!("{} {}", instr.mnemonic(), operand),
        None => instr.mnemonic().to_string(),
    }
}

/// Format an instruction as a memory listing line, e.g. `RAM 828: LDXIM 1`.
pub fn format_line(instr: &Instruction) -> String {
    format!("RAM {}: {}", instr.address, format_instruction(instr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Opcode;

    #[test]
    fn test_format_immediate() {
        let instr = Instruction {
            address: 828,
            byte: 0xA2,
            opcode: Some(Opcode::LdxIm),
            operand: Some(1),
            size_bytes: 2,
        };

        assert_eq!(format_instruction(&instr), "LDXIM 1");
        assert_eq!(format_line(&instr), "RAM 828: LDXIM 1");
    }

    #[test]
    fn test_format_absolute() {
        let instr = Instruction {
            address: 830,
            byte: 0x8E,
            opcode: Some(Opcode::Stx),
            operand: Some(900),
            size_bytes: 3,
        };

        assert_eq!(format_instruction(&instr), "STX 900");
    }

    #[test]
    fn test_format_implied() {
        let instr = Instruction {
            address: 841,
            byte: 0x60,
            opcode: Some(Opcode::Rts),
            operand: None,
            size_bytes: 1,
        };

        assert_eq!(format_instruction(&instr), "RTS");
    }

    #[test]
    fn test_format_unknown() {
        let instr = Instruction {
            address: 0x2000,
            byte: 0xFF,
            opcode: None,
            operand: None,
            size_bytes: 1,
        };

        assert_eq!(format_line(&instr), "RAM 8192: ???");
    }
}
