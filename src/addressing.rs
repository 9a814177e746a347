//! # Addressing Modes
//!
//! The three operand shapes the instruction set uses. Each mode determines how
//! many operand bytes follow the opcode and how the CPU interprets them.

/// Operand shape of an instruction.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit
/// - **1 byte**: Immediate
/// - **2 bytes**: Absolute (little-endian)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, TAX
    Implicit,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDAIM 2 (load the value 2 into the accumulator)
    Immediate,

    /// Full 16-bit address whose memory contents are the operand.
    ///
    /// Example: STA 901 (store the accumulator at address 901)
    Absolute,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit => 0,
            AddressingMode::Immediate => 1,
            AddressingMode::Absolute => 2,
        }
    }

    /// Largest operand value the assembler accepts for this mode.
    pub const fn max_operand(self) -> u32 {
        match self {
            AddressingMode::Implicit => 0,
            AddressingMode::Immediate => u8::MAX as u32,
            AddressingMode::Absolute => u16::MAX as u32,
        }
    }
}
