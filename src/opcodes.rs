//! # Instruction Set
//!
//! The sixteen implemented opcodes as a closed sum type. This is the single
//! source of truth shared by the engine, the assembler and the disassembler:
//! adding an opcode means adding a variant, and every exhaustive `match` over
//! `Opcode` then refuses to compile until it is handled.
//!
//! Each opcode carries:
//! - Mnemonic (assembler spelling, e.g. `LDXIM`)
//! - Addressing mode
//! - Instruction size in bytes
//! - The status flags it may change
//!
//! Bytes that are not in the table decode to `None`; the engine treats them as
//! one-byte no-ops and the disassembler prints them as `???`.

use crate::{AddressingMode, StatusFlags};

/// Placeholder mnemonic for bytes outside the instruction set.
pub const UNKNOWN_MNEMONIC: &str = "???";

/// An implemented instruction, discriminant = opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Load X from memory
    Ldx = 0xAE,
    /// Load X immediate
    LdxIm = 0xA2,
    /// Store X to memory
    Stx = 0x8E,
    /// Load Y from memory
    Ldy = 0xAC,
    /// Load Y immediate
    LdyIm = 0xA0,
    /// Store Y to memory
    Sty = 0x8C,
    /// Load accumulator immediate
    LdaIm = 0xA9,
    /// Add memory to accumulator with carry
    Adc = 0x6D,
    /// Store accumulator to memory
    Sta = 0x8D,
    /// Clear decimal flag
    Cld = 0xD8,
    /// Clear carry flag
    Clc = 0x18,
    /// Return; halts the engine
    Rts = 0x60,
    /// Transfer A to X
    Tax = 0xAA,
    /// Transfer X to A
    Txa = 0x8A,
    /// Transfer A to Y
    Tay = 0xA8,
    /// Transfer Y to A
    Tya = 0x98,
}

/// Static information about one opcode.
///
/// # Examples
///
/// ```
/// use pico6502::{AddressingMode, Opcode};
///
/// let meta = Opcode::Adc.metadata();
/// assert_eq!(meta.mnemonic, "ADC");
/// assert_eq!(meta.addressing_mode, AddressingMode::Absolute);
/// assert_eq!(meta.size_bytes, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Assembler spelling of the instruction.
    pub mnemonic: &'static str,

    /// How the instruction interprets its operand bytes.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,

    /// Status flags the instruction may modify; all others are preserved.
    pub flags_affected: StatusFlags,
}

const NZ: StatusFlags = StatusFlags::NEGATIVE.union(StatusFlags::ZERO);
const NVZC: StatusFlags = NZ.union(StatusFlags::OVERFLOW).union(StatusFlags::CARRY);

impl Opcode {
    /// Every implemented opcode, in table order.
    pub const ALL: [Opcode; 16] = [
        Opcode::Ldx,
        Opcode::LdxIm,
        Opcode::Stx,
        Opcode::Ldy,
        Opcode::LdyIm,
        Opcode::Sty,
        Opcode::LdaIm,
        Opcode::Adc,
        Opcode::Sta,
        Opcode::Cld,
        Opcode::Clc,
        Opcode::Rts,
        Opcode::Tax,
        Opcode::Txa,
        Opcode::Tay,
        Opcode::Tya,
    ];

    /// The opcode byte.
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Static metadata for this opcode.
    pub const fn metadata(self) -> OpcodeMetadata {
        use AddressingMode::*;
        let (mnemonic, addressing_mode, flags_affected) = match self {
            Opcode::Ldx => ("LDX", Absolute, NZ),
            Opcode::LdxIm => ("LDXIM", Immediate, NZ),
            Opcode::Stx => ("STX", Absolute, StatusFlags::empty()),
            Opcode::Ldy => ("LDY", Absolute, NZ),
            Opcode::LdyIm => ("LDYIM", Immediate, NZ),
            Opcode::Sty => ("STY", Absolute, StatusFlags::empty()),
            Opcode::LdaIm => ("LDAIM", Immediate, NZ),
            Opcode::Adc => ("ADC", Absolute, NVZC),
            Opcode::Sta => ("STA", Absolute, StatusFlags::empty()),
            Opcode::Cld => ("CLD", Implicit, StatusFlags::DECIMAL),
            Opcode::Clc => ("CLC", Implicit, StatusFlags::CARRY),
            Opcode::Rts => ("RTS", Implicit, StatusFlags::empty()),
            Opcode::Tax => ("TAX", Implicit, NZ),
            Opcode::Txa => ("TXA", Implicit, NZ),
            Opcode::Tay => ("TAY", Implicit, NZ),
            Opcode::Tya => ("TYA", Implicit, NZ),
        };

        OpcodeMetadata {
            mnemonic,
            addressing_mode,
            size_bytes: 1 + addressing_mode.operand_bytes(),
            flags_affected,
        }
    }

    /// Assembler spelling of the instruction.
    pub const fn mnemonic(self) -> &'static str {
        self.metadata().mnemonic
    }

    /// Operand shape of the instruction.
    pub const fn addressing_mode(self) -> AddressingMode {
        self.metadata().addressing_mode
    }

    /// Total size in bytes.
    pub const fn size_bytes(self) -> u8 {
        self.metadata().size_bytes
    }

    /// Looks up an opcode by its exact (case-sensitive) mnemonic.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Opcode> {
        Opcode::ALL.into_iter().find(|op| op.mnemonic() == mnemonic)
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        decode(byte).ok_or(byte)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Decodes an opcode byte.
///
/// Returns `None` for bytes outside the instruction set.
///
/// # Examples
///
/// ```
/// use pico6502::{decode, Opcode};
///
/// assert_eq!(decode(0x60), Some(Opcode::Rts));
/// assert_eq!(decode(0xEA), None);
/// ```
pub const fn decode(byte: u8) -> Option<Opcode> {
    let op = match byte {
        0xAE => Opcode::Ldx,
        0xA2 => Opcode::LdxIm,
        0x8E => Opcode::Stx,
        0xAC => Opcode::Ldy,
        0xA0 => Opcode::LdyIm,
        0x8C => Opcode::Sty,
        0xA9 => Opcode::LdaIm,
        0x6D => Opcode::Adc,
        0x8D => Opcode::Sta,
        0xD8 => Opcode::Cld,
        0x18 => Opcode::Clc,
        0x60 => Opcode::Rts,
        0xAA => Opcode::Tax,
        0x8A => Opcode::Txa,
        0xA8 => Opcode::Tay,
        0x98 => Opcode::Tya,
        _ => return None,
    };
    Some(op)
}
