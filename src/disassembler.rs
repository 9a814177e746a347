//! Disassembler Module
//!
//! Walks memory forward from a start address exactly as the engine would and
//! renders each instruction back into assembler mnemonics. Read-only: it never
//! touches CPU or memory state.
//!
//! The walk stops after an `RTS` or once the next instruction would start
//! outside the scan window (`DisassemblyOptions::max_scan_bytes`, 100 by default).

pub mod decoder;
pub mod formatter;

use crate::{AddressingMode, MemoryBus, Opcode};

/// A single disassembled instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The raw opcode byte
    pub byte: u8,

    /// Decoded opcode, `None` for bytes outside the instruction set
    pub opcode: Option<Opcode>,

    /// Operand value: the immediate byte or the absolute address
    pub operand: Option<u16>,

    /// Total size in bytes (1 for unknown bytes)
    pub size_bytes: u8,
}

impl Instruction {
    /// Instruction mnemonic, `???` for unknown bytes.
    pub fn mnemonic(&self) -> &'static str {
        match self.opcode {
            Some(op) => op.mnemonic(),
            None => crate::opcodes::UNKNOWN_MNEMONIC,
        }
    }

    /// Addressing mode; unknown bytes are treated as implicit.
    pub fn addressing_mode(&self) -> AddressingMode {
        self.opcode
            .map(Opcode::addressing_mode)
            .unwrap_or(AddressingMode::Implicit)
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&formatter::format_instruction(self))
    }
}

/// Options controlling disassembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisassemblyOptions {
    /// Size of the scan window in bytes, measured from the start address
    pub max_scan_bytes: u16,
}

impl Default for DisassemblyOptions {
    fn default() -> Self {
        Self {
            max_scan_bytes: 100,
        }
    }
}

/// Lazy, finite sequence of decoded instructions.
///
/// Clones share the underlying memory and continue from the same position;
/// `restart` rewinds to the start address.
pub struct Disassembly<'a, M: MemoryBus + ?Sized> {
    memory: &'a M,
    start: u16,
    options: DisassemblyOptions,
    offset: u32,
    done: bool,
}

impl<'a, M: MemoryBus + ?Sized> Clone for Disassembly<'a, M> {
    fn clone(&self) -> Self {
        Self {
            memory: self.memory,
            start: self.start,
            options: self.options,
            offset: self.offset,
            done: self.done,
        }
    }
}

impl<'a, M: MemoryBus + ?Sized> std::fmt::Debug for Disassembly<'a, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disassembly")
            .field("start", &self.start)
            .field("options", &self.options)
            .field("offset", &self.offset)
            .field("done", &self.done)
            .finish()
    }
}

impl<'a, M: MemoryBus + ?Sized> Disassembly<'a, M> {
    /// Rewinds to the start address.
    pub fn restart(&mut self) {
        self.offset = 0;
        self.done = false;
    }

    /// The address this walk began at.
    pub fn start_address(&self) -> u16 {
        self.start
    }
}

impl<'a, M: MemoryBus + ?Sized> Iterator for Disassembly<'a, M> {
    type Item = Instruction;

    fn next(&mut self) -> Option<Instruction> {
        if self.done || self.offset >= self.options.max_scan_bytes as u32 {
            return None;
        }

        let address = self.start.wrapping_add(self.offset as u16);
        let instr = decoder::decode_instruction(self.memory, address);

        self.offset += instr.size_bytes as u32;
        if instr.opcode == Some(Opcode::Rts) {
            self.done = true;
        }

        Some(instr)
    }
}

/// Disassemble memory starting at `start`.
///
/// # Examples
///
/// ```
/// use pico6502::{disassemble, DisassemblyOptions, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory.load(828, &[0xA2, 0x01, 0x60]);
///
/// let lines: Vec<String> = disassemble(&memory, 828, DisassemblyOptions::default())
///     .map(|instr| instr.to_string())
///     .collect();
/// assert_eq!(lines, ["LDXIM 1", "RTS"]);
/// ```
pub fn disassemble<M: MemoryBus + ?Sized>(
    memory: &M,
    start: u16,
    options: DisassemblyOptions,
) -> Disassembly<'_, M> {
    Disassembly {
        memory,
        start,
        options,
        offset: 0,
        done: false,
    }
}
