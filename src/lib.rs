//! # pico6502
//!
//! A tiny 8-bit CPU emulator modeled on the MOS 6502. It implements sixteen
//! instructions (loads, stores, register transfers, `ADC`, `CLC`, `CLD` and `RTS`)
//! with absolute and immediate addressing, together with a line-oriented
//! assembler and a disassembler that share the same opcode table.
//!
//! ## Quick Start
//!
//! ```rust
//! use pico6502::{assemble_source, FlatMemory, MemoryBus, CPU};
//!
//! let source = "828\nLDXIM 1\nSTX 900\nLDAIM 2\nADC 900\nSTA 901\nRTS\nEND\n";
//!
//! let mut memory = FlatMemory::new();
//! let output = assemble_source(source, &mut memory).unwrap();
//!
//! let mut cpu = CPU::new(memory, output.start_address);
//! let executed = cpu.run();
//!
//! assert_eq!(executed, 6);
//! assert_eq!(cpu.a(), 3);
//! assert_eq!(cpu.memory().read(901), 3);
//! ```
//!
//! ## Modules
//!
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `registers` / `status` - the register file and packed status byte
//! - `opcodes` - the instruction set as a closed sum type
//! - `cpu` - the fetch-decode-execute engine
//! - `assembler` / `disassembler` - text to bytes and back
//! - `host` - the entry points used by the command line host

pub mod addressing;
pub mod assembler;
pub mod cpu;
pub mod disassembler;
pub mod host;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod status;

#[cfg(feature = "wasm")]
pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use assembler::{
    assemble_file, assemble_source, AssemblerError, AssemblerOutput, AssemblerWarning,
};
pub use cpu::{RunState, CPU};
pub use disassembler::{disassemble, Disassembly, DisassemblyOptions, Instruction};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{decode, Opcode, OpcodeMetadata};
pub use registers::Registers;
pub use status::StatusFlags;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The bounded runner executed `limit` instructions without reaching `RTS`.
    #[error("no RTS after {limit} instructions (pc = {pc})")]
    InstructionLimitExceeded { limit: u64, pc: u16 },
}
