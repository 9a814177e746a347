//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU, the assembler
//! and the disassembler from a specific memory implementation, plus the flat 64KB
//! RAM the emulator uses by default.
//!
//! ## Design Principles
//!
//! - Every 16-bit address is valid; there are no read-only regions
//! - Reads and writes never fail and never panic
//! - Bounds are closed by the `u16` address type, not by runtime checks

/// Memory bus trait for reading and writing bytes.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads (the disassembler
///   only ever needs this)
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: a 16-bit address always names a byte
///
/// # Examples
///
/// ```
/// use pico6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(900, 0x42);
/// assert_eq!(mem.read(900), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian 16-bit word, wrapping at the top of the address space.
    fn read_word(&self, addr: u16) -> u16 {
        let low = self.read(addr);
        let high = self.read(addr.wrapping_add(1));
        u16::from_le_bytes([low, high])
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) are mapped to a single contiguous RAM
/// array initialized to 0x00.
///
/// # Examples
///
/// ```
/// use pico6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(828, 0x60); // RTS
///
/// let mut cpu = CPU::new(memory, 828);
/// assert_eq!(cpu.run(), 1);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Zero-fills the whole address space.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Copies `bytes` into memory starting at `start`, wrapping past 0xFFFF.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.write(addr, byte);
            addr = addr.wrapping_add(1);
        }
    }

    /// Returns the raw memory contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.data.iter().filter(|&&b| b != 0).count();
        f.debug_struct("FlatMemory")
            .field("size", &self.data.len())
            .field("non_zero_bytes", &used)
            .finish()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
