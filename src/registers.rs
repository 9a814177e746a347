//! # Register File
//!
//! Plain data: the accumulator, two index registers, program counter, stack
//! pointer and status byte. Behavior lives in the engine (`cpu`).

use crate::StatusFlags;

/// The CPU register file.
///
/// Power-on state is all zero; the host sets `pc` to the program's load address
/// before execution starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Registers {
    /// Accumulator register
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Program counter (address of next opcode to fetch)
    pub pc: u16,

    /// Stack pointer. Reserved: no implemented instruction uses the stack.
    pub s: u8,

    /// Processor status register
    pub p: StatusFlags,
}

impl Registers {
    /// Creates a zeroed register file with `pc` at `start`.
    pub fn at(start: u16) -> Self {
        Self {
            pc: start,
            ..Self::default()
        }
    }
}
