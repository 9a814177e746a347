//! # Control Flow Instructions
//!
//! - RTS: Return. There is no stack yet, so RTS is the terminal instruction and
//!   halts the engine.

use crate::{MemoryBus, Opcode, RunState, CPU};

/// Executes the RTS instruction.
///
/// Advances the PC past the opcode and halts. No flags are affected.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>, opcode: Opcode) {
    cpu.advance(opcode);
    cpu.state = RunState::Halted;
}
