//! # Instruction Implementations
//!
//! The implementations of all instructions, organized by category. Each
//! instruction is a standalone function that takes a mutable reference to the
//! CPU and the decoded opcode, applies its effect, updates exactly the flags the
//! opcode documents and advances the PC.
//!
//! ## Categories
//!
//! - **load_store**: LDX, LDXIM, LDY, LDYIM, LDAIM, STX, STY, STA
//! - **alu**: ADC
//! - **transfer**: TAX, TXA, TAY, TYA
//! - **flags**: CLC, CLD
//! - **control**: RTS

pub mod alu;
pub mod control;
pub mod flags;
pub mod load_store;
pub mod transfer;
