//! # CPU State and Execution
//!
//! This module contains the CPU struct and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: the `Registers` file (A, X, Y, PC, S, P)
//! - **Run state**: `Running` until an `RTS` executes, then `Halted`
//! - **Instruction counter**: u64 count of executed instructions
//!
//! ## Execution Model
//!
//! - `step()`: Execute one instruction
//! - `run()`: Execute until `RTS`. A program without `RTS` never returns: the
//!   PC keeps advancing through memory, executing unknown bytes as one-byte
//!   no-ops and wrapping around the 16-bit address space
//! - `run_with_limit()`: Same as `run()` but gives up after a fixed number of
//!   instructions
//!
//! Execution is strictly sequential and synchronous.

use crate::instructions::{alu, control, flags, load_store, transfer};
use crate::opcodes::decode;
use crate::{AddressingMode, ExecutionError, MemoryBus, Opcode, Registers, StatusFlags};

/// Engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Fetching and executing instructions.
    Running,
    /// An `RTS` has executed.
    Halted,
}

/// CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait. The CPU
/// owns its memory; use `memory()`/`memory_mut()` to inspect or patch it.
///
/// # Examples
///
/// ```
/// use pico6502::{CPU, FlatMemory, MemoryBus, RunState};
///
/// let mut memory = FlatMemory::new();
/// memory.write(828, 0xA9); // LDAIM 2
/// memory.write(829, 0x02);
/// memory.write(830, 0x60); // RTS
///
/// let mut cpu = CPU::new(memory, 828);
/// assert_eq!(cpu.run(), 2);
/// assert_eq!(cpu.a(), 2);
/// assert_eq!(cpu.state(), RunState::Halted);
/// ```
pub struct CPU<M: MemoryBus> {
    pub(crate) regs: Registers,

    /// Total instructions executed (including unknown-byte no-ops and RTS)
    pub(crate) instructions: u64,

    pub(crate) state: RunState,

    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU with zeroed registers and the PC at `start`.
    pub fn new(memory: M, start: u16) -> Self {
        Self::with_registers(memory, Registers::at(start))
    }

    /// Creates a CPU from an explicit register file.
    pub fn with_registers(memory: M, regs: Registers) -> Self {
        Self {
            regs,
            instructions: 0,
            state: RunState::Running,
            memory,
        }
    }

    /// Zeroes the registers, points the PC at `start` and resumes running.
    ///
    /// Memory is left untouched.
    pub fn reset(&mut self, start: u16) {
        self.regs = Registers::at(start);
        self.instructions = 0;
        self.state = RunState::Running;
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at current PC
    /// 2. Decode it into an `Opcode`
    /// 3. Execute it (reads its operand bytes, updates registers, memory and flags,
    ///    advances the PC by the instruction size)
    /// 4. Bytes outside the instruction set advance the PC by one and change nothing else
    ///
    /// Stepping a halted CPU does nothing.
    ///
    /// # Returns
    ///
    /// The run state after the instruction.
    pub fn step(&mut self) -> RunState {
        if self.state == RunState::Halted {
            return self.state;
        }

        let pc = self.regs.pc;
        let byte = self.memory.read(pc);

        match decode(byte) {
            Some(opcode) => {
                log::trace!("{:5}: {}", pc, opcode);
                self.execute(opcode);
            }
            None => {
                log::trace!("{:5}: unknown opcode 0x{:02X}, skipping", pc, byte);
                self.regs.pc = pc.wrapping_add(1);
            }
        }

        self.instructions += 1;
        self.state
    }

    fn execute(&mut self, opcode: Opcode) {
        match opcode {
            Opcode::Ldx | Opcode::LdxIm => load_store::execute_ldx(self, opcode),
            Opcode::Ldy | Opcode::LdyIm => load_store::execute_ldy(self, opcode),
            Opcode::LdaIm => load_store::execute_lda(self, opcode),
            Opcode::Stx => load_store::execute_stx(self, opcode),
            Opcode::Sty => load_store::execute_sty(self, opcode),
            Opcode::Sta => load_store::execute_sta(self, opcode),
            Opcode::Adc => alu::execute_adc(self, opcode),
            Opcode::Cld => flags::execute_cld(self, opcode),
            Opcode::Clc => flags::execute_clc(self, opcode),
            Opcode::Rts => control::execute_rts(self, opcode),
            Opcode::Tax => transfer::execute_tax(self, opcode),
            Opcode::Txa => transfer::execute_txa(self, opcode),
            Opcode::Tay => transfer::execute_tay(self, opcode),
            Opcode::Tya => transfer::execute_tya(self, opcode),
        }
    }

    /// Runs until an `RTS` executes.
    ///
    /// Returns the number of instructions executed by this call, including the
    /// `RTS` itself.
    ///
    /// This never returns if the program has no reachable `RTS`. Use
    /// `run_with_limit()` when the input is untrusted.
    pub fn run(&mut self) -> u64 {
        let start = self.instructions;
        while self.step() == RunState::Running {}
        log::debug!(
            "halted at pc={} after {} instructions",
            self.regs.pc,
            self.instructions - start
        );
        self.instructions - start
    }

    /// Runs until an `RTS` executes or `limit` instructions have executed.
    ///
    /// # Returns
    ///
    /// - `Ok(count)` if the CPU halted, `count` including the `RTS`
    /// - `Err(ExecutionError::InstructionLimitExceeded)` otherwise; the CPU is
    ///   left mid-program and can be resumed
    pub fn run_with_limit(&mut self, limit: u64) -> Result<u64, ExecutionError> {
        let start = self.instructions;
        while self.state == RunState::Running {
            if self.instructions - start >= limit {
                return Err(ExecutionError::InstructionLimitExceeded {
                    limit,
                    pc: self.regs.pc,
                });
            }
            self.step();
        }
        Ok(self.instructions - start)
    }

    // ========== Operand Fetch ==========

    /// Reads the 16-bit absolute address following the opcode.
    pub(crate) fn operand_address(&self) -> u16 {
        self.memory.read_word(self.regs.pc.wrapping_add(1))
    }

    /// Resolves the operand value for the given addressing mode.
    ///
    /// Immediate reads the byte after the opcode; absolute reads memory at the
    /// address after the opcode. Implicit instructions have no operand.
    pub(crate) fn operand_value(&self, mode: AddressingMode) -> u8 {
        match mode {
            AddressingMode::Implicit => 0,
            AddressingMode::Immediate => self.memory.read(self.regs.pc.wrapping_add(1)),
            AddressingMode::Absolute => self.memory.read(self.operand_address()),
        }
    }

    /// Moves the PC past the instruction.
    pub(crate) fn advance(&mut self, opcode: Opcode) {
        self.regs.pc = self.regs.pc.wrapping_add(opcode.size_bytes() as u16);
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    pub fn sp(&self) -> u8 {
        self.regs.s
    }

    /// Returns the packed status register.
    pub fn status(&self) -> StatusFlags {
        self.regs.p
    }

    /// Returns a copy of the whole register file.
    pub fn registers(&self) -> Registers {
        self.regs
    }

    /// Returns the total number of instructions executed since creation or reset.
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    /// Returns the current run state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Returns true once an `RTS` has executed.
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.regs.p.contains(StatusFlags::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.regs.p.contains(StatusFlags::OVERFLOW)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.regs.p.contains(StatusFlags::DECIMAL)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.regs.p.contains(StatusFlags::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.regs.p.contains(StatusFlags::CARRY)
    }

    // ========== Setters (testing and host patching) ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    /// Sets the X register.
    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    /// Sets the Y register.
    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    /// Replaces the whole status byte.
    pub fn set_status(&mut self, value: StatusFlags) {
        self.regs.p = value;
    }

    /// Sets or clears the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.regs.p.set(StatusFlags::CARRY, value);
    }

    /// Sets or clears the Decimal flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.regs.p.set(StatusFlags::DECIMAL, value);
    }
}

impl<M: MemoryBus> std::fmt::Debug for CPU<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CPU")
            .field("regs", &self.regs)
            .field("instructions", &self.instructions)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    #[test]
    fn test_cpu_initialization() {
        let cpu = CPU::new(FlatMemory::new(), 828);

        assert_eq!(cpu.pc(), 828);
        assert_eq!(cpu.sp(), 0);
        assert_eq!(cpu.a(), 0);
        assert_eq!(cpu.x(), 0);
        assert_eq!(cpu.y(), 0);
        assert!(cpu.status().is_empty());
        assert_eq!(cpu.instructions(), 0);
        assert_eq!(cpu.state(), RunState::Running);
    }

    #[test]
    fn test_setters() {
        let mut cpu = CPU::new(FlatMemory::new(), 0);
        cpu.set_a(1);
        cpu.set_x(2);
        cpu.set_y(3);
        cpu.set_pc(828);
        cpu.set_status(StatusFlags::ZERO);
        cpu.set_flag_c(true);
        cpu.set_flag_d(true);

        let regs = cpu.registers();
        assert_eq!((regs.a, regs.x, regs.y, regs.pc), (1, 2, 3, 828));
        assert_eq!(
            regs.p,
            StatusFlags::ZERO | StatusFlags::CARRY | StatusFlags::DECIMAL
        );

        cpu.set_flag_d(false);
        assert!(!cpu.flag_d());
        assert!(cpu.flag_c());
    }

    #[test]
    fn test_step_unknown_opcode_is_noop() {
        let mut mem = FlatMemory::new();
        mem.write(0x8000, 0xEA);

        let mut cpu = CPU::new(mem, 0x8000);
        let before = cpu.registers();

        assert_eq!(cpu.step(), RunState::Running);
        assert_eq!(cpu.pc(), 0x8001);
        assert_eq!(cpu.instructions(), 1);

        let after = cpu.registers();
        assert_eq!(after.a, before.a);
        assert_eq!(after.p, before.p);
    }

    #[test]
    fn test_step_after_halt_does_nothing() {
        let mut mem = FlatMemory::new();
        mem.write(0x0200, 0x60);

        let mut cpu = CPU::new(mem, 0x0200);
        assert_eq!(cpu.step(), RunState::Halted);
        assert_eq!(cpu.pc(), 0x0201);

        assert_eq!(cpu.step(), RunState::Halted);
        assert_eq!(cpu.pc(), 0x0201);
        assert_eq!(cpu.instructions(), 1);
    }

    #[test]
    fn test_run_with_limit_stops() {
        // All-zero memory: 0x00 is not an opcode, so this never halts
        let mut cpu = CPU::new(FlatMemory::new(), 0);

        let result = cpu.run_with_limit(10);
        assert_eq!(
            result,
            Err(ExecutionError::InstructionLimitExceeded { limit: 10, pc: 10 })
        );
        assert_eq!(cpu.instructions(), 10);
    }

    #[test]
    fn test_pc_wraps_at_top_of_memory() {
        let mut cpu = CPU::new(FlatMemory::new(), 0xFFFF);
        cpu.step();
        assert_eq!(cpu.pc(), 0x0000);
    }

    #[test]
    fn test_reset_keeps_memory() {
        let mut mem = FlatMemory::new();
        mem.write(10, 0x60);

        let mut cpu = CPU::new(mem, 10);
        cpu.set_a(5);
        cpu.run();

        cpu.reset(10);
        assert_eq!(cpu.a(), 0);
        assert_eq!(cpu.state(), RunState::Running);
        assert_eq!(cpu.memory().read(10), 0x60);
    }
}
