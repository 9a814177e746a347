//! Fuzz target for CPU stepping.
//!
//! Builds an arbitrary register file and a small memory image around the PC,
//! then executes a bounded number of instructions. Checks that flags outside
//! the executed opcode's documented set never change.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pico6502::{decode, FlatMemory, Registers, StatusFlags, CPU};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    pc: u16,
    s: u8,
    p: u8,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    /// Bytes written starting at the PC
    program: [u8; 64],
    /// Bytes written at 0x4000 for absolute operands
    data: [u8; 256],
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x4000, &input.data);
    memory.load(input.cpu_state.pc, &input.program);

    let regs = Registers {
        a: input.cpu_state.a,
        x: input.cpu_state.x,
        y: input.cpu_state.y,
        pc: input.cpu_state.pc,
        s: input.cpu_state.s,
        p: StatusFlags::from_bits_retain(input.cpu_state.p),
    };
    let mut cpu = CPU::with_registers(memory, regs);

    for _ in 0..input.steps {
        let before = cpu.registers();
        let byte = cpu.memory().as_slice()[before.pc as usize];
        cpu.step();
        let after = cpu.registers();

        let allowed = decode(byte)
            .map(|op| op.metadata().flags_affected)
            .unwrap_or(StatusFlags::empty());
        assert_eq!(before.p & !allowed, after.p & !allowed);
        assert_eq!(after.s, before.s);

        if cpu.is_halted() {
            break;
        }
    }
});
