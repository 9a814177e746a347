//! Fuzz target for the disassembler.
//!
//! Feeds arbitrary memory contents to the disassembler and checks the walk
//! invariants: contiguous addresses, sizes of 1-3 bytes, a bounded window and
//! nothing after RTS.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pico6502::{disassemble, DisassemblyOptions, FlatMemory, Opcode};

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    start_address: u16,
    window: u16,
    bytes: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(input.start_address, &input.bytes);

    let options = DisassemblyOptions {
        max_scan_bytes: input.window,
    };

    let mut expected_address = input.start_address;
    let mut offset: u32 = 0;
    let mut saw_rts = false;

    for instr in disassemble(&memory, input.start_address, options) {
        assert!(!saw_rts, "instruction decoded after RTS");
        assert_eq!(instr.address, expected_address);
        assert!(instr.size_bytes >= 1 && instr.size_bytes <= 3);
        assert!(offset < input.window as u32);

        saw_rts = instr.opcode == Some(Opcode::Rts);
        offset += instr.size_bytes as u32;
        expected_address = expected_address.wrapping_add(instr.size_bytes as u16);
    }
});
