//! Fuzz target for the assembler.
//!
//! Feeds arbitrary text to the assembler. Errors are fine; panics are not.
//! Whatever assembles must disassemble without panicking too.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pico6502::{assemble_source, disassemble, DisassemblyOptions, FlatMemory};

fuzz_target!(|data: &[u8]| {
    let source = String::from_utf8_lossy(data);
    let mut memory = FlatMemory::new();

    if let Ok(output) = assemble_source(&source, &mut memory) {
        let count = disassemble(&memory, output.start_address, DisassemblyOptions::default())
            .count();
        assert!(count <= 100);
    }
});
