//! Basic disassembler usage example

use pico6502::disassembler::formatter::format_line;
use pico6502::{disassemble, DisassemblyOptions, FlatMemory};

fn main() {
    let code = [
        0xA9, 0x2A, // LDAIM 42
        0xAA, // TAX
        0x8D, 0x00, 0x20, // STA 8192
        0xEA, // not an implemented opcode
        0x60, // RTS
    ];

    let mut memory = FlatMemory::new();
    memory.load(1000, &code);

    println!("Disassembled code:");
    for instr in disassemble(&memory, 1000, DisassemblyOptions::default()) {
        println!("{}", format_line(&instr));
    }
}
