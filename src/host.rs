//! Host-facing entry points.
//!
//! The functions a host program (the `pico6502` binary, a test harness, a
//! front end) calls to load, run and inspect a program. The `print_*`
//! functions write to standard output; the matching `write_*` functions take
//! any `io::Write`.

use std::io::{self, Write};
use std::path::Path;

use crate::disassembler::formatter::format_line;
use crate::{
    assemble_file, disassemble, AssemblerError, DisassemblyOptions, MemoryBus, Registers, CPU,
};

/// Load address of the built-in demo program.
pub const DEMO_LOAD_ADDRESS: u16 = 828;

/// Machine code of the built-in demo program:
///
/// ```text
/// LDXIM 1
/// STX 900
/// LDAIM 2
/// ADC 900
/// STA 901
/// RTS
/// ```
pub const DEMO_PROGRAM: [u8; 14] = [
    0xA2, 0x01, // LDXIM 1
    0x8E, 0x84, 0x03, // STX 900
    0xA9, 0x02, // LDAIM 2
    0x6D, 0x84, 0x03, // ADC 900
    0x8D, 0x85, 0x03, // STA 901
    0x60, // RTS
];

/// Zero-fills the whole 64KB address space.
pub fn initialize_memory<M: MemoryBus + ?Sized>(memory: &mut M) {
    for addr in 0..=u16::MAX {
        memory.write(addr, 0);
    }
}

/// Writes the demo program at `DEMO_LOAD_ADDRESS` and returns that address.
pub fn load_demo_program<M: MemoryBus + ?Sized>(memory: &mut M) -> u16 {
    let mut addr = DEMO_LOAD_ADDRESS;
    for byte in DEMO_PROGRAM {
        memory.write(addr, byte);
        addr = addr.wrapping_add(1);
    }
    DEMO_LOAD_ADDRESS
}

/// Assembles a source file into memory and returns its load address.
///
/// Warnings about skipped tokens are logged; use `assemble_file` directly to
/// inspect them.
pub fn assemble_file_into_memory<M, P>(path: P, memory: &mut M) -> Result<u16, AssemblerError>
where
    M: MemoryBus + ?Sized,
    P: AsRef<Path>,
{
    assemble_file(path, memory).map(|output| output.start_address)
}

/// Runs the CPU until `RTS` and returns the number of instructions executed.
///
/// Blocks forever if the program never reaches an `RTS`.
pub fn fetch_decode_execute<M: MemoryBus>(cpu: &mut CPU<M>) -> u64 {
    cpu.run()
}

/// Prints the disassembly listing starting at `start` to standard output.
pub fn print_memory_disassembled<M: MemoryBus + ?Sized>(memory: &M, start: u16) -> io::Result<()> {
    let stdout = io::stdout();
    write_memory_disassembled(&mut stdout.lock(), memory, start, DisassemblyOptions::default())
}

/// Writes one `RAM <address>: <instruction>` line per decoded instruction.
pub fn write_memory_disassembled<W, M>(
    out: &mut W,
    memory: &M,
    start: u16,
    options: DisassemblyOptions,
) -> io::Result<()>
where
    W: Write + ?Sized,
    M: MemoryBus + ?Sized,
{
    for instr in disassemble(memory, start, options) {
        writeln!(out, " {}", format_line(&instr))?;
    }
    Ok(())
}

/// Prints the register file to standard output.
pub fn print_cpu_register_content<M: MemoryBus>(cpu: &CPU<M>) -> io::Result<()> {
    let stdout = io::stdout();
    write_cpu_register_content(&mut stdout.lock(), &cpu.registers())
}

/// Writes each register in binary, unsigned and (for A, X, Y) signed form,
/// followed by the status byte with its `NV-BDIZC` legend.
pub fn write_cpu_register_content<W: Write + ?Sized>(
    out: &mut W,
    regs: &Registers,
) -> io::Result<()> {
    for (name, value) in [("A", regs.a), ("X", regs.x), ("Y", regs.y)] {
        writeln!(
            out,
            "  {}:         {:08b}   (unsigned: {:5})      (signed: {:4})",
            name, value, value, value as i8
        )?;
    }
    writeln!(out, " PC: {:016b}   (unsigned: {:5})", regs.pc, regs.pc)?;
    writeln!(out, "  S:         {:08b}   (unsigned: {:5})", regs.s, regs.s)?;
    writeln!(out, "  P:         {:08b}", regs.p.bits())?;
    writeln!(out, "             NV-BDIZC")?;
    Ok(())
}
