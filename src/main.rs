use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use miette::{IntoDiagnostic, Result};

use pico6502::host::{self, DEMO_LOAD_ADDRESS};
use pico6502::{assemble_file, DisassemblyOptions, FlatMemory, CPU};

/// Assemble a program into a 64KB memory image, list it, run it and dump the registers.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Assembly source file. Without one the built-in demo program is loaded at 828
    path: Option<PathBuf>,

    /// Give up after this many instructions instead of waiting for RTS forever
    #[arg(short = 'n', long)]
    max_instructions: Option<u64>,

    /// Skip the disassembly listing
    #[arg(long)]
    no_disasm: bool,

    /// Disassembly window in bytes
    #[arg(short, long, default_value_t = 100)]
    window: u16,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut memory = FlatMemory::new();
    host::initialize_memory(&mut memory);

    let start = match &args.path {
        Some(path) => {
            message(MsgColor::Green, "Assembling", &path.display().to_string());
            let output = assemble_file(path, &mut memory).into_diagnostic()?;
            for warning in &output.warnings {
                message(MsgColor::Yellow, "Warning", &warning.to_string());
            }
            message(
                MsgColor::Green,
                "Loaded",
                &format!(
                    "{} bytes at {}..{}",
                    output.bytes_written, output.start_address, output.end_address
                ),
            );
            output.start_address
        }
        None => {
            message(
                MsgColor::Cyan,
                "Demo",
                &format!("no source given, loading built-in program at {DEMO_LOAD_ADDRESS}"),
            );
            host::load_demo_program(&mut memory)
        }
    };

    if !args.no_disasm {
        println!();
        let options = DisassemblyOptions {
            max_scan_bytes: args.window,
        };
        let stdout = std::io::stdout();
        host::write_memory_disassembled(&mut stdout.lock(), &memory, start, options)
            .into_diagnostic()?;
        println!();
    }

    let mut cpu = CPU::new(memory, start);
    message(MsgColor::Green, "Running", &format!("pc set to {start}"));

    let executed = match args.max_instructions {
        Some(limit) => cpu.run_with_limit(limit).into_diagnostic()?,
        None => host::fetch_decode_execute(&mut cpu),
    };
    message(
        MsgColor::Green,
        "Completed",
        &format!("{executed} instructions executed"),
    );

    println!();
    host::print_cpu_register_content(&cpu).into_diagnostic()?;
    Ok(())
}

enum MsgColor {
    Green,
    Cyan,
    Yellow,
}

fn message(color: MsgColor, left: &str, right: &str) {
    let left = match color {
        MsgColor::Green => left.green(),
        MsgColor::Cyan => left.cyan(),
        MsgColor::Yellow => left.yellow(),
    };
    println!("{left:>12} {right}");
}
