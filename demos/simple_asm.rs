//! Basic assembler usage example

use pico6502::{assemble_source, FlatMemory, MemoryBus, CPU};

fn main() {
    let source = "\
828
LDXIM 1
STX 900
LDAIM 2
ADC 900
STA 901
RTS
END
";

    let mut memory = FlatMemory::new();
    let output = match assemble_source(source, &mut memory) {
        Ok(output) => output,
        Err(err) => {
            eprintln!("Assembly failed: {}", err);
            return;
        }
    };

    println!(
        "Assembled {} bytes at {}:",
        output.bytes_written, output.start_address
    );
    for i in 0..output.bytes_written as u16 {
        print!("{:02X} ", memory.read(output.start_address.wrapping_add(i)));
    }
    println!();

    let mut cpu = CPU::new(memory, output.start_address);
    let executed = cpu.run();

    println!("Executed {} instructions", executed);
    println!("A = {}, X = {}", cpu.a(), cpu.x());
    println!("mem[901] = {}", cpu.memory().read(901));
}
