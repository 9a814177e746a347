//! Integration tests for the assembler

use std::fs;
use std::path::PathBuf;

use pico6502::host::{assemble_file_into_memory, DEMO_PROGRAM};
use pico6502::{assemble_file, assemble_source, AssemblerError, FlatMemory, MemoryBus, CPU};

const DEMO_SOURCE: &str = "828\nLDXIM 1\nSTX 900\nLDAIM 2\nADC 900\nSTA 901\nRTS\nEND\n";

/// Write `contents` to a per-test file in the system temp directory
fn temp_source(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "pico6502-{}-{}.asm",
        std::process::id(),
        name
    ));
    fs::write(&path, contents).unwrap();
    path
}

fn read_range(memory: &FlatMemory, start: u16, len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| memory.read(start.wrapping_add(i as u16)))
        .collect()
}

#[test]
fn test_demo_source_matches_hand_assembled_bytes() {
    let mut memory = FlatMemory::new();
    let output = assemble_source(DEMO_SOURCE, &mut memory).unwrap();

    assert_eq!(output.start_address, 828);
    assert_eq!(output.end_address, 842);
    assert_eq!(output.bytes_written, 14);
    assert!(output.terminated);
    assert!(output.warnings.is_empty());
    assert_eq!(read_range(&memory, 828, 14), DEMO_PROGRAM);
}

#[test]
fn test_assembled_demo_executes() {
    let mut memory = FlatMemory::new();
    let output = assemble_source(DEMO_SOURCE, &mut memory).unwrap();

    let mut cpu = CPU::new(memory, output.start_address);
    assert_eq!(cpu.run(), 6);
    assert_eq!(cpu.a(), 3);
    assert_eq!(cpu.memory().read(901), 3);
}

#[test]
fn test_all_mnemonics_encode() {
    let source = "\
0
LDX 1
LDXIM 2
STX 3
LDY 4
LDYIM 5
STY 6
LDAIM 7
ADC 8
STA 9
CLD
CLC
RTS
TAX
TXA
TAY
TYA
END
";
    let mut memory = FlatMemory::new();
    let output = assemble_source(source, &mut memory).unwrap();

    let expected = [
        0xAE, 1, 0, 0xA2, 2, 0x8E, 3, 0, 0xAC, 4, 0, 0xA0, 5, 0x8C, 6, 0, 0xA9, 7, 0x6D, 8, 0,
        0x8D, 9, 0, 0xD8, 0x18, 0x60, 0xAA, 0x8A, 0xA8, 0x98,
    ];
    assert_eq!(output.bytes_written, expected.len());
    assert_eq!(read_range(&memory, 0, expected.len()), expected);
}

#[test]
fn test_absolute_operand_split() {
    let mut memory = FlatMemory::new();
    assemble_source("0\nSTA 65535\nSTA 256\nSTA 255\n", &mut memory).unwrap();

    assert_eq!(
        read_range(&memory, 0, 9),
        [0x8D, 0xFF, 0xFF, 0x8D, 0x00, 0x01, 0x8D, 0xFF, 0x00]
    );
}

#[test]
fn test_whitespace_and_crlf_are_tolerated() {
    let mut memory = FlatMemory::new();
    let output = assemble_source("  828 \r\n\tLDAIM   2\r\n\r\nRTS\r\nEND\r\n", &mut memory).unwrap();

    assert_eq!(output.start_address, 828);
    assert_eq!(read_range(&memory, 828, 3), [0xA9, 0x02, 0x60]);
}

#[test]
fn test_multiple_instructions_on_one_line() {
    let mut memory = FlatMemory::new();
    let output = assemble_source("10\nLDAIM 1 TAX RTS END\nTAY\n", &mut memory).unwrap();

    assert!(output.terminated);
    assert_eq!(read_range(&memory, 10, 5), [0xA9, 0x01, 0xAA, 0x60, 0x00]);
}

#[test]
fn test_end_stops_assembly() {
    let mut memory = FlatMemory::new();
    let output = assemble_source("10\nTAX\nEND\nLDAIM notanumber\n", &mut memory).unwrap();

    assert!(output.terminated);
    assert_eq!(output.end_address, 11);
}

#[test]
fn test_missing_end_is_not_an_error() {
    let mut memory = FlatMemory::new();
    let output = assemble_source("10\nTAX\nRTS", &mut memory).unwrap();

    assert!(!output.terminated);
    assert_eq!(output.start_address, 10);
    assert_eq!(output.bytes_written, 2);
}

#[test]
fn test_unrecognized_mnemonics_are_warnings() {
    let mut memory = FlatMemory::new();
    let output = assemble_source("10\nlda 5\nTAX\nJMP 100\nEND\n", &mut memory).unwrap();

    // "lda", "5", "JMP" and "100" are all skipped
    let tokens: Vec<&str> = output.warnings.iter().map(|w| w.token.as_str()).collect();
    assert_eq!(tokens, ["lda", "5", "JMP", "100"]);
    assert_eq!(output.warnings[0].line, 2);
    assert_eq!(output.warnings[2].line, 4);
    assert_eq!(memory.read(10), 0xAA);
    assert_eq!(output.bytes_written, 1);
    assert!(output.warnings[2].to_string().contains("JMP 100"));
}

#[test]
fn test_invalid_literal_fails() {
    let mut memory = FlatMemory::new();
    let err = assemble_source("10\nTAX\nLDAIM $FF\n", &mut memory).unwrap_err();

    match err {
        AssemblerError::InvalidLiteral { line, token } => {
            assert_eq!(line, 3);
            assert_eq!(token, "$FF");
        }
        other => panic!("expected InvalidLiteral, got {other:?}"),
    }
}

#[test]
fn test_immediate_out_of_range_fails() {
    let mut memory = FlatMemory::new();
    let err = assemble_source("10\nLDXIM 256\n", &mut memory).unwrap_err();

    match err {
        AssemblerError::OperandOutOfRange {
            line,
            mnemonic,
            token,
            max,
        } => {
            assert_eq!(line, 2);
            assert_eq!(mnemonic, "LDXIM");
            assert_eq!(token, "256");
            assert_eq!(max, 255);
        }
        other => panic!("expected OperandOutOfRange, got {other:?}"),
    }
}

#[test]
fn test_literal_wider_than_u32_is_out_of_range() {
    let mut memory = FlatMemory::new();
    let err = assemble_source("10\nSTA 99999999999\n", &mut memory).unwrap_err();

    match err {
        AssemblerError::OperandOutOfRange { line, token, max, .. } => {
            assert_eq!(line, 2);
            assert_eq!(token, "99999999999");
            assert_eq!(max, 65535);
        }
        other => panic!("expected OperandOutOfRange, got {other:?}"),
    }
}

#[test]
fn test_absolute_out_of_range_fails() {
    let mut memory = FlatMemory::new();
    let err = assemble_source("10\nADC 65536\n", &mut memory).unwrap_err();
    assert!(matches!(err, AssemblerError::OperandOutOfRange { max: 65535, .. }));
}

#[test]
fn test_operand_on_next_line_is_missing() {
    let mut memory = FlatMemory::new();
    let err = assemble_source("10\nSTA\n900\n", &mut memory).unwrap_err();
    assert!(matches!(
        err,
        AssemblerError::MissingOperand {
            line: 2,
            mnemonic: "STA"
        }
    ));
}

#[test]
fn test_failed_assembly_leaves_memory_untouched() {
    let sources = [
        "828\nLDXIM 1\nSTX 900\nLDAIM bogus\nRTS\nEND\n",
        "828\nLDXIM 1\nSTX 900\nLDAIM 300\nRTS\nEND\n",
        "828\nLDXIM 1\nSTX 900\nSTA\nRTS\nEND\n",
    ];

    for source in sources {
        let mut memory = FlatMemory::new();
        assert!(assemble_source(source, &mut memory).is_err());
        assert!(
            memory.as_slice().iter().all(|&b| b == 0),
            "memory written for {source:?}"
        );
    }
}

#[test]
fn test_failed_assembly_keeps_previous_program() {
    let mut memory = FlatMemory::new();
    assemble_source(DEMO_SOURCE, &mut memory).unwrap();

    assemble_source("828\nTAX\nTAY\nLDAIM x\n", &mut memory).unwrap_err();

    assert_eq!(read_range(&memory, 828, 14), DEMO_PROGRAM);
}

#[test]
fn test_bad_load_address() {
    let mut memory = FlatMemory::new();

    let err = assemble_source("start\nRTS\n", &mut memory).unwrap_err();
    assert!(matches!(err, AssemblerError::InvalidLoadAddress { .. }));

    let err = assemble_source("70000\nRTS\n", &mut memory).unwrap_err();
    assert!(matches!(err, AssemblerError::InvalidLoadAddress { .. }));

    let err = assemble_source("\nRTS\n", &mut memory).unwrap_err();
    assert!(matches!(err, AssemblerError::MissingLoadAddress));
}

#[test]
fn test_write_cursor_wraps() {
    let mut memory = FlatMemory::new();
    let output = assemble_source("65535\nSTA 4660\n", &mut memory).unwrap();

    assert_eq!(memory.read(0xFFFF), 0x8D);
    assert_eq!(memory.read(0x0000), 0x34);
    assert_eq!(memory.read(0x0001), 0x12);
    assert_eq!(output.end_address, 2);
}

#[test]
fn test_assemble_file() {
    let path = temp_source("demo", DEMO_SOURCE);
    let mut memory = FlatMemory::new();

    let start = assemble_file_into_memory(&path, &mut memory).unwrap();
    assert_eq!(start, 828);
    assert_eq!(read_range(&memory, 828, 14), DEMO_PROGRAM);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_assemble_missing_file_is_an_error() {
    let path = std::env::temp_dir().join("pico6502-this-file-does-not-exist.asm");
    let mut memory = FlatMemory::new();

    let err = assemble_file(&path, &mut memory).unwrap_err();
    match &err {
        AssemblerError::SourceUnreadable { path: p, .. } => assert_eq!(p, &path),
        other => panic!("expected SourceUnreadable, got {other:?}"),
    }
    assert_eq!(err.line(), None);
    assert!(err.to_string().contains("cannot read source file"));

    // Nothing was written
    assert!(memory.as_slice().iter().all(|&b| b == 0));
}
