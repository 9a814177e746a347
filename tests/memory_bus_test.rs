//! Memory bus trait tests

use pico6502::host::initialize_memory;
use pico6502::{FlatMemory, MemoryBus};

#[test]
fn test_flat_memory_initialization() {
    let memory = FlatMemory::new();

    for addr in [0x0000, 0x1234, 0x8000, 0xFFFF] {
        assert_eq!(memory.read(addr), 0x00, "0x{:04X} should start at zero", addr);
    }
}

#[test]
fn test_flat_memory_read_write_round_trip() {
    let mut memory = FlatMemory::new();

    let test_data = [
        (0x0000, 0x01),
        (0x00FF, 0xFF),
        (0x0100, 0x7F),
        (0x0384, 0x42),
        (0x8000, 0xAB),
        (0xFFFF, 0xCD),
    ];

    for (addr, value) in test_data {
        memory.write(addr, value);
    }
    for (addr, value) in test_data {
        assert_eq!(memory.read(addr), value, "mismatch at 0x{:04X}", addr);
    }
}

#[test]
fn test_write_touches_one_byte() {
    let mut memory = FlatMemory::new();
    memory.write(900, 0xFF);

    assert_eq!(memory.read(899), 0);
    assert_eq!(memory.read(901), 0);
    assert_eq!(memory.as_slice().iter().filter(|&&b| b != 0).count(), 1);
}

#[test]
fn test_read_word_little_endian_and_wrapping() {
    let mut memory = FlatMemory::new();
    memory.write(900, 0x34);
    memory.write(901, 0x12);
    assert_eq!(memory.read_word(900), 0x1234);

    memory.write(0xFFFF, 0xCD);
    memory.write(0x0000, 0xAB);
    assert_eq!(memory.read_word(0xFFFF), 0xABCD);
}

#[test]
fn test_load_wraps_past_top_of_memory() {
    let mut memory = FlatMemory::new();
    memory.load(0xFFFE, &[1, 2, 3, 4]);

    assert_eq!(memory.read(0xFFFE), 1);
    assert_eq!(memory.read(0xFFFF), 2);
    assert_eq!(memory.read(0x0000), 3);
    assert_eq!(memory.read(0x0001), 4);
}

#[test]
fn test_initialize_memory_zero_fills() {
    let mut memory = FlatMemory::new();
    memory.load(0, &[0xFF; 300]);
    memory.write(0xFFFF, 0xFF);

    initialize_memory(&mut memory);

    assert_eq!(memory.as_slice().len(), 65536);
    assert!(memory.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn test_clear() {
    let mut memory = FlatMemory::new();
    memory.write(828, 0xA2);
    memory.clear();
    assert_eq!(memory.read(828), 0);
}

#[test]
fn test_trait_object_usage() {
    let mut memory = FlatMemory::new();
    let bus: &mut dyn MemoryBus = &mut memory;

    bus.write(0x0300, 0x60);
    assert_eq!(bus.read(0x0300), 0x60);
}
