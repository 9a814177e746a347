//! WASM API for the emulator.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection,
//! and assembly/disassembly operations.

use wasm_bindgen::prelude::*;

use crate::disassembler::formatter::format_instruction;
use crate::host::load_demo_program;
use crate::{assemble_source, disassemble, DisassemblyOptions, FlatMemory, MemoryBus, CPU};

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// Result of assembly operation
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct AssemblyResult {
    success: bool,
    start_addr: u16,
    end_addr: u16,
    warnings: Vec<String>,
    error_message: Option<String>,
    error_line: Option<usize>,
}

#[wasm_bindgen]
impl AssemblyResult {
    #[wasm_bindgen(getter)]
    pub fn success(&self) -> bool {
        self.success
    }

    #[wasm_bindgen(getter)]
    pub fn start_addr(&self) -> u16 {
        self.start_addr
    }

    #[wasm_bindgen(getter)]
    pub fn end_addr(&self) -> u16 {
        self.end_addr
    }

    #[wasm_bindgen(getter)]
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn error_message(&self) -> Option<String> {
        self.error_message.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn error_line(&self) -> Option<usize> {
        self.error_line
    }
}

/// One line of a disassembly listing
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    size: u8,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Emulator instance owned by JavaScript
#[wasm_bindgen]
pub struct Emulator {
    cpu: CPU<FlatMemory>,
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Emulator {
    /// Create an emulator with the demo program loaded
    #[wasm_bindgen(constructor)]
    pub fn new() -> Emulator {
        let mut memory = FlatMemory::new();
        let start = load_demo_program(&mut memory);
        Emulator {
            cpu: CPU::new(memory, start),
        }
    }

    /// Execute a single instruction; returns true once halted
    pub fn step(&mut self) -> bool {
        self.cpu.step();
        self.cpu.is_halted()
    }

    /// Run until RTS, giving up after `limit` instructions
    pub fn run(&mut self, limit: u32) -> Result<u32, JsError> {
        self.cpu
            .run_with_limit(limit as u64)
            .map(|n| n as u32)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Clear memory and registers
    pub fn clear(&mut self) {
        self.cpu.memory_mut().clear();
        self.cpu.reset(0);
    }

    /// Assemble source into memory and point the PC at its load address.
    /// On failure memory and registers are left as they were.
    pub fn assemble_and_load(&mut self, source: String) -> AssemblyResult {
        match assemble_source(&source, self.cpu.memory_mut()) {
            Ok(output) => {
                self.cpu.reset(output.start_address);
                AssemblyResult {
                    success: true,
                    start_addr: output.start_address,
                    end_addr: output.end_address,
                    warnings: output.warnings.iter().map(|w| w.to_string()).collect(),
                    error_message: None,
                    error_line: None,
                }
            }
            Err(err) => AssemblyResult {
                success: false,
                start_addr: self.cpu.pc(),
                end_addr: self.cpu.pc(),
                warnings: Vec::new(),
                error_message: Some(err.to_string()),
                error_line: err.line(),
            },
        }
    }

    /// Disassemble memory starting at an address
    pub fn disassemble(&self, start_addr: u16) -> Vec<JsValue> {
        disassemble(self.cpu.memory(), start_addr, DisassemblyOptions::default())
            .map(|instr| {
                JsValue::from(DisassemblyLine {
                    address: instr.address,
                    size: instr.size_bytes,
                    text: format_instruction(&instr),
                })
            })
            .collect()
    }

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Copy a 256-byte page of memory into a typed array
    pub fn memory_page(&self, page: u8) -> js_sys::Uint8Array {
        let start = (page as usize) << 8;
        js_sys::Uint8Array::from(&self.cpu.memory().as_slice()[start..start + 256])
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status().bits()
    }

    #[wasm_bindgen(getter)]
    pub fn halted(&self) -> bool {
        self.cpu.is_halted()
    }

    #[wasm_bindgen(getter)]
    pub fn instructions(&self) -> f64 {
        self.cpu.instructions() as f64
    }
}
