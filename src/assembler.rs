//! Assembler Module
//!
//! Translates line-oriented assembly source straight into memory.
//!
//! # Source Format
//!
//! ```text
//! 828          <- line 1: decimal load address (0-65535)
//! LDXIM 1      <- MNEMONIC [OPERAND], decimal operand
//! STX 900
//! RTS
//! END          <- stop; anything after is not read
//! ```
//!
//! Tokens are separated by whitespace and mnemonics are case-sensitive. An
//! operand must sit on the same line as its mnemonic. Immediate operands are one
//! byte (0-255); absolute operands are addresses (0-65535) emitted little-endian.
//!
//! Unrecognized mnemonics are skipped with a warning and assembly carries on.
//! Unreadable files, bad load addresses and malformed or out-of-range operands
//! are errors.

pub mod encoder;
pub mod parser;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{AddressingMode, MemoryBus, Opcode};

/// Pseudo-op ending the program.
pub const END_DIRECTIVE: &str = "END";

/// Complete output from assembling source code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblerOutput {
    /// Load address from line 1; execution starts here
    pub start_address: u16,

    /// Write cursor after the last emitted byte
    pub end_address: u16,

    /// Number of bytes written to memory
    pub bytes_written: usize,

    /// Whether an `END` directive was reached (false: ran off the end of input)
    pub terminated: bool,

    /// Non-fatal warnings encountered during assembly
    pub warnings: Vec<AssemblerWarning>,
}

/// A token that is neither a mnemonic nor `END`; it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblerWarning {
    /// Line number where warning occurred (1-indexed)
    pub line: usize,

    /// The offending token
    pub token: String,

    /// Full text of the offending line
    pub source_line: String,
}

impl std::fmt::Display for AssemblerWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {}: unidentified op-code `{}` in `{}`",
            self.line,
            self.token,
            self.source_line.trim()
        )
    }
}

/// An error that stops assembly.
#[derive(Debug, thiserror::Error)]
pub enum AssemblerError {
    /// The source file could not be opened or read
    #[error("cannot read source file {}: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source has no first line
    #[error("source is empty, expected a load address on line 1")]
    MissingLoadAddress,

    /// Line 1 is not a decimal number in 0-65535
    #[error("line 1: invalid load address `{token}` (expected 0-65535)")]
    InvalidLoadAddress { token: String },

    /// A mnemonic that takes an operand ended its line without one
    #[error("line {line}: {mnemonic} requires an operand")]
    MissingOperand { line: usize, mnemonic: &'static str },

    /// An operand token is not a decimal literal
    #[error("line {line}: invalid decimal literal `{token}`")]
    InvalidLiteral { line: usize, token: String },

    /// An operand does not fit its addressing mode
    #[error("line {line}: operand {token} out of range for {mnemonic} (0-{max})")]
    OperandOutOfRange {
        line: usize,
        mnemonic: &'static str,
        token: String,
        max: u32,
    },
}

impl AssemblerError {
    /// Source line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            AssemblerError::SourceUnreadable { .. } => None,
            AssemblerError::MissingLoadAddress | AssemblerError::InvalidLoadAddress { .. } => {
                Some(1)
            }
            AssemblerError::MissingOperand { line, .. }
            | AssemblerError::InvalidLiteral { line, .. }
            | AssemblerError::OperandOutOfRange { line, .. } => Some(*line),
        }
    }
}

/// Assemble a source file into memory.
///
/// The file is read in full and closed before any byte is written.
pub fn assemble_file<M, P>(path: P, memory: &mut M) -> Result<AssemblerOutput, AssemblerError>
where
    M: MemoryBus + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| AssemblerError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("assembling {}", path.display());
    assemble_source(&source, memory)
}

/// Assemble source text into memory.
///
/// Nothing is written unless the whole source assembles.
///
/// # Examples
///
/// ```
/// use pico6502::{assemble_source, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// let output = assemble_source("828\nLDXIM 1\nSTX 900\nEND\n", &mut memory).unwrap();
///
/// assert_eq!(output.start_address, 828);
/// assert_eq!(output.bytes_written, 5);
/// assert_eq!(memory.read(828), 0xA2);
/// assert_eq!(memory.read(831), 0x84); // 900 % 256
/// assert_eq!(memory.read(832), 0x03); // 900 / 256
/// ```
pub fn assemble_source<M: MemoryBus + ?Sized>(
    source: &str,
    memory: &mut M,
) -> Result<AssemblerOutput, AssemblerError> {
    let mut lines = source.lines().enumerate();

    let (_, first) = lines.next().ok_or(AssemblerError::MissingLoadAddress)?;
    let start_address = parser::parse_load_address(first)?;

    let mut program = Vec::new();
    let mut terminated = false;
    let mut warnings = Vec::new();

    'lines: for (index, text) in lines {
        let line = index + 1;
        let mut tokens = text.split_whitespace();

        while let Some(token) = tokens.next() {
            if token == END_DIRECTIVE {
                terminated = true;
                break 'lines;
            }

            let Some(opcode) = Opcode::from_mnemonic(token) else {
                log::warn!("line {}: unidentified op-code `{}`", line, token);
                warnings.push(AssemblerWarning {
                    line,
                    token: token.to_string(),
                    source_line: text.to_string(),
                });
                continue;
            };

            let operand = match opcode.addressing_mode() {
                AddressingMode::Implicit => None,
                _ => Some(parser::parse_operand(opcode, tokens.next(), line)?),
            };

            program.extend(encoder::encode_instruction(opcode, operand));
        }
    }

    // Memory is only touched once the whole source has assembled
    let mut cursor = start_address;
    for &byte in &program {
        memory.write(cursor, byte);
        cursor = cursor.wrapping_add(1);
    }
    let bytes_written = program.len();

    log::debug!(
        "assembled {} bytes at {}..{}{}",
        bytes_written,
        start_address,
        cursor,
        if terminated { "" } else { " (no END)" }
    );

    Ok(AssemblerOutput {
        start_address,
        end_address: cursor,
        bytes_written,
        terminated,
        warnings,
    })
}
