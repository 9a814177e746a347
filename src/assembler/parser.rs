//! Assembly source parsing: load address and operand literals

use crate::assembler::AssemblerError;
use crate::Opcode;

/// Parse an unsigned decimal literal.
///
/// Only ASCII digits are accepted: no sign, no hex or binary prefixes.
pub fn parse_number(s: &str) -> Result<u32, String> {
    if s.is_empty() {
        return Err("empty number string".to_string());
    }

    if !is_decimal(s) {
        return Err(format!("invalid decimal number: {}", s));
    }

    s.parse::<u32>()
        .map_err(|e| format!("invalid decimal number: {}", e))
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse line 1 of a program: the load address.
pub fn parse_load_address(line: &str) -> Result<u16, AssemblerError> {
    let token = line.trim();
    if token.is_empty() {
        return Err(AssemblerError::MissingLoadAddress);
    }

    parse_number(token)
        .ok()
        .and_then(|value| u16::try_from(value).ok())
        .ok_or_else(|| AssemblerError::InvalidLoadAddress {
            token: token.to_string(),
        })
}

/// Parse the operand token following `opcode` and check it against the
/// opcode's addressing mode.
pub fn parse_operand(
    opcode: Opcode,
    token: Option<&str>,
    line: usize,
) -> Result<u16, AssemblerError> {
    let mnemonic = opcode.mnemonic();
    let token = token.ok_or(AssemblerError::MissingOperand { line, mnemonic })?;

    if !is_decimal(token) {
        return Err(AssemblerError::InvalidLiteral {
            line,
            token: token.to_string(),
        });
    }

    // Digits only, so a failed parse is an overflow
    let max = opcode.addressing_mode().max_operand();
    match token.parse::<u32>() {
        Ok(value) if value <= max => Ok(value as u16),
        _ => Err(AssemblerError::OperandOutOfRange {
            line,
            mnemonic,
            token: token.to_string(),
            max,
        }),
    }
}
