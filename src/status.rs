//! # Processor Status Register
//!
//! The `p` register packed as `N V - B D I Z C`. Only the flags an instruction
//! documents are ever touched; every other bit, including the unused bit 5, is
//! carried through unchanged.

use bitflags::bitflags;

bitflags! {
    /// Packed status byte.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StatusFlags: u8 {
        /// Negative: bit 7 of the last result
        const NEGATIVE = 0b1000_0000;
        /// Overflow: signed overflow on ADC
        const OVERFLOW = 0b0100_0000;
        /// Unused bit 5
        const UNUSED = 0b0010_0000;
        /// Break
        const BREAK = 0b0001_0000;
        /// Decimal mode
        const DECIMAL = 0b0000_1000;
        /// Interrupt disable
        const INTERRUPT = 0b0000_0100;
        /// Zero: last result was zero
        const ZERO = 0b0000_0010;
        /// Carry: last ADC overflowed 8 bits
        const CARRY = 0b0000_0001;
    }
}

impl StatusFlags {
    /// Updates N and Z from an 8-bit result.
    pub fn update_nz(&mut self, value: u8) {
        self.set(Self::NEGATIVE, value & 0x80 != 0);
        self.set(Self::ZERO, value == 0);
    }

    /// The carry bit as an addend.
    pub fn carry_in(self) -> u8 {
        (self & Self::CARRY).bits()
    }
}

impl std::fmt::Display for StatusFlags {
    /// Renders the flags as `NV-BDIZC`, lowercase for clear bits.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const NAMES: [char; 8] = ['N', 'V', '-', 'B', 'D', 'I', 'Z', 'C'];
        for (i, name) in NAMES.iter().enumerate() {
            let bit = 0x80 >> i;
            if self.bits() & bit != 0 {
                write!(f, "{}", name)?;
            } else {
                write!(f, "{}", name.to_ascii_lowercase())?;
            }
        }
        Ok(())
    }
}
