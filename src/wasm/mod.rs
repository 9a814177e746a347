//! WebAssembly bindings for the pico6502 emulator.
//!
//! JavaScript-callable interfaces to assemble, run and inspect programs in the
//! browser.

pub mod api;

pub use api::Emulator;
