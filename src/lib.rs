#![doc = r#"
Famicom/NES-class 6502 CPU core.

This crate emulates the MOS 6502-derived CPU at the heart of the console:
instruction fetch/decode/execute with hardware-accurate register and
status-flag side effects, a page-1 stack, and a memory bus that decodes
the 16-bit address space into mirrored RAM, a PPU register window, and
cartridge PRG-ROM.

Modules:
- bus: address decoder routing CPU addresses to RAM, the PPU window, and PRG-ROM
- cartridge: iNES (v1) container parser producing PRG/CHR slices and metadata
- cpu: 6502 core (state + status + addressing + opcode table + run loop)
- error: crate-level error type for decode failures and illegal ROM writes
- memory: flat 64 KiB backing store with little-endian word access

Timing is not modeled: each instruction executes to completion in one
step. NMI/IRQ lines and mappers beyond PRG bank mirroring are out of
scope.

In tests, shared iNES builders are available under `crate::test_utils`.
"#]

pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod error;
pub mod memory;

// Re-export commonly used types at the crate root for convenience.
pub use bus::Bus;
pub use cartridge::{Mirroring, Rom};
pub use cpu::{Cpu, CpuState, Status};
pub use error::EmuError;
pub use memory::Memory;

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
