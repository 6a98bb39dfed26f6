//! Crate-level error type.
//!
//! Two conditions abort a run: fetching an opcode the dispatch table does
//! not know, and writing into the cartridge PRG-ROM window (no mapper in
//! scope supports PRG writes). Everything else the bus can encounter is
//! recovered locally (logged, default value substituted) so emulation of
//! a sloppy program keeps going.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmuError {
    /// The byte fetched at `pc` is not a documented 6502 opcode.
    UnknownOpcode { opcode: u8, pc: u16 },
    /// A store targeted the cartridge PRG-ROM window ($8000-$FFFF).
    RomWrite { addr: u16 },
}

impl fmt::Display for EmuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmuError::UnknownOpcode { opcode, pc } => {
                write!(f, "unknown opcode {opcode:#04x} at {pc:#06x}")
            }
            EmuError::RomWrite { addr } => {
                write!(f, "attempt to write to cartridge ROM space at {addr:#06x}")
            }
        }
    }
}

impl Error for EmuError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        let e = EmuError::UnknownOpcode {
            opcode: 0x02,
            pc: 0x8001,
        };
        assert_eq!(e.to_string(), "unknown opcode 0x02 at 0x8001");
        let e = EmuError::RomWrite { addr: 0xC000 };
        assert_eq!(
            e.to_string(),
            "attempt to write to cartridge ROM space at 0xc000"
        );
    }
}
