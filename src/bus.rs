/*!
Bus abstraction mapping the CPU address space to RAM, the PPU register
window, and cartridge PRG ROM.

Address map (CPU):
- $0000-$07FF: 2 KiB internal RAM
- $0800-$1FFF: Mirrors of $0000-$07FF (mask with & 0x07FF)
- $2000-$3FFF: PPU register window. No PPU is modeled: reads return 0,
  writes are dropped. Programs poking PPU registers keep running.
- $4000-$7FFF: Unmapped. Accesses are logged and otherwise ignored
  (reads return 0).
- $8000-$FFFF: Cartridge PRG ROM. Reads come from the attached ROM
  (16 KiB banks mirrored), or from the backing memory when no cartridge
  is attached so that bulk-loaded test programs can live there. Writes
  are an error: nothing in this window is writable.

The backing `Memory` covers the full 64 KiB; the decoder chooses which
accesses reach it and under what index.
*/

use log::{trace, warn};

use crate::cartridge::Rom;
use crate::error::EmuError;
use crate::memory::Memory;

const RAM_END: u16 = 0x1FFF;
const RAM_MIRROR_MASK: u16 = 0x07FF;
const PPU_START: u16 = 0x2000;
const PPU_END: u16 = 0x3FFF;
const PRG_START: u16 = 0x8000;

pub struct Bus {
    memory: Memory,
    rom: Option<Rom>,
}

impl Bus {
    /// Location of the reset vector read by `Cpu::reset`.
    pub const RESET_VECTOR: u16 = 0xFFFC;

    pub fn new() -> Self {
        Self {
            memory: Memory::new(),
            rom: None,
        }
    }

    pub fn attach_rom(&mut self, rom: Rom) {
        self.rom = Some(rom);
    }

    pub fn rom(&self) -> Option<&Rom> {
        self.rom.as_ref()
    }

    pub fn read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=RAM_END => self.memory.read(addr & RAM_MIRROR_MASK),
            PPU_START..=PPU_END => {
                trace!("read from PPU register window at {addr:#06x} (not modeled)");
                0
            }
            PRG_START..=0xFFFF => match &self.rom {
                Some(rom) => rom.read_prg(addr),
                None => self.memory.read(addr),
            },
            _ => {
                warn!("ignoring read from unmapped address {addr:#06x}");
                0
            }
        }
    }

    /// Read a little-endian word via two bus reads.
    pub fn read_u16(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    pub fn write(&mut self, addr: u16, value: u8) -> Result<(), EmuError> {
        match addr {
            0x0000..=RAM_END => {
                self.memory.write(addr & RAM_MIRROR_MASK, value);
                Ok(())
            }
            PPU_START..=PPU_END => {
                trace!("dropping write of {value:#04x} to PPU register window at {addr:#06x}");
                Ok(())
            }
            PRG_START..=0xFFFF => Err(EmuError::RomWrite { addr }),
            _ => {
                warn!("ignoring write of {value:#04x} to unmapped address {addr:#06x}");
                Ok(())
            }
        }
    }

    /// Write a little-endian word via two bus writes.
    pub fn write_u16(&mut self, addr: u16, value: u16) -> Result<(), EmuError> {
        self.write(addr, (value & 0x00FF) as u8)?;
        self.write(addr.wrapping_add(1), (value >> 8) as u8)
    }

    /// Bulk-load a program image at `origin` and point the reset vector
    /// at it.
    ///
    /// This writes the backing memory directly, bypassing the decoder,
    /// so images may be placed in the ROM window without a cartridge.
    pub fn load_program(&mut self, origin: u16, program: &[u8]) {
        self.memory.copy(origin, program);
        self.memory.write_u16(Self::RESET_VECTOR, origin);
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::build_nrom_with_prg;

    #[test]
    fn ram_is_mirrored_every_2k() {
        let mut bus = Bus::new();
        bus.write(0x0000, 0x11).unwrap();
        assert_eq!(bus.read(0x0800), 0x11);
        assert_eq!(bus.read(0x1000), 0x11);
        assert_eq!(bus.read(0x1800), 0x11);

        bus.write(0x1FFF, 0x22).unwrap();
        assert_eq!(bus.read(0x07FF), 0x22);
    }

    #[test]
    fn word_access_is_little_endian() {
        let mut bus = Bus::new();
        bus.write_u16(0x0600, 0x8023).unwrap();
        assert_eq!(bus.read(0x0600), 0x23);
        assert_eq!(bus.read(0x0601), 0x80);
        assert_eq!(bus.read_u16(0x0600), 0x8023);
    }

    #[test]
    fn ppu_window_reads_zero_and_drops_writes() {
        let mut bus = Bus::new();
        bus.write(0x2000, 0xFF).unwrap();
        assert_eq!(bus.read(0x2000), 0);
        assert_eq!(bus.read(0x3FFF), 0);
    }

    #[test]
    fn unmapped_region_is_inert() {
        let mut bus = Bus::new();
        bus.write(0x4020, 0xFF).unwrap();
        assert_eq!(bus.read(0x4020), 0);
        assert_eq!(bus.read(0x7FFF), 0);
    }

    #[test]
    fn rom_window_write_is_an_error() {
        let mut bus = Bus::new();
        let err = bus.write(0xC000, 0x01).unwrap_err();
        assert_eq!(err, EmuError::RomWrite { addr: 0xC000 });
    }

    #[test]
    fn prg_reads_come_from_attached_rom() {
        let data = build_nrom_with_prg(&[0xA9, 0x42, 0x00], None);
        let rom = Rom::from_ines_bytes(&data).expect("parse");
        let mut bus = Bus::new();
        bus.attach_rom(rom);

        assert_eq!(bus.read(0x8000), 0xA9);
        assert_eq!(bus.read(0x8001), 0x42);
        // Single 16 KiB bank mirrors into the upper half.
        assert_eq!(bus.read(0xC000), 0xA9);
        // Reset vector written into the bank is visible at both mirrors.
        assert_eq!(bus.read_u16(0xFFFC), 0x8000);
    }

    #[test]
    fn prg_reads_fall_back_to_memory_without_rom() {
        let mut bus = Bus::new();
        bus.load_program(0x8000, &[0xA9, 0x42]);
        assert_eq!(bus.read(0x8000), 0xA9);
        assert_eq!(bus.read(0x8001), 0x42);
    }

    #[test]
    fn load_program_seeds_reset_vector() {
        let mut bus = Bus::new();
        bus.load_program(0x0600, &[0xEA, 0x00]);
        assert_eq!(bus.read_u16(Bus::RESET_VECTOR), 0x0600);
        assert_eq!(bus.read(0x0600), 0xEA);
    }
}
