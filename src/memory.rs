//! Flat 64 KiB backing store for the CPU address space.
//!
//! The bus owns one `Memory` and decides which address ranges actually
//! land here (RAM is mirrored into an 11-bit index before indexing, PRG
//! reads may be served by the cartridge instead). Words are little-endian:
//! low byte at `addr`, high byte at `addr + 1`.

/// Total addressable size of the 6502 address space.
pub const MEMORY_SIZE: usize = 0x1_0000;

pub struct Memory {
    cells: Box<[u8; MEMORY_SIZE]>,
}

impl Memory {
    /// Create a zero-initialized 64 KiB store.
    pub fn new() -> Self {
        Self {
            cells: Box::new([0; MEMORY_SIZE]),
        }
    }

    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.cells[addr as usize]
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.cells[addr as usize] = value;
    }

    /// Read a little-endian 16-bit word at `addr`.
    #[inline]
    pub fn read_u16(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Write a little-endian 16-bit word at `addr`.
    #[inline]
    pub fn write_u16(&mut self, addr: u16, value: u16) {
        self.write(addr, (value & 0x00FF) as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }

    /// Bulk-copy `bytes` into the store starting at `start`.
    ///
    /// Used for program image loading; the image must fit below the end
    /// of the address space.
    pub fn copy(&mut self, start: u16, bytes: &[u8]) {
        let start = start as usize;
        self.cells[start..start + bytes.len()].copy_from_slice(bytes);
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
