//! Cartridge image with iNES (v1) loader.
//!
//! Parses the 16-byte iNES header ("NES\x1A" magic), skips an optional
//! 512-byte trainer, and slices out PRG and CHR ROM along with the mapper
//! number and nametable mirroring mode. Only iNES 1.0 is accepted; NES 2.0
//! images (header byte 7, bits 2-3) are a load-time error.
//!
//! The bus consumes only the PRG slice: `read_prg` maps $8000-$FFFF onto
//! it, mirroring a single 16 KiB bank across both halves of the window.

use std::fs;
use std::path::Path;

/// PRG ROM page size declared in iNES header byte 4.
pub const PRG_PAGE_SIZE: usize = 16 * 1024;
/// CHR ROM page size declared in iNES header byte 5.
pub const CHR_PAGE_SIZE: usize = 8 * 1024;

const HEADER_LEN: usize = 16;
const TRAINER_LEN: usize = 512;
const PRG_WINDOW_START: u16 = 0x8000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mirroring {
    Vertical,
    Horizontal,
    FourScreen,
}

#[derive(Debug)]
pub struct Rom {
    prg: Vec<u8>,
    chr: Vec<u8>,
    mapper: u8,
    mirroring: Mirroring,
}

impl Rom {
    /// Parse a cartridge from raw iNES bytes.
    pub fn from_ines_bytes(data: &[u8]) -> Result<Self, String> {
        if data.len() < HEADER_LEN {
            return Err("data too small for iNES header".into());
        }
        if &data[0..4] != b"NES\x1A" {
            return Err("file is not in iNES format (expected NES<1A> magic)".into());
        }

        // Header byte 7 bits 2-3: 00 for iNES 1.0, 10 for NES 2.0.
        let ines_version = (data[7] >> 2) & 0b0000_0011;
        if ines_version != 0 {
            return Err("NES 2.0 format is not supported".into());
        }

        let prg_len = data[4] as usize * PRG_PAGE_SIZE;
        let chr_len = data[5] as usize * CHR_PAGE_SIZE;
        let flags6 = data[6];
        let flags7 = data[7];

        let mapper = (flags7 & 0b1111_0000) | (flags6 >> 4);

        let four_screen = flags6 & 0b0000_1000 != 0;
        let vertical = flags6 & 0b0000_0001 != 0;
        let mirroring = if four_screen {
            Mirroring::FourScreen
        } else if vertical {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };

        let mut prg_start = HEADER_LEN;
        if flags6 & 0b0000_0100 != 0 {
            prg_start += TRAINER_LEN;
        }
        let chr_start = prg_start + prg_len;

        if data.len() < chr_start + chr_len {
            return Err("data too small for declared PRG/CHR sizes".into());
        }

        Ok(Self {
            prg: data[prg_start..prg_start + prg_len].to_vec(),
            chr: data[chr_start..chr_start + chr_len].to_vec(),
            mapper,
            mirroring,
        })
    }

    /// Parse a cartridge from an iNES file (.nes).
    pub fn from_ines_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let bytes = fs::read(path).map_err(|e| format!("failed to read iNES file: {e}"))?;
        Self::from_ines_bytes(&bytes)
    }

    /// Read a byte from the PRG window ($8000-$FFFF).
    ///
    /// A single 16 KiB bank is mirrored across the 32 KiB window.
    pub fn read_prg(&self, addr: u16) -> u8 {
        let mut offset = (addr - PRG_WINDOW_START) as usize;
        if self.prg.len() == PRG_PAGE_SIZE && offset >= PRG_PAGE_SIZE {
            offset %= PRG_PAGE_SIZE;
        }
        self.prg[offset]
    }

    pub fn prg(&self) -> &[u8] {
        &self.prg
    }

    pub fn chr(&self) -> &[u8] {
        &self.chr
    }

    pub fn mapper(&self) -> u8 {
        self.mapper
    }

    pub fn mirroring(&self) -> Mirroring {
        self.mirroring
    }
}
