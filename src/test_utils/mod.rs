//! Shared test utilities for building minimal iNES (v1) ROM images.
//!
//! These helpers de-duplicate iNES construction across the CPU, Bus, and
//! Cartridge test modules. They support just what the suite needs
//! (NROM-shaped images, simple flags).
//!
//! iNES header fields used here:
//! - bytes[0..4] = b"NES\x1A"
//! - byte 4 = PRG ROM size in 16 KiB units
//! - byte 5 = CHR ROM size in 8 KiB units
//! - byte 6 = Flags 6 (mirroring, battery, trainer, mapper low nibble)
//! - byte 7 = Flags 7 (NES 2.0 indicator, mapper high nibble)
//! - bytes 8..15 = padding/reserved
//!
//! For a 16 KiB PRG bank the CPU vectors sit at PRG offsets
//! 0x3FFA..=0x3FFF (NMI, RESET, IRQ).

#![allow(dead_code)]

/// Build a minimal iNES (v1) image with configurable PRG/CHR sizes and flags.
///
/// PRG is pattern-filled with 0xAA and CHR with 0xCC so tests can tell
/// the regions apart.
pub fn build_ines(prg_16k: usize, chr_8k: usize, flags6: u8, flags7: u8) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(16 + prg_16k * 16 * 1024 + chr_8k * 8 * 1024);

    // Header
    bytes.extend_from_slice(b"NES\x1A");
    bytes.push(prg_16k as u8);
    bytes.push(chr_8k as u8);
    bytes.push(flags6);
    bytes.push(flags7);
    bytes.extend_from_slice(&[0u8; 8]);

    bytes.extend(std::iter::repeat(0xAA).take(prg_16k * 16 * 1024));
    bytes.extend(std::iter::repeat(0xCC).take(chr_8k * 8 * 1024));

    bytes
}

/// Build an NROM-shaped iNES (v1) image with a caller-provided program
/// placed at the start of a single 16 KiB PRG bank.
///
/// All three vectors point at `reset` (default 0x8000), so the program
/// starts at the top of the bank after a CPU reset.
pub fn build_nrom_with_prg(prg: &[u8], reset: Option<u16>) -> Vec<u8> {
    assert!(
        prg.len() <= 16 * 1024,
        "program must fit within a 16 KiB PRG bank"
    );

    let mut rom = build_ines(1, 1, 0, 0);

    let prg_start = 16;
    rom[prg_start..prg_start + prg.len()].copy_from_slice(prg);
    // Unused bank bytes read as 0 rather than the fill pattern.
    rom[prg_start + prg.len()..prg_start + 16 * 1024].fill(0);

    let reset = reset.unwrap_or(0x8000);
    set_vectors_in_prg(&mut rom[prg_start..prg_start + 16 * 1024], reset);

    rom
}

/// Write the CPU vectors (NMI, RESET, IRQ) into a 16 KiB PRG slice, all
/// pointed at `reset`.
pub fn set_vectors_in_prg(prg: &mut [u8], reset: u16) {
    assert_eq!(prg.len(), 16 * 1024, "expected a single 16 KiB PRG bank");
    let base = 0x3FFA;
    write_le_u16(prg, base, reset); // NMI
    write_le_u16(prg, base + 2, reset); // RESET
    write_le_u16(prg, base + 4, reset); // IRQ
}

#[inline]
fn write_le_u16(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset] = (value & 0x00FF) as u8;
    buf[offset + 1] = (value >> 8) as u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_basic_ines() {
        let rom = build_ines(2, 1, 0x01, 0x00);
        assert_eq!(&rom[0..4], b"NES\x1A");
        assert_eq!(rom[4], 2);
        assert_eq!(rom[5], 1);
        assert_eq!(rom[6], 0x01);
        assert_eq!(rom[7], 0x00);
        assert_eq!(rom.len(), 16 + 2 * 16 * 1024 + 8 * 1024);
    }

    #[test]
    fn nrom_builder_places_program_and_vectors() {
        let rom = build_nrom_with_prg(&[0xA9, 0x01, 0x00], None);
        let prg_start = 16;
        assert_eq!(rom[prg_start], 0xA9);
        // RESET vector = 0x8000, little-endian at PRG offset 0x3FFC.
        assert_eq!(rom[prg_start + 0x3FFC], 0x00);
        assert_eq!(rom[prg_start + 0x3FFD], 0x80);
    }

    #[test]
    fn nrom_builder_honors_reset_override() {
        let rom = build_nrom_with_prg(&[0x00], Some(0x8010));
        let prg_start = 16;
        assert_eq!(rom[prg_start + 0x3FFC], 0x10);
        assert_eq!(rom[prg_start + 0x3FFD], 0x80);
    }
}
