/*!
state.rs - Canonical 6502 CPU architectural state (registers + stack).

`CpuState` is the single authoritative owner of all architecturally
visible registers plus the `halted` control bit. It deliberately
excludes bus decoding and instruction dispatch; those live in the bus
and opcode modules.

Stack discipline (page 1, $0100-$01FF):
  push: write at $0100 | SP, then decrement SP
  pop:  increment SP, then read at $0100 | SP
SP wraps in 8 bits, so overflow/underflow silently laps the page.
Word pushes go high byte first so the bytes land little-endian in
memory and `pop_u16` can read low-then-high.
*/

use crate::bus::Bus;
use crate::cpu::status::Status;
use crate::error::EmuError;

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Stack pointer value after reset (top of page 1).
pub const SP_RESET: u8 = 0xFF;

#[derive(Debug, Clone)]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: Status,
    /// Set by BRK; the run loop stops stepping once this is true.
    pub halted: bool,
}

impl CpuState {
    pub fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: SP_RESET,
            pc: 0,
            status: Status::empty(),
            halted: false,
        }
    }

    /// Fetch the byte at PC and advance PC by one.
    #[inline]
    pub fn fetch_u8(&mut self, bus: &Bus) -> u8 {
        let v = bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        v
    }

    /// Fetch a little-endian word at PC and advance PC by two.
    #[inline]
    pub fn fetch_u16(&mut self, bus: &Bus) -> u16 {
        let lo = self.fetch_u8(bus) as u16;
        let hi = self.fetch_u8(bus) as u16;
        (hi << 8) | lo
    }

    #[inline]
    pub fn push_u8(&mut self, bus: &mut Bus, value: u8) -> Result<(), EmuError> {
        bus.write(STACK_BASE | self.sp as u16, value)?;
        self.sp = self.sp.wrapping_sub(1);
        Ok(())
    }

    #[inline]
    pub fn pop_u8(&mut self, bus: &Bus) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        bus.read(STACK_BASE | self.sp as u16)
    }

    /// Push a word, high byte first.
    #[inline]
    pub fn push_u16(&mut self, bus: &mut Bus, value: u16) -> Result<(), EmuError> {
        self.push_u8(bus, (value >> 8) as u8)?;
        self.push_u8(bus, (value & 0x00FF) as u8)
    }

    /// Pop a word pushed by `push_u16` (low byte comes off first).
    #[inline]
    pub fn pop_u16(&mut self, bus: &Bus) -> u16 {
        let lo = self.pop_u8(bus) as u16;
        let hi = self.pop_u8(bus) as u16;
        (hi << 8) | lo
    }

    /// Recompute Zero/Negative from a result byte.
    #[inline]
    pub fn update_zn(&mut self, value: u8) {
        self.status.update_zn(value);
    }
}

impl Default for CpuState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_reset_shape() {
        let s = CpuState::new();
        assert_eq!(s.a, 0);
        assert_eq!(s.x, 0);
        assert_eq!(s.y, 0);
        assert_eq!(s.sp, SP_RESET);
        assert_eq!(s.status, Status::empty());
        assert!(!s.halted);
    }

    #[test]
    fn fetch_advances_pc() {
        let mut bus = Bus::new();
        bus.write(0x0200, 0xAB).unwrap();
        bus.write_u16(0x0201, 0xBEEF).unwrap();

        let mut s = CpuState::new();
        s.pc = 0x0200;
        assert_eq!(s.fetch_u8(&bus), 0xAB);
        assert_eq!(s.pc, 0x0201);
        assert_eq!(s.fetch_u16(&bus), 0xBEEF);
        assert_eq!(s.pc, 0x0203);
    }

    #[test]
    fn push_writes_then_decrements() {
        let mut bus = Bus::new();
        let mut s = CpuState::new();
        s.sp = 0x05;
        s.push_u8(&mut bus, 0x22).unwrap();
        assert_eq!(bus.read(0x0105), 0x22);
        assert_eq!(s.sp, 0x04);
    }

    #[test]
    fn pop_increments_then_reads() {
        let mut bus = Bus::new();
        bus.write(0x0105, 0x22).unwrap();
        let mut s = CpuState::new();
        s.sp = 0x04;
        assert_eq!(s.pop_u8(&bus), 0x22);
        assert_eq!(s.sp, 0x05);
    }

    #[test]
    fn sp_wraps_in_eight_bits() {
        let mut bus = Bus::new();
        let mut s = CpuState::new();
        s.sp = 0x00;
        s.push_u8(&mut bus, 0x11).unwrap();
        assert_eq!(s.sp, 0xFF);
        assert_eq!(bus.read(0x0100), 0x11);

        assert_eq!(s.pop_u8(&bus), 0x11);
        assert_eq!(s.sp, 0x00);
    }

    #[test]
    fn word_push_pop_round_trip() {
        let mut bus = Bus::new();
        let mut s = CpuState::new();
        s.push_u16(&mut bus, 0x8023).unwrap();
        // High byte at the higher address, low byte below it.
        assert_eq!(bus.read(0x01FF), 0x80);
        assert_eq!(bus.read(0x01FE), 0x23);
        assert_eq!(s.pop_u16(&bus), 0x8023);
        assert_eq!(s.sp, SP_RESET);
    }
}
