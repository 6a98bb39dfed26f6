/*!
addressing.rs - 6502 addressing modes and operand resolution.

`operand_address` consumes the operand bytes of the current instruction
(advancing PC through the fetch helpers on `CpuState`) and returns the
effective address the instruction should act on. Handlers never do
manual PC arithmetic; all operand consumption goes through here.

Quirks modeled:
- Zero-page indexed modes wrap inside page 0 ($FF + 2 reads $01).
- Indexed-indirect and indirect-indexed pointers read their high byte
  from page 0 with 8-bit wrap.
- JMP (indirect) reproduces the hardware page-wrap bug: a pointer at
  $xxFF takes its high byte from $xx00, not the next page.

Implied and Accumulator carry no operand address; asking for one is a
programmer error in the dispatch table and panics.
*/

use crate::bus::Bus;
use crate::cpu::state::CpuState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Relative,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
}

impl AddressingMode {
    /// Operand bytes consumed by this mode (instruction length minus the
    /// opcode byte itself).
    pub fn operand_len(self) -> u8 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Resolve the effective address for `mode`, consuming operand bytes.
pub(crate) fn operand_address(cpu: &mut CpuState, bus: &Bus, mode: AddressingMode) -> u16 {
    match mode {
        AddressingMode::Immediate => {
            let addr = cpu.pc;
            cpu.pc = cpu.pc.wrapping_add(1);
            addr
        }
        AddressingMode::ZeroPage => cpu.fetch_u8(bus) as u16,
        AddressingMode::ZeroPageX => {
            let base = cpu.fetch_u8(bus);
            base.wrapping_add(cpu.x) as u16
        }
        AddressingMode::ZeroPageY => {
            let base = cpu.fetch_u8(bus);
            base.wrapping_add(cpu.y) as u16
        }
        AddressingMode::Relative => {
            let offset = cpu.fetch_u8(bus) as i8;
            cpu.pc.wrapping_add(offset as i16 as u16)
        }
        AddressingMode::Absolute => cpu.fetch_u16(bus),
        AddressingMode::AbsoluteX => {
            let base = cpu.fetch_u16(bus);
            base.wrapping_add(cpu.x as u16)
        }
        AddressingMode::AbsoluteY => {
            let base = cpu.fetch_u16(bus);
            base.wrapping_add(cpu.y as u16)
        }
        AddressingMode::Indirect => {
            let ptr = cpu.fetch_u16(bus);
            read_word_indirect_bug(bus, ptr)
        }
        AddressingMode::IndirectX => {
            let ptr = cpu.fetch_u8(bus).wrapping_add(cpu.x);
            read_word_zero_page(bus, ptr)
        }
        AddressingMode::IndirectY => {
            let ptr = cpu.fetch_u8(bus);
            let base = read_word_zero_page(bus, ptr);
            base.wrapping_add(cpu.y as u16)
        }
        AddressingMode::Implied | AddressingMode::Accumulator => {
            panic!("addressing mode {mode:?} has no operand address")
        }
    }
}

/// Read a pointer from page 0; the high byte wraps inside the page.
pub(crate) fn read_word_zero_page(bus: &Bus, ptr: u8) -> u16 {
    let lo = bus.read(ptr as u16) as u16;
    let hi = bus.read(ptr.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// Read a JMP (indirect) pointer with the 6502 page-wrap bug: the high
/// byte never crosses into the next page.
pub(crate) fn read_word_indirect_bug(bus: &Bus, addr: u16) -> u16 {
    let lo = bus.read(addr) as u16;
    let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
    let hi = bus.read(hi_addr) as u16;
    (hi << 8) | lo
}
