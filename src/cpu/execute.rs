/*!
execute.rs - 6502 instruction semantic helpers (ALU + flag effects).

Centralizes side-effect logic shared by the opcode handlers: loads and
transfers, logical ops, arithmetic with carry/overflow, compares,
register inc/dec, and the shift/rotate transforms. Handlers in
`opcodes.rs` resolve operands and route values; this module owns what
the values do to registers and flags.

Shifts and rotates are value-to-value transforms so the same helper
serves both the accumulator form and the memory read-modify-write form.
*/

use crate::cpu::state::CpuState;

// --- Loads & transfers ---------------------------------------------------

pub(crate) fn lda(cpu: &mut CpuState, value: u8) {
    cpu.a = value;
    cpu.update_zn(cpu.a);
}

pub(crate) fn ldx(cpu: &mut CpuState, value: u8) {
    cpu.x = value;
    cpu.update_zn(cpu.x);
}

pub(crate) fn ldy(cpu: &mut CpuState, value: u8) {
    cpu.y = value;
    cpu.update_zn(cpu.y);
}

pub(crate) fn tax(cpu: &mut CpuState) {
    cpu.x = cpu.a;
    cpu.update_zn(cpu.x);
}

pub(crate) fn tay(cpu: &mut CpuState) {
    cpu.y = cpu.a;
    cpu.update_zn(cpu.y);
}

pub(crate) fn txa(cpu: &mut CpuState) {
    cpu.a = cpu.x;
    cpu.update_zn(cpu.a);
}

pub(crate) fn tya(cpu: &mut CpuState) {
    cpu.a = cpu.y;
    cpu.update_zn(cpu.a);
}

pub(crate) fn tsx(cpu: &mut CpuState) {
    cpu.x = cpu.sp;
    cpu.update_zn(cpu.x);
}

/// TXS affects no flags.
pub(crate) fn txs(cpu: &mut CpuState) {
    cpu.sp = cpu.x;
}

// --- Logical -------------------------------------------------------------

pub(crate) fn and(cpu: &mut CpuState, value: u8) {
    cpu.a &= value;
    cpu.update_zn(cpu.a);
}

pub(crate) fn ora(cpu: &mut CpuState, value: u8) {
    cpu.a |= value;
    cpu.update_zn(cpu.a);
}

pub(crate) fn eor(cpu: &mut CpuState, value: u8) {
    cpu.a ^= value;
    cpu.update_zn(cpu.a);
}

/// BIT: Z from A & M, N from bit 7 of M, V from bit 6 of M. A unchanged.
pub(crate) fn bit(cpu: &mut CpuState, value: u8) {
    cpu.status.set_zero(cpu.a & value == 0);
    cpu.status.set_negative(value & 0x80 != 0);
    cpu.status.set_overflow(value & 0x40 != 0);
}

// --- Arithmetic ----------------------------------------------------------

/// ADC: A + M + C with binary arithmetic (decimal mode is not modeled).
///
/// Overflow is set when both operands share a sign and the result does
/// not: `(!(a ^ m)) & (a ^ result) & 0x80`.
pub(crate) fn adc(cpu: &mut CpuState, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.status.carry() as u16;
    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.status.set_carry(sum > 0xFF);
    cpu.status
        .set_overflow((!(a ^ value)) & (a ^ result) & 0x80 != 0);
    cpu.a = result;
    cpu.update_zn(result);
}

/// SBC: A - M - (1 - C), implemented as ADC of the one's complement.
pub(crate) fn sbc(cpu: &mut CpuState, value: u8) {
    adc(cpu, value ^ 0xFF);
}

/// CMP/CPX/CPY: compare `reg` against `value`.
///
/// Carry = reg >= value; Zero and Negative come from the subtraction
/// result byte.
pub(crate) fn compare(cpu: &mut CpuState, reg: u8, value: u8) {
    cpu.status.set_carry(reg >= value);
    cpu.update_zn(reg.wrapping_sub(value));
}

// --- Register inc/dec ----------------------------------------------------

pub(crate) fn inx(cpu: &mut CpuState) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zn(cpu.x);
}

pub(crate) fn iny(cpu: &mut CpuState) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zn(cpu.y);
}

pub(crate) fn dex(cpu: &mut CpuState) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zn(cpu.x);
}

pub(crate) fn dey(cpu: &mut CpuState) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zn(cpu.y);
}

// --- Shifts & rotates (value transforms) ---------------------------------

pub(crate) fn asl_value(cpu: &mut CpuState, value: u8) -> u8 {
    cpu.status.set_carry(value & 0x80 != 0);
    let result = value << 1;
    cpu.update_zn(result);
    result
}

pub(crate) fn lsr_value(cpu: &mut CpuState, value: u8) -> u8 {
    cpu.status.set_carry(value & 0x01 != 0);
    let result = value >> 1;
    cpu.update_zn(result);
    result
}

pub(crate) fn rol_value(cpu: &mut CpuState, value: u8) -> u8 {
    let carry_in = cpu.status.carry() as u8;
    cpu.status.set_carry(value & 0x80 != 0);
    let result = (value << 1) | carry_in;
    cpu.update_zn(result);
    result
}

pub(crate) fn ror_value(cpu: &mut CpuState, value: u8) -> u8 {
    let carry_in = (cpu.status.carry() as u8) << 7;
    cpu.status.set_carry(value & 0x01 != 0);
    let result = (value >> 1) | carry_in;
    cpu.update_zn(result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adc_signed_overflow() {
        let mut cpu = CpuState::new();
        cpu.a = 0x02;
        adc(&mut cpu, 0x7F);
        assert_eq!(cpu.a, 0x81);
        assert!(cpu.status.overflow());
        assert!(cpu.status.negative());
        assert!(!cpu.status.carry());
        assert!(!cpu.status.zero());
    }

    #[test]
    fn adc_unsigned_carry_out() {
        let mut cpu = CpuState::new();
        cpu.a = 0x01;
        adc(&mut cpu, 0xFF);
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.status.carry());
        assert!(cpu.status.zero());
        assert!(!cpu.status.overflow());
    }

    #[test]
    fn adc_consumes_carry_in() {
        let mut cpu = CpuState::new();
        cpu.a = 0x10;
        cpu.status.set_carry(true);
        adc(&mut cpu, 0x10);
        assert_eq!(cpu.a, 0x21);
        assert!(!cpu.status.carry());
    }

    #[test]
    fn sbc_no_borrow() {
        let mut cpu = CpuState::new();
        cpu.a = 0x03;
        cpu.status.set_carry(true);
        sbc(&mut cpu, 0x02);
        assert_eq!(cpu.a, 0x01);
        assert!(cpu.status.carry());
        assert!(!cpu.status.zero());
        assert!(!cpu.status.negative());
    }

    #[test]
    fn sbc_with_borrow() {
        let mut cpu = CpuState::new();
        cpu.a = 0x01;
        cpu.status.set_carry(false); // pending borrow
        sbc(&mut cpu, 0x02);
        assert_eq!(cpu.a, 0xFE);
        assert!(!cpu.status.carry());
        assert!(cpu.status.negative());
    }

    #[test]
    fn compare_sets_negative_from_result() {
        let mut cpu = CpuState::new();
        compare(&mut cpu, 0x10, 0x20);
        assert!(!cpu.status.carry());
        assert!(!cpu.status.zero());
        // 0x10 - 0x20 = 0xF0, bit 7 set
        assert!(cpu.status.negative());

        compare(&mut cpu, 0x20, 0x20);
        assert!(cpu.status.carry());
        assert!(cpu.status.zero());
        assert!(!cpu.status.negative());
    }

    #[test]
    fn bit_maps_memory_bits_to_flags() {
        let mut cpu = CpuState::new();
        cpu.a = 0x01;
        bit(&mut cpu, 0xC0);
        assert!(cpu.status.zero());
        assert!(cpu.status.negative());
        assert!(cpu.status.overflow());
        assert_eq!(cpu.a, 0x01);

        bit(&mut cpu, 0x01);
        assert!(!cpu.status.zero());
        assert!(!cpu.status.negative());
        assert!(!cpu.status.overflow());
    }

    #[test]
    fn shifts_move_bits_through_carry() {
        let mut cpu = CpuState::new();
        assert_eq!(asl_value(&mut cpu, 0x81), 0x02);
        assert!(cpu.status.carry());

        assert_eq!(lsr_value(&mut cpu, 0x01), 0x00);
        assert!(cpu.status.carry());
        assert!(cpu.status.zero());

        // ROL pulls the carry just set by LSR into bit 0.
        assert_eq!(rol_value(&mut cpu, 0x40), 0x81);
        assert!(!cpu.status.carry());
        assert!(cpu.status.negative());

        cpu.status.set_carry(true);
        assert_eq!(ror_value(&mut cpu, 0x02), 0x81);
        assert!(!cpu.status.carry());
    }

    #[test]
    fn register_inc_dec_wrap() {
        let mut cpu = CpuState::new();
        cpu.x = 0xFF;
        inx(&mut cpu);
        assert_eq!(cpu.x, 0x00);
        assert!(cpu.status.zero());

        cpu.y = 0x00;
        dey(&mut cpu);
        assert_eq!(cpu.y, 0xFF);
        assert!(cpu.status.negative());
    }

    #[test]
    fn txs_leaves_flags_alone() {
        let mut cpu = CpuState::new();
        cpu.x = 0x00;
        cpu.status.set_zero(false);
        txs(&mut cpu);
        assert_eq!(cpu.sp, 0x00);
        assert!(!cpu.status.zero());
    }
}
