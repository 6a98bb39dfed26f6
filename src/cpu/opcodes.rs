/*!
opcodes.rs - Static 256-entry dispatch table and opcode handlers.

Each documented 6502 opcode gets one `OpCode` entry: mnemonic (for
diagnostics), addressing mode, total instruction length in bytes, and a
handler function. The table is a `static` built in a const block, so
decode is a single array index with no locking or lazy init.

Handlers resolve their operand through `addressing::operand_address`
(which consumes the operand bytes by advancing PC) and delegate flag and
register effects to `execute`. Stores and read-modify-write ops
propagate bus write errors, which is how an attempted ROM write aborts
the run.

Undocumented opcodes are left as `None`; the core reports them as
`EmuError::UnknownOpcode`.
*/

use crate::bus::Bus;
use crate::cpu::addressing::{AddressingMode, operand_address};
use crate::cpu::execute;
use crate::cpu::state::CpuState;
use crate::cpu::status::Status;
use crate::error::EmuError;

type Handler = fn(&mut CpuState, &mut Bus, AddressingMode) -> Result<(), EmuError>;

#[derive(Clone, Copy)]
pub struct OpCode {
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    /// Total encoded length (opcode byte + operand bytes).
    pub len: u8,
    handler: Handler,
}

impl OpCode {
    const fn new(mnemonic: &'static str, mode: AddressingMode, len: u8, handler: Handler) -> Self {
        Self {
            mnemonic,
            mode,
            len,
            handler,
        }
    }

    pub fn execute(&self, cpu: &mut CpuState, bus: &mut Bus) -> Result<(), EmuError> {
        (self.handler)(cpu, bus, self.mode)
    }
}

/// Look up the table entry for an opcode byte.
pub(crate) fn lookup(opcode: u8) -> Option<&'static OpCode> {
    OPCODES[opcode as usize].as_ref()
}

// --- Operand plumbing ----------------------------------------------------

fn operand_value(cpu: &mut CpuState, bus: &Bus, mode: AddressingMode) -> u8 {
    match mode {
        AddressingMode::Accumulator => cpu.a,
        _ => {
            let addr = operand_address(cpu, bus, mode);
            bus.read(addr)
        }
    }
}

/// Read-modify-write: apply `f` to the operand in place (accumulator or
/// memory cell).
fn modify_operand(
    cpu: &mut CpuState,
    bus: &mut Bus,
    mode: AddressingMode,
    f: fn(&mut CpuState, u8) -> u8,
) -> Result<(), EmuError> {
    match mode {
        AddressingMode::Accumulator => {
            let v = cpu.a;
            cpu.a = f(cpu, v);
            Ok(())
        }
        _ => {
            let addr = operand_address(cpu, bus, mode);
            let result = f(cpu, bus.read(addr));
            bus.write(addr, result)
        }
    }
}

/// Shared branch logic: the relative operand is always consumed, the
/// jump only taken when `cond` holds.
fn branch_if(cpu: &mut CpuState, bus: &Bus, cond: bool) {
    let target = operand_address(cpu, bus, AddressingMode::Relative);
    if cond {
        cpu.pc = target;
    }
}

// --- Loads & stores ------------------------------------------------------

fn op_lda(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    let v = operand_value(cpu, bus, mode);
    execute::lda(cpu, v);
    Ok(())
}

fn op_ldx(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    let v = operand_value(cpu, bus, mode);
    execute::ldx(cpu, v);
    Ok(())
}

fn op_ldy(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    let v = operand_value(cpu, bus, mode);
    execute::ldy(cpu, v);
    Ok(())
}

fn op_sta(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    let addr = operand_address(cpu, bus, mode);
    bus.write(addr, cpu.a)
}

fn op_stx(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    let addr = operand_address(cpu, bus, mode);
    bus.write(addr, cpu.x)
}

fn op_sty(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    let addr = operand_address(cpu, bus, mode);
    bus.write(addr, cpu.y)
}

// --- Transfers -----------------------------------------------------------

fn op_tax(cpu: &mut CpuState, _bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    execute::tax(cpu);
    Ok(())
}

fn op_tay(cpu: &mut CpuState, _bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    execute::tay(cpu);
    Ok(())
}

fn op_txa(cpu: &mut CpuState, _bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    execute::txa(cpu);
    Ok(())
}

fn op_tya(cpu: &mut CpuState, _bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    execute::tya(cpu);
    Ok(())
}

fn op_tsx(cpu: &mut CpuState, _bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    execute::tsx(cpu);
    Ok(())
}

fn op_txs(cpu: &mut CpuState, _bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    execute::txs(cpu);
    Ok(())
}

// --- Logical & arithmetic ------------------------------------------------

fn op_and(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    let v = operand_value(cpu, bus, mode);
    execute::and(cpu, v);
    Ok(())
}

fn op_ora(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    let v = operand_value(cpu, bus, mode);
    execute::ora(cpu, v);
    Ok(())
}

fn op_eor(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    let v = operand_value(cpu, bus, mode);
    execute::eor(cpu, v);
    Ok(())
}

fn op_bit(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    let v = operand_value(cpu, bus, mode);
    execute::bit(cpu, v);
    Ok(())
}

fn op_adc(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    let v = operand_value(cpu, bus, mode);
    execute::adc(cpu, v);
    Ok(())
}

fn op_sbc(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    let v = operand_value(cpu, bus, mode);
    execute::sbc(cpu, v);
    Ok(())
}

fn op_cmp(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    let v = operand_value(cpu, bus, mode);
    let a = cpu.a;
    execute::compare(cpu, a, v);
    Ok(())
}

fn op_cpx(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    let v = operand_value(cpu, bus, mode);
    let x = cpu.x;
    execute::compare(cpu, x, v);
    Ok(())
}

fn op_cpy(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    let v = operand_value(cpu, bus, mode);
    let y = cpu.y;
    execute::compare(cpu, y, v);
    Ok(())
}

// --- Shifts, rotates, memory inc/dec -------------------------------------

fn op_asl(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    modify_operand(cpu, bus, mode, execute::asl_value)
}

fn op_lsr(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    modify_operand(cpu, bus, mode, execute::lsr_value)
}

fn op_rol(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    modify_operand(cpu, bus, mode, execute::rol_value)
}

fn op_ror(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    modify_operand(cpu, bus, mode, execute::ror_value)
}

fn op_inc(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    modify_operand(cpu, bus, mode, |cpu, v| {
        let r = v.wrapping_add(1);
        cpu.update_zn(r);
        r
    })
}

fn op_dec(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    modify_operand(cpu, bus, mode, |cpu, v| {
        let r = v.wrapping_sub(1);
        cpu.update_zn(r);
        r
    })
}

fn op_inx(cpu: &mut CpuState, _bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    execute::inx(cpu);
    Ok(())
}

fn op_iny(cpu: &mut CpuState, _bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    execute::iny(cpu);
    Ok(())
}

fn op_dex(cpu: &mut CpuState, _bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    execute::dex(cpu);
    Ok(())
}

fn op_dey(cpu: &mut CpuState, _bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    execute::dey(cpu);
    Ok(())
}

// --- Flag operations -----------------------------------------------------

fn op_clc(cpu: &mut CpuState, _bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    cpu.status.set_carry(false);
    Ok(())
}

fn op_sec(cpu: &mut CpuState, _bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    cpu.status.set_carry(true);
    Ok(())
}

fn op_cli(cpu: &mut CpuState, _bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    cpu.status.set_interrupt_disable(false);
    Ok(())
}

fn op_sei(cpu: &mut CpuState, _bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    cpu.status.set_interrupt_disable(true);
    Ok(())
}

fn op_cld(cpu: &mut CpuState, _bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    cpu.status.set_decimal(false);
    Ok(())
}

fn op_sed(cpu: &mut CpuState, _bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    cpu.status.set_decimal(true);
    Ok(())
}

fn op_clv(cpu: &mut CpuState, _bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    cpu.status.set_overflow(false);
    Ok(())
}

// --- Stack ops -----------------------------------------------------------

fn op_pha(cpu: &mut CpuState, bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    let a = cpu.a;
    cpu.push_u8(bus, a)
}

fn op_pla(cpu: &mut CpuState, bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    let v = cpu.pop_u8(bus);
    cpu.a = v;
    cpu.update_zn(v);
    Ok(())
}

fn op_php(cpu: &mut CpuState, bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    let bits = cpu.status.bits();
    cpu.push_u8(bus, bits)
}

fn op_plp(cpu: &mut CpuState, bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    let bits = cpu.pop_u8(bus);
    cpu.status = Status::from_bits_retain(bits);
    Ok(())
}

// --- Control flow --------------------------------------------------------

fn op_jmp(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    cpu.pc = operand_address(cpu, bus, mode);
    Ok(())
}

fn op_jsr(cpu: &mut CpuState, bus: &mut Bus, mode: AddressingMode) -> Result<(), EmuError> {
    let target = operand_address(cpu, bus, mode);
    // Hardware pushes the address of the JSR's last byte; RTS adds one.
    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.push_u16(bus, return_addr)?;
    cpu.pc = target;
    Ok(())
}

fn op_rts(cpu: &mut CpuState, bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    cpu.pc = cpu.pop_u16(bus).wrapping_add(1);
    Ok(())
}

fn op_rti(cpu: &mut CpuState, bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    let bits = cpu.pop_u8(bus);
    cpu.status = Status::from_bits_retain(bits);
    cpu.pc = cpu.pop_u16(bus);
    Ok(())
}

fn op_brk(cpu: &mut CpuState, _bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    cpu.halted = true;
    Ok(())
}

fn op_nop(_cpu: &mut CpuState, _bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    Ok(())
}

fn op_bcc(cpu: &mut CpuState, bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    let cond = !cpu.status.carry();
    branch_if(cpu, bus, cond);
    Ok(())
}

fn op_bcs(cpu: &mut CpuState, bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    let cond = cpu.status.carry();
    branch_if(cpu, bus, cond);
    Ok(())
}

fn op_beq(cpu: &mut CpuState, bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    let cond = cpu.status.zero();
    branch_if(cpu, bus, cond);
    Ok(())
}

fn op_bne(cpu: &mut CpuState, bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    let cond = !cpu.status.zero();
    branch_if(cpu, bus, cond);
    Ok(())
}

fn op_bmi(cpu: &mut CpuState, bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    let cond = cpu.status.negative();
    branch_if(cpu, bus, cond);
    Ok(())
}

fn op_bpl(cpu: &mut CpuState, bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    let cond = !cpu.status.negative();
    branch_if(cpu, bus, cond);
    Ok(())
}

fn op_bvs(cpu: &mut CpuState, bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    let cond = cpu.status.overflow();
    branch_if(cpu, bus, cond);
    Ok(())
}

fn op_bvc(cpu: &mut CpuState, bus: &mut Bus, _mode: AddressingMode) -> Result<(), EmuError> {
    let cond = !cpu.status.overflow();
    branch_if(cpu, bus, cond);
    Ok(())
}

// --- The table -----------------------------------------------------------

use AddressingMode::*;

static OPCODES: [Option<OpCode>; 256] = {
    let mut t: [Option<OpCode>; 256] = [None; 256];

    // Loads
    t[0xA9] = Some(OpCode::new("LDA", Immediate, 2, op_lda));
    t[0xA5] = Some(OpCode::new("LDA", ZeroPage, 2, op_lda));
    t[0xB5] = Some(OpCode::new("LDA", ZeroPageX, 2, op_lda));
    t[0xAD] = Some(OpCode::new("LDA", Absolute, 3, op_lda));
    t[0xBD] = Some(OpCode::new("LDA", AbsoluteX, 3, op_lda));
    t[0xB9] = Some(OpCode::new("LDA", AbsoluteY, 3, op_lda));
    t[0xA1] = Some(OpCode::new("LDA", IndirectX, 2, op_lda));
    t[0xB1] = Some(OpCode::new("LDA", IndirectY, 2, op_lda));
    t[0xA2] = Some(OpCode::new("LDX", Immediate, 2, op_ldx));
    t[0xA6] = Some(OpCode::new("LDX", ZeroPage, 2, op_ldx));
    t[0xB6] = Some(OpCode::new("LDX", ZeroPageY, 2, op_ldx));
    t[0xAE] = Some(OpCode::new("LDX", Absolute, 3, op_ldx));
    t[0xBE] = Some(OpCode::new("LDX", AbsoluteY, 3, op_ldx));
    t[0xA0] = Some(OpCode::new("LDY", Immediate, 2, op_ldy));
    t[0xA4] = Some(OpCode::new("LDY", ZeroPage, 2, op_ldy));
    t[0xB4] = Some(OpCode::new("LDY", ZeroPageX, 2, op_ldy));
    t[0xAC] = Some(OpCode::new("LDY", Absolute, 3, op_ldy));
    t[0xBC] = Some(OpCode::new("LDY", AbsoluteX, 3, op_ldy));

    // Stores
    t[0x85] = Some(OpCode::new("STA", ZeroPage, 2, op_sta));
    t[0x95] = Some(OpCode::new("STA", ZeroPageX, 2, op_sta));
    t[0x8D] = Some(OpCode::new("STA", Absolute, 3, op_sta));
    t[0x9D] = Some(OpCode::new("STA", AbsoluteX, 3, op_sta));
    t[0x99] = Some(OpCode::new("STA", AbsoluteY, 3, op_sta));
    t[0x81] = Some(OpCode::new("STA", IndirectX, 2, op_sta));
    t[0x91] = Some(OpCode::new("STA", IndirectY, 2, op_sta));
    t[0x86] = Some(OpCode::new("STX", ZeroPage, 2, op_stx));
    t[0x96] = Some(OpCode::new("STX", ZeroPageY, 2, op_stx));
    t[0x8E] = Some(OpCode::new("STX", Absolute, 3, op_stx));
    t[0x84] = Some(OpCode::new("STY", ZeroPage, 2, op_sty));
    t[0x94] = Some(OpCode::new("STY", ZeroPageX, 2, op_sty));
    t[0x8C] = Some(OpCode::new("STY", Absolute, 3, op_sty));

    // Transfers
    t[0xAA] = Some(OpCode::new("TAX", Implied, 1, op_tax));
    t[0xA8] = Some(OpCode::new("TAY", Implied, 1, op_tay));
    t[0x8A] = Some(OpCode::new("TXA", Implied, 1, op_txa));
    t[0x98] = Some(OpCode::new("TYA", Implied, 1, op_tya));
    t[0xBA] = Some(OpCode::new("TSX", Implied, 1, op_tsx));
    t[0x9A] = Some(OpCode::new("TXS", Implied, 1, op_txs));

    // Logical
    t[0x29] = Some(OpCode::new("AND", Immediate, 2, op_and));
    t[0x25] = Some(OpCode::new("AND", ZeroPage, 2, op_and));
    t[0x35] = Some(OpCode::new("AND", ZeroPageX, 2, op_and));
    t[0x2D] = Some(OpCode::new("AND", Absolute, 3, op_and));
    t[0x3D] = Some(OpCode::new("AND", AbsoluteX, 3, op_and));
    t[0x39] = Some(OpCode::new("AND", AbsoluteY, 3, op_and));
    t[0x21] = Some(OpCode::new("AND", IndirectX, 2, op_and));
    t[0x31] = Some(OpCode::new("AND", IndirectY, 2, op_and));
    t[0x09] = Some(OpCode::new("ORA", Immediate, 2, op_ora));
    t[0x05] = Some(OpCode::new("ORA", ZeroPage, 2, op_ora));
    t[0x15] = Some(OpCode::new("ORA", ZeroPageX, 2, op_ora));
    t[0x0D] = Some(OpCode::new("ORA", Absolute, 3, op_ora));
    t[0x1D] = Some(OpCode::new("ORA", AbsoluteX, 3, op_ora));
    t[0x19] = Some(OpCode::new("ORA", AbsoluteY, 3, op_ora));
    t[0x01] = Some(OpCode::new("ORA", IndirectX, 2, op_ora));
    t[0x11] = Some(OpCode::new("ORA", IndirectY, 2, op_ora));
    t[0x49] = Some(OpCode::new("EOR", Immediate, 2, op_eor));
    t[0x45] = Some(OpCode::new("EOR", ZeroPage, 2, op_eor));
    t[0x55] = Some(OpCode::new("EOR", ZeroPageX, 2, op_eor));
    t[0x4D] = Some(OpCode::new("EOR", Absolute, 3, op_eor));
    t[0x5D] = Some(OpCode::new("EOR", AbsoluteX, 3, op_eor));
    t[0x59] = Some(OpCode::new("EOR", AbsoluteY, 3, op_eor));
    t[0x41] = Some(OpCode::new("EOR", IndirectX, 2, op_eor));
    t[0x51] = Some(OpCode::new("EOR", IndirectY, 2, op_eor));
    t[0x24] = Some(OpCode::new("BIT", ZeroPage, 2, op_bit));
    t[0x2C] = Some(OpCode::new("BIT", Absolute, 3, op_bit));

    // Arithmetic
    t[0x69] = Some(OpCode::new("ADC", Immediate, 2, op_adc));
    t[0x65] = Some(OpCode::new("ADC", ZeroPage, 2, op_adc));
    t[0x75] = Some(OpCode::new("ADC", ZeroPageX, 2, op_adc));
    t[0x6D] = Some(OpCode::new("ADC", Absolute, 3, op_adc));
    t[0x7D] = Some(OpCode::new("ADC", AbsoluteX, 3, op_adc));
    t[0x79] = Some(OpCode::new("ADC", AbsoluteY, 3, op_adc));
    t[0x61] = Some(OpCode::new("ADC", IndirectX, 2, op_adc));
    t[0x71] = Some(OpCode::new("ADC", IndirectY, 2, op_adc));
    t[0xE9] = Some(OpCode::new("SBC", Immediate, 2, op_sbc));
    t[0xE5] = Some(OpCode::new("SBC", ZeroPage, 2, op_sbc));
    t[0xF5] = Some(OpCode::new("SBC", ZeroPageX, 2, op_sbc));
    t[0xED] = Some(OpCode::new("SBC", Absolute, 3, op_sbc));
    t[0xFD] = Some(OpCode::new("SBC", AbsoluteX, 3, op_sbc));
    t[0xF9] = Some(OpCode::new("SBC", AbsoluteY, 3, op_sbc));
    t[0xE1] = Some(OpCode::new("SBC", IndirectX, 2, op_sbc));
    t[0xF1] = Some(OpCode::new("SBC", IndirectY, 2, op_sbc));

    // Compares
    t[0xC9] = Some(OpCode::new("CMP", Immediate, 2, op_cmp));
    t[0xC5] = Some(OpCode::new("CMP", ZeroPage, 2, op_cmp));
    t[0xD5] = Some(OpCode::new("CMP", ZeroPageX, 2, op_cmp));
    t[0xCD] = Some(OpCode::new("CMP", Absolute, 3, op_cmp));
    t[0xDD] = Some(OpCode::new("CMP", AbsoluteX, 3, op_cmp));
    t[0xD9] = Some(OpCode::new("CMP", AbsoluteY, 3, op_cmp));
    t[0xC1] = Some(OpCode::new("CMP", IndirectX, 2, op_cmp));
    t[0xD1] = Some(OpCode::new("CMP", IndirectY, 2, op_cmp));
    t[0xE0] = Some(OpCode::new("CPX", Immediate, 2, op_cpx));
    t[0xE4] = Some(OpCode::new("CPX", ZeroPage, 2, op_cpx));
    t[0xEC] = Some(OpCode::new("CPX", Absolute, 3, op_cpx));
    t[0xC0] = Some(OpCode::new("CPY", Immediate, 2, op_cpy));
    t[0xC4] = Some(OpCode::new("CPY", ZeroPage, 2, op_cpy));
    t[0xCC] = Some(OpCode::new("CPY", Absolute, 3, op_cpy));

    // Shifts & rotates
    t[0x0A] = Some(OpCode::new("ASL", Accumulator, 1, op_asl));
    t[0x06] = Some(OpCode::new("ASL", ZeroPage, 2, op_asl));
    t[0x16] = Some(OpCode::new("ASL", ZeroPageX, 2, op_asl));
    t[0x0E] = Some(OpCode::new("ASL", Absolute, 3, op_asl));
    t[0x1E] = Some(OpCode::new("ASL", AbsoluteX, 3, op_asl));
    t[0x4A] = Some(OpCode::new("LSR", Accumulator, 1, op_lsr));
    t[0x46] = Some(OpCode::new("LSR", ZeroPage, 2, op_lsr));
    t[0x56] = Some(OpCode::new("LSR", ZeroPageX, 2, op_lsr));
    t[0x4E] = Some(OpCode::new("LSR", Absolute, 3, op_lsr));
    t[0x5E] = Some(OpCode::new("LSR", AbsoluteX, 3, op_lsr));
    t[0x2A] = Some(OpCode::new("ROL", Accumulator, 1, op_rol));
    t[0x26] = Some(OpCode::new("ROL", ZeroPage, 2, op_rol));
    t[0x36] = Some(OpCode::new("ROL", ZeroPageX, 2, op_rol));
    t[0x2E] = Some(OpCode::new("ROL", Absolute, 3, op_rol));
    t[0x3E] = Some(OpCode::new("ROL", AbsoluteX, 3, op_rol));
    t[0x6A] = Some(OpCode::new("ROR", Accumulator, 1, op_ror));
    t[0x66] = Some(OpCode::new("ROR", ZeroPage, 2, op_ror));
    t[0x76] = Some(OpCode::new("ROR", ZeroPageX, 2, op_ror));
    t[0x6E] = Some(OpCode::new("ROR", Absolute, 3, op_ror));
    t[0x7E] = Some(OpCode::new("ROR", AbsoluteX, 3, op_ror));

    // Memory & register inc/dec
    t[0xE6] = Some(OpCode::new("INC", ZeroPage, 2, op_inc));
    t[0xF6] = Some(OpCode::new("INC", ZeroPageX, 2, op_inc));
    t[0xEE] = Some(OpCode::new("INC", Absolute, 3, op_inc));
    t[0xFE] = Some(OpCode::new("INC", AbsoluteX, 3, op_inc));
    t[0xC6] = Some(OpCode::new("DEC", ZeroPage, 2, op_dec));
    t[0xD6] = Some(OpCode::new("DEC", ZeroPageX, 2, op_dec));
    t[0xCE] = Some(OpCode::new("DEC", Absolute, 3, op_dec));
    t[0xDE] = Some(OpCode::new("DEC", AbsoluteX, 3, op_dec));
    t[0xE8] = Some(OpCode::new("INX", Implied, 1, op_inx));
    t[0xC8] = Some(OpCode::new("INY", Implied, 1, op_iny));
    t[0xCA] = Some(OpCode::new("DEX", Implied, 1, op_dex));
    t[0x88] = Some(OpCode::new("DEY", Implied, 1, op_dey));

    // Flag operations
    t[0x18] = Some(OpCode::new("CLC", Implied, 1, op_clc));
    t[0x38] = Some(OpCode::new("SEC", Implied, 1, op_sec));
    t[0x58] = Some(OpCode::new("CLI", Implied, 1, op_cli));
    t[0x78] = Some(OpCode::new("SEI", Implied, 1, op_sei));
    t[0xD8] = Some(OpCode::new("CLD", Implied, 1, op_cld));
    t[0xF8] = Some(OpCode::new("SED", Implied, 1, op_sed));
    t[0xB8] = Some(OpCode::new("CLV", Implied, 1, op_clv));

    // Stack
    t[0x48] = Some(OpCode::new("PHA", Implied, 1, op_pha));
    t[0x68] = Some(OpCode::new("PLA", Implied, 1, op_pla));
    t[0x08] = Some(OpCode::new("PHP", Implied, 1, op_php));
    t[0x28] = Some(OpCode::new("PLP", Implied, 1, op_plp));

    // Control flow
    t[0x4C] = Some(OpCode::new("JMP", Absolute, 3, op_jmp));
    t[0x6C] = Some(OpCode::new("JMP", Indirect, 3, op_jmp));
    t[0x20] = Some(OpCode::new("JSR", Absolute, 3, op_jsr));
    t[0x60] = Some(OpCode::new("RTS", Implied, 1, op_rts));
    t[0x40] = Some(OpCode::new("RTI", Implied, 1, op_rti));
    t[0x00] = Some(OpCode::new("BRK", Implied, 1, op_brk));
    t[0xEA] = Some(OpCode::new("NOP", Implied, 1, op_nop));

    // Branches
    t[0x90] = Some(OpCode::new("BCC", Relative, 2, op_bcc));
    t[0xB0] = Some(OpCode::new("BCS", Relative, 2, op_bcs));
    t[0xF0] = Some(OpCode::new("BEQ", Relative, 2, op_beq));
    t[0xD0] = Some(OpCode::new("BNE", Relative, 2, op_bne));
    t[0x30] = Some(OpCode::new("BMI", Relative, 2, op_bmi));
    t[0x10] = Some(OpCode::new("BPL", Relative, 2, op_bpl));
    t[0x70] = Some(OpCode::new("BVS", Relative, 2, op_bvs));
    t[0x50] = Some(OpCode::new("BVC", Relative, 2, op_bvc));

    t
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_all_documented_opcodes() {
        let count = OPCODES.iter().filter(|e| e.is_some()).count();
        assert_eq!(count, 151);
    }

    #[test]
    fn lengths_match_addressing_modes() {
        for entry in OPCODES.iter().flatten() {
            assert_eq!(
                entry.len,
                1 + entry.mode.operand_len(),
                "{} ({:?})",
                entry.mnemonic,
                entry.mode
            );
        }
    }

    #[test]
    fn undocumented_slots_are_empty() {
        assert!(lookup(0x02).is_none());
        assert!(lookup(0xFF).is_none());
    }

    #[test]
    fn known_entries_decode() {
        let lda = lookup(0xA9).unwrap();
        assert_eq!(lda.mnemonic, "LDA");
        assert_eq!(lda.mode, Immediate);
        assert_eq!(lda.len, 2);

        let jmp = lookup(0x6C).unwrap();
        assert_eq!(jmp.mnemonic, "JMP");
        assert_eq!(jmp.mode, Indirect);
    }
}
