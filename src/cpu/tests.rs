use crate::bus::{Bus, BusComponent};
use crate::clock::ClockLine;
use crate::cpu::cpu65C816::{Cpu65C816, StatusFlags};
use crate::cpu::interrupt::{self, InterruptLines, InterruptSource};
use crate::memory::Ram;
use crate::system::CoreMonitor;
use crate::types::u24w;
use crate::{lock_ref, CoreError, EmuRef};
use std::sync::Arc;

const ORIGIN: u16 = 0x8000;

type TestRam = EmuRef<Ram>;

/// Builds a machine with RAM covering banks 0 through 2, the reset vector
/// pointing at `origin`, the remaining vectors pointing at distinct
/// addresses, and the program loaded at `origin`. The power-on reset has
/// already run when this returns.
fn machine_at(origin: u16, program: &[u8]) -> (Cpu65C816, InterruptLines, TestRam) {
    let bus = Bus::create();
    let ram = Ram::create(u24w::new(0x0003_0000), u24w::ZERO);
    {
        let mut ram_lock = lock_ref(&ram);
        ram_lock.load(origin as usize, program);
        ram_lock.load(0xFFE4, &[0x04, 0x90]); // native COP
        ram_lock.load(0xFFE6, &[0x06, 0x90]); // native BRK
        ram_lock.load(0xFFEA, &[0x0A, 0x90]); // native NMI
        ram_lock.load(0xFFEE, &[0x0E, 0x90]); // native IRQ
        ram_lock.load(0xFFF4, &[0x14, 0x90]); // emulation COP
        ram_lock.load(0xFFFA, &[0x1A, 0x90]); // emulation NMI
        ram_lock.load(0xFFFC, &[(origin & 0xFF) as u8, (origin >> 8) as u8]);
        ram_lock.load(0xFFFE, &[0x1E, 0x90]); // emulation IRQ/BRK
    }
    let component: EmuRef<dyn BusComponent> = ram.clone();
    lock_ref(&bus).add_component(component);

    let lines = InterruptLines::new();
    lines.assert_reset();
    let mut cpu = Cpu65C816::new(
        bus,
        ClockLine::new(),
        lines.clone(),
        Arc::new(CoreMonitor::new()),
    );
    cpu.step().unwrap();
    (cpu, lines, ram)
}

fn machine(program: &[u8]) -> (Cpu65C816, InterruptLines, TestRam) {
    machine_at(ORIGIN, program)
}

fn run(cpu: &mut Cpu65C816, instructions: usize) {
    for _ in 0..instructions {
        cpu.step().unwrap();
    }
}

fn stepped_cycles(cpu: &mut Cpu65C816) -> u64 {
    let before = cpu.cycles();
    cpu.step().unwrap();
    cpu.cycles() - before
}

fn peek(ram: &TestRam, address: u32) -> u8 {
    lock_ref(ram).read(u24w::new(address)).0
}

fn poke(ram: &TestRam, address: usize, bytes: &[u8]) {
    lock_ref(ram).load(address, bytes);
}

/*
    Arithmetic
*/

#[test]
fn adc_binary_8bit_sets_overflow() {
    // LDA #$50 / ADC #$50
    let (mut cpu, _, _) = machine(&[0xA9, 0x50, 0x69, 0x50]);
    run(&mut cpu, 2);

    assert_eq!((*cpu.a).0 & 0xFF, 0xA0);
    assert!(!cpu.status.contains(StatusFlags::C));
    assert!(cpu.status.contains(StatusFlags::V));
    assert!(cpu.status.contains(StatusFlags::N));
    assert!(!cpu.status.contains(StatusFlags::Z));
}

#[test]
fn adc_decimal_8bit() {
    // SED / LDA #$25 / ADC #$48
    let (mut cpu, _, _) = machine(&[0xF8, 0xA9, 0x25, 0x69, 0x48]);
    run(&mut cpu, 3);

    assert_eq!((*cpu.a).0 & 0xFF, 0x73);
    assert!(!cpu.status.contains(StatusFlags::C));
    assert!(!cpu.status.contains(StatusFlags::N));
    assert!(!cpu.status.contains(StatusFlags::Z));
}

#[test]
fn adc_decimal_8bit_carries() {
    // SED / SEC / LDA #$99 / ADC #$01
    let (mut cpu, _, _) = machine(&[0xF8, 0x38, 0xA9, 0x99, 0x69, 0x01]);
    run(&mut cpu, 4);

    // 99 + 01 + carry-in = 101 in BCD
    assert_eq!((*cpu.a).0 & 0xFF, 0x01);
    assert!(cpu.status.contains(StatusFlags::C));
}

#[test]
fn adc_decimal_16bit() {
    // CLC / XCE / REP #$20 / SED / LDA #$1234 / ADC #$5678
    let (mut cpu, _, _) = machine(&[
        0x18, 0xFB, 0xC2, 0x20, 0xF8, 0xA9, 0x34, 0x12, 0x69, 0x78, 0x56,
    ]);
    run(&mut cpu, 6);

    assert_eq!((*cpu.a).0, 0x6912);
    assert!(!cpu.status.contains(StatusFlags::C));
}

#[test]
fn sbc_binary_16bit() {
    // CLC / XCE / REP #$20 / LDA #$0100 / SEC / SBC #$0001
    let (mut cpu, _, _) = machine(&[
        0x18, 0xFB, 0xC2, 0x20, 0xA9, 0x00, 0x01, 0x38, 0xE9, 0x01, 0x00,
    ]);
    run(&mut cpu, 6);

    assert_eq!((*cpu.a).0, 0x00FF);
    assert!(cpu.status.contains(StatusFlags::C));
    assert!(!cpu.status.contains(StatusFlags::Z));
    assert!(!cpu.status.contains(StatusFlags::N));
    assert!(!cpu.status.contains(StatusFlags::V));
}

#[test]
fn sbc_decimal_8bit() {
    // SED / SEC / LDA #$42 / SBC #$17
    let (mut cpu, _, _) = machine(&[0xF8, 0x38, 0xA9, 0x42, 0xE9, 0x17]);
    run(&mut cpu, 4);

    assert_eq!((*cpu.a).0 & 0xFF, 0x25);
    assert!(cpu.status.contains(StatusFlags::C));
}

#[test]
fn sbc_decimal_8bit_borrows() {
    // SED / SEC / LDA #$15 / SBC #$27
    let (mut cpu, _, _) = machine(&[0xF8, 0x38, 0xA9, 0x15, 0xE9, 0x27]);
    run(&mut cpu, 4);

    assert_eq!((*cpu.a).0 & 0xFF, 0x88);
    assert!(!cpu.status.contains(StatusFlags::C));
}

#[test]
fn cmp_sets_carry_on_greater_or_equal() {
    // LDA #$40 / CMP #$41 / CMP #$40 / CMP #$3F
    let (mut cpu, _, _) = machine(&[0xA9, 0x40, 0xC9, 0x41, 0xC9, 0x40, 0xC9, 0x3F]);
    run(&mut cpu, 2);
    assert!(!cpu.status.contains(StatusFlags::C));
    assert!(cpu.status.contains(StatusFlags::N));

    run(&mut cpu, 1);
    assert!(cpu.status.contains(StatusFlags::C));
    assert!(cpu.status.contains(StatusFlags::Z));

    run(&mut cpu, 1);
    assert!(cpu.status.contains(StatusFlags::C));
    assert!(!cpu.status.contains(StatusFlags::Z));
}

#[test]
fn cpx_16bit() {
    // CLC / XCE / REP #$10 / LDX #$1234 / CPX #$1233
    let (mut cpu, _, _) = machine(&[
        0x18, 0xFB, 0xC2, 0x10, 0xA2, 0x34, 0x12, 0xE0, 0x33, 0x12,
    ]);
    run(&mut cpu, 5);

    assert!(cpu.status.contains(StatusFlags::C));
    assert!(!cpu.status.contains(StatusFlags::Z));
}

/*
    Loads, stores and width rules
*/

#[test]
fn lda_8bit_preserves_high_byte() {
    // CLC / XCE / REP #$20 / LDA #$1234 / SEP #$20 / LDA #$56
    let (mut cpu, _, _) = machine(&[
        0x18, 0xFB, 0xC2, 0x20, 0xA9, 0x34, 0x12, 0xE2, 0x20, 0xA9, 0x56,
    ]);
    run(&mut cpu, 6);

    assert_eq!((*cpu.a).0, 0x1256);
}

#[test]
fn sep_zeroes_index_high_bytes() {
    // CLC / XCE / REP #$10 / LDX #$1234 / SEP #$10
    let (mut cpu, _, _) = machine(&[0x18, 0xFB, 0xC2, 0x10, 0xA2, 0x34, 0x12, 0xE2, 0x10]);
    run(&mut cpu, 5);

    assert_eq!((*cpu.x).0, 0x0034);
}

#[test]
fn rep_cannot_widen_registers_in_emulation_mode() {
    // REP #$30
    let (mut cpu, _, _) = machine(&[0xC2, 0x30]);
    run(&mut cpu, 1);

    assert!(cpu.status.contains(StatusFlags::M));
    assert!(cpu.status.contains(StatusFlags::X));
    assert!(cpu.accumulator_is_8bit());
    assert!(cpu.indices_are_8bit());
}

#[test]
fn stz_clears_memory() {
    let (mut cpu, _, ram) = machine(&[0x64, 0x42]);
    poke(&ram, 0x42, &[0x55]);
    run(&mut cpu, 1);

    assert_eq!(peek(&ram, 0x42), 0x00);
}

#[test]
fn inc_dec_memory() {
    // LDA #$FF / STA $40 / INC $40 / DEC $41
    let (mut cpu, _, ram) = machine(&[0xA9, 0xFF, 0x85, 0x40, 0xE6, 0x40, 0xC6, 0x41]);
    poke(&ram, 0x41, &[0x01]);
    run(&mut cpu, 3);

    assert_eq!(peek(&ram, 0x40), 0x00);
    assert!(cpu.status.contains(StatusFlags::Z));

    run(&mut cpu, 1);
    assert_eq!(peek(&ram, 0x41), 0x00);
    assert!(cpu.status.contains(StatusFlags::Z));
}

#[test]
fn asl_memory_cycles() {
    // ASL $4000
    let (mut cpu, _, ram) = machine(&[0x0E, 0x00, 0x40]);
    poke(&ram, 0x4000, &[0xC1]);

    assert_eq!(stepped_cycles(&mut cpu), 6);
    assert_eq!(peek(&ram, 0x4000), 0x82);
    assert!(cpu.status.contains(StatusFlags::C));
    assert!(cpu.status.contains(StatusFlags::N));
}

#[test]
fn rotate_through_carry() {
    // SEC / ROL A -> carry shifts into bit 0
    let (mut cpu, _, _) = machine(&[0x38, 0x2A, 0x6A]);
    run(&mut cpu, 2);
    assert_eq!((*cpu.a).0 & 0xFF, 0x01);
    assert!(!cpu.status.contains(StatusFlags::C));

    // ROR A -> bit 0 back into carry
    run(&mut cpu, 1);
    assert_eq!((*cpu.a).0 & 0xFF, 0x00);
    assert!(cpu.status.contains(StatusFlags::C));
    assert!(cpu.status.contains(StatusFlags::Z));
}

#[test]
fn trb_tsb() {
    // LDA #$0F / TRB $40 / TSB $41
    let (mut cpu, _, ram) = machine(&[0xA9, 0x0F, 0x14, 0x40, 0x04, 0x41]);
    poke(&ram, 0x40, &[0xFF]);
    run(&mut cpu, 2);

    assert_eq!(peek(&ram, 0x40), 0xF0);
    assert!(!cpu.status.contains(StatusFlags::Z));

    run(&mut cpu, 1);
    assert_eq!(peek(&ram, 0x41), 0x0F);
    assert!(cpu.status.contains(StatusFlags::Z));
}

#[test]
fn bit_immediate_only_affects_zero() {
    // LDA #$0F / BIT #$F0
    let (mut cpu, _, _) = machine(&[0xA9, 0x0F, 0x89, 0xF0]);
    run(&mut cpu, 2);

    assert!(cpu.status.contains(StatusFlags::Z));
    assert!(!cpu.status.contains(StatusFlags::N));
    assert!(!cpu.status.contains(StatusFlags::V));
}

#[test]
fn bit_memory_sets_n_and_v_from_operand() {
    // LDA #$0F / BIT $40
    let (mut cpu, _, ram) = machine(&[0xA9, 0x0F, 0x24, 0x40]);
    poke(&ram, 0x40, &[0xC0]);
    run(&mut cpu, 2);

    assert!(cpu.status.contains(StatusFlags::Z));
    assert!(cpu.status.contains(StatusFlags::N));
    assert!(cpu.status.contains(StatusFlags::V));
}

/*
    Addressing modes and cycle accounting
*/

#[test]
fn immediate_width_follows_m_flag() {
    // LDA #$42 (2 cycles), then native 16-bit LDA #$1234 (3 cycles)
    let (mut cpu, _, _) = machine(&[0xA9, 0x42, 0x18, 0xFB, 0xC2, 0x20, 0xA9, 0x34, 0x12]);
    assert_eq!(stepped_cycles(&mut cpu), 2);
    run(&mut cpu, 3);
    assert_eq!(stepped_cycles(&mut cpu), 3);
    assert_eq!((*cpu.a).0, 0x1234);
}

#[test]
fn direct_page_low_byte_penalty() {
    // LDA $10 with DP = 0, then with DP = $0001
    let (mut cpu, _, ram) = machine(&[
        0xA5, 0x10, // LDA $10
        0x18, 0xFB, 0xC2, 0x20, // native, 16-bit A
        0xA9, 0x01, 0x00, // LDA #$0001
        0x5B, // TCD
        0xA5, 0x10, // LDA $10 (DL != 0 now, 16-bit)
    ]);
    poke(&ram, 0x10, &[0x99, 0x11]);

    assert_eq!(stepped_cycles(&mut cpu), 3);
    assert_eq!((*cpu.a).0 & 0xFF, 0x99);

    run(&mut cpu, 5);
    // 16-bit read adds one cycle, DL != 0 adds another
    assert_eq!(stepped_cycles(&mut cpu), 5);
    assert_eq!((*cpu.dp).0, 0x0001);
}

#[test]
fn direct_indexed_wraps_in_page_when_emulated() {
    // LDA #$02 / XBA / LDA #$00 / TCD -> DP = $0200
    // LDX #$05 / LDA $FE,X -> wraps to $0203 inside the direct page
    let (mut cpu, _, ram) = machine(&[
        0xA9, 0x02, 0xEB, 0xA9, 0x00, 0x5B, 0xA2, 0x05, 0xB5, 0xFE,
    ]);
    poke(&ram, 0x0203, &[0x77]);
    run(&mut cpu, 6);

    assert_eq!((*cpu.a).0 & 0xFF, 0x77);
}

#[test]
fn indirect_y_page_cross_penalty() {
    // LDY #$20 / LDA ($10),Y
    let (mut cpu, _, ram) = machine(&[0xA0, 0x20, 0xB1, 0x10]);
    poke(&ram, 0x10, &[0xF0, 0x20]);
    poke(&ram, 0x2110, &[0x5A]);
    run(&mut cpu, 1);

    assert_eq!(stepped_cycles(&mut cpu), 6);
    assert_eq!((*cpu.a).0 & 0xFF, 0x5A);

    let (mut cpu, _, ram) = machine(&[0xA0, 0x20, 0xB1, 0x10]);
    poke(&ram, 0x10, &[0x00, 0x20]);
    poke(&ram, 0x2020, &[0xA5]);
    run(&mut cpu, 1);

    assert_eq!(stepped_cycles(&mut cpu), 5);
    assert_eq!((*cpu.a).0 & 0xFF, 0xA5);
}

#[test]
fn absolute_indexed_penalties() {
    // LDX #$20 / LDA $4000,X (no cross) / LDA $40F0,X (cross) /
    // LDA #$77 / STA $4000,X (store always pays)
    let (mut cpu, _, ram) = machine(&[
        0xA2, 0x20, 0xBD, 0x00, 0x40, 0xBD, 0xF0, 0x40, 0xA9, 0x77, 0x9D, 0x00, 0x40,
    ]);
    poke(&ram, 0x4020, &[0x01]);
    poke(&ram, 0x4110, &[0x02]);
    run(&mut cpu, 1);

    assert_eq!(stepped_cycles(&mut cpu), 4);
    assert_eq!(stepped_cycles(&mut cpu), 5);
    run(&mut cpu, 1);
    assert_eq!(stepped_cycles(&mut cpu), 5);
    assert_eq!(peek(&ram, 0x4020), 0x77);
}

#[test]
fn absolute_long_addressing() {
    // LDA $011234
    let (mut cpu, _, ram) = machine(&[0xAF, 0x34, 0x12, 0x01]);
    poke(&ram, 0x011234, &[0x99]);

    assert_eq!(stepped_cycles(&mut cpu), 5);
    assert_eq!((*cpu.a).0 & 0xFF, 0x99);
}

#[test]
fn direct_indirect_long_addressing() {
    // LDA [$20]
    let (mut cpu, _, ram) = machine(&[0xA7, 0x20]);
    poke(&ram, 0x20, &[0x00, 0x30, 0x01]);
    poke(&ram, 0x013000, &[0x42]);

    assert_eq!(stepped_cycles(&mut cpu), 6);
    assert_eq!((*cpu.a).0 & 0xFF, 0x42);
}

#[test]
fn stack_relative_addressing() {
    // LDX #$FF / TXS / LDA #$42 / PHA / LDA #$00 / LDA $01,S
    let (mut cpu, _, _) = machine(&[
        0xA2, 0xFF, 0x9A, 0xA9, 0x42, 0x48, 0xA9, 0x00, 0xA3, 0x01,
    ]);
    run(&mut cpu, 5);

    assert_eq!(stepped_cycles(&mut cpu), 4);
    assert_eq!((*cpu.a).0 & 0xFF, 0x42);
}

#[test]
fn stack_relative_indirect_indexed() {
    // LDX #$80 / TXS / LDY #$10 / LDA ($01,S),Y
    let (mut cpu, _, ram) = machine(&[0xA2, 0x80, 0x9A, 0xA0, 0x10, 0xB3, 0x01]);
    poke(&ram, 0x0181, &[0x00, 0x30]);
    poke(&ram, 0x3010, &[0x88]);
    run(&mut cpu, 3);

    assert_eq!(stepped_cycles(&mut cpu), 7);
    assert_eq!((*cpu.a).0 & 0xFF, 0x88);
}

#[test]
fn open_bus_read_returns_last_data() {
    // LDA $031234 - outside the mapped RAM, so the last byte on the bus
    // (the operand's bank byte) is read back.
    let (mut cpu, _, _) = machine(&[0xAF, 0x34, 0x12, 0x03]);
    run(&mut cpu, 1);

    assert_eq!((*cpu.a).0 & 0xFF, 0x03);
}

/*
    Branches and jumps
*/

#[test]
fn branch_page_cross_costs_extra_cycle_in_emulation() {
    // LDA #$00 / BEQ +$20 with the branch computed at PC = $10F0
    let (mut cpu, _, _) = machine_at(0x10EC, &[0xA9, 0x00, 0xF0, 0x20]);
    run(&mut cpu, 1);

    assert_eq!(stepped_cycles(&mut cpu), 4);
    assert_eq!(cpu.pc.0, 0x1110);

    // Same branch without a page crossing
    let (mut cpu, _, _) = machine_at(0x1000, &[0xA9, 0x00, 0xF0, 0x20]);
    run(&mut cpu, 1);

    assert_eq!(stepped_cycles(&mut cpu), 3);
    assert_eq!(cpu.pc.0, 0x1024);
}

#[test]
fn branch_not_taken_costs_fetch_only() {
    // LDA #$01 / BEQ +$20
    let (mut cpu, _, _) = machine(&[0xA9, 0x01, 0xF0, 0x20]);
    run(&mut cpu, 1);

    assert_eq!(stepped_cycles(&mut cpu), 2);
    assert_eq!(cpu.pc.0, ORIGIN + 4);
}

#[test]
fn brl_is_unconditional() {
    // BRL +$0120
    let (mut cpu, _, _) = machine(&[0x82, 0x20, 0x01]);

    assert_eq!(stepped_cycles(&mut cpu), 4);
    assert_eq!(cpu.pc.0, ORIGIN + 3 + 0x0120);
}

#[test]
fn jsr_and_rts() {
    // LDX #$FF / TXS / JSR $8010 ... $8010: LDA #$33 / RTS ... then LDA #$55
    let (mut cpu, _, ram) = machine(&[
        0xA2, 0xFF, 0x9A, 0x20, 0x10, 0x80, 0xA9, 0x55,
    ]);
    poke(&ram, 0x8010, &[0xA9, 0x33, 0x60]);
    run(&mut cpu, 2);

    assert_eq!(stepped_cycles(&mut cpu), 6);
    assert_eq!(cpu.pc.0, 0x8010);
    assert_eq!(peek(&ram, 0x01FF), 0x80);
    assert_eq!(peek(&ram, 0x01FE), 0x05);

    run(&mut cpu, 1);
    assert_eq!(stepped_cycles(&mut cpu), 6);
    assert_eq!(cpu.pc.0, 0x8006);

    run(&mut cpu, 1);
    assert_eq!((*cpu.a).0 & 0xFF, 0x55);
}

#[test]
fn jsl_and_rtl() {
    // LDX #$FF / TXS / JSL $013000 ... $013000: LDA #$77 / RTL
    let (mut cpu, _, ram) = machine(&[0xA2, 0xFF, 0x9A, 0x22, 0x00, 0x30, 0x01]);
    poke(&ram, 0x013000, &[0xA9, 0x77, 0x6B]);
    run(&mut cpu, 2);

    assert_eq!(stepped_cycles(&mut cpu), 8);
    assert_eq!(cpu.pb.0, 0x01);
    assert_eq!(cpu.pc.0, 0x3000);
    assert_eq!(peek(&ram, 0x01FF), 0x00);
    assert_eq!(peek(&ram, 0x01FE), 0x80);
    assert_eq!(peek(&ram, 0x01FD), 0x06);

    run(&mut cpu, 1);
    assert_eq!(stepped_cycles(&mut cpu), 6);
    assert_eq!(cpu.pb.0, 0x00);
    assert_eq!(cpu.pc.0, 0x8007);
}

#[test]
fn jmp_absolute_indirect() {
    let (mut cpu, _, ram) = machine(&[0x6C, 0x00, 0x50]);
    poke(&ram, 0x5000, &[0x00, 0x60]);

    assert_eq!(stepped_cycles(&mut cpu), 5);
    assert_eq!(cpu.pc.0, 0x6000);
    assert_eq!(cpu.pb.0, 0x00);
}

#[test]
fn jml_absolute_indirect_long() {
    let (mut cpu, _, ram) = machine(&[0xDC, 0x00, 0x50]);
    poke(&ram, 0x5000, &[0x00, 0x60, 0x01]);

    assert_eq!(stepped_cycles(&mut cpu), 6);
    assert_eq!(cpu.pc.0, 0x6000);
    assert_eq!(cpu.pb.0, 0x01);
}

#[test]
fn jmp_indexed_indirect_uses_program_bank() {
    // LDX #$04 / JMP ($4FFC,X)
    let (mut cpu, _, ram) = machine(&[0xA2, 0x04, 0x7C, 0xFC, 0x4F]);
    poke(&ram, 0x5000, &[0x00, 0x60]);
    run(&mut cpu, 1);

    assert_eq!(stepped_cycles(&mut cpu), 6);
    assert_eq!(cpu.pc.0, 0x6000);
}

/*
    Stack operations
*/

#[test]
fn pha_pla_roundtrip() {
    // LDA #$42 / PHA / LDA #$00 / PLA
    let (mut cpu, _, ram) = machine(&[0xA9, 0x42, 0x48, 0xA9, 0x00, 0x68]);
    run(&mut cpu, 2);
    assert_eq!(peek(&ram, 0x0100), 0x42);

    run(&mut cpu, 1);
    assert!(cpu.status.contains(StatusFlags::Z));

    run(&mut cpu, 1);
    assert_eq!((*cpu.a).0 & 0xFF, 0x42);
    assert!(!cpu.status.contains(StatusFlags::Z));
    assert!(!cpu.status.contains(StatusFlags::N));
}

#[test]
fn php_plp_preserves_status_in_native_mode() {
    // CLC / XCE / SEC / SED / PHP / CLC / CLD / PLP
    let (mut cpu, _, _) = machine(&[0x18, 0xFB, 0x38, 0xF8, 0x08, 0x18, 0xD8, 0x28]);
    run(&mut cpu, 5);
    let pushed = cpu.status;
    run(&mut cpu, 2);
    assert!(!cpu.status.contains(StatusFlags::C));
    assert!(!cpu.status.contains(StatusFlags::D));

    run(&mut cpu, 1);
    assert_eq!(cpu.status.bits(), pushed.bits());
}

#[test]
fn plp_forces_width_bits_in_emulation_mode() {
    // LDA #$00 / PHA / PLP
    let (mut cpu, _, _) = machine(&[0xA9, 0x00, 0x48, 0x28]);
    run(&mut cpu, 3);

    assert!(cpu.status.contains(StatusFlags::M));
    assert!(cpu.status.contains(StatusFlags::X));
    assert_eq!(cpu.status.bits(), 0x30);
}

#[test]
fn emulation_stack_stays_in_page_one() {
    // Pushing at SP = $0100 wraps the low byte; the high byte stays $01.
    let (mut cpu, _, _) = machine(&[0xA9, 0x42, 0x48]);
    run(&mut cpu, 2);

    assert_eq!(cpu.sp.hi().0, 0x01);
    assert_eq!((*cpu.sp).0, 0x01FF);
}

#[test]
fn pea_pushes_immediate_word() {
    // LDX #$FF / TXS / PEA $1234
    let (mut cpu, _, ram) = machine(&[0xA2, 0xFF, 0x9A, 0xF4, 0x34, 0x12]);
    run(&mut cpu, 2);

    assert_eq!(stepped_cycles(&mut cpu), 5);
    assert_eq!(peek(&ram, 0x01FF), 0x12);
    assert_eq!(peek(&ram, 0x01FE), 0x34);
    assert_eq!((*cpu.sp).0, 0x01FD);
}

#[test]
fn pei_pushes_word_at_direct_address() {
    // LDX #$FF / TXS / PEI ($30)
    let (mut cpu, _, ram) = machine(&[0xA2, 0xFF, 0x9A, 0xD4, 0x30]);
    poke(&ram, 0x30, &[0x78, 0x56]);
    run(&mut cpu, 2);

    assert_eq!(stepped_cycles(&mut cpu), 6);
    assert_eq!(peek(&ram, 0x01FF), 0x56);
    assert_eq!(peek(&ram, 0x01FE), 0x78);
}

#[test]
fn per_pushes_pc_relative_address() {
    // LDX #$FF / TXS / PER +$10
    let (mut cpu, _, ram) = machine(&[0xA2, 0xFF, 0x9A, 0x62, 0x10, 0x00]);
    run(&mut cpu, 2);

    assert_eq!(stepped_cycles(&mut cpu), 6);
    // PC after the operand is $8006, plus $10
    assert_eq!(peek(&ram, 0x01FF), 0x80);
    assert_eq!(peek(&ram, 0x01FE), 0x16);
}

#[test]
fn phd_pld_roundtrip() {
    // CLC / XCE / REP #$20 / LDA #$1200 / TCD / PHD / LDA #$0000 / TCD / PLD
    let (mut cpu, _, _) = machine(&[
        0x18, 0xFB, 0xC2, 0x20, 0xA9, 0x00, 0x12, 0x5B, 0x0B, 0xA9, 0x00, 0x00, 0x5B, 0x2B,
    ]);
    run(&mut cpu, 8);
    assert_eq!((*cpu.dp).0, 0x0000);

    run(&mut cpu, 1);
    assert_eq!((*cpu.dp).0, 0x1200);
    assert!(!cpu.status.contains(StatusFlags::Z));
}

#[test]
fn phb_plb_roundtrip() {
    // LDA #$42 / PHA / PLB / PHB / PLA
    let (mut cpu, _, _) = machine(&[0xA9, 0x42, 0x48, 0xAB, 0x8B, 0x68]);
    run(&mut cpu, 4);
    assert_eq!(cpu.db.0, 0x42);

    run(&mut cpu, 2);
    assert_eq!((*cpu.a).0 & 0xFF, 0x42);
}

/*
    Transfers and mode switching
*/

#[test]
fn xce_roundtrip_restores_flags() {
    // SEC / XCE / XCE
    let (mut cpu, _, _) = machine(&[0x38, 0xFB, 0xFB]);
    run(&mut cpu, 3);

    assert!(cpu.emulation_mode);
    assert!(cpu.status.contains(StatusFlags::C));
}

#[test]
fn xce_enters_native_mode() {
    // CLC / XCE
    let (mut cpu, _, _) = machine(&[0x18, 0xFB]);
    run(&mut cpu, 2);

    assert!(!cpu.emulation_mode);
    assert!(cpu.status.contains(StatusFlags::C));
    // Width bits stay set until software clears them
    assert!(cpu.status.contains(StatusFlags::M));
    assert!(cpu.status.contains(StatusFlags::X));
}

#[test]
fn xce_back_to_emulation_applies_invariants() {
    // CLC / XCE / REP #$30 / LDX #$1234 / SEC / XCE
    let (mut cpu, _, _) = machine(&[
        0x18, 0xFB, 0xC2, 0x30, 0xA2, 0x34, 0x12, 0x38, 0xFB,
    ]);
    run(&mut cpu, 6);

    assert!(cpu.emulation_mode);
    assert!(cpu.status.contains(StatusFlags::M));
    assert!(cpu.status.contains(StatusFlags::X));
    assert_eq!(cpu.x.hi().0, 0x00);
    assert_eq!(cpu.sp.hi().0, 0x01);
    assert!(!cpu.status.contains(StatusFlags::C));
}

#[test]
fn tcs_writes_low_byte_only_in_emulation() {
    // LDA #$12 / XBA / LDA #$34 / TCS
    let (mut cpu, _, _) = machine(&[0xA9, 0x12, 0xEB, 0xA9, 0x34, 0x1B]);
    run(&mut cpu, 4);

    assert_eq!((*cpu.sp).0, 0x0134);
}

#[test]
fn tcs_transfers_full_width_in_native_mode() {
    // CLC / XCE / REP #$20 / LDA #$5678 / TCS
    let (mut cpu, _, _) = machine(&[0x18, 0xFB, 0xC2, 0x20, 0xA9, 0x78, 0x56, 0x1B]);
    run(&mut cpu, 5);

    assert_eq!((*cpu.sp).0, 0x5678);
}

#[test]
fn tcd_tdc_tsc_are_16bit() {
    // CLC / XCE / REP #$20 / LDA #$1234 / TCD / LDA #$0000 / TDC
    let (mut cpu, _, _) = machine(&[
        0x18, 0xFB, 0xC2, 0x20, 0xA9, 0x34, 0x12, 0x5B, 0xA9, 0x00, 0x00, 0x7B,
    ]);
    run(&mut cpu, 7);

    assert_eq!((*cpu.a).0, 0x1234);
    assert!(!cpu.status.contains(StatusFlags::Z));
}

#[test]
fn tax_width_follows_index_flag() {
    // CLC / XCE / REP #$10 / LDA #$42 / TAX (A is still 8-bit, X is 16-bit)
    let (mut cpu, _, _) = machine(&[0x18, 0xFB, 0xC2, 0x10, 0xA9, 0x42, 0xAA]);
    run(&mut cpu, 5);

    // The full 16-bit accumulator transfers, high byte included
    assert_eq!((*cpu.x).0, (*cpu.a).0);
}

#[test]
fn xba_swaps_and_sets_flags_from_new_low_byte() {
    // LDA #$80 / XBA
    let (mut cpu, _, _) = machine(&[0xA9, 0x80, 0xEB]);
    run(&mut cpu, 1);

    assert_eq!(stepped_cycles(&mut cpu), 3);
    assert_eq!((*cpu.a).0, 0x8000);
    assert!(cpu.status.contains(StatusFlags::Z));
    assert!(!cpu.status.contains(StatusFlags::N));
}

/*
    Block moves
*/

#[test]
fn mvn_copies_forward() {
    // CLC / XCE / REP #$30 / LDA #$0002 / LDX #$1000 / LDY #$2000 / MVN $02,$01
    let (mut cpu, _, ram) = machine(&[
        0x18, 0xFB, 0xC2, 0x30, 0xA9, 0x02, 0x00, 0xA2, 0x00, 0x10, 0xA0, 0x00, 0x20, 0x54,
        0x02, 0x01,
    ]);
    poke(&ram, 0x011000, &[0xDE, 0xAD, 0xBE]);
    run(&mut cpu, 6);

    let before = cpu.cycles();
    run(&mut cpu, 3);
    assert_eq!(cpu.cycles() - before, 21);

    assert_eq!(peek(&ram, 0x022000), 0xDE);
    assert_eq!(peek(&ram, 0x022001), 0xAD);
    assert_eq!(peek(&ram, 0x022002), 0xBE);
    assert_eq!((*cpu.a).0, 0xFFFF);
    assert_eq!((*cpu.x).0, 0x1003);
    assert_eq!((*cpu.y).0, 0x2003);
    assert_eq!(cpu.db.0, 0x02);
    assert_eq!(cpu.pc.0, ORIGIN + 16);
}

#[test]
fn mvp_copies_backward() {
    // CLC / XCE / REP #$30 / LDA #$0001 / LDX #$1005 / LDY #$2005 / MVP $02,$01
    let (mut cpu, _, ram) = machine(&[
        0x18, 0xFB, 0xC2, 0x30, 0xA9, 0x01, 0x00, 0xA2, 0x05, 0x10, 0xA0, 0x05, 0x20, 0x44,
        0x02, 0x01,
    ]);
    poke(&ram, 0x011004, &[0x11, 0x22]);
    run(&mut cpu, 8);

    assert_eq!(peek(&ram, 0x022005), 0x22);
    assert_eq!(peek(&ram, 0x022004), 0x11);
    assert_eq!((*cpu.a).0, 0xFFFF);
    assert_eq!((*cpu.x).0, 0x1003);
    assert_eq!((*cpu.y).0, 0x2003);
}

/*
    Interrupts, reset and CPU control
*/

#[test]
fn reset_applies_power_on_state_but_keeps_accumulator() {
    // CLC / XCE / LDA #$42 / PHA / PLB / REP #$20 / LDA #$1234
    let (mut cpu, lines, _) = machine(&[
        0x18, 0xFB, 0xA9, 0x42, 0x48, 0xAB, 0xC2, 0x20, 0xA9, 0x34, 0x12,
    ]);
    run(&mut cpu, 7);
    assert_eq!(cpu.db.0, 0x42);
    assert_eq!((*cpu.a).0, 0x1234);

    lines.assert_reset();
    cpu.step().unwrap();

    assert!(cpu.emulation_mode);
    assert!(cpu.status.contains(StatusFlags::I));
    assert!(!cpu.status.contains(StatusFlags::D));
    assert!(cpu.status.contains(StatusFlags::M));
    assert!(cpu.status.contains(StatusFlags::X));
    assert_eq!(cpu.db.0, 0x00);
    assert_eq!(cpu.pb.0, 0x00);
    assert_eq!((*cpu.dp).0, 0x0000);
    assert_eq!(cpu.sp.hi().0, 0x01);
    assert_eq!(cpu.pc.0, ORIGIN);
    assert_eq!((*cpu.a).0, 0x1234);
    assert_eq!(cpu.cycles(), 0);
}

#[test]
fn brk_vectors_through_emulation_vector() {
    // LDX #$FF / TXS / BRK (plus signature byte)
    let (mut cpu, _, ram) = machine(&[0xA2, 0xFF, 0x9A, 0x00, 0xFF]);
    run(&mut cpu, 2);

    assert_eq!(stepped_cycles(&mut cpu), 7);
    assert_eq!(cpu.pc.0, 0x901E);
    assert_eq!(cpu.pb.0, 0x00);
    assert!(cpu.status.contains(StatusFlags::I));
    assert!(!cpu.status.contains(StatusFlags::D));
    // Return address skips the signature byte
    assert_eq!(peek(&ram, 0x01FF), 0x80);
    assert_eq!(peek(&ram, 0x01FE), 0x05);
    // The pushed status has the break bit set
    assert_ne!(peek(&ram, 0x01FD) & 0x10, 0);
}

#[test]
fn cop_vectors_through_native_vector() {
    // CLC / XCE / COP (plus signature byte)
    let (mut cpu, _, ram) = machine(&[0x18, 0xFB, 0x02, 0xFF]);
    run(&mut cpu, 2);

    assert_eq!(stepped_cycles(&mut cpu), 8);
    assert_eq!(cpu.pc.0, 0x9004);
    assert_eq!(cpu.pb.0, 0x00);
    // Native entry pushes the program bank first
    assert_eq!(peek(&ram, 0x0100), 0x00);
    assert_eq!(peek(&ram, 0x00FF), 0x80);
    assert_eq!(peek(&ram, 0x00FE), 0x04);
}

#[test]
fn rti_in_emulation_forces_width_bits() {
    // LDX #$FC / TXS / RTI with a stacked status of $00
    let (mut cpu, _, ram) = machine(&[0xA2, 0xFC, 0x9A, 0x40]);
    poke(&ram, 0x01FD, &[0x00, 0x34, 0x12]);
    run(&mut cpu, 2);

    assert_eq!(stepped_cycles(&mut cpu), 6);
    assert_eq!(cpu.pc.0, 0x1234);
    assert!(cpu.status.contains(StatusFlags::M));
    assert!(cpu.status.contains(StatusFlags::X));
}

#[test]
fn rti_in_native_mode_restores_bank() {
    // CLC / XCE / LDX #$FB (X is 8-bit) / TXS / RTI
    let (mut cpu, _, ram) = machine(&[0x18, 0xFB, 0xA2, 0xFB, 0x9A, 0x40]);
    // P, PCL, PCH, PB
    poke(&ram, 0x00FC, &[0x00, 0x34, 0x12, 0x01]);
    run(&mut cpu, 4);

    assert_eq!(stepped_cycles(&mut cpu), 7);
    assert_eq!(cpu.pc.0, 0x1234);
    assert_eq!(cpu.pb.0, 0x01);
    assert!(!cpu.status.contains(StatusFlags::M));
}

#[test]
fn irq_respects_interrupt_disable() {
    // NOP / CLI / NOP
    let (mut cpu, lines, _) = machine(&[0xEA, 0x58, 0xEA]);
    lines.set_irq(true);

    // I is set after reset: the IRQ is held off
    cpu.step().unwrap();
    assert_eq!(cpu.pc.0, ORIGIN + 1);

    lines.set_irq(false);
    cpu.step().unwrap(); // CLI
    lines.set_irq(true);

    let before = cpu.cycles();
    cpu.step().unwrap();
    assert_eq!(cpu.cycles() - before, 7);
    assert_eq!(cpu.pc.0, 0x901E);
    assert!(cpu.status.contains(StatusFlags::I));
}

#[test]
fn nmi_ignores_interrupt_disable() {
    let (mut cpu, lines, _) = machine(&[0xEA]);
    lines.assert_nmi();
    cpu.step().unwrap();

    assert_eq!(cpu.pc.0, 0x901A);
}

#[test]
fn nmi_uses_native_vector_in_native_mode() {
    // CLC / XCE
    let (mut cpu, lines, _) = machine(&[0x18, 0xFB]);
    run(&mut cpu, 2);

    lines.assert_nmi();
    let before = cpu.cycles();
    cpu.step().unwrap();

    // Native entry also pushes the program bank
    assert_eq!(cpu.cycles() - before, 8);
    assert_eq!(cpu.pc.0, 0x900A);
}

#[test]
fn wai_wakes_without_vectoring_when_masked() {
    // WAI / NOP
    let (mut cpu, lines, _) = machine(&[0xCB, 0xEA]);

    assert_eq!(stepped_cycles(&mut cpu), 3);
    assert!(cpu.is_waiting());
    let waiting_pc = cpu.pc.0;

    // An idle boundary consumes one internal cycle
    assert_eq!(stepped_cycles(&mut cpu), 1);
    assert_eq!(cpu.pc.0, waiting_pc);

    // A masked IRQ ends the wait but does not vector
    lines.set_irq(true);
    cpu.step().unwrap();
    assert!(!cpu.is_waiting());
    assert_eq!(cpu.pc.0, waiting_pc);

    lines.set_irq(false);
    cpu.step().unwrap();
    assert_eq!(cpu.pc.0, waiting_pc + 1);
}

#[test]
fn wai_vectors_when_interrupts_are_enabled() {
    // CLI / WAI
    let (mut cpu, lines, _) = machine(&[0x58, 0xCB]);
    run(&mut cpu, 2);
    assert!(cpu.is_waiting());

    lines.set_irq(true);
    cpu.step().unwrap();

    assert!(!cpu.is_waiting());
    assert_eq!(cpu.pc.0, 0x901E);
}

#[test]
fn stp_halts_until_reset() {
    let (mut cpu, lines, _) = machine(&[0xDB, 0xEA]);

    assert_eq!(stepped_cycles(&mut cpu), 3);
    assert!(cpu.is_stopped());
    let halted_pc = cpu.pc.0;

    // Nothing executes while stopped
    assert_eq!(stepped_cycles(&mut cpu), 0);
    assert_eq!(cpu.pc.0, halted_pc);

    lines.assert_nmi();
    cpu.step().unwrap();
    assert_eq!(cpu.pc.0, halted_pc);

    lines.assert_reset();
    cpu.step().unwrap();
    assert!(!cpu.is_stopped());
    assert_eq!(cpu.pc.0, ORIGIN);
}

#[test]
fn reset_vector_is_invalid_in_native_mode() {
    assert!(matches!(
        interrupt::vector_for(InterruptSource::Reset, false),
        Err(CoreError::InvalidInterruptSelection(_))
    ));
    assert_eq!(
        interrupt::vector_for(InterruptSource::Reset, true).unwrap(),
        u24w::new(0xFFFC)
    );
}

/*
    Trace output
*/

#[test]
fn status_line_format() {
    let (cpu, _, _) = machine(&[0xEA]);
    let line = cpu.to_string();

    assert!(line.starts_with("A:0000"));
    assert!(line.contains("SP:0100"));
    assert!(line.contains("PC:8000"));
    // N and V clear, '.' and 'B' for the width field, I set from reset
    assert!(line.ends_with("...B.I.. E"));
}

#[test]
fn status_line_in_native_mode() {
    // CLC / XCE / REP #$30
    let (mut cpu, _, _) = machine(&[0x18, 0xFB, 0xC2, 0x30]);
    run(&mut cpu, 3);
    let line = cpu.to_string();

    // Both width bits cleared, carry still set from XCE
    assert!(line.ends_with(".....I.C -"));
}
