//! Integration tests driving the assembled machine through its public
//! control surface: registering memory on the bus, stepping, running the
//! core on its own thread against a driven clock, and shutting it down.

use remu816::memory::Ram;
use remu816::system::System;
use remu816::types::u24w;
use remu816::{lock_ref, CoreError, EmuRef};
use std::time::{Duration, Instant};

const ORIGIN: u16 = 0x8000;

fn attach_ram(system: &System, program: &[u8]) -> EmuRef<Ram> {
    let ram = Ram::create(u24w::new(0x0001_0000), u24w::ZERO);
    {
        let mut ram_lock = lock_ref(&ram);
        ram_lock.load(ORIGIN as usize, program);
        ram_lock.load(0xFFFC, &[(ORIGIN & 0xFF) as u8, (ORIGIN >> 8) as u8]);
        ram_lock.load(0xFFFE, &[0x00, 0x90]);
    }
    let component: EmuRef<dyn remu816::bus::BusComponent> = ram.clone();
    lock_ref(&system.bus()).add_component(component);
    ram
}

fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(1));
    }
    false
}

#[test]
fn stepping_executes_the_reset_program() {
    let mut system = System::new();
    // LDA #$42 / STA $0040 / STP
    attach_ram(&system, &[0xA9, 0x42, 0x8D, 0x40, 0x00, 0xDB]);

    system.step().unwrap(); // power-on reset
    assert_eq!(system.registers().pc, ORIGIN);
    assert_eq!(system.cycles(), 0);

    system.step().unwrap();
    let registers = system.registers();
    assert_eq!(registers.a & 0xFF, 0x42);
    assert_eq!(system.cycles(), 2);

    system.step().unwrap();
    assert_eq!(system.cycles(), 6);

    system.step().unwrap();
    assert!(system.stopped());
}

#[test]
fn run_loop_executes_until_stp() {
    let mut system = System::new();
    // An idle loop that settles into STP:
    // LDX #$10 / DEX / BNE -3 / STP
    attach_ram(&system, &[0xA2, 0x10, 0xCA, 0xD0, 0xFD, 0xDB]);

    system.start().unwrap();
    assert!(system.is_running());
    assert!(wait_until(|| system.stopped()));
    system.stop().unwrap();

    assert_eq!(system.registers().x, 0x00);
    assert!(system.cycles() > 0);
}

#[test]
fn step_while_running_is_rejected() {
    let mut system = System::new();
    // BRA -2: spins forever
    attach_ram(&system, &[0x80, 0xFE]);

    system.start().unwrap();
    assert!(matches!(system.step(), Err(CoreError::StepWhileRunning)));
    assert!(matches!(system.start(), Err(CoreError::AlreadyRunning)));

    system.stop().unwrap();
    system.step().unwrap();
}

#[test]
fn driven_clock_paces_the_core() {
    let mut system = System::new();
    // LDA #$01 / STP
    attach_ram(&system, &[0xA9, 0x01, 0xDB]);

    let clock = system.clock();
    clock.set_driven(true);
    system.start().unwrap();

    // Reset consumes two vector-read cycles before the counter is zeroed,
    // then LDA (2) + STP (3) need five more edges.
    for _ in 0..7 {
        clock.pulse();
    }

    assert!(wait_until(|| system.stopped()));
    system.stop().unwrap();
    assert_eq!(system.registers().a & 0xFF, 0x01);
    assert_eq!(system.cycles(), 5);
}

#[test]
fn stop_releases_a_blocked_rendezvous() {
    let mut system = System::new();
    attach_ram(&system, &[0x80, 0xFE]);

    let clock = system.clock();
    clock.set_driven(true);
    system.start().unwrap();

    // No pulses arrive: the core is blocked waiting for an edge.
    std::thread::sleep(Duration::from_millis(20));
    system.stop().unwrap();
    assert!(!system.is_running());
}

#[test]
fn interrupt_latches_are_consumed_at_boundaries() {
    let mut system = System::new();
    // CLI / BRA -2, with the IRQ handler at $9000: STP
    let ram = attach_ram(&system, &[0x58, 0x80, 0xFE]);
    lock_ref(&ram).load(0x9000, &[0xDB]);

    system.start().unwrap();
    system.set_irq(true);
    assert!(wait_until(|| system.stopped()));
    system.stop().unwrap();

    let registers = system.registers();
    assert_eq!(registers.pc, 0x9001);
    assert!(registers.p & 0x04 != 0);
}

#[test]
fn registers_snapshot_renders_a_trace_line() {
    let mut system = System::new();
    attach_ram(&system, &[0xEA]);
    system.step().unwrap();

    let line = system.registers().to_string();
    assert!(line.contains("PC:8000"));
    assert!(line.ends_with(" E"));
}
