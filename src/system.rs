use crate::bus::Bus;
use crate::clock::ClockLine;
use crate::cpu::cpu65C816::{Cpu65C816, RegisterSnapshot};
use crate::cpu::interrupt::InterruptLines;
use crate::{clone_ref, CoreError, EmuRef};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;

/// Shared observation point between the core and the control surface.
///
/// The core updates it at every cycle (counter) and at every instruction
/// boundary (flags and register snapshot), so observers never see
/// mid-instruction state.
pub struct CoreMonitor {
    cycles: AtomicU64,
    stopped: AtomicBool,
    waiting: AtomicBool,
    snapshot: Mutex<RegisterSnapshot>,
}

impl CoreMonitor {
    pub fn new() -> Self {
        Self {
            cycles: AtomicU64::new(0),
            stopped: AtomicBool::new(false),
            waiting: AtomicBool::new(false),
            snapshot: Mutex::new(RegisterSnapshot::default()),
        }
    }

    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles.load(Ordering::Acquire)
    }

    #[inline]
    pub fn stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    #[inline]
    pub fn waiting(&self) -> bool {
        self.waiting.load(Ordering::Acquire)
    }

    pub fn snapshot(&self) -> RegisterSnapshot {
        *self
            .snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    pub(crate) fn count_cycle(&self) {
        self.cycles.fetch_add(1, Ordering::AcqRel);
    }

    #[inline]
    pub(crate) fn reset_cycles(&self) {
        self.cycles.store(0, Ordering::Release);
    }

    pub(crate) fn set_state(&self, stopped: bool, waiting: bool) {
        self.stopped.store(stopped, Ordering::Release);
        self.waiting.store(waiting, Ordering::Release);
    }

    pub(crate) fn publish(&self, snapshot: RegisterSnapshot) {
        *self
            .snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = snapshot;
    }
}

impl Default for CoreMonitor {
    fn default() -> Self {
        Self::new()
    }
}

/// The assembled machine: bus, CPU, clock and interrupt lines, plus the run
/// loop that executes the core on its own thread.
///
/// A new system comes up with the reset line asserted, so the first
/// instruction boundary performs the power-on reset sequence.
pub struct System {
    bus: EmuRef<Bus>,
    cpu: Option<Cpu65C816>,
    clock: ClockLine,
    lines: InterruptLines,
    monitor: Arc<CoreMonitor>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<Cpu65C816>>,
}

impl System {
    pub fn new() -> Self {
        let bus = Bus::create();
        let clock = ClockLine::new();
        let lines = InterruptLines::new();
        let monitor = Arc::new(CoreMonitor::new());
        let cpu = Cpu65C816::new(
            clone_ref(&bus),
            clock.clone(),
            lines.clone(),
            Arc::clone(&monitor),
        );
        lines.assert_reset();

        Self {
            bus,
            cpu: Some(cpu),
            clock,
            lines,
            monitor,
            running: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    /// Handle for registering memory and devices.
    pub fn bus(&self) -> EmuRef<Bus> {
        clone_ref(&self.bus)
    }

    /// Handle for the external clock driver.
    pub fn clock(&self) -> ClockLine {
        self.clock.clone()
    }

    /*
        Signal inputs
    */

    pub fn assert_reset(&self) {
        self.lines.assert_reset();
    }

    pub fn assert_nmi(&self) {
        self.lines.assert_nmi();
    }

    pub fn set_irq(&self, asserted: bool) {
        self.lines.set_irq(asserted);
    }

    /*
        Run control
    */

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Spawns the run loop thread. The loop executes instruction boundaries
    /// until stopped, or until the core executes STP.
    pub fn start(&mut self) -> Result<(), CoreError> {
        let mut cpu = match self.cpu.take() {
            Some(cpu) => cpu,
            None => return Err(CoreError::AlreadyRunning),
        };

        self.running.store(true, Ordering::Release);
        self.clock.reopen();

        let running = Arc::clone(&self.running);
        let handle = std::thread::Builder::new()
            .name("w65c816-core".into())
            .spawn(move || {
                while running.load(Ordering::Acquire) {
                    if let Err(error) = cpu.step() {
                        log::error!("core halted on internal fault: {}", error);
                        break;
                    }
                    if cpu.is_stopped() {
                        break;
                    }
                }
                cpu
            });

        match handle {
            Ok(handle) => {
                self.handle = Some(handle);
                Ok(())
            }
            Err(error) => Err(CoreError::RunLoopSpawn(error)),
        }
    }

    /// Stops the run loop, releasing a pending clock rendezvous, and joins
    /// the thread. Stopping an idle system is a no-op.
    pub fn stop(&mut self) -> Result<(), CoreError> {
        self.running.store(false, Ordering::Release);
        self.clock.release();

        if let Some(handle) = self.handle.take() {
            let cpu = handle.join().map_err(|_| CoreError::RunLoopPanicked)?;
            self.cpu = Some(cpu);
        }
        Ok(())
    }

    /// Executes a single instruction boundary. Only valid while the run
    /// loop is not active.
    pub fn step(&mut self) -> Result<(), CoreError> {
        match self.cpu.as_mut() {
            Some(cpu) => cpu.step(),
            None => Err(CoreError::StepWhileRunning),
        }
    }

    /*
        State queries
    */

    pub fn cycles(&self) -> u64 {
        self.monitor.cycles()
    }

    pub fn registers(&self) -> RegisterSnapshot {
        self.monitor.snapshot()
    }

    pub fn stopped(&self) -> bool {
        self.monitor.stopped()
    }

    pub fn waiting(&self) -> bool {
        self.monitor.waiting()
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for System {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}
