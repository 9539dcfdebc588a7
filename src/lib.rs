//! Cycle-aware emulation core for the W65C816S 16-bit microprocessor.
//!
//! The crate models the CPU proper: register file, addressing modes, the
//! full native and emulation mode instruction sets, interrupt and reset
//! sequencing, and per-cycle clock accounting. Memory and peripherals attach
//! through the [`bus`] module; the external clock drives execution through
//! [`clock::ClockLine`]. The [`system::System`] type wires everything
//! together and owns the run loop.

#[macro_use]
extern crate bitflags;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

pub mod bus;
pub mod clock;
pub mod cpu;
pub mod memory;
pub mod system;
pub mod types;

/// Shared handle to an emulator component.
///
/// The run loop executes on its own thread while the control surface stays
/// with the caller, so shared components are mutex-guarded.
pub type EmuRef<T> = Arc<Mutex<T>>;

#[inline]
pub fn make_ref<T>(value: T) -> EmuRef<T> {
    Arc::new(Mutex::new(value))
}

#[inline]
pub fn clone_ref<T: ?Sized>(r: &EmuRef<T>) -> EmuRef<T> {
    Arc::clone(r)
}

/// Locks a component handle, recovering the guard if a previous holder
/// panicked. Register state is only ever published between instructions, so
/// a poisoned lock still guards a consistent snapshot.
#[inline]
pub fn lock_ref<T: ?Sized>(r: &EmuRef<T>) -> MutexGuard<'_, T> {
    r.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Error)]
pub enum CoreError {
    /// A single-instruction step was requested while the run loop owns the
    /// core.
    #[error("cannot step the core while the run loop is active")]
    StepWhileRunning,
    /// `start` was called while the run loop is already active.
    #[error("the run loop is already active")]
    AlreadyRunning,
    /// The interrupt controller was asked for a vector that does not exist
    /// in the current mode. Reaching this indicates a defect in the core.
    #[error("no {0} vector exists in the current mode")]
    InvalidInterruptSelection(&'static str),
    #[error("failed to spawn the run loop thread: {0}")]
    RunLoopSpawn(#[from] std::io::Error),
    #[error("the run loop thread panicked")]
    RunLoopPanicked,
}
