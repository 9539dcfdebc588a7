use crate::cpu::cpu65C816::Address;
use crate::types::u24w;
use crate::CoreError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use strum_macros::{AsRefStr, Display, IntoStaticStr};

pub const COP_VECTOR_NAT: Address = u24w::new(0xFFE4);
pub const BRK_VECTOR_NAT: Address = u24w::new(0xFFE6);
pub const ABORT_VECTOR_NAT: Address = u24w::new(0xFFE8);
pub const NMI_VECTOR_NAT: Address = u24w::new(0xFFEA);
pub const IRQ_VECTOR_NAT: Address = u24w::new(0xFFEE);

pub const COP_VECTOR_EMU: Address = u24w::new(0xFFF4);
pub const ABORT_VECTOR_EMU: Address = u24w::new(0xFFF8);
pub const NMI_VECTOR_EMU: Address = u24w::new(0xFFFA);
pub const IRQ_BRK_VECTOR_EMU: Address = u24w::new(0xFFFE);

pub const RESET_VECTOR: Address = u24w::new(0xFFFC);

/// The event asking the core to vector.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Display, AsRefStr, IntoStaticStr)]
pub enum InterruptSource {
    Reset,
    Abort,
    Nmi,
    Irq,
    Brk,
    Cop,
}

/// Selects the vector for an interrupt source in the given mode.
///
/// Reset only exists as an emulation-mode vector; the reset sequence forces
/// `E = 1` before vectoring, so asking for it in native mode indicates a
/// defect in the controller.
pub fn vector_for(source: InterruptSource, emulation: bool) -> Result<Address, CoreError> {
    match (source, emulation) {
        (InterruptSource::Reset, true) => Ok(RESET_VECTOR),
        (InterruptSource::Reset, false) => {
            Err(CoreError::InvalidInterruptSelection(source.into()))
        }
        (InterruptSource::Abort, true) => Ok(ABORT_VECTOR_EMU),
        (InterruptSource::Abort, false) => Ok(ABORT_VECTOR_NAT),
        (InterruptSource::Nmi, true) => Ok(NMI_VECTOR_EMU),
        (InterruptSource::Nmi, false) => Ok(NMI_VECTOR_NAT),
        (InterruptSource::Irq, true) | (InterruptSource::Brk, true) => Ok(IRQ_BRK_VECTOR_EMU),
        (InterruptSource::Irq, false) => Ok(IRQ_VECTOR_NAT),
        (InterruptSource::Brk, false) => Ok(BRK_VECTOR_NAT),
        (InterruptSource::Cop, true) => Ok(COP_VECTOR_EMU),
        (InterruptSource::Cop, false) => Ok(COP_VECTOR_NAT),
    }
}

/// The latched interrupt inputs of the core.
///
/// External drivers assert these from any thread; the core consumes them at
/// instruction boundaries. Reset and NMI latch an edge and clear when
/// consumed; IRQ is a level that stays asserted until the device deasserts
/// it.
#[derive(Clone)]
pub struct InterruptLines {
    shared: Arc<Lines>,
}

struct Lines {
    reset: AtomicBool,
    nmi: AtomicBool,
    irq: AtomicBool,
}

impl InterruptLines {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Lines {
                reset: AtomicBool::new(false),
                nmi: AtomicBool::new(false),
                irq: AtomicBool::new(false),
            }),
        }
    }

    pub fn assert_reset(&self) {
        self.shared.reset.store(true, Ordering::Release);
    }

    pub fn assert_nmi(&self) {
        self.shared.nmi.store(true, Ordering::Release);
    }

    pub fn set_irq(&self, asserted: bool) {
        self.shared.irq.store(asserted, Ordering::Release);
    }

    pub(crate) fn take_reset(&self) -> bool {
        self.shared.reset.swap(false, Ordering::AcqRel)
    }

    pub(crate) fn take_nmi(&self) -> bool {
        self.shared.nmi.swap(false, Ordering::AcqRel)
    }

    pub(crate) fn irq_pending(&self) -> bool {
        self.shared.irq.load(Ordering::Acquire)
    }
}

impl Default for InterruptLines {
    fn default() -> Self {
        Self::new()
    }
}
