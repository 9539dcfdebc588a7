use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};

/// The clock input of the core.
///
/// Every modeled cycle (each byte read, each byte write, each internal
/// cycle) rendezvouses with this line: the core consumes one posted edge, or
/// blocks until the driver posts one. A line starts out free-running so that
/// stepping and tests work without a driver; call [`set_driven`] before
/// attaching an external clock source.
///
/// [`set_driven`]: ClockLine::set_driven
#[derive(Clone)]
pub struct ClockLine {
    shared: Arc<ClockShared>,
}

struct ClockShared {
    driven: AtomicBool,
    open: AtomicBool,
    ticks: Mutex<u64>,
    edge: Condvar,
}

impl ClockLine {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(ClockShared {
                driven: AtomicBool::new(false),
                open: AtomicBool::new(true),
                ticks: Mutex::new(0),
                edge: Condvar::new(),
            }),
        }
    }

    /// Switches between free-running and externally driven operation.
    pub fn set_driven(&self, driven: bool) {
        self.shared.driven.store(driven, Ordering::Release);
        self.shared.edge.notify_all();
    }

    pub fn is_driven(&self) -> bool {
        self.shared.driven.load(Ordering::Acquire)
    }

    /// Posts one clock edge. Edges posted while the core is busy are not
    /// lost; the core consumes the backlog one cycle at a time.
    pub fn pulse(&self) {
        let mut ticks = self
            .shared
            .ticks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *ticks += 1;
        self.shared.edge.notify_all();
    }

    /// Releases a core blocked in [`wait_edge`], used when shutting the run
    /// loop down. The line stays released until [`reopen`] is called.
    ///
    /// [`wait_edge`]: ClockLine::wait_edge
    /// [`reopen`]: ClockLine::reopen
    pub(crate) fn release(&self) {
        self.shared.open.store(false, Ordering::Release);
        self.shared.edge.notify_all();
    }

    pub(crate) fn reopen(&self) {
        self.shared.open.store(true, Ordering::Release);
    }

    /// Blocks until an unconsumed edge is available, then consumes it.
    /// Returns immediately when the line is free-running or released.
    pub(crate) fn wait_edge(&self, seen: &mut u64) {
        if !self.is_driven() {
            return;
        }

        let mut ticks = self
            .shared
            .ticks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        while *ticks <= *seen
            && self.shared.open.load(Ordering::Acquire)
            && self.is_driven()
        {
            ticks = self
                .shared
                .edge
                .wait(ticks)
                .unwrap_or_else(PoisonError::into_inner);
        }
        if *ticks > *seen {
            *seen += 1;
        }
    }
}

impl Default for ClockLine {
    fn default() -> Self {
        Self::new()
    }
}
