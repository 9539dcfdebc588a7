use crate::types::{Address, Byte};
use crate::*;
use std::collections::HashMap;
use std::num::Wrapping;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AddressRange {
    /// First address in the range
    pub start: Address,
    /// Last address in the range
    pub end: Address,
}
impl AddressRange {
    #[inline]
    pub const fn new(start: Address, end: Address) -> Self {
        Self { start, end }
    }

    /// Checks whether a given address falls within the range
    #[inline]
    pub fn contains(&self, address: Address) -> bool {
        (address >= self.start) && (address <= self.end)
    }
}

/// A hardware component that is connected to the 24-bit bus
pub trait BusComponent: Send {
    /// The CPU address range at which this component is active when reading
    fn read_range(&self) -> Option<AddressRange>;
    /// The CPU address range at which this component is active when writing
    fn write_range(&self) -> Option<AddressRange>;

    /// Reads one byte from the component
    ///
    /// The address is given relative to the components address space (CPU address - read range start)
    fn read(&mut self, address: Address) -> Byte;
    /// Writes one byte to the component
    ///
    /// The address is given relative to the components address space (CPU address - write range start)
    fn write(&mut self, address: Address, data: Byte);
}

pub type BusRef = EmuRef<dyn BusComponent>;

pub type BusHandle = u32;

pub struct Bus {
    components: HashMap<BusHandle, BusRef>,
    next_handle: BusHandle,
}
impl Bus {
    #[inline]
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
            next_handle: 0,
        }
    }

    #[inline]
    pub fn create() -> EmuRef<Self> {
        make_ref(Self::new())
    }

    #[inline]
    pub fn add_component(&mut self, component: BusRef) -> BusHandle {
        let handle = self.next_handle;
        self.components.insert(handle, component);
        self.next_handle += 1;
        handle
    }

    #[inline]
    pub fn remove_component(&mut self, handle: BusHandle) -> Option<BusRef> {
        self.components.remove(&handle)
    }

    /// Reads one byte from every component claiming the address.
    ///
    /// Returns `None` when no component claims it; the caller decides what an
    /// open bus reads as. Overlapping claims are merged by ORing.
    pub fn read(&self, address: Address) -> Option<Byte> {
        let mut result: Byte = Wrapping(0);
        let mut claimed = false;

        for component_ref in self.components.values() {
            if let Ok(mut component) = component_ref.try_lock() {
                if let Some(range) = component.read_range() {
                    if range.contains(address) {
                        result |= component.read(address - range.start);
                        claimed = true;
                    }
                }
            }
        }

        if claimed {
            Some(result)
        } else {
            None
        }
    }

    /// Writes one byte to every component claiming the address.
    ///
    /// Returns whether any component claimed it.
    pub fn write(&self, address: Address, data: Byte) -> bool {
        let mut claimed = false;

        for component_ref in self.components.values() {
            if let Ok(mut component) = component_ref.try_lock() {
                if let Some(range) = component.write_range() {
                    if range.contains(address) {
                        component.write(address - range.start, data);
                        claimed = true;
                    }
                }
            }
        }

        claimed
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}
