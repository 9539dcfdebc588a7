use crate::bus::*;
use crate::types::{Address, Byte};
use crate::*;
use std::num::Wrapping;

/// Flat byte-addressed memory claiming one contiguous bus range.
pub struct Ram {
    data: Vec<Byte>,
    range: AddressRange,
}
impl Ram {
    pub fn new(size: Address, start_address: Address) -> Self {
        Self {
            data: vec![Wrapping(0); size.get() as usize],
            range: AddressRange::new(start_address, start_address + size - Address::ONE),
        }
    }

    #[inline]
    pub fn create(size: Address, start_address: Address) -> EmuRef<Self> {
        make_ref(Self::new(size, start_address))
    }

    /// Copies a byte image into memory, starting at the given offset relative
    /// to the start of the component. Bytes that would fall outside the
    /// backing store are dropped.
    pub fn load(&mut self, offset: usize, bytes: &[u8]) {
        for (index, byte) in bytes.iter().enumerate() {
            if let Some(slot) = self.data.get_mut(offset + index) {
                *slot = Wrapping(*byte);
            }
        }
    }
}
impl BusComponent for Ram {
    #[inline]
    fn read_range(&self) -> Option<AddressRange> {
        Some(self.range)
    }
    #[inline]
    fn write_range(&self) -> Option<AddressRange> {
        Some(self.range)
    }

    #[inline]
    fn read(&mut self, address: Address) -> Byte {
        self.data
            .get(address.get() as usize)
            .copied()
            .unwrap_or(Wrapping(0))
    }

    #[inline]
    fn write(&mut self, address: Address, data: Byte) {
        if let Some(slot) = self.data.get_mut(address.get() as usize) {
            *slot = data;
        }
    }
}
