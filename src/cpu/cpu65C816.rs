use crate::bus::Bus;
use crate::clock::ClockLine;
use crate::cpu::interrupt::{self, InterruptLines, InterruptSource};
use crate::system::CoreMonitor;
use crate::types::*;
use crate::{lock_ref, CoreError, EmuRef};
use std::num::Wrapping;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use strum_macros::{AsRefStr, Display, IntoStaticStr};

pub use crate::types::{Address, Byte, Word};

/// A 16-bit register with independently addressable halves.
#[derive(Clone, Copy, Default)]
pub(crate) struct Register(Word);
impl Register {
    #[inline]
    const fn new() -> Self {
        Self(Wrapping(0))
    }

    #[inline]
    pub(crate) fn lo(self) -> Byte {
        Wrapping(self.0 .0 as u8)
    }
    #[inline]
    pub(crate) fn hi(self) -> Byte {
        Wrapping((self.0 .0 >> 8) as u8)
    }

    #[inline]
    pub(crate) fn set_lo(&mut self, value: Byte) {
        self.0 = (self.0 & Wrapping(0xFF00)) | Wrapping(value.0 as u16);
    }
    #[inline]
    pub(crate) fn set_hi(&mut self, value: Byte) {
        self.0 = (self.0 & Wrapping(0x00FF)) | Wrapping((value.0 as u16) << 8);
    }
}
impl Deref for Register {
    type Target = Word;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for Register {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

bitflags! {
    pub struct StatusFlags : u8 {
        /// Carry
        const C = 0b00000001;
        /// Zero
        const Z = 0b00000010;
        /// IRQ disable
        const I = 0b00000100;
        /// Decimal mode
        const D = 0b00001000;
        /// Index register select
        const X = 0b00010000;
        /// Memory select
        const M = 0b00100000;
        /// Overflow
        const V = 0b01000000;
        /// Negative
        const N = 0b10000000;

        /*
            Flags in emulation mode
        */

        /// Break
        const B = 0b00010000;
        /// Unused
        const U = 0b00100000;
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Display, AsRefStr, IntoStaticStr)]
pub enum AddressingMode {
    /// Implied / stack
    IMP = 0,
    /// Accumulator
    ACC = 1,
    /// Immediate byte
    IMB = 2,
    /// Immediate word
    IMW = 3,
    /// Immediate at accumulator width
    IMM = 4,
    /// Immediate at index width
    IMX = 5,
    /// PC-relative
    REL = 6,
    /// PC-relative long
    RLL = 7,
    /// Direct
    DIR = 8,
    /// Direct + X register offset
    DRX = 9,
    /// Direct + Y register offset
    DRY = 10,
    /// Direct indirect
    DIN = 11,
    /// (Direct + X register offset) indirect
    DIX = 12,
    /// Direct indirect + Y register offset
    DIY = 13,
    /// Direct indirect long
    DIL = 14,
    /// Direct indirect long + Y register offset
    DLY = 15,
    /// Absolute
    ABS = 16,
    /// Absolute + X register offset
    ABX = 17,
    /// Absolute + Y register offset
    ABY = 18,
    /// Absolute long
    ABL = 19,
    /// Absolute long + X register offset
    ALX = 20,
    /// Absolute indirect
    IND = 21,
    /// Absolute indirect long
    INL = 22,
    /// (Absolute + X register offset) indirect
    IAX = 23,
    /// Stack-relative
    SRL = 24,
    /// (Stack-relative) indirect + Y register offset
    SRY = 25,
    /// Block move bank pair
    BLK = 26,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Display, AsRefStr, IntoStaticStr)]
pub enum BaseInstruction {
    LDA = 0,
    LDX = 1,
    LDY = 2,
    STA = 3,
    STX = 4,
    STY = 5,
    STZ = 6,
    TAX = 7,
    TAY = 8,
    TSX = 9,
    TXA = 10,
    TXS = 11,
    TXY = 12,
    TYA = 13,
    TYX = 14,
    TCD = 15,
    TCS = 16,
    TDC = 17,
    TSC = 18,
    PHA = 19,
    PHB = 20,
    PHD = 21,
    PHK = 22,
    PHP = 23,
    PHX = 24,
    PHY = 25,
    PLA = 26,
    PLB = 27,
    PLD = 28,
    PLP = 29,
    PLX = 30,
    PLY = 31,
    PEA = 32,
    PEI = 33,
    PER = 34,
    AND = 35,
    EOR = 36,
    ORA = 37,
    BIT = 38,
    ADC = 39,
    SBC = 40,
    CMP = 41,
    CPX = 42,
    CPY = 43,
    INC = 44,
    INX = 45,
    INY = 46,
    DEC = 47,
    DEX = 48,
    DEY = 49,
    ASL = 50,
    LSR = 51,
    ROL = 52,
    ROR = 53,
    TRB = 54,
    TSB = 55,
    JMP = 56,
    JSR = 57,
    JSL = 58,
    RTS = 59,
    RTL = 60,
    BCC = 61,
    BCS = 62,
    BEQ = 63,
    BMI = 64,
    BNE = 65,
    BPL = 66,
    BRA = 67,
    BRL = 68,
    BVC = 69,
    BVS = 70,
    CLC = 71,
    CLD = 72,
    CLI = 73,
    CLV = 74,
    SEC = 75,
    SED = 76,
    SEI = 77,
    REP = 78,
    SEP = 79,
    BRK = 80,
    COP = 81,
    RTI = 82,
    MVN = 83,
    MVP = 84,
    NOP = 85,
    WDM = 86,
    XBA = 87,
    XCE = 88,
    STP = 89,
    WAI = 90,
}

/// How an instruction touches its memory operand. Indexed addressing charges
/// its penalty cycle unconditionally for writes and read-modify-writes.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub(crate) enum Access {
    Read,
    Write,
    Modify,
}

/// Decoded form of one opcode byte: mnemonic, addressing mode, operand
/// access class and the number of fixed internal cycles on top of the bus
/// accesses the instruction performs.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub(crate) struct Instruction(BaseInstruction, AddressingMode, Access, u32);

#[derive(Clone, Copy, Debug)]
enum InstructionData {
    None,
    Accumulator,
    Data(Word),
    Address(Address),
    LongAddress(Address),
    BranchTarget(Word),
    BankPair(Byte, Byte),
}

/// Register state captured at an instruction boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegisterSnapshot {
    pub a: u16,
    pub x: u16,
    pub y: u16,
    pub dp: u16,
    pub sp: u16,
    pub pc: u16,
    pub db: u8,
    pub pb: u8,
    pub p: u8,
    pub emulation: bool,
}

impl std::fmt::Display for RegisterSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let flag = |mask: StatusFlags, set: char| {
            if self.p & mask.bits() != 0 {
                set
            } else {
                '.'
            }
        };
        let memory_select = if self.emulation {
            '.'
        } else {
            flag(StatusFlags::M, 'M')
        };
        let index_select = if self.emulation {
            flag(StatusFlags::B, 'B')
        } else {
            flag(StatusFlags::X, 'X')
        };
        write!(
            f,
            "A:{:04X} X:{:04X} Y:{:04X} DP:{:04X} SP:{:04X} PC:{:04X} DB:{:02X} PB:{:02X} {}{}{}{}{}{}{}{} {}",
            self.a,
            self.x,
            self.y,
            self.dp,
            self.sp,
            self.pc,
            self.db,
            self.pb,
            flag(StatusFlags::N, 'N'),
            flag(StatusFlags::V, 'V'),
            memory_select,
            index_select,
            flag(StatusFlags::D, 'D'),
            flag(StatusFlags::I, 'I'),
            flag(StatusFlags::Z, 'Z'),
            flag(StatusFlags::C, 'C'),
            if self.emulation { 'E' } else { '-' },
        )
    }
}

pub struct Cpu65C816 {
    /// Accumulator
    pub(crate) a: Register,
    /// X index register
    pub(crate) x: Register,
    /// Y index register
    pub(crate) y: Register,
    /// Stack pointer
    pub(crate) sp: Register,
    /// Direct page register
    pub(crate) dp: Register,
    /// Data bank
    pub(crate) db: Byte,
    /// Program bank
    pub(crate) pb: Byte,
    /// Program counter
    pub(crate) pc: Word,
    /// Status register
    pub(crate) status: StatusFlags,
    /// Emulation mode flag
    pub(crate) emulation_mode: bool,
    /// Memory data buffer, replayed on open-bus reads
    pub(crate) md: Byte,

    pub(crate) stopped: bool,
    pub(crate) waiting: bool,

    bus: EmuRef<Bus>,
    clock: ClockLine,
    ticks_seen: u64,
    lines: InterruptLines,
    monitor: Arc<CoreMonitor>,
}

impl Cpu65C816 {
    pub fn new(
        bus: EmuRef<Bus>,
        clock: ClockLine,
        lines: InterruptLines,
        monitor: Arc<CoreMonitor>,
    ) -> Self {
        let cpu = Self {
            a: Register::new(),
            x: Register::new(),
            y: Register::new(),
            sp: Register(Wrapping(0x0100)),
            dp: Register::new(),
            db: Wrapping(0),
            pb: Wrapping(0),
            pc: Wrapping(0),
            status: StatusFlags::M | StatusFlags::X | StatusFlags::I,
            emulation_mode: true,
            md: Wrapping(0),
            stopped: false,
            waiting: false,
            bus,
            clock,
            ticks_seen: 0,
            lines,
            monitor,
        };
        cpu.publish();
        cpu
    }

    pub fn snapshot(&self) -> RegisterSnapshot {
        RegisterSnapshot {
            a: (*self.a).0,
            x: (*self.x).0,
            y: (*self.y).0,
            dp: (*self.dp).0,
            sp: (*self.sp).0,
            pc: self.pc.0,
            db: self.db.0,
            pb: self.pb.0,
            p: self.status.bits(),
            emulation: self.emulation_mode,
        }
    }

    #[inline]
    pub fn cycles(&self) -> u64 {
        self.monitor.cycles()
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    /// Whether accumulator operations are 8 bits wide (the M flag).
    #[inline]
    pub fn accumulator_is_8bit(&self) -> bool {
        self.status.contains(StatusFlags::M)
    }

    /// Whether index register operations are 8 bits wide.
    #[inline]
    pub fn indices_are_8bit(&self) -> bool {
        self.emulation_mode || self.status.contains(StatusFlags::X)
    }

    /// Switches between native and emulation mode, applying the emulation
    /// mode invariants on entry.
    pub fn set_emulation(&mut self, emulation: bool) {
        self.emulation_mode = emulation;
        self.update_mode();
    }

    /// Re-establishes the mode invariants after any write to the status
    /// register or the emulation flag.
    fn update_mode(&mut self) {
        if self.emulation_mode {
            self.status.insert(StatusFlags::M | StatusFlags::X);
            self.sp.set_hi(Wrapping(0x01));
        }
        if self.indices_are_8bit() {
            *self.x &= Wrapping(0x00FF);
            *self.y &= Wrapping(0x00FF);
        }
    }

    /*
        Cycle and bus plumbing
    */

    /// Rendezvouses with the clock and advances the cycle counter. Every
    /// modeled cycle passes through here exactly once.
    fn cycle(&mut self) {
        self.clock.wait_edge(&mut self.ticks_seen);
        self.monitor.count_cycle();
    }

    #[inline]
    fn internal_cycle(&mut self) {
        self.cycle();
    }

    fn read_byte(&mut self, address: Address) -> Byte {
        self.cycle();
        let result = lock_ref(&self.bus).read(address);
        match result {
            Some(data) => {
                self.md = data;
                data
            }
            None => {
                log::debug!("open bus read at {:06X}", address);
                self.md
            }
        }
    }

    fn write_byte(&mut self, address: Address, data: Byte) {
        self.cycle();
        self.md = data;
        if !lock_ref(&self.bus).write(address, data) {
            log::debug!("open bus write at {:06X}", address);
        }
    }

    fn read_word(&mut self, address: Address) -> Word {
        let lo = self.read_byte(address);
        let hi = self.read_byte(address + u24w::ONE);
        Wrapping((lo.0 as u16) | ((hi.0 as u16) << 8))
    }

    fn write_word(&mut self, address: Address, data: Word) {
        self.write_byte(address, Wrapping(data.0 as u8));
        self.write_byte(address + u24w::ONE, Wrapping((data.0 >> 8) as u8));
    }

    /// Reads a little-endian word whose bytes both come from the given bank,
    /// wrapping at the 16-bit boundary. Direct-page and stack pointer
    /// fetches use this discipline.
    fn read_word_in_bank(&mut self, bank: Byte, offset: Word) -> Word {
        let lo = self.read_byte(u24w::from_bank_offset(bank.0, offset.0));
        let hi = self.read_byte(u24w::from_bank_offset(bank.0, offset.0.wrapping_add(1)));
        Wrapping((lo.0 as u16) | ((hi.0 as u16) << 8))
    }

    /// Reads a 24-bit pointer from bank 0, wrapping at the 16-bit boundary.
    fn read_long_bank0(&mut self, offset: Word) -> Address {
        let lo = self.read_byte(u24w::from_bank_offset(0, offset.0));
        let hi = self.read_byte(u24w::from_bank_offset(0, offset.0.wrapping_add(1)));
        let bank = self.read_byte(u24w::from_bank_offset(0, offset.0.wrapping_add(2)));
        u24w::from_bank_offset(bank.0, (lo.0 as u16) | ((hi.0 as u16) << 8))
    }

    fn next_byte(&mut self) -> Byte {
        let address = u24w::from_bank_offset(self.pb.0, self.pc.0);
        self.pc += Wrapping(1);
        self.read_byte(address)
    }

    fn next_word(&mut self) -> Word {
        let lo = self.next_byte();
        let hi = self.next_byte();
        Wrapping((lo.0 as u16) | ((hi.0 as u16) << 8))
    }

    fn next_long(&mut self) -> Address {
        let offset = self.next_word();
        let bank = self.next_byte();
        u24w::from_bank_offset(bank.0, offset.0)
    }

    /*
        Stack
    */

    fn push_byte(&mut self, data: Byte) {
        let address = u24w::from_bank_offset(0, (*self.sp).0);
        *self.sp -= Wrapping(1);
        if self.emulation_mode {
            self.sp.set_hi(Wrapping(0x01));
        }
        self.write_byte(address, data);
    }

    fn pop_byte(&mut self) -> Byte {
        *self.sp += Wrapping(1);
        if self.emulation_mode {
            self.sp.set_hi(Wrapping(0x01));
        }
        let address = u24w::from_bank_offset(0, (*self.sp).0);
        self.read_byte(address)
    }

    fn push_word(&mut self, data: Word) {
        self.push_byte(Wrapping((data.0 >> 8) as u8));
        self.push_byte(Wrapping(data.0 as u8));
    }

    fn pop_word(&mut self) -> Word {
        let lo = self.pop_byte();
        let hi = self.pop_byte();
        Wrapping((lo.0 as u16) | ((hi.0 as u16) << 8))
    }

    /*
        Flags
    */

    #[inline]
    fn set_zn_flags_byte(&mut self, value: Byte) {
        self.status.set(StatusFlags::Z, value.0 == 0);
        self.status.set(StatusFlags::N, (value.0 & 0x80) != 0);
    }

    #[inline]
    fn set_zn_flags_word(&mut self, value: Word) {
        self.status.set(StatusFlags::Z, value.0 == 0);
        self.status.set(StatusFlags::N, (value.0 & 0x8000) != 0);
    }

    /*
        Operand access
    */

    fn load_byte_value(&mut self, data: InstructionData) -> Byte {
        match data {
            InstructionData::Data(value) => Wrapping(value.0 as u8),
            InstructionData::Address(address) | InstructionData::LongAddress(address) => {
                self.read_byte(address)
            }
            InstructionData::Accumulator => self.a.lo(),
            _ => panic!("Invalid addressing mode"),
        }
    }

    fn load_word_value(&mut self, data: InstructionData) -> Word {
        match data {
            InstructionData::Data(value) => value,
            InstructionData::Address(address) | InstructionData::LongAddress(address) => {
                self.read_word(address)
            }
            InstructionData::Accumulator => *self.a,
            _ => panic!("Invalid addressing mode"),
        }
    }

    fn store_byte_value(&mut self, data: InstructionData, value: Byte) {
        match data {
            InstructionData::Address(address) | InstructionData::LongAddress(address) => {
                self.write_byte(address, value)
            }
            InstructionData::Accumulator => self.a.set_lo(value),
            _ => panic!("Invalid addressing mode"),
        }
    }

    fn store_word_value(&mut self, data: InstructionData, value: Word) {
        match data {
            InstructionData::Address(address) | InstructionData::LongAddress(address) => {
                self.write_word(address, value)
            }
            InstructionData::Accumulator => *self.a = value,
            _ => panic!("Invalid addressing mode"),
        }
    }

    /*
        Address formation
    */

    /// Direct-page offset of the operand byte, charging the extra cycle when
    /// the direct page is not page-aligned.
    fn direct_offset(&mut self) -> Word {
        let operand = self.next_byte();
        if self.dp.lo().0 != 0 {
            self.internal_cycle();
        }
        *self.dp + Wrapping(operand.0 as u16)
    }

    /// Direct-page offset with an index register added. In emulation mode
    /// with a page-aligned direct page the sum wraps within the page.
    fn direct_indexed_offset(&mut self, index: Word) -> Word {
        let operand = self.next_byte();
        if self.dp.lo().0 != 0 {
            self.internal_cycle();
        }
        self.internal_cycle();
        if self.emulation_mode && self.dp.lo().0 == 0 {
            (*self.dp & Wrapping(0xFF00))
                | Wrapping(operand.0.wrapping_add(index.0 as u8) as u16)
        } else {
            *self.dp + Wrapping(operand.0 as u16) + index
        }
    }

    /// Adds an index register to a 16-bit base in a data bank, charging the
    /// penalty cycle on a page crossing, a 16-bit index, or any access that
    /// writes.
    fn indexed_data_address(
        &mut self,
        bank: Byte,
        base: Word,
        index: Word,
        access: Access,
    ) -> Address {
        let page_crossed = (base & Wrapping(0xFF00)) != ((base + index) & Wrapping(0xFF00));
        if page_crossed || !self.indices_are_8bit() || access != Access::Read {
            self.internal_cycle();
        }
        u24w::from_bank_offset(bank.0, base.0) + u24w::new(index.0 as u32)
    }

    /*
        Arithmetic
    */

    fn add_binary_8(&mut self, operand: Byte) {
        let left = self.a.lo().0 as u16;
        let right = operand.0 as u16;
        let carry = self.status.contains(StatusFlags::C) as u16;
        let sum = left + right + carry;

        self.status.set(StatusFlags::C, sum > 0x00FF);
        self.status
            .set(StatusFlags::V, ((!(left ^ right) & (left ^ sum)) & 0x0080) != 0);

        let result = Wrapping(sum as u8);
        self.a.set_lo(result);
        self.set_zn_flags_byte(result);
    }

    fn add_binary_16(&mut self, operand: Word) {
        let left = (*self.a).0 as u32;
        let right = operand.0 as u32;
        let carry = self.status.contains(StatusFlags::C) as u32;
        let sum = left + right + carry;

        self.status.set(StatusFlags::C, sum > 0xFFFF);
        self.status
            .set(StatusFlags::V, ((!(left ^ right) & (left ^ sum)) & 0x8000) != 0);

        let result = Wrapping(sum as u16);
        *self.a = result;
        self.set_zn_flags_word(result);
    }

    fn add_decimal_8(&mut self, operand: Byte) {
        let left = self.a.lo().0 as u32;
        let right = operand.0 as u32;
        let carry = self.status.contains(StatusFlags::C);
        let binary = left + right + carry as u32;

        let (value, carry_out) = decimal_add(left, right, carry, 2);
        self.status.set(StatusFlags::C, carry_out);
        self.status
            .set(StatusFlags::V, ((!(left ^ right) & (left ^ binary)) & 0x80) != 0);

        let result = Wrapping(value as u8);
        self.a.set_lo(result);
        self.set_zn_flags_byte(result);
    }

    fn add_decimal_16(&mut self, operand: Word) {
        let left = (*self.a).0 as u32;
        let right = operand.0 as u32;
        let carry = self.status.contains(StatusFlags::C);
        let binary = left + right + carry as u32;

        let (value, carry_out) = decimal_add(left, right, carry, 4);
        self.status.set(StatusFlags::C, carry_out);
        self.status
            .set(StatusFlags::V, ((!(left ^ right) & (left ^ binary)) & 0x8000) != 0);

        let result = Wrapping(value as u16);
        *self.a = result;
        self.set_zn_flags_word(result);
    }

    fn sub_decimal_8(&mut self, operand: Byte) {
        let left = self.a.lo().0 as u32;
        let right = operand.0 as u32;
        let carry = self.status.contains(StatusFlags::C);
        let inverted = (!operand).0 as u32;
        let binary = left + inverted + carry as u32;

        let (value, carry_out) = decimal_sub(left, right, carry, 2);
        self.status.set(StatusFlags::C, carry_out);
        self.status.set(
            StatusFlags::V,
            ((!(left ^ inverted) & (left ^ binary)) & 0x80) != 0,
        );

        let result = Wrapping(value as u8);
        self.a.set_lo(result);
        self.set_zn_flags_byte(result);
    }

    fn sub_decimal_16(&mut self, operand: Word) {
        let left = (*self.a).0 as u32;
        let right = operand.0 as u32;
        let carry = self.status.contains(StatusFlags::C);
        let inverted = (!operand).0 as u32;
        let binary = left + inverted + carry as u32;

        let (value, carry_out) = decimal_sub(left, right, carry, 4);
        self.status.set(StatusFlags::C, carry_out);
        self.status.set(
            StatusFlags::V,
            ((!(left ^ inverted) & (left ^ binary)) & 0x8000) != 0,
        );

        let result = Wrapping(value as u16);
        *self.a = result;
        self.set_zn_flags_word(result);
    }

    fn compare_byte(&mut self, register: Byte, data: InstructionData) {
        let value = self.load_byte_value(data);
        let tmp = register - value;
        self.status.set(StatusFlags::C, register.0 >= value.0);
        self.set_zn_flags_byte(tmp);
    }

    fn compare_word(&mut self, register: Word, data: InstructionData) {
        let value = self.load_word_value(data);
        let tmp = register - value;
        self.status.set(StatusFlags::C, register.0 >= value.0);
        self.set_zn_flags_word(tmp);
    }

    /*
        Control flow helpers
    */

    fn branch_if(&mut self, data: InstructionData, condition: bool) {
        if let InstructionData::BranchTarget(target) = data {
            if condition {
                self.internal_cycle();
                if self.emulation_mode && (target.0 & 0xFF00) != (self.pc.0 & 0xFF00) {
                    self.internal_cycle();
                }
                self.pc = target;
            }
        }
    }

    fn index_step(&self, value: Word, forward: bool) -> Word {
        if self.indices_are_8bit() {
            let stepped = if forward {
                (value.0 as u8).wrapping_add(1)
            } else {
                (value.0 as u8).wrapping_sub(1)
            };
            Wrapping(stepped as u16)
        } else if forward {
            value + Wrapping(1)
        } else {
            value - Wrapping(1)
        }
    }

    fn block_move(&mut self, data: InstructionData, forward: bool) {
        if let InstructionData::BankPair(destination, source) = data {
            self.db = destination;
            let value = self.read_byte(u24w::from_bank_offset(source.0, (*self.x).0));
            self.write_byte(u24w::from_bank_offset(destination.0, (*self.y).0), value);
            self.internal_cycle();
            self.internal_cycle();
            *self.x = self.index_step(*self.x, forward);
            *self.y = self.index_step(*self.y, forward);
            *self.a -= Wrapping(1);
            // Re-execute the same instruction until A wraps below zero.
            if (*self.a).0 != 0xFFFF {
                self.pc -= Wrapping(3);
            }
        }
    }

    /*
        Interrupt entry
    */

    fn service_interrupt(
        &mut self,
        source: InterruptSource,
        hardware: bool,
    ) -> Result<(), CoreError> {
        if hardware {
            self.internal_cycle();
            self.internal_cycle();
        }
        let vector = interrupt::vector_for(source, self.emulation_mode)?;

        if !self.emulation_mode {
            self.push_byte(self.pb);
        }
        self.push_word(self.pc);

        let mut pushed = self.status;
        if self.emulation_mode {
            // Hardware entry pushes the break bit clear so handlers can tell
            // IRQ from BRK.
            pushed.set(StatusFlags::B, !hardware);
        }
        self.push_byte(Wrapping(pushed.bits()));

        self.status.insert(StatusFlags::I);
        self.status.remove(StatusFlags::D);

        self.pc = self.read_word(vector);
        self.pb = Wrapping(0);
        Ok(())
    }

    pub(crate) fn reset(&mut self) -> Result<(), CoreError> {
        self.status.insert(StatusFlags::I);
        self.status.remove(StatusFlags::D);
        self.db = Wrapping(0);
        self.pb = Wrapping(0);
        *self.dp = Wrapping(0);
        self.stopped = false;
        self.waiting = false;
        self.set_emulation(true);

        let vector = interrupt::vector_for(InterruptSource::Reset, self.emulation_mode)?;
        self.pc = self.read_word(vector);
        self.monitor.reset_cycles();
        Ok(())
    }

    /*
        Dispatch
    */

    /// Runs one instruction boundary: pending reset, NMI and IRQ are
    /// serviced in priority order, a waiting core idles, otherwise the next
    /// opcode is fetched and executed.
    pub fn step(&mut self) -> Result<(), CoreError> {
        if self.lines.take_reset() {
            self.reset()?;
        } else if self.stopped {
            // STP holds the core until an external reset.
        } else if self.lines.take_nmi() {
            self.waiting = false;
            self.service_interrupt(InterruptSource::Nmi, true)?;
        } else if self.lines.irq_pending() && !self.status.contains(StatusFlags::I) {
            self.waiting = false;
            self.service_interrupt(InterruptSource::Irq, true)?;
        } else if self.lines.irq_pending() && self.waiting {
            // Masked interrupts still end the wait, without vectoring.
            self.waiting = false;
        } else if self.waiting {
            self.internal_cycle();
        } else {
            let op = self.next_byte();
            self.execute_op(op)?;
        }

        self.publish();
        Ok(())
    }

    fn execute_op(&mut self, op: Byte) -> Result<(), CoreError> {
        let Instruction(base, mode, access, extra_cycles) =
            INSTRUCTION_LOOKUP_65C816[op.0 as usize];
        log::trace!(
            "{:02X}:{:04X}  {} {}",
            self.pb,
            (self.pc - Wrapping(1)).0,
            base,
            mode
        );

        let data = ADDRESSING_LOOKUP[mode as usize](self, access);
        for _ in 0..extra_cycles {
            self.internal_cycle();
        }
        EXECUTE_LOOKUP[base as usize](self, data)
    }

    /// Steps instructions until at least `cycles` cycles have elapsed or the
    /// core stops.
    pub fn execute_cycles(&mut self, cycles: u64) -> Result<u64, CoreError> {
        let start = self.monitor.cycles();
        let mut run = 0;
        while run < cycles {
            self.step()?;
            run = self.monitor.cycles().wrapping_sub(start);
            if self.stopped {
                break;
            }
        }
        Ok(run)
    }

    fn publish(&self) {
        self.monitor.set_state(self.stopped, self.waiting);
        self.monitor.publish(self.snapshot());
    }
}

impl std::fmt::Display for Cpu65C816 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.snapshot(), f)
    }
}

/*
    Addressing modes
*/

type AddressingFn = fn(&mut Cpu65C816, Access) -> InstructionData;

#[inline]
fn addressing_imp(cpu: &mut Cpu65C816, _: Access) -> InstructionData {
    cpu.internal_cycle();
    InstructionData::None
}

#[inline]
fn addressing_acc(cpu: &mut Cpu65C816, _: Access) -> InstructionData {
    cpu.internal_cycle();
    InstructionData::Accumulator
}

#[inline]
fn addressing_imb(cpu: &mut Cpu65C816, _: Access) -> InstructionData {
    let value = cpu.next_byte();
    InstructionData::Data(Wrapping(value.0 as u16))
}

#[inline]
fn addressing_imw(cpu: &mut Cpu65C816, _: Access) -> InstructionData {
    InstructionData::Data(cpu.next_word())
}

#[inline]
fn addressing_imm(cpu: &mut Cpu65C816, access: Access) -> InstructionData {
    if cpu.accumulator_is_8bit() {
        addressing_imb(cpu, access)
    } else {
        addressing_imw(cpu, access)
    }
}

#[inline]
fn addressing_imx(cpu: &mut Cpu65C816, access: Access) -> InstructionData {
    if cpu.indices_are_8bit() {
        addressing_imb(cpu, access)
    } else {
        addressing_imw(cpu, access)
    }
}

fn addressing_rel(cpu: &mut Cpu65C816, _: Access) -> InstructionData {
    let operand = cpu.next_byte();
    let relative = Wrapping(operand.0 as i8 as i16 as u16);
    InstructionData::BranchTarget(cpu.pc + relative)
}

fn addressing_rll(cpu: &mut Cpu65C816, _: Access) -> InstructionData {
    let relative = cpu.next_word();
    cpu.internal_cycle();
    InstructionData::BranchTarget(cpu.pc + relative)
}

#[inline]
fn addressing_dir(cpu: &mut Cpu65C816, _: Access) -> InstructionData {
    let offset = cpu.direct_offset();
    InstructionData::Address(u24w::from_bank_offset(0, offset.0))
}

#[inline]
fn addressing_drx(cpu: &mut Cpu65C816, _: Access) -> InstructionData {
    let index = *cpu.x;
    let offset = cpu.direct_indexed_offset(index);
    InstructionData::Address(u24w::from_bank_offset(0, offset.0))
}

#[inline]
fn addressing_dry(cpu: &mut Cpu65C816, _: Access) -> InstructionData {
    let index = *cpu.y;
    let offset = cpu.direct_indexed_offset(index);
    InstructionData::Address(u24w::from_bank_offset(0, offset.0))
}

fn addressing_din(cpu: &mut Cpu65C816, _: Access) -> InstructionData {
    let pointer = cpu.direct_offset();
    let offset = cpu.read_word_in_bank(Wrapping(0), pointer);
    InstructionData::Address(u24w::from_bank_offset(cpu.db.0, offset.0))
}

fn addressing_dix(cpu: &mut Cpu65C816, _: Access) -> InstructionData {
    let index = *cpu.x;
    let pointer = cpu.direct_indexed_offset(index);
    let offset = cpu.read_word_in_bank(Wrapping(0), pointer);
    InstructionData::Address(u24w::from_bank_offset(cpu.db.0, offset.0))
}

fn addressing_diy(cpu: &mut Cpu65C816, access: Access) -> InstructionData {
    let pointer = cpu.direct_offset();
    let base = cpu.read_word_in_bank(Wrapping(0), pointer);
    let bank = cpu.db;
    let index = *cpu.y;
    InstructionData::Address(cpu.indexed_data_address(bank, base, index, access))
}

fn addressing_dil(cpu: &mut Cpu65C816, _: Access) -> InstructionData {
    let pointer = cpu.direct_offset();
    InstructionData::Address(cpu.read_long_bank0(pointer))
}

fn addressing_dly(cpu: &mut Cpu65C816, _: Access) -> InstructionData {
    let pointer = cpu.direct_offset();
    let base = cpu.read_long_bank0(pointer);
    InstructionData::Address(base + u24w::new((*cpu.y).0 as u32))
}

#[inline]
fn addressing_abs(cpu: &mut Cpu65C816, _: Access) -> InstructionData {
    let offset = cpu.next_word();
    InstructionData::Address(u24w::from_bank_offset(cpu.db.0, offset.0))
}

fn addressing_abx(cpu: &mut Cpu65C816, access: Access) -> InstructionData {
    let base = cpu.next_word();
    let bank = cpu.db;
    let index = *cpu.x;
    InstructionData::Address(cpu.indexed_data_address(bank, base, index, access))
}

fn addressing_aby(cpu: &mut Cpu65C816, access: Access) -> InstructionData {
    let base = cpu.next_word();
    let bank = cpu.db;
    let index = *cpu.y;
    InstructionData::Address(cpu.indexed_data_address(bank, base, index, access))
}

#[inline]
fn addressing_abl(cpu: &mut Cpu65C816, _: Access) -> InstructionData {
    InstructionData::LongAddress(cpu.next_long())
}

#[inline]
fn addressing_alx(cpu: &mut Cpu65C816, _: Access) -> InstructionData {
    let base = cpu.next_long();
    InstructionData::LongAddress(base + u24w::new((*cpu.x).0 as u32))
}

fn addressing_ind(cpu: &mut Cpu65C816, _: Access) -> InstructionData {
    let pointer = cpu.next_word();
    let offset = cpu.read_word_in_bank(Wrapping(0), pointer);
    InstructionData::Address(u24w::from_bank_offset(cpu.pb.0, offset.0))
}

fn addressing_inl(cpu: &mut Cpu65C816, _: Access) -> InstructionData {
    let pointer = cpu.next_word();
    InstructionData::LongAddress(cpu.read_long_bank0(pointer))
}

fn addressing_iax(cpu: &mut Cpu65C816, _: Access) -> InstructionData {
    // The indexed pointer is read from the program bank, not the data bank.
    let pointer = cpu.next_word() + *cpu.x;
    cpu.internal_cycle();
    let bank = cpu.pb;
    let offset = cpu.read_word_in_bank(bank, pointer);
    InstructionData::Address(u24w::from_bank_offset(cpu.pb.0, offset.0))
}

fn addressing_srl(cpu: &mut Cpu65C816, _: Access) -> InstructionData {
    let operand = cpu.next_byte();
    cpu.internal_cycle();
    let offset = *cpu.sp + Wrapping(operand.0 as u16);
    InstructionData::Address(u24w::from_bank_offset(0, offset.0))
}

fn addressing_sry(cpu: &mut Cpu65C816, _: Access) -> InstructionData {
    let operand = cpu.next_byte();
    cpu.internal_cycle();
    let pointer = *cpu.sp + Wrapping(operand.0 as u16);
    let base = cpu.read_word_in_bank(Wrapping(0), pointer);
    cpu.internal_cycle();
    InstructionData::Address(
        u24w::from_bank_offset(cpu.db.0, base.0) + u24w::new((*cpu.y).0 as u32),
    )
}

#[inline]
fn addressing_blk(cpu: &mut Cpu65C816, _: Access) -> InstructionData {
    let destination = cpu.next_byte();
    let source = cpu.next_byte();
    InstructionData::BankPair(destination, source)
}

const ADDRESSING_LOOKUP: [AddressingFn; 27] = [
    addressing_imp, // IMP
    addressing_acc, // ACC
    addressing_imb, // IMB
    addressing_imw, // IMW
    addressing_imm, // IMM
    addressing_imx, // IMX
    addressing_rel, // REL
    addressing_rll, // RLL
    addressing_dir, // DIR
    addressing_drx, // DRX
    addressing_dry, // DRY
    addressing_din, // DIN
    addressing_dix, // DIX
    addressing_diy, // DIY
    addressing_dil, // DIL
    addressing_dly, // DLY
    addressing_abs, // ABS
    addressing_abx, // ABX
    addressing_aby, // ABY
    addressing_abl, // ABL
    addressing_alx, // ALX
    addressing_ind, // IND
    addressing_inl, // INL
    addressing_iax, // IAX
    addressing_srl, // SRL
    addressing_sry, // SRY
    addressing_blk, // BLK
];

/*
    Instruction execution
*/

type ExecuteFn = fn(&mut Cpu65C816, InstructionData) -> Result<(), CoreError>;

#[inline]
fn execute_lda(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if cpu.accumulator_is_8bit() {
        let value = cpu.load_byte_value(data);
        cpu.a.set_lo(value);
        cpu.set_zn_flags_byte(value);
    } else {
        let value = cpu.load_word_value(data);
        *cpu.a = value;
        cpu.set_zn_flags_word(value);
    }
    Ok(())
}

#[inline]
fn execute_ldx(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if cpu.indices_are_8bit() {
        let value = cpu.load_byte_value(data);
        *cpu.x = Wrapping(value.0 as u16);
        cpu.set_zn_flags_byte(value);
    } else {
        let value = cpu.load_word_value(data);
        *cpu.x = value;
        cpu.set_zn_flags_word(value);
    }
    Ok(())
}

#[inline]
fn execute_ldy(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if cpu.indices_are_8bit() {
        let value = cpu.load_byte_value(data);
        *cpu.y = Wrapping(value.0 as u16);
        cpu.set_zn_flags_byte(value);
    } else {
        let value = cpu.load_word_value(data);
        *cpu.y = value;
        cpu.set_zn_flags_word(value);
    }
    Ok(())
}

#[inline]
fn execute_sta(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if cpu.accumulator_is_8bit() {
        cpu.store_byte_value(data, cpu.a.lo());
    } else {
        cpu.store_word_value(data, *cpu.a);
    }
    Ok(())
}

#[inline]
fn execute_stx(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if cpu.indices_are_8bit() {
        cpu.store_byte_value(data, cpu.x.lo());
    } else {
        cpu.store_word_value(data, *cpu.x);
    }
    Ok(())
}

#[inline]
fn execute_sty(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if cpu.indices_are_8bit() {
        cpu.store_byte_value(data, cpu.y.lo());
    } else {
        cpu.store_word_value(data, *cpu.y);
    }
    Ok(())
}

#[inline]
fn execute_stz(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if cpu.accumulator_is_8bit() {
        cpu.store_byte_value(data, Wrapping(0));
    } else {
        cpu.store_word_value(data, Wrapping(0));
    }
    Ok(())
}

#[inline]
fn execute_tax(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    if cpu.indices_are_8bit() {
        let value = cpu.a.lo();
        *cpu.x = Wrapping(value.0 as u16);
        cpu.set_zn_flags_byte(value);
    } else {
        *cpu.x = *cpu.a;
        cpu.set_zn_flags_word(*cpu.x);
    }
    Ok(())
}

#[inline]
fn execute_tay(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    if cpu.indices_are_8bit() {
        let value = cpu.a.lo();
        *cpu.y = Wrapping(value.0 as u16);
        cpu.set_zn_flags_byte(value);
    } else {
        *cpu.y = *cpu.a;
        cpu.set_zn_flags_word(*cpu.y);
    }
    Ok(())
}

#[inline]
fn execute_tsx(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    if cpu.indices_are_8bit() {
        let value = cpu.sp.lo();
        *cpu.x = Wrapping(value.0 as u16);
        cpu.set_zn_flags_byte(value);
    } else {
        *cpu.x = *cpu.sp;
        cpu.set_zn_flags_word(*cpu.x);
    }
    Ok(())
}

#[inline]
fn execute_txa(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    if cpu.accumulator_is_8bit() {
        let value = cpu.x.lo();
        cpu.a.set_lo(value);
        cpu.set_zn_flags_byte(value);
    } else {
        *cpu.a = *cpu.x;
        cpu.set_zn_flags_word(*cpu.a);
    }
    Ok(())
}

#[inline]
fn execute_txs(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    if cpu.emulation_mode {
        cpu.sp.set_lo(cpu.x.lo());
        cpu.sp.set_hi(Wrapping(0x01));
    } else {
        *cpu.sp = *cpu.x;
    }
    Ok(())
}

#[inline]
fn execute_txy(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    if cpu.indices_are_8bit() {
        let value = cpu.x.lo();
        *cpu.y = Wrapping(value.0 as u16);
        cpu.set_zn_flags_byte(value);
    } else {
        *cpu.y = *cpu.x;
        cpu.set_zn_flags_word(*cpu.y);
    }
    Ok(())
}

#[inline]
fn execute_tya(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    if cpu.accumulator_is_8bit() {
        let value = cpu.y.lo();
        cpu.a.set_lo(value);
        cpu.set_zn_flags_byte(value);
    } else {
        *cpu.a = *cpu.y;
        cpu.set_zn_flags_word(*cpu.a);
    }
    Ok(())
}

#[inline]
fn execute_tyx(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    if cpu.indices_are_8bit() {
        let value = cpu.y.lo();
        *cpu.x = Wrapping(value.0 as u16);
        cpu.set_zn_flags_byte(value);
    } else {
        *cpu.x = *cpu.y;
        cpu.set_zn_flags_word(*cpu.x);
    }
    Ok(())
}

#[inline]
fn execute_tcd(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    *cpu.dp = *cpu.a;
    cpu.set_zn_flags_word(*cpu.dp);
    Ok(())
}

#[inline]
fn execute_tcs(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    if cpu.emulation_mode {
        cpu.sp.set_lo(cpu.a.lo());
        cpu.sp.set_hi(Wrapping(0x01));
    } else {
        *cpu.sp = *cpu.a;
    }
    Ok(())
}

#[inline]
fn execute_tdc(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    *cpu.a = *cpu.dp;
    cpu.set_zn_flags_word(*cpu.a);
    Ok(())
}

#[inline]
fn execute_tsc(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    *cpu.a = *cpu.sp;
    cpu.set_zn_flags_word(*cpu.a);
    Ok(())
}

#[inline]
fn execute_pha(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    if cpu.accumulator_is_8bit() {
        cpu.push_byte(cpu.a.lo());
    } else {
        cpu.push_word(*cpu.a);
    }
    Ok(())
}

#[inline]
fn execute_phb(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    cpu.push_byte(cpu.db);
    Ok(())
}

#[inline]
fn execute_phd(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    cpu.push_word(*cpu.dp);
    Ok(())
}

#[inline]
fn execute_phk(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    cpu.push_byte(cpu.pb);
    Ok(())
}

#[inline]
fn execute_php(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    cpu.push_byte(Wrapping(cpu.status.bits()));
    Ok(())
}

#[inline]
fn execute_phx(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    if cpu.indices_are_8bit() {
        cpu.push_byte(cpu.x.lo());
    } else {
        cpu.push_word(*cpu.x);
    }
    Ok(())
}

#[inline]
fn execute_phy(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    if cpu.indices_are_8bit() {
        cpu.push_byte(cpu.y.lo());
    } else {
        cpu.push_word(*cpu.y);
    }
    Ok(())
}

#[inline]
fn execute_pla(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    if cpu.accumulator_is_8bit() {
        let value = cpu.pop_byte();
        cpu.a.set_lo(value);
        cpu.set_zn_flags_byte(value);
    } else {
        let value = cpu.pop_word();
        *cpu.a = value;
        cpu.set_zn_flags_word(value);
    }
    Ok(())
}

#[inline]
fn execute_plb(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    cpu.db = cpu.pop_byte();
    let value = cpu.db;
    cpu.set_zn_flags_byte(value);
    Ok(())
}

#[inline]
fn execute_pld(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    let value = cpu.pop_word();
    *cpu.dp = value;
    cpu.set_zn_flags_word(value);
    Ok(())
}

fn execute_plp(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    let value = cpu.pop_byte();
    cpu.status = StatusFlags::from_bits_truncate(value.0);
    if cpu.emulation_mode {
        cpu.status.insert(StatusFlags::M | StatusFlags::X);
    }
    cpu.update_mode();
    Ok(())
}

#[inline]
fn execute_plx(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    if cpu.indices_are_8bit() {
        let value = cpu.pop_byte();
        *cpu.x = Wrapping(value.0 as u16);
        cpu.set_zn_flags_byte(value);
    } else {
        let value = cpu.pop_word();
        *cpu.x = value;
        cpu.set_zn_flags_word(value);
    }
    Ok(())
}

#[inline]
fn execute_ply(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    if cpu.indices_are_8bit() {
        let value = cpu.pop_byte();
        *cpu.y = Wrapping(value.0 as u16);
        cpu.set_zn_flags_byte(value);
    } else {
        let value = cpu.pop_word();
        *cpu.y = value;
        cpu.set_zn_flags_word(value);
    }
    Ok(())
}

#[inline]
fn execute_pea(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    let value = cpu.load_word_value(data);
    cpu.push_word(value);
    Ok(())
}

#[inline]
fn execute_pei(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    let value = cpu.load_word_value(data);
    cpu.push_word(value);
    Ok(())
}

#[inline]
fn execute_per(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if let InstructionData::BranchTarget(target) = data {
        cpu.push_word(target);
    }
    Ok(())
}

#[inline]
fn execute_and(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if cpu.accumulator_is_8bit() {
        let value = cpu.a.lo() & cpu.load_byte_value(data);
        cpu.a.set_lo(value);
        cpu.set_zn_flags_byte(value);
    } else {
        let value = *cpu.a & cpu.load_word_value(data);
        *cpu.a = value;
        cpu.set_zn_flags_word(value);
    }
    Ok(())
}

#[inline]
fn execute_eor(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if cpu.accumulator_is_8bit() {
        let value = cpu.a.lo() ^ cpu.load_byte_value(data);
        cpu.a.set_lo(value);
        cpu.set_zn_flags_byte(value);
    } else {
        let value = *cpu.a ^ cpu.load_word_value(data);
        *cpu.a = value;
        cpu.set_zn_flags_word(value);
    }
    Ok(())
}

#[inline]
fn execute_ora(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if cpu.accumulator_is_8bit() {
        let value = cpu.a.lo() | cpu.load_byte_value(data);
        cpu.a.set_lo(value);
        cpu.set_zn_flags_byte(value);
    } else {
        let value = *cpu.a | cpu.load_word_value(data);
        *cpu.a = value;
        cpu.set_zn_flags_word(value);
    }
    Ok(())
}

fn execute_bit(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    let immediate = matches!(data, InstructionData::Data(_));
    if cpu.accumulator_is_8bit() {
        let value = cpu.load_byte_value(data);
        cpu.status
            .set(StatusFlags::Z, (cpu.a.lo() & value).0 == 0);
        if !immediate {
            cpu.status.set(StatusFlags::N, (value.0 & 0x80) != 0);
            cpu.status.set(StatusFlags::V, (value.0 & 0x40) != 0);
        }
    } else {
        let value = cpu.load_word_value(data);
        cpu.status.set(StatusFlags::Z, (*cpu.a & value).0 == 0);
        if !immediate {
            cpu.status.set(StatusFlags::N, (value.0 & 0x8000) != 0);
            cpu.status.set(StatusFlags::V, (value.0 & 0x4000) != 0);
        }
    }
    Ok(())
}

fn execute_adc(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    let decimal = cpu.status.contains(StatusFlags::D);
    if cpu.accumulator_is_8bit() {
        let operand = cpu.load_byte_value(data);
        if decimal {
            cpu.add_decimal_8(operand);
        } else {
            cpu.add_binary_8(operand);
        }
    } else {
        let operand = cpu.load_word_value(data);
        if decimal {
            cpu.add_decimal_16(operand);
        } else {
            cpu.add_binary_16(operand);
        }
    }
    Ok(())
}

fn execute_sbc(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    let decimal = cpu.status.contains(StatusFlags::D);
    if cpu.accumulator_is_8bit() {
        let operand = cpu.load_byte_value(data);
        if decimal {
            cpu.sub_decimal_8(operand);
        } else {
            cpu.add_binary_8(!operand);
        }
    } else {
        let operand = cpu.load_word_value(data);
        if decimal {
            cpu.sub_decimal_16(operand);
        } else {
            cpu.add_binary_16(!operand);
        }
    }
    Ok(())
}

#[inline]
fn execute_cmp(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if cpu.accumulator_is_8bit() {
        let register = cpu.a.lo();
        cpu.compare_byte(register, data);
    } else {
        let register = *cpu.a;
        cpu.compare_word(register, data);
    }
    Ok(())
}

#[inline]
fn execute_cpx(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if cpu.indices_are_8bit() {
        let register = cpu.x.lo();
        cpu.compare_byte(register, data);
    } else {
        let register = *cpu.x;
        cpu.compare_word(register, data);
    }
    Ok(())
}

#[inline]
fn execute_cpy(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if cpu.indices_are_8bit() {
        let register = cpu.y.lo();
        cpu.compare_byte(register, data);
    } else {
        let register = *cpu.y;
        cpu.compare_word(register, data);
    }
    Ok(())
}

fn execute_inc(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if cpu.accumulator_is_8bit() {
        let value = cpu.load_byte_value(data) + Wrapping(1);
        cpu.store_byte_value(data, value);
        cpu.set_zn_flags_byte(value);
    } else {
        let value = cpu.load_word_value(data) + Wrapping(1);
        cpu.store_word_value(data, value);
        cpu.set_zn_flags_word(value);
    }
    Ok(())
}

#[inline]
fn execute_inx(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    let value = cpu.index_step(*cpu.x, true);
    *cpu.x = value;
    if cpu.indices_are_8bit() {
        cpu.set_zn_flags_byte(cpu.x.lo());
    } else {
        cpu.set_zn_flags_word(value);
    }
    Ok(())
}

#[inline]
fn execute_iny(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    let value = cpu.index_step(*cpu.y, true);
    *cpu.y = value;
    if cpu.indices_are_8bit() {
        cpu.set_zn_flags_byte(cpu.y.lo());
    } else {
        cpu.set_zn_flags_word(value);
    }
    Ok(())
}

fn execute_dec(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if cpu.accumulator_is_8bit() {
        let value = cpu.load_byte_value(data) - Wrapping(1);
        cpu.store_byte_value(data, value);
        cpu.set_zn_flags_byte(value);
    } else {
        let value = cpu.load_word_value(data) - Wrapping(1);
        cpu.store_word_value(data, value);
        cpu.set_zn_flags_word(value);
    }
    Ok(())
}

#[inline]
fn execute_dex(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    let value = cpu.index_step(*cpu.x, false);
    *cpu.x = value;
    if cpu.indices_are_8bit() {
        cpu.set_zn_flags_byte(cpu.x.lo());
    } else {
        cpu.set_zn_flags_word(value);
    }
    Ok(())
}

#[inline]
fn execute_dey(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    let value = cpu.index_step(*cpu.y, false);
    *cpu.y = value;
    if cpu.indices_are_8bit() {
        cpu.set_zn_flags_byte(cpu.y.lo());
    } else {
        cpu.set_zn_flags_word(value);
    }
    Ok(())
}

fn execute_asl(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if cpu.accumulator_is_8bit() {
        let value = cpu.load_byte_value(data);
        cpu.status.set(StatusFlags::C, (value.0 & 0x80) != 0);
        let result = value << 1;
        cpu.store_byte_value(data, result);
        cpu.set_zn_flags_byte(result);
    } else {
        let value = cpu.load_word_value(data);
        cpu.status.set(StatusFlags::C, (value.0 & 0x8000) != 0);
        let result = value << 1;
        cpu.store_word_value(data, result);
        cpu.set_zn_flags_word(result);
    }
    Ok(())
}

fn execute_lsr(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if cpu.accumulator_is_8bit() {
        let value = cpu.load_byte_value(data);
        cpu.status.set(StatusFlags::C, (value.0 & 0x01) != 0);
        let result = value >> 1;
        cpu.store_byte_value(data, result);
        cpu.set_zn_flags_byte(result);
    } else {
        let value = cpu.load_word_value(data);
        cpu.status.set(StatusFlags::C, (value.0 & 0x0001) != 0);
        let result = value >> 1;
        cpu.store_word_value(data, result);
        cpu.set_zn_flags_word(result);
    }
    Ok(())
}

fn execute_rol(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    let carry_in = cpu.status.contains(StatusFlags::C);
    if cpu.accumulator_is_8bit() {
        let value = cpu.load_byte_value(data);
        cpu.status.set(StatusFlags::C, (value.0 & 0x80) != 0);
        let result = (value << 1) | Wrapping(carry_in as u8);
        cpu.store_byte_value(data, result);
        cpu.set_zn_flags_byte(result);
    } else {
        let value = cpu.load_word_value(data);
        cpu.status.set(StatusFlags::C, (value.0 & 0x8000) != 0);
        let result = (value << 1) | Wrapping(carry_in as u16);
        cpu.store_word_value(data, result);
        cpu.set_zn_flags_word(result);
    }
    Ok(())
}

fn execute_ror(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    let carry_in = cpu.status.contains(StatusFlags::C);
    if cpu.accumulator_is_8bit() {
        let value = cpu.load_byte_value(data);
        cpu.status.set(StatusFlags::C, (value.0 & 0x01) != 0);
        let result = (value >> 1) | Wrapping((carry_in as u8) << 7);
        cpu.store_byte_value(data, result);
        cpu.set_zn_flags_byte(result);
    } else {
        let value = cpu.load_word_value(data);
        cpu.status.set(StatusFlags::C, (value.0 & 0x0001) != 0);
        let result = (value >> 1) | Wrapping((carry_in as u16) << 15);
        cpu.store_word_value(data, result);
        cpu.set_zn_flags_word(result);
    }
    Ok(())
}

fn execute_trb(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if cpu.accumulator_is_8bit() {
        let value = cpu.load_byte_value(data);
        let mask = cpu.a.lo();
        cpu.status.set(StatusFlags::Z, (value & mask).0 == 0);
        cpu.store_byte_value(data, value & !mask);
    } else {
        let value = cpu.load_word_value(data);
        let mask = *cpu.a;
        cpu.status.set(StatusFlags::Z, (value & mask).0 == 0);
        cpu.store_word_value(data, value & !mask);
    }
    Ok(())
}

fn execute_tsb(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if cpu.accumulator_is_8bit() {
        let value = cpu.load_byte_value(data);
        let mask = cpu.a.lo();
        cpu.status.set(StatusFlags::Z, (value & mask).0 == 0);
        cpu.store_byte_value(data, value | mask);
    } else {
        let value = cpu.load_word_value(data);
        let mask = *cpu.a;
        cpu.status.set(StatusFlags::Z, (value & mask).0 == 0);
        cpu.store_word_value(data, value | mask);
    }
    Ok(())
}

fn execute_jmp(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    match data {
        InstructionData::Address(address) => cpu.pc = Wrapping(address.offset()),
        InstructionData::LongAddress(address) => {
            cpu.pc = Wrapping(address.offset());
            cpu.pb = Wrapping(address.bank());
        }
        _ => panic!("Invalid addressing mode"),
    }
    Ok(())
}

fn execute_jsr(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if let InstructionData::Address(address) = data {
        let return_address = cpu.pc - Wrapping(1);
        cpu.push_word(return_address);
        cpu.pc = Wrapping(address.offset());
    } else {
        panic!("Invalid addressing mode");
    }
    Ok(())
}

fn execute_jsl(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if let InstructionData::LongAddress(address) = data {
        cpu.push_byte(cpu.pb);
        let return_address = cpu.pc - Wrapping(1);
        cpu.push_word(return_address);
        cpu.pc = Wrapping(address.offset());
        cpu.pb = Wrapping(address.bank());
    } else {
        panic!("Invalid addressing mode");
    }
    Ok(())
}

#[inline]
fn execute_rts(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    cpu.pc = cpu.pop_word() + Wrapping(1);
    Ok(())
}

#[inline]
fn execute_rtl(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    cpu.pc = cpu.pop_word() + Wrapping(1);
    cpu.pb = cpu.pop_byte();
    Ok(())
}

#[inline]
fn execute_bcc(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    let condition = !cpu.status.contains(StatusFlags::C);
    cpu.branch_if(data, condition);
    Ok(())
}

#[inline]
fn execute_bcs(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    let condition = cpu.status.contains(StatusFlags::C);
    cpu.branch_if(data, condition);
    Ok(())
}

#[inline]
fn execute_beq(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    let condition = cpu.status.contains(StatusFlags::Z);
    cpu.branch_if(data, condition);
    Ok(())
}

#[inline]
fn execute_bmi(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    let condition = cpu.status.contains(StatusFlags::N);
    cpu.branch_if(data, condition);
    Ok(())
}

#[inline]
fn execute_bne(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    let condition = !cpu.status.contains(StatusFlags::Z);
    cpu.branch_if(data, condition);
    Ok(())
}

#[inline]
fn execute_bpl(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    let condition = !cpu.status.contains(StatusFlags::N);
    cpu.branch_if(data, condition);
    Ok(())
}

#[inline]
fn execute_bra(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    cpu.branch_if(data, true);
    Ok(())
}

#[inline]
fn execute_brl(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    if let InstructionData::BranchTarget(target) = data {
        cpu.pc = target;
    }
    Ok(())
}

#[inline]
fn execute_bvc(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    let condition = !cpu.status.contains(StatusFlags::V);
    cpu.branch_if(data, condition);
    Ok(())
}

#[inline]
fn execute_bvs(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    let condition = cpu.status.contains(StatusFlags::V);
    cpu.branch_if(data, condition);
    Ok(())
}

#[inline]
fn execute_clc(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    cpu.status.remove(StatusFlags::C);
    Ok(())
}

#[inline]
fn execute_cld(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    cpu.status.remove(StatusFlags::D);
    Ok(())
}

#[inline]
fn execute_cli(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    cpu.status.remove(StatusFlags::I);
    Ok(())
}

#[inline]
fn execute_clv(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    cpu.status.remove(StatusFlags::V);
    Ok(())
}

#[inline]
fn execute_sec(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    cpu.status.insert(StatusFlags::C);
    Ok(())
}

#[inline]
fn execute_sed(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    cpu.status.insert(StatusFlags::D);
    Ok(())
}

#[inline]
fn execute_sei(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    cpu.status.insert(StatusFlags::I);
    Ok(())
}

fn execute_rep(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    let mut mask = cpu.load_byte_value(data).0;
    if cpu.emulation_mode {
        mask &= !(StatusFlags::M.bits() | StatusFlags::X.bits());
    }
    cpu.status = StatusFlags::from_bits_truncate(cpu.status.bits() & !mask);
    cpu.update_mode();
    Ok(())
}

fn execute_sep(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    let mut mask = cpu.load_byte_value(data).0;
    if cpu.emulation_mode {
        mask &= !(StatusFlags::M.bits() | StatusFlags::X.bits());
    }
    cpu.status = StatusFlags::from_bits_truncate(cpu.status.bits() | mask);
    cpu.update_mode();
    Ok(())
}

#[inline]
fn execute_brk(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    // The signature byte was consumed as the immediate operand.
    cpu.service_interrupt(InterruptSource::Brk, false)
}

#[inline]
fn execute_cop(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    cpu.service_interrupt(InterruptSource::Cop, false)
}

fn execute_rti(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    let value = cpu.pop_byte();
    let mut status = StatusFlags::from_bits_truncate(value.0);
    if cpu.emulation_mode {
        status.set(StatusFlags::B, cpu.status.contains(StatusFlags::B));
        status.insert(StatusFlags::M);
    }
    cpu.status = status;
    cpu.update_mode();
    cpu.pc = cpu.pop_word();
    if !cpu.emulation_mode {
        cpu.pb = cpu.pop_byte();
    }
    Ok(())
}

#[inline]
fn execute_mvn(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    cpu.block_move(data, true);
    Ok(())
}

#[inline]
fn execute_mvp(cpu: &mut Cpu65C816, data: InstructionData) -> Result<(), CoreError> {
    cpu.block_move(data, false);
    Ok(())
}

#[inline]
fn execute_nop(_: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    Ok(())
}

#[inline]
fn execute_wdm(_: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    // Reserved two-byte no-op; the operand byte was consumed.
    Ok(())
}

fn execute_xba(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    let lo = cpu.a.lo();
    let hi = cpu.a.hi();
    cpu.a.set_lo(hi);
    cpu.a.set_hi(lo);
    cpu.set_zn_flags_byte(hi);
    Ok(())
}

fn execute_xce(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    let carry = cpu.status.contains(StatusFlags::C);
    cpu.status.set(StatusFlags::C, cpu.emulation_mode);
    cpu.set_emulation(carry);
    Ok(())
}

#[inline]
fn execute_stp(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    cpu.stopped = true;
    Ok(())
}

#[inline]
fn execute_wai(cpu: &mut Cpu65C816, _: InstructionData) -> Result<(), CoreError> {
    cpu.waiting = true;
    Ok(())
}

const EXECUTE_LOOKUP: [ExecuteFn; 91] = [
    execute_lda, // LDA
    execute_ldx, // LDX
    execute_ldy, // LDY
    execute_sta, // STA
    execute_stx, // STX
    execute_sty, // STY
    execute_stz, // STZ
    execute_tax, // TAX
    execute_tay, // TAY
    execute_tsx, // TSX
    execute_txa, // TXA
    execute_txs, // TXS
    execute_txy, // TXY
    execute_tya, // TYA
    execute_tyx, // TYX
    execute_tcd, // TCD
    execute_tcs, // TCS
    execute_tdc, // TDC
    execute_tsc, // TSC
    execute_pha, // PHA
    execute_phb, // PHB
    execute_phd, // PHD
    execute_phk, // PHK
    execute_php, // PHP
    execute_phx, // PHX
    execute_phy, // PHY
    execute_pla, // PLA
    execute_plb, // PLB
    execute_pld, // PLD
    execute_plp, // PLP
    execute_plx, // PLX
    execute_ply, // PLY
    execute_pea, // PEA
    execute_pei, // PEI
    execute_per, // PER
    execute_and, // AND
    execute_eor, // EOR
    execute_ora, // ORA
    execute_bit, // BIT
    execute_adc, // ADC
    execute_sbc, // SBC
    execute_cmp, // CMP
    execute_cpx, // CPX
    execute_cpy, // CPY
    execute_inc, // INC
    execute_inx, // INX
    execute_iny, // INY
    execute_dec, // DEC
    execute_dex, // DEX
    execute_dey, // DEY
    execute_asl, // ASL
    execute_lsr, // LSR
    execute_rol, // ROL
    execute_ror, // ROR
    execute_trb, // TRB
    execute_tsb, // TSB
    execute_jmp, // JMP
    execute_jsr, // JSR
    execute_jsl, // JSL
    execute_rts, // RTS
    execute_rtl, // RTL
    execute_bcc, // BCC
    execute_bcs, // BCS
    execute_beq, // BEQ
    execute_bmi, // BMI
    execute_bne, // BNE
    execute_bpl, // BPL
    execute_bra, // BRA
    execute_brl, // BRL
    execute_bvc, // BVC
    execute_bvs, // BVS
    execute_clc, // CLC
    execute_cld, // CLD
    execute_cli, // CLI
    execute_clv, // CLV
    execute_sec, // SEC
    execute_sed, // SED
    execute_sei, // SEI
    execute_rep, // REP
    execute_sep, // SEP
    execute_brk, // BRK
    execute_cop, // COP
    execute_rti, // RTI
    execute_mvn, // MVN
    execute_mvp, // MVP
    execute_nop, // NOP
    execute_wdm, // WDM
    execute_xba, // XBA
    execute_xce, // XCE
    execute_stp, // STP
    execute_wai, // WAI
];

/*
    Decimal adjustment
*/

/// Adds two BCD-encoded values nibble by nibble, adjusting each digit that
/// exceeds 9 and propagating the carry. Returns the adjusted value and the
/// top-nibble carry. Invalid BCD digits produce the same peculiar results as
/// the hardware, never an error.
fn decimal_add(left: u32, right: u32, carry: bool, nibbles: u32) -> (u32, bool) {
    let mut result = 0;
    let mut carry = carry as u32;
    for position in 0..nibbles {
        let shift = position * 4;
        let mut digit = ((left >> shift) & 0xF) + ((right >> shift) & 0xF) + carry;
        if digit > 9 {
            digit += 6;
        }
        carry = (digit > 0xF) as u32;
        result |= (digit & 0xF) << shift;
    }
    (result, carry != 0)
}

/// Subtracts BCD-encoded values nibble by nibble with a symmetric
/// adjustment on borrow. Returns the adjusted value and the carry (set when
/// no borrow out of the top nibble occurred).
fn decimal_sub(left: u32, right: u32, carry: bool, nibbles: u32) -> (u32, bool) {
    let mut result = 0;
    let mut borrow = !carry as i32;
    for position in 0..nibbles {
        let shift = position * 4;
        let mut digit =
            ((left >> shift) & 0xF) as i32 - ((right >> shift) & 0xF) as i32 - borrow;
        if digit < 0 {
            digit += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        result |= ((digit as u32) & 0xF) << shift;
    }
    (result, borrow == 0)
}

/*
    Decode table
*/

const INSTRUCTION_LOOKUP_65C816: [Instruction; 256] = [
    Instruction(BaseInstruction::BRK, AddressingMode::IMB, Access::Read, 0), // 0x00
    Instruction(BaseInstruction::ORA, AddressingMode::DIX, Access::Read, 0), // 0x01
    Instruction(BaseInstruction::COP, AddressingMode::IMB, Access::Read, 0), // 0x02
    Instruction(BaseInstruction::ORA, AddressingMode::SRL, Access::Read, 0), // 0x03
    Instruction(BaseInstruction::TSB, AddressingMode::DIR, Access::Modify, 1), // 0x04
    Instruction(BaseInstruction::ORA, AddressingMode::DIR, Access::Read, 0), // 0x05
    Instruction(BaseInstruction::ASL, AddressingMode::DIR, Access::Modify, 1), // 0x06
    Instruction(BaseInstruction::ORA, AddressingMode::DIL, Access::Read, 0), // 0x07
    Instruction(BaseInstruction::PHP, AddressingMode::IMP, Access::Read, 0), // 0x08
    Instruction(BaseInstruction::ORA, AddressingMode::IMM, Access::Read, 0), // 0x09
    Instruction(BaseInstruction::ASL, AddressingMode::ACC, Access::Read, 0), // 0x0A
    Instruction(BaseInstruction::PHD, AddressingMode::IMP, Access::Read, 0), // 0x0B
    Instruction(BaseInstruction::TSB, AddressingMode::ABS, Access::Modify, 1), // 0x0C
    Instruction(BaseInstruction::ORA, AddressingMode::ABS, Access::Read, 0), // 0x0D
    Instruction(BaseInstruction::ASL, AddressingMode::ABS, Access::Modify, 1), // 0x0E
    Instruction(BaseInstruction::ORA, AddressingMode::ABL, Access::Read, 0), // 0x0F
    //
    Instruction(BaseInstruction::BPL, AddressingMode::REL, Access::Read, 0), // 0x10
    Instruction(BaseInstruction::ORA, AddressingMode::DIY, Access::Read, 0), // 0x11
    Instruction(BaseInstruction::ORA, AddressingMode::DIN, Access::Read, 0), // 0x12
    Instruction(BaseInstruction::ORA, AddressingMode::SRY, Access::Read, 0), // 0x13
    Instruction(BaseInstruction::TRB, AddressingMode::DIR, Access::Modify, 1), // 0x14
    Instruction(BaseInstruction::ORA, AddressingMode::DRX, Access::Read, 0), // 0x15
    Instruction(BaseInstruction::ASL, AddressingMode::DRX, Access::Modify, 1), // 0x16
    Instruction(BaseInstruction::ORA, AddressingMode::DLY, Access::Read, 0), // 0x17
    Instruction(BaseInstruction::CLC, AddressingMode::IMP, Access::Read, 0), // 0x18
    Instruction(BaseInstruction::ORA, AddressingMode::ABY, Access::Read, 0), // 0x19
    Instruction(BaseInstruction::INC, AddressingMode::ACC, Access::Read, 0), // 0x1A
    Instruction(BaseInstruction::TCS, AddressingMode::IMP, Access::Read, 0), // 0x1B
    Instruction(BaseInstruction::TRB, AddressingMode::ABS, Access::Modify, 1), // 0x1C
    Instruction(BaseInstruction::ORA, AddressingMode::ABX, Access::Read, 0), // 0x1D
    Instruction(BaseInstruction::ASL, AddressingMode::ABX, Access::Modify, 1), // 0x1E
    Instruction(BaseInstruction::ORA, AddressingMode::ALX, Access::Read, 0), // 0x1F
    //
    Instruction(BaseInstruction::JSR, AddressingMode::ABS, Access::Read, 1), // 0x20
    Instruction(BaseInstruction::AND, AddressingMode::DIX, Access::Read, 0), // 0x21
    Instruction(BaseInstruction::JSL, AddressingMode::ABL, Access::Read, 1), // 0x22
    Instruction(BaseInstruction::AND, AddressingMode::SRL, Access::Read, 0), // 0x23
    Instruction(BaseInstruction::BIT, AddressingMode::DIR, Access::Read, 0), // 0x24
    Instruction(BaseInstruction::AND, AddressingMode::DIR, Access::Read, 0), // 0x25
    Instruction(BaseInstruction::ROL, AddressingMode::DIR, Access::Modify, 1), // 0x26
    Instruction(BaseInstruction::AND, AddressingMode::DIL, Access::Read, 0), // 0x27
    Instruction(BaseInstruction::PLP, AddressingMode::IMP, Access::Read, 1), // 0x28
    Instruction(BaseInstruction::AND, AddressingMode::IMM, Access::Read, 0), // 0x29
    Instruction(BaseInstruction::ROL, AddressingMode::ACC, Access::Read, 0), // 0x2A
    Instruction(BaseInstruction::PLD, AddressingMode::IMP, Access::Read, 1), // 0x2B
    Instruction(BaseInstruction::BIT, AddressingMode::ABS, Access::Read, 0), // 0x2C
    Instruction(BaseInstruction::AND, AddressingMode::ABS, Access::Read, 0), // 0x2D
    Instruction(BaseInstruction::ROL, AddressingMode::ABS, Access::Modify, 1), // 0x2E
    Instruction(BaseInstruction::AND, AddressingMode::ABL, Access::Read, 0), // 0x2F
    //
    Instruction(BaseInstruction::BMI, AddressingMode::REL, Access::Read, 0), // 0x30
    Instruction(BaseInstruction::AND, AddressingMode::DIY, Access::Read, 0), // 0x31
    Instruction(BaseInstruction::AND, AddressingMode::DIN, Access::Read, 0), // 0x32
    Instruction(BaseInstruction::AND, AddressingMode::SRY, Access::Read, 0), // 0x33
    Instruction(BaseInstruction::BIT, AddressingMode::DRX, Access::Read, 0), // 0x34
    Instruction(BaseInstruction::AND, AddressingMode::DRX, Access::Read, 0), // 0x35
    Instruction(BaseInstruction::ROL, AddressingMode::DRX, Access::Modify, 1), // 0x36
    Instruction(BaseInstruction::AND, AddressingMode::DLY, Access::Read, 0), // 0x37
    Instruction(BaseInstruction::SEC, AddressingMode::IMP, Access::Read, 0), // 0x38
    Instruction(BaseInstruction::AND, AddressingMode::ABY, Access::Read, 0), // 0x39
    Instruction(BaseInstruction::DEC, AddressingMode::ACC, Access::Read, 0), // 0x3A
    Instruction(BaseInstruction::TSC, AddressingMode::IMP, Access::Read, 0), // 0x3B
    Instruction(BaseInstruction::BIT, AddressingMode::ABX, Access::Read, 0), // 0x3C
    Instruction(BaseInstruction::AND, AddressingMode::ABX, Access::Read, 0), // 0x3D
    Instruction(BaseInstruction::ROL, AddressingMode::ABX, Access::Modify, 1), // 0x3E
    Instruction(BaseInstruction::AND, AddressingMode::ALX, Access::Read, 0), // 0x3F
    //
    Instruction(BaseInstruction::RTI, AddressingMode::IMP, Access::Read, 1), // 0x40
    Instruction(BaseInstruction::EOR, AddressingMode::DIX, Access::Read, 0), // 0x41
    Instruction(BaseInstruction::WDM, AddressingMode::IMB, Access::Read, 0), // 0x42
    Instruction(BaseInstruction::EOR, AddressingMode::SRL, Access::Read, 0), // 0x43
    Instruction(BaseInstruction::MVP, AddressingMode::BLK, Access::Read, 0), // 0x44
    Instruction(BaseInstruction::EOR, AddressingMode::DIR, Access::Read, 0), // 0x45
    Instruction(BaseInstruction::LSR, AddressingMode::DIR, Access::Modify, 1), // 0x46
    Instruction(BaseInstruction::EOR, AddressingMode::DIL, Access::Read, 0), // 0x47
    Instruction(BaseInstruction::PHA, AddressingMode::IMP, Access::Read, 0), // 0x48
    Instruction(BaseInstruction::EOR, AddressingMode::IMM, Access::Read, 0), // 0x49
    Instruction(BaseInstruction::LSR, AddressingMode::ACC, Access::Read, 0), // 0x4A
    Instruction(BaseInstruction::PHK, AddressingMode::IMP, Access::Read, 0), // 0x4B
    Instruction(BaseInstruction::JMP, AddressingMode::ABS, Access::Read, 0), // 0x4C
    Instruction(BaseInstruction::EOR, AddressingMode::ABS, Access::Read, 0), // 0x4D
    Instruction(BaseInstruction::LSR, AddressingMode::ABS, Access::Modify, 1), // 0x4E
    Instruction(BaseInstruction::EOR, AddressingMode::ABL, Access::Read, 0), // 0x4F
    //
    Instruction(BaseInstruction::BVC, AddressingMode::REL, Access::Read, 0), // 0x50
    Instruction(BaseInstruction::EOR, AddressingMode::DIY, Access::Read, 0), // 0x51
    Instruction(BaseInstruction::EOR, AddressingMode::DIN, Access::Read, 0), // 0x52
    Instruction(BaseInstruction::EOR, AddressingMode::SRY, Access::Read, 0), // 0x53
    Instruction(BaseInstruction::MVN, AddressingMode::BLK, Access::Read, 0), // 0x54
    Instruction(BaseInstruction::EOR, AddressingMode::DRX, Access::Read, 0), // 0x55
    Instruction(BaseInstruction::LSR, AddressingMode::DRX, Access::Modify, 1), // 0x56
    Instruction(BaseInstruction::EOR, AddressingMode::DLY, Access::Read, 0), // 0x57
    Instruction(BaseInstruction::CLI, AddressingMode::IMP, Access::Read, 0), // 0x58
    Instruction(BaseInstruction::EOR, AddressingMode::ABY, Access::Read, 0), // 0x59
    Instruction(BaseInstruction::PHY, AddressingMode::IMP, Access::Read, 0), // 0x5A
    Instruction(BaseInstruction::TCD, AddressingMode::IMP, Access::Read, 0), // 0x5B
    Instruction(BaseInstruction::JMP, AddressingMode::ABL, Access::Read, 0), // 0x5C
    Instruction(BaseInstruction::EOR, AddressingMode::ABX, Access::Read, 0), // 0x5D
    Instruction(BaseInstruction::LSR, AddressingMode::ABX, Access::Modify, 1), // 0x5E
    Instruction(BaseInstruction::EOR, AddressingMode::ALX, Access::Read, 0), // 0x5F
    //
    Instruction(BaseInstruction::RTS, AddressingMode::IMP, Access::Read, 2), // 0x60
    Instruction(BaseInstruction::ADC, AddressingMode::DIX, Access::Read, 0), // 0x61
    Instruction(BaseInstruction::PER, AddressingMode::RLL, Access::Read, 0), // 0x62
    Instruction(BaseInstruction::ADC, AddressingMode::SRL, Access::Read, 0), // 0x63
    Instruction(BaseInstruction::STZ, AddressingMode::DIR, Access::Write, 0), // 0x64
    Instruction(BaseInstruction::ADC, AddressingMode::DIR, Access::Read, 0), // 0x65
    Instruction(BaseInstruction::ROR, AddressingMode::DIR, Access::Modify, 1), // 0x66
    Instruction(BaseInstruction::ADC, AddressingMode::DIL, Access::Read, 0), // 0x67
    Instruction(BaseInstruction::PLA, AddressingMode::IMP, Access::Read, 1), // 0x68
    Instruction(BaseInstruction::ADC, AddressingMode::IMM, Access::Read, 0), // 0x69
    Instruction(BaseInstruction::ROR, AddressingMode::ACC, Access::Read, 0), // 0x6A
    Instruction(BaseInstruction::RTL, AddressingMode::IMP, Access::Read, 1), // 0x6B
    Instruction(BaseInstruction::JMP, AddressingMode::IND, Access::Read, 0), // 0x6C
    Instruction(BaseInstruction::ADC, AddressingMode::ABS, Access::Read, 0), // 0x6D
    Instruction(BaseInstruction::ROR, AddressingMode::ABS, Access::Modify, 1), // 0x6E
    Instruction(BaseInstruction::ADC, AddressingMode::ABL, Access::Read, 0), // 0x6F
    //
    Instruction(BaseInstruction::BVS, AddressingMode::REL, Access::Read, 0), // 0x70
    Instruction(BaseInstruction::ADC, AddressingMode::DIY, Access::Read, 0), // 0x71
    Instruction(BaseInstruction::ADC, AddressingMode::DIN, Access::Read, 0), // 0x72
    Instruction(BaseInstruction::ADC, AddressingMode::SRY, Access::Read, 0), // 0x73
    Instruction(BaseInstruction::STZ, AddressingMode::DRX, Access::Write, 0), // 0x74
    Instruction(BaseInstruction::ADC, AddressingMode::DRX, Access::Read, 0), // 0x75
    Instruction(BaseInstruction::ROR, AddressingMode::DRX, Access::Modify, 1), // 0x76
    Instruction(BaseInstruction::ADC, AddressingMode::DLY, Access::Read, 0), // 0x77
    Instruction(BaseInstruction::SEI, AddressingMode::IMP, Access::Read, 0), // 0x78
    Instruction(BaseInstruction::ADC, AddressingMode::ABY, Access::Read, 0), // 0x79
    Instruction(BaseInstruction::PLY, AddressingMode::IMP, Access::Read, 1), // 0x7A
    Instruction(BaseInstruction::TDC, AddressingMode::IMP, Access::Read, 0), // 0x7B
    Instruction(BaseInstruction::JMP, AddressingMode::IAX, Access::Read, 0), // 0x7C
    Instruction(BaseInstruction::ADC, AddressingMode::ABX, Access::Read, 0), // 0x7D
    Instruction(BaseInstruction::ROR, AddressingMode::ABX, Access::Modify, 1), // 0x7E
    Instruction(BaseInstruction::ADC, AddressingMode::ALX, Access::Read, 0), // 0x7F
    //
    Instruction(BaseInstruction::BRA, AddressingMode::REL, Access::Read, 0), // 0x80
    Instruction(BaseInstruction::STA, AddressingMode::DIX, Access::Write, 0), // 0x81
    Instruction(BaseInstruction::BRL, AddressingMode::RLL, Access::Read, 0), // 0x82
    Instruction(BaseInstruction::STA, AddressingMode::SRL, Access::Write, 0), // 0x83
    Instruction(BaseInstruction::STY, AddressingMode::DIR, Access::Write, 0), // 0x84
    Instruction(BaseInstruction::STA, AddressingMode::DIR, Access::Write, 0), // 0x85
    Instruction(BaseInstruction::STX, AddressingMode::DIR, Access::Write, 0), // 0x86
    Instruction(BaseInstruction::STA, AddressingMode::DIL, Access::Write, 0), // 0x87
    Instruction(BaseInstruction::DEY, AddressingMode::IMP, Access::Read, 0), // 0x88
    Instruction(BaseInstruction::BIT, AddressingMode::IMM, Access::Read, 0), // 0x89
    Instruction(BaseInstruction::TXA, AddressingMode::IMP, Access::Read, 0), // 0x8A
    Instruction(BaseInstruction::PHB, AddressingMode::IMP, Access::Read, 0), // 0x8B
    Instruction(BaseInstruction::STY, AddressingMode::ABS, Access::Write, 0), // 0x8C
    Instruction(BaseInstruction::STA, AddressingMode::ABS, Access::Write, 0), // 0x8D
    Instruction(BaseInstruction::STX, AddressingMode::ABS, Access::Write, 0), // 0x8E
    Instruction(BaseInstruction::STA, AddressingMode::ABL, Access::Write, 0), // 0x8F
    //
    Instruction(BaseInstruction::BCC, AddressingMode::REL, Access::Read, 0), // 0x90
    Instruction(BaseInstruction::STA, AddressingMode::DIY, Access::Write, 0), // 0x91
    Instruction(BaseInstruction::STA, AddressingMode::DIN, Access::Write, 0), // 0x92
    Instruction(BaseInstruction::STA, AddressingMode::SRY, Access::Write, 0), // 0x93
    Instruction(BaseInstruction::STY, AddressingMode::DRX, Access::Write, 0), // 0x94
    Instruction(BaseInstruction::STA, AddressingMode::DRX, Access::Write, 0), // 0x95
    Instruction(BaseInstruction::STX, AddressingMode::DRY, Access::Write, 0), // 0x96
    Instruction(BaseInstruction::STA, AddressingMode::DLY, Access::Write, 0), // 0x97
    Instruction(BaseInstruction::TYA, AddressingMode::IMP, Access::Read, 0), // 0x98
    Instruction(BaseInstruction::STA, AddressingMode::ABY, Access::Write, 0), // 0x99
    Instruction(BaseInstruction::TXS, AddressingMode::IMP, Access::Read, 0), // 0x9A
    Instruction(BaseInstruction::TXY, AddressingMode::IMP, Access::Read, 0), // 0x9B
    Instruction(BaseInstruction::STZ, AddressingMode::ABS, Access::Write, 0), // 0x9C
    Instruction(BaseInstruction::STA, AddressingMode::ABX, Access::Write, 0), // 0x9D
    Instruction(BaseInstruction::STZ, AddressingMode::ABX, Access::Write, 0), // 0x9E
    Instruction(BaseInstruction::STA, AddressingMode::ALX, Access::Write, 0), // 0x9F
    //
    Instruction(BaseInstruction::LDY, AddressingMode::IMX, Access::Read, 0), // 0xA0
    Instruction(BaseInstruction::LDA, AddressingMode::DIX, Access::Read, 0), // 0xA1
    Instruction(BaseInstruction::LDX, AddressingMode::IMX, Access::Read, 0), // 0xA2
    Instruction(BaseInstruction::LDA, AddressingMode::SRL, Access::Read, 0), // 0xA3
    Instruction(BaseInstruction::LDY, AddressingMode::DIR, Access::Read, 0), // 0xA4
    Instruction(BaseInstruction::LDA, AddressingMode::DIR, Access::Read, 0), // 0xA5
    Instruction(BaseInstruction::LDX, AddressingMode::DIR, Access::Read, 0), // 0xA6
    Instruction(BaseInstruction::LDA, AddressingMode::DIL, Access::Read, 0), // 0xA7
    Instruction(BaseInstruction::TAY, AddressingMode::IMP, Access::Read, 0), // 0xA8
    Instruction(BaseInstruction::LDA, AddressingMode::IMM, Access::Read, 0), // 0xA9
    Instruction(BaseInstruction::TAX, AddressingMode::IMP, Access::Read, 0), // 0xAA
    Instruction(BaseInstruction::PLB, AddressingMode::IMP, Access::Read, 1), // 0xAB
    Instruction(BaseInstruction::LDY, AddressingMode::ABS, Access::Read, 0), // 0xAC
    Instruction(BaseInstruction::LDA, AddressingMode::ABS, Access::Read, 0), // 0xAD
    Instruction(BaseInstruction::LDX, AddressingMode::ABS, Access::Read, 0), // 0xAE
    Instruction(BaseInstruction::LDA, AddressingMode::ABL, Access::Read, 0), // 0xAF
    //
    Instruction(BaseInstruction::BCS, AddressingMode::REL, Access::Read, 0), // 0xB0
    Instruction(BaseInstruction::LDA, AddressingMode::DIY, Access::Read, 0), // 0xB1
    Instruction(BaseInstruction::LDA, AddressingMode::DIN, Access::Read, 0), // 0xB2
    Instruction(BaseInstruction::LDA, AddressingMode::SRY, Access::Read, 0), // 0xB3
    Instruction(BaseInstruction::LDY, AddressingMode::DRX, Access::Read, 0), // 0xB4
    Instruction(BaseInstruction::LDA, AddressingMode::DRX, Access::Read, 0), // 0xB5
    Instruction(BaseInstruction::LDX, AddressingMode::DRY, Access::Read, 0), // 0xB6
    Instruction(BaseInstruction::LDA, AddressingMode::DLY, Access::Read, 0), // 0xB7
    Instruction(BaseInstruction::CLV, AddressingMode::IMP, Access::Read, 0), // 0xB8
    Instruction(BaseInstruction::LDA, AddressingMode::ABY, Access::Read, 0), // 0xB9
    Instruction(BaseInstruction::TSX, AddressingMode::IMP, Access::Read, 0), // 0xBA
    Instruction(BaseInstruction::TYX, AddressingMode::IMP, Access::Read, 0), // 0xBB
    Instruction(BaseInstruction::LDY, AddressingMode::ABX, Access::Read, 0), // 0xBC
    Instruction(BaseInstruction::LDA, AddressingMode::ABX, Access::Read, 0), // 0xBD
    Instruction(BaseInstruction::LDX, AddressingMode::ABY, Access::Read, 0), // 0xBE
    Instruction(BaseInstruction::LDA, AddressingMode::ALX, Access::Read, 0), // 0xBF
    //
    Instruction(BaseInstruction::CPY, AddressingMode::IMX, Access::Read, 0), // 0xC0
    Instruction(BaseInstruction::CMP, AddressingMode::DIX, Access::Read, 0), // 0xC1
    Instruction(BaseInstruction::REP, AddressingMode::IMB, Access::Read, 1), // 0xC2
    Instruction(BaseInstruction::CMP, AddressingMode::SRL, Access::Read, 0), // 0xC3
    Instruction(BaseInstruction::CPY, AddressingMode::DIR, Access::Read, 0), // 0xC4
    Instruction(BaseInstruction::CMP, AddressingMode::DIR, Access::Read, 0), // 0xC5
    Instruction(BaseInstruction::DEC, AddressingMode::DIR, Access::Modify, 1), // 0xC6
    Instruction(BaseInstruction::CMP, AddressingMode::DIL, Access::Read, 0), // 0xC7
    Instruction(BaseInstruction::INY, AddressingMode::IMP, Access::Read, 0), // 0xC8
    Instruction(BaseInstruction::CMP, AddressingMode::IMM, Access::Read, 0), // 0xC9
    Instruction(BaseInstruction::DEX, AddressingMode::IMP, Access::Read, 0), // 0xCA
    Instruction(BaseInstruction::WAI, AddressingMode::IMP, Access::Read, 1), // 0xCB
    Instruction(BaseInstruction::CPY, AddressingMode::ABS, Access::Read, 0), // 0xCC
    Instruction(BaseInstruction::CMP, AddressingMode::ABS, Access::Read, 0), // 0xCD
    Instruction(BaseInstruction::DEC, AddressingMode::ABS, Access::Modify, 1), // 0xCE
    Instruction(BaseInstruction::CMP, AddressingMode::ABL, Access::Read, 0), // 0xCF
    //
    Instruction(BaseInstruction::BNE, AddressingMode::REL, Access::Read, 0), // 0xD0
    Instruction(BaseInstruction::CMP, AddressingMode::DIY, Access::Read, 0), // 0xD1
    Instruction(BaseInstruction::CMP, AddressingMode::DIN, Access::Read, 0), // 0xD2
    Instruction(BaseInstruction::CMP, AddressingMode::SRY, Access::Read, 0), // 0xD3
    Instruction(BaseInstruction::PEI, AddressingMode::DIR, Access::Read, 0), // 0xD4
    Instruction(BaseInstruction::CMP, AddressingMode::DRX, Access::Read, 0), // 0xD5
    Instruction(BaseInstruction::DEC, AddressingMode::DRX, Access::Modify, 1), // 0xD6
    Instruction(BaseInstruction::CMP, AddressingMode::DLY, Access::Read, 0), // 0xD7
    Instruction(BaseInstruction::CLD, AddressingMode::IMP, Access::Read, 0), // 0xD8
    Instruction(BaseInstruction::CMP, AddressingMode::ABY, Access::Read, 0), // 0xD9
    Instruction(BaseInstruction::PHX, AddressingMode::IMP, Access::Read, 0), // 0xDA
    Instruction(BaseInstruction::STP, AddressingMode::IMP, Access::Read, 1), // 0xDB
    Instruction(BaseInstruction::JMP, AddressingMode::INL, Access::Read, 0), // 0xDC
    Instruction(BaseInstruction::CMP, AddressingMode::ABX, Access::Read, 0), // 0xDD
    Instruction(BaseInstruction::DEC, AddressingMode::ABX, Access::Modify, 1), // 0xDE
    Instruction(BaseInstruction::CMP, AddressingMode::ALX, Access::Read, 0), // 0xDF
    //
    Instruction(BaseInstruction::CPX, AddressingMode::IMX, Access::Read, 0), // 0xE0
    Instruction(BaseInstruction::SBC, AddressingMode::DIX, Access::Read, 0), // 0xE1
    Instruction(BaseInstruction::SEP, AddressingMode::IMB, Access::Read, 1), // 0xE2
    Instruction(BaseInstruction::SBC, AddressingMode::SRL, Access::Read, 0), // 0xE3
    Instruction(BaseInstruction::CPX, AddressingMode::DIR, Access::Read, 0), // 0xE4
    Instruction(BaseInstruction::SBC, AddressingMode::DIR, Access::Read, 0), // 0xE5
    Instruction(BaseInstruction::INC, AddressingMode::DIR, Access::Modify, 1), // 0xE6
    Instruction(BaseInstruction::SBC, AddressingMode::DIL, Access::Read, 0), // 0xE7
    Instruction(BaseInstruction::INX, AddressingMode::IMP, Access::Read, 0), // 0xE8
    Instruction(BaseInstruction::SBC, AddressingMode::IMM, Access::Read, 0), // 0xE9
    Instruction(BaseInstruction::NOP, AddressingMode::IMP, Access::Read, 0), // 0xEA
    Instruction(BaseInstruction::XBA, AddressingMode::IMP, Access::Read, 1), // 0xEB
    Instruction(BaseInstruction::CPX, AddressingMode::ABS, Access::Read, 0), // 0xEC
    Instruction(BaseInstruction::SBC, AddressingMode::ABS, Access::Read, 0), // 0xED
    Instruction(BaseInstruction::INC, AddressingMode::ABS, Access::Modify, 1), // 0xEE
    Instruction(BaseInstruction::SBC, AddressingMode::ABL, Access::Read, 0), // 0xEF
    //
    Instruction(BaseInstruction::BEQ, AddressingMode::REL, Access::Read, 0), // 0xF0
    Instruction(BaseInstruction::SBC, AddressingMode::DIY, Access::Read, 0), // 0xF1
    Instruction(BaseInstruction::SBC, AddressingMode::DIN, Access::Read, 0), // 0xF2
    Instruction(BaseInstruction::SBC, AddressingMode::SRY, Access::Read, 0), // 0xF3
    Instruction(BaseInstruction::PEA, AddressingMode::IMW, Access::Read, 0), // 0xF4
    Instruction(BaseInstruction::SBC, AddressingMode::DRX, Access::Read, 0), // 0xF5
    Instruction(BaseInstruction::INC, AddressingMode::DRX, Access::Modify, 1), // 0xF6
    Instruction(BaseInstruction::SBC, AddressingMode::DLY, Access::Read, 0), // 0xF7
    Instruction(BaseInstruction::SED, AddressingMode::IMP, Access::Read, 0), // 0xF8
    Instruction(BaseInstruction::SBC, AddressingMode::ABY, Access::Read, 0), // 0xF9
    Instruction(BaseInstruction::PLX, AddressingMode::IMP, Access::Read, 1), // 0xFA
    Instruction(BaseInstruction::XCE, AddressingMode::IMP, Access::Read, 0), // 0xFB
    Instruction(BaseInstruction::JSR, AddressingMode::IAX, Access::Read, 0), // 0xFC
    Instruction(BaseInstruction::SBC, AddressingMode::ABX, Access::Read, 0), // 0xFD
    Instruction(BaseInstruction::INC, AddressingMode::ABX, Access::Modify, 1), // 0xFE
    Instruction(BaseInstruction::SBC, AddressingMode::ALX, Access::Read, 0), // 0xFF
];
