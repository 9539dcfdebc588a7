use num_traits::{
    FromPrimitive, Num, One, ToPrimitive, Unsigned, WrappingAdd, WrappingMul, WrappingShl,
    WrappingShr, WrappingSub, Zero,
};
use std::num::Wrapping;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

#[allow(non_camel_case_types)]
pub type u8w = Wrapping<u8>;
#[allow(non_camel_case_types)]
pub type u16w = Wrapping<u16>;

const U24_MASK: u32 = 0x00FF_FFFF;

/// A wrapping 24-bit unsigned integer, the width of the address bus.
///
/// All constructors and operators mask the value back into 24 bits, so two
/// values that compare equal are bit-identical.
#[allow(non_camel_case_types)]
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U24W(u32);

#[allow(non_camel_case_types)]
pub type u24w = U24W;

/// The widths the core moves data at: 24-bit bus addresses, 16-bit
/// registers, 8-bit bus words.
pub type Address = u24w;
pub type Word = u16w;
pub type Byte = u8w;

impl U24W {
    pub const MAX: Self = U24W(U24_MASK);
    pub const MIN: Self = U24W(0);
    pub const ZERO: Self = U24W(0);
    pub const ONE: Self = U24W(1);

    pub const fn new(value: u32) -> Self {
        U24W(value & U24_MASK)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Composes `bank || offset` into a 24-bit address.
    pub const fn from_bank_offset(bank: u8, offset: u16) -> Self {
        U24W(((bank as u32) << 16) | (offset as u32))
    }

    /// The high 8 bits, selecting one of 256 64-KiB banks.
    pub const fn bank(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// The low 16 bits, the offset within the bank.
    pub const fn offset(self) -> u16 {
        self.0 as u16
    }
}

macro_rules! impl_u24_arith {
    ($op_trait:ident, $op:ident, $assign_trait:ident, $assign:ident, $wrapping:ident) => {
        impl $op_trait for U24W {
            type Output = U24W;

            fn $op(self, rhs: U24W) -> U24W {
                U24W::new(self.0.$wrapping(rhs.0))
            }
        }

        impl $assign_trait for U24W {
            fn $assign(&mut self, rhs: U24W) {
                *self = self.$op(rhs);
            }
        }
    };
}

macro_rules! impl_u24_bitop {
    ($op_trait:ident, $op:ident, $assign_trait:ident, $assign:ident) => {
        impl $op_trait for U24W {
            type Output = U24W;

            fn $op(self, rhs: U24W) -> U24W {
                U24W(self.0.$op(rhs.0))
            }
        }

        impl $assign_trait for U24W {
            fn $assign(&mut self, rhs: U24W) {
                self.0.$assign(rhs.0)
            }
        }
    };
}

impl_u24_arith!(Add, add, AddAssign, add_assign, wrapping_add);
impl_u24_arith!(Sub, sub, SubAssign, sub_assign, wrapping_sub);
impl_u24_arith!(Mul, mul, MulAssign, mul_assign, wrapping_mul);
impl_u24_arith!(Div, div, DivAssign, div_assign, wrapping_div);
impl_u24_arith!(Rem, rem, RemAssign, rem_assign, wrapping_rem);

impl_u24_bitop!(BitAnd, bitand, BitAndAssign, bitand_assign);
impl_u24_bitop!(BitOr, bitor, BitOrAssign, bitor_assign);
impl_u24_bitop!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl Not for U24W {
    type Output = U24W;

    fn not(self) -> U24W {
        U24W::new(!self.0)
    }
}

impl Shl<usize> for U24W {
    type Output = U24W;

    fn shl(self, rhs: usize) -> U24W {
        U24W::new(self.0.wrapping_shl(rhs as u32))
    }
}
impl Shl<u32> for U24W {
    type Output = U24W;

    fn shl(self, rhs: u32) -> U24W {
        U24W::new(self.0.wrapping_shl(rhs))
    }
}
impl ShlAssign<usize> for U24W {
    fn shl_assign(&mut self, rhs: usize) {
        *self = self.shl(rhs);
    }
}

impl Shr<usize> for U24W {
    type Output = U24W;

    fn shr(self, rhs: usize) -> U24W {
        U24W::new(self.0.wrapping_shr(rhs as u32))
    }
}
impl Shr<u32> for U24W {
    type Output = U24W;

    fn shr(self, rhs: u32) -> U24W {
        U24W::new(self.0.wrapping_shr(rhs))
    }
}
impl ShrAssign<usize> for U24W {
    fn shr_assign(&mut self, rhs: usize) {
        *self = self.shr(rhs);
    }
}

impl WrappingAdd for U24W {
    fn wrapping_add(&self, other: &U24W) -> U24W {
        self.add(*other)
    }
}
impl WrappingSub for U24W {
    fn wrapping_sub(&self, other: &U24W) -> U24W {
        self.sub(*other)
    }
}
impl WrappingMul for U24W {
    fn wrapping_mul(&self, other: &U24W) -> U24W {
        self.mul(*other)
    }
}
impl WrappingShl for U24W {
    fn wrapping_shl(&self, rhs: u32) -> U24W {
        self.shl(rhs)
    }
}
impl WrappingShr for U24W {
    fn wrapping_shr(&self, rhs: u32) -> U24W {
        self.shr(rhs)
    }
}

impl Zero for U24W {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
impl One for U24W {
    fn one() -> Self {
        Self::ONE
    }
}
impl Num for U24W {
    type FromStrRadixErr = <u32 as Num>::FromStrRadixErr;

    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        <u32 as Num>::from_str_radix(str, radix).map(U24W::new)
    }
}
impl Unsigned for U24W {}

impl FromPrimitive for U24W {
    fn from_i64(n: i64) -> Option<Self> {
        if (0..=(U24_MASK as i64)).contains(&n) {
            Some(U24W(n as u32))
        } else {
            None
        }
    }

    fn from_u64(n: u64) -> Option<Self> {
        if n <= U24_MASK as u64 {
            Some(U24W(n as u32))
        } else {
            None
        }
    }
}
impl ToPrimitive for U24W {
    fn to_i64(&self) -> Option<i64> {
        Some(self.0 as i64)
    }

    fn to_u64(&self) -> Option<u64> {
        Some(self.0 as u64)
    }
}

impl std::fmt::Display for U24W {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        <u32 as std::fmt::Display>::fmt(&self.0, f)
    }
}
impl std::fmt::UpperHex for U24W {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        <u32 as std::fmt::UpperHex>::fmt(&self.0, f)
    }
}
impl std::fmt::LowerHex for U24W {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        <u32 as std::fmt::LowerHex>::fmt(&self.0, f)
    }
}
