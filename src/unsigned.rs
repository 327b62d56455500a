use std::{
    fmt::{self, Binary, Display, LowerHex},
    ops::{Add, BitAnd, BitOr, BitXor, Not, Shl, Shr, Sub},
};

use crate::{
    cast::{Cast, CastFrom},
    signal::SignalValue,
};

pub const fn unsigned_value(val: u128, width: usize) -> u128 {
    if width >= 128 {
        val
    } else {
        val & ((1 << width) - 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Unsigned<const N: usize>(u128);

impl<const N: usize> Unsigned<N> {
    pub const fn new(value: u128) -> Self {
        Self(unsigned_value(value, N))
    }

    pub const fn inner(self) -> u128 {
        self.0
    }

    pub const fn bit(&self, n: usize) -> bool {
        n < N && (self.0 >> n) & 1 == 1
    }
}

macro_rules! impl_for_unsigned_prim_ty {
    ($( $prim:ty ),+) => {
        $(
            impl SignalValue for $prim {}

            impl <const N: usize> CastFrom<$prim> for Unsigned<N> {
                #[inline]
                fn cast_from(val: $prim) -> Self {
                    Self::new(val as u128)
                }
            }

            impl <const N: usize> CastFrom<Unsigned<N>> for $prim {
                #[inline]
                fn cast_from(val: Unsigned<N>) -> Self {
                    val.0 as $prim
                }
            }
        )+
    };
}

impl_for_unsigned_prim_ty!(u8, u16, u32, u64, u128, usize);

impl<const N: usize> PartialEq<u128> for Unsigned<N> {
    #[inline]
    fn eq(&self, other: &u128) -> bool {
        self.eq(&Self::new(*other))
    }
}

impl<const N: usize> PartialEq<Unsigned<N>> for u128 {
    #[inline]
    fn eq(&self, other: &Unsigned<N>) -> bool {
        other.eq(self)
    }
}

impl<const N: usize> Default for Unsigned<N> {
    fn default() -> Self {
        0_u8.cast()
    }
}

impl<const N: usize> SignalValue for Unsigned<N> {}

impl<const N: usize> Display for Unsigned<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "u({})", self.0)
    }
}

impl<const N: usize> Binary for Unsigned<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "u({:b})", self.0)
    }
}

impl<const N: usize> LowerHex for Unsigned<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "u({:x})", self.0)
    }
}

impl<const N: usize, const M: usize> CastFrom<Unsigned<M>> for Unsigned<N> {
    fn cast_from(from: Unsigned<M>) -> Unsigned<N> {
        Self::new(from.0)
    }
}

macro_rules! impl_bit_ops {
    ($( $trait:ident => $method:ident ),+) => {
        $(
            impl<const N: usize> $trait for Unsigned<N> {
                type Output = Self;

                fn $method(self, rhs: Self) -> Self::Output {
                    Self::new(self.0.$method(rhs.0))
                }
            }

            impl<const N: usize> $trait<u128> for Unsigned<N> {
                type Output = Unsigned<N>;

                fn $method(self, rhs: u128) -> Self::Output {
                    Self::new(self.0.$method(rhs))
                }
            }
        )+
    };
}

impl_bit_ops!(
    BitAnd => bitand,
    BitOr => bitor,
    BitXor => bitxor
);

impl<const N: usize> Add for Unsigned<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.0.wrapping_add(rhs.0))
    }
}

impl<const N: usize> Sub for Unsigned<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.0.wrapping_sub(rhs.0))
    }
}

impl<const N: usize> Shl<usize> for Unsigned<N> {
    type Output = Self;

    fn shl(self, rhs: usize) -> Self::Output {
        Self::new(self.0.wrapping_shl(rhs as u32))
    }
}

impl<const N: usize> Shr<usize> for Unsigned<N> {
    type Output = Self;

    fn shr(self, rhs: usize) -> Self::Output {
        Self(self.0.wrapping_shr(rhs as u32))
    }
}

impl<const N: usize> Not for Unsigned<N> {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::new(!self.0)
    }
}

#[cfg(test)]
mod tests {
    use paste::paste;

    use super::*;

    macro_rules! mask_tests {
        ($( $n:literal ),+) => {
            paste! {
                $(
                    #[test]
                    fn [<masks_to_width_ $n>]() {
                        let u = Unsigned::<$n>::new(u128::MAX);
                        assert_eq!(u.inner(), (1 << $n) - 1);
                    }
                )+
            }
        };
    }

    mask_tests!(3, 4, 5);

    #[test]
    fn cast_round_trip() {
        let u: Unsigned<3> = 5_u8.cast();
        assert_eq!(u8::cast_from(u), 5);
    }

    #[test]
    fn eq_with_literal_masks() {
        let u = Unsigned::<3>::new(0b101);
        assert_eq!(u, 0b101_u128);
        assert_eq!(u, 0b1101_u128);
    }

    #[test]
    fn bits() {
        let u = Unsigned::<5>::new(0b10110);
        assert!(u.bit(1));
        assert!(u.bit(4));
        assert!(!u.bit(0));
        assert!(!u.bit(5));
    }

    #[test]
    fn ops_stay_in_width() {
        let u = Unsigned::<3>::new(0b111);
        assert_eq!(u + Unsigned::new(1), 0_u128);
        assert_eq!(u << 1, 0b110_u128);
        assert_eq!(!Unsigned::<4>::new(0), 0b1111_u128);
    }

    #[test]
    fn display() {
        let u = Unsigned::<5>::new(0b10110);
        assert_eq!(u.to_string(), "u(22)");
        assert_eq!(format!("{u:b}"), "u(10110)");
        assert_eq!(format!("{u:x}"), "u(16)");
    }
}
