// TIA polynomial counter
//
//  bit  5   4   3   2   1   0
//      [ ] [ ] [ ] [ ] [ ] [ ]  >> 1
//       ^                |   |
//       +---- xnor ------+---+
//
// Six bit lfsr with taps on bits 0 and 1. All ones (63) is a lockup state
// and is never a legal seed.

use crate::{bits, BIT_WIDTH, ILLEGAL_STATE};
use log::{debug, trace};
use std::convert::TryFrom;
use std::fmt;

mod bitlist;
mod packed;

pub use self::bitlist::BitList;
pub use self::packed::Packed;

/// Backing storage of a polynomial counter.
pub trait Register: Copy + Eq {
    /// Representation name, used in logs.
    const NAME: &'static str;

    /// Builds the register holding `value`. No validation is done here.
    fn load(value: u8) -> Self;
    /// One feedback cycle.
    fn shift(&mut self);
    fn value(&self) -> u8;
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum SeedError {
    #[error("seed value {0} out of range 0..={max}", max = ILLEGAL_STATE)]
    OutOfRange(i64),
    #[error("seed value {} creates illegal state", ILLEGAL_STATE)]
    IllegalState,
}

#[derive(Clone, Copy, Eq, PartialEq)]
pub struct PolynomialCounter<R: Register = Packed> {
    reg: R,
}

impl<R: Register> PolynomialCounter<R> {
    pub fn new(seed: i64) -> Result<Self, SeedError> {
        if seed < 0 || seed > ILLEGAL_STATE as i64 {
            debug!("{}: rejected seed {}", R::NAME, seed);
            return Err(SeedError::OutOfRange(seed));
        }
        if seed == ILLEGAL_STATE as i64 {
            debug!("{}: rejected illegal seed", R::NAME);
            return Err(SeedError::IllegalState);
        }

        debug!("{}: seeded with {}", R::NAME, seed);
        Ok(PolynomialCounter {
            reg: R::load(seed as u8),
        })
    }

    pub fn shift(&mut self) {
        let prev = self.reg.value();
        self.reg.shift();

        let next = self.reg.value();
        if next == ILLEGAL_STATE {
            unreachable!("{}: shifted {} into the illegal state", R::NAME, prev);
        }
        trace!("{}: {:02} -> {:02}", R::NAME, prev, next);
    }

    pub fn advance(&mut self, steps: usize) {
        for _ in 0..steps {
            self.shift();
        }
    }

    pub fn to_integer(&self) -> u8 {
        self.reg.value()
    }

    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl<R: Register> Default for PolynomialCounter<R> {
    fn default() -> Self {
        PolynomialCounter { reg: R::load(0) }
    }
}

impl<R: Register> TryFrom<i64> for PolynomialCounter<R> {
    type Error = SeedError;

    fn try_from(seed: i64) -> Result<Self, Self::Error> {
        Self::new(seed)
    }
}

impl<R: Register> From<&PolynomialCounter<R>> for u8 {
    fn from(counter: &PolynomialCounter<R>) -> u8 {
        counter.to_integer()
    }
}

impl<R: Register> fmt::Display for PolynomialCounter<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.reg.value();
        write!(f, "{}   {:>2}", bits::to_binary_string(value), value)
    }
}

impl<R: Register> fmt::Debug for PolynomialCounter<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:0width$b})",
            R::NAME,
            self.reg.value(),
            width = BIT_WIDTH
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_seeds<R: Register>() {
        for seed in -8..=70 {
            let result = PolynomialCounter::<R>::new(seed);
            match seed {
                0..=62 => assert_eq!(result.map(|c| c.to_integer() as i64), Ok(seed)),
                63 => assert_eq!(result, Err(SeedError::IllegalState)),
                _ => assert_eq!(result, Err(SeedError::OutOfRange(seed))),
            }
        }
    }

    #[test]
    fn seed_validation() {
        check_seeds::<BitList>();
        check_seeds::<Packed>();
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            SeedError::OutOfRange(64).to_string(),
            "seed value 64 out of range 0..=63"
        );
        assert_eq!(
            SeedError::IllegalState.to_string(),
            "seed value 63 creates illegal state"
        );
    }

    #[test]
    fn display() {
        let zero = PolynomialCounter::<Packed>::new(0).unwrap();
        let five = PolynomialCounter::<BitList>::new(5).unwrap();
        assert_eq!(zero.to_display_string(), "000000    0");
        assert_eq!(five.to_display_string(), "000101    5");
        assert_eq!(
            PolynomialCounter::<Packed>::new(42).unwrap().to_string(),
            "101010   42"
        );
        assert_eq!(format!("{:?}", five), "BitList(000101)");
    }

    #[test]
    fn default_seed_is_zero() {
        assert_eq!(PolynomialCounter::<BitList>::default().to_integer(), 0);
        assert_eq!(PolynomialCounter::<Packed>::default().to_integer(), 0);
    }

    #[test]
    fn try_from_and_into() {
        let counter = PolynomialCounter::<Packed>::try_from(17).unwrap();
        assert_eq!(u8::from(&counter), 17);
        assert!(PolynomialCounter::<Packed>::try_from(-1).is_err());
    }

    #[test]
    fn representations_agree() {
        for seed in 0..63 {
            let mut list = PolynomialCounter::<BitList>::new(seed).unwrap();
            let mut packed = PolynomialCounter::<Packed>::new(seed).unwrap();
            for _ in 0..64 {
                assert_eq!(list.to_integer(), packed.to_integer());
                assert_eq!(list.to_string(), packed.to_string());
                list.shift();
                packed.shift();
            }
        }
    }

    #[test]
    fn shift_is_deterministic() {
        for seed in 0..63 {
            let mut a = PolynomialCounter::<Packed>::new(seed).unwrap();
            let mut b = a;
            a.shift();
            b.shift();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn never_reaches_illegal_state() {
        for seed in 0..63 {
            let mut counter = PolynomialCounter::<BitList>::new(seed).unwrap();
            for _ in 0..128 {
                counter.shift();
                assert_ne!(counter.to_integer(), ILLEGAL_STATE);
            }
        }
    }

    #[test]
    fn advance_matches_shifts() {
        let mut a = PolynomialCounter::<Packed>::default();
        let mut b = a;
        a.advance(10);
        for _ in 0..10 {
            b.shift();
        }
        assert_eq!(a.to_integer(), b.to_integer());
        assert_eq!(a.to_integer(), 61);
    }
}
