#![allow(clippy::needless_range_loop)]

#[doc(inline)]
pub use self::{
    bits::Taps,
    counter::{BitList, Packed, PolynomialCounter, Register, SeedError},
    cycle::CycleStructure,
    demo::{Lockstep, Row},
};

pub mod bits;
pub mod counter;
pub mod cycle;
pub mod demo;

/// Polynomial counter width in bits
pub const BIT_WIDTH: usize = 6;
/// Mask of the register bits
pub const WIDTH_MASK: u8 = (1 << BIT_WIDTH) - 1;
/// All bits set, the lockup state of the xnor feedback
pub const ILLEGAL_STATE: u8 = WIDTH_MASK;
