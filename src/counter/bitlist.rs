use super::Register;
use crate::{bits, BIT_WIDTH};

/// Register bits kept as booleans, most significant first.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct BitList {
    bits: [bool; BIT_WIDTH],
}

impl Register for BitList {
    const NAME: &'static str = "BitList";

    fn load(value: u8) -> Self {
        BitList {
            bits: bits::to_bits(value),
        }
    }

    fn shift(&mut self) {
        let tap0 = self.bits[BIT_WIDTH - 1];
        let tap1 = self.bits[BIT_WIDTH - 2];
        let inbit = tap0 == tap1;

        self.bits.copy_within(0..BIT_WIDTH - 1, 1);
        self.bits[0] = inbit;
    }

    fn value(&self) -> u8 {
        bits::from_bits(&self.bits)
    }
}
