use super::Register;
use crate::bits::Taps;
use crate::{BIT_WIDTH, WIDTH_MASK};

/// Register bits packed into one byte, closest to how the TIA does it.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Packed(u8);

impl Register for Packed {
    const NAME: &'static str = "Packed";

    fn load(value: u8) -> Self {
        Packed(value & WIDTH_MASK)
    }

    fn shift(&mut self) {
        let inbit = Taps::from_bits_truncate(self.0).feedback() as u8;
        self.0 = (inbit << (BIT_WIDTH - 1)) | (self.0 >> 1);
    }

    fn value(&self) -> u8 {
        self.0
    }
}
