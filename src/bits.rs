use crate::BIT_WIDTH;
use bitflags::bitflags;

bitflags! {
    /// Feedback taps of the TIA polynomial counter.
    pub struct Taps: u8 {
        const BIT0 = 0b00_0001;
        const BIT1 = 0b00_0010;
    }
}

impl Taps {
    /// Xnor of both taps, the bit shifted in at the top.
    pub fn feedback(self) -> bool {
        self.is_all() || self.is_empty()
    }
}

/// Splits `value` into register bits, most significant first.
pub fn to_bits(value: u8) -> [bool; BIT_WIDTH] {
    let mut bits = [false; BIT_WIDTH];
    for j in 0..BIT_WIDTH {
        bits[j] = value & (1 << (BIT_WIDTH - 1 - j)) != 0;
    }
    bits
}

pub fn from_bits(bits: &[bool; BIT_WIDTH]) -> u8 {
    bits.iter()
        .enumerate()
        .fold(0, |acc, (j, &bit)| acc | ((bit as u8) << (BIT_WIDTH - 1 - j)))
}

/// Zero padded binary form, e.g. `000101`.
pub fn to_binary_string(value: u8) -> String {
    format!("{:0width$b}", value, width = BIT_WIDTH)
}
