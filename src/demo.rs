// Lockstep demo: a bit list counter and a packed counter seeded alike and
// shifted together, one table row per step.

use crate::counter::{BitList, Packed, PolynomialCounter, SeedError};
use std::fmt;

pub const HEADER: [&str; 2] = [
    " i   List Counter     Bit Counter     Match?",
    "--   ------------     -----------     ------",
];

/// Default number of steps, one full sweep of the six bit register.
pub const DEFAULT_STEPS: usize = 64;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    /// 1-based step index
    pub index: usize,
    pub list: String,
    pub packed: String,
    pub matched: bool,
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>2}   {}      {}      {}",
            self.index,
            self.list,
            self.packed,
            if self.matched { "Yes" } else { "No" }
        )
    }
}

/// Both counters shifted together, yielding one row per step.
#[derive(Debug, Clone)]
pub struct Lockstep {
    list: PolynomialCounter<BitList>,
    packed: PolynomialCounter<Packed>,

    index: usize,
    steps: usize,
}

impl Iterator for Lockstep {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.index >= self.steps {
            return None;
        }

        self.index += 1;
        let row = Row {
            index: self.index,
            list: self.list.to_display_string(),
            packed: self.packed.to_display_string(),
            matched: self.list.to_integer() == self.packed.to_integer(),
        };

        self.list.shift();
        self.packed.shift();
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.steps - self.index;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Lockstep {}

/// Rows are produced lazily, so `steps` may be arbitrarily large.
pub fn lockstep(seed: i64, steps: usize) -> Result<Lockstep, SeedError> {
    Ok(Lockstep {
        list: PolynomialCounter::new(seed)?,
        packed: PolynomialCounter::new(seed)?,

        index: 0,
        steps,
    })
}
