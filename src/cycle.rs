//! Cycle structure of the polynomial counter's feedback rule.
//!
//! The rule maps each of the 64 register values to exactly one successor, so
//! the state graph splits into cycles plus transient states leading into them.
//! The analysis walks raw registers, which lets it look at the illegal state
//! too.

use crate::counter::{PolynomialCounter, Register};
use crate::{BIT_WIDTH, ILLEGAL_STATE};
use log::debug;
use std::fmt;

const STATES: usize = 1 << BIT_WIDTH;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CycleStructure {
    /// Each cycle in shift order, starting from its smallest state.
    cycles: Vec<Vec<u8>>,
    transients: Vec<u8>,
}

impl CycleStructure {
    pub fn cycles(&self) -> &[Vec<u8>] {
        &self.cycles
    }

    /// States not on any cycle.
    pub fn transients(&self) -> &[u8] {
        &self.transients
    }

    pub fn fixed_points(&self) -> Vec<u8> {
        self.cycles
            .iter()
            .filter(|cycle| cycle.len() == 1)
            .map(|cycle| cycle[0])
            .collect()
    }

    /// One cycle runs through every legal state.
    pub fn is_maximal_length(&self) -> bool {
        self.cycles
            .iter()
            .any(|cycle| cycle.len() == ILLEGAL_STATE as usize && !cycle.contains(&ILLEGAL_STATE))
    }
}

impl fmt::Display for CycleStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cycle in &self.cycles {
            write!(f, "cycle of {:>2}:", cycle.len())?;
            for state in cycle {
                write!(f, " {}", state)?;
            }
            writeln!(f)?;
        }
        if self.transients.is_empty() {
            writeln!(f, "transient states: none")?;
        } else {
            writeln!(f, "transient states: {:?}", self.transients)?;
        }
        write!(
            f,
            "maximal length: {}",
            if self.is_maximal_length() { "yes" } else { "no" }
        )
    }
}

pub fn analyze<R: Register>() -> CycleStructure {
    let next: Vec<usize> = (0..STATES)
        .map(|state| {
            let mut reg = R::load(state as u8);
            reg.shift();
            reg.value() as usize
        })
        .collect();

    let mut visited = [false; STATES];
    let mut on_cycle = [false; STATES];
    let mut cycles = Vec::new();

    for start in 0..STATES {
        if visited[start] {
            continue;
        }

        let mut path = Vec::new();
        let mut state = start;
        while !visited[state] {
            visited[state] = true;
            path.push(state as u8);
            state = next[state];
        }

        // walk closed on itself, otherwise it ran into an earlier walk
        if let Some(pos) = path.iter().position(|&s| s as usize == state) {
            let mut cycle = path.split_off(pos);
            for &s in &cycle {
                on_cycle[s as usize] = true;
            }
            if let Some(min) = cycle
                .iter()
                .enumerate()
                .min_by_key(|&(_, s)| *s)
                .map(|(i, _)| i)
            {
                cycle.rotate_left(min);
            }
            cycles.push(cycle);
        }
    }

    let transients = (0..STATES)
        .filter(|&state| !on_cycle[state])
        .map(|state| state as u8)
        .collect();

    debug!("{}: {} cycle(s) over {} states", R::NAME, cycles.len(), STATES);
    CycleStructure { cycles, transients }
}

/// Shifts until `counter` first comes back to its current state.
pub fn period<R: Register>(counter: &PolynomialCounter<R>) -> usize {
    let start = counter.to_integer();
    let mut probe = *counter;
    let mut steps = 0;
    loop {
        probe.shift();
        steps += 1;
        if probe.to_integer() == start {
            return steps;
        }
    }
}
