// Congruential recurrence x' = (a * x + c) mod m
// https://en.wikipedia.org/wiki/Linear_congruential_generator
//
// With c = 0 this is the multiplicative (Lehmer) form.

use crate::GeneratorParameters;

/// Only built from validated parameters, which guarantee `m >= 1`.
pub(crate) struct LCG {
    state: u64,
    a: u64,
    c: u64,
    m: u64,
}

impl LCG {
    fn new(seed: u64, a: u64, c: u64, m: u64) -> Self {
        LCG { state: seed, a, c, m }
    }

    /// Builds the recurrence for validated parameters; the increment is
    /// ignored for the multiplicative family.
    pub(crate) fn from_parameters(seed: u64, params: &GeneratorParameters, increment: u64) -> Self {
        let c = if params.method.is_linear() { increment } else { 0 };
        Self::new(seed, params.a, c, params.m)
    }

    pub(crate) fn state(&self) -> u64 {
        self.state
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        // widened so a * x never wraps; the result is < m and fits back in u64
        let next = (self.a as u128 * self.state as u128 + self.c as u128) % self.m as u128;
        self.state = next as u64;
        self.state
    }
}

impl Iterator for LCG {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.next_u64())
    }
}
