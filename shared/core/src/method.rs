use std::fmt;

use serde::{Deserialize, Serialize};

/// The generator family, and for the multiplicative family, the multiplier form.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Mixed linear generator, `a = 1 + 4k`.
    Lcg,
    /// Multiplicative generator with `a = 3 + 8k`.
    McgA3,
    /// Multiplicative generator with `a = 5 + 8k`.
    McgA5,
}

impl Method {
    pub fn is_linear(self) -> bool {
        matches!(self, Method::Lcg)
    }

    pub fn is_multiplicative(self) -> bool {
        !self.is_linear()
    }

    /// `(base, step)` such that `a = base + step * k`.
    pub fn multiplier_form(self) -> (u64, u64) {
        match self {
            Method::Lcg => (1, 4),
            Method::McgA3 => (3, 8),
            Method::McgA5 => (5, 8),
        }
    }

    /// Added to `log2(P)` before rounding to get `g`.
    pub(crate) fn exponent_offset(self) -> f64 {
        match self {
            Method::Lcg => 0.0,
            Method::McgA3 | Method::McgA5 => 2.0,
        }
    }

    /// Family name used for export file names.
    pub fn family_name(self) -> &'static str {
        match self {
            Method::Lcg => "linear",
            Method::McgA3 | Method::McgA5 => "multiplicative",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (base, step) = self.multiplier_form();
        match self {
            Method::Lcg => write!(f, "LCG (a = {base} + {step}k)"),
            Method::McgA3 | Method::McgA5 => write!(f, "MCG (a = {base} + {step}k)"),
        }
    }
}
