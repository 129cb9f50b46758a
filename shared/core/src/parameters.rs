use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::Method;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DerivationError {
    #[error("k must be a positive integer")]
    InvalidK,

    #[error("P must be a positive integer")]
    InvalidPeriod,

    #[error("multiplier a = {base} + {step}k overflows for k = {k}")]
    MultiplierOverflow { base: u64, step: u64, k: i64 },

    #[error("modulus m = 2^{g} does not fit in 64 bits")]
    ModulusOverflow { g: u32 },
}

/// Constants of one generator, derived from `k`, `P` and the method.
///
/// `m` is always `2^g`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorParameters {
    pub a: u64,
    pub m: u64,
    pub g: u32,
    pub method: Method,
}

/// The real-valued exponent before rounding: `log2(P)`, plus 2 for the
/// multiplicative family.
pub fn raw_exponent(period: u64, method: Method) -> f64 {
    (period as f64).log2() + method.exponent_offset()
}

fn positive(value: Option<i64>) -> Option<u64> {
    value.filter(|&v| v > 0).map(|v| v as u64)
}

/// Computes `a`, `g` and `m` for the given method.
///
/// `g` is the rounded exponent, so `2^g` need not equal `P` when `P` is not a
/// power of two. The validator rejects such periods separately.
pub fn derive_parameters(
    k: Option<i64>,
    period: Option<i64>,
    method: Method,
) -> Result<GeneratorParameters, DerivationError> {
    let k_value = positive(k).ok_or(DerivationError::InvalidK)?;
    let period = positive(period).ok_or(DerivationError::InvalidPeriod)?;

    let (base, step) = method.multiplier_form();
    let a = step
        .checked_mul(k_value)
        .and_then(|x| x.checked_add(base))
        .ok_or(DerivationError::MultiplierOverflow {
            base,
            step,
            k: k_value as i64,
        })?;

    let g = raw_exponent(period, method).round() as u32;
    let m = 1u64
        .checked_shl(g)
        .ok_or(DerivationError::ModulusOverflow { g })?;

    debug!(%method, a, g, m, "derived generator parameters");
    Ok(GeneratorParameters { a, m, g, method })
}
