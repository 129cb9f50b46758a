use tracing::debug;

use crate::number_theory::{is_coprime, is_prime};

/// Smallest `c` in `2..m` that is prime and coprime with `m`.
///
/// A recommendation only; nothing enforces it. The scan is O(m * sqrt(m)) in
/// the worst case, which is fine for the small powers of two this is meant
/// for but not for very large moduli.
pub fn suggest_increment(m: u64) -> Option<u64> {
    if m < 2 {
        return None;
    }
    let suggestion = (2..m).find(|&c| is_coprime(c, m) && is_prime(c));
    debug!(m, ?suggestion, "suggested increment");
    suggestion
}
