use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{info, trace, warn};

use crate::lcg::LCG;
use crate::{DecimalPlaces, GeneratorParameters, ValidatedInput};

/// One step of the recurrence.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SequenceRow {
    pub n: u64,
    pub previous_value: u64,
    pub formula_trace: String,
    pub current_value: u64,
    pub normalized_value: String,
    #[serde(default)]
    pub is_verification: bool,
}

/// The `P` generated rows plus the extra step at `n = P + 1`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Sequence {
    pub params: GeneratorParameters,
    pub rows: Vec<SequenceRow>,
    pub verification: SequenceRow,
}

impl Sequence {
    /// Whether the verification step reproduced the first generated value,
    /// i.e. the requested period closed one full cycle.
    pub fn cycle_closed(&self) -> bool {
        self.rows
            .first()
            .is_some_and(|first| first.current_value == self.verification.current_value)
    }

    pub fn distinct_values(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.current_value)
            .collect::<HashSet<_>>()
            .len()
    }
}

fn formula_trace(params: &GeneratorParameters, previous: u64, increment: u64) -> String {
    if params.method.is_linear() {
        format!("{} * {} + {} (mod {})", params.a, previous, increment, params.m)
    } else {
        format!("{} * {} (mod {})", params.a, previous, params.m)
    }
}

/// `x / (m - 1)` as a fixed-point string.
pub fn normalize(value: u64, m: u64, decimal_places: DecimalPlaces) -> String {
    let denominator = m.saturating_sub(1).max(1);
    format!(
        "{:.*}",
        decimal_places.get(),
        value as f64 / denominator as f64
    )
}

fn step(
    rng: &mut LCG,
    n: u64,
    validated: &ValidatedInput,
    is_verification: bool,
) -> SequenceRow {
    let params = &validated.params;
    let previous_value = rng.state();
    let current_value = rng.next_u64();
    trace!(n, previous_value, current_value, "step");
    SequenceRow {
        n,
        previous_value,
        formula_trace: formula_trace(params, previous_value, validated.increment),
        current_value,
        normalized_value: normalize(current_value, params.m, validated.input.decimal_places),
        is_verification,
    }
}

/// Runs the recurrence `P` times from the seed, then once more for the
/// verification row.
pub fn generate_sequence(validated: &ValidatedInput) -> Sequence {
    let params = validated.params;
    let mut rng = LCG::from_parameters(validated.seed, &params, validated.increment);

    let rows = (1..=validated.period)
        .map(|n| step(&mut rng, n, validated, false))
        .collect::<Vec<_>>();
    let verification = step(&mut rng, validated.period + 1, validated, true);

    let sequence = Sequence {
        params,
        rows,
        verification,
    };
    if sequence.cycle_closed() {
        info!(
            method = %params.method,
            rows = sequence.rows.len(),
            "generated sequence, cycle closed"
        );
    } else {
        warn!(
            method = %params.method,
            rows = sequence.rows.len(),
            distinct = sequence.distinct_values(),
            "generated sequence, verification row does not repeat the first row"
        );
    }
    sequence
}
