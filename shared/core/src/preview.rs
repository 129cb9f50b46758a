use serde::Serialize;

use crate::{
    derive_parameters, raw_exponent, suggest_increment, DerivationError, GeneratorParameters,
    Method,
};

/// What the parameter panel shows while the user is still typing.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ParameterPreview {
    pub method: Method,
    pub k: Option<i64>,
    pub period: Option<i64>,
    #[serde(serialize_with = "serialize_parameters")]
    pub parameters: Result<GeneratorParameters, DerivationError>,
    /// Unrounded exponent, shown next to the forced integer `g`.
    pub raw_log2: Option<f64>,
    pub suggested_increment: Option<u64>,
    /// Linear only: an increment was entered and it is not below `m`.
    pub increment_not_below_modulus: bool,
}

impl ParameterPreview {
    pub fn parameters(&self) -> Option<&GeneratorParameters> {
        self.parameters.as_ref().ok()
    }
}

fn serialize_parameters<S: serde::Serializer>(
    parameters: &Result<GeneratorParameters, DerivationError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match parameters {
        Ok(params) => params.serialize(serializer),
        Err(err) => serializer.serialize_str(&err.to_string()),
    }
}

/// Recomputes the preview from scratch. Call it again on every input change.
pub fn preview(
    k: Option<i64>,
    period: Option<i64>,
    method: Method,
    increment: Option<i64>,
) -> ParameterPreview {
    let parameters = derive_parameters(k, period, method);
    let raw_log2 = period
        .filter(|&p| p > 0)
        .map(|p| raw_exponent(p as u64, method));

    let linear_m = parameters
        .as_ref()
        .ok()
        .filter(|params| params.method.is_linear())
        .map(|params| params.m);
    let suggested_increment = linear_m.filter(|&m| m > 1).and_then(suggest_increment);
    let increment_not_below_modulus = match (linear_m, increment) {
        (Some(m), Some(c)) => c >= 0 && c as u64 >= m,
        _ => false,
    };

    ParameterPreview {
        method,
        k,
        period,
        parameters,
        raw_log2,
        suggested_increment,
        increment_not_below_modulus,
    }
}
