mod input;
mod lcg;
mod method;
pub mod number_theory;
mod parameters;
mod preview;
mod sequence;
mod suggest;
mod validation;

pub use input::{
    parse_integer, DecimalPlaces, GenerationInput, InputError, DEFAULT_DECIMAL_PLACES,
    MAX_DECIMAL_PLACES,
};
pub use method::Method;
pub use parameters::{derive_parameters, raw_exponent, DerivationError, GeneratorParameters};
pub use preview::{preview, ParameterPreview};
pub use sequence::{generate_sequence, normalize, Sequence, SequenceRow};
pub use suggest::suggest_increment;
pub use validation::{validate_inputs, ValidatedInput, ValidationError};

/// Full pipeline: raw-input rules, derivation, the remaining rules, then the
/// recurrence. Nothing is generated unless every rule passes.
pub fn generate(input: &GenerationInput) -> Result<Sequence, ValidationError> {
    validation::check_common(input)?;
    let params = derive_parameters(input.k, input.period, input.method)?;
    let validated = validate_inputs(input, &params)?;
    Ok(generate_sequence(&validated))
}
