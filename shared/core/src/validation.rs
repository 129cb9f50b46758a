use thiserror::Error;

use crate::number_theory::{is_coprime, is_power_of_two, is_prime};
use crate::{DerivationError, GenerationInput, GeneratorParameters};

/// The single reason a generation request was rejected.
///
/// Rules are checked in declaration order and the first violation wins.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("seed X0 must be a non-negative integer")]
    InvalidSeed,

    #[error("k must be a positive integer")]
    InvalidK,

    #[error("P must be a positive integer")]
    InvalidPeriod,

    #[error("P must be a power of two to guarantee the maximum period")]
    PeriodNotPowerOfTwo,

    #[error("increment c must be a non-negative integer")]
    InvalidIncrement,

    #[error("increment c must be a prime number to guarantee the maximum period")]
    IncrementNotPrime,

    #[error("increment c must be less than m = {m}")]
    IncrementNotBelowModulus { m: u64 },

    #[error("c must be relatively prime to m ({m}) to guarantee the maximum period")]
    IncrementNotCoprime { m: u64 },

    #[error("multiplier a must be odd")]
    EvenMultiplier,

    #[error("modulus m must be a power of two")]
    ModulusNotPowerOfTwo,

    #[error(
        "invalid seed:\n\
         - it must be a positive integer\n\
         - it must be odd, so the residues modulo 2^g are fully explored\n\
         - it must not be a multiple of 5 (multiplicative generator only)"
    )]
    InvalidMultiplicativeSeed,

    #[error(transparent)]
    Derivation(#[from] DerivationError),
}

/// Input that passed every rule, together with the parameters it was checked
/// against. Only obtainable through [`validate_inputs`].
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedInput {
    pub(crate) input: GenerationInput,
    pub(crate) params: GeneratorParameters,
    pub(crate) seed: u64,
    pub(crate) period: u64,
    pub(crate) increment: u64,
}

impl ValidatedInput {
    pub fn input(&self) -> &GenerationInput {
        &self.input
    }

    pub fn params(&self) -> &GeneratorParameters {
        &self.params
    }
}

fn non_negative(value: Option<i64>) -> Option<u64> {
    value.filter(|&v| v >= 0).map(|v| v as u64)
}

fn positive(value: Option<i64>) -> Option<u64> {
    value.filter(|&v| v > 0).map(|v| v as u64)
}

/// Seed, k, P and the power-of-two period; these only look at the raw input.
pub(crate) fn check_common(input: &GenerationInput) -> Result<(u64, u64), ValidationError> {
    let seed = non_negative(input.seed).ok_or(ValidationError::InvalidSeed)?;
    positive(input.k).ok_or(ValidationError::InvalidK)?;
    let period = positive(input.period).ok_or(ValidationError::InvalidPeriod)?;
    if !is_power_of_two(period) {
        return Err(ValidationError::PeriodNotPowerOfTwo);
    }
    Ok((seed, period))
}

fn check_linear(input: &GenerationInput, m: u64) -> Result<u64, ValidationError> {
    let c = non_negative(input.increment).ok_or(ValidationError::InvalidIncrement)?;
    if !is_prime(c) {
        return Err(ValidationError::IncrementNotPrime);
    }
    if c >= m {
        return Err(ValidationError::IncrementNotBelowModulus { m });
    }
    if !is_coprime(c, m) {
        return Err(ValidationError::IncrementNotCoprime { m });
    }
    Ok(c)
}

fn check_multiplicative(params: &GeneratorParameters, seed: u64) -> Result<(), ValidationError> {
    if params.a % 2 == 0 {
        return Err(ValidationError::EvenMultiplier);
    }
    if !is_power_of_two(params.m) {
        return Err(ValidationError::ModulusNotPowerOfTwo);
    }
    if seed % 2 == 0 || seed % 5 == 0 {
        return Err(ValidationError::InvalidMultiplicativeSeed);
    }
    Ok(())
}

/// Checks every precondition for a maximum-period run.
///
/// The family-specific checks run against `params` exactly as given, so
/// hand-built parameters are re-checked for an odd multiplier and a
/// power-of-two modulus.
pub fn validate_inputs(
    input: &GenerationInput,
    params: &GeneratorParameters,
) -> Result<ValidatedInput, ValidationError> {
    let (seed, period) = check_common(input)?;

    let increment = if params.method.is_linear() {
        check_linear(input, params.m)?
    } else {
        check_multiplicative(params, seed)?;
        0
    };

    Ok(ValidatedInput {
        input: input.clone(),
        params: *params,
        seed,
        period,
        increment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{derive_parameters, Method};

    fn lcg_input() -> GenerationInput {
        GenerationInput::new(Method::Lcg)
            .with_seed(7)
            .with_k(1)
            .with_period(8)
            .with_increment(5)
    }

    fn mcg_input() -> GenerationInput {
        GenerationInput::new(Method::McgA3)
            .with_seed(1)
            .with_k(1)
            .with_period(4)
    }

    fn check(input: &GenerationInput) -> Result<ValidatedInput, ValidationError> {
        let params = derive_parameters(input.k, input.period, input.method)?;
        validate_inputs(input, &params)
    }

    #[test]
    fn test_valid_lcg() {
        let validated = check(&lcg_input()).unwrap();
        assert_eq!(validated.seed, 7);
        assert_eq!(validated.increment, 5);
        assert_eq!(validated.params().m, 8);
    }

    #[test]
    fn test_valid_mcg() {
        let validated = check(&mcg_input()).unwrap();
        assert_eq!(validated.params().a, 11);
        assert_eq!(validated.increment, 0);
    }

    #[test]
    fn test_seed_rule_comes_first() {
        let mut input = lcg_input().with_seed(-1);
        input.k = None;
        input.period = None;
        // no parameters can be derived, but the seed rule still runs first
        assert_eq!(check_common(&input), Err(ValidationError::InvalidSeed));
    }

    #[test]
    fn test_zero_seed_is_allowed_for_lcg() {
        assert!(check(&lcg_input().with_seed(0)).is_ok());
    }

    #[test]
    fn test_period_must_be_power_of_two() {
        let params = derive_parameters(Some(1), Some(10), Method::Lcg).unwrap();
        let input = lcg_input().with_period(10);
        assert_eq!(
            validate_inputs(&input, &params),
            Err(ValidationError::PeriodNotPowerOfTwo)
        );

        let input = mcg_input().with_period(10);
        let params = derive_parameters(input.k, input.period, input.method).unwrap();
        assert_eq!(
            validate_inputs(&input, &params),
            Err(ValidationError::PeriodNotPowerOfTwo)
        );
    }

    #[test]
    fn test_missing_increment() {
        let mut input = lcg_input();
        input.increment = None;
        assert_eq!(check(&input), Err(ValidationError::InvalidIncrement));
        assert_eq!(
            check(&lcg_input().with_increment(-3)),
            Err(ValidationError::InvalidIncrement)
        );
    }

    #[test]
    fn test_increment_zero_is_not_prime() {
        assert_eq!(
            check(&lcg_input().with_increment(0)),
            Err(ValidationError::IncrementNotPrime)
        );
        assert_eq!(
            check(&lcg_input().with_increment(1)),
            Err(ValidationError::IncrementNotPrime)
        );
        assert_eq!(
            check(&lcg_input().with_increment(9)),
            Err(ValidationError::IncrementNotPrime)
        );
    }

    #[test]
    fn test_increment_below_modulus() {
        let err = check(&lcg_input().with_increment(11)).unwrap_err();
        assert_eq!(err, ValidationError::IncrementNotBelowModulus { m: 8 });
        assert_eq!(err.to_string(), "increment c must be less than m = 8");
    }

    #[test]
    fn test_increment_coprime() {
        // c = 2 is prime and below m, but shares the factor 2 with m
        let err = check(&lcg_input().with_increment(2)).unwrap_err();
        assert_eq!(err, ValidationError::IncrementNotCoprime { m: 8 });
    }

    #[test]
    fn test_increment_ignored_for_mcg() {
        assert!(check(&mcg_input().with_increment(-100)).is_ok());
    }

    #[test]
    fn test_multiplicative_parameter_recheck() {
        let input = mcg_input();
        let even = GeneratorParameters {
            a: 12,
            m: 16,
            g: 4,
            method: Method::McgA3,
        };
        assert_eq!(
            check_multiplicative(&even, 1),
            Err(ValidationError::EvenMultiplier)
        );
        let bad_modulus = GeneratorParameters { a: 11, m: 12, ..even };
        assert_eq!(
            check_multiplicative(&bad_modulus, 1),
            Err(ValidationError::ModulusNotPowerOfTwo)
        );
        assert!(check(&input).is_ok());
    }

    #[test]
    fn test_multiplicative_seed() {
        for seed in [2, 4, 5, 15, 25, 0] {
            assert_eq!(
                check(&mcg_input().with_seed(seed)),
                Err(ValidationError::InvalidMultiplicativeSeed),
                "seed {seed}"
            );
        }
        for seed in [1, 3, 7, 9, 11, 13] {
            assert!(check(&mcg_input().with_seed(seed)).is_ok(), "seed {seed}");
        }
    }

    #[test]
    fn test_multiplicative_seed_message_lists_all_requirements() {
        let message = ValidationError::InvalidMultiplicativeSeed.to_string();
        assert_eq!(message.lines().count(), 4);
        assert!(message.contains("positive integer"));
        assert!(message.contains("odd"));
        assert!(message.contains("multiple of 5"));
    }

    #[test]
    fn test_even_multiplier_rejected() {
        let params = GeneratorParameters {
            a: 12,
            m: 16,
            g: 4,
            method: Method::McgA3,
        };
        assert_eq!(
            validate_inputs(&mcg_input(), &params),
            Err(ValidationError::EvenMultiplier)
        );
    }

    #[test]
    fn test_modulus_not_power_of_two_rejected() {
        let params = GeneratorParameters {
            a: 11,
            m: 12,
            g: 4,
            method: Method::McgA5,
        };
        assert_eq!(
            validate_inputs(&mcg_input(), &params),
            Err(ValidationError::ModulusNotPowerOfTwo)
        );
    }

    #[test]
    fn test_multiplier_checked_before_seed() {
        let params = GeneratorParameters {
            a: 12,
            m: 16,
            g: 4,
            method: Method::McgA3,
        };
        assert_eq!(
            validate_inputs(&mcg_input().with_seed(5), &params),
            Err(ValidationError::EvenMultiplier)
        );
    }

    #[test]
    fn test_zero_modulus_never_validates() {
        for method in [Method::Lcg, Method::McgA3] {
            let params = GeneratorParameters {
                a: 11,
                m: 0,
                g: 0,
                method,
            };
            let input = if method.is_linear() { lcg_input() } else { mcg_input() };
            assert!(validate_inputs(&input, &params).is_err(), "{method}");
        }
    }

    #[test]
    fn test_linear_rules_use_given_modulus() {
        let params = GeneratorParameters {
            a: 5,
            m: 4,
            g: 2,
            method: Method::Lcg,
        };
        assert_eq!(
            validate_inputs(&lcg_input(), &params),
            Err(ValidationError::IncrementNotBelowModulus { m: 4 })
        );
    }
}
