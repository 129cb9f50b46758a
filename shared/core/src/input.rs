use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Method;

pub const MAX_DECIMAL_PLACES: u8 = 10;
pub const DEFAULT_DECIMAL_PLACES: u8 = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("decimal places must be an integer between 0 and {MAX_DECIMAL_PLACES}, got {0}")]
    DecimalPlacesOutOfRange(i64),
}

/// Number of digits after the point in a normalized value.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(try_from = "i64", into = "u8")]
pub struct DecimalPlaces(u8);

impl DecimalPlaces {
    pub fn new(places: u8) -> Result<Self, InputError> {
        Self::try_from(i64::from(places))
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for DecimalPlaces {
    fn default() -> Self {
        Self(DEFAULT_DECIMAL_PLACES)
    }
}

impl TryFrom<i64> for DecimalPlaces {
    type Error = InputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(places) if places <= MAX_DECIMAL_PLACES => Ok(Self(places)),
            _ => Err(InputError::DecimalPlacesOutOfRange(value)),
        }
    }
}

impl From<DecimalPlaces> for u8 {
    fn from(value: DecimalPlaces) -> Self {
        value.0
    }
}

/// Raw user input for one generation run.
///
/// Integer fields are `None` when the user left them empty or typed something
/// that is not an integer; the validator reports those the same way it reports
/// out-of-range values.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GenerationInput {
    pub method: Method,
    pub seed: Option<i64>,
    pub k: Option<i64>,
    pub period: Option<i64>,
    /// Only read by the linear generator.
    pub increment: Option<i64>,
    #[serde(default)]
    pub decimal_places: DecimalPlaces,
}

impl GenerationInput {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            seed: None,
            k: None,
            period: None,
            increment: None,
            decimal_places: DecimalPlaces::default(),
        }
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_k(mut self, k: i64) -> Self {
        self.k = Some(k);
        self
    }

    pub fn with_period(mut self, period: i64) -> Self {
        self.period = Some(period);
        self
    }

    pub fn with_increment(mut self, increment: i64) -> Self {
        self.increment = Some(increment);
        self
    }

    pub fn with_decimal_places(mut self, decimal_places: DecimalPlaces) -> Self {
        self.decimal_places = decimal_places;
        self
    }
}

/// Parses a text field as an integer, treating blanks and non-integers as absent.
pub fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
