use std::fmt;

/// Errors raised by the shuffle engine.
///
/// Only malformed arguments from the calling layer are reported. Inputs that
/// make a soft constraint unsatisfiable are handled by fallback policies and
/// never surface here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShuffleError {
    InvalidArgument(String),
}

impl fmt::Display for ShuffleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShuffleError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for ShuffleError {}

/// Target output length of a sampler, validated to be a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSize(usize);

impl BatchSize {
    pub fn get(self) -> usize {
        self.0
    }
}

fn invalid_batch_size(value: impl fmt::Display) -> ShuffleError {
    ShuffleError::InvalidArgument(format!("Invalid batch_size provided: {}", value))
}

impl TryFrom<usize> for BatchSize {
    type Error = ShuffleError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(invalid_batch_size(value));
        }
        Ok(BatchSize(value))
    }
}

impl TryFrom<u32> for BatchSize {
    type Error = ShuffleError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        BatchSize::try_from(value as usize)
    }
}

impl TryFrom<i64> for BatchSize {
    type Error = ShuffleError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match usize::try_from(value) {
            Ok(v) if v > 0 => Ok(BatchSize(v)),
            _ => Err(invalid_batch_size(value)),
        }
    }
}

impl TryFrom<i32> for BatchSize {
    type Error = ShuffleError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        BatchSize::try_from(value as i64)
    }
}

impl TryFrom<f64> for BatchSize {
    type Error = ShuffleError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        // NaN and infinities fail the finiteness check, fractions the trunc check
        if !value.is_finite() || value.trunc() != value || value < 1.0 || value > usize::MAX as f64
        {
            return Err(invalid_batch_size(value));
        }
        Ok(BatchSize(value as usize))
    }
}
