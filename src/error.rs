//! Errors for rejected configuration
//!
//! The simulation step itself cannot fail; only building a round from bad
//! input (arena size, tuning data) is rejected.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum SimError {
    /// Arena side length must be finite and positive
    InvalidArenaSize { size: f32 },
    /// A tuning value is out of range
    InvalidTuning { field: &'static str, value: f32 },
    /// Tuning JSON could not be parsed
    TuningParse(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArenaSize { size } => {
                write!(f, "invalid arena size: {size} (must be finite and > 0)")
            }
            Self::InvalidTuning { field, value } => {
                write!(f, "invalid tuning value for `{field}`: {value}")
            }
            Self::TuningParse(msg) => write!(f, "failed to parse tuning: {msg}"),
        }
    }
}

impl std::error::Error for SimError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field() {
        let err = SimError::InvalidTuning {
            field: "dot_size",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "invalid tuning value for `dot_size`: -1");
    }
}
