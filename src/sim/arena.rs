//! Square arena bounds
//!
//! The arena spans `[0, size) x [0, size)` with the origin at the top-left
//! corner and y pointing down. Changing the size always means a new round.

use serde::{Deserialize, Serialize};

use crate::error::SimError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    size: f32,
}

impl Arena {
    /// Build an arena with the given side length
    pub fn new(size: f32) -> Result<Self, SimError> {
        if !(size.is_finite() && size > 0.0) {
            return Err(SimError::InvalidArenaSize { size });
        }
        Ok(Self { size })
    }

    /// Side length
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_rejects_degenerate_sizes() {
        assert!(Arena::new(600.0).is_ok());
        assert_eq!(
            Arena::new(0.0),
            Err(SimError::InvalidArenaSize { size: 0.0 })
        );
        assert!(Arena::new(-10.0).is_err());
        assert!(Arena::new(f32::NAN).is_err());
        assert!(Arena::new(f32::INFINITY).is_err());
    }
}
