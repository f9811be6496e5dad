//! Data-driven game balance
//!
//! Every gameplay number lives here so it can be tweaked from a JSON file
//! without touching simulation code. Defaults come from [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// Gameplay tuning values (all lengths in arena units, speeds per frame)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle top edge sits this far above the arena floor
    pub paddle_bottom_offset: f32,
    /// Visual only
    pub paddle_corner_radius: f32,
    pub ball_radius: f32,
    pub ball_rest_gap: f32,
    /// Velocity applied when the ball is launched or reset
    pub launch_velocity: Vec2,
    pub paddle_deflection: f32,
    pub dot_rows: u32,
    pub dot_cols: u32,
    pub dot_size: f32,
    pub dot_row_spacing: f32,
    /// Fraction of the arena height where the first row sits
    pub dot_top_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,
            paddle_corner_radius: PADDLE_CORNER_RADIUS,
            ball_radius: BALL_RADIUS,
            ball_rest_gap: BALL_REST_GAP,
            launch_velocity: Vec2::new(BALL_LAUNCH_DX, BALL_LAUNCH_DY),
            paddle_deflection: PADDLE_DEFLECTION,
            dot_rows: DOT_ROWS,
            dot_cols: DOT_COLS,
            dot_size: DOT_SIZE,
            dot_row_spacing: DOT_ROW_SPACING,
            dot_top_margin: DOT_TOP_MARGIN,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| SimError::TuningParse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), SimError> {
        let positive = [
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("dot_size", self.dot_size),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidTuning { field, value });
            }
        }

        let non_negative = [
            ("paddle_bottom_offset", self.paddle_bottom_offset),
            ("paddle_corner_radius", self.paddle_corner_radius),
            ("ball_rest_gap", self.ball_rest_gap),
            ("paddle_deflection", self.paddle_deflection),
            ("dot_row_spacing", self.dot_row_spacing),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SimError::InvalidTuning { field, value });
            }
        }

        if !self.launch_velocity.is_finite() {
            return Err(SimError::InvalidTuning {
                field: "launch_velocity",
                value: self.launch_velocity.length(),
            });
        }
        if self.dot_rows == 0 {
            return Err(SimError::InvalidTuning {
                field: "dot_rows",
                value: 0.0,
            });
        }
        if self.dot_cols == 0 {
            return Err(SimError::InvalidTuning {
                field: "dot_cols",
                value: 0.0,
            });
        }
        match self.dot_rows.checked_mul(self.dot_cols) {
            Some(count) if count <= MAX_DOTS => {}
            _ => {
                return Err(SimError::InvalidTuning {
                    field: "dot_rows",
                    value: self.dot_rows as f32 * self.dot_cols as f32,
                });
            }
        }
        if !(0.0..1.0).contains(&self.dot_top_margin) {
            return Err(SimError::InvalidTuning {
                field: "dot_top_margin",
                value: self.dot_top_margin,
            });
        }
        Ok(())
    }

    /// Number of dots generated per round
    pub fn dot_count(&self) -> usize {
        (self.dot_rows as usize).saturating_mul(self.dot_cols as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.dot_count(), 24);
        assert_eq!(tuning.launch_velocity, Vec2::new(3.0, -3.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning = Tuning::from_json(r#"{ "dot_rows": 2, "paddle_width": 120.0 }"#).unwrap();
        assert_eq!(tuning.dot_rows, 2);
        assert_eq!(tuning.paddle_width, 120.0);
        assert_eq!(tuning.dot_cols, DOT_COLS);
        assert_eq!(tuning.ball_radius, BALL_RADIUS);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Tuning::from_json(r#"{ "ball_radius": 0.0 }"#).unwrap_err();
        assert_eq!(
            err,
            SimError::InvalidTuning {
                field: "ball_radius",
                value: 0.0
            }
        );

        let err = Tuning::from_json(r#"{ "dot_cols": 0 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidTuning { field: "dot_cols", .. }));

        let err = Tuning::from_json(r#"{ "dot_top_margin": 1.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidTuning {
                field: "dot_top_margin",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let err = Tuning::from_json(r#"{ "dot_rows": 65536, "dot_cols": 65536 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidTuning { field: "dot_rows", .. }));

        let err = Tuning::from_json(r#"{ "dot_rows": 4294967295, "dot_cols": 2 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidTuning { field: "dot_rows", .. }));

        let err = Tuning::from_json(r#"{ "dot_rows": 33, "dot_cols": 32 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidTuning { .. }));

        let tuning = Tuning::from_json(r#"{ "dot_rows": 32, "dot_cols": 32 }"#).unwrap();
        assert_eq!(tuning.dot_count(), MAX_DOTS as usize);
        assert_eq!(
            crate::sim::GameState::with_tuning(600.0, tuning).unwrap().dots.len(),
            1024
        );

        let unchecked = Tuning {
            dot_rows: u32::MAX,
            dot_cols: u32::MAX,
            ..Tuning::default()
        };
        assert!(crate::sim::GameState::with_tuning(600.0, unchecked).is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SimError::TuningParse(_)));
    }
}
