//! Demo state for the Engineering category.
//!
//! Every engineering scene is a single boolean toggle between two fixed,
//! pre-computed representations of the same conceptual dataset. The
//! "after" values are literal fixtures, intentionally approximate; they
//! are part of the pedagogical contract and must not be recomputed.

/// Label-encoding scene: categories and their integer codes.
pub const LABELS: [&str; 4] = ["Cat", "Dog", "Cat", "Bird"];
pub const LABEL_CODES: [u8; 4] = [0, 1, 0, 2];

/// Scaling scene: raw magnitudes and their fixed scaled renditions.
pub const RAW_VALUES: [f64; 4] = [1000.0, 50.0, 500.0, 100.0];
pub const SCALED_VALUES: [f64; 4] = [1.0, 0.0, 0.5, 0.1];

/// Softmax scene: logits and a fixed probability vector summing to 1.
pub const LOGITS: [f64; 3] = [2.0, 1.0, 0.1];
pub const PROBABILITIES: [f64; 3] = [0.7, 0.2, 0.1];

/// Resampling scene: the majority group never changes; executing adds a
/// fixed number of synthetic minority clones.
pub const MAJORITY_COUNT: usize = 5;
pub const MINORITY_SEED_COUNT: usize = 1;
pub const MINORITY_CLONES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineeringOp {
    LabelEncoder,
    MinMaxScaler,
    FitTransform,
    FitResample,
    Softmax,
    Apply,
}

impl EngineeringOp {
    pub(crate) fn from_id(id: &str) -> Option<Self> {
        match id {
            "label_encoder" => Some(EngineeringOp::LabelEncoder),
            "minmax_scaler" => Some(EngineeringOp::MinMaxScaler),
            "fit_transform" => Some(EngineeringOp::FitTransform),
            "fit_resample" => Some(EngineeringOp::FitResample),
            "softmax" => Some(EngineeringOp::Softmax),
            "apply" => Some(EngineeringOp::Apply),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineeringDemo {
    op: EngineeringOp,
    pub transformed: bool,
}

impl EngineeringDemo {
    pub fn new(op: EngineeringOp) -> Self {
        Self { op, transformed: false }
    }

    pub fn op(&self) -> EngineeringOp {
        self.op
    }

    pub fn toggle(&mut self) {
        self.transformed = !self.transformed;
    }

    /// Minority point count in the resampling scene's current state.
    pub fn minority_count(&self) -> usize {
        if self.transformed {
            MINORITY_SEED_COUNT + MINORITY_CLONES
        } else {
            MINORITY_SEED_COUNT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        let mut demo = EngineeringDemo::new(EngineeringOp::Softmax);
        let seed = demo;

        demo.toggle();
        assert!(demo.transformed);
        demo.toggle();
        assert_eq!(demo, seed);
    }

    #[test]
    fn test_resample_grows_minority_only() {
        let mut demo = EngineeringDemo::new(EngineeringOp::FitResample);
        assert_eq!(demo.minority_count(), 1);

        demo.toggle();
        assert_eq!(demo.minority_count(), 5);

        demo.toggle();
        assert_eq!(demo.minority_count(), 1);
    }

    #[test]
    fn test_fixture_shapes_line_up() {
        assert_eq!(LABELS.len(), LABEL_CODES.len());
        assert_eq!(RAW_VALUES.len(), SCALED_VALUES.len());
        assert_eq!(LOGITS.len(), PROBABILITIES.len());
    }

    #[test]
    fn test_probability_fixture_sums_to_one() {
        let sum: f64 = PROBABILITIES.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
