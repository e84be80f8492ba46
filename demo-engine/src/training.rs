//! Demo state for the Training category: the train/test divider, the
//! static confusion matrix, and the timed predict sequence.
//!
//! Predict is the only timed transition in the system. Its deadlines live
//! inside the state machine and are advanced by `tick_predict(now)`, so
//! dropping the demo (re-key or unmount) drops the pending transition
//! with it.

use std::time::{Duration, Instant};

/// Split scene: 20 points, the last 4 past the fixed 80% divider.
pub const SAMPLE_COUNT: usize = 20;
pub const TEST_START: usize = 16;
pub const SPLIT_OFFSET: f32 = 0.8;

/// Confusion matrix literals.
pub const TRUE_NEGATIVES: u32 = 45;
pub const FALSE_POSITIVES: u32 = 3;
pub const FALSE_NEGATIVES: u32 = 8;
pub const TRUE_POSITIVES: u32 = 92;

/// Predict scene: output label and phase durations.
pub const PREDICT_OUTPUT: &str = "A";
pub const PROCESSING_DELAY: Duration = Duration::from_millis(1000);
pub const OUTPUT_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingOp {
    TrainTestSplit,
    ConfusionMatrix,
    Predict,
}

impl TrainingOp {
    pub(crate) fn from_id(id: &str) -> Option<Self> {
        match id {
            "train_test_split" => Some(TrainingOp::TrainTestSplit),
            "confusion_matrix" => Some(TrainingOp::ConfusionMatrix),
            "predict" => Some(TrainingOp::Predict),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictPhase {
    Idle,
    Processing { done_at: Instant, reset_at: Instant },
    Done { reset_at: Instant },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingDemo {
    op: TrainingOp,
    pub split: bool,
    pub predict: PredictPhase,
}

impl TrainingDemo {
    pub fn new(op: TrainingOp) -> Self {
        Self {
            op,
            split: false,
            predict: PredictPhase::Idle,
        }
    }

    pub fn op(&self) -> TrainingOp {
        self.op
    }

    pub fn toggle_split(&mut self) {
        self.split = !self.split;
    }

    pub fn is_test_sample(&self, index: usize) -> bool {
        index >= TEST_START
    }

    /// Starts a prediction. Rejected (returns false, no state change)
    /// unless the machine is idle; at most one prediction is in flight.
    pub fn trigger_predict(&mut self, now: Instant) -> bool {
        if self.predict != PredictPhase::Idle {
            return false;
        }
        self.predict = PredictPhase::Processing {
            done_at: now + PROCESSING_DELAY,
            reset_at: now + PROCESSING_DELAY + OUTPUT_DELAY,
        };
        true
    }

    /// Advances the predict sequence past any elapsed deadlines.
    pub fn tick_predict(&mut self, now: Instant) {
        if let PredictPhase::Processing { done_at, reset_at } = self.predict {
            if now >= done_at {
                self.predict = PredictPhase::Done { reset_at };
            }
        }
        if let PredictPhase::Done { reset_at } = self.predict {
            if now >= reset_at {
                self.predict = PredictPhase::Idle;
            }
        }
    }

    /// True while the trigger control must stay disabled.
    pub fn predict_busy(&self) -> bool {
        self.predict != PredictPhase::Idle
    }

    /// True while the literal output label is on screen.
    pub fn output_visible(&self) -> bool {
        matches!(self.predict, PredictPhase::Done { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predict_demo() -> TrainingDemo {
        TrainingDemo::new(TrainingOp::Predict)
    }

    #[test]
    fn test_split_toggle_round_trips() {
        let mut demo = TrainingDemo::new(TrainingOp::TrainTestSplit);
        let seed = demo;
        demo.toggle_split();
        assert!(demo.split);
        demo.toggle_split();
        assert_eq!(demo, seed);
    }

    #[test]
    fn test_split_marks_exactly_the_tail_points() {
        let demo = TrainingDemo::new(TrainingOp::TrainTestSplit);
        let test_count = (0..SAMPLE_COUNT).filter(|&i| demo.is_test_sample(i)).count();
        assert_eq!(test_count, 4);
        assert!(!demo.is_test_sample(TEST_START - 1));
        assert!(demo.is_test_sample(TEST_START));
    }

    #[test]
    fn test_trigger_disables_control_immediately() {
        let mut demo = predict_demo();
        let now = Instant::now();

        assert!(!demo.predict_busy());
        assert!(demo.trigger_predict(now));
        assert!(demo.predict_busy());
        assert!(!demo.output_visible());
    }

    #[test]
    fn test_second_trigger_while_busy_is_rejected() {
        let mut demo = predict_demo();
        let now = Instant::now();

        assert!(demo.trigger_predict(now));
        let in_flight = demo;
        assert!(!demo.trigger_predict(now + Duration::from_millis(10)));
        assert_eq!(demo, in_flight);
    }

    #[test]
    fn test_output_appears_after_processing_delay() {
        let mut demo = predict_demo();
        let now = Instant::now();
        demo.trigger_predict(now);

        demo.tick_predict(now + PROCESSING_DELAY - Duration::from_millis(1));
        assert!(!demo.output_visible());

        demo.tick_predict(now + PROCESSING_DELAY);
        assert!(demo.output_visible());
        assert!(demo.predict_busy());
    }

    #[test]
    fn test_auto_reset_after_output_delay() {
        let mut demo = predict_demo();
        let now = Instant::now();
        demo.trigger_predict(now);

        demo.tick_predict(now + PROCESSING_DELAY);
        demo.tick_predict(now + PROCESSING_DELAY + OUTPUT_DELAY);

        assert_eq!(demo.predict, PredictPhase::Idle);
        assert!(!demo.predict_busy());
        assert!(!demo.output_visible());
        // Re-enabled: a fresh trigger is accepted again.
        assert!(demo.trigger_predict(now + PROCESSING_DELAY + OUTPUT_DELAY));
    }

    #[test]
    fn test_single_late_tick_crosses_both_deadlines() {
        let mut demo = predict_demo();
        let now = Instant::now();
        demo.trigger_predict(now);

        demo.tick_predict(now + Duration::from_secs(60));
        assert_eq!(demo.predict, PredictPhase::Idle);
    }

    #[test]
    fn test_tick_when_idle_is_a_no_op() {
        let mut demo = predict_demo();
        let seed = demo;
        demo.tick_predict(Instant::now());
        assert_eq!(demo, seed);
    }
}
