//! The demo dispatcher: maps an operation to the demo state machine that
//! visualizes it.
//!
//! Selecting an operation rebuilds the whole `DemoState` (re-key), which
//! is the only reset path for one-shot scenes and guarantees pristine
//! seed data on every switch. Operations with no authored scene map to
//! `DemoState::Empty`; the canvas renders nothing, which is an explicit
//! case rather than an error.

use crate::catalog::{Category, OperationDefinition};
use crate::cleaning::{CleaningDemo, CleaningOp};
use crate::engineering::{EngineeringDemo, EngineeringOp};
use crate::logic::{LogicDemo, LogicOp};
use crate::slicing::{SlicingDemo, SlicingOp};
use crate::training::{TrainingDemo, TrainingOp};

#[derive(Debug, Clone, PartialEq)]
pub enum DemoState {
    Cleaning(CleaningDemo),
    Slicing(SlicingDemo),
    Engineering(EngineeringDemo),
    Logic(LogicDemo),
    Training(TrainingDemo),
    /// No visualization authored for this operation.
    Empty,
}

impl DemoState {
    pub fn for_operation(op: &OperationDefinition) -> DemoState {
        let state = match op.category {
            Category::Cleaning => {
                CleaningOp::from_id(op.id).map(|o| DemoState::Cleaning(CleaningDemo::new(o)))
            }
            Category::Slicing => {
                SlicingOp::from_id(op.id).map(|o| DemoState::Slicing(SlicingDemo::new(o)))
            }
            Category::Engineering => EngineeringOp::from_id(op.id)
                .map(|o| DemoState::Engineering(EngineeringDemo::new(o))),
            Category::Logic => {
                LogicOp::from_id(op.id).map(|o| DemoState::Logic(LogicDemo::new(o)))
            }
            Category::Training => {
                TrainingOp::from_id(op.id).map(|o| DemoState::Training(TrainingDemo::new(o)))
            }
        };
        state.unwrap_or(DemoState::Empty)
    }

    pub fn is_authored(&self) -> bool {
        !matches!(self, DemoState::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::selection::SelectionState;
    use std::time::Instant;

    #[test]
    fn test_every_catalog_entry_has_a_scene() {
        for op in catalog::all() {
            let demo = DemoState::for_operation(op);
            assert!(demo.is_authored(), "no scene for {}", op.id);
        }
    }

    #[test]
    fn test_category_routes_to_matching_machine() {
        for op in catalog::all() {
            let demo = DemoState::for_operation(op);
            let matches = match (op.category, &demo) {
                (Category::Cleaning, DemoState::Cleaning(_)) => true,
                (Category::Slicing, DemoState::Slicing(_)) => true,
                (Category::Engineering, DemoState::Engineering(_)) => true,
                (Category::Logic, DemoState::Logic(_)) => true,
                (Category::Training, DemoState::Training(_)) => true,
                _ => false,
            };
            assert!(matches, "wrong machine for {}", op.id);
        }
    }

    #[test]
    fn test_unknown_id_in_known_category_is_empty() {
        let ghost = OperationDefinition {
            id: "melt",
            name: "melt",
            category: Category::Logic,
            description: "n/a",
            purpose: "n/a",
            code_sample: "df.melt()",
        };
        assert_eq!(DemoState::for_operation(&ghost), DemoState::Empty);
        assert!(!DemoState::for_operation(&ghost).is_authored());
    }

    // Selecting A, then B, then A again must land on state identical to a
    // fresh mount of A, regardless of what was mutated in between.
    #[test]
    fn test_rekey_restores_seed_state() {
        let mut selection = SelectionState::new();

        selection.select("sort_values");
        let mut demo = DemoState::for_operation(selection.active_operation());
        if let DemoState::Logic(logic) = &mut demo {
            logic.sort_descending();
            logic.toggle_quantiles();
        }

        selection.select("fillna");
        let mut demo = DemoState::for_operation(selection.active_operation());
        if let DemoState::Cleaning(cleaning) = &mut demo {
            cleaning.fill_nulls();
        }

        selection.select("sort_values");
        let demo = DemoState::for_operation(selection.active_operation());
        let fresh = DemoState::for_operation(catalog::lookup("sort_values"));
        assert_eq!(demo, fresh);
    }

    #[test]
    fn test_rekey_drops_in_flight_prediction() {
        let mut demo = DemoState::for_operation(catalog::lookup("predict"));
        if let DemoState::Training(training) = &mut demo {
            assert!(training.trigger_predict(Instant::now()));
            assert!(training.predict_busy());
        }

        // Re-key: the pending deadlines are dropped with the machine.
        let demo = DemoState::for_operation(catalog::lookup("predict"));
        if let DemoState::Training(training) = &demo {
            assert!(!training.predict_busy());
        } else {
            panic!("predict should mount the training machine");
        }
    }

    // The navigation contract: any selection, from any prior state, mounts
    // the matching category's machine in seed state.
    #[test]
    fn test_navigation_is_deterministic() {
        let mut selection = SelectionState::new();
        for op in catalog::all() {
            selection.select(op.id);
            let demo = DemoState::for_operation(selection.active_operation());
            assert_eq!(demo, DemoState::for_operation(op));
        }
    }
}
