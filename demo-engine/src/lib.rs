//! Function Lab demo engine: the operation catalog, the selection state,
//! and the per-category demo state machines behind the visualizer.
//!
//! # Example
//! ```rust
//! use demo_engine::{catalog, DemoState, SelectionState};
//!
//! let mut selection = SelectionState::new();
//! selection.select("sort_values");
//!
//! // Re-key: build the demo for the resolved active operation.
//! let mut demo = DemoState::for_operation(selection.active_operation());
//!
//! if let DemoState::Logic(logic) = &mut demo {
//!     logic.sort_descending();
//!     assert_eq!(logic.rows[0].value, 90);
//! }
//! ```

pub mod catalog;
pub mod cleaning;
pub mod demo;
pub mod engineering;
mod error;
pub mod logic;
pub mod selection;
pub mod slicing;
pub mod training;

pub use catalog::{Category, OperationDefinition};
pub use demo::DemoState;
pub use error::{Error, Result};
pub use selection::SelectionState;
