//! Function Lab Application
//!
//! Interactive visualization of common data-processing operations:
//! - Cleaning: duplicates, nulls, type coercion
//! - Slicing: indexing, filtering, column subsets
//! - Engineering: encoding, scaling, resampling, softmax
//! - Logic: grouping, sorting, concatenation, quantiles
//! - Training: splits, confusion matrices, prediction

use gpui::{Application, WindowOptions};
use ui::app::FunctionLab;

mod ui;

fn main() {
    Application::new().run(|cx| {
        cx.open_window(WindowOptions::default(), |_, cx| FunctionLab::new(cx))
            .ok();
    });
}
