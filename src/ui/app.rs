//! The root Function Lab view: sidebar, visualization canvas, info panel,
//! and event log.

use std::collections::VecDeque;
use std::time::Instant;

use demo_engine::{DemoState, SelectionState};
use gpui::{
    div, prelude::*, rgb, App, Entity, FocusHandle, Focusable, IntoElement, Render, Window,
};
use rand::Rng;

use super::theme;

pub struct FunctionLab {
    focus_handle: FocusHandle,

    /// Which operation is active. Single source of truth for the whole UI.
    pub(crate) selection: SelectionState,

    /// The mounted demo, rebuilt wholesale whenever the active id changes.
    pub(crate) demo: DemoState,

    /// Decorative cell values for the row-pick grid, re-rolled per mount.
    pub(crate) grid_values: Vec<u32>,

    // Event log, newest first.
    pub(crate) log_messages: VecDeque<String>,
    max_log_messages: usize,
}

impl Focusable for FunctionLab {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl FunctionLab {
    pub fn new(cx: &mut App) -> Entity<Self> {
        cx.new(|cx| {
            let selection = SelectionState::new();
            let demo = DemoState::for_operation(selection.active_operation());

            let mut lab = Self {
                focus_handle: cx.focus_handle(),
                selection,
                demo,
                grid_values: roll_grid_values(),
                log_messages: VecDeque::new(),
                max_log_messages: 12,
            };

            lab.log("Welcome to Function Lab!");
            lab.log("Pick an operation from the sidebar to begin.");
            lab
        })
    }

    /// Select an operation and re-key the demo: the old machine is
    /// discarded, so every scene comes back in its pristine seed state.
    pub(crate) fn select_operation(&mut self, id: &str) {
        self.selection.select(id);
        self.demo = DemoState::for_operation(self.selection.active_operation());
        self.grid_values = roll_grid_values();

        let op = self.selection.active_operation();
        self.log(&format!("[{}] Selected {}", op.category.label(), op.name));
    }

    pub(crate) fn log(&mut self, message: &str) {
        self.log_messages.push_front(message.to_string());
        if self.log_messages.len() > self.max_log_messages {
            self.log_messages.pop_back();
        }
    }

    fn render_event_log(&self) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_1()
            .p_3()
            .bg(rgb(theme::PANEL_BACKGROUND))
            .border_t_1()
            .border_color(rgb(theme::BORDER_COLOR))
            .max_h(gpui::px(120.))
            .child(
                div()
                    .text_xs()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(rgb(theme::MUTED_TEXT))
                    .child("Event Log"),
            )
            .children(self.log_messages.iter().map(|msg| {
                div()
                    .text_xs()
                    .text_color(rgb(theme::TEXT_COLOR_SECONDARY))
                    .child(msg.clone())
            }))
    }
}

fn roll_grid_values() -> Vec<u32> {
    let mut rng = rand::thread_rng();
    (0..demo_engine::slicing::GRID_ROWS * demo_engine::slicing::GRID_COLS)
        .map(|_| rng.gen_range(0..100))
        .collect()
}

impl Render for FunctionLab {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut gpui::prelude::Context<Self>,
    ) -> impl IntoElement {
        // Advance the predict timer and keep frames coming while it runs.
        // The deadlines live inside the demo, so a re-key drops them.
        if let DemoState::Training(training) = &mut self.demo {
            training.tick_predict(Instant::now());
            if training.predict_busy() {
                cx.notify();
            }
        }

        div()
            .flex()
            .flex_row()
            .size_full()
            .bg(rgb(theme::BACKGROUND))
            .text_color(rgb(theme::TEXT_COLOR))
            .child(self.render_sidebar(cx))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .flex_1()
                    .h_full()
                    .child(self.render_visualizer(cx))
                    .child(self.render_info_panel())
                    .child(self.render_event_log()),
            )
    }
}
