//! Visualization canvas: the scene header plus the mounted demo scene.
//!
//! Dispatch is by demo variant, not by id chains; `DemoState::Empty` is
//! the explicit "no visualization authored" case.

use demo_engine::DemoState;
use gpui::{div, prelude::*, rgb, AnyElement, Context, IntoElement};

use super::app::FunctionLab;
use super::theme;

impl FunctionLab {
    pub(crate) fn render_visualizer(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let op = self.selection.active_operation();

        let scene: AnyElement = match &self.demo {
            DemoState::Cleaning(demo) => self.render_cleaning_scene(demo, cx),
            DemoState::Slicing(demo) => self.render_slicing_scene(demo, cx),
            DemoState::Engineering(demo) => self.render_engineering_scene(demo, cx),
            DemoState::Logic(demo) => self.render_logic_scene(demo, cx),
            DemoState::Training(demo) => self.render_training_scene(demo, cx),
            DemoState::Empty => div()
                .flex()
                .flex_1()
                .items_center()
                .justify_center()
                .child(
                    div()
                        .text_sm()
                        .text_color(rgb(theme::MUTED_TEXT))
                        .child("No visualization authored for this operation."),
                )
                .into_any_element(),
        };

        div()
            .id("canvas-scroll")
            .flex()
            .flex_col()
            .flex_1()
            .overflow_y_scroll()
            .bg(rgb(theme::CANVAS_BACKGROUND))
            .p_4()
            .gap_4()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(gpui::FontWeight::BOLD)
                            .child(op.name),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(rgb(theme::BLUE_ACCENT))
                            .child(op.description),
                    ),
            )
            .child(scene)
    }
}
