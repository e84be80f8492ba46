//! Training scenes: the train/test split, the confusion matrix, and the
//! timed predict sequence.

use std::time::Instant;

use demo_engine::training::{
    TrainingDemo, TrainingOp, FALSE_NEGATIVES, FALSE_POSITIVES, PREDICT_OUTPUT, SAMPLE_COUNT,
    TEST_START, TRUE_NEGATIVES, TRUE_POSITIVES,
};
use demo_engine::DemoState;
use gpui::{div, prelude::*, px, rgb, white, AnyElement, Context, IntoElement};

use super::{disabled_button, scene_button};
use crate::ui::app::FunctionLab;
use crate::ui::theme;

fn with_training(this: &mut FunctionLab, f: impl FnOnce(&mut TrainingDemo)) {
    if let DemoState::Training(demo) = &mut this.demo {
        f(demo);
    }
}

impl FunctionLab {
    pub(crate) fn render_training_scene(
        &self,
        demo: &TrainingDemo,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        match demo.op() {
            TrainingOp::TrainTestSplit => self.render_split(demo, cx),
            TrainingOp::ConfusionMatrix => self.render_confusion_matrix(),
            TrainingOp::Predict => self.render_predict(demo, cx),
        }
    }

    fn render_split(&self, demo: &TrainingDemo, cx: &mut Context<Self>) -> AnyElement {
        let split = demo.split;
        let label = if split { "Reset" } else { "Cut Dataset (80/20)" };

        let mut dots = div().flex().flex_row().flex_wrap().gap_2().w(px(320.));
        for i in 0..SAMPLE_COUNT {
            // Divider sits at the fixed 80% boundary.
            if split && i == TEST_START {
                dots = dots.child(div().w(px(3.)).h(px(24.)).bg(rgb(theme::YELLOW_ACCENT)));
            }
            let is_test = demo.is_test_sample(i);
            dots = dots.child(
                div()
                    .w(px(24.))
                    .h(px(24.))
                    .rounded_full()
                    .bg(if split && is_test {
                        rgb(theme::ORANGE_ACCENT)
                    } else {
                        rgb(theme::BLUE_ACCENT)
                    }),
            );
        }

        div()
            .flex()
            .flex_col()
            .flex_1()
            .items_center()
            .gap_4()
            .child(scene_button(
                label.to_string(),
                theme::ORANGE_BUTTON,
                theme::ORANGE_BUTTON_HOVER,
                cx,
                |this, _cx| {
                    with_training(this, |demo| demo.toggle_split());
                    this.log("[Training] train_test_split: divider toggled");
                },
            ))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .p_4()
                    .rounded_lg()
                    .bg(rgb(theme::PANEL_BACKGROUND))
                    .border_1()
                    .border_color(rgb(theme::BORDER_COLOR))
                    .when(split, |d| {
                        d.child(
                            div()
                                .text_xs()
                                .font_weight(gpui::FontWeight::BOLD)
                                .text_color(rgb(theme::ORANGE_ACCENT))
                                .child("Test Set →"),
                        )
                    })
                    .child(dots),
            )
            .into_any_element()
    }

    fn render_confusion_matrix(&self) -> AnyElement {
        let cell = |name: &'static str, count: u32, good: bool| {
            div()
                .flex()
                .flex_col()
                .items_center()
                .justify_center()
                .gap_1()
                .w(px(120.))
                .h(px(120.))
                .rounded_lg()
                .bg(rgb(theme::CARD_BACKGROUND))
                .border_1()
                .border_color(if good {
                    rgb(theme::GREEN_ACCENT)
                } else {
                    rgb(theme::RED_ACCENT)
                })
                .child(
                    div()
                        .text_xs()
                        .text_color(rgb(theme::MUTED_TEXT))
                        .child(name),
                )
                .child(
                    div()
                        .text_xl()
                        .font_weight(gpui::FontWeight::BOLD)
                        .child(format!("{}", count)),
                )
        };

        div()
            .flex()
            .flex_col()
            .flex_1()
            .items_center()
            .justify_center()
            .gap_4()
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap_4()
                    .child(cell("TRUE NEG", TRUE_NEGATIVES, true))
                    .child(cell("FALSE POS", FALSE_POSITIVES, false)),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap_4()
                    .child(cell("FALSE NEG", FALSE_NEGATIVES, false))
                    .child(cell("TRUE POS", TRUE_POSITIVES, true)),
            )
            .into_any_element()
    }

    fn render_predict(&self, demo: &TrainingDemo, cx: &mut Context<Self>) -> AnyElement {
        let busy = demo.predict_busy();
        let output_visible = demo.output_visible();

        let trigger: AnyElement = if busy {
            // No listener while a prediction is in flight.
            disabled_button("Processing...".to_string(), theme::CARD_BACKGROUND)
                .into_any_element()
        } else {
            scene_button(
                "Model.predict(NewData)".to_string(),
                theme::GREEN_BUTTON,
                theme::GREEN_BUTTON_HOVER,
                cx,
                |this, _cx| {
                    let started = {
                        let mut started = false;
                        with_training(this, |demo| {
                            started = demo.trigger_predict(Instant::now());
                        });
                        started
                    };
                    if started {
                        this.log("[Training] predict: inference started");
                    }
                },
            )
            .into_any_element()
        };

        div()
            .flex()
            .flex_col()
            .flex_1()
            .items_center()
            .gap_4()
            .child(trigger)
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap_4()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .items_center()
                            .gap_1()
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(rgb(theme::MUTED_TEXT))
                                    .child("Unseen Data"),
                            )
                            .child(
                                div()
                                    .w(px(44.))
                                    .h(px(44.))
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .rounded_md()
                                    .bg(rgb(theme::CARD_BACKGROUND))
                                    .border_1()
                                    .border_color(rgb(theme::BORDER_COLOR))
                                    .child(
                                        div()
                                            .text_xl()
                                            .font_weight(gpui::FontWeight::BOLD)
                                            .text_color(if busy {
                                                rgb(theme::MUTED_TEXT)
                                            } else {
                                                rgb(theme::TEXT_COLOR)
                                            })
                                            .child("?"),
                                    ),
                            ),
                    )
                    .child(
                        div()
                            .w(px(120.))
                            .h(px(120.))
                            .flex()
                            .items_center()
                            .justify_center()
                            .rounded_lg()
                            .bg(if busy {
                                rgb(theme::CARD_BACKGROUND)
                            } else {
                                rgb(theme::PANEL_BACKGROUND)
                            })
                            .border_2()
                            .border_color(rgb(theme::BLUE_ACCENT))
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .text_color(rgb(theme::BLUE_ACCENT))
                                    .child(if busy && !output_visible {
                                        "MODEL ..."
                                    } else {
                                        "MODEL"
                                    }),
                            ),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .items_center()
                            .gap_1()
                            .w(px(44.))
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(rgb(theme::MUTED_TEXT))
                                    .child("Prediction"),
                            )
                            .child(if output_visible {
                                div()
                                    .w(px(44.))
                                    .h(px(44.))
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .rounded_full()
                                    .bg(rgb(theme::GREEN_BUTTON))
                                    .border_2()
                                    .border_color(rgb(theme::GREEN_ACCENT))
                                    .child(
                                        div()
                                            .text_xl()
                                            .font_weight(gpui::FontWeight::BOLD)
                                            .text_color(white())
                                            .child(PREDICT_OUTPUT),
                                    )
                            } else {
                                div().w(px(44.)).h(px(44.))
                            }),
                    ),
            )
            .into_any_element()
    }
}
