//! Engineering scenes: every operation here toggles between two fixed
//! representations of the same data.

use demo_engine::engineering::{
    EngineeringDemo, EngineeringOp, LABELS, LABEL_CODES, LOGITS, MAJORITY_COUNT, MINORITY_CLONES,
    PROBABILITIES, RAW_VALUES, SCALED_VALUES,
};
use demo_engine::DemoState;
use gpui::{div, prelude::*, px, rgb, white, AnyElement, Context, IntoElement};

use super::scene_button;
use crate::ui::app::FunctionLab;
use crate::ui::theme;

fn with_engineering(this: &mut FunctionLab, f: impl FnOnce(&mut EngineeringDemo)) {
    if let DemoState::Engineering(demo) = &mut this.demo {
        f(demo);
    }
}

fn toggle_button(
    label: &str,
    bg: u32,
    hover_bg: u32,
    log_line: &'static str,
    cx: &mut Context<FunctionLab>,
) -> impl IntoElement {
    scene_button(label.to_string(), bg, hover_bg, cx, move |this, _cx| {
        with_engineering(this, |demo| demo.toggle());
        this.log(log_line);
    })
}

impl FunctionLab {
    pub(crate) fn render_engineering_scene(
        &self,
        demo: &EngineeringDemo,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        match demo.op() {
            EngineeringOp::LabelEncoder => self.render_label_encoder(demo, cx),
            EngineeringOp::MinMaxScaler | EngineeringOp::FitTransform | EngineeringOp::Apply => {
                self.render_scaler(demo, cx)
            }
            EngineeringOp::Softmax => self.render_softmax(demo, cx),
            EngineeringOp::FitResample => self.render_resample(demo, cx),
        }
    }

    fn render_label_encoder(&self, demo: &EngineeringDemo, cx: &mut Context<Self>) -> AnyElement {
        let transformed = demo.transformed;
        let label = if transformed { "Inverse Transform" } else { "Fit Transform" };

        div()
            .flex()
            .flex_col()
            .flex_1()
            .items_center()
            .gap_4()
            .child(toggle_button(
                label,
                theme::PURPLE_BUTTON,
                theme::PURPLE_BUTTON_HOVER,
                "[Engineering] label_encoder: encoding toggled",
                cx,
            ))
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap_4()
                    .children(LABELS.iter().zip(LABEL_CODES).map(|(&text, code)| {
                        div()
                            .w(px(80.))
                            .h(px(80.))
                            .flex()
                            .items_center()
                            .justify_center()
                            .rounded_lg()
                            .bg(rgb(theme::CARD_BACKGROUND))
                            .border_1()
                            .border_color(if transformed {
                                rgb(theme::GREEN_ACCENT)
                            } else {
                                rgb(theme::BORDER_COLOR)
                            })
                            .child(if transformed {
                                div()
                                    .text_xl()
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .text_color(rgb(theme::GREEN_ACCENT))
                                    .child(format!("{}", code))
                            } else {
                                div()
                                    .text_sm()
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .text_color(rgb(theme::BLUE_ACCENT))
                                    .child(text)
                            })
                    })),
            )
            .into_any_element()
    }

    fn render_scaler(&self, demo: &EngineeringDemo, cx: &mut Context<Self>) -> AnyElement {
        let transformed = demo.transformed;
        let label = match demo.op() {
            EngineeringOp::Apply => "Apply x/1000",
            EngineeringOp::FitTransform => "Fit & Transform",
            _ => "MinMaxScaler",
        };

        div()
            .flex()
            .flex_col()
            .flex_1()
            .items_center()
            .gap_4()
            .child(toggle_button(
                label,
                theme::PURPLE_BUTTON,
                theme::PURPLE_BUTTON_HOVER,
                "[Engineering] scaler: representation toggled",
                cx,
            ))
            .child(
                div()
                    .text_xs()
                    .text_color(rgb(theme::MUTED_TEXT))
                    .child(if transformed { "scale: 0.0 - 1.0" } else { "scale: 0 - 1000" }),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_end()
                    .gap_4()
                    .h(px(220.))
                    .p_2()
                    .border_b_1()
                    .border_l_1()
                    .border_color(rgb(theme::BORDER_COLOR))
                    .children(
                        RAW_VALUES
                            .iter()
                            .zip(SCALED_VALUES)
                            .enumerate()
                            .map(|(i, (&raw, scaled))| {
                                let height = if transformed {
                                    (scaled * 200.0) as f32
                                } else {
                                    (raw / 5.0) as f32
                                };

                                div()
                                    .flex()
                                    .flex_col()
                                    .items_center()
                                    .gap_1()
                                    .child(
                                        div()
                                            .text_xs()
                                            .text_color(rgb(theme::TEXT_COLOR_SECONDARY))
                                            .child(if transformed {
                                                format!("{}", scaled)
                                            } else {
                                                format!("{}", raw)
                                            }),
                                    )
                                    .child(
                                        div()
                                            .w(px(56.))
                                            .h(px(height.max(2.0)))
                                            .rounded_sm()
                                            .bg(rgb(theme::BLUE_ACCENT)),
                                    )
                                    .child(
                                        div()
                                            .text_xs()
                                            .text_color(rgb(theme::MUTED_TEXT))
                                            .child(format!("idx_{}", i)),
                                    )
                            }),
                    ),
            )
            .into_any_element()
    }

    fn render_softmax(&self, demo: &EngineeringDemo, cx: &mut Context<Self>) -> AnyElement {
        let transformed = demo.transformed;
        let label = if transformed { "Reset" } else { "Compute Softmax" };

        div()
            .flex()
            .flex_col()
            .flex_1()
            .items_center()
            .gap_4()
            .child(toggle_button(
                label,
                theme::PURPLE_BUTTON,
                theme::PURPLE_BUTTON_HOVER,
                "[Engineering] softmax: logits vs probabilities toggled",
                cx,
            ))
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_end()
                    .gap_4()
                    .h(px(220.))
                    .pb_2()
                    .border_b_1()
                    .border_color(rgb(theme::BORDER_COLOR))
                    .children(LOGITS.iter().zip(PROBABILITIES).enumerate().map(
                        |(i, (&logit, prob))| {
                            let height = if transformed {
                                (prob * 200.0) as f32
                            } else {
                                (logit * 50.0) as f32
                            };

                            div()
                                .flex()
                                .flex_col()
                                .items_center()
                                .gap_1()
                                .w(px(64.))
                                .child(
                                    div()
                                        .text_sm()
                                        .font_weight(gpui::FontWeight::BOLD)
                                        .text_color(if transformed {
                                            rgb(theme::GREEN_ACCENT)
                                        } else {
                                            rgb(theme::TEXT_COLOR_SECONDARY)
                                        })
                                        .child(if transformed {
                                            format!("{}", prob)
                                        } else {
                                            format!("{}", logit)
                                        }),
                                )
                                .child(
                                    div()
                                        .w_full()
                                        .h(px(height.max(2.0)))
                                        .rounded_sm()
                                        .bg(if transformed {
                                            rgb(theme::GREEN_BUTTON)
                                        } else {
                                            rgb(theme::HOVER_COLOR)
                                        }),
                                )
                                .child(
                                    div()
                                        .text_xs()
                                        .text_color(rgb(theme::MUTED_TEXT))
                                        .child(format!("C{}", i)),
                                )
                        },
                    )),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(rgb(theme::MUTED_TEXT))
                    .child(if transformed {
                        "Sum = 1.0 (Probabilities)"
                    } else {
                        "Raw Logits"
                    }),
            )
            .into_any_element()
    }

    fn render_resample(&self, demo: &EngineeringDemo, cx: &mut Context<Self>) -> AnyElement {
        let transformed = demo.transformed;
        let label = if transformed { "Reset" } else { "Fit Resample (Oversampling)" };

        div()
            .flex()
            .flex_col()
            .flex_1()
            .items_center()
            .gap_4()
            .child(toggle_button(
                label,
                theme::PINK_BUTTON,
                theme::PINK_BUTTON_HOVER,
                "[Engineering] fit_resample: minority oversampling toggled",
                cx,
            ))
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap_4()
                    .p_4()
                    .rounded_lg()
                    .bg(rgb(theme::PANEL_BACKGROUND))
                    .border_1()
                    .border_color(rgb(theme::BORDER_COLOR))
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .text_color(rgb(theme::BLUE_ACCENT))
                                    .child("Majority (Class 0)"),
                            )
                            .child(
                                div().flex().flex_row().flex_wrap().gap_2().w(px(88.)).children(
                                    (0..MAJORITY_COUNT).map(|_| {
                                        div()
                                            .w(px(28.))
                                            .h(px(28.))
                                            .rounded_full()
                                            .bg(rgb(theme::BLUE_ACCENT))
                                    }),
                                ),
                            ),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .text_color(rgb(theme::PINK_ACCENT))
                                    .child("Minority (Class 1)"),
                            )
                            .child(
                                div()
                                    .flex()
                                    .flex_row()
                                    .flex_wrap()
                                    .gap_2()
                                    .w(px(88.))
                                    .child(
                                        div()
                                            .w(px(28.))
                                            .h(px(28.))
                                            .rounded_full()
                                            .bg(rgb(theme::PINK_BUTTON))
                                            .border_2()
                                            .border_color(white()),
                                    )
                                    .when(transformed, |d| {
                                        // Synthetic clones.
                                        d.children((0..MINORITY_CLONES).map(|_| {
                                            div()
                                                .w(px(28.))
                                                .h(px(28.))
                                                .rounded_full()
                                                .bg(rgb(theme::PINK_BUTTON))
                                                .border_1()
                                                .border_color(rgb(theme::PINK_ACCENT))
                                        }))
                                    }),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(rgb(theme::MUTED_TEXT))
                                    .child(format!("count: {}", demo.minority_count())),
                            ),
                    ),
            )
            .into_any_element()
    }
}
