//! Logic scenes: sorting, grouping, concatenation, index lookups, and
//! quantile markers.

use demo_engine::logic::{
    group_sums, LogicDemo, LogicOp, ARGMAX_INDEX, ARGSORT_ASC, GROUP_ROWS, INDEX_ARRAY,
    QUANTILE_DATA, QUANTILE_OFFSETS,
};
use demo_engine::DemoState;
use gpui::{div, prelude::*, px, rgb, white, AnyElement, Context, IntoElement};

use super::scene_button;
use crate::ui::app::FunctionLab;
use crate::ui::theme;

fn with_logic(this: &mut FunctionLab, f: impl FnOnce(&mut LogicDemo)) {
    if let DemoState::Logic(demo) = &mut this.demo {
        f(demo);
    }
}

/// Row colors for the sort scene, keyed by row key.
fn sort_row_color(key: &str) -> u32 {
    match key {
        "a" => theme::RED_ACCENT,
        "b" => theme::GREEN_ACCENT,
        "c" => theme::BLUE_ACCENT,
        _ => theme::YELLOW_BUTTON,
    }
}

impl FunctionLab {
    pub(crate) fn render_logic_scene(
        &self,
        demo: &LogicDemo,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        match demo.op() {
            LogicOp::SortValues => self.render_sort(demo, cx),
            LogicOp::GroupBy => self.render_groupby(demo, cx),
            LogicOp::Concat => self.render_concat(demo, cx),
            LogicOp::ArgmaxArgsort => self.render_argmax_argsort(demo, cx),
            LogicOp::Quantile => self.render_quantile(demo, cx),
        }
    }

    fn render_sort(&self, demo: &LogicDemo, cx: &mut Context<Self>) -> AnyElement {
        div()
            .flex()
            .flex_col()
            .flex_1()
            .items_center()
            .gap_4()
            .child(scene_button(
                "Sort Descending".to_string(),
                theme::INDIGO_BUTTON,
                theme::INDIGO_BUTTON_HOVER,
                cx,
                |this, _cx| {
                    with_logic(this, |demo| demo.sort_descending());
                    this.log("[Logic] sort_values: rows ordered descending");
                },
            ))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .w(px(256.))
                    .children(demo.rows.iter().map(|row| {
                        div()
                            .flex()
                            .flex_row()
                            .items_center()
                            .justify_between()
                            .p_3()
                            .rounded_lg()
                            .bg(rgb(sort_row_color(row.key)))
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .text_color(white())
                                    .child(format!("ID: {}", row.key.to_uppercase())),
                            )
                            .child(
                                div()
                                    .px_2()
                                    .rounded_sm()
                                    .bg(rgb(theme::BACKGROUND))
                                    .child(
                                        div()
                                            .text_sm()
                                            .text_color(white())
                                            .child(format!("{}", row.value)),
                                    ),
                            )
                    })),
            )
            .into_any_element()
    }

    fn render_groupby(&self, demo: &LogicDemo, cx: &mut Context<Self>) -> AnyElement {
        let grouped = demo.grouped;
        let label = if grouped { "Ungroup" } else { "GroupBy('Cat').Sum()" };

        let content: AnyElement = if grouped {
            div()
                .flex()
                .flex_row()
                .gap_4()
                .children(group_sums().into_iter().map(|(group, sum)| {
                    div()
                        .flex()
                        .flex_col()
                        .items_center()
                        .gap_2()
                        .p_3()
                        .w(px(112.))
                        .rounded_lg()
                        .border_1()
                        .border_color(rgb(theme::BORDER_COLOR))
                        .child(
                            div()
                                .text_sm()
                                .font_weight(gpui::FontWeight::BOLD)
                                .text_color(rgb(theme::MUTED_TEXT))
                                .child(group),
                        )
                        .children(
                            GROUP_ROWS
                                .iter()
                                .filter(move |row| row.group == group)
                                .map(|row| {
                                    div()
                                        .w_full()
                                        .px_2()
                                        .py_1()
                                        .rounded_sm()
                                        .bg(rgb(theme::BLUE_BUTTON))
                                        .flex()
                                        .justify_between()
                                        .child(
                                            div().text_xs().text_color(white()).child(row.group),
                                        )
                                        .child(
                                            div()
                                                .text_xs()
                                                .text_color(white())
                                                .child(format!("{}", row.value)),
                                        )
                                }),
                        )
                        .child(
                            div()
                                .text_base()
                                .font_weight(gpui::FontWeight::BOLD)
                                .text_color(rgb(theme::GREEN_ACCENT))
                                .child(format!("Σ {}", sum)),
                        )
                }))
                .into_any_element()
        } else {
            div()
                .flex()
                .flex_col()
                .gap_2()
                .children(GROUP_ROWS.iter().map(|row| {
                    div()
                        .w(px(192.))
                        .px_2()
                        .py_1()
                        .rounded_sm()
                        .bg(rgb(theme::BLUE_BUTTON))
                        .flex()
                        .justify_between()
                        .child(div().text_xs().text_color(white()).child(row.group))
                        .child(
                            div()
                                .text_xs()
                                .text_color(white())
                                .child(format!("{}", row.value)),
                        )
                }))
                .into_any_element()
        };

        div()
            .flex()
            .flex_col()
            .flex_1()
            .items_center()
            .gap_4()
            .child(scene_button(
                label.to_string(),
                theme::INDIGO_BUTTON,
                theme::INDIGO_BUTTON_HOVER,
                cx,
                |this, _cx| {
                    with_logic(this, |demo| demo.toggle_grouped());
                    this.log("[Logic] groupby: grouping toggled");
                },
            ))
            .child(
                div()
                    .p_4()
                    .rounded_lg()
                    .bg(rgb(theme::PANEL_BACKGROUND))
                    .border_1()
                    .border_color(rgb(theme::BORDER_COLOR))
                    .child(content),
            )
            .into_any_element()
    }

    fn render_concat(&self, demo: &LogicDemo, cx: &mut Context<Self>) -> AnyElement {
        let concatenated = demo.concatenated;
        let label = if concatenated { "Reset" } else { "pd.concat([df1, df2])" };

        let table = |rows: usize, tag: &'static str| {
            div()
                .flex()
                .flex_col()
                .gap_2()
                .p_3()
                .w(px(224.))
                .bg(rgb(theme::CARD_BACKGROUND))
                .border_1()
                .border_color(rgb(theme::BORDER_COLOR))
                .rounded_md()
                .child(
                    div()
                        .text_xs()
                        .text_color(rgb(theme::MUTED_TEXT))
                        .child(tag),
                )
                .children((0..rows).map(|_| {
                    div()
                        .h(px(20.))
                        .w_full()
                        .rounded_sm()
                        .bg(rgb(theme::BORDER_COLOR))
                }))
        };

        let content: AnyElement = if concatenated {
            div()
                .flex()
                .flex_col()
                .items_center()
                .gap_2()
                .child(table(4, "pd.concat([df1, df2])"))
                .child(
                    div()
                        .text_xs()
                        .font_weight(gpui::FontWeight::BOLD)
                        .text_color(rgb(theme::GREEN_ACCENT))
                        .child("Merged!"),
                )
                .into_any_element()
        } else {
            div()
                .flex()
                .flex_col()
                .items_center()
                .child(table(2, "df1"))
                .child(div().w(px(3.)).h(px(28.)).bg(rgb(theme::GREEN_ACCENT)))
                .child(table(2, "df2"))
                .into_any_element()
        };

        div()
            .flex()
            .flex_col()
            .flex_1()
            .items_center()
            .gap_4()
            .child(scene_button(
                label.to_string(),
                theme::BLUE_BUTTON,
                theme::BLUE_BUTTON_HOVER,
                cx,
                |this, _cx| {
                    with_logic(this, |demo| demo.toggle_concatenated());
                    this.log("[Logic] concat: tables merged or split");
                },
            ))
            .child(content)
            .into_any_element()
    }

    fn render_argmax_argsort(&self, demo: &LogicDemo, cx: &mut Context<Self>) -> AnyElement {
        let argmax_on = demo.argmax_on;
        let argsort_on = demo.argsort_on;

        let mut captions = div().flex().flex_col().items_center().gap_1().h(px(40.));
        if argmax_on {
            captions = captions.child(
                div()
                    .text_sm()
                    .text_color(rgb(theme::PURPLE_ACCENT))
                    .child(format!(
                        "Index {} is the max ({})",
                        ARGMAX_INDEX, INDEX_ARRAY[ARGMAX_INDEX]
                    )),
            );
        }
        if argsort_on {
            captions = captions.child(
                div()
                    .text_sm()
                    .text_color(rgb(theme::PINK_ACCENT))
                    .child(format!("Indices {:?} sort the array", ARGSORT_ASC)),
            );
        }

        div()
            .flex()
            .flex_col()
            .flex_1()
            .items_center()
            .gap_4()
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap_3()
                    .child(scene_button(
                        "Argmax".to_string(),
                        theme::PURPLE_BUTTON,
                        theme::PURPLE_BUTTON_HOVER,
                        cx,
                        |this, _cx| {
                            with_logic(this, |demo| demo.toggle_argmax());
                            this.log("[Logic] argmax overlay toggled");
                        },
                    ))
                    .child(scene_button(
                        "Argsort".to_string(),
                        theme::PINK_BUTTON,
                        theme::PINK_BUTTON_HOVER,
                        cx,
                        |this, _cx| {
                            with_logic(this, |demo| demo.toggle_argsort());
                            this.log("[Logic] argsort overlay toggled");
                        },
                    )),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_end()
                    .gap_2()
                    .children(INDEX_ARRAY.iter().enumerate().map(|(idx, &value)| {
                        let is_max = argmax_on && idx == ARGMAX_INDEX;

                        div()
                            .flex()
                            .flex_col()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .w(px(28.))
                                    .h(px(28.))
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .rounded_full()
                                    .border_1()
                                    .bg(if is_max {
                                        rgb(theme::PURPLE_BUTTON)
                                    } else if argsort_on {
                                        rgb(theme::PINK_BUTTON)
                                    } else {
                                        rgb(theme::CARD_BACKGROUND)
                                    })
                                    .border_color(if is_max {
                                        rgb(theme::PURPLE_ACCENT)
                                    } else if argsort_on {
                                        rgb(theme::PINK_ACCENT)
                                    } else {
                                        rgb(theme::BORDER_COLOR)
                                    })
                                    .child(
                                        div()
                                            .text_xs()
                                            .font_weight(gpui::FontWeight::BOLD)
                                            .text_color(if is_max || argsort_on {
                                                white()
                                            } else {
                                                rgb(theme::MUTED_TEXT)
                                            })
                                            .child(format!("{}", idx)),
                                    ),
                            )
                            .child(
                                div()
                                    .w(px(44.))
                                    .h(px(value as f32 * 2.0))
                                    .rounded_sm()
                                    .bg(if is_max {
                                        rgb(theme::PURPLE_BUTTON)
                                    } else {
                                        rgb(theme::HOVER_COLOR)
                                    })
                                    .flex()
                                    .items_end()
                                    .justify_center()
                                    .child(
                                        div()
                                            .text_xs()
                                            .font_weight(gpui::FontWeight::BOLD)
                                            .text_color(white())
                                            .child(format!("{}", value)),
                                    ),
                            )
                    })),
            )
            .child(captions)
            .into_any_element()
    }

    fn render_quantile(&self, demo: &LogicDemo, cx: &mut Context<Self>) -> AnyElement {
        let shown = demo.quantiles_shown;
        let label = if shown { "Hide" } else { "Show Quantiles (.25, .5, .75)" };

        // Marker positions are positional: offset * bar count gives the
        // boundary index the marker sits on, independent of the values.
        let marker_slots: Vec<usize> = QUANTILE_OFFSETS
            .iter()
            .map(|&offset| (offset * QUANTILE_DATA.len() as f32) as usize)
            .collect();

        let mut bars = div()
            .flex()
            .flex_row()
            .items_end()
            .gap_2()
            .h(px(200.))
            .pb_2()
            .border_b_1()
            .border_color(rgb(theme::BORDER_COLOR));

        for (i, &value) in QUANTILE_DATA.iter().enumerate() {
            if shown {
                if let Some(slot) = marker_slots.iter().position(|&s| s == i) {
                    bars = bars.child(quantile_marker(QUANTILE_OFFSETS[slot]));
                }
            }
            bars = bars.child(
                div()
                    .w(px(28.))
                    .h(px(value as f32 * 2.0))
                    .rounded_sm()
                    .bg(rgb(theme::HOVER_COLOR)),
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
                theme::YELLOW_BUTTON,
                theme::YELLOW_BUTTON_HOVER,
                cx,
                |this, _cx| {
                    with_logic(this, |demo| demo.toggle_quantiles());
                    this.log("[Logic] quantile: markers toggled");
                },
            ))
            .child(bars)
            .into_any_element()
    }
}

fn quantile_marker(offset: f32) -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .items_center()
        .h_full()
        .child(
            div()
                .text_xs()
                .font_weight(gpui::FontWeight::BOLD)
                .text_color(rgb(theme::YELLOW_ACCENT))
                .child(format!("{}%", (offset * 100.0) as u32)),
        )
        .child(div().w(px(2.)).flex_1().bg(rgb(theme::YELLOW_ACCENT)))
}
