//! Slicing scenes: the row-pick grid, the conditional filter, and the
//! column subset.

use demo_engine::slicing::{
    SlicingDemo, SlicingOp, GRID_COLS, GRID_HEADERS, GRID_ROWS, QUERY_THRESHOLD,
};
use demo_engine::DemoState;
use gpui::{
    div, prelude::*, px, rgb, white, AnyElement, Context, IntoElement, MouseButton,
    MouseDownEvent, Window,
};

use super::scene_button;
use crate::ui::app::FunctionLab;
use crate::ui::theme;

fn with_slicing(this: &mut FunctionLab, f: impl FnOnce(&mut SlicingDemo)) {
    if let DemoState::Slicing(demo) = &mut this.demo {
        f(demo);
    }
}

impl FunctionLab {
    pub(crate) fn render_slicing_scene(
        &self,
        demo: &SlicingDemo,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        match demo.op() {
            SlicingOp::RowPick => self.render_row_pick(demo, cx),
            SlicingOp::Query => self.render_query(demo, cx),
            SlicingOp::Subset => self.render_subset(demo, cx),
        }
    }

    fn render_row_pick(&self, demo: &SlicingDemo, cx: &mut Context<Self>) -> AnyElement {
        let picked = demo.picked_row;

        div()
            .flex()
            .flex_col()
            .flex_1()
            .items_center()
            .gap_4()
            .child(
                div()
                    .text_sm()
                    .text_color(rgb(theme::MUTED_TEXT))
                    .child("Click an index label to select that row"),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .p_4()
                    .rounded_lg()
                    .bg(rgb(theme::PANEL_BACKGROUND))
                    .border_1()
                    .border_color(rgb(theme::BORDER_COLOR))
                    .child(
                        div()
                            .flex()
                            .flex_row()
                            .gap_1()
                            .child(div().w(px(44.)))
                            .children(GRID_HEADERS.map(|header| {
                                div()
                                    .w(px(72.))
                                    .h(px(28.))
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .child(
                                        div()
                                            .text_xs()
                                            .font_weight(gpui::FontWeight::BOLD)
                                            .text_color(rgb(theme::MUTED_TEXT))
                                            .child(header),
                                    )
                            })),
                    )
                    .children((0..GRID_ROWS).map(|row| {
                        let is_picked = picked == Some(row);

                        div()
                            .flex()
                            .flex_row()
                            .gap_1()
                            .child(
                                div()
                                    .w(px(44.))
                                    .h(px(44.))
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .cursor_pointer()
                                    .rounded_sm()
                                    .hover(|s| s.bg(rgb(theme::CARD_BACKGROUND)))
                                    .on_mouse_down(
                                        MouseButton::Left,
                                        cx.listener(
                                            move |this,
                                                  _: &MouseDownEvent,
                                                  _: &mut Window,
                                                  cx: &mut Context<Self>| {
                                                with_slicing(this, |demo| demo.pick_row(row));
                                                this.log(&format!(
                                                    "[Slicing] iloc: row {} toggled",
                                                    row
                                                ));
                                                cx.notify();
                                            },
                                        ),
                                    )
                                    .child(
                                        div()
                                            .text_sm()
                                            .text_color(if is_picked {
                                                rgb(theme::TEXT_COLOR)
                                            } else {
                                                rgb(theme::MUTED_TEXT)
                                            })
                                            .child(format!("{}", row)),
                                    ),
                            )
                            .children((0..GRID_COLS).map(|col| {
                                let value = self
                                    .grid_values
                                    .get(row * GRID_COLS + col)
                                    .copied()
                                    .unwrap_or(0);

                                div()
                                    .w(px(72.))
                                    .h(px(44.))
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .rounded_sm()
                                    .border_1()
                                    .bg(if is_picked {
                                        rgb(theme::BLUE_BUTTON)
                                    } else {
                                        rgb(theme::CARD_BACKGROUND)
                                    })
                                    .border_color(if is_picked {
                                        rgb(theme::BLUE_ACCENT)
                                    } else {
                                        rgb(theme::BORDER_COLOR)
                                    })
                                    .child(
                                        div()
                                            .text_sm()
                                            .text_color(if is_picked {
                                                white()
                                            } else {
                                                rgb(theme::MUTED_TEXT)
                                            })
                                            .child(format!("{}", value)),
                                    )
                            }))
                    })),
            )
            .child(
                div()
                    .h(px(20.))
                    .text_sm()
                    .text_color(rgb(theme::GREEN_ACCENT))
                    .child(match picked {
                        Some(row) => format!("df.iloc[{}]", row),
                        None => String::new(),
                    }),
            )
            .into_any_element()
    }

    fn render_query(&self, demo: &SlicingDemo, cx: &mut Context<Self>) -> AnyElement {
        let filtered = demo.filtered;
        let label = if filtered { "Reset" } else { "Run Query" };

        div()
            .flex()
            .flex_col()
            .flex_1()
            .items_center()
            .gap_4()
            .child(
                div()
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .bg(rgb(theme::CARD_BACKGROUND))
                    .border_1()
                    .border_color(rgb(theme::RED_ACCENT))
                    .child(
                        div()
                            .text_xs()
                            .text_color(rgb(theme::RED_ACCENT))
                            .child(format!("Condition: val > {}", QUERY_THRESHOLD)),
                    ),
            )
            .child(scene_button(
                label.to_string(),
                theme::BLUE_BUTTON,
                theme::BLUE_BUTTON_HOVER,
                cx,
                |this, _cx| {
                    with_slicing(this, |demo| demo.toggle_filter());
                    let shown = match &this.demo {
                        DemoState::Slicing(demo) => demo.visible_points().len(),
                        _ => 0,
                    };
                    this.log(&format!("[Slicing] query: {} points pass", shown));
                },
            ))
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_end()
                    .gap_3()
                    .h(px(200.))
                    .pb_2()
                    .border_b_1()
                    .border_color(rgb(theme::BORDER_COLOR))
                    .children(demo.visible_points().into_iter().map(|(_, value)| {
                        div()
                            .w(px(40.))
                            .h(px(value as f32 * 2.0))
                            .rounded_sm()
                            .bg(if filtered {
                                rgb(theme::GREEN_ACCENT)
                            } else {
                                rgb(theme::BLUE_ACCENT)
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
                            )
                    })),
            )
            .into_any_element()
    }

    fn render_subset(&self, demo: &SlicingDemo, cx: &mut Context<Self>) -> AnyElement {
        let subset_only = demo.subset_only;
        let label = if subset_only {
            "Show All Columns"
        } else {
            "Select Subset"
        };

        div()
            .flex()
            .flex_col()
            .flex_1()
            .items_center()
            .gap_4()
            .child(scene_button(
                label.to_string(),
                theme::PURPLE_BUTTON,
                theme::PURPLE_BUTTON_HOVER,
                cx,
                |this, _cx| {
                    with_slicing(this, |demo| demo.toggle_subset());
                    this.log("[Slicing] subset: column selection toggled");
                },
            ))
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap_2()
                    .p_4()
                    .rounded_lg()
                    .bg(rgb(theme::PANEL_BACKGROUND))
                    .border_1()
                    .border_color(rgb(theme::BORDER_COLOR))
                    .children(demo.visible_columns().into_iter().map(|col| {
                        div()
                            .flex()
                            .flex_col()
                            .w(px(88.))
                            .h(px(176.))
                            .rounded_lg()
                            .border_1()
                            .bg(if subset_only {
                                rgb(theme::PANEL_BACKGROUND)
                            } else {
                                rgb(theme::CARD_BACKGROUND)
                            })
                            .border_color(if subset_only {
                                rgb(theme::GREEN_ACCENT)
                            } else {
                                rgb(theme::BORDER_COLOR)
                            })
                            .child(
                                div()
                                    .w_full()
                                    .py_1()
                                    .border_b_1()
                                    .border_color(if subset_only {
                                        rgb(theme::GREEN_ACCENT)
                                    } else {
                                        rgb(theme::BORDER_COLOR)
                                    })
                                    .flex()
                                    .justify_center()
                                    .child(
                                        div()
                                            .text_sm()
                                            .font_weight(gpui::FontWeight::BOLD)
                                            .text_color(if subset_only {
                                                rgb(theme::GREEN_ACCENT)
                                            } else {
                                                rgb(theme::MUTED_TEXT)
                                            })
                                            .child(col.name),
                                    ),
                            )
                            .child(
                                div()
                                    .flex()
                                    .flex_col()
                                    .gap_2()
                                    .p_2()
                                    .child(div().h(px(8.)).w(px(60.)).rounded_sm().bg(rgb(theme::BORDER_COLOR)))
                                    .child(div().h(px(8.)).w(px(40.)).rounded_sm().bg(rgb(theme::BORDER_COLOR)))
                                    .child(div().h(px(8.)).w(px(72.)).rounded_sm().bg(rgb(theme::BORDER_COLOR))),
                            )
                    })),
            )
            .into_any_element()
    }
}
