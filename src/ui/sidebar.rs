//! Category navigator: the catalog grouped by category, one clickable
//! entry per operation.

use demo_engine::catalog;
use gpui::{div, prelude::*, px, rgb, Context, IntoElement, MouseButton, MouseDownEvent, Window};

use super::app::FunctionLab;
use super::theme;

impl FunctionLab {
    pub(crate) fn render_sidebar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("sidebar-scroll")
            .flex()
            .flex_col()
            .w(px(240.))
            .h_full()
            .overflow_y_scroll()
            .bg(rgb(theme::PANEL_BACKGROUND))
            .border_r_1()
            .border_color(rgb(theme::BORDER_COLOR))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .p_4()
                    .border_b_1()
                    .border_color(rgb(theme::BORDER_COLOR))
                    .child(
                        div()
                            .text_xl()
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(rgb(theme::BLUE_ACCENT))
                            .child("Function Lab"),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(rgb(theme::MUTED_TEXT))
                            .child("Core Function Interactive V1.0"),
                    ),
            )
            .children(catalog::Category::ALL.iter().filter_map(|&category| {
                let ops: Vec<_> = catalog::in_category(category).collect();
                // A category with no operations is omitted entirely.
                if ops.is_empty() {
                    return None;
                }

                Some(
                    div()
                        .flex()
                        .flex_col()
                        .gap_1()
                        .py_2()
                        .child(
                            div()
                                .px_3()
                                .text_xs()
                                .font_weight(gpui::FontWeight::BOLD)
                                .text_color(rgb(theme::MUTED_TEXT))
                                .child(category.label().to_uppercase()),
                        )
                        .children(ops.into_iter().map(|op| {
                            let is_active = self.selection.is_active(op.id);
                            let id = op.id;

                            div()
                                .flex()
                                .flex_row()
                                .items_center()
                                .justify_between()
                                .px_4()
                                .py_1()
                                .cursor_pointer()
                                .bg(if is_active {
                                    rgb(theme::CARD_BACKGROUND)
                                } else {
                                    rgb(theme::PANEL_BACKGROUND)
                                })
                                .hover(|s| s.bg(rgb(theme::CARD_BACKGROUND)))
                                .on_mouse_down(
                                    MouseButton::Left,
                                    cx.listener(
                                        move |this,
                                              _: &MouseDownEvent,
                                              _: &mut Window,
                                              cx: &mut Context<Self>| {
                                            this.select_operation(id);
                                            cx.notify();
                                        },
                                    ),
                                )
                                .child(
                                    div()
                                        .text_sm()
                                        .text_color(if is_active {
                                            rgb(theme::TEXT_COLOR)
                                        } else {
                                            rgb(theme::MUTED_TEXT)
                                        })
                                        .child(op.name),
                                )
                                .when(is_active, |d| {
                                    d.child(
                                        div()
                                            .text_sm()
                                            .text_color(rgb(theme::BLUE_ACCENT))
                                            .child("›"),
                                    )
                                })
                        })),
                )
            }))
    }
}
