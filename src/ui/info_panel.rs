//! Detail panel: a pure projection of the resolved active operation's
//! purpose text and code prototype.

use gpui::{div, prelude::*, px, rgb, IntoElement};

use super::app::FunctionLab;
use super::theme;

impl FunctionLab {
    pub(crate) fn render_info_panel(&self) -> impl IntoElement {
        // Resolution is total: an unresolvable id projects the default
        // operation, never an empty panel.
        let op = self.selection.active_operation();

        div()
            .flex()
            .flex_row()
            .gap_4()
            .p_4()
            .h(px(160.))
            .bg(rgb(theme::PANEL_BACKGROUND))
            .border_t_1()
            .border_color(rgb(theme::BORDER_COLOR))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .flex_1()
                    .gap_2()
                    .child(
                        div()
                            .text_xs()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(rgb(theme::BLUE_ACCENT))
                            .child("PURPOSE"),
                    )
                    .child(
                        div()
                            .flex_1()
                            .p_3()
                            .bg(rgb(theme::CARD_BACKGROUND))
                            .rounded_md()
                            .border_1()
                            .border_color(rgb(theme::BORDER_COLOR))
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(rgb(theme::TEXT_COLOR_SECONDARY))
                                    .child(op.purpose),
                            ),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .flex_1()
                    .gap_2()
                    .child(
                        div()
                            .text_xs()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(rgb(theme::GREEN_ACCENT))
                            .child("PROTOTYPE"),
                    )
                    .child(
                        div()
                            .flex_1()
                            .p_3()
                            .bg(rgb(theme::BACKGROUND))
                            .rounded_md()
                            .border_1()
                            .border_color(rgb(theme::BORDER_COLOR))
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(rgb(theme::GREEN_ACCENT))
                                    .child(op.code_sample),
                            ),
                    ),
            )
    }
}
