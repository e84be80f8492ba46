//! Scene renderers, one module per category.

pub mod cleaning;
pub mod engineering;
pub mod logic;
pub mod slicing;
pub mod training;

use gpui::{
    div, prelude::*, rgb, white, Context, IntoElement, MouseButton, MouseDownEvent, Window,
};

use super::app::FunctionLab;
use super::theme;

/// The standard scene action button.
pub(crate) fn scene_button(
    label: String,
    bg: u32,
    hover_bg: u32,
    cx: &mut Context<FunctionLab>,
    on_click: impl Fn(&mut FunctionLab, &mut Context<FunctionLab>) + 'static,
) -> impl IntoElement {
    div()
        .px_3()
        .py_1()
        .rounded_md()
        .bg(rgb(bg))
        .cursor_pointer()
        .hover(move |s| s.bg(rgb(hover_bg)))
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(
                move |this, _: &MouseDownEvent, _: &mut Window, cx: &mut Context<FunctionLab>| {
                    on_click(this, cx);
                    cx.notify();
                },
            ),
        )
        .child(div().text_sm().text_color(white()).child(label))
}

/// A button rendered inert: no pointer, no listener. Used while the
/// predict sequence has the control disabled.
pub(crate) fn disabled_button(label: String, bg: u32) -> impl IntoElement {
    div()
        .px_3()
        .py_1()
        .rounded_md()
        .bg(rgb(bg))
        .child(
            div()
                .text_sm()
                .text_color(rgb(theme::MUTED_TEXT))
                .child(label),
        )
}
