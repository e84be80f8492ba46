//! Cleaning scenes: read_csv, duplicates, nulls, coercion, and the
//! dtype/array/columns toggles.

use demo_engine::cleaning::{
    CleaningDemo, CleaningOp, ARRAY_VALUES, FLOAT_VALUES, HEADER_LABELS, INT_VALUES,
};
use demo_engine::DemoState;
use gpui::{
    div, prelude::*, px, rgb, white, AnyElement, Context, IntoElement, MouseButton,
    MouseDownEvent, Window,
};

use super::scene_button;
use crate::ui::app::FunctionLab;
use crate::ui::theme;

fn with_cleaning(this: &mut FunctionLab, f: impl FnOnce(&mut CleaningDemo)) {
    if let DemoState::Cleaning(demo) = &mut this.demo {
        f(demo);
    }
}

impl FunctionLab {
    pub(crate) fn render_cleaning_scene(
        &self,
        demo: &CleaningDemo,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        match demo.op() {
            CleaningOp::ReadCsv => self.render_read_csv(demo, cx),
            CleaningOp::DropDuplicates => self.render_drop_duplicates(demo, cx),
            CleaningOp::FillNa | CleaningOp::IsNull | CleaningOp::DropNa => {
                self.render_null_scene(demo, cx)
            }
            CleaningOp::ToNumeric => self.render_to_numeric(demo, cx),
            CleaningOp::AsType => self.render_astype(demo, cx),
            CleaningOp::NpArray => self.render_np_array(demo, cx),
            CleaningOp::Columns => self.render_columns(demo, cx),
        }
    }

    fn render_read_csv(&self, demo: &CleaningDemo, cx: &mut Context<Self>) -> AnyElement {
        if !demo.csv_expanded {
            return div()
                .flex()
                .flex_col()
                .flex_1()
                .items_center()
                .justify_center()
                .gap_4()
                .child(
                    div()
                        .flex()
                        .items_center()
                        .justify_center()
                        .w(px(80.))
                        .h(px(96.))
                        .rounded_md()
                        .bg(rgb(theme::CARD_BACKGROUND))
                        .border_1()
                        .border_color(rgb(theme::GREEN_ACCENT))
                        .cursor_pointer()
                        .hover(|s| s.bg(rgb(theme::HOVER_COLOR)))
                        .on_mouse_down(
                            MouseButton::Left,
                            cx.listener(
                                |this, _: &MouseDownEvent, _: &mut Window, cx: &mut Context<Self>| {
                                    with_cleaning(this, |demo| demo.expand_csv());
                                    this.log("[Cleaning] read_csv: file parsed into a DataFrame");
                                    cx.notify();
                                },
                            ),
                        )
                        .child(
                            div()
                                .text_sm()
                                .font_weight(gpui::FontWeight::BOLD)
                                .text_color(rgb(theme::GREEN_ACCENT))
                                .child("CSV"),
                        ),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(rgb(theme::MUTED_TEXT))
                        .child("Click the file to read_csv()"),
                )
                .into_any_element();
        }

        div()
            .flex()
            .flex_col()
            .flex_1()
            .items_center()
            .justify_center()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .p_4()
                    .rounded_lg()
                    .bg(rgb(theme::CARD_BACKGROUND))
                    .border_1()
                    .border_color(rgb(theme::BORDER_COLOR))
                    .child(
                        div()
                            .flex()
                            .flex_row()
                            .gap_2()
                            .pb_2()
                            .border_b_1()
                            .border_color(rgb(theme::BORDER_COLOR))
                            .children(["ID", "Name", "Score"].map(|header| {
                                div()
                                    .w(px(96.))
                                    .text_xs()
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .text_color(rgb(theme::MUTED_TEXT))
                                    .child(header)
                            })),
                    )
                    .children((0..3).map(|row| {
                        div().flex().flex_row().gap_2().children((0..3).map(move |col| {
                            div()
                                .w(px(96.))
                                .h(px(28.))
                                .flex()
                                .items_center()
                                .justify_center()
                                .rounded_sm()
                                .bg(rgb(theme::PANEL_BACKGROUND))
                                .child(div().text_sm().text_color(rgb(theme::TEXT_COLOR_SECONDARY)).child(
                                    if col == 0 {
                                        format!("{}", row + 1)
                                    } else {
                                        "Data".to_string()
                                    },
                                ))
                        }))
                    })),
            )
            .into_any_element()
    }

    fn render_drop_duplicates(&self, demo: &CleaningDemo, cx: &mut Context<Self>) -> AnyElement {
        div()
            .flex()
            .flex_col()
            .flex_1()
            .items_center()
            .gap_4()
            .child(scene_button(
                "Execute drop_duplicates()".to_string(),
                theme::BLUE_BUTTON,
                theme::BLUE_BUTTON_HOVER,
                cx,
                |this, _cx| {
                    with_cleaning(this, |demo| demo.drop_duplicates());
                    let remaining = match &this.demo {
                        DemoState::Cleaning(demo) => demo.rows.len(),
                        _ => 0,
                    };
                    this.log(&format!(
                        "[Cleaning] drop_duplicates: {} rows remain",
                        remaining
                    ));
                },
            ))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .w(px(320.))
                    .children(demo.rows.iter().enumerate().map(|(i, row)| {
                        // A row is the later occurrence if an earlier row
                        // carries the same label.
                        let is_dup = demo.rows[..i].iter().any(|r| r.label == row.label);

                        div()
                            .flex()
                            .flex_row()
                            .items_center()
                            .justify_between()
                            .p_3()
                            .rounded_lg()
                            .border_1()
                            .bg(if is_dup {
                                rgb(theme::CARD_BACKGROUND)
                            } else {
                                rgb(theme::PANEL_BACKGROUND)
                            })
                            .border_color(if is_dup {
                                rgb(theme::ORANGE_ACCENT)
                            } else {
                                rgb(theme::BORDER_COLOR)
                            })
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(rgb(theme::MUTED_TEXT))
                                    .child(format!("{}", row.id)),
                            )
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .child(row.label),
                            )
                            .when(is_dup, |d| {
                                d.child(
                                    div()
                                        .px_2()
                                        .rounded_sm()
                                        .bg(rgb(theme::ORANGE_ACCENT))
                                        .child(div().text_xs().text_color(white()).child("DUP")),
                                )
                            })
                    })),
            )
            .into_any_element()
    }

    fn render_null_scene(&self, demo: &CleaningDemo, cx: &mut Context<Self>) -> AnyElement {
        let op = demo.op();
        let flags = demo.null_flags();

        let mut scene = div().flex().flex_col().flex_1().items_center().gap_4();

        scene = match op {
            CleaningOp::FillNa => scene.child(scene_button(
                "Execute fillna(0)".to_string(),
                theme::BLUE_BUTTON,
                theme::BLUE_BUTTON_HOVER,
                cx,
                |this, _cx| {
                    with_cleaning(this, |demo| demo.fill_nulls());
                    this.log("[Cleaning] fillna: null rows patched with 0");
                },
            )),
            CleaningOp::DropNa => scene.child(scene_button(
                "Execute dropna()".to_string(),
                theme::BLUE_BUTTON,
                theme::BLUE_BUTTON_HOVER,
                cx,
                |this, _cx| {
                    with_cleaning(this, |demo| demo.drop_nulls());
                    let kept = match &this.demo {
                        DemoState::Cleaning(demo) => demo.nullable.len(),
                        _ => 0,
                    };
                    this.log(&format!("[Cleaning] dropna: {} complete rows kept", kept));
                },
            )),
            // isnull is side-effect-free: the scanner only marks rows.
            _ => scene,
        };

        scene
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .w(px(320.))
                    .children(demo.nullable.iter().zip(flags).map(|(row, is_null)| {
                        let mut line = div()
                            .flex()
                            .flex_row()
                            .items_center()
                            .gap_3()
                            .h(px(44.))
                            .px_3()
                            .rounded_lg()
                            .bg(rgb(theme::CARD_BACKGROUND))
                            .border_1()
                            .border_color(if is_null {
                                rgb(theme::RED_ACCENT)
                            } else {
                                rgb(theme::BORDER_COLOR)
                            })
                            .child(
                                div()
                                    .w(px(32.))
                                    .text_xs()
                                    .text_color(rgb(theme::MUTED_TEXT))
                                    .child(format!("#{}", row.id)),
                            );

                        if is_null {
                            // The hole.
                            line = line.child(
                                div()
                                    .flex()
                                    .flex_1()
                                    .justify_center()
                                    .child(
                                        div()
                                            .w(px(20.))
                                            .h(px(20.))
                                            .rounded_full()
                                            .bg(rgb(0x000000))
                                            .border_1()
                                            .border_color(rgb(theme::RED_ACCENT)),
                                    ),
                            );
                            if op == CleaningOp::IsNull {
                                line = line.child(
                                    div()
                                        .px_2()
                                        .rounded_sm()
                                        .bg(rgb(theme::RED_ACCENT))
                                        .child(div().text_xs().text_color(white()).child("TRUE")),
                                );
                            }
                        } else {
                            let value = row.value.unwrap_or_default();
                            line = line.child(
                                div()
                                    .flex()
                                    .flex_1()
                                    .justify_center()
                                    .child(
                                        div()
                                            .text_sm()
                                            .text_color(if row.filled {
                                                rgb(theme::GREEN_ACCENT)
                                            } else {
                                                rgb(theme::TEXT_COLOR)
                                            })
                                            .child(format!("{}", value)),
                                    ),
                            );
                            if row.filled {
                                line = line.child(
                                    div()
                                        .px_2()
                                        .rounded_sm()
                                        .bg(rgb(theme::GREEN_BUTTON))
                                        .child(
                                            div().text_xs().text_color(white()).child("PATCH: 0"),
                                        ),
                                );
                            }
                        }

                        line
                    })),
            )
            .into_any_element()
    }

    fn render_to_numeric(&self, demo: &CleaningDemo, cx: &mut Context<Self>) -> AnyElement {
        div()
            .flex()
            .flex_col()
            .flex_1()
            .items_center()
            .gap_4()
            .child(scene_button(
                "Execute to_numeric(coerce)".to_string(),
                theme::BLUE_BUTTON,
                theme::BLUE_BUTTON_HOVER,
                cx,
                |this, _cx| {
                    with_cleaning(this, |demo| demo.coerce_numeric());
                    this.log("[Cleaning] to_numeric: unparsable cells coerced to NaN");
                },
            ))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .w(px(256.))
                    .children(demo.cells.iter().map(|cell| {
                        div()
                            .flex()
                            .flex_row()
                            .items_center()
                            .gap_3()
                            .child(
                                div()
                                    .w(px(28.))
                                    .h(px(28.))
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .rounded_full()
                                    .bg(rgb(theme::CARD_BACKGROUND))
                                    .child(
                                        div()
                                            .text_xs()
                                            .text_color(rgb(theme::MUTED_TEXT))
                                            .child(format!("{}", cell.id)),
                                    ),
                            )
                            .child(
                                div()
                                    .flex()
                                    .flex_1()
                                    .h(px(44.))
                                    .items_center()
                                    .justify_center()
                                    .rounded_md()
                                    .border_1()
                                    .bg(if cell.nan {
                                        rgb(theme::BACKGROUND)
                                    } else {
                                        rgb(theme::CARD_BACKGROUND)
                                    })
                                    .border_color(rgb(theme::BORDER_COLOR))
                                    .child(
                                        div()
                                            .text_sm()
                                            .text_color(if cell.nan {
                                                rgb(theme::MUTED_TEXT)
                                            } else {
                                                rgb(theme::TEXT_COLOR)
                                            })
                                            .child(cell.display()),
                                    ),
                            )
                            .when(!cell.parses() && !cell.nan, |d| {
                                d.child(
                                    div()
                                        .text_xs()
                                        .text_color(rgb(theme::RED_ACCENT))
                                        .child("Err"),
                                )
                            })
                    })),
            )
            .into_any_element()
    }

    fn render_astype(&self, demo: &CleaningDemo, cx: &mut Context<Self>) -> AnyElement {
        let converted = demo.cast_to_int;
        let label = if converted { "Reset" } else { "Execute astype(int)" };

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
                    with_cleaning(this, |demo| demo.toggle_cast());
                    this.log("[Cleaning] astype: dtype toggled");
                },
            ))
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap_4()
                    .children(FLOAT_VALUES.iter().zip(INT_VALUES).map(|(&float, int)| {
                        div()
                            .flex()
                            .flex_col()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .w(px(88.))
                                    .h(px(88.))
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .rounded_lg()
                                    .border_1()
                                    .bg(if converted {
                                        rgb(theme::INDIGO_BUTTON)
                                    } else {
                                        rgb(theme::CARD_BACKGROUND)
                                    })
                                    .border_color(if converted {
                                        rgb(theme::INDIGO_ACCENT)
                                    } else {
                                        rgb(theme::BORDER_COLOR)
                                    })
                                    .child(
                                        div()
                                            .text_xl()
                                            .font_weight(gpui::FontWeight::BOLD)
                                            .child(if converted {
                                                format!("{}", int)
                                            } else {
                                                format!("{:.2}", float)
                                            }),
                                    ),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(rgb(theme::MUTED_TEXT))
                                    .child(if converted { "int64" } else { "float64" }),
                            )
                    })),
            )
            .into_any_element()
    }

    fn render_np_array(&self, demo: &CleaningDemo, cx: &mut Context<Self>) -> AnyElement {
        let as_array = demo.as_array;
        let label = if as_array { "Convert to List" } else { "np.array(list)" };

        let shape: AnyElement = if as_array {
            div()
                .flex()
                .flex_col()
                .items_center()
                .gap_2()
                .child(
                    div()
                        .text_xs()
                        .font_weight(gpui::FontWeight::BOLD)
                        .text_color(rgb(theme::GREEN_ACCENT))
                        .child("NumPy Array"),
                )
                .child(
                    div()
                        .flex()
                        .flex_row()
                        .rounded_md()
                        .border_2()
                        .border_color(rgb(theme::GREEN_ACCENT))
                        .children(ARRAY_VALUES.iter().enumerate().map(|(i, &n)| {
                            div()
                                .w(px(56.))
                                .h(px(56.))
                                .flex()
                                .items_center()
                                .justify_center()
                                .bg(rgb(theme::CARD_BACKGROUND))
                                .when(i < ARRAY_VALUES.len() - 1, |d| {
                                    d.border_r_1().border_color(rgb(theme::BORDER_COLOR))
                                })
                                .child(
                                    div()
                                        .text_xl()
                                        .font_weight(gpui::FontWeight::BOLD)
                                        .child(format!("{}", n)),
                                )
                        })),
                )
                .into_any_element()
        } else {
            div()
                .flex()
                .flex_col()
                .gap_2()
                .p_4()
                .rounded_lg()
                .border_1()
                .border_color(rgb(theme::BORDER_COLOR))
                .bg(rgb(theme::PANEL_BACKGROUND))
                .child(
                    div()
                        .text_xs()
                        .text_color(rgb(theme::MUTED_TEXT))
                        .child("Python List"),
                )
                .children(ARRAY_VALUES.iter().map(|&n| {
                    div()
                        .px_4()
                        .py_1()
                        .rounded_sm()
                        .bg(rgb(theme::CARD_BACKGROUND))
                        .border_1()
                        .border_color(rgb(theme::BORDER_COLOR))
                        .child(
                            div()
                                .text_sm()
                                .text_color(rgb(theme::TEXT_COLOR_SECONDARY))
                                .child(format!("{}", n)),
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
                theme::GREEN_BUTTON,
                theme::GREEN_BUTTON_HOVER,
                cx,
                |this, _cx| {
                    with_cleaning(this, |demo| demo.toggle_array());
                    this.log("[Cleaning] np.array: representation toggled");
                },
            ))
            .child(shape)
            .into_any_element()
    }

    fn render_columns(&self, demo: &CleaningDemo, cx: &mut Context<Self>) -> AnyElement {
        let lifted = demo.headers_lifted;
        let label = if lifted { "Reset" } else { "Extract df.columns" };

        let mut scene = div()
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
                    with_cleaning(this, |demo| demo.toggle_headers());
                    this.log("[Cleaning] columns: header index toggled");
                },
            ));

        if lifted {
            scene = scene.child(
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_1()
                    .child(
                        div()
                            .flex()
                            .flex_row()
                            .gap_2()
                            .p_3()
                            .rounded_lg()
                            .bg(rgb(theme::INDIGO_BUTTON))
                            .border_1()
                            .border_color(rgb(theme::INDIGO_ACCENT))
                            .children(HEADER_LABELS.map(|header| {
                                div()
                                    .px_3()
                                    .py_1()
                                    .rounded_sm()
                                    .bg(rgb(theme::PANEL_BACKGROUND))
                                    .child(
                                        div()
                                            .text_sm()
                                            .text_color(rgb(theme::INDIGO_ACCENT))
                                            .child(format!("'{}'", header)),
                                    )
                            })),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(rgb(theme::INDIGO_ACCENT))
                            .child("Index(['Name', 'Age', 'City'], dtype='object')"),
                    ),
            );
        }

        let table_text = if lifted {
            rgb(theme::MUTED_TEXT)
        } else {
            rgb(theme::TEXT_COLOR_SECONDARY)
        };

        scene
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .p_4()
                    .rounded_lg()
                    .border_1()
                    .border_color(rgb(theme::BORDER_COLOR))
                    .bg(rgb(theme::PANEL_BACKGROUND))
                    .child(
                        div()
                            .flex()
                            .flex_row()
                            .gap_2()
                            .pb_2()
                            .border_b_1()
                            .border_color(rgb(theme::BORDER_COLOR))
                            .children(HEADER_LABELS.map(|header| {
                                div()
                                    .w(px(80.))
                                    .h(px(28.))
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .rounded_sm()
                                    .bg(rgb(theme::CARD_BACKGROUND))
                                    .child(
                                        div()
                                            .text_xs()
                                            .font_weight(gpui::FontWeight::BOLD)
                                            .text_color(table_text)
                                            .child(header),
                                    )
                            })),
                    )
                    .children((0..3).map(|_| {
                        div()
                            .h(px(20.))
                            .w_full()
                            .rounded_sm()
                            .bg(rgb(theme::CARD_BACKGROUND))
                    })),
            )
            .into_any_element()
    }
}
