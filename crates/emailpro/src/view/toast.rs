//! Toast stack rendered in the bottom-right corner.

use iced::widget::{Column, Space, button, column, container, row, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::model::{ToastKind, Toasts};
use crate::style::widgets::{ghost_button_style, palette, toast_style};

/// Renders every visible toast, newest at the bottom.
pub fn view_toasts(toasts: &Toasts) -> Element<'static, Message> {
    let p = palette::current();

    let stack = toasts.iter().fold(Column::new().spacing(8), |col, toast| {
        let accent = match toast.kind {
            ToastKind::Success => p.accent_green,
            ToastKind::Error => p.accent_red,
        };

        col.push(
            container(
                row![
                    column![
                        text(toast.title.clone()).size(14).color(accent),
                        text(toast.description.clone())
                            .size(13)
                            .color(p.text_secondary),
                    ]
                    .spacing(2)
                    .width(Length::Fill),
                    button(text("\u{2715}").size(12).color(p.text_muted))
                        .padding([2, 6])
                        .style(ghost_button_style)
                        .on_press(Message::DismissToast(toast.id)),
                ]
                .spacing(8),
            )
            .padding(12)
            .width(Length::Fixed(340.0))
            .style(toast_style(accent)),
        )
    });

    container(column![Space::new().height(Length::Fill), stack])
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
        .align_right(Length::Fill)
        .into()
}
