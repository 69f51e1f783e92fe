//! Building blocks shared by the tab views.

use iced::widget::{column, container, scrollable, text, text_input};
use iced::{Element, Length};

use crate::message::Message;
use crate::style::widgets::{card_style, input_style, palette, scrollable_style};

/// Tab title with a one-line description.
pub fn page_title(title: &str, subtitle: &str) -> Element<'static, Message> {
    let p = palette::current();
    column![
        text(title.to_string()).size(26).color(p.text_primary),
        text(subtitle.to_string()).size(14).color(p.text_secondary),
    ]
    .spacing(4)
    .into()
}

/// Label above an input. Disabled inputs ignore typing.
pub fn labeled_input(
    label: &str,
    value: &str,
    placeholder: &str,
    enabled: bool,
    on_change: impl Fn(String) -> Message + 'static,
) -> Element<'static, Message> {
    let p = palette::current();
    let input = text_input(placeholder, value)
        .on_input_maybe(enabled.then_some(on_change))
        .padding(10)
        .size(14)
        .style(input_style)
        .width(Length::Fill);

    column![text(label.to_string()).size(13).color(p.text_secondary), input]
        .spacing(6)
        .into()
}

/// Card around a section of a tab.
pub fn card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(24)
        .width(Length::Fill)
        .style(card_style)
        .into()
}

/// Scrollable page body with a readable maximum width.
pub fn page<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    let body = container(content)
        .padding(24)
        .max_width(960)
        .width(Length::Fill);

    scrollable(container(body).center_x(Length::Fill))
        .height(Length::Fill)
        .style(scrollable_style)
        .into()
}
