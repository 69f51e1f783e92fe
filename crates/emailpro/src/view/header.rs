//! Header with branding, tabs and the theme toggle.

use iced::widget::{Space, button, container, row, text};
use iced::{Element, Length};

use crate::message::{Message, Tab};
use crate::style::widgets::{
    ghost_button_style, header_style, palette, palette::ThemeMode, tab_button_style,
};

/// Renders the application header.
pub fn view_header(active: Tab, theme_mode: ThemeMode) -> Element<'static, Message> {
    let p = palette::current();

    let title = text("EmailPro")
        .size(22)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .color(p.primary);

    let tabs = Tab::ALL.iter().fold(row![].spacing(6), |tabs, &tab| {
        tabs.push(
            button(text(tab.label()).size(14))
                .padding([8, 16])
                .style(tab_button_style(tab == active))
                .on_press(Message::TabSelected(tab)),
        )
    });

    let theme_icon = match theme_mode {
        ThemeMode::Light => "\u{263E}", // moon
        ThemeMode::Dark => "\u{2600}",  // sun
    };
    let theme_btn = button(text(theme_icon).size(18).color(p.text_secondary))
        .padding([6, 12])
        .style(ghost_button_style)
        .on_press(Message::ToggleTheme);

    let content = row![
        title,
        Space::new().width(Length::Fixed(24.0)),
        tabs,
        Space::new().width(Length::Fill),
        theme_btn,
    ]
    .spacing(12)
    .padding([12, 20])
    .align_y(iced::Alignment::Center);

    container(content)
        .width(Length::Fill)
        .style(header_style)
        .into()
}
