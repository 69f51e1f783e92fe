//! AI generator tab.

use emailpro_core::{EXAMPLE_PROMPTS, GeneratedContent};
use iced::widget::{Column, Space, button, column, container, row, text, text_input};
use iced::{Element, Length};

use crate::message::{GeneratorMessage, Message};
use crate::model::GeneratorState;
use crate::style::widgets::{
    badge_style, chip_button_style, input_style, palette, primary_button_style,
    secondary_button_style, sunken_style,
};
use crate::view::form::{card, page, page_title};

/// Renders the generator tab.
pub fn view_generator(state: &GeneratorState) -> Element<'static, Message> {
    let p = palette::current();

    let prompt = text_input(
        "Describe the email you want, e.g. a welcome email for new customers...",
        &state.prompt,
    )
    .on_input(|s| Message::Generator(GeneratorMessage::PromptChanged(s)))
    .on_submit(Message::Generator(GeneratorMessage::Generate))
    .padding(12)
    .size(15)
    .style(input_style)
    .width(Length::Fill);

    let label = if state.is_generating {
        "Generating..."
    } else {
        "Generate Email"
    };
    let generate_btn = button(text(label).size(14))
        .padding([12, 24])
        .style(primary_button_style)
        .on_press_maybe(
            state
                .can_generate()
                .then_some(Message::Generator(GeneratorMessage::Generate)),
        );

    let examples = EXAMPLE_PROMPTS
        .iter()
        .fold(Column::new().spacing(6), |col, &example| {
            col.push(
                button(text(example).size(13))
                    .padding([6, 14])
                    .style(chip_button_style)
                    .on_press(Message::Generator(GeneratorMessage::ExamplePicked(example))),
            )
        });

    let form = card(
        column![
            page_title(
                "AI Email Generator",
                "Describe the email and get a ready-to-send draft"
            ),
            row![prompt, generate_btn]
                .spacing(12)
                .align_y(iced::Alignment::Center),
            Space::new().height(Length::Fixed(4.0)),
            text("Try an example").size(13).color(p.text_secondary),
            examples,
        ]
        .spacing(12),
    );

    let mut content = column![form].spacing(20);
    if let Some(generated) = &state.generated {
        content = content.push(view_generated(generated));
    }

    page(content)
}

fn view_generated(generated: &GeneratedContent) -> Element<'static, Message> {
    let p = palette::current();

    let meta = row![
        container(text(format!("Tone: {}", generated.tone)).size(12))
            .padding([2, 10])
            .style(badge_style(p.accent_purple)),
        container(text(format!("{} words", generated.word_count)).size(12))
            .padding([2, 10])
            .style(badge_style(p.text_secondary)),
    ]
    .spacing(8);

    let actions = row![
        button(text("Use in Email").size(14))
            .padding([8, 18])
            .style(primary_button_style)
            .on_press(Message::Generator(GeneratorMessage::UseInEmail)),
        button(text("Copy").size(14))
            .padding([8, 18])
            .style(secondary_button_style)
            .on_press(Message::Generator(GeneratorMessage::CopyBody)),
    ]
    .spacing(10);

    card(
        column![
            text("Generated Email").size(18).color(p.text_primary),
            meta,
            text("Subject").size(12).color(p.text_muted),
            text(generated.subject.clone()).size(16).color(p.text_primary),
            text("Message").size(12).color(p.text_muted),
            container(text(generated.message.clone()).size(14).color(p.text_secondary))
                .padding(16)
                .width(Length::Fill)
                .style(sunken_style),
            actions,
        ]
        .spacing(10),
    )
}
