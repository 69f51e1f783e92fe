//! Send Email tab.

use iced::widget::{
    Space, button, column, container, pick_list, row, text, text_editor, text_input, toggler,
};
use iced::{Element, Length};

use crate::message::{ComposeMessage, Message};
use crate::model::ComposeState;
use crate::style::widgets::{
    badge_style, ghost_button_style, input_style, palette, primary_button_style,
    secondary_button_style, sunken_style,
};
use crate::view::form::{card, labeled_input, page, page_title};

/// Renders the compose tab.
pub fn view_compose(state: &ComposeState) -> Element<'_, Message> {
    let p = palette::current();
    let draft = &state.draft;
    let editable = !state.is_sending;

    let mut form = column![
        page_title(
            "Send Email",
            "Compose a message, optionally from a template"
        ),
        view_template_picker(state),
    ]
    .spacing(16);

    if let Some(provenance) = state.provenance() {
        form = form.push(
            container(text(provenance.to_string()).size(12))
                .padding([4, 12])
                .style(badge_style(p.accent_purple)),
        );
    }

    form = form
        .push(labeled_input(
            "To",
            &draft.to,
            "recipient@example.com",
            editable,
            |s| Message::Compose(ComposeMessage::ToChanged(s)),
        ))
        .push(labeled_input(
            "Subject",
            &draft.subject,
            "Email subject",
            editable,
            |s| Message::Compose(ComposeMessage::SubjectChanged(s)),
        ))
        .push(view_body(state, editable));

    if !draft.variables.is_empty() {
        form = form.push(view_variables(state));
    }

    let gmail_toggle = toggler(draft.send_via_gmail)
        .label("Send via Gmail (prefilled compose)")
        .on_toggle_maybe(editable.then_some(|on| Message::Compose(ComposeMessage::GmailToggled(on))))
        .text_size(14)
        .width(Length::Shrink);

    let send_label = if state.is_sending {
        "Sending..."
    } else if draft.send_via_gmail {
        "Prepare Gmail Draft"
    } else {
        "Send Email"
    };
    let send_btn = button(text(send_label).size(14))
        .padding([10, 24])
        .style(primary_button_style)
        .on_press_maybe(
            (!state.is_sending && !state.is_loading_template())
                .then_some(Message::Compose(ComposeMessage::Send)),
        );

    form = form
        .push(gmail_toggle)
        .push(row![send_btn, text("Ctrl+Enter").size(12).color(p.text_muted)]
            .spacing(12)
            .align_y(iced::Alignment::Center));

    let mut content = column![card(form)].spacing(20);
    if let Some(url) = &state.gmail_url {
        content = content.push(view_gmail_link(url));
    }

    page(content)
}

/// Multi-line body editor. Read-only while a send is in flight.
fn view_body(state: &ComposeState, editable: bool) -> Element<'_, Message> {
    let p = palette::current();
    let mut editor = text_editor(&state.body)
        .placeholder("Write your message here...")
        .height(Length::Fixed(200.0))
        .padding(10)
        .size(14);
    if editable {
        editor = editor.on_action(|action| Message::Compose(ComposeMessage::BodyEdited(action)));
    }

    column![text("Message").size(13).color(p.text_secondary), editor]
        .spacing(6)
        .into()
}

fn view_template_picker(state: &ComposeState) -> Element<'static, Message> {
    let p = palette::current();
    let enabled = state.can_pick_template();

    let placeholder = if state.is_loading_templates {
        "Loading templates..."
    } else {
        "Choose a template"
    };
    let picker = pick_list(
        state.choices(),
        Some(state.selected_choice()),
        |choice| Message::Compose(ComposeMessage::TemplatePicked(choice)),
    )
    .placeholder(placeholder)
    .padding(10)
    .width(Length::Fill);

    // pick_list cannot be disabled.
    let picker: Element<'static, Message> = if enabled {
        picker.into()
    } else {
        container(
            text(if state.is_loading_template() {
                "Loading template...".to_string()
            } else {
                state.selected_choice().to_string()
            })
            .size(14)
            .color(p.text_muted),
        )
        .padding(10)
        .width(Length::Fill)
        .style(sunken_style)
        .into()
    };

    let clear_btn = button(text("Clear").size(13))
        .padding([8, 14])
        .style(secondary_button_style)
        .on_press_maybe(
            (enabled && state.draft.is_template_selected())
                .then_some(Message::Compose(ComposeMessage::ClearTemplate)),
        );
    let refresh_btn = button(text("\u{21BB}").size(16).color(p.text_secondary))
        .padding([6, 12])
        .style(ghost_button_style)
        .on_press_maybe(enabled.then_some(Message::Compose(ComposeMessage::RefreshCatalog)));

    column![
        text("Template").size(13).color(p.text_secondary),
        row![picker, clear_btn, refresh_btn]
            .spacing(8)
            .align_y(iced::Alignment::Center),
    ]
    .spacing(6)
    .into()
}

fn view_variables(state: &ComposeState) -> Element<'static, Message> {
    let p = palette::current();

    let inputs = state
        .draft
        .variables
        .iter()
        .fold(column![].spacing(8), |col, (name, value)| {
            let key = name.to_string();
            col.push(
                row![
                    text(format!("{{{{{name}}}}}"))
                        .size(13)
                        .color(p.text_secondary)
                        .width(Length::Fixed(160.0)),
                    text_input(&format!("Value for {name}"), value)
                        .on_input(move |v| {
                            Message::Compose(ComposeMessage::VariableChanged(key.clone(), v))
                        })
                        .padding(8)
                        .size(14)
                        .style(input_style)
                        .width(Length::Fill),
                ]
                .spacing(12)
                .align_y(iced::Alignment::Center),
            )
        });

    container(
        column![
            text("Template Variables").size(14).color(p.text_primary),
            inputs
        ]
        .spacing(10),
    )
    .padding(16)
    .width(Length::Fill)
    .style(sunken_style)
    .into()
}

fn view_gmail_link(url: &str) -> Element<'static, Message> {
    let p = palette::current();
    card(
        row![
            column![
                text("Your Gmail draft is ready").size(16).color(p.text_primary),
                text(url.to_string()).size(12).color(p.text_muted),
            ]
            .spacing(4)
            .width(Length::Fill),
            button(text("Open in Gmail").size(14))
                .padding([10, 20])
                .style(primary_button_style)
                .on_press(Message::Compose(ComposeMessage::OpenGmail)),
        ]
        .spacing(16)
        .align_y(iced::Alignment::Center),
    )
}

