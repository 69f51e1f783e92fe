//! Template browser tab: folder tree on the left, preview on the right.

use emailpro_core::TemplateFolder;
use iced::widget::{Column, Row, Space, button, column, container, row, scrollable, text};
use iced::{Element, Length};

use crate::message::{Message, TemplatesMessage};
use crate::model::{BrowserState, preview_body};
use crate::style::widgets::{
    badge_style, card_style, ghost_button_style, palette, primary_button_style, scrollable_style,
    secondary_button_style, sunken_style, tree_row_style,
};
use crate::view::form::page_title;

/// Indentation per tree level.
const INDENT: f32 = 16.0;

/// Renders the template browser.
pub fn view_templates(state: &BrowserState) -> Element<'static, Message> {
    let p = palette::current();

    let refresh_btn = button(text("\u{21BB} Refresh").size(13))
        .padding([6, 12])
        .style(secondary_button_style)
        .on_press_maybe(
            (!state.is_loading).then_some(Message::Templates(TemplatesMessage::Refresh)),
        );

    let heading = row![
        page_title(
            "Email Templates",
            "Browse the template library and hand a template to Send Email"
        ),
        Space::new().width(Length::Fill),
        refresh_btn,
    ]
    .align_y(iced::Alignment::Center);

    let tree: Element<'static, Message> = if state.is_loading {
        text("Loading templates...").size(14).color(p.text_muted).into()
    } else if state.folders.is_empty() {
        text("No templates found").size(14).color(p.text_muted).into()
    } else {
        let rows = state
            .folders
            .iter()
            .fold(Column::new().spacing(2), |col, folder| {
                push_folder(col, folder, state, 0)
            });
        column![
            text(format!("{} templates", state.total_files()))
                .size(12)
                .color(p.text_muted),
            rows,
        ]
        .spacing(8)
        .into()
    };

    let tree_panel = container(scrollable(tree).style(scrollable_style))
        .padding(16)
        .width(Length::FillPortion(2))
        .height(Length::Fill)
        .style(card_style);

    let preview_panel = container(view_preview(state))
        .padding(20)
        .width(Length::FillPortion(3))
        .height(Length::Fill)
        .style(card_style);

    column![
        heading,
        row![tree_panel, preview_panel]
            .spacing(16)
            .height(Length::Fill),
    ]
    .spacing(20)
    .padding(24)
    .height(Length::Fill)
    .into()
}

/// Appends a folder row and, when open, its files and subfolders.
fn push_folder(
    col: Column<'static, Message>,
    folder: &TemplateFolder,
    state: &BrowserState,
    depth: u16,
) -> Column<'static, Message> {
    let p = palette::current();
    let open = state.is_expanded(&folder.path);
    let indent = Space::new().width(Length::Fixed(INDENT * f32::from(depth)));

    let folder_row = button(
        row![
            indent,
            text(if open { "\u{25BE}" } else { "\u{25B8}" })
                .size(12)
                .color(p.text_muted),
            text(folder.name.clone()).size(14),
            Space::new().width(Length::Fill),
            container(text(folder.total_files().to_string()).size(11))
                .padding([1, 8])
                .style(badge_style(p.text_secondary)),
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center),
    )
    .padding([6, 8])
    .width(Length::Fill)
    .style(ghost_button_style)
    .on_press(Message::Templates(TemplatesMessage::ToggleFolder(
        folder.path.clone(),
    )));

    let mut col = col.push(folder_row);
    if !open {
        return col;
    }

    for filename in &folder.files {
        let selected = state.selected.as_deref() == Some(filename.as_str());
        col = col.push(
            button(
                row![
                    Space::new().width(Length::Fixed(INDENT * f32::from(depth + 1) + 12.0)),
                    text(filename.clone()).size(13),
                ]
                .align_y(iced::Alignment::Center),
            )
            .padding([5, 8])
            .width(Length::Fill)
            .style(tree_row_style(selected))
            .on_press(Message::Templates(TemplatesMessage::SelectFile(
                filename.clone(),
            ))),
        );
    }

    folder
        .children
        .iter()
        .fold(col, |col, child| push_folder(col, child, state, depth + 1))
}

fn view_preview(state: &BrowserState) -> Element<'static, Message> {
    let p = palette::current();

    let Some(content) = &state.preview else {
        let hint = if state.is_loading_preview {
            "Loading template..."
        } else {
            "Select a template to preview it"
        };
        return container(text(hint).size(14).color(p.text_muted))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    };

    let placeholders = content
        .placeholders()
        .fold(Row::<'static, Message>::new().spacing(6), |row, placeholder| {
            row.push(
                container(text(placeholder).size(12))
                    .padding([2, 10])
                    .style(badge_style(p.accent_purple)),
            )
        });

    let actions = row![
        button(text("Use Template").size(14))
            .padding([8, 18])
            .style(primary_button_style)
            .on_press(Message::Templates(TemplatesMessage::UseTemplate)),
        button(text("Copy").size(14))
            .padding([8, 18])
            .style(secondary_button_style)
            .on_press(Message::Templates(TemplatesMessage::CopyBody)),
    ]
    .spacing(10);

    let mut details = column![
        text(content.filename.clone()).size(12).color(p.text_muted),
        text(content.subject.clone()).size(20).color(p.text_primary),
    ]
    .spacing(6);
    if !content.variables.is_empty() {
        details = details.push(placeholders);
    }

    let body = container(
        scrollable(
            container(text(preview_body(content)).size(14).color(p.text_secondary))
                .padding(16)
                .width(Length::Fill),
        )
        .style(scrollable_style),
    )
    .height(Length::Fill)
    .width(Length::Fill)
    .style(sunken_style);

    column![details, body, actions]
        .spacing(16)
        .height(Length::Fill)
        .into()
}
