//! Email verification tab.

use emailpro_core::{ScoreBand, VerificationReport};
use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Color, Element, Length};

use crate::message::{Message, VerifyMessage};
use crate::model::VerifyState;
use crate::style::widgets::{badge_style, input_style, palette, primary_button_style, sunken_style};
use crate::view::form::{card, page, page_title};

/// Renders the verification tab.
pub fn view_verify(state: &VerifyState) -> Element<'static, Message> {
    let input = text_input("Enter email address to verify...", &state.email)
        .on_input(|s| Message::Verify(VerifyMessage::EmailChanged(s)))
        .on_submit(Message::Verify(VerifyMessage::Submit))
        .padding(12)
        .size(15)
        .style(input_style)
        .width(Length::Fill);

    let label = if state.is_verifying { "Verifying..." } else { "Verify" };
    let verify_btn = button(text(label).size(14))
        .padding([12, 24])
        .style(primary_button_style)
        .on_press_maybe(state.can_submit().then_some(Message::Verify(VerifyMessage::Submit)));

    let form = card(
        column![
            page_title(
                "Email Verification",
                "Check deliverability, MX records and mailbox quality before you send"
            ),
            Space::new().height(Length::Fixed(8.0)),
            row![input, verify_btn]
                .spacing(12)
                .align_y(iced::Alignment::Center),
        ]
        .spacing(12),
    );

    let mut content = column![form].spacing(20);
    if let Some(report) = &state.report {
        content = content.push(view_report(report));
    }

    page(content)
}

fn view_report(report: &VerificationReport) -> Element<'static, Message> {
    let p = palette::current();
    let verdict_color = if report.is_valid {
        p.accent_green
    } else {
        p.accent_red
    };
    let score_color = match report.band() {
        ScoreBand::Good => p.accent_green,
        ScoreBand::Fair => p.accent_yellow,
        ScoreBand::Poor => p.accent_red,
    };

    let checked_at = report
        .checked_at
        .with_timezone(&chrono::Local)
        .format("%H:%M:%S")
        .to_string();

    let headline = row![
        column![
            text(report.summary()).size(20).color(verdict_color),
            text(report.email.clone()).size(14).color(p.text_secondary),
        ]
        .spacing(4),
        Space::new().width(Length::Fill),
        column![
            text(format!("{:.0}", report.score)).size(32).color(score_color),
            text("Quality score").size(12).color(p.text_muted),
        ]
        .align_x(iced::Alignment::End),
    ]
    .align_y(iced::Alignment::Center);

    let checks = row![
        check("MX Records", report.mx_records, true),
        check("SMTP Check", report.smtp_check, true),
        check("Disposable", report.is_disposable, false),
        check("Webmail", report.is_webmail, true),
    ]
    .spacing(12);

    let (advice, advice_color) = if report.safe_to_send {
        ("Safe to send", p.accent_green)
    } else {
        ("Not recommended to send", p.accent_red)
    };

    card(
        column![
            headline,
            checks,
            row![
                container(text(advice).size(13))
                    .padding([4, 12])
                    .style(badge_style(advice_color)),
                Space::new().width(Length::Fill),
                text(format!("Checked at {checked_at}"))
                    .size(12)
                    .color(p.text_muted),
            ]
            .align_y(iced::Alignment::Center),
        ]
        .spacing(20),
    )
}

/// One check tile. `good_when` is the value that counts as a pass.
fn check(label: &str, value: bool, good_when: bool) -> Element<'static, Message> {
    let p = palette::current();
    let color: Color = if value == good_when {
        p.accent_green
    } else {
        p.accent_red
    };

    container(
        column![
            text(label.to_string()).size(12).color(p.text_secondary),
            text(if value { "Yes" } else { "No" }).size(16).color(color),
        ]
        .spacing(4),
    )
    .padding(12)
    .width(Length::Fill)
    .style(sunken_style)
    .into()
}
