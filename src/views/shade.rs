use iced::widget::text::Shaping;
use iced::widget::{button, column, container, mouse_area, row, scrollable, space, text, Column, Space};
use iced::{Alignment, Element, Length};

use crate::app::{Message, Phone};
use crate::data::{Notification, NOTIFICATIONS};
use crate::gesture;
use crate::icons::icon;
use crate::theme::{self, ThemeColors};

const SCRIM_ALPHA: f32 = 0.4;

impl Phone {
    /// Notification shade pulled down from the top edge.
    ///
    /// The panel is a curtain: its height follows the drag offset and the
    /// content is clipped at the bottom edge.
    pub(crate) fn view_shade(&self) -> Element<'_, Message> {
        let offset = self.state.displayed_shade_offset(self.now);
        let progress = gesture::shade_progress(offset) / 100.0;
        let panel_height = (self.state.viewport_height() * 0.75 * progress).max(0.0);
        let colors = &self.colors;

        let cards = Column::with_children(NOTIFICATIONS.iter().map(|n| notification_card(colors, n)))
            .spacing(8);

        let handle = button(Space::new().width(Length::Fixed(40.0)).height(Length::Fixed(4.0)))
            .padding(0)
            .style(theme::pill_button(colors.muted))
            .on_press(Message::HideNotifications);

        let panel = container(
            column![
                self.view_shade_header(),
                scrollable(cards).height(Length::Fill),
                container(handle).center_x(Length::Fill).padding(8),
            ]
            .spacing(12)
            .padding(16),
        )
        .width(Length::Fill)
        .height(Length::Fixed(panel_height))
        .clip(true)
        .style(colors.shade_style());

        let scrim = mouse_area(
            container(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(theme::scrim_style(SCRIM_ALPHA * progress)),
        )
        .on_press(Message::HideNotifications);

        column![panel, scrim].into()
    }

    fn view_shade_header(&self) -> Element<'_, Message> {
        let colors = &self.colors;
        let clock = self.state.clock();
        let count = format!("Уведомления: {}", NOTIFICATIONS.len());

        column![
            row![
                text(clock.time_label()).size(colors.title_text * 1.6).color(colors.text),
                space::horizontal(),
                icon("Bell", 20.0, colors.text),
            ]
            .align_y(Alignment::Center),
            text(clock.short_date_label())
                .size(colors.body_text)
                .color(colors.muted)
                .shaping(Shaping::Advanced),
            text(count)
                .size(colors.caption_text)
                .color(colors.muted)
                .shaping(Shaping::Advanced),
        ]
        .spacing(4)
        .into()
    }
}

fn notification_card<'a>(colors: &ThemeColors, notification: &'static Notification) -> Element<'a, Message> {
    let shaped = Shaping::Advanced;

    let badge = container(icon(notification.icon, 16.0, theme::ON_WALLPAPER))
        .center(32.0)
        .style(theme::tile_style(notification.accent(), 8.0));

    let heading = row![
        text(notification.app)
            .size(colors.caption_text)
            .color(colors.muted)
            .shaping(shaped),
        space::horizontal(),
        text(notification.time)
            .size(colors.caption_text)
            .color(colors.muted)
            .shaping(shaped),
    ];

    let body = column![
        heading,
        text(notification.title)
            .size(colors.body_text)
            .color(colors.text)
            .shaping(shaped),
        text(notification.message)
            .size(colors.caption_text * 1.1)
            .color(colors.muted)
            .shaping(shaped),
    ]
    .spacing(2)
    .width(Length::Fill);

    container(row![badge, body].spacing(12).align_y(Alignment::Start))
        .padding(12)
        .width(Length::Fill)
        .style(colors.card_style())
        .into()
}
