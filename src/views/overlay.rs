use iced::widget::text::Shaping;
use iced::widget::{button, column, container, row, scrollable, space, stack, text, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::app::{Message, Phone};
use crate::data::{AppItem, Chat, ChatMessage, CHATS, THREAD};
use crate::icons::icon;
use crate::state::Overlay;
use crate::theme::{self, ThemeColors};

/// How far the exit animation slides the overlay, as a share of the viewport.
const EXIT_SLIDE: f32 = 0.35;
const AVATAR_SIZE: f32 = 48.0;
const BUBBLE_MAX_WIDTH: f32 = 260.0;

impl Phone {
    /// The opened app, positioned and faded by the current drag or exit.
    pub(crate) fn view_overlay(&self) -> Element<'_, Message> {
        let visual = self.state.overlay_visual(self.now);
        let exit = visual.closing.unwrap_or(0.0);
        let height = self.viewport.height;
        let width = self.viewport.width;

        let opacity = visual.opacity * (1.0 - exit);
        // Scale around the centre: shrink and inset by half the lost size.
        let inset_x = width * (1.0 - visual.scale) / 2.0;
        let inset_y = height * (1.0 - visual.scale) / 2.0;
        let top = visual.offset + inset_y + exit * height * EXIT_SLIDE;

        let screen = match self.state.overlay() {
            Overlay::Home => return Space::new().into(),
            Overlay::App(app) => self.view_app_screen(app),
            Overlay::ChatList => self.view_chat_list(),
            Overlay::ChatThread(chat) => self.view_chat_thread(chat),
        };

        let body = column![screen, self.view_nav_bar()]
            .width(Length::Fill)
            .height(Length::Fill);

        let surface = container(body)
            .width(Length::Fill)
            .height(Length::Fixed(height * visual.scale))
            .clip(true)
            .style(self.colors.surface_style(opacity));

        let placed = column![
            Space::new().height(Length::Fixed(top)),
            row![
                Space::new().width(Length::Fixed(inset_x)),
                surface,
                Space::new().width(Length::Fixed(inset_x)),
            ],
        ];

        container(placed)
            .width(Length::Fill)
            .height(Length::Fill)
            .clip(true)
            .style(theme::scrim_style(0.3 * opacity))
            .into()
    }

    fn view_app_screen(&self, app: &'static AppItem) -> Element<'_, Message> {
        let colors = &self.colors;
        let shaped = Shaping::Advanced;

        let header = row![
            app_badge(app, 36.0, 10.0),
            text(app.name)
                .size(colors.title_text)
                .color(colors.text)
                .shaping(shaped),
            space::horizontal(),
            close_button(colors),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let content = column![
            app_badge(app, 96.0, 28.0),
            text(app.name)
                .size(colors.title_text * 1.3)
                .color(colors.text)
                .shaping(shaped),
            text("Приложение открыто")
                .size(colors.body_text)
                .color(colors.muted)
                .shaping(shaped),
            text("Проведите вниз, чтобы закрыть")
                .size(colors.caption_text)
                .color(colors.muted)
                .shaping(shaped),
        ]
        .spacing(12)
        .align_x(Alignment::Center);

        column![
            container(header).padding(16).style(colors.header_style()),
            container(content).center(Length::Fill),
        ]
        .height(Length::Fill)
        .into()
    }

    fn view_chat_list(&self) -> Element<'_, Message> {
        let colors = &self.colors;

        let header = row![
            text("Сообщения")
                .size(colors.title_text)
                .color(colors.text)
                .shaping(Shaping::Advanced),
            space::horizontal(),
            icon("Search", 18.0, colors.muted),
            close_button(colors),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let rows = Column::with_children(CHATS.iter().map(|chat| chat_row(colors, chat)))
            .spacing(2);

        column![
            container(header).padding(16).style(colors.header_style()),
            scrollable(rows).height(Length::Fill),
        ]
        .height(Length::Fill)
        .into()
    }

    fn view_chat_thread(&self, chat: &'static Chat) -> Element<'_, Message> {
        let colors = &self.colors;
        let shaped = Shaping::Advanced;

        let back = button(icon("ArrowLeft", 22.0, colors.text))
            .style(theme::bare_button)
            .on_press(Message::BackToChats);

        let presence = if chat.online { "в сети" } else { "был(а) недавно" };
        let header = row![
            back,
            avatar(colors, chat, 36.0),
            column![
                text(chat.name)
                    .size(colors.body_text)
                    .color(colors.text)
                    .shaping(shaped),
                text(presence)
                    .size(colors.caption_text)
                    .color(if chat.online { colors.online } else { colors.muted })
                    .shaping(shaped),
            ],
            space::horizontal(),
            close_button(colors),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let bubbles = Column::with_children(THREAD.iter().map(|m| bubble(colors, m)))
            .spacing(8)
            .padding(16);

        let composer = container(
            text("Сообщение…")
                .size(colors.body_text)
                .color(colors.muted)
                .shaping(shaped),
        )
        .padding([10, 16])
        .width(Length::Fill)
        .style(colors.card_style());

        column![
            container(header).padding(12).style(colors.header_style()),
            scrollable(bubbles).height(Length::Fill),
            container(composer).padding(12),
        ]
        .height(Length::Fill)
        .into()
    }

    /// Home pill. The dock sits under the overlay, so this is the in-app
    /// Home control.
    fn view_nav_bar(&self) -> Element<'_, Message> {
        let pill = button(Space::new().width(Length::Fixed(120.0)).height(Length::Fixed(5.0)))
            .padding(0)
            .style(theme::pill_button(self.colors.muted))
            .on_press(Message::Home);

        container(pill)
            .center_x(Length::Fill)
            .padding(Padding::ZERO.top(8).bottom(12))
            .into()
    }
}

fn close_button<'a>(colors: &ThemeColors) -> Element<'a, Message> {
    button(icon("X", 20.0, colors.text))
        .style(theme::bare_button)
        .on_press(Message::CloseApp)
        .into()
}

fn app_badge<'a>(app: &'static AppItem, size: f32, radius: f32) -> Element<'a, Message> {
    container(icon(app.icon, size * 0.5, theme::ON_WALLPAPER))
        .center(size)
        .style(theme::tile_style(app.accent(), radius))
        .into()
}

fn avatar<'a>(colors: &ThemeColors, chat: &'static Chat, size: f32) -> Element<'a, Message> {
    let face = container(text(chat.avatar).size(size * 0.55).shaping(Shaping::Advanced))
        .center(size)
        .style(theme::tile_style(colors.bubble_theirs, size / 2.0));

    if !chat.online {
        return face.into();
    }

    let dot_size = size * 0.28;
    let dot = container(Space::new())
        .width(dot_size)
        .height(dot_size)
        .style(theme::tile_style(colors.online, dot_size / 2.0));
    stack![
        face,
        container(dot)
            .width(size)
            .height(size)
            .align_right(size)
            .align_bottom(size),
    ]
    .into()
}

fn bubble<'a>(colors: &ThemeColors, message: &'static ChatMessage) -> Element<'a, Message> {
    let stamp_color = if message.mine {
        theme::fade(colors.on_accent, 0.7)
    } else {
        colors.muted
    };
    let body = container(
        column![
            text(message.text)
                .size(colors.body_text)
                .shaping(Shaping::Advanced),
            text(message.time)
                .size(colors.caption_text * 0.9)
                .color(stamp_color),
        ]
        .spacing(2),
    )
    .padding([8, 12])
    .max_width(BUBBLE_MAX_WIDTH)
    .style(colors.bubble_style(message.mine));

    if message.mine {
        row![space::horizontal(), body].into()
    } else {
        row![body, space::horizontal()].into()
    }
}

fn chat_row<'a>(colors: &ThemeColors, chat: &'static Chat) -> Element<'a, Message> {
    let shaped = Shaping::Advanced;

    let mut meta = column![text(chat.time).size(colors.caption_text).color(colors.muted)]
        .spacing(6)
        .align_x(Alignment::End);
    if chat.unread > 0 {
        meta = meta.push(
            container(
                text(chat.unread.to_string())
                    .size(colors.caption_text)
                    .color(colors.on_accent),
            )
            .padding([1, 7])
            .style(theme::tile_style(colors.badge, 10.0)),
        );
    }

    let line = row![
        avatar(colors, chat, AVATAR_SIZE),
        column![
            text(chat.name)
                .size(colors.body_text)
                .color(colors.text)
                .shaping(shaped),
            text(chat.preview)
                .size(colors.caption_text * 1.1)
                .color(colors.muted)
                .shaping(shaped),
        ]
        .spacing(4)
        .width(Length::Fill),
        meta,
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    button(line)
        .padding([10, 16])
        .width(Length::Fill)
        .style(theme::bare_button)
        .on_press(Message::SelectChat(chat))
        .into()
}
