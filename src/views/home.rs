use iced::widget::text::Shaping;
use iced::widget::{button, column, container, row, space, text, Column, Row};
use iced::{Alignment, Element, Length};

use crate::app::{Message, Phone};
use crate::data::{AppItem, APPS};
use crate::icons::icon;
use crate::theme::{self, ON_WALLPAPER};

const GRID_COLUMNS: usize = 3;
const APP_TILE_SIZE: f32 = 64.0;
const SCREEN_PADDING: u16 = 24;

impl Phone {
    pub(crate) fn view_home(&self) -> Element<'_, Message> {
        let content = column![
            self.view_status_bar(),
            self.view_widgets(),
            view_app_grid(),
            space::vertical(),
            view_dock(),
        ]
        .spacing(24)
        .width(Length::Fill)
        .height(Length::Fill);

        container(content)
            .padding(SCREEN_PADDING)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::wallpaper_style)
            .into()
    }

    fn view_status_bar(&self) -> Element<'_, Message> {
        let clock = self.state.clock();
        row![
            text(clock.time_label()).size(14).color(ON_WALLPAPER),
            space::horizontal(),
            icon("Signal", 14.0, ON_WALLPAPER),
            icon("Wifi", 14.0, ON_WALLPAPER),
            icon("Battery", 14.0, ON_WALLPAPER),
            text("85%").size(12).color(ON_WALLPAPER),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
    }

    fn view_widgets(&self) -> Element<'_, Message> {
        let clock = self.state.clock();
        let shaped = Shaping::Advanced;

        let weather = container(
            column![
                row![
                    icon("CloudSun", 28.0, ON_WALLPAPER),
                    text("+18°").size(28).color(ON_WALLPAPER).shaping(shaped),
                ]
                .spacing(8)
                .align_y(Alignment::Center),
                text("Москва").size(14).color(ON_WALLPAPER).shaping(shaped),
                text("Переменная облачность")
                    .size(12)
                    .color(theme::fade(ON_WALLPAPER, 0.8))
                    .shaping(shaped),
            ]
            .spacing(4),
        )
        .padding(16)
        .width(Length::FillPortion(1))
        .style(theme::tile_style(theme::GLASS, 20.0));

        let calendar = container(
            column![
                text(clock.weekday_label())
                    .size(14)
                    .color(theme::fade(ON_WALLPAPER, 0.8))
                    .shaping(shaped),
                text(clock.date_label()).size(22).color(ON_WALLPAPER).shaping(shaped),
                text(clock.time_label()).size(12).color(theme::fade(ON_WALLPAPER, 0.8)),
            ]
            .spacing(4),
        )
        .padding(16)
        .width(Length::FillPortion(1))
        .style(theme::tile_style(theme::GLASS, 20.0));

        row![weather, calendar].spacing(12).into()
    }
}

fn view_app_grid<'a>() -> Element<'a, Message> {
    let rows = APPS.chunks(GRID_COLUMNS).map(|chunk| -> Element<'a, Message> {
        let mut grid_row = Row::new().spacing(12).width(Length::Fill);
        for app in chunk {
            grid_row = grid_row.push(view_app_tile(app));
        }
        // Pad the last row so tiles keep their column width.
        for _ in chunk.len()..GRID_COLUMNS {
            grid_row = grid_row.push(space::horizontal());
        }
        grid_row.into()
    });
    Column::with_children(rows).spacing(20).into()
}

fn view_app_tile<'a>(app: &'static AppItem) -> Element<'a, Message> {
    let tile = container(icon(app.icon, 32.0, ON_WALLPAPER))
        .center(APP_TILE_SIZE)
        .style(theme::tile_style(app.accent(), 16.0));

    let label = text(app.name)
        .size(13)
        .color(ON_WALLPAPER)
        .shaping(Shaping::Advanced);

    button(
        column![tile, label]
            .spacing(8)
            .align_x(Alignment::Center)
            .width(Length::Fill),
    )
    .style(theme::bare_button)
    .width(Length::Fill)
    .on_press(Message::OpenApp(app))
    .into()
}

fn view_dock<'a>() -> Element<'a, Message> {
    let dock_button = |name: &str, message: Option<Message>| {
        button(
            container(icon(name, 22.0, ON_WALLPAPER)).center(48.0),
        )
        .padding(0)
        .style(theme::glass_button)
        .on_press_maybe(message)
    };

    container(
        row![
            dock_button("Grid3x3", None),
            dock_button("Home", Some(Message::Home)),
            dock_button("Clock", None),
        ]
        .spacing(40)
        .align_y(Alignment::Center),
    )
    .center_x(Length::Fill)
    .padding(8)
    .style(theme::tile_style(theme::GLASS, 32.0))
    .into()
}
