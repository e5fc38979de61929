use std::time::Instant;

use chrono::Local;
use iced::widget::{opaque, Stack};
use iced::{event, Element, Length, Point, Size, Subscription, Task, Theme};

use crate::config::Config;
use crate::data::{AppItem, Chat};
use crate::input;
use crate::state::{Effect, PhoneState, TimerToken};
use crate::theme::{self, ThemeColors};
use crate::timers;

// --- Phone State ---

pub(crate) struct Phone {
    pub(crate) state: PhoneState,
    pub(crate) config: Config,
    pub(crate) colors: ThemeColors,
    pub(crate) viewport: Size,
    /// Last known pointer position; mouse presses start here.
    pub(crate) cursor: Point,
    /// Instant the current update/render pass samples animations at.
    pub(crate) now: Instant,
}

#[derive(Debug, Clone)]
pub(crate) enum Message {
    Tick,
    Frame,
    OpenApp(&'static AppItem),
    CloseApp,
    Home,
    SelectChat(&'static Chat),
    BackToChats,
    HideNotifications,
    PointerDown(Option<Point>),
    PointerMoved(Point),
    PointerUp,
    Resized(Size),
    CloseElapsed(TimerToken),
    ShadeHideElapsed(TimerToken),
}

pub(crate) fn run(config: Config) -> iced::Result {
    tracing::info!(
        version = env!("POCKET_HOME_VERSION"),
        commit = env!("POCKET_HOME_COMMIT"),
        "pocket-home starting"
    );

    let window_size = Size::new(config.window.width, config.window.height);
    iced::application(move || Phone::new(config), Phone::update, Phone::view)
        .title("Pocket Home")
        .subscription(Phone::subscription)
        .theme(Phone::theme)
        .window_size(window_size)
        .run()
}

impl Phone {
    fn new(config: Config) -> (Self, Task<Message>) {
        let colors = theme::resolve(config.theme);
        let viewport = Size::new(config.window.width, config.window.height);
        let state = PhoneState::new(
            config.gestures,
            config.timing.close_delay(),
            config.timing.snap(),
            Local::now().naive_local(),
            viewport.height,
        );
        tracing::info!(
            theme = ?config.theme,
            dark = colors.is_dark,
            width = viewport.width,
            height = viewport.height,
            "booting -> home"
        );
        (
            Self {
                state,
                config,
                colors,
                viewport,
                cursor: Point::ORIGIN,
                now: Instant::now(),
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = Instant::now();
        match message {
            Message::Tick => {
                self.state.tick(Local::now().naive_local());
                Task::none()
            }
            // Only refreshes `now`; the view samples animations from it.
            Message::Frame => Task::none(),
            Message::OpenApp(app) => {
                self.state.open_app(app);
                Task::none()
            }
            Message::CloseApp | Message::Home => {
                let effect = self.state.close_app(self.now);
                self.schedule(effect)
            }
            Message::SelectChat(chat) => {
                self.state.select_chat(chat);
                Task::none()
            }
            Message::BackToChats => {
                self.state.back_to_chats();
                Task::none()
            }
            Message::HideNotifications => {
                let effect = self.state.hide_notifications(self.now);
                self.schedule(effect)
            }
            Message::PointerDown(at) => {
                let at = at.unwrap_or(self.cursor);
                self.cursor = at;
                self.state.touch_start(at);
                Task::none()
            }
            Message::PointerMoved(at) => {
                self.cursor = at;
                if self.state.is_dragging() {
                    self.state.touch_move(at);
                }
                Task::none()
            }
            Message::PointerUp => {
                let effect = self.state.touch_end(self.now);
                self.schedule(effect)
            }
            Message::Resized(size) => {
                self.viewport = size;
                self.state.set_viewport_height(size.height);
                tracing::debug!(width = size.width, height = size.height, "viewport resized");
                Task::none()
            }
            Message::CloseElapsed(token) => {
                self.state.close_elapsed(token);
                Task::none()
            }
            Message::ShadeHideElapsed(token) => {
                self.state.shade_hide_elapsed(token);
                Task::none()
            }
        }
    }

    fn schedule(&self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::CloseAfterDelay(token) => Task::perform(
                timers::delay(self.state.close_delay()),
                move |()| Message::CloseElapsed(token),
            ),
            Effect::HideShadeAfterDelay(token) => Task::perform(
                timers::delay(self.config.timing.snap()),
                move |()| Message::ShadeHideElapsed(token),
            ),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(self.view_home());

        // Upper layers swallow presses so the home grid underneath stays inert.
        if self.state.opened_app().is_some() {
            layers = layers.push(opaque(self.view_overlay()));
        }
        if self.state.notifications_visible() {
            layers = layers.push(opaque(self.view_shade()));
        }
        layers.into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subs = vec![
            Subscription::run_with(self.config.timing.clock_tick_ms, timers::clock_stream),
            event::listen_with(input::input_event),
        ];

        if self.state.is_animating(self.now) {
            subs.push(Subscription::run_with(
                self.config.timing.frame_ms,
                timers::frame_stream,
            ));
        }

        Subscription::batch(subs)
    }

    fn theme(&self) -> Theme {
        if self.colors.is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::APPS;

    #[test]
    fn home_closes_open_app() {
        let (mut phone, _) = Phone::new(Config::default());
        let _ = phone.update(Message::OpenApp(&APPS[0]));
        assert!(phone.state.opened_app().is_some());
        let _ = phone.update(Message::Home);
        assert!(phone.state.is_closing());
    }

    #[test]
    fn home_at_home_does_nothing() {
        let (mut phone, _) = Phone::new(Config::default());
        let _ = phone.update(Message::Home);
        assert!(phone.state.opened_app().is_none());
        assert!(!phone.state.is_closing());
    }
}
