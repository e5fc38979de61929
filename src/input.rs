use iced::{event, mouse, touch, window, Event};

use crate::app::Message;

/// Map raw window events to pointer messages. Touch and left-button mouse
/// input are treated the same; a mouse press has no position of its own and
/// uses the last cursor position.
pub(crate) fn input_event(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::PointerDown(Some(position)))
        }
        Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(Message::PointerMoved(position))
        }
        Event::Touch(touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. }) => {
            Some(Message::PointerUp)
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::PointerDown(None))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerUp)
        }
        Event::Window(window::Event::Resized(size)) => Some(Message::Resized(size)),
        _ => None,
    }
}
