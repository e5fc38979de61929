use iced::widget::text;
use iced::widget::text::Shaping;
use iced::{Color, Element};

const FALLBACK: &str = "•";

/// Glyph for a symbolic icon name. Unknown names get a neutral dot.
pub(crate) fn glyph(name: &str) -> &'static str {
    match name {
        "Camera" => "📷",
        "MessageSquare" => "💬",
        "Phone" => "📞",
        "Settings" => "⚙",
        "Globe" => "🌐",
        "Mail" => "✉",
        "Calendar" => "📅",
        "MapPin" => "📍",
        "Music" => "🎵",
        "Play" => "▶",
        "Signal" => "📶",
        "Wifi" => "🛜",
        "Battery" => "🔋",
        "Grid3x3" => "▦",
        "Home" => "⌂",
        "Clock" => "🕓",
        "Bell" => "🔔",
        "ArrowLeft" => "←",
        "X" => "✕",
        "ChevronUp" => "⌃",
        "CloudSun" => "⛅",
        "Search" => "🔍",
        _ => FALLBACK,
    }
}

/// Render `name` at `size` logical pixels.
pub(crate) fn icon<'a, Message: 'a>(name: &str, size: f32, color: Color) -> Element<'a, Message> {
    text(glyph(name))
        .size(size)
        .color(color)
        .shaping(Shaping::Advanced)
        .into()
}
