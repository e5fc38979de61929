use iced::gradient::Linear;
use iced::{Background, Border, Color, Degrees, Gradient};
use serde::Deserialize;

/// How the theme is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    #[default]
    Light,
    /// Follow the desktop environment colour scheme at startup.
    Auto,
}

/// All colors and font sizes used by app screens and the shade.
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub is_dark: bool,
    // Text
    pub text: Color,
    pub muted: Color,
    pub on_accent: Color,
    // Backgrounds
    pub surface: Color,
    pub header: Color,
    pub divider: Color,
    pub shade: Color,
    pub card: Color,
    pub bubble_mine: Color,
    pub bubble_theirs: Color,
    pub badge: Color,
    pub online: Color,
    // Font sizes (logical pixels)
    pub title_text: f32,
    pub body_text: f32,
    pub caption_text: f32,
}

/// Home screen chrome that sits on the wallpaper in every theme.
pub const ON_WALLPAPER: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

pub const GLASS: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 0.2,
};

pub const GLASS_STRONG: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 0.3,
};

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            text: Color::from_rgb(0.93, 0.93, 0.95),
            muted: Color::from_rgba(0.93, 0.93, 0.95, 0.55),
            on_accent: Color::WHITE,
            surface: Color::from_rgb(0.07, 0.07, 0.09),
            header: Color::from_rgb(0.11, 0.11, 0.14),
            divider: Color::from_rgba(1.0, 1.0, 1.0, 0.08),
            shade: Color::from_rgba(0.09, 0.09, 0.12, 0.96),
            card: Color::from_rgb(0.15, 0.15, 0.19),
            bubble_mine: Color::from_rgb8(0x42, 0x85, 0xF4),
            bubble_theirs: Color::from_rgb(0.2, 0.2, 0.25),
            badge: Color::from_rgb8(0x42, 0x85, 0xF4),
            online: Color::from_rgb8(0x34, 0xA8, 0x53),
            title_text: 20.0,
            body_text: 15.0,
            caption_text: 12.0,
        }
    }

    pub fn light() -> Self {
        Self {
            is_dark: false,
            text: Color::from_rgb(0.12, 0.12, 0.13),
            muted: Color::from_rgb(0.45, 0.46, 0.48),
            on_accent: Color::WHITE,
            surface: Color::WHITE,
            header: Color::from_rgb(0.97, 0.97, 0.98),
            divider: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            shade: Color::from_rgba(0.98, 0.98, 0.99, 0.97),
            card: Color::WHITE,
            bubble_mine: Color::from_rgb8(0x42, 0x85, 0xF4),
            bubble_theirs: Color::from_rgb(0.93, 0.94, 0.95),
            badge: Color::from_rgb8(0x42, 0x85, 0xF4),
            online: Color::from_rgb8(0x34, 0xA8, 0x53),
            title_text: 20.0,
            body_text: 15.0,
            caption_text: 12.0,
        }
    }

    /// Solid surface faded by `opacity`.
    pub fn surface_style(&self, opacity: f32) -> impl Fn(&iced::Theme) -> iced::widget::container::Style + use<> {
        let color = fade(self.surface, opacity);
        let text = fade(self.text, opacity);
        move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(color)),
            text_color: Some(text),
            border: Border {
                radius: 24.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn header_style(&self) -> impl Fn(&iced::Theme) -> iced::widget::container::Style + use<> {
        let color = self.header;
        let divider = self.divider;
        move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                color: divider,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        }
    }

    pub fn shade_style(&self) -> impl Fn(&iced::Theme) -> iced::widget::container::Style + use<> {
        let color = self.shade;
        let text = self.text;
        move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(color)),
            text_color: Some(text),
            border: Border {
                radius: iced::border::Radius::default().bottom(24.0),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn card_style(&self) -> impl Fn(&iced::Theme) -> iced::widget::container::Style + use<> {
        let color = self.card;
        let divider = self.divider;
        move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                color: divider,
                width: 1.0,
                radius: 16.0.into(),
            },
            ..Default::default()
        }
    }

    pub fn bubble_style(&self, mine: bool) -> impl Fn(&iced::Theme) -> iced::widget::container::Style + use<> {
        let (color, text) = if mine {
            (self.bubble_mine, self.on_accent)
        } else {
            (self.bubble_theirs, self.text)
        };
        move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(color)),
            text_color: Some(text),
            border: Border {
                radius: 18.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Rounded square filled with `color`: app icons, avatars, badges.
pub fn tile_style(color: Color, radius: f32) -> impl Fn(&iced::Theme) -> iced::widget::container::Style + use<> {
    move |_theme: &iced::Theme| iced::widget::container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(ON_WALLPAPER),
        border: Border {
            radius: radius.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Yellow-green-blue-red diagonal wallpaper.
pub fn wallpaper_style(_theme: &iced::Theme) -> iced::widget::container::Style {
    let gradient = Linear::new(Degrees(135.0))
        .add_stop(0.0, Color::from_rgb8(0xFB, 0xBC, 0x04))
        .add_stop(0.35, Color::from_rgb8(0x34, 0xA8, 0x53))
        .add_stop(0.7, Color::from_rgb8(0x42, 0x85, 0xF4))
        .add_stop(1.0, Color::from_rgb8(0xEA, 0x43, 0x35));
    iced::widget::container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        text_color: Some(ON_WALLPAPER),
        ..Default::default()
    }
}

pub fn scrim_style(alpha: f32) -> impl Fn(&iced::Theme) -> iced::widget::container::Style + use<> {
    move |_theme: &iced::Theme| iced::widget::container::Style {
        background: Some(Background::Color(Color {
            a: alpha.clamp(0.0, 1.0),
            ..Color::BLACK
        })),
        ..Default::default()
    }
}

/// Flat button with no chrome, content colored by the caller.
pub fn bare_button(_theme: &iced::Theme, _status: iced::widget::button::Status) -> iced::widget::button::Style {
    iced::widget::button::Style {
        background: None,
        ..Default::default()
    }
}

pub fn glass_button(_theme: &iced::Theme, status: iced::widget::button::Status) -> iced::widget::button::Style {
    let color = match status {
        iced::widget::button::Status::Hovered | iced::widget::button::Status::Pressed => GLASS_STRONG,
        _ => GLASS,
    };
    iced::widget::button::Style {
        background: Some(Background::Color(color)),
        text_color: ON_WALLPAPER,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Home-indicator pill at the bottom of an app screen.
pub fn pill_button(color: Color) -> impl Fn(&iced::Theme, iced::widget::button::Status) -> iced::widget::button::Style {
    move |_theme, _status| iced::widget::button::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: 3.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn fade(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

/// Whether the desktop prefers a dark colour scheme.
///
/// Sources are tried in order: the XDG settings portal, GNOME's
/// `color-scheme` key, then `$GTK_THEME`. Runs external commands, so this
/// is only called once at startup.
pub fn detect_system_dark() -> bool {
    portal_prefers_dark()
        .or_else(gsettings_prefers_dark)
        .or_else(|| std::env::var("GTK_THEME").ok().map(|name| gtk_theme_is_dark(&name)))
        .unwrap_or(false)
}

fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = std::process::Command::new(program).args(args).output().ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).into_owned())
}

fn portal_prefers_dark() -> Option<bool> {
    let reply = command_stdout(
        "dbus-send",
        &[
            "--session",
            "--print-reply=literal",
            "--dest=org.freedesktop.portal.Desktop",
            "/org/freedesktop/portal/desktop",
            "org.freedesktop.portal.Settings.ReadOne",
            "string:org.freedesktop.appearance",
            "string:color-scheme",
        ],
    )?;
    parse_portal_scheme(&reply)
}

fn gsettings_prefers_dark() -> Option<bool> {
    let value = command_stdout("gsettings", &["get", "org.gnome.desktop.interface", "color-scheme"])?;
    parse_gsettings_scheme(&value)
}

/// Portal `color-scheme`: 1 is dark, 2 is light, 0 means no preference.
fn parse_portal_scheme(reply: &str) -> Option<bool> {
    match reply.split_whitespace().skip_while(|w| *w != "uint32").nth(1) {
        Some("1") => Some(true),
        Some("2") => Some(false),
        _ => None,
    }
}

fn parse_gsettings_scheme(value: &str) -> Option<bool> {
    match value.trim().trim_matches('\'') {
        "prefer-dark" => Some(true),
        "prefer-light" | "default" => Some(false),
        _ => None,
    }
}

fn gtk_theme_is_dark(name: &str) -> bool {
    name.to_lowercase().contains("dark")
}

/// Resolve the ThemeColors for a given mode.
pub fn resolve(mode: ThemeMode) -> ThemeColors {
    match mode {
        ThemeMode::Dark => ThemeColors::dark(),
        ThemeMode::Light => ThemeColors::light(),
        ThemeMode::Auto => {
            if detect_system_dark() {
                ThemeColors::dark()
            } else {
                ThemeColors::light()
            }
        }
    }
}
