use iced::Color;

/// Id of the app whose overlay hosts the chat list and chat thread.
pub(crate) const MESSAGING_APP_ID: &str = "messages";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AppItem {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) icon: &'static str,
    pub(crate) color: u32,
}

fn rgb(color: u32) -> Color {
    Color::from_rgb8(
        ((color >> 16) & 0xff) as u8,
        ((color >> 8) & 0xff) as u8,
        (color & 0xff) as u8,
    )
}

impl AppItem {
    pub(crate) fn accent(&self) -> Color {
        rgb(self.color)
    }

    pub(crate) fn is_messaging(&self) -> bool {
        self.id == MESSAGING_APP_ID
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Notification {
    pub(crate) id: u32,
    pub(crate) app: &'static str,
    pub(crate) title: &'static str,
    pub(crate) message: &'static str,
    pub(crate) time: &'static str,
    pub(crate) icon: &'static str,
    pub(crate) color: u32,
}

impl Notification {
    pub(crate) fn accent(&self) -> Color {
        rgb(self.color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Chat {
    pub(crate) id: u32,
    pub(crate) name: &'static str,
    pub(crate) preview: &'static str,
    pub(crate) time: &'static str,
    pub(crate) unread: u32,
    pub(crate) avatar: &'static str,
    pub(crate) online: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ChatMessage {
    pub(crate) id: u32,
    pub(crate) text: &'static str,
    pub(crate) time: &'static str,
    pub(crate) mine: bool,
}

pub(crate) const APPS: &[AppItem] = &[
    AppItem { id: "camera", name: "Камера", icon: "Camera", color: 0x5F6368 },
    AppItem { id: "messages", name: "Сообщения", icon: "MessageSquare", color: 0x4285F4 },
    AppItem { id: "phone", name: "Телефон", icon: "Phone", color: 0x34A853 },
    AppItem { id: "settings", name: "Настройки", icon: "Settings", color: 0x5F6368 },
    AppItem { id: "browser", name: "Браузер", icon: "Globe", color: 0xFBBC04 },
    AppItem { id: "mail", name: "Почта", icon: "Mail", color: 0xEA4335 },
    AppItem { id: "calendar", name: "Календарь", icon: "Calendar", color: 0x4285F4 },
    AppItem { id: "maps", name: "Карты", icon: "MapPin", color: 0x34A853 },
    AppItem { id: "music", name: "Музыка", icon: "Music", color: 0xEA4335 },
    AppItem { id: "play", name: "Play Маркет", icon: "Play", color: 0x01875F },
];

pub(crate) const NOTIFICATIONS: &[Notification] = &[
    Notification {
        id: 1,
        app: "Сообщения",
        title: "Анна",
        message: "Привет! Встречаемся в семь?",
        time: "2 мин",
        icon: "MessageSquare",
        color: 0x4285F4,
    },
    Notification {
        id: 2,
        app: "Почта",
        title: "Отчёт за неделю",
        message: "Новые данные по проекту готовы к просмотру",
        time: "15 мин",
        icon: "Mail",
        color: 0xEA4335,
    },
    Notification {
        id: 3,
        app: "Календарь",
        title: "Созвон с командой",
        message: "Начало через 30 минут",
        time: "1 ч",
        icon: "Calendar",
        color: 0x4285F4,
    },
    Notification {
        id: 4,
        app: "Play Маркет",
        title: "Обновления",
        message: "Доступно обновление для 3 приложений",
        time: "3 ч",
        icon: "Play",
        color: 0x01875F,
    },
];

pub(crate) const CHATS: &[Chat] = &[
    Chat {
        id: 1,
        name: "Анна",
        preview: "Привет! Встречаемся в семь?",
        time: "14:32",
        unread: 2,
        avatar: "👩",
        online: true,
    },
    Chat {
        id: 2,
        name: "Дмитрий",
        preview: "Скинул файлы на почту",
        time: "13:05",
        unread: 0,
        avatar: "👨",
        online: false,
    },
    Chat {
        id: 3,
        name: "Мама",
        preview: "Позвони, когда освободишься",
        time: "Вчера",
        unread: 1,
        avatar: "👵",
        online: true,
    },
    Chat {
        id: 4,
        name: "Рабочий чат",
        preview: "Олег: релиз переносим на пятницу",
        time: "Пн",
        unread: 0,
        avatar: "💼",
        online: false,
    },
];

/// The one thread every chat opens into.
pub(crate) const THREAD: &[ChatMessage] = &[
    ChatMessage { id: 1, text: "Привет! Как дела?", time: "14:20", mine: false },
    ChatMessage { id: 2, text: "Привет! Всё отлично, а у тебя?", time: "14:22", mine: true },
    ChatMessage { id: 3, text: "Тоже хорошо. Есть планы на вечер?", time: "14:25", mine: false },
    ChatMessage { id: 4, text: "Пока нет, а что?", time: "14:28", mine: true },
    ChatMessage { id: 5, text: "Привет! Встречаемся в семь?", time: "14:32", mine: false },
];

#[cfg(test)]
pub(crate) fn find_app(id: &str) -> Option<&'static AppItem> {
    APPS.iter().find(|app| app.id == id)
}

#[cfg(test)]
pub(crate) fn messaging_app() -> &'static AppItem {
    // APPS is a fixed table that always contains the messaging entry.
    &APPS[1]
}
