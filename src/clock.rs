use chrono::{Datelike, NaiveDateTime};

const WEEKDAYS: [&str; 7] = [
    "понедельник",
    "вторник",
    "среда",
    "четверг",
    "пятница",
    "суббота",
    "воскресенье",
];

const WEEKDAYS_SHORT: [&str; 7] = ["пн", "вт", "ср", "чт", "пт", "сб", "вс"];

/// Genitive month names, as used after a day number.
const MONTHS: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Wall-clock snapshot replaced on every tick. All labels are derived from
/// this one value at render time.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Clock {
    now: NaiveDateTime,
}

impl Clock {
    pub(crate) fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    pub(crate) fn tick(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    #[cfg(test)]
    pub(crate) fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// `"09:05"`
    pub(crate) fn time_label(&self) -> String {
        self.now.format("%H:%M").to_string()
    }

    /// `"понедельник"`
    pub(crate) fn weekday_label(&self) -> &'static str {
        WEEKDAYS[self.now.weekday().num_days_from_monday() as usize]
    }

    /// `"19 октября"`
    pub(crate) fn date_label(&self) -> String {
        format!("{} {}", self.now.day(), MONTHS[self.now.month0() as usize])
    }

    /// `"пн, 19 октября"`, used by the notification shade header.
    pub(crate) fn short_date_label(&self) -> String {
        format!(
            "{}, {}",
            WEEKDAYS_SHORT[self.now.weekday().num_days_from_monday() as usize],
            self.date_label()
        )
    }
}
