//! User-facing text and reply planning.
//!
//! A [`Reply`] describes what to send without talking to Telegram, so
//! the handlers stay thin and the content is testable offline.

use std::path::PathBuf;

use luna_clock::{LunarDay, LunarReading, MoonPhase};

use crate::almanac;
use crate::assets::AssetResolver;

/// Label of the reply-keyboard button that requests a reading.
pub const LUNAR_DAY_BUTTON: &str = "Текущие лунные сутки";

/// Sent on `/start`.
pub const GREETING: &str = "Привет! Нажми кнопку ниже.";

/// Sent when the clock fails.
pub const APOLOGY: &str = "Не удалось определить лунные сутки. Попробуйте позже.";

/// Russian phase name with its moon emoji.
pub fn phase_name(phase: MoonPhase) -> &'static str {
    match phase {
        MoonPhase::NewMoon => "Новолуние 🌑",
        MoonPhase::Waxing => "Растущая Луна 🌒",
        MoonPhase::FirstQuarter => "Первая четверть 🌓",
        MoonPhase::Waning => "Прибывающая Луна 🌔",
        MoonPhase::FullMoon => "Полнолуние 🌕",
    }
}

/// Output flavour for the reading headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    /// Telegram HTML parse mode.
    Html,
    /// Plain text for terminals.
    Plain,
}

/// Headline: lunar day plus phase and illuminated percentage.
pub fn headline(reading: &LunarReading, markup: Markup) -> String {
    let name = phase_name(reading.phase.phase);
    let pct = reading.phase.percent;
    match markup {
        Markup::Html => format!(
            "<b>{} лунный день</b>\n<b>Фаза Луны:</b> {name} ({pct:.1}%)",
            reading.day
        ),
        Markup::Plain => format!("{} лунный день\nФаза Луны: {name} ({pct:.1}%)", reading.day),
    }
}

/// Almanac line: symbol emoji and description of `day`.
pub fn almanac_line(day: LunarDay) -> String {
    let entry = almanac::entry(day);
    format!("{} {}", entry.emoji, entry.description)
}

/// Text for `/stats`.
pub fn stats_text(count: usize) -> String {
    format!("Пользователей: {count}")
}

/// One outgoing message.
#[derive(Debug, Clone, PartialEq)]
pub enum Outgoing {
    /// Plain text.
    Text(String),
    /// HTML-formatted text.
    Html(String),
    /// Text with the lunar-day button keyboard attached.
    WithKeyboard(String),
    /// Photo with an HTML caption.
    Photo { path: PathBuf, caption: String },
}

/// Messages to send for one incoming update.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reply {
    pub messages: Vec<Outgoing>,
    /// Count the sender once every message is delivered.
    pub counts_user: bool,
}

impl Reply {
    fn single(message: Outgoing) -> Self {
        Self {
            messages: vec![message],
            counts_user: false,
        }
    }

    pub fn greeting() -> Self {
        Self::single(Outgoing::WithKeyboard(GREETING.to_owned()))
    }

    pub fn stats(count: usize) -> Self {
        Self::single(Outgoing::Text(stats_text(count)))
    }

    pub fn apology() -> Self {
        Self::single(Outgoing::Text(APOLOGY.to_owned()))
    }

    /// Headline (as photo caption when an image exists) then the almanac line.
    pub fn reading<A: AssetResolver + ?Sized>(reading: &LunarReading, assets: &A) -> Self {
        let caption = headline(reading, Markup::Html);
        let first = match assets.resolve(reading.day) {
            Some(path) => Outgoing::Photo {
                path: path.to_path_buf(),
                caption,
            },
            None => Outgoing::Html(caption),
        };
        Self {
            messages: vec![first, Outgoing::Text(almanac_line(reading.day))],
            counts_user: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::NoAssets;
    use luna_clock::PhaseReading;
    use std::path::Path;

    struct OneImage(PathBuf);

    impl AssetResolver for OneImage {
        fn resolve(&self, day: LunarDay) -> Option<&Path> {
            (day.get() == 3).then_some(self.0.as_path())
        }
    }

    fn reading(day: u8, percent: f64) -> LunarReading {
        LunarReading {
            day: LunarDay::new(day).unwrap(),
            phase: PhaseReading::from_percent(percent),
            elongation_deg: f64::from(day) * 12.0 - 6.0,
        }
    }

    #[test]
    fn html_headline() {
        let text = headline(&reading(3, 12.34), Markup::Html);
        assert_eq!(
            text,
            "<b>3 лунный день</b>\n<b>Фаза Луны:</b> Растущая Луна 🌒 (12.3%)"
        );
    }

    #[test]
    fn plain_headline_has_no_tags() {
        let text = headline(&reading(15, 99.6), Markup::Plain);
        assert!(!text.contains('<'));
        assert!(text.contains("Полнолуние 🌕 (99.6%)"));
    }

    #[test]
    fn text_reply_without_image() {
        let reply = Reply::reading(&reading(1, 0.0), &NoAssets);
        assert!(reply.counts_user);
        assert_eq!(reply.messages.len(), 2);
        assert!(matches!(&reply.messages[0], Outgoing::Html(t) if t.contains("Новолуние")));
        assert_eq!(reply.messages[1], Outgoing::Text(almanac_line(LunarDay::FIRST)));
    }

    #[test]
    fn photo_reply_with_image() {
        let assets = OneImage(PathBuf::from("images/3.jpg"));
        let reply = Reply::reading(&reading(3, 10.0), &assets);
        match &reply.messages[0] {
            Outgoing::Photo { path, caption } => {
                assert_eq!(path, &PathBuf::from("images/3.jpg"));
                assert!(caption.starts_with("<b>3 лунный день</b>"));
            }
            other => panic!("expected photo, got {other:?}"),
        }
    }

    #[test]
    fn service_replies_do_not_count() {
        assert!(!Reply::greeting().counts_user);
        assert!(!Reply::apology().counts_user);
        assert_eq!(Reply::stats(4).messages, vec![Outgoing::Text("Пользователей: 4".into())]);
    }

    #[test]
    fn every_phase_named() {
        for phase in luna_clock::ALL_PHASES {
            assert!(!phase_name(phase).is_empty());
        }
    }
}
