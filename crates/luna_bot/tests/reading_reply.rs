//! Reading replies built from the real clock at known instants.

use std::fs;

use chrono::{TimeZone, Utc};
use luna_bot::AppState;
use luna_bot::assets::{DirectoryAssets, NoAssets};
use luna_bot::reply::{Outgoing, almanac_line};
use luna_bot::stats::InMemoryRegistry;
use luna_clock::{GeoLocation, LunarClock, LunarDay};

fn clock() -> LunarClock {
    LunarClock::new(GeoLocation::new(45.0, 34.0, 0.0))
}

#[test]
fn full_moon_reply_as_text() {
    let state = AppState::new(clock(), Box::new(NoAssets), Box::new(InMemoryRegistry::new()));
    // 2024-01-25 17:54 UTC full moon
    let at = Utc.with_ymd_and_hms(2024, 1, 25, 17, 54, 0).unwrap();
    let reply = state.reply_for(at).unwrap();

    assert!(reply.counts_user);
    assert_eq!(reply.messages.len(), 2);
    match &reply.messages[0] {
        Outgoing::Html(text) => {
            assert!(text.contains("Полнолуние 🌕"), "{text}");
            assert!(text.contains("лунный день"), "{text}");
        }
        other => panic!("expected html headline, got {other:?}"),
    }
    let day = state.clock().lunar_day(at).unwrap();
    assert_eq!(reply.messages[1], Outgoing::Text(almanac_line(day)));
}

#[test]
fn image_used_when_present() {
    let at = Utc.with_ymd_and_hms(2024, 1, 18, 3, 53, 0).unwrap();
    let day = clock().lunar_day(at).unwrap();
    assert_eq!(day, LunarDay::new(8).unwrap());

    let dir = tempfile::tempdir().unwrap();
    let image = dir.path().join("8.jpg");
    fs::write(&image, b"\xFF\xD8\xFF").unwrap();

    let state = AppState::new(
        clock(),
        Box::new(DirectoryAssets::scan(dir.path())),
        Box::new(InMemoryRegistry::new()),
    );
    let reply = state.reply_for(at).unwrap();
    match &reply.messages[0] {
        Outgoing::Photo { path, caption } => {
            assert_eq!(path, &image);
            assert!(caption.starts_with("<b>8 лунный день</b>"), "{caption}");
            assert!(caption.contains("<b>Фаза Луны:</b>"), "{caption}");
        }
        other => panic!("expected photo, got {other:?}"),
    }
}

#[test]
fn registry_starts_empty() {
    let state = AppState::new(clock(), Box::new(NoAssets), Box::new(InMemoryRegistry::new()));
    assert_eq!(state.registry().count(), 0);
    assert!(state.registry().record(42));
    assert_eq!(state.registry().count(), 1);
}
