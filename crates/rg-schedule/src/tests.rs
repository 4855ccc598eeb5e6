//! Unit tests for rg-schedule.

use chrono::{NaiveDate, Weekday};

use rg_core::{EntryId, RoomId, Week};

use crate::{OneOffEvent, RecurringClass, ScheduleEntry};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Monday 2026-10-12 through Sunday 2026-10-18.
fn week() -> Week {
    Week { start: date(2026, 10, 12) }
}

fn class(id: u32, weekday: Weekday, start: i32, end: i32) -> RecurringClass {
    RecurringClass {
        id:           EntryId(id),
        title:        format!("class {id}"),
        room:         Some(RoomId(1)),
        weekday,
        start,
        end,
        active_from:  date(2026, 9, 1),
        active_until: None,
    }
}

fn event(id: u32, on: NaiveDate, start: i32, end: i32) -> OneOffEvent {
    OneOffEvent {
        id:    EntryId(id),
        title: format!("event {id}"),
        room:  Some(RoomId(2)),
        date:  on,
        start,
        end,
    }
}

// ── ScheduleEntry ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod entry {
    use rg_core::ItemKind;

    use super::*;

    #[test]
    fn recurring_matches_weekday_only() {
        let c = class(1, Weekday::Wed, 600, 660);
        assert!(c.occurs_on(date(2026, 10, 14)));
        assert!(!c.occurs_on(date(2026, 10, 15)));
        assert!(c.occurs_on(date(2027, 3, 3))); // open-ended
    }

    #[test]
    fn recurring_respects_inclusive_active_range() {
        let c = RecurringClass {
            active_from:  date(2026, 10, 14),
            active_until: Some(date(2026, 10, 28)),
            ..class(1, Weekday::Wed, 600, 660)
        };
        assert!(!c.occurs_on(date(2026, 10, 7)));
        assert!(c.occurs_on(date(2026, 10, 14)));
        assert!(c.occurs_on(date(2026, 10, 28)));
        assert!(!c.occurs_on(date(2026, 11, 4)));
    }

    #[test]
    fn one_off_matches_its_date() {
        let e = event(5, date(2026, 10, 15), 600, 700);
        assert!(e.occurs_on(date(2026, 10, 15)));
        assert!(!e.occurs_on(date(2026, 10, 22)));
    }

    #[test]
    fn accessors_dispatch_on_variant() {
        let c: ScheduleEntry = class(1, Weekday::Mon, 540, 600).into();
        let e: ScheduleEntry = event(2, date(2026, 10, 15), 700, 760).into();

        assert_eq!(c.kind(), ItemKind::Class);
        assert_eq!(e.kind(), ItemKind::Event);
        assert_eq!(c.interval(), (540, 600));
        assert_eq!(e.interval(), (700, 760));
        assert_eq!(c.id(), EntryId(1));
        assert_eq!(e.title(), "event 2");
        assert_eq!(e.room(), Some(RoomId(2)));
    }
}

// ── Filter ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod filter {
    use rg_core::ItemKind;

    use super::*;
    use crate::ScheduleFilter;

    #[test]
    fn default_matches_everything() {
        let f = ScheduleFilter::all();
        assert!(f.matches(&class(1, Weekday::Mon, 0, 60).into()));
        assert!(f.matches(&event(2, date(2026, 10, 12), 0, 60).into()));
    }

    #[test]
    fn room_filter_excludes_roomless_entries() {
        let f = ScheduleFilter::all().room(RoomId(1));
        let mut roomless = class(3, Weekday::Mon, 0, 60);
        roomless.room = None;

        assert!(f.matches(&class(1, Weekday::Mon, 0, 60).into()));
        assert!(!f.matches(&event(2, date(2026, 10, 12), 0, 60).into()));
        assert!(!f.matches(&roomless.into()));
    }

    #[test]
    fn kind_filter() {
        let f = ScheduleFilter::all().kind(ItemKind::Event);
        assert!(!f.matches(&class(1, Weekday::Mon, 0, 60).into()));
        assert!(f.matches(&event(2, date(2026, 10, 12), 0, 60).into()));
    }
}

// ── Week expansion ────────────────────────────────────────────────────────────

#[cfg(test)]
mod expand {
    use rg_core::{DayIndex, ItemId, ItemKind};

    use super::*;
    use crate::{ScheduleFilter, expand_week};

    #[test]
    fn recurring_and_one_off_land_in_their_days() {
        let entries: Vec<ScheduleEntry> = vec![
            class(1, Weekday::Mon, 540, 600).into(),
            class(2, Weekday::Thu, 600, 720).into(),
            event(3, date(2026, 10, 15), 660, 780).into(), // Thursday
        ];
        let items = expand_week(&entries, &week(), &ScheduleFilter::all());

        assert_eq!(items.len(), 3);
        assert_eq!(items.day(DayIndex(0)).len(), 1);
        let thu = items.day(DayIndex(3));
        assert_eq!(thu.len(), 2);
        assert_eq!(thu[0].label, "class 2");
        assert_eq!(thu[0].kind, ItemKind::Class);
        assert_eq!(thu[1].label, "event 3");
        assert_eq!((thu[1].start_minutes, thu[1].end_minutes), (660, 780));
        assert!(thu.iter().all(|i| i.day == DayIndex(3)));
    }

    #[test]
    fn events_outside_week_are_clipped() {
        let entries: Vec<ScheduleEntry> = vec![
            event(1, date(2026, 10, 11), 600, 700).into(), // Sunday before
            event(2, date(2026, 10, 19), 600, 700).into(), // Monday after
        ];
        let items = expand_week(&entries, &week(), &ScheduleFilter::all());
        assert!(items.is_empty());
    }

    #[test]
    fn class_outside_active_range_is_skipped() {
        let mut c = class(1, Weekday::Tue, 600, 700);
        c.active_until = Some(date(2026, 10, 12));
        let items = expand_week(&[c.into()], &week(), &ScheduleFilter::all());
        assert!(items.is_empty());
    }

    #[test]
    fn item_ids_are_unique_across_the_week() {
        let entries: Vec<ScheduleEntry> = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, wd)| class(i as u32, wd, 600, 660).into())
        .chain([ScheduleEntry::from(class(9, Weekday::Mon, 630, 700))])
        .collect();
        let items = expand_week(&entries, &week(), &ScheduleFilter::all());

        let ids: Vec<ItemId> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, (0..6).map(ItemId).collect::<Vec<_>>());
        // Entry order is preserved within a day.
        let mon: Vec<&str> = items.day(DayIndex(0)).iter().map(|i| i.label.as_str()).collect();
        assert_eq!(mon, ["class 0", "class 9"]);
    }

    #[test]
    fn filter_applies_before_expansion() {
        let entries: Vec<ScheduleEntry> = vec![
            class(1, Weekday::Mon, 540, 600).into(),
            event(2, date(2026, 10, 12), 540, 600).into(),
        ];
        let items = expand_week(&entries, &week(), &ScheduleFilter::all().room(RoomId(2)));
        assert_eq!(items.len(), 1);
        assert_eq!(items.day(DayIndex(0))[0].kind, ItemKind::Event);
    }

    #[test]
    fn malformed_intervals_pass_through_unchanged() {
        let entries: Vec<ScheduleEntry> = vec![event(1, date(2026, 10, 12), 600, 540).into()];
        let items = expand_week(&entries, &week(), &ScheduleFilter::all());
        let item = &items.day(DayIndex(0))[0];
        assert_eq!((item.start_minutes, item.end_minutes), (600, 540));
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;
    use crate::{ScheduleError, load_entries_reader};

    const HEADER: &str = "kind,id,title,room,weekday,date,start,end,active_from,active_until\n";

    fn load(body: &str) -> Result<Vec<ScheduleEntry>, ScheduleError> {
        load_entries_reader(Cursor::new(format!("{HEADER}{body}")))
    }

    #[test]
    fn parses_classes_and_events() {
        let entries = load(
            "class,1,Ceramics,2,mon,,09:00,11:00,2026-09-01,2026-12-20\n\
             class,2,Choir,,wed,,18:30,20:00,,\n\
             event,10,Open day,1,,2026-10-15,10:00,16:00,,\n",
        )
        .unwrap();
        assert_eq!(entries.len(), 3);

        match &entries[0] {
            ScheduleEntry::Recurring(c) => {
                assert_eq!(c.title, "Ceramics");
                assert_eq!(c.room, Some(RoomId(2)));
                assert_eq!(c.weekday, Weekday::Mon);
                assert_eq!((c.start, c.end), (540, 660));
                assert_eq!(c.active_until, Some(date(2026, 12, 20)));
            }
            other => panic!("expected class, got {other:?}"),
        }
        match &entries[1] {
            ScheduleEntry::Recurring(c) => {
                assert_eq!(c.room, None);
                assert_eq!(c.active_from, NaiveDate::MIN);
                assert_eq!(c.active_until, None);
            }
            other => panic!("expected class, got {other:?}"),
        }
        match &entries[2] {
            ScheduleEntry::OneOff(e) => {
                assert_eq!(e.id, EntryId(10));
                assert_eq!(e.date, date(2026, 10, 15));
                assert_eq!((e.start, e.end), (600, 960));
            }
            other => panic!("expected event, got {other:?}"),
        }
    }

    #[test]
    fn reversed_interval_is_loaded_not_rejected() {
        let entries = load("event,1,Backwards,,,2026-10-15,11:00,10:00,,\n").unwrap();
        assert_eq!(entries[0].interval(), (660, 600));
    }

    #[test]
    fn unknown_kind_reports_line() {
        let err = load(
            "event,1,Fine,,,2026-10-15,10:00,11:00,,\n\
             meeting,2,Bad,,,2026-10-15,10:00,11:00,,\n",
        )
        .unwrap_err();
        match err {
            ScheduleError::Parse { line, msg } => {
                assert_eq!(line, 3);
                assert!(msg.contains("meeting"), "{msg}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn class_without_weekday_is_an_error() {
        let err = load("class,1,Yoga,,,,10:00,11:00,,\n").unwrap_err();
        assert!(matches!(err, ScheduleError::Parse { line: 2, .. }));
    }

    #[test]
    fn bad_time_is_an_error() {
        assert!(load("event,1,X,,,2026-10-15,10h00,11:00,,\n").is_err());
    }

    #[test]
    fn bad_date_is_an_error() {
        assert!(load("event,1,X,,,15/10/2026,10:00,11:00,,\n").is_err());
    }

    #[test]
    fn non_numeric_id_is_an_error() {
        assert!(load("event,abc,X,,,2026-10-15,10:00,11:00,,\n").is_err());
    }
}
