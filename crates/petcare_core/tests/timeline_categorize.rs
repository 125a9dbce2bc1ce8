use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use petcare_core::timeline::{is_same_day, DATE_TIME_FORMAT};
use petcare_core::{
    categorize, classify, format_event_time, tab_counts, Event, EventKind, EventRange, NewEvent,
    TabCounts,
};
use uuid::Uuid;

fn paris() -> FixedOffset {
    FixedOffset::east_opt(2 * 3600).unwrap()
}

/// Saturday 2026-10-17 12:00 at UTC+2.
fn now() -> DateTime<FixedOffset> {
    paris().with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
}

fn event_at(title: &str, at: DateTime<Utc>, done: bool) -> Event {
    let mut new_event = NewEvent::new(Uuid::new_v4(), EventKind::Care, title, at);
    new_event.done = done;
    Event::from_new(Uuid::new_v4(), new_event, at)
}

fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    paris()
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .unwrap()
        .with_timezone(&Utc)
}

fn titles(events: &[&Event]) -> Vec<String> {
    events.iter().map(|event| event.title.clone()).collect()
}

fn sample() -> Vec<Event> {
    vec![
        event_at("earlier today", local(2026, 10, 17, 8, 0), false),
        event_at("later today", local(2026, 10, 17, 14, 30), false),
        event_at("in three days", local(2026, 10, 20, 14, 30), false),
        event_at("yesterday open", local(2026, 10, 16, 9, 0), false),
        event_at("yesterday done", local(2026, 10, 16, 9, 0), true),
        event_at("next week done", local(2026, 10, 24, 9, 0), true),
        event_at("today done", local(2026, 10, 17, 18, 0), true),
    ]
}

#[test]
fn today_is_a_calendar_day_match_even_when_already_past() {
    let events = sample();
    assert_eq!(
        titles(&categorize(&events, EventRange::Today, &now())),
        vec!["earlier today", "later today"]
    );
}

#[test]
fn upcoming_requires_strictly_future_and_open() {
    let events = sample();
    assert_eq!(
        titles(&categorize(&events, EventRange::Upcoming, &now())),
        vec!["later today", "in three days"]
    );

    let exactly_now = vec![event_at("now", now().with_timezone(&Utc), false)];
    assert!(categorize(&exactly_now, EventRange::Upcoming, &now()).is_empty());
    assert_eq!(categorize(&exactly_now, EventRange::Today, &now()).len(), 1);
}

#[test]
fn completed_ignores_dates_and_keeps_input_order() {
    let events = sample();
    assert_eq!(
        titles(&categorize(&events, EventRange::Completed, &now())),
        vec!["yesterday done", "next week done", "today done"]
    );
}

#[test]
fn done_events_never_leak_into_open_tabs() {
    let events = sample();
    for range in [EventRange::Today, EventRange::Upcoming] {
        assert!(categorize(&events, range, &now())
            .iter()
            .all(|event| !event.done));
    }
    assert!(categorize(&events, EventRange::Completed, &now())
        .iter()
        .all(|event| event.done));
}

#[test]
fn classify_assigns_at_most_one_bucket() {
    let events = sample();
    let buckets: Vec<Option<EventRange>> = events
        .iter()
        .map(|event| classify(event, &now()))
        .collect();
    assert_eq!(
        buckets,
        vec![
            Some(EventRange::Today),
            Some(EventRange::Today),
            Some(EventRange::Upcoming),
            None,
            Some(EventRange::Completed),
            Some(EventRange::Completed),
            Some(EventRange::Completed),
        ]
    );

    let completed = categorize(&events, EventRange::Completed, &now());
    for range in [EventRange::Today, EventRange::Upcoming] {
        let open = categorize(&events, range, &now());
        assert!(open
            .iter()
            .all(|event| !completed.iter().any(|done| done.id == event.id)));
    }
}

#[test]
fn tab_counts_match_categorize() {
    let events = sample();
    let counts = tab_counts(&events, &now());
    assert_eq!(
        counts,
        TabCounts {
            today: 2,
            upcoming: 2,
            completed: 3,
        }
    );
    for range in EventRange::ALL {
        assert_eq!(counts.get(range), categorize(&events, range, &now()).len());
    }
}

#[test]
fn toggling_moves_event_to_completed() {
    let mut events = sample();
    let target = events[1].id;
    events[1].toggle_done();

    let today = categorize(&events, EventRange::Today, &now());
    let upcoming = categorize(&events, EventRange::Upcoming, &now());
    let completed = categorize(&events, EventRange::Completed, &now());
    assert!(today.iter().all(|event| event.id != target));
    assert!(upcoming.iter().all(|event| event.id != target));
    assert!(completed.iter().any(|event| event.id == target));
}

#[test]
fn calendar_day_is_taken_in_the_viewer_zone() {
    // 23:30 UTC on the 17th is already the 18th at UTC+2.
    let at = Utc.with_ymd_and_hms(2026, 10, 17, 23, 30, 0).unwrap();
    assert!(!is_same_day(&at, &now()));
    assert!(is_same_day(&at, &now().with_timezone(&Utc)));
}

#[test]
fn time_labels_follow_the_today_flag() {
    let tz = paris();
    let today = local(2026, 10, 17, 14, 30);
    let later = today + Duration::days(3);
    assert_eq!(format_event_time(&today, true, &tz), "14:30");
    assert_eq!(format_event_time(&later, false, &tz), "Tue 20 Oct 14:30");
    assert_eq!(
        format_event_time(&later, false, &tz),
        later.with_timezone(&tz).format(DATE_TIME_FORMAT).to_string()
    );
}
