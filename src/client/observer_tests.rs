//! Tests for observability events and the bundled observers.

use std::time::Duration;

use super::{EventDetail, NoopObserver, Phase, RequestEvent, RequestObserver, TracingObserver};

fn event(phase: Phase, detail: EventDetail) -> RequestEvent {
    RequestEvent {
        phase,
        attempt: 1,
        target: url::Url::parse("https://api.example.com/users/101").unwrap(),
        detail,
    }
}

mod tracing_observer {
    use super::*;

    #[test]
    fn accepts_every_phase() {
        let observer = TracingObserver;
        let events = [
            event(Phase::Sent, EventDetail::None),
            event(Phase::Received, EventDetail::Status(http::StatusCode::OK)),
            event(Phase::Received, EventDetail::Failure("timeout".to_string())),
            event(
                Phase::RetryScheduled,
                EventDetail::Backoff(Duration::from_secs(1)),
            ),
            event(Phase::Resolved, EventDetail::Status(http::StatusCode::OK)),
            event(Phase::Resolved, EventDetail::Failure("canceled".to_string())),
        ];

        for ev in &events {
            assert!(observer.on_event(ev).is_ok());
        }
    }

    #[test]
    fn accepts_mismatched_detail() {
        // Phase/detail pairs the orchestrator never produces still log.
        let observer = TracingObserver;
        let ev = event(Phase::RetryScheduled, EventDetail::None);

        assert!(observer.on_event(&ev).is_ok());
    }
}

mod noop_observer {
    use super::*;

    #[test]
    fn discards_events() {
        let observer = NoopObserver;
        let ev = event(Phase::Sent, EventDetail::None);

        assert!(observer.on_event(&ev).is_ok());
    }
}

mod event_type {
    use super::*;

    #[test]
    fn events_are_cloneable_and_debuggable() {
        let ev = event(Phase::Received, EventDetail::Status(http::StatusCode::OK));
        let clone = ev.clone();

        let debug = format!("{clone:?}");
        assert!(debug.contains("Received"));
        assert!(debug.contains("users/101"));
    }

    #[test]
    fn phases_compare_by_value() {
        assert_eq!(Phase::Sent, Phase::Sent);
        assert_ne!(Phase::Sent, Phase::Resolved);
    }
}
