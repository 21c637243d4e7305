//! The weekly race check: load the calendar, find this week's race, alert once.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::models::{Event, EventOrigin};
use crate::notifier::{Notifier, RaceAlert};
use crate::source::{load_events, EventSource};
use crate::week::{first_in_window, WeekWindow};
use crate::Result;

/// What a single check did.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub origin: EventOrigin,
    pub races_considered: usize,
    /// The race that was alerted, if any
    pub alerted: Option<Event>,
}

/// Run one check for `today`.
///
/// Fetch failures fall back to the static calendar and never fail the check.
/// A publish failure does.
pub async fn run_check<S, N>(today: NaiveDate, source: &S, notifier: &N) -> Result<CheckOutcome>
where
    S: EventSource + ?Sized,
    N: Notifier + ?Sized,
{
    let window = WeekWindow::starting(today);
    info!(today = %window.start, window_end = %window.end, "Checking races up to Sunday");

    let (events, origin) = load_events(source).await;
    info!(races_found = events.len(), origin = ?origin, "Race list loaded");

    let alerted = match first_in_window(&window, &events) {
        Some(event) => {
            let alert = RaceAlert::for_event(event);
            notifier.publish(&alert).await?;
            info!(race = %event.name, date = %event.date, "Alert sent via SNS");
            Some(event.clone())
        }
        None => {
            info!("No race this weekend");
            None
        }
    };

    Ok(CheckOutcome {
        origin,
        races_considered: events.len(),
        alerted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::fallback_events;
    use crate::notifier::tests::RecordingNotifier;
    use crate::source::tests::{FailingSource, StaticSource};
    use crate::Error;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_alerts_race_this_week() {
        let source = StaticSource(vec![
            Event::new("Spanish Grand Prix", date(2025, 6, 1)),
            Event::new("Canadian Grand Prix", date(2025, 6, 15)),
            Event::new("Austrian Grand Prix", date(2025, 6, 29)),
        ]);
        let notifier = RecordingNotifier::default();

        let outcome = run_check(date(2025, 6, 10), &source, &notifier).await.unwrap();

        assert_eq!(outcome.origin, EventOrigin::Live);
        assert_eq!(outcome.races_considered, 3);
        assert_eq!(outcome.alerted.map(|e| e.name), Some("Canadian Grand Prix".to_string()));
        assert_eq!(
            notifier.sent(),
            vec![RaceAlert {
                subject: "🏁 F1 Race Alert".to_string(),
                message: "🏁 Race this weekend: Canadian Grand Prix on 2025-06-15".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_quiet_week_sends_nothing() {
        let source = StaticSource(vec![Event::new("Canadian Grand Prix", date(2025, 6, 15))]);
        let notifier = RecordingNotifier::default();

        let outcome = run_check(date(2025, 6, 16), &source, &notifier).await.unwrap();

        assert!(outcome.alerted.is_none());
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn test_empty_calendar_sends_nothing() {
        let notifier = RecordingNotifier::default();
        let outcome = run_check(date(2025, 6, 10), &StaticSource(Vec::new()), &notifier)
            .await
            .unwrap();

        assert_eq!(outcome.races_considered, 0);
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn test_only_earliest_match_is_sent() {
        let source = StaticSource(vec![
            Event::new("Saturday Race", date(2025, 6, 14)),
            Event::new("Sunday Race", date(2025, 6, 15)),
        ]);
        let notifier = RecordingNotifier::default();

        run_check(date(2025, 6, 10), &source, &notifier).await.unwrap();

        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].message.contains("Saturday Race"));
    }

    #[tokio::test]
    async fn test_fetch_failure_filters_fallback() {
        let notifier = RecordingNotifier::default();

        let outcome = run_check(date(2025, 6, 10), &FailingSource::default(), &notifier)
            .await
            .unwrap();

        assert_eq!(outcome.origin, EventOrigin::Fallback);
        assert_eq!(outcome.races_considered, fallback_events().len());
        assert_eq!(
            notifier.sent()[0].message,
            "🏁 Race this weekend: Canadian Grand Prix on 2025-06-15"
        );
    }

    #[tokio::test]
    async fn test_publish_failure_propagates() {
        let source = StaticSource(vec![Event::new("Canadian Grand Prix", date(2025, 6, 15))]);
        let notifier = RecordingNotifier::failing();

        let err = run_check(date(2025, 6, 15), &source, &notifier).await.unwrap_err();
        assert!(matches!(err, Error::Aws(_)));
    }
}
