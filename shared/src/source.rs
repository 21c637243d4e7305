//! Event sources and the live-or-fallback selection.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::fallback::{covers_season, fallback_events, FALLBACK_SEASON};
use crate::models::{Event, EventOrigin};
use crate::Result;

/// Something that can produce the season's races, ascending by date.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Season year the source is asked for.
    fn season(&self) -> i32;

    async fn fetch_events(&self) -> Result<Vec<Event>>;
}

/// Fetch from `source`, or use the fallback calendar if that fails for any reason.
pub async fn load_events<S>(source: &S) -> (Vec<Event>, EventOrigin)
where
    S: EventSource + ?Sized,
{
    match source.fetch_events().await {
        Ok(events) => {
            for event in &events {
                info!(race = %event.name, date = %event.date, "Race on calendar");
            }
            (events, EventOrigin::Live)
        }
        Err(e) => {
            warn!(error = %e, "Failed to fetch races from OpenF1, using fallback race list");
            if !covers_season(source.season()) {
                warn!(
                    season = source.season(),
                    fallback_season = FALLBACK_SEASON,
                    "Fallback race list is for a different season"
                );
            }
            (fallback_events(), EventOrigin::Fallback)
        }
    }
}
