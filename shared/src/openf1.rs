//! OpenF1 API client.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::models::{Event, Meeting, Session};
use crate::source::EventSource;
use crate::{Config, Result};

/// Session name OpenF1 uses for the Grand Prix itself.
const RACE_SESSION: &str = "Race";

/// Client for the read-only OpenF1 API.
pub struct OpenF1Client {
    http_client: reqwest::Client,
    base_url: String,
    season: i32,
}

impl OpenF1Client {
    /// Create a client for one season. Every request uses `timeout`.
    pub fn new(base_url: impl Into<String>, season: i32, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            season,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.openf1_base_url, config.season, config.request_timeout)
    }

    /// All meetings of the season.
    pub async fn meetings(&self) -> Result<Vec<Meeting>> {
        let meetings = self
            .http_client
            .get(format!("{}/meetings", self.base_url))
            .query(&[("year", self.season)])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Meeting>>()
            .await?;

        Ok(meetings)
    }

    /// Race sessions of one meeting. Usually zero or one.
    pub async fn race_sessions(&self, meeting_key: i64) -> Result<Vec<Session>> {
        let sessions = self
            .http_client
            .get(format!("{}/sessions", self.base_url))
            .query(&[("meeting_key", meeting_key)])
            .query(&[("session_name", RACE_SESSION)])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Session>>()
            .await?;

        Ok(sessions)
    }
}

#[async_trait]
impl EventSource for OpenF1Client {
    fn season(&self) -> i32 {
        self.season
    }

    async fn fetch_events(&self) -> Result<Vec<Event>> {
        let meetings = self.meetings().await?;
        debug!(season = self.season, meetings = meetings.len(), "Fetched meetings");

        let mut events = Vec::with_capacity(meetings.len());
        for meeting in meetings {
            let sessions = self.race_sessions(meeting.meeting_key).await?;

            // Testing and other race-less meetings.
            let Some(race) = sessions.first() else {
                continue;
            };

            events.push(Event {
                name: meeting.meeting_name,
                date: race.date_start.date_naive(),
                location: meeting.location,
                country: meeting.country_name,
                meeting_key: Some(meeting.meeting_key),
            });
        }

        events.sort_by_key(|event| event.date);

        info!(season = self.season, races_found = events.len(), "Fetched race calendar");
        Ok(events)
    }
}
