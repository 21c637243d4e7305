//! Shared library for the race alert Lambda.
//!
//! Fetches the season calendar from OpenF1 (falling back to a static list),
//! finds a race between today and the coming Sunday, and publishes a single
//! alert for it.

pub mod check;
pub mod config;
pub mod error;
pub mod fallback;
pub mod models;
pub mod notifier;
pub mod openf1;
pub mod source;
pub mod week;

pub use check::{run_check, CheckOutcome};
pub use config::Config;
pub use error::{Error, Result};
pub use fallback::fallback_events;
pub use models::{CheckResponse, Event, EventOrigin};
pub use notifier::{Notifier, RaceAlert, SnsNotifier};
pub use openf1::OpenF1Client;
pub use source::{load_events, EventSource};
pub use week::{first_in_window, upcoming_sunday, WeekWindow};
