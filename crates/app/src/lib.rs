#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod active_session;
mod history;
mod planner;
mod service;
mod settings;

pub use active_session::{ActiveSession, FinishError, SessionState};
pub use history::{HistoryEntry, VolumePoint, history, volume_series};
pub use planner::Planner;
pub use service::Service;
pub use settings::{Settings, SettingsRepository, SettingsService};
