use chrono::{Duration, NaiveDate};
use tourspec_domain::{DayKey, EquipmentProfile, WorkoutDay, catalog, schedule};

/// Selection state for the dashboard: the chosen calendar date, the
/// active equipment profile and an optional manual workout override.
///
/// The override supersedes the schedule-derived workout until the date or
/// the profile changes; either change clears it so the selection can
/// never be inconsistent with the new context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Planner {
    date: NaiveDate,
    profile: EquipmentProfile,
    override_day: Option<DayKey>,
}

impl Planner {
    #[must_use]
    pub fn new(date: NaiveDate, profile: EquipmentProfile) -> Self {
        Self {
            date,
            profile,
            override_day: None,
        }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn profile(&self) -> EquipmentProfile {
        self.profile
    }

    #[must_use]
    pub fn override_day(&self) -> Option<DayKey> {
        self.override_day
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        if date != self.date {
            self.override_day = None;
        }
        self.date = date;
    }

    pub fn shift_date(&mut self, days: i64) {
        self.set_date(self.date + Duration::days(days));
    }

    pub fn set_profile(&mut self, profile: EquipmentProfile) {
        if profile != self.profile {
            self.override_day = None;
        }
        self.profile = profile;
    }

    pub fn override_workout(&mut self, day: DayKey) {
        self.override_day = Some(day);
    }

    pub fn clear_override(&mut self) {
        self.override_day = None;
    }

    /// The workout for the current selection, or `None` on a rest day.
    #[must_use]
    pub fn current_workout(&self) -> Option<&'static WorkoutDay> {
        match self.override_day {
            Some(day) => catalog::workout(self.profile, day),
            None => schedule::workout_for(self.profile, self.date),
        }
    }
}
