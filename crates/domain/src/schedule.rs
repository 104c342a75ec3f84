use chrono::{Datelike, NaiveDate, Weekday};

use crate::{DayKey, EquipmentProfile, WorkoutDay, catalog};

/// The day key scheduled for the given date's weekday.
///
/// A weekday without an entry is a rest day, which is a valid result and
/// not a failure.
#[must_use]
pub fn scheduled_day(date: NaiveDate) -> Option<DayKey> {
    match date.weekday() {
        Weekday::Mon => Some(DayKey::Monday),
        Weekday::Wed => Some(DayKey::Wednesday),
        Weekday::Fri => Some(DayKey::Friday),
        Weekday::Sat => Some(DayKey::Saturday),
        Weekday::Tue | Weekday::Thu | Weekday::Sun => None,
    }
}

/// The workout scheduled for the given date under the active profile.
#[must_use]
pub fn workout_for(profile: EquipmentProfile, date: NaiveDate) -> Option<&'static WorkoutDay> {
    scheduled_day(date).and_then(|day| catalog::workout(profile, day))
}
