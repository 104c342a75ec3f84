#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::{fmt, str::FromStr};

pub mod catalog;
pub mod schedule;

mod coach;
mod error;
mod service;
mod session;

pub use catalog::{Exercise, PlanElement, TrainingBias, WorkoutDay};
pub use coach::{Coach, FallbackReason, Feedback};
pub use error::{ReadError, StorageError, WriteError};
pub use service::Service;
pub use session::{
    Effort, EffortError, ExerciseLog, SessionEditor, SessionID, SessionLog, SessionLogRepository,
    SessionLogService, SetLog, SetUpdate,
};

/// Equipment variant selecting which plan tables apply.
///
/// `V1` assumes commercial gym access (Smith machine, cables, heavy
/// dumbbells), `V2` the limited "Tour Spec" rig (functional trainer,
/// multi-station, dumbbells).
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum EquipmentProfile {
    #[default]
    V1,
    V2,
}

impl EquipmentProfile {
    pub const ALL: [EquipmentProfile; 2] = [EquipmentProfile::V1, EquipmentProfile::V2];
}

impl fmt::Display for EquipmentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                EquipmentProfile::V1 => "V1",
                EquipmentProfile::V2 => "V2",
            }
        )
    }
}

/// Key of a scheduled workout day.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DayKey {
    Monday,
    Wednesday,
    Friday,
    Saturday,
}

impl DayKey {
    pub const ALL: [DayKey; 4] = [
        DayKey::Monday,
        DayKey::Wednesday,
        DayKey::Friday,
        DayKey::Saturday,
    ];
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DayKey::Monday => "monday",
                DayKey::Wednesday => "wednesday",
                DayKey::Friday => "friday",
                DayKey::Saturday => "saturday",
            }
        )
    }
}

impl FromStr for DayKey {
    type Err = ParseDayKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monday" => Ok(DayKey::Monday),
            "wednesday" => Ok(DayKey::Wednesday),
            "friday" => Ok(DayKey::Friday),
            "saturday" => Ok(DayKey::Saturday),
            _ => Err(ParseDayKeyError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown workout day key")]
pub struct ParseDayKeyError;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(EquipmentProfile::V1, "V1")]
    #[case(EquipmentProfile::V2, "V2")]
    fn test_equipment_profile_display(#[case] profile: EquipmentProfile, #[case] expected: &str) {
        assert_eq!(profile.to_string(), expected);
    }

    #[test]
    fn test_equipment_profile_default() {
        assert_eq!(EquipmentProfile::default(), EquipmentProfile::V1);
    }

    #[rstest]
    #[case(DayKey::Monday, "monday")]
    #[case(DayKey::Wednesday, "wednesday")]
    #[case(DayKey::Friday, "friday")]
    #[case(DayKey::Saturday, "saturday")]
    fn test_day_key_display_round_trip(#[case] day: DayKey, #[case] expected: &str) {
        assert_eq!(day.to_string(), expected);
        assert_eq!(expected.parse::<DayKey>(), Ok(day));
    }

    #[test]
    fn test_day_key_from_str_unknown() {
        assert_eq!("tuesday".parse::<DayKey>(), Err(ParseDayKeyError));
    }

    #[test]
    fn test_day_key_serde() {
        assert_eq!(
            serde_json::to_string(&DayKey::Monday).unwrap(),
            r#""monday""#
        );
        assert_eq!(
            serde_json::from_str::<DayKey>(r#""saturday""#).unwrap(),
            DayKey::Saturday
        );
    }
}
