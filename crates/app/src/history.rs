use chrono::NaiveDate;
use tourspec_domain::{DayKey, EquipmentProfile, SessionLog};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub profile: EquipmentProfile,
    pub day: DayKey,
    pub completed_sets: usize,
}

impl From<&SessionLog> for HistoryEntry {
    fn from(session_log: &SessionLog) -> Self {
        HistoryEntry {
            date: session_log.date,
            profile: session_log.profile,
            day: session_log.day,
            completed_sets: session_log.completed_sets(),
        }
    }
}

/// Persisted sessions as a history list, newest first.
#[must_use]
pub fn history(session_logs: &[SessionLog]) -> Vec<HistoryEntry> {
    let mut entries = session_logs
        .iter()
        .map(HistoryEntry::from)
        .collect::<Vec<_>>();
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumePoint {
    pub date: NaiveDate,
    pub completed_sets: usize,
}

/// Completed-set volume of the most recent sessions, oldest first so the
/// series reads chronologically left to right.
#[must_use]
pub fn volume_series(session_logs: &[SessionLog], window: usize) -> Vec<VolumePoint> {
    let mut points = history(session_logs)
        .into_iter()
        .take(window)
        .map(|entry| VolumePoint {
            date: entry.date,
            completed_sets: entry.completed_sets,
        })
        .collect::<Vec<_>>();
    points.reverse();
    points
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tourspec_domain::{Effort, ExerciseLog, SessionID, SetLog};

    use super::*;

    fn session_log(id: u128, date: NaiveDate, completed: usize) -> SessionLog {
        SessionLog {
            id: SessionID::from(id),
            date,
            profile: EquipmentProfile::V1,
            day: DayKey::Monday,
            exercises: vec![ExerciseLog {
                exercise_id: String::from("smith-machine-bench-press"),
                sets: (0..3)
                    .map(|i| SetLog {
                        weight: String::from("50"),
                        reps: String::from("8"),
                        effort: Effort::TWO,
                        completed: i < completed,
                    })
                    .collect(),
            }],
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    #[test]
    fn test_history_sorted_newest_first() {
        let session_logs = vec![
            session_log(1, date(2), 3),
            session_log(2, date(6), 1),
            session_log(3, date(4), 2),
        ];
        assert_eq!(
            history(&session_logs)
                .iter()
                .map(|entry| (entry.date, entry.completed_sets))
                .collect::<Vec<_>>(),
            vec![(date(6), 1), (date(4), 2), (date(2), 3)]
        );
    }

    #[test]
    fn test_volume_series_chronological_window() {
        let session_logs = (1..=9)
            .map(|day| session_log(u128::from(day), date(day), 2))
            .collect::<Vec<_>>();
        let points = volume_series(&session_logs, 7);
        assert_eq!(points.len(), 7);
        assert_eq!(points.first().unwrap().date, date(3));
        assert_eq!(points.last().unwrap().date, date(9));
    }

    #[test]
    fn test_volume_series_empty() {
        assert_eq!(volume_series(&[], 7), Vec::<VolumePoint>::new());
    }
}
