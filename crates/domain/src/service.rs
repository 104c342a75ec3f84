use log::{error, warn};

use crate::{
    ExerciseLog, SessionLog, SessionLogRepository, SessionLogService, WriteError,
};

/// Service layer in front of a repository, responsible for logging and
/// for degrading read failures into empty results.
pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: SessionLogRepository> SessionLogService for Service<R> {
    fn session_logs(&self) -> Vec<SessionLog> {
        match self.repository.read_session_logs() {
            Ok(session_logs) => session_logs,
            Err(err) => {
                warn!("failed to read session logs: {err}");
                Vec::new()
            }
        }
    }

    fn append_session_log(&self, session_log: &SessionLog) -> Result<(), WriteError> {
        let result = self.repository.append_session_log(session_log);
        if let Err(ref err) = result {
            error!("failed to append session log: {err}");
        }
        result
    }

    fn last_log_for_exercise(&self, exercise_id: &str) -> Option<ExerciseLog> {
        self.session_logs().into_iter().find_map(|session_log| {
            session_log
                .exercises
                .into_iter()
                .find(|log| log.exercise_id == exercise_id)
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use crate::{
        DayKey, Effort, EquipmentProfile, ReadError, SessionID, SetLog, StorageError,
    };

    use super::*;

    struct FakeRepository {
        session_logs: Vec<SessionLog>,
    }

    impl SessionLogRepository for FakeRepository {
        fn read_session_logs(&self) -> Result<Vec<SessionLog>, ReadError> {
            Ok(self.session_logs.clone())
        }

        fn append_session_log(&self, _: &SessionLog) -> Result<(), WriteError> {
            Ok(())
        }
    }

    struct BrokenRepository;

    impl SessionLogRepository for BrokenRepository {
        fn read_session_logs(&self) -> Result<Vec<SessionLog>, ReadError> {
            Err(ReadError::Storage(StorageError::Corrupt(String::from(
                "unexpected end of input",
            ))))
        }

        fn append_session_log(&self, _: &SessionLog) -> Result<(), WriteError> {
            Err(WriteError::Storage(StorageError::Unavailable(String::from(
                "read-only file system",
            ))))
        }
    }

    fn session_log(id: u128, exercise_id: &str, weight: &str) -> SessionLog {
        SessionLog {
            id: SessionID::from(id),
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            profile: EquipmentProfile::V1,
            day: DayKey::Monday,
            exercises: vec![ExerciseLog {
                exercise_id: exercise_id.to_string(),
                sets: vec![SetLog {
                    weight: weight.to_string(),
                    reps: String::from("8"),
                    effort: Effort::TWO,
                    completed: true,
                }],
            }],
        }
    }

    #[test]
    fn test_session_logs_degrade_to_empty_on_read_failure() {
        let service = Service::new(BrokenRepository);
        assert_eq!(service.session_logs(), Vec::<SessionLog>::new());
        assert_eq!(service.last_log_for_exercise("bench"), None);
    }

    #[test]
    fn test_append_session_log_propagates_write_failure() {
        let service = Service::new(BrokenRepository);
        assert!(
            service
                .append_session_log(&session_log(1, "bench", "40"))
                .is_err()
        );
    }

    #[test]
    fn test_last_log_for_exercise_picks_most_recent() {
        // The collection is ordered most recently appended first.
        let service = Service::new(FakeRepository {
            session_logs: vec![
                session_log(2, "bench", "45"),
                session_log(1, "bench", "40"),
            ],
        });
        assert_eq!(
            service.last_log_for_exercise("bench").unwrap().sets[0].weight,
            "45"
        );
        assert_eq!(service.last_log_for_exercise("row"), None);
    }
}
