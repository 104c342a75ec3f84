use std::{
    fs::{self, File},
    io::{BufReader, ErrorKind},
    path::PathBuf,
};

use log::warn;
use serde::{Serialize, de::DeserializeOwned};
use tempfile::NamedTempFile;

use tourspec_app::{Settings, SettingsRepository};
use tourspec_domain::{
    ReadError, SessionLog, SessionLogRepository, StorageError, WriteError,
};

#[derive(Debug, Clone, Copy, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
enum StoreKey {
    SessionLogs,
    Settings,
}

impl StoreKey {
    fn file_name(self) -> String {
        format!("{}.json", <&'static str>::from(self))
    }
}

/// Key-value store holding one JSON document per fixed key under a local
/// directory. Reads take a shared file lock; writes go through a
/// temporary file that atomically replaces the document. The store
/// assumes a single active client.
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store located in the platform data directory.
    pub fn in_user_data_dir() -> Result<Self, StorageError> {
        let dir = dirs::data_dir()
            .ok_or_else(|| StorageError::Unavailable(String::from("no platform data directory")))?
            .join("tourspec");
        fs::create_dir_all(&dir).map_err(unavailable)?;
        Ok(Self::new(dir))
    }

    fn read_key<T: DeserializeOwned>(
        &self,
        key: StoreKey,
        default: impl FnOnce() -> T,
    ) -> Result<T, ReadError> {
        let path = self.dir.join(key.file_name());
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(default()),
            Err(err) => return Err(ReadError::Storage(unavailable(err))),
        };
        fs2::FileExt::lock_shared(&file).map_err(|err| ReadError::Storage(unavailable(err)))?;
        let result = serde_json::from_reader(BufReader::new(&file));
        let _ = fs2::FileExt::unlock(&file);
        result.map_err(|err| ReadError::Storage(StorageError::Corrupt(err.to_string())))
    }

    fn write_key<T: Serialize>(&self, key: StoreKey, value: &T) -> Result<(), WriteError> {
        fs::create_dir_all(&self.dir)
            .map_err(|err| WriteError::Storage(unavailable(err)))?;
        let mut file = NamedTempFile::new_in(&self.dir)
            .map_err(|err| WriteError::Storage(unavailable(err)))?;
        serde_json::to_writer_pretty(&mut file, value)
            .map_err(|err| WriteError::Storage(StorageError::Other(Box::new(err))))?;
        file.as_file()
            .sync_all()
            .map_err(|err| WriteError::Storage(unavailable(err)))?;
        file.persist(self.dir.join(key.file_name()))
            .map_err(|err| WriteError::Storage(unavailable(err.error)))?;
        Ok(())
    }
}

fn unavailable(err: std::io::Error) -> StorageError {
    StorageError::Unavailable(err.to_string())
}

impl SessionLogRepository for LocalStore {
    fn read_session_logs(&self) -> Result<Vec<SessionLog>, ReadError> {
        self.read_key(StoreKey::SessionLogs, Vec::new)
    }

    /// Prepends the log to the persisted collection (most recent first)
    /// and rewrites the whole document. An unreadable collection is
    /// replaced rather than allowed to block the save.
    fn append_session_log(&self, session_log: &SessionLog) -> Result<(), WriteError> {
        let mut session_logs = match self.read_session_logs() {
            Ok(session_logs) => session_logs,
            Err(err) => {
                warn!("discarding unreadable session log collection: {err}");
                Vec::new()
            }
        };
        session_logs.insert(0, session_log.clone());
        self.write_key(StoreKey::SessionLogs, &session_logs)
    }
}

impl SettingsRepository for LocalStore {
    fn read_settings(&self) -> Result<Settings, ReadError> {
        self.read_key(StoreKey::Settings, Settings::default)
    }

    fn write_settings(&self, settings: Settings) -> Result<(), WriteError> {
        self.write_key(StoreKey::Settings, &settings)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use tourspec_domain::{DayKey, Effort, EquipmentProfile, ExerciseLog, SessionID, SetLog};

    use super::*;

    fn session_log(id: u128) -> SessionLog {
        SessionLog {
            id: SessionID::from(id),
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            profile: EquipmentProfile::V1,
            day: DayKey::Monday,
            exercises: vec![ExerciseLog {
                exercise_id: String::from("smith-machine-bench-press"),
                sets: vec![SetLog {
                    weight: String::from("50"),
                    reps: String::from("8"),
                    effort: Effort::THREE,
                    completed: true,
                }],
            }],
        }
    }

    #[test]
    fn test_read_session_logs_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        assert_eq!(store.read_session_logs().unwrap(), vec![]);
    }

    #[test]
    fn test_append_session_log_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        let first = session_log(1);
        let second = session_log(2);

        store.append_session_log(&first).unwrap();
        store.append_session_log(&second).unwrap();

        let session_logs = store.read_session_logs().unwrap();
        assert_eq!(session_logs, vec![second.clone(), first.clone()]);
        assert_eq!(
            session_logs
                .iter()
                .filter(|log| log.id == first.id)
                .count(),
            1
        );
    }

    #[test]
    fn test_read_session_logs_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        fs::write(dir.path().join("session_logs.json"), "not json").unwrap();

        assert!(matches!(
            store.read_session_logs(),
            Err(ReadError::Storage(StorageError::Corrupt(_)))
        ));
    }

    #[test]
    fn test_append_session_log_replaces_corrupt_collection() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        fs::write(dir.path().join("session_logs.json"), "not json").unwrap();

        let log = session_log(1);
        store.append_session_log(&log).unwrap();
        assert_eq!(store.read_session_logs().unwrap(), vec![log]);
    }

    #[test]
    fn test_settings_default_and_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        assert_eq!(store.read_settings().unwrap(), Settings::default());

        let settings = Settings {
            profile: EquipmentProfile::V2,
        };
        store.write_settings(settings).unwrap();
        assert_eq!(store.read_settings().unwrap(), settings);
    }

    #[test]
    fn test_write_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path().join("nested"));
        store.append_session_log(&session_log(1)).unwrap();
        assert_eq!(store.read_session_logs().unwrap().len(), 1);
    }
}
