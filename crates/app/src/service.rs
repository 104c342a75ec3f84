use log::{error, warn};

use tourspec_domain::WriteError;

use crate::{Settings, SettingsRepository, SettingsService};

/// Service layer in front of the settings repository. Read failures
/// degrade to the default settings so startup never blocks on a broken
/// store.
pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    fn get_settings(&self) -> Settings {
        match self.repository.read_settings() {
            Ok(settings) => settings,
            Err(err) => {
                warn!("failed to read settings: {err}");
                Settings::default()
            }
        }
    }

    fn set_settings(&self, settings: Settings) -> Result<(), WriteError> {
        let result = self.repository.write_settings(settings);
        if let Err(ref err) = result {
            error!("failed to write settings: {err}");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;
    use tourspec_domain::{EquipmentProfile, ReadError, StorageError};

    use super::*;

    struct FakeRepository {
        settings: Cell<Option<Settings>>,
    }

    impl SettingsRepository for FakeRepository {
        fn read_settings(&self) -> Result<Settings, ReadError> {
            Ok(self.settings.get().unwrap_or_default())
        }

        fn write_settings(&self, settings: Settings) -> Result<(), WriteError> {
            self.settings.set(Some(settings));
            Ok(())
        }
    }

    struct BrokenRepository;

    impl SettingsRepository for BrokenRepository {
        fn read_settings(&self) -> Result<Settings, ReadError> {
            Err(ReadError::Storage(StorageError::Corrupt(String::from(
                "invalid type",
            ))))
        }

        fn write_settings(&self, _: Settings) -> Result<(), WriteError> {
            Err(WriteError::Storage(StorageError::Unavailable(String::from(
                "read-only file system",
            ))))
        }
    }

    #[test]
    fn test_get_settings_round_trip() {
        let service = Service::new(FakeRepository {
            settings: Cell::new(None),
        });
        assert_eq!(service.get_settings(), Settings::default());
        service
            .set_settings(Settings {
                profile: EquipmentProfile::V2,
            })
            .unwrap();
        assert_eq!(
            service.get_settings(),
            Settings {
                profile: EquipmentProfile::V2
            }
        );
    }

    #[test]
    fn test_get_settings_degrades_to_default() {
        let service = Service::new(BrokenRepository);
        assert_eq!(service.get_settings(), Settings::default());
    }

    #[test]
    fn test_set_settings_propagates_write_failure() {
        let service = Service::new(BrokenRepository);
        assert!(service.set_settings(Settings::default()).is_err());
    }
}
