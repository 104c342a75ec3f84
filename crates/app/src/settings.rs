use tourspec_domain::{EquipmentProfile, ReadError, WriteError};

pub trait SettingsService {
    /// The stored settings, falling back to the defaults when the store
    /// is absent or unreadable.
    fn get_settings(&self) -> Settings;
    fn set_settings(&self, settings: Settings) -> Result<(), WriteError>;
}

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, ReadError>;
    fn write_settings(&self, settings: Settings) -> Result<(), WriteError>;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub profile: EquipmentProfile,
}
