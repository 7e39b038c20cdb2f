use crate::domain::error::DomainError;
use crate::domain::values::profile::ScreenProfile;

/// Named profile summary for listings.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProfileEntry {
    pub name: String,
    pub updated_at: String,
}

pub trait ProfileRepository: Send + Sync {
    fn save(&self, name: &str, profile: &ScreenProfile) -> Result<(), DomainError>;
    fn load(&self, name: &str) -> Result<Option<ScreenProfile>, DomainError>;
    fn list(&self) -> Result<Vec<ProfileEntry>, DomainError>;
    fn delete(&self, name: &str) -> Result<bool, DomainError>;
}
