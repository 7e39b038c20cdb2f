use std::sync::Arc;

use crate::domain::error::DomainError;
use crate::domain::ports::profile_repository::{ProfileEntry, ProfileRepository};
use crate::domain::values::profile::ScreenProfile;

pub struct ProfilesUseCase {
    repo: Arc<dyn ProfileRepository>,
}

impl ProfilesUseCase {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    pub fn save(&self, name: &str, profile: &ScreenProfile) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "Profile name must not be empty".into(),
            ));
        }
        self.repo.save(name, profile)
    }

    pub fn load(&self, name: &str) -> Result<ScreenProfile, DomainError> {
        self.repo
            .load(name)?
            .ok_or_else(|| DomainError::NotFound(format!("profile '{name}'")))
    }

    pub fn list(&self) -> Result<Vec<ProfileEntry>, DomainError> {
        self.repo.list()
    }

    pub fn delete(&self, name: &str) -> Result<bool, DomainError> {
        self.repo.delete(name)
    }
}
