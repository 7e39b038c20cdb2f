pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::monitor::MonitorUseCase;
use crate::application::profiles::ProfilesUseCase;
use crate::application::screen::{ScreenResult, ScreenUseCase};
use crate::domain::error::DomainError;
use crate::domain::ports::profile_repository::{ProfileEntry, ProfileRepository};
use crate::domain::ports::snapshot_source::{MonitorSnapshot, ScreenMetadata, SnapshotSource};
use crate::domain::values::profile::ScreenProfile;
use crate::domain::values::thresholds::{classify, Metric};
use crate::domain::values::tier::Tier;
use crate::infrastructure::api::client::HttpSnapshotSource;
use crate::infrastructure::fs::file_source::FileSnapshotSource;
use crate::infrastructure::sqlite::migrations::run_migrations;
use crate::infrastructure::sqlite::profile_repo::SqliteProfileRepo;
use rusqlite::Connection;
use std::sync::Arc;

pub struct Proverbs {
    source: Arc<dyn SnapshotSource>,
    screen_uc: ScreenUseCase,
    monitor_uc: MonitorUseCase,
    profiles_uc: ProfilesUseCase,
}

impl Proverbs {
    /// Wire against the HTTP backend and a local profile database.
    pub fn new(
        api_url: &str,
        api_password: Option<String>,
        db_path: &str,
    ) -> Result<Self, DomainError> {
        let source: Arc<dyn SnapshotSource> =
            Arc::new(HttpSnapshotSource::new(api_url.to_string(), api_password));
        Self::with_source(source, db_path)
    }

    /// Wire against a directory of snapshot JSON files (offline mode).
    pub fn with_snapshot_dir(dir: &str, db_path: &str) -> Result<Self, DomainError> {
        let source: Arc<dyn SnapshotSource> = Arc::new(FileSnapshotSource::new(dir));
        Self::with_source(source, db_path)
    }

    fn with_source(source: Arc<dyn SnapshotSource>, db_path: &str) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
        run_migrations(&conn).map_err(DomainError::Database)?;
        let profiles: Arc<dyn ProfileRepository> = Arc::new(SqliteProfileRepo::new(conn));
        Ok(Self::with_providers(source, profiles))
    }

    /// Wire with explicit adapters. Callers own migrations for the profile
    /// repository they pass in.
    pub fn with_providers(
        source: Arc<dyn SnapshotSource>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            source: source.clone(),
            screen_uc: ScreenUseCase::new(source.clone()),
            monitor_uc: MonitorUseCase::new(source),
            profiles_uc: ProfilesUseCase::new(profiles),
        }
    }

    // Delegating methods
    pub async fn screen(
        &self,
        profile: &ScreenProfile,
        limit: Option<usize>,
    ) -> Result<ScreenResult, DomainError> {
        self.screen_uc.execute(profile, limit).await
    }

    pub async fn monitor(&self) -> Result<MonitorSnapshot, DomainError> {
        self.monitor_uc.execute().await
    }

    pub async fn held_symbols(&self) -> Result<Vec<String>, DomainError> {
        self.monitor_uc.held_symbols().await
    }

    pub async fn metadata(&self) -> Result<ScreenMetadata, DomainError> {
        self.source.metadata().await
    }

    pub fn classify(&self, metric: Metric, value: Option<f64>) -> Tier {
        classify(metric, value)
    }

    pub fn profile_save(&self, name: &str, profile: &ScreenProfile) -> Result<(), DomainError> {
        self.profiles_uc.save(name, profile)
    }

    pub fn profile_load(&self, name: &str) -> Result<ScreenProfile, DomainError> {
        self.profiles_uc.load(name)
    }

    pub fn profile_list(&self) -> Result<Vec<ProfileEntry>, DomainError> {
        self.profiles_uc.list()
    }

    pub fn profile_delete(&self, name: &str) -> Result<bool, DomainError> {
        self.profiles_uc.delete(name)
    }
}
