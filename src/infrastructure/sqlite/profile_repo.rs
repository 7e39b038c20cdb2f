use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Mutex;

use crate::domain::error::DomainError;
use crate::domain::ports::profile_repository::{ProfileEntry, ProfileRepository};
use crate::domain::values::profile::ScreenProfile;

/// Stores profiles as one JSON blob per name. Schema stays flat on purpose:
/// profiles are read and written whole, never queried by field.
pub struct SqliteProfileRepo {
    conn: Mutex<Connection>,
}

impl SqliteProfileRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

impl ProfileRepository for SqliteProfileRepo {
    fn save(&self, name: &str, profile: &ScreenProfile) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let json = serde_json::to_string(profile)
            .map_err(|e| DomainError::Parse(format!("Profile serialization failed: {e}")))?;
        conn.execute(
            "INSERT INTO profiles (name, profile, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(name) DO UPDATE SET profile = ?2, updated_at = ?3",
            params![name, json, Utc::now().to_rfc3339()],
        )
        .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<ScreenProfile>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let json: Option<String> = conn
            .query_row(
                "SELECT profile FROM profiles WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| DomainError::Database(e.to_string()))?;

        match json {
            None => Ok(None),
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| DomainError::Parse(format!("Stored profile '{name}' is corrupt: {e}"))),
        }
    }

    fn list(&self) -> Result<Vec<ProfileEntry>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare("SELECT name, updated_at FROM profiles ORDER BY name")
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let entries = stmt
            .query_map([], |row| {
                Ok(ProfileEntry {
                    name: row.get(0)?,
                    updated_at: row.get(1)?,
                })
            })
            .map_err(|e| DomainError::Database(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(entries)
    }

    fn delete(&self, name: &str) -> Result<bool, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let affected = conn
            .execute("DELETE FROM profiles WHERE name = ?1", params![name])
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(affected > 0)
    }
}
