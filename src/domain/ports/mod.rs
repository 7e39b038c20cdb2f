pub mod profile_repository;
pub mod snapshot_source;
